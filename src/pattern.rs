//! Fraunhofer intensity pattern
//!
//! Two-source interference fringes modulated by the single-slit diffraction
//! envelope, sampled across the observation screen

use std::f64::consts::PI;

use crate::screen::Screen;

/// Double-slit geometry and illumination
#[derive(Debug, Clone)]
pub struct DoubleSlit {
    /// Center-to-center slit separation [m]
    pub separation: f64,
    /// Width of each slit aperture [m]
    pub width: f64,
    /// Wavelength of the illuminating light [m]
    pub wavelength: f64,
}
impl Default for DoubleSlit {
    fn default() -> Self {
        let separation = 0.5e-3;
        Self {
            separation,
            width: separation / 4.,
            wavelength: 550e-9,
        }
    }
}
impl DoubleSlit {
    /// Interference phase α = πs·sinθ/λ [rd]
    pub fn interference_phase(&self, theta: f64) -> f64 {
        PI * self.separation * theta.sin() / self.wavelength
    }
    /// Diffraction phase β = πa·sinθ/λ [rd]
    pub fn diffraction_phase(&self, theta: f64) -> f64 {
        PI * self.width * theta.sin() / self.wavelength
    }
    /// Samples the intensity pattern across the screen
    pub fn pattern(&self, screen: &Screen) -> Pattern {
        let position = screen.positions();
        let (interference, envelope): (Vec<_>, Vec<_>) = position
            .iter()
            .map(|&y| {
                let theta = screen.angle(y);
                (
                    cos2(self.interference_phase(theta)),
                    sinc2(self.diffraction_phase(theta)),
                )
            })
            .unzip();
        let total = interference
            .iter()
            .zip(&envelope)
            .map(|(i, e)| i * e)
            .collect();
        Pattern {
            position,
            interference,
            envelope,
            total,
        }
    }
}

/// Two-source interference intensity cos²α
fn cos2(alpha: f64) -> f64 {
    alpha.cos().powi(2)
}
/// Single-slit envelope intensity sinc²β, continued to 1 at exactly β = 0
fn sinc2(beta: f64) -> f64 {
    if beta == 0. {
        1.
    } else {
        (beta.sin() / beta).powi(2)
    }
}

/// Intensity profile sampled across the screen
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    /// Screen position [m]
    pub position: Vec<f64>,
    /// Two-source interference intensity cos²α
    pub interference: Vec<f64>,
    /// Single-slit diffraction envelope sinc²β
    pub envelope: Vec<f64>,
    /// Product of envelope and interference intensities
    pub total: Vec<f64>,
}
impl Pattern {
    /// Largest total intensity in the sample
    pub fn peak(&self) -> f64 {
        self.total.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intensity_bounds() {
        let pattern = DoubleSlit::default().pattern(&Screen::default());
        assert!(pattern
            .interference
            .iter()
            .chain(&pattern.envelope)
            .chain(&pattern.total)
            .all(|i| (0f64..=1f64).contains(i)));
    }

    #[test]
    fn total_is_product() {
        let pattern = DoubleSlit::default().pattern(&Screen::default());
        pattern
            .total
            .iter()
            .zip(pattern.interference.iter().zip(&pattern.envelope))
            .for_each(|(&t, (&i, &e))| assert_eq!(t, i * e));
    }

    #[test]
    fn center_envelope() {
        let slit = DoubleSlit::default();
        let screen = Screen::default();
        let beta = slit.diffraction_phase(screen.angle(0.));
        assert_eq!(beta, 0.);
        assert_eq!(sinc2(beta), 1.);
    }

    #[test]
    fn interference_periodicity() {
        for alpha in [0.3, 1.7, 12.9, -5.4] {
            assert!((cos2(alpha) - cos2(alpha + PI)).abs() < 1e-12);
        }
    }

    #[test]
    fn recompute() {
        let slit = DoubleSlit::default();
        let screen = Screen::default();
        assert_eq!(slit.pattern(&screen), slit.pattern(&screen));
    }
}
