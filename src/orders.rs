//! Analytic fringe order positions
//!
//! Closed-form positions of the interference maxima and of the diffraction
//! envelope minima, no root-finding involved

use std::ops::RangeInclusive;

use crate::{pattern::DoubleSlit, screen::Screen};

/// Interference maxima orders drawn on the chart
pub const MAXIMA_ORDERS: RangeInclusive<i32> = -8..=8;
/// Diffraction envelope minima orders (the envelope has no zero at n = 0)
pub const MINIMA_ORDERS: [i32; 8] = [-4, -3, -2, -1, 1, 2, 3, 4];
/// Interference orders that get a text annotation on the chart
pub const LABELED_ORDERS: [i32; 5] = [-8, -4, 0, 4, 8];

/// A fringe order and its position on the screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    /// Fringe order
    pub order: i32,
    /// Position on the screen [m]
    pub position: f64,
}
impl Marker {
    /// True if the marker falls within ±`bound` of the optical axis
    pub fn is_visible(&self, bound: f64) -> bool {
        self.position.abs() <= bound
    }
}

/// Interference maxima positions y = mλL/s, aligned with `orders`
pub fn interference_maxima(
    slit: &DoubleSlit,
    screen: &Screen,
    orders: impl IntoIterator<Item = i32>,
) -> Vec<Marker> {
    orders
        .into_iter()
        .map(|m| Marker {
            order: m,
            position: m as f64 * slit.wavelength * screen.distance / slit.separation,
        })
        .collect()
}

/// Diffraction envelope minima positions y = nλL/a, aligned with `orders`
pub fn envelope_minima(
    slit: &DoubleSlit,
    screen: &Screen,
    orders: impl IntoIterator<Item = i32>,
) -> Vec<Marker> {
    orders
        .into_iter()
        .map(|n| Marker {
            order: n,
            position: n as f64 * slit.wavelength * screen.distance / slit.width,
        })
        .collect()
}
