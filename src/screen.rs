/// Observation screen geometry and position sampling
#[derive(Debug, Clone)]
pub struct Screen {
    /// Distance from the slit plane to the screen [m]
    pub distance: f64,
    /// Half extent of the sampled region around the optical axis [m]
    pub half_width: f64,
    /// Number of evenly spaced position samples
    pub n_sample: usize,
}
impl Default for Screen {
    fn default() -> Self {
        Self {
            distance: 2f64,
            half_width: 21e-3,
            n_sample: 2000,
        }
    }
}
impl Screen {
    /// Evenly spaced screen positions over ±`half_width` [m]
    pub fn positions(&self) -> Vec<f64> {
        let width = 2. * self.half_width;
        (0..self.n_sample)
            .map(|i| -self.half_width + width * (i as f64 / (self.n_sample - 1) as f64))
            .collect()
    }
    /// Angle subtended at the slits by the screen position `y` [rd]
    pub fn angle(&self, y: f64) -> f64 {
        (y / self.distance).atan()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sampling() {
        let screen = Screen::default();
        let y = screen.positions();
        assert_eq!(y.len(), 2000);
        assert_eq!(y[0], -screen.half_width);
        assert_eq!(*y.last().unwrap(), screen.half_width);
        let step = y[1] - y[0];
        assert!(y
            .windows(2)
            .all(|w| ((w[1] - w[0]) - step).abs() < 1e-12 * step));
    }

    #[test]
    fn on_axis_angle() {
        let screen = Screen::default();
        assert_eq!(screen.angle(0.), 0.);
    }

    #[test]
    fn angle_sign() {
        let screen = Screen::default();
        assert!((screen.angle(-1e-3) + screen.angle(1e-3)).abs() < 1e-15);
    }
}
