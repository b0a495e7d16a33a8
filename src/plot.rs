//! Pattern chart
//!
//! Renders the intensity curves and the fringe order reference lines into a
//! single annotated PNG

use std::path::Path;

use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::{
    orders::{Marker, LABELED_ORDERS},
    pattern::{DoubleSlit, Pattern},
    screen::Screen,
};

/// Output image file name
pub const PATTERN_FILENAME: &str = "double_slit_pattern.png";
/// 14in x 7in figure at 300 dot/in
pub const FIGURE_SIZE: (u32, u32) = (4200, 2100);

#[derive(thiserror::Error, Debug)]
pub enum PlotError {
    #[error("Failed to render the pattern chart: {0}")]
    Draw(String),
}
impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for PlotError {
    fn from(e: DrawingAreaErrorKind<E>) -> Self {
        PlotError::Draw(e.to_string())
    }
}
type Result<T> = std::result::Result<T, PlotError>;

/// Plots the intensity curves and overlays the fringe order markers
///
/// The total intensity is normalized to its own peak; the vertical reference
/// lines are restricted to the sampled extent of the screen
pub fn render<P: AsRef<Path>>(
    slit: &DoubleSlit,
    screen: &Screen,
    pattern: &Pattern,
    maxima: &[Marker],
    minima: &[Marker],
    path: P,
) -> Result<()> {
    log::info!("Rendering {:?}...", path.as_ref());

    let color = |i: usize| {
        let c = colorous::CATEGORY10[i];
        RGBColor(c.r, c.g, c.b)
    };
    let (blue, orange, red, purple, gray) = (color(0), color(1), color(3), color(4), color(7));

    let x_max = *pattern.position.last().unwrap();
    let y_mm: Vec<f64> = pattern.position.iter().map(|y| y * 1e3).collect();
    let x_bound = *y_mm.last().unwrap();
    let peak = pattern.peak();

    let plot = BitMapBackend::new(path.as_ref(), FIGURE_SIZE).into_drawing_area();
    plot.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&plot)
        .caption(
            format!(
                "Double-Slit Interference Pattern (λ = {:.0} nm, s = {:.1} mm, L = {:.1} m)",
                slit.wavelength * 1e9,
                slit.separation * 1e3,
                screen.distance
            ),
            ("sans-serif", 90),
        )
        .set_label_area_size(LabelAreaPosition::Left, 140)
        .set_label_area_size(LabelAreaPosition::Bottom, 130)
        .margin(40)
        .build_cartesian_2d(-x_bound..x_bound, -0.05..1.15)?;
    chart
        .configure_mesh()
        .x_desc("Position on Screen y (mm)")
        .y_desc("Relative Intensity")
        .label_style(("sans-serif", 50))
        .axis_desc_style(("sans-serif", 55))
        .light_line_style(&BLACK.mix(0.1))
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            y_mm.iter()
                .zip(&pattern.total)
                .map(|(&x, &i)| (x, i / peak)),
            blue.stroke_width(4),
        ))?
        .label("Double-Slit Pattern")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 60, y)], blue.stroke_width(4)));
    chart
        .draw_series(LineSeries::new(
            y_mm.iter().zip(&pattern.interference).map(|(&x, &i)| (x, i)),
            purple.mix(0.5).stroke_width(4),
        ))?
        .label("Interference Only")
        .legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 60, y)], purple.mix(0.5).stroke_width(4))
        });
    chart
        .draw_series(LineSeries::new(
            y_mm.iter().zip(&pattern.envelope).map(|(&x, &i)| (x, i)),
            orange.mix(0.7).stroke_width(4),
        ))?
        .label("Diffraction Envelope")
        .legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 60, y)], orange.mix(0.7).stroke_width(4))
        });

    // one legend entry per reference line category
    let mut maxima_labeled = false;
    for marker in maxima.iter().filter(|marker| marker.is_visible(x_max)) {
        let x = marker.position * 1e3;
        let anno = chart.draw_series(DashedLineSeries::new(
            [(x, -0.05), (x, 1.15)],
            14,
            10,
            gray.mix(0.3).stroke_width(3),
        ))?;
        if !maxima_labeled {
            anno.label("Interference Maxima (order m)").legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 60, y)], gray.mix(0.3).stroke_width(3))
            });
            maxima_labeled = true;
        }
        if LABELED_ORDERS.contains(&marker.order) {
            chart.plotting_area().draw(&Text::new(
                format!("m={}", marker.order),
                (x, 1.08),
                ("sans-serif", 48)
                    .into_font()
                    .color(&gray)
                    .pos(Pos::new(HPos::Center, VPos::Bottom)),
            ))?;
        }
    }
    let mut minima_labeled = false;
    for marker in minima.iter().filter(|marker| marker.is_visible(x_max)) {
        let x = marker.position * 1e3;
        let anno = chart.draw_series(DashedLineSeries::new(
            [(x, -0.05), (x, 1.15)],
            5,
            8,
            red.mix(0.8).stroke_width(3),
        ))?;
        if !minima_labeled {
            anno.label("Envelope Minima").legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 60, y)], red.mix(0.8).stroke_width(3))
            });
            minima_labeled = true;
        }
    }

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.8))
        .position(SeriesLabelPosition::UpperRight)
        .label_font(("sans-serif", 48))
        .draw()?;
    plot.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;
    use crate::orders::{envelope_minima, interference_maxima, MAXIMA_ORDERS, MINIMA_ORDERS};

    #[test]
    fn pattern_chart() -> std::result::Result<(), Box<dyn Error>> {
        let slit = DoubleSlit::default();
        let screen = Screen::default();
        let pattern = slit.pattern(&screen);
        let maxima = interference_maxima(&slit, &screen, MAXIMA_ORDERS);
        let minima = envelope_minima(&slit, &screen, MINIMA_ORDERS);
        let path = std::env::temp_dir().join(PATTERN_FILENAME);

        render(&slit, &screen, &pattern, &maxima, &minima, &path)?;
        assert!(std::fs::metadata(&path)?.len() > 0);
        assert_eq!(image::image_dimensions(&path)?, FIGURE_SIZE);

        // a second run overwrites the file
        render(&slit, &screen, &pattern, &maxima, &minima, &path)?;
        assert_eq!(image::image_dimensions(&path)?, FIGURE_SIZE);
        Ok(())
    }
}
