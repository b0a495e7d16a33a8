//! Double-slit pattern pipeline
//!
//! Computes the intensity profile with the built-in experiment parameters and
//! renders the annotated chart to `double_slit_pattern.png` in the current
//! directory

use std::process::Command;

use double_slit::{
    envelope_minima, interference_maxima, plot, DoubleSlit, Screen, MAXIMA_ORDERS, MINIMA_ORDERS,
};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let slit = DoubleSlit::default();
    let screen = Screen::default();

    let pattern = slit.pattern(&screen);
    log::info!("Computed {} intensity samples", pattern.position.len());

    let maxima = interference_maxima(&slit, &screen, MAXIMA_ORDERS);
    let minima = envelope_minima(&slit, &screen, MINIMA_ORDERS);

    plot::render(
        &slit,
        &screen,
        &pattern,
        &maxima,
        &minima,
        plot::PATTERN_FILENAME,
    )?;

    show(plot::PATTERN_FILENAME);
    Ok(())
}

/// Hands the saved chart to the platform image viewer, if any
fn show(path: &str) {
    #[cfg(target_os = "macos")]
    let viewer = "open";
    #[cfg(not(target_os = "macos"))]
    let viewer = "xdg-open";
    if let Err(e) = Command::new(viewer).arg(path).spawn() {
        log::warn!("No image viewer available ({e})");
    }
}
