//! Double-slit diffraction and interference pattern
//!
//! Computes the Fraunhofer intensity profile of a double-slit experiment on a
//! distant screen and renders it as an annotated chart with the analytic
//! fringe order positions overlaid

pub mod orders;
pub mod pattern;
pub mod plot;
pub mod screen;

pub use orders::{
    envelope_minima, interference_maxima, Marker, LABELED_ORDERS, MAXIMA_ORDERS, MINIMA_ORDERS,
};
pub use pattern::{DoubleSlit, Pattern};
pub use plot::{render, PlotError, FIGURE_SIZE, PATTERN_FILENAME};
pub use screen::Screen;
