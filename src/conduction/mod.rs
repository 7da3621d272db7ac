//! Transient conduction cooling of a rectangular solid by truncated Fourier series.
//!
//! [`axis_theta`] gives the one-dimensional slab solution; [`box_temperature`] and
//! [`BoxCoolingModel`] compose three of them into the 3-D product solution.

pub mod box_model;
pub mod series;

pub use box_model::{
    BoxCoolingModel, BoxCoolingModelBuilder, BoxGeometry, BoxPoint, CoolingSample,
    box_temperature, box_temperature_default,
};
pub use series::{
    DEFAULT_SERIES_TERMS, SeriesConfig, SeriesEvaluation, axis_theta, axis_theta_with,
    term_envelope,
};
