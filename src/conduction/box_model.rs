//! Product solution for a rectangular box cooled through all six faces.
//!
//! The box spans `[-X, X] × [-Y, Y] × [-Z, Z]` about its centre and every face is
//! held at the surface temperature. The three axes are independent, so the
//! dimensionless temperature is `θ = θx · θy · θz` with each factor from
//! [`axis_theta_with`]. Positions are measured from the centre; physically
//! `|x| ≤ X` and so on, but this is not enforced.

use serde::{Deserialize, Serialize};

use crate::conduction::series::{DEFAULT_SERIES_TERMS, SeriesConfig, axis_theta, axis_theta_with};
use crate::core::{NumericError, NumericResult, require_positive};

/// Half-widths of the box along each axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxGeometry {
    /// Half-width `X` along x (m).
    pub half_x: f64,
    /// Half-width `Y` along y (m).
    pub half_y: f64,
    /// Half-width `Z` along z (m).
    pub half_z: f64,
}

impl BoxGeometry {
    /// Validated geometry. Every half-width must be `> 0`.
    pub fn new(half_x: f64, half_y: f64, half_z: f64) -> NumericResult<Self> {
        let geometry = Self {
            half_x,
            half_y,
            half_z,
        };
        geometry.validate()?;
        Ok(geometry)
    }

    /// A cube of half-width `half`.
    pub fn cube(half: f64) -> NumericResult<Self> {
        Self::new(half, half, half)
    }

    pub fn validate(&self) -> NumericResult<()> {
        require_positive("box half_x", self.half_x)?;
        require_positive("box half_y", self.half_y)?;
        require_positive("box half_z", self.half_z)?;
        Ok(())
    }
}

/// Sampling point, measured from the box centre.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoxPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl BoxPoint {
    pub const CENTER: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// One point of a cooling curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoolingSample {
    pub time_s: f64,
    pub temperature: f64,
}

/// A box at a uniform initial temperature whose faces are held at a fixed
/// surface temperature from `t = 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxCoolingModel {
    pub geometry: BoxGeometry,
    /// Thermal diffusivity α (m²/s). Expected `>= 0`; not validated.
    pub diffusivity: f64,
    pub initial_temperature: f64,
    pub surface_temperature: f64,
    pub series: SeriesConfig,
}

impl BoxCoolingModel {
    /// Starts a model builder.
    ///
    /// ```rust
    /// use numkit::conduction::{BoxCoolingModel, BoxPoint};
    ///
    /// let model = BoxCoolingModel::builder()
    ///     .half_widths(1.0, 1.0, 1.0)
    ///     .diffusivity(1.0e-4)
    ///     .initial_temperature(100.0)
    ///     .surface_temperature(20.0)
    ///     .build()
    ///     .unwrap();
    ///
    /// let t = model.temperature(3600.0, BoxPoint::CENTER).unwrap();
    /// assert!(t > 20.0 && t < 100.0);
    /// ```
    pub fn builder() -> BoxCoolingModelBuilder {
        BoxCoolingModelBuilder::default()
    }

    /// Dimensionless product `θx · θy · θz` at `point` after `time` seconds.
    pub fn theta(&self, time: f64, point: BoxPoint) -> NumericResult<f64> {
        let g = &self.geometry;
        let alpha = self.diffusivity;
        let theta_x = axis_theta_with(&self.series, point.x, g.half_x, time, alpha)?.theta;
        let theta_y = axis_theta_with(&self.series, point.y, g.half_y, time, alpha)?.theta;
        let theta_z = axis_theta_with(&self.series, point.z, g.half_z, time, alpha)?.theta;
        Ok(theta_x * theta_y * theta_z)
    }

    /// Temperature at `point` after `time` seconds.
    pub fn temperature(&self, time: f64, point: BoxPoint) -> NumericResult<f64> {
        let theta = self.theta(time, point)?;
        Ok(self.surface_temperature + (self.initial_temperature - self.surface_temperature) * theta)
    }

    pub fn center_temperature(&self, time: f64) -> NumericResult<f64> {
        self.temperature(time, BoxPoint::CENTER)
    }

    /// Temperature at `point` for each of `times`, in input order.
    pub fn cooling_curve(&self, point: BoxPoint, times: &[f64]) -> NumericResult<Vec<CoolingSample>> {
        times
            .iter()
            .map(|&time_s| -> NumericResult<CoolingSample> {
                Ok(CoolingSample {
                    time_s,
                    temperature: self.temperature(time_s, point)?,
                })
            })
            .collect()
    }
}

/// Builder for [`BoxCoolingModel`].
#[derive(Debug, Clone, Default)]
pub struct BoxCoolingModelBuilder {
    geometry: Option<BoxGeometry>,
    diffusivity: Option<f64>,
    initial_temperature: Option<f64>,
    surface_temperature: Option<f64>,
    series: Option<SeriesConfig>,
}

impl BoxCoolingModelBuilder {
    pub fn geometry(mut self, geometry: BoxGeometry) -> Self {
        self.geometry = Some(geometry);
        self
    }

    pub fn half_widths(mut self, half_x: f64, half_y: f64, half_z: f64) -> Self {
        self.geometry = Some(BoxGeometry {
            half_x,
            half_y,
            half_z,
        });
        self
    }

    pub fn diffusivity(mut self, diffusivity: f64) -> Self {
        self.diffusivity = Some(diffusivity);
        self
    }

    pub fn initial_temperature(mut self, temperature: f64) -> Self {
        self.initial_temperature = Some(temperature);
        self
    }

    pub fn surface_temperature(mut self, temperature: f64) -> Self {
        self.surface_temperature = Some(temperature);
        self
    }

    pub fn series(mut self, series: SeriesConfig) -> Self {
        self.series = Some(series);
        self
    }

    pub fn series_terms(mut self, terms: usize) -> Self {
        self.series = Some(self.series.unwrap_or_default().with_terms(terms));
        self
    }

    pub fn build(self) -> NumericResult<BoxCoolingModel> {
        let geometry = self
            .geometry
            .ok_or_else(|| NumericError::InvalidInput("box geometry is required".to_string()))?;
        geometry.validate()?;

        let diffusivity = self
            .diffusivity
            .ok_or_else(|| NumericError::InvalidInput("diffusivity is required".to_string()))?;
        let initial_temperature = self.initial_temperature.ok_or_else(|| {
            NumericError::InvalidInput("initial temperature is required".to_string())
        })?;
        let surface_temperature = self.surface_temperature.ok_or_else(|| {
            NumericError::InvalidInput("surface temperature is required".to_string())
        })?;

        let series = self.series.unwrap_or_default();
        series.validate()?;

        Ok(BoxCoolingModel {
            geometry,
            diffusivity,
            initial_temperature,
            surface_temperature,
            series,
        })
    }
}

/// Box temperature at `(x, y, z)` after `time` seconds, with each axis summed over
/// `iterations` terms.
///
/// `text + (tinit - text) · θx·θy·θz`. Fails when any half-width is `<= 0` or
/// `iterations == 0`. Use [`DEFAULT_SERIES_TERMS`] for the usual depth.
#[allow(clippy::too_many_arguments)]
pub fn box_temperature(
    time: f64,
    x: f64,
    y: f64,
    z: f64,
    alpha: f64,
    half_x: f64,
    half_y: f64,
    half_z: f64,
    tinit: f64,
    text: f64,
    iterations: usize,
) -> NumericResult<f64> {
    let theta_x = axis_theta(iterations, x, half_x, time, alpha)?;
    let theta_y = axis_theta(iterations, y, half_y, time, alpha)?;
    let theta_z = axis_theta(iterations, z, half_z, time, alpha)?;
    Ok(text + (tinit - text) * (theta_x * theta_y * theta_z))
}

/// [`box_temperature`] at the default series depth.
#[allow(clippy::too_many_arguments)]
pub fn box_temperature_default(
    time: f64,
    x: f64,
    y: f64,
    z: f64,
    alpha: f64,
    half_x: f64,
    half_y: f64,
    half_z: f64,
    tinit: f64,
    text: f64,
) -> NumericResult<f64> {
    box_temperature(
        time,
        x,
        y,
        z,
        alpha,
        half_x,
        half_y,
        half_z,
        tinit,
        text,
        DEFAULT_SERIES_TERMS,
    )
}
