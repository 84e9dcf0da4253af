// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoom bounds and step size.

use crate::ZoomError;

/// Default upper zoom bound (300%).
pub const DEFAULT_MAX_SCALE: f64 = 3.0;

/// Default fractional change applied by one zoom step (25%).
pub const DEFAULT_ZOOM_STEP: f64 = 0.25;

/// Constants fixed when a viewport is constructed.
///
/// ```
/// use understory_image_zoom::ZoomConfig;
///
/// let config = ZoomConfig::default().with_max_scale(8.0);
/// assert_eq!(config.max_scale(), 8.0);
/// assert_eq!(config.zoom_step(), 0.25);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomConfig {
    max_scale: f64,
    zoom_step: f64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            max_scale: DEFAULT_MAX_SCALE,
            zoom_step: DEFAULT_ZOOM_STEP,
        }
    }
}

impl ZoomConfig {
    /// Returns a copy with the given upper zoom bound.
    #[must_use]
    pub fn with_max_scale(mut self, max_scale: f64) -> Self {
        self.max_scale = max_scale;
        self
    }

    /// Returns a copy with the given step used by wheel and zoom commands.
    #[must_use]
    pub fn with_zoom_step(mut self, zoom_step: f64) -> Self {
        self.zoom_step = zoom_step;
        self
    }

    /// Upper zoom bound.
    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.max_scale
    }

    /// Fractional change applied by one zoom step.
    #[must_use]
    pub fn zoom_step(&self) -> f64 {
        self.zoom_step
    }

    /// Checks that both values are finite and strictly positive.
    pub fn validate(&self) -> Result<(), ZoomError> {
        check_positive("max_scale", self.max_scale)?;
        check_positive("zoom_step", self.zoom_step)
    }
}

fn check_positive(field: &'static str, value: f64) -> Result<(), ZoomError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ZoomError::InvalidConfig { field, value })
    }
}
