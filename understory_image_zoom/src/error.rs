// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported when attaching a zoomer.

use core::fmt;

/// Error returned when a zoomer cannot be attached.
///
/// Only precondition violations are reported. Degenerate geometry and
/// out-of-range zoom requests are absorbed by the viewport instead.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ZoomError {
    /// The container size was negative or not finite.
    InvalidContainer {
        /// Rejected container width.
        width: f64,
        /// Rejected container height.
        height: f64,
    },
    /// A configuration value was not a finite, strictly positive number.
    InvalidConfig {
        /// Name of the rejected field.
        field: &'static str,
        /// Rejected value.
        value: f64,
    },
}

impl fmt::Display for ZoomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidContainer { width, height } => {
                write!(f, "invalid container size {width}x{height}")
            }
            Self::InvalidConfig { field, value } => {
                write!(f, "invalid zoom configuration: {field} = {value}")
            }
        }
    }
}

impl core::error::Error for ZoomError {}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::ZoomError;

    #[test]
    fn display_names_the_offending_value() {
        let err = ZoomError::InvalidContainer {
            width: -1.0,
            height: 20.0,
        };
        assert_eq!(err.to_string(), "invalid container size -1x20");

        let err = ZoomError::InvalidConfig {
            field: "zoom_step",
            value: 0.0,
        };
        assert_eq!(err.to_string(), "invalid zoom configuration: zoom_step = 0");
    }
}
