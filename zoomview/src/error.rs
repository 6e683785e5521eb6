// Copyright 2025 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Why a programmatic call was not applied.
///
/// Rejected calls leave the view untouched.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Rejection {
    /// The view was torn down.
    TornDown,
    /// Zooming is disabled in the configuration.
    ZoomDisabled,
    /// The requested zoom level is not finite and positive, or no zoom step
    /// is configured to derive it from.
    InvalidLevel,
    /// The requested zoom level lies outside the configured bounds.
    OutOfRange {
        /// Requested level.
        level: f64,
        /// Lower bound, if any.
        min: Option<f64>,
        /// Upper bound, if any.
        max: Option<f64>,
    },
    /// The container has not been measured yet.
    GeometryNotReady,
    /// No static pin position is configured.
    NoStaticPin,
    /// The content size is not configured.
    ContentSizeUnknown,
    /// A touch session is live; it owns the transform until it ends.
    GestureActive,
    /// A `*_before` hook vetoed the change.
    Intercepted,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TornDown => f.write_str("the view has been torn down"),
            Self::ZoomDisabled => f.write_str("zooming is disabled"),
            Self::InvalidLevel => f.write_str("zoom level must be finite and positive"),
            Self::OutOfRange { level, min, max } => {
                write!(f, "zoom level {level} is outside [")?;
                match min {
                    Some(min) => write!(f, "{min}")?,
                    None => f.write_str("-")?,
                }
                f.write_str(", ")?;
                match max {
                    Some(max) => write!(f, "{max}")?,
                    None => f.write_str("-")?,
                }
                f.write_str("]")
            }
            Self::GeometryNotReady => f.write_str("the container has not been measured"),
            Self::NoStaticPin => f.write_str("no static pin position is configured"),
            Self::ContentSizeUnknown => f.write_str("the content size is not configured"),
            Self::GestureActive => f.write_str("a touch gesture is in progress"),
            Self::Intercepted => f.write_str("the change was vetoed by a handler"),
        }
    }
}

impl core::error::Error for Rejection {}
