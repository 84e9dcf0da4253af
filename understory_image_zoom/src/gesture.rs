// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture session tracking for drag-to-pan and pinch-to-zoom.
//!
//! A viewport runs at most one session at a time:
//!
//! ```text
//! Idle -> Dragging -> Idle        (one pointer down / up)
//! Idle -> Pinching -> Idle        (two touches down / up)
//! Dragging <-> Pinching           (touch count changes between 1 and 2)
//! ```
//!
//! The session only records pointer bookkeeping. The geometry it drives lives
//! in [`ImageViewport`](crate::ImageViewport), which owns the session and
//! exposes `begin_*` / `continue_*` / `end_*` operations on top of it.

use kurbo::{Point, Vec2};

/// The active input session of a viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum GestureSession {
    /// No pointer is held down.
    #[default]
    Idle,
    /// A single pointer is panning the content.
    Dragging {
        /// Last pointer position seen during the drag.
        last: Point,
    },
    /// Two touches are scaling the content.
    Pinching {
        /// Finger distance the next frame is measured against.
        initial_distance: f64,
        /// Scale captured together with `initial_distance`.
        initial_scale: f64,
    },
}

impl GestureSession {
    /// Returns `true` while a drag session is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Returns `true` while a pinch session is active.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        matches!(self, Self::Pinching { .. })
    }

    /// Returns the pinch baseline distance, if a pinch is active.
    #[must_use]
    pub fn pinch_distance(&self) -> Option<f64> {
        match self {
            Self::Pinching {
                initial_distance, ..
            } => Some(*initial_distance),
            _ => None,
        }
    }

    /// Starts a drag at `pos`, replacing any previous session.
    pub(crate) fn start_drag(&mut self, pos: Point) {
        *self = Self::Dragging { last: pos };
    }

    /// Records a new drag position and returns the movement since the last one.
    ///
    /// Returns `None` when no drag is active.
    pub(crate) fn drag_to(&mut self, pos: Point) -> Option<Vec2> {
        match self {
            Self::Dragging { last } => {
                let delta = pos - *last;
                *last = pos;
                Some(delta)
            }
            _ => None,
        }
    }

    /// Starts (or re-baselines) a pinch session.
    pub(crate) fn start_pinch(&mut self, distance: f64, scale: f64) {
        *self = Self::Pinching {
            initial_distance: distance,
            initial_scale: scale,
        };
    }

    /// Returns to [`GestureSession::Idle`] if a drag is active.
    pub(crate) fn stop_drag(&mut self) {
        if self.is_dragging() {
            *self = Self::Idle;
        }
    }

    /// Returns to [`GestureSession::Idle`] if a pinch is active.
    pub(crate) fn stop_pinch(&mut self) {
        if self.is_pinching() {
            *self = Self::Idle;
        }
    }
}

/// Distance between two touches and their midpoint.
///
/// ```
/// use kurbo::Point;
/// use understory_image_zoom::pinch_geometry;
///
/// let (distance, center) = pinch_geometry(Point::new(0.0, 0.0), Point::new(30.0, 40.0));
/// assert_eq!(distance, 50.0);
/// assert_eq!(center, Point::new(15.0, 20.0));
/// ```
#[must_use]
pub fn pinch_geometry(a: Point, b: Point) -> (f64, Point) {
    (a.distance(b), a.midpoint(b))
}
