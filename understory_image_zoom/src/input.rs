// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Translation of raw mouse, wheel and touch input into viewport operations.
//!
//! [`ViewportInput`] receives positions in the host's client coordinate space
//! (for example window coordinates) and converts them into the container's
//! own space before calling into [`ImageViewport`]. It does not own the
//! viewport: every handler takes it by mutable reference and reports whether
//! the event was consumed.
//!
//! ## Touch transitions
//!
//! | Touches           | Effect                                          |
//! |-------------------|-------------------------------------------------|
//! | 0 -> 1            | begin drag at the touch                         |
//! | any -> 2          | begin pinch, ending any drag                    |
//! | 2 -> 1            | end pinch, begin drag at the remaining touch    |
//! | any -> 0          | end every session                               |
//!
//! ```
//! use kurbo::{Point, Size};
//! use understory_image_zoom::{ImageViewport, PointerButton, ViewportInput, ZoomConfig};
//!
//! let mut vp = ImageViewport::new(Size::new(500.0, 500.0), ZoomConfig::default()).unwrap();
//! vp.on_image_loaded(Size::new(1000.0, 1000.0));
//!
//! // The container sits at (100, 50) in window coordinates.
//! let mut input = ViewportInput::new(Point::new(100.0, 50.0));
//!
//! // Wheel up over the container center zooms in one step.
//! assert!(input.wheel(&mut vp, Point::new(350.0, 300.0), -120.0));
//! assert_eq!(vp.scale(), 0.625);
//!
//! // Drag the content 20px to the left.
//! input.pointer_down(&mut vp, PointerButton::Primary, Point::new(350.0, 300.0));
//! let before = vp.scroll().x;
//! input.pointer_move(&mut vp, Point::new(330.0, 300.0));
//! assert_eq!(vp.scroll().x, before + 20.0);
//! input.pointer_up(&mut vp);
//! ```

use kurbo::{Point, Size, Vec2};

use crate::{ImageViewport, ZoomDirection, pinch_geometry};

/// Mouse button identity for [`ViewportInput::pointer_down`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Usually the left mouse button; the only one that starts a drag.
    Primary,
    /// Usually the right mouse button.
    Secondary,
    /// Usually the middle mouse button.
    Auxiliary,
    /// Any other button.
    Other,
}

/// Input adapter between a host's event stream and an [`ImageViewport`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportInput {
    origin: Point,
}

impl ViewportInput {
    /// Creates an adapter for a container whose top-left corner is at
    /// `origin` in client coordinates.
    #[must_use]
    pub fn new(origin: Point) -> Self {
        Self { origin }
    }

    /// Client-space position of the container's top-left corner.
    #[must_use]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Updates the container origin, for example after the container moved.
    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    /// Converts a client-space position into container coordinates.
    #[must_use]
    pub fn local_point(&self, client: Point) -> Point {
        (client - self.origin).to_point()
    }

    /// Pointer pressed. Only [`PointerButton::Primary`] starts a drag.
    pub fn pointer_down(
        &mut self,
        viewport: &mut ImageViewport,
        button: PointerButton,
        pos: Point,
    ) -> bool {
        if button != PointerButton::Primary {
            return false;
        }
        viewport.begin_drag(pos);
        true
    }

    /// Pointer moved. Pans the content while a drag is active.
    pub fn pointer_move(&mut self, viewport: &mut ImageViewport, pos: Point) -> bool {
        match viewport.continue_drag(pos) {
            Some(delta) => {
                viewport.pan_by(delta);
                true
            }
            None => false,
        }
    }

    /// Pointer released. Ends a drag, if one is active.
    pub fn pointer_up(&mut self, viewport: &mut ImageViewport) -> bool {
        if viewport.is_dragging() {
            viewport.end_drag();
            true
        } else {
            false
        }
    }

    /// Wheel scrolled over `pos` by `delta_y`.
    ///
    /// Follows the DOM wheel convention: a negative `delta_y` (wheel rolled
    /// away from the user) zooms in one step at the pointer, a positive one
    /// zooms out. A zero delta is ignored.
    pub fn wheel(&mut self, viewport: &mut ImageViewport, pos: Point, delta_y: f64) -> bool {
        let direction = if delta_y < 0.0 {
            ZoomDirection::In
        } else if delta_y > 0.0 {
            ZoomDirection::Out
        } else {
            return false;
        };
        let step = viewport.config().zoom_step() * direction.sign();
        viewport.zoom_at(self.local_point(pos), step)
    }

    /// Touches went down; `touches` lists every active touch.
    pub fn touch_start(&mut self, viewport: &mut ImageViewport, touches: &[Point]) -> bool {
        match touches {
            [only] => {
                viewport.begin_drag(*only);
                true
            }
            [a, b] => {
                let (distance, _) = pinch_geometry(*a, *b);
                viewport.begin_pinch(distance);
                true
            }
            _ => false,
        }
    }

    /// Touches moved; `touches` lists every active touch.
    pub fn touch_move(&mut self, viewport: &mut ImageViewport, touches: &[Point]) -> bool {
        match touches {
            [only] if viewport.is_dragging() => self.pointer_move(viewport, *only),
            [a, b] if viewport.is_pinching() => {
                let (distance, center) = pinch_geometry(*a, *b);
                viewport.continue_pinch(distance, self.local_point(center))
            }
            _ => false,
        }
    }

    /// Touches lifted; `remaining` lists the touches still down.
    pub fn touch_end(&mut self, viewport: &mut ImageViewport, remaining: &[Point]) -> bool {
        match remaining {
            [] => {
                viewport.end_drag();
                viewport.end_pinch();
                true
            }
            [only] => {
                viewport.end_pinch();
                viewport.begin_drag(*only);
                true
            }
            _ => false,
        }
    }

    /// The container was resized.
    pub fn resize(&mut self, viewport: &mut ImageViewport, size: Size) {
        viewport.on_resize(size);
    }

    /// Adopts a scroll offset the host applied on its own (scrollbars,
    /// keyboard scrolling).
    pub fn host_scrolled(&mut self, viewport: &mut ImageViewport, scroll: Vec2) {
        viewport.set_scroll(scroll);
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size, Vec2};

    use super::{PointerButton, ViewportInput};
    use crate::{GestureSession, ImageViewport, ZoomConfig};

    fn viewport() -> ImageViewport {
        let mut vp = ImageViewport::new(Size::new(500.0, 500.0), ZoomConfig::default()).unwrap();
        vp.on_image_loaded(Size::new(1000.0, 1000.0));
        vp
    }

    #[test]
    fn only_primary_button_drags() {
        let mut vp = viewport();
        let mut input = ViewportInput::default();
        assert!(!input.pointer_down(&mut vp, PointerButton::Secondary, Point::ZERO));
        assert!(!input.pointer_down(&mut vp, PointerButton::Other, Point::ZERO));
        assert!(!vp.is_dragging());
        assert!(!input.pointer_move(&mut vp, Point::new(5.0, 5.0)));
        assert!(!input.pointer_up(&mut vp));

        assert!(input.pointer_down(&mut vp, PointerButton::Primary, Point::ZERO));
        assert!(vp.is_dragging());
        assert!(input.pointer_up(&mut vp));
        assert!(!vp.is_dragging());
    }

    #[test]
    fn mouse_drag_pans_against_pointer_motion() {
        let mut vp = viewport();
        vp.zoom_at(Point::new(250.0, 250.0), 1.0);
        let start = vp.scroll();

        let mut input = ViewportInput::new(Point::new(40.0, 40.0));
        input.pointer_down(&mut vp, PointerButton::Primary, Point::new(100.0, 100.0));
        assert!(input.pointer_move(&mut vp, Point::new(80.0, 90.0)));
        assert_eq!(vp.scroll(), start + Vec2::new(20.0, 10.0));

        assert!(input.pointer_move(&mut vp, Point::new(100.0, 100.0)));
        assert_eq!(vp.scroll(), start);
    }

    #[test]
    fn wheel_direction_and_anchor() {
        let mut vp = viewport();
        let mut input = ViewportInput::new(Point::new(10.0, 20.0));

        assert!(!input.wheel(&mut vp, Point::new(260.0, 270.0), 0.0));
        // Already at the fit scale.
        assert!(!input.wheel(&mut vp, Point::new(260.0, 270.0), 3.0));

        let anchor = Point::new(400.0, 100.0);
        let pixel = vp.view_to_image_point(anchor);
        assert!(input.wheel(&mut vp, Point::new(410.0, 120.0), -1.0));
        assert_eq!(vp.scale(), 0.625);
        let back = vp.image_to_view_point(pixel);
        assert!((back.x - anchor.x).abs() < 1e-9);
        assert!((back.y - anchor.y).abs() < 1e-9);

        assert!(input.wheel(&mut vp, Point::new(410.0, 120.0), 1.0));
        // 0.625 * 0.75 falls below the fit scale and is clamped.
        assert_eq!(vp.scale(), 0.5);
    }

    #[test]
    fn zero_wheel_delta_never_zooms() {
        // Horizontal-only wheel events arrive with a zero vertical delta.
        // They carry no zoom direction, so neither bound is approached.
        let mut vp = viewport();
        let mut input = ViewportInput::default();
        vp.zoom_at(Point::new(250.0, 250.0), 1.0);
        let scroll = vp.scroll();

        assert!(!input.wheel(&mut vp, Point::new(250.0, 250.0), 0.0));
        assert!(!input.wheel(&mut vp, Point::new(250.0, 250.0), -0.0));
        assert_eq!(vp.scale(), 1.0);
        assert_eq!(vp.scroll(), scroll);
    }

    #[test]
    fn touch_transitions_between_drag_and_pinch() {
        let mut vp = viewport();
        let mut input = ViewportInput::default();

        assert!(input.touch_start(&mut vp, &[Point::new(10.0, 10.0)]));
        assert!(vp.is_dragging());

        let pinch = [Point::new(200.0, 250.0), Point::new(300.0, 250.0)];
        assert!(input.touch_start(&mut vp, &pinch));
        assert_eq!(
            vp.gesture(),
            GestureSession::Pinching {
                initial_distance: 100.0,
                initial_scale: 0.5
            }
        );

        let wider = [Point::new(175.0, 250.0), Point::new(325.0, 250.0)];
        assert!(input.touch_move(&mut vp, &wider));
        assert_eq!(vp.scale(), 0.75);

        assert!(input.touch_end(&mut vp, &[Point::new(325.0, 250.0)]));
        assert_eq!(
            vp.gesture(),
            GestureSession::Dragging {
                last: Point::new(325.0, 250.0)
            }
        );

        assert!(input.touch_end(&mut vp, &[]));
        assert_eq!(vp.gesture(), GestureSession::Idle);
    }

    #[test]
    fn touch_moves_need_a_matching_session() {
        let mut vp = viewport();
        let mut input = ViewportInput::default();
        let pair = [Point::new(0.0, 0.0), Point::new(100.0, 0.0)];

        assert!(!input.touch_move(&mut vp, &[Point::ZERO]));
        assert!(!input.touch_move(&mut vp, &pair));
        assert!(!input.touch_start(&mut vp, &[Point::ZERO, Point::ZERO, Point::ZERO]));
        assert!(!input.touch_end(&mut vp, &pair));

        input.touch_start(&mut vp, &pair);
        assert!(!input.touch_move(&mut vp, &[Point::ZERO]));
        assert!(vp.is_pinching());
    }

    #[test]
    fn single_touch_drag_scrolls() {
        let mut vp = viewport();
        vp.zoom_at(Point::new(250.0, 250.0), 1.0);
        let start = vp.scroll();
        let mut input = ViewportInput::default();

        input.touch_start(&mut vp, &[Point::new(100.0, 100.0)]);
        assert!(input.touch_move(&mut vp, &[Point::new(130.0, 90.0)]));
        assert_eq!(vp.scroll(), start + Vec2::new(-30.0, 10.0));
    }

    #[test]
    fn resize_and_host_scroll_forward_to_viewport() {
        let mut vp = viewport();
        let mut input = ViewportInput::default();
        input.resize(&mut vp, Size::new(250.0, 250.0));
        assert_eq!(vp.scale(), 0.25);

        vp.zoom_at(Point::new(0.0, 0.0), 3.0);
        input.host_scrolled(&mut vp, Vec2::new(42.0, 7.0));
        assert_eq!(vp.scroll(), Vec2::new(42.0, 7.0));
    }
}
