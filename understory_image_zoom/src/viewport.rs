// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoom, scroll and gesture state for one image inside a container.

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::fit::{fit_scale, is_usable};
use crate::gesture::GestureSession;
use crate::{Presentation, ZoomConfig, ZoomError};

/// Direction of a discrete zoom step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ZoomDirection {
    /// Increase the scale by one step.
    In,
    /// Decrease the scale by one step.
    Out,
}

impl ZoomDirection {
    /// `1.0` for [`ZoomDirection::In`], `-1.0` for [`ZoomDirection::Out`].
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::In => 1.0,
            Self::Out => -1.0,
        }
    }
}

/// Zoom and scroll state of one image shown inside a scrolling container.
///
/// The image is laid out at `image_size * scale`. When the scaled image is
/// larger than the container on an axis, the host scrolls it by
/// [`scroll`](Self::scroll) on that axis; otherwise the host centers it and
/// the scroll on that axis is zero.
///
/// All coordinates passed to the viewport are in the container's own space,
/// with the origin at its top-left corner.
///
/// Invariant: `min_scale() <= scale() <= max_scale()` after every operation,
/// and every scroll component lies in `[0, max_scroll()]`.
#[derive(Clone, Debug)]
pub struct ImageViewport {
    config: ZoomConfig,
    image_size: Size,
    container_size: Size,
    scale: f64,
    min_scale: f64,
    scroll: Vec2,
    gesture: GestureSession,
}

impl ImageViewport {
    /// Creates a viewport for a container of the given size.
    ///
    /// No image is known yet, so the scale starts at `1.0` and zoom
    /// operations are no-ops until [`on_image_loaded`](Self::on_image_loaded).
    ///
    /// An empty container is accepted (it behaves like a missing image); a
    /// negative or non-finite one is rejected, as is an invalid `config`.
    pub fn new(container_size: Size, config: ZoomConfig) -> Result<Self, ZoomError> {
        config.validate()?;
        if !container_size.width.is_finite()
            || !container_size.height.is_finite()
            || container_size.width < 0.0
            || container_size.height < 0.0
        {
            return Err(ZoomError::InvalidContainer {
                width: container_size.width,
                height: container_size.height,
            });
        }
        Ok(Self {
            config,
            image_size: Size::ZERO,
            container_size,
            scale: 1.0,
            min_scale: 1.0,
            scroll: Vec2::ZERO,
            gesture: GestureSession::Idle,
        })
    }

    /// Returns the configuration the viewport was built with.
    #[must_use]
    pub fn config(&self) -> ZoomConfig {
        self.config
    }

    /// Current zoom factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Fit scale: the smallest allowed zoom factor.
    #[must_use]
    pub fn min_scale(&self) -> f64 {
        self.min_scale
    }

    /// Largest allowed zoom factor.
    ///
    /// This is the configured maximum, raised to [`min_scale`](Self::min_scale)
    /// in the unusual case where the fit scale exceeds it.
    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.config.max_scale().max(self.min_scale)
    }

    /// Intrinsic size of the image, or zero before it has loaded.
    #[must_use]
    pub fn image_size(&self) -> Size {
        self.image_size
    }

    /// Size of the container in host coordinates.
    #[must_use]
    pub fn container_size(&self) -> Size {
        self.container_size
    }

    /// Current scroll offset of the visible region within the scaled image.
    #[must_use]
    pub fn scroll(&self) -> Vec2 {
        self.scroll
    }

    /// Current gesture session.
    #[must_use]
    pub fn gesture(&self) -> GestureSession {
        self.gesture
    }

    /// Returns `true` while a drag session is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    /// Returns `true` while a pinch session is active.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.gesture.is_pinching()
    }

    /// Returns `true` once both the image and the container have a usable size.
    #[must_use]
    pub fn has_geometry(&self) -> bool {
        is_usable(self.image_size) && is_usable(self.container_size)
    }

    /// Size of the image at the current scale.
    #[must_use]
    pub fn scaled_size(&self) -> Size {
        Size::new(
            self.image_size.width * self.scale,
            self.image_size.height * self.scale,
        )
    }

    /// Largest scroll offset on each axis; zero where the image fits.
    #[must_use]
    pub fn max_scroll(&self) -> Vec2 {
        let scaled = self.scaled_size();
        Vec2::new(
            (scaled.width - self.container_size.width).max(0.0),
            (scaled.height - self.container_size.height).max(0.0),
        )
    }

    /// Padding the host adds around the image on axes where it fits.
    #[must_use]
    pub fn centering_offset(&self) -> Vec2 {
        centering_offset(self.scaled_size(), self.container_size)
    }

    /// Records the intrinsic image size and resets the zoom to the fit scale.
    ///
    /// This is the transition that establishes the baseline "fit" view.
    pub fn on_image_loaded(&mut self, image_size: Size) {
        self.image_size = sanitize(image_size);
        self.min_scale = fit_scale(self.image_size, self.container_size);
        self.scale = self.min_scale;
        self.clamp_scroll();
        tracing::debug!(
            width = self.image_size.width,
            height = self.image_size.height,
            min_scale = self.min_scale,
            "image loaded"
        );
    }

    /// Updates the container size and recomputes the fit scale.
    ///
    /// If the scale was at the old fit scale, or falls below the new one, it
    /// follows the new fit scale. Otherwise the chosen scale is kept, clamped
    /// to the new bounds.
    pub fn on_resize(&mut self, container_size: Size) {
        let old_min_scale = self.min_scale;
        self.container_size = sanitize(container_size);
        let new_min_scale = fit_scale(self.image_size, self.container_size);
        self.min_scale = new_min_scale;

        if self.scale == old_min_scale || self.scale < new_min_scale {
            self.scale = new_min_scale;
        } else {
            self.scale = self.clamp_scale(self.scale);
        }
        self.clamp_scroll();
        tracing::debug!(
            width = self.container_size.width,
            height = self.container_size.height,
            min_scale = self.min_scale,
            scale = self.scale,
            "viewport resized"
        );
    }

    /// Zooms by `delta_factor` while keeping the image point under `anchor` fixed.
    ///
    /// `anchor` is in container coordinates. `delta_factor` is a signed
    /// fractional change: `0.25` zooms in by 25%, `-0.25` zooms out by 25%.
    /// The resulting scale is clamped to `[min_scale, max_scale]`.
    ///
    /// Returns `true` if the scale changed. Requests that leave the clamped
    /// scale unchanged, non-finite input, and calls made before the image and
    /// container have a usable size are ignored.
    ///
    /// ```
    /// use kurbo::{Point, Size};
    /// use understory_image_zoom::{ImageViewport, ZoomConfig};
    ///
    /// let mut vp = ImageViewport::new(Size::new(500.0, 500.0), ZoomConfig::default()).unwrap();
    /// vp.on_image_loaded(Size::new(1000.0, 1000.0));
    /// assert_eq!(vp.scale(), 0.5);
    ///
    /// let anchor = Point::new(100.0, 400.0);
    /// let under_anchor = vp.view_to_image_point(anchor);
    /// assert!(vp.zoom_at(anchor, 1.0));
    /// assert_eq!(vp.scale(), 1.0);
    ///
    /// let moved = vp.image_to_view_point(under_anchor);
    /// assert!((moved - anchor).hypot() < 1e-9);
    /// ```
    pub fn zoom_at(&mut self, anchor: Point, delta_factor: f64) -> bool {
        if !self.has_geometry()
            || !delta_factor.is_finite()
            || !anchor.x.is_finite()
            || !anchor.y.is_finite()
        {
            return false;
        }

        let old_scale = self.scale;
        let old_offset = self.centering_offset();
        // Unscaled image coordinates of the point under the anchor.
        let image_x = (anchor.x + self.scroll.x - old_offset.x) / old_scale;
        let image_y = (anchor.y + self.scroll.y - old_offset.y) / old_scale;

        let new_scale = self.clamp_scale(old_scale * (1.0 + delta_factor));
        if (new_scale - old_scale).abs() < f64::EPSILON {
            return false;
        }
        self.scale = new_scale;

        let scaled = self.scaled_size();
        let max_scroll = self.max_scroll();
        self.scroll.x = if scaled.width > self.container_size.width {
            (image_x * new_scale - anchor.x).clamp(0.0, max_scroll.x)
        } else {
            0.0
        };
        self.scroll.y = if scaled.height > self.container_size.height {
            (image_y * new_scale - anchor.y).clamp(0.0, max_scroll.y)
        } else {
            0.0
        };

        tracing::trace!(
            old_scale,
            new_scale,
            scroll_x = self.scroll.x,
            scroll_y = self.scroll.y,
            "zoomed"
        );
        true
    }

    /// Zooms one configured step about the center of the container.
    pub fn zoom_by_step(&mut self, direction: ZoomDirection) -> bool {
        let center = Point::new(
            self.container_size.width / 2.0,
            self.container_size.height / 2.0,
        );
        self.zoom_at(center, self.config.zoom_step() * direction.sign())
    }

    /// Returns to the fit scale with the scroll at the origin.
    pub fn zoom_reset(&mut self) {
        self.scale = self.min_scale;
        self.scroll = Vec2::ZERO;
        tracing::debug!(scale = self.scale, "zoom reset");
    }

    /// Scrolls so that the content moves by `delta`.
    ///
    /// Moving the content right (positive `delta.x`) decreases the scroll.
    /// Returns `true` if the scroll changed.
    pub fn pan_by(&mut self, delta: Vec2) -> bool {
        if !delta.x.is_finite() || !delta.y.is_finite() {
            return false;
        }
        let old = self.scroll;
        self.scroll -= delta;
        self.clamp_scroll();
        self.scroll != old
    }

    /// Adopts a scroll offset reported by the host, clamped to the valid range.
    ///
    /// Non-finite components are ignored.
    pub fn set_scroll(&mut self, scroll: Vec2) {
        if scroll.x.is_finite() {
            self.scroll.x = scroll.x;
        }
        if scroll.y.is_finite() {
            self.scroll.y = scroll.y;
        }
        self.clamp_scroll();
    }

    /// Starts a drag session at `pos`, ending any pinch in progress.
    pub fn begin_drag(&mut self, pos: Point) {
        self.gesture.start_drag(pos);
    }

    /// Returns the pointer movement since the previous drag position.
    ///
    /// The returned delta is meant for [`pan_by`](Self::pan_by): subtracting it
    /// from the scroll makes the content follow the pointer. Returns `None`
    /// when no drag is active.
    pub fn continue_drag(&mut self, pos: Point) -> Option<Vec2> {
        self.gesture.drag_to(pos)
    }

    /// Ends the drag session, if one is active.
    pub fn end_drag(&mut self) {
        self.gesture.stop_drag();
    }

    /// Starts a pinch session with the given finger distance.
    ///
    /// The current scale is captured as the pinch baseline.
    pub fn begin_pinch(&mut self, distance: f64) {
        self.gesture.start_pinch(distance, self.scale);
    }

    /// Applies a pinch frame: finger `distance` now, centered at `center`.
    ///
    /// The target scale is `initial_scale * distance / initial_distance`,
    /// applied through [`zoom_at`](Self::zoom_at) about `center`. After each
    /// applied frame the session is re-baselined to the new distance and
    /// scale, so later frames are measured incrementally.
    ///
    /// Returns `true` if the scale changed.
    pub fn continue_pinch(&mut self, distance: f64, center: Point) -> bool {
        let GestureSession::Pinching {
            initial_distance,
            initial_scale,
        } = self.gesture
        else {
            return false;
        };
        if !distance.is_finite() || distance <= 0.0 {
            return false;
        }
        if initial_distance.is_nan() || initial_distance <= 0.0 {
            // Fingers started on the same spot; measure from this frame on.
            self.gesture.start_pinch(distance, self.scale);
            return false;
        }

        let target = self.clamp_scale(initial_scale * (distance / initial_distance));
        if (target - self.scale).abs() < f64::EPSILON {
            return false;
        }
        let changed = self.zoom_at(center, target / self.scale - 1.0);
        self.gesture.start_pinch(distance, self.scale);
        changed
    }

    /// Ends the pinch session, if one is active.
    pub fn end_pinch(&mut self) {
        self.gesture.stop_pinch();
    }

    /// Transform from unscaled image coordinates to container coordinates.
    #[must_use]
    pub fn image_to_view(&self) -> Affine {
        let origin = self.centering_offset() - self.scroll;
        Affine::translate(origin) * Affine::scale(self.scale)
    }

    /// Converts a container point into unscaled image coordinates.
    #[must_use]
    pub fn view_to_image_point(&self, pt: Point) -> Point {
        self.image_to_view().inverse() * pt
    }

    /// Converts an unscaled image point into container coordinates.
    #[must_use]
    pub fn image_to_view_point(&self, pt: Point) -> Point {
        self.image_to_view() * pt
    }

    /// Region of the image, in unscaled image coordinates, visible through the
    /// container.
    #[must_use]
    pub fn visible_image_rect(&self) -> Rect {
        let view = Rect::from_origin_size(Point::ZERO, self.container_size);
        let image = Rect::from_origin_size(Point::ZERO, self.image_size);
        self.image_to_view()
            .inverse()
            .transform_rect_bbox(view)
            .intersect(image)
    }

    /// Declarative values for the host to apply after an operation.
    #[must_use]
    pub fn presentation(&self) -> Presentation {
        Presentation::from_viewport(self)
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ImageViewportDebugInfo {
        ImageViewportDebugInfo {
            image_size: self.image_size,
            container_size: self.container_size,
            scale: self.scale,
            min_scale: self.min_scale,
            max_scale: self.max_scale(),
            scroll: self.scroll,
            max_scroll: self.max_scroll(),
            visible_image_rect: self.visible_image_rect(),
            gesture: self.gesture,
        }
    }

    fn clamp_scale(&self, scale: f64) -> f64 {
        // `max` before `min` so a NaN request collapses to the fit scale.
        scale.max(self.min_scale).min(self.max_scale())
    }

    fn clamp_scroll(&mut self) {
        let max = self.max_scroll();
        self.scroll = Vec2::new(
            self.scroll.x.clamp(0.0, max.x),
            self.scroll.y.clamp(0.0, max.y),
        );
    }
}

/// Debug snapshot of an [`ImageViewport`] state.
#[derive(Clone, Copy, Debug)]
pub struct ImageViewportDebugInfo {
    /// Intrinsic image size.
    pub image_size: Size,
    /// Container size.
    pub container_size: Size,
    /// Current zoom factor.
    pub scale: f64,
    /// Fit scale.
    pub min_scale: f64,
    /// Effective upper zoom bound.
    pub max_scale: f64,
    /// Current scroll offset.
    pub scroll: Vec2,
    /// Largest scroll offset per axis.
    pub max_scroll: Vec2,
    /// Visible part of the image in unscaled image coordinates.
    pub visible_image_rect: Rect,
    /// Active gesture session.
    pub gesture: GestureSession,
}

fn centering_offset(scaled: Size, container: Size) -> Vec2 {
    Vec2::new(
        (scaled.width.max(container.width) - scaled.width) / 2.0,
        (scaled.height.max(container.height) - scaled.height) / 2.0,
    )
}

fn sanitize(size: Size) -> Size {
    let clean = |v: f64| if v.is_finite() { v.max(0.0) } else { 0.0 };
    Size::new(clean(size.width), clean(size.height))
}
