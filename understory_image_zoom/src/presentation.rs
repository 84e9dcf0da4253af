// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout values a host applies to show the image at its current zoom.

use kurbo::{Point, Rect, Size, Vec2};

use crate::ImageViewport;

/// How the scaled image is placed on one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Alignment {
    /// The image fits on this axis and is centered in the container.
    #[default]
    Center,
    /// The image overflows on this axis; it starts at the container origin
    /// and is scrolled.
    Start,
}

/// Cursor the host should show over the container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum CursorHint {
    /// Idle: the content can be grabbed.
    #[default]
    Grab,
    /// A drag is in progress.
    Grabbing,
}

/// Declarative presentation state derived from an [`ImageViewport`].
///
/// The viewport never touches a rendering API. After each operation the host
/// reads a `Presentation` and applies it: lay out the image at
/// `content_size`, align it per axis, and scroll the container to `scroll`.
///
/// ```
/// use kurbo::{Point, Size, Vec2};
/// use understory_image_zoom::{Alignment, ImageViewport, ZoomConfig};
///
/// let mut vp = ImageViewport::new(Size::new(400.0, 300.0), ZoomConfig::default()).unwrap();
/// vp.on_image_loaded(Size::new(800.0, 400.0));
///
/// let p = vp.presentation();
/// assert_eq!(p.scale, 0.5);
/// assert_eq!(p.content_size, Size::new(400.0, 200.0));
/// assert_eq!(p.align_y, Alignment::Center);
/// assert_eq!(p.image_rect().origin(), Point::new(0.0, 50.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Presentation {
    /// Current zoom factor.
    pub scale: f64,
    /// Size to lay the image out at.
    pub content_size: Size,
    /// Container size the values were derived for.
    pub container_size: Size,
    /// Scroll offset to apply to the container.
    pub scroll: Vec2,
    /// Horizontal placement.
    pub align_x: Alignment,
    /// Vertical placement.
    pub align_y: Alignment,
    /// Cursor to display.
    pub cursor: CursorHint,
}

impl Presentation {
    /// Derives the presentation state of `viewport`.
    #[must_use]
    pub fn from_viewport(viewport: &ImageViewport) -> Self {
        let content_size = viewport.scaled_size();
        let container_size = viewport.container_size();
        let align = |content: f64, container: f64| {
            if content > container {
                Alignment::Start
            } else {
                Alignment::Center
            }
        };
        Self {
            scale: viewport.scale(),
            content_size,
            container_size,
            scroll: viewport.scroll(),
            align_x: align(content_size.width, container_size.width),
            align_y: align(content_size.height, container_size.height),
            cursor: if viewport.is_dragging() {
                CursorHint::Grabbing
            } else {
                CursorHint::Grab
            },
        }
    }

    /// Where the scaled image lands in container coordinates.
    ///
    /// Centered axes are offset by half the free space; scrolled axes are
    /// shifted by the scroll offset.
    #[must_use]
    pub fn image_rect(&self) -> Rect {
        let place = |align: Alignment, content: f64, container: f64, scroll: f64| match align {
            Alignment::Center => (container - content) / 2.0,
            Alignment::Start => -scroll,
        };
        let origin = Point::new(
            place(
                self.align_x,
                self.content_size.width,
                self.container_size.width,
                self.scroll.x,
            ),
            place(
                self.align_y,
                self.content_size.height,
                self.container_size.height,
                self.scroll.y,
            ),
        );
        Rect::from_origin_size(origin, self.content_size)
    }
}
