// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_image_zoom --heading-base-level=0

//! Understory Image Zoom: zoom and pan for a single image in a scrolling container.
//!
//! This crate provides a small, headless model of an image viewer's zoom
//! state. The image is laid out at `natural size * scale` inside a fixed-size
//! container; when it overflows, the container scrolls, and when it fits, the
//! host centers it. The crate focuses on:
//! - Fit scale: the largest scale that shows the whole image, capped at its
//!   natural size.
//! - Anchor-preserving zoom: the image point under the pointer (or pinch
//!   center) stays put while the scale changes.
//! - Drag-to-pan and pinch-to-zoom sessions.
//! - Zoom-in / zoom-out / reset commands delivered over an injected channel.
//!
//! It does **not** render anything or own any UI toolkit objects. Callers are
//! expected to:
//! - Report the container size, the image's natural size once it has loaded,
//!   and raw pointer, wheel and touch input.
//! - Read a [`Presentation`] after each operation and apply it: lay the image
//!   out at its scaled size, align it, and scroll the container.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use understory_image_zoom::{ImageViewport, ZoomConfig, ZoomDirection};
//!
//! // 500x500 container showing a 1000x1000 image.
//! let mut view = ImageViewport::new(Size::new(500.0, 500.0), ZoomConfig::default()).unwrap();
//! view.on_image_loaded(Size::new(1000.0, 1000.0));
//! assert_eq!(view.scale(), 0.5);
//!
//! // Zoom in 50% about the container center.
//! view.zoom_at(Point::new(250.0, 250.0), 0.5);
//! assert_eq!(view.scale(), 0.75);
//!
//! // The image pixel that was under the center is still under the center.
//! let scroll = view.scroll();
//! assert_eq!(scroll.x + 250.0, 500.0 * view.scale());
//!
//! // Back to the fit view.
//! view.zoom_reset();
//! assert_eq!(view.scale(), view.min_scale());
//!
//! // Steps are clamped to the configured bounds.
//! for _ in 0..20 {
//!     view.zoom_by_step(ZoomDirection::In);
//! }
//! assert_eq!(view.scale(), view.max_scale());
//! ```
//!
//! ## Attached zoomers
//!
//! [`ImageZoomer`] bundles a viewport, an input adapter and a subscription to
//! a [`CommandChannel`]. A toolbar can hold the channel and emit
//! [`ZoomCommand`]s without knowing which image is currently shown:
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use understory_image_zoom::{CommandChannel, ImageZoomer, ZoomCommand, ZoomConfig};
//!
//! let toolbar = CommandChannel::new();
//! let mut zoomer =
//!     ImageZoomer::attach(&toolbar, Point::ZERO, Size::new(800.0, 600.0), ZoomConfig::default())
//!         .unwrap();
//! zoomer.on_image_loaded(Size::new(1600.0, 1200.0));
//!
//! toolbar.emit(ZoomCommand::ZoomIn);
//! zoomer.process_commands();
//! assert_eq!(zoomer.scale(), 0.625);
//! ```
//!
//! ## Design notes
//!
//! - Scale is uniform; there is no rotation.
//! - Zoom requests outside `[min_scale, max_scale]` are clamped, never
//!   rejected. Before the image and container have a usable size, zoom and pan
//!   requests are ignored.
//! - Everything is synchronous and single-threaded. [`CommandChannel`] is
//!   `!Send` on purpose.
//! - State transitions are logged through `tracing`.
//!
//! ## Features
//!
//! - `ui_events_adapter` (default): route `ui_events::pointer::PointerEvent`s
//!   through [`ViewportInput::handle_pointer_event`].
//!
//! This crate is `no_std` (with `alloc`).

#![no_std]

extern crate alloc;

pub mod command;
mod config;
mod error;
mod fit;
pub mod gesture;
pub mod input;
mod presentation;
#[cfg(feature = "ui_events_adapter")]
mod ui_events_adapter;
mod viewport;
mod zoomer;

pub use command::{CommandChannel, CommandReceiver, UnknownCommand, ZoomCommand};
pub use config::{DEFAULT_MAX_SCALE, DEFAULT_ZOOM_STEP, ZoomConfig};
pub use error::ZoomError;
pub use fit::fit_scale;
pub use gesture::{GestureSession, pinch_geometry};
pub use input::{PointerButton, ViewportInput};
pub use presentation::{Alignment, CursorHint, Presentation};
pub use viewport::{ImageViewport, ImageViewportDebugInfo, ZoomDirection};
pub use zoomer::ImageZoomer;
