// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A viewport attached to a container and subscribed to zoom commands.

use kurbo::{Point, Size};

use crate::{
    CommandChannel, CommandReceiver, ImageViewport, Presentation, ViewportInput, ZoomCommand,
    ZoomConfig, ZoomDirection, ZoomError,
};

/// One image attached to a container, listening on a command channel.
///
/// An `ImageZoomer` bundles the pieces a host needs for a single image: the
/// [`ImageViewport`] geometry, a [`ViewportInput`] adapter and a subscription
/// to a [`CommandChannel`]. Showing a different image means dropping this
/// zoomer and attaching a new one; dropping it also unsubscribes it.
///
/// ```
/// use kurbo::{Point, Size};
/// use understory_image_zoom::{CommandChannel, ImageZoomer, ZoomCommand, ZoomConfig};
///
/// let channel = CommandChannel::new();
/// let mut zoomer = ImageZoomer::attach(
///     &channel,
///     Point::ZERO,
///     Size::new(500.0, 500.0),
///     ZoomConfig::default(),
/// )
/// .unwrap();
/// zoomer.on_image_loaded(Size::new(1000.0, 1000.0));
///
/// channel.emit(ZoomCommand::ZoomIn);
/// channel.emit(ZoomCommand::ZoomIn);
/// assert_eq!(zoomer.process_commands(), 2);
/// assert_eq!(zoomer.scale(), 0.78125);
///
/// channel.emit(ZoomCommand::ZoomReset);
/// zoomer.process_commands();
/// assert_eq!(zoomer.scale(), zoomer.min_scale());
///
/// drop(zoomer);
/// assert_eq!(channel.subscriber_count(), 0);
/// ```
#[derive(Debug)]
pub struct ImageZoomer {
    viewport: ImageViewport,
    input: ViewportInput,
    commands: CommandReceiver,
}

impl ImageZoomer {
    /// Attaches a zoomer to a container at `origin` (client coordinates) with
    /// the given size, subscribing it to `channel`.
    ///
    /// Fails if the container size or the configuration is invalid; in that
    /// case nothing is subscribed.
    pub fn attach(
        channel: &CommandChannel,
        origin: Point,
        container_size: Size,
        config: ZoomConfig,
    ) -> Result<Self, ZoomError> {
        let viewport = ImageViewport::new(container_size, config).inspect_err(|err| {
            tracing::warn!(%err, "zoomer not attached");
        })?;
        tracing::debug!(
            width = container_size.width,
            height = container_size.height,
            "zoomer attached"
        );
        Ok(Self {
            viewport,
            input: ViewportInput::new(origin),
            commands: channel.subscribe(),
        })
    }

    /// Applies every pending command in arrival order.
    ///
    /// Returns the number of commands applied.
    pub fn process_commands(&mut self) -> usize {
        let mut applied = 0;
        while let Some(command) = self.commands.try_recv() {
            self.apply(command);
            applied += 1;
        }
        applied
    }

    /// Applies a single command immediately.
    pub fn apply(&mut self, command: ZoomCommand) {
        match command {
            ZoomCommand::ZoomIn => {
                self.viewport.zoom_by_step(ZoomDirection::In);
            }
            ZoomCommand::ZoomOut => {
                self.viewport.zoom_by_step(ZoomDirection::Out);
            }
            ZoomCommand::ZoomReset => self.viewport.zoom_reset(),
        }
    }

    /// Zooms in one step about the container center.
    pub fn zoom_in(&mut self) -> bool {
        self.viewport.zoom_by_step(ZoomDirection::In)
    }

    /// Zooms out one step about the container center.
    pub fn zoom_out(&mut self) -> bool {
        self.viewport.zoom_by_step(ZoomDirection::Out)
    }

    /// Returns to the fit view.
    pub fn zoom_reset(&mut self) {
        self.viewport.zoom_reset();
    }

    /// Records the loaded image's intrinsic size.
    pub fn on_image_loaded(&mut self, image_size: Size) {
        self.viewport.on_image_loaded(image_size);
    }

    /// Current zoom factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.viewport.scale()
    }

    /// Fit scale.
    #[must_use]
    pub fn min_scale(&self) -> f64 {
        self.viewport.min_scale()
    }

    /// Upper zoom bound.
    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.viewport.max_scale()
    }

    /// The viewport geometry.
    #[must_use]
    pub fn viewport(&self) -> &ImageViewport {
        &self.viewport
    }

    /// Mutable access to the viewport geometry.
    pub fn viewport_mut(&mut self) -> &mut ImageViewport {
        &mut self.viewport
    }

    /// The input adapter.
    #[must_use]
    pub fn input(&self) -> &ViewportInput {
        &self.input
    }

    /// Splits the zoomer into its input adapter and viewport, so input
    /// handlers can be called directly.
    ///
    /// ```
    /// use kurbo::{Point, Size};
    /// use understory_image_zoom::{CommandChannel, ImageZoomer, ZoomConfig};
    ///
    /// let channel = CommandChannel::new();
    /// let mut zoomer =
    ///     ImageZoomer::attach(&channel, Point::ZERO, Size::new(200.0, 200.0), ZoomConfig::default())
    ///         .unwrap();
    /// zoomer.on_image_loaded(Size::new(400.0, 400.0));
    ///
    /// let (input, viewport) = zoomer.input_mut();
    /// input.wheel(viewport, Point::new(100.0, 100.0), -1.0);
    /// assert_eq!(zoomer.scale(), 0.625);
    /// ```
    pub fn input_mut(&mut self) -> (&mut ViewportInput, &mut ImageViewport) {
        (&mut self.input, &mut self.viewport)
    }

    /// Declarative values for the host to apply.
    #[must_use]
    pub fn presentation(&self) -> Presentation {
        self.viewport.presentation()
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size, Vec2};

    use super::ImageZoomer;
    use crate::{CommandChannel, ZoomCommand, ZoomConfig, ZoomError};

    fn attach(channel: &CommandChannel) -> ImageZoomer {
        let mut zoomer = ImageZoomer::attach(
            channel,
            Point::new(20.0, 30.0),
            Size::new(500.0, 500.0),
            ZoomConfig::default(),
        )
        .unwrap();
        zoomer.on_image_loaded(Size::new(1000.0, 1000.0));
        zoomer
    }

    #[test]
    fn invalid_container_is_not_subscribed() {
        let channel = CommandChannel::new();
        let err = ImageZoomer::attach(
            &channel,
            Point::ZERO,
            Size::new(f64::INFINITY, 10.0),
            ZoomConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ZoomError::InvalidContainer { .. }));
        assert_eq!(channel.subscriber_count(), 0);
    }

    #[test]
    fn commands_map_to_steps_and_reset() {
        let channel = CommandChannel::new();
        let mut zoomer = attach(&channel);

        channel.emit(ZoomCommand::ZoomIn);
        assert_eq!(zoomer.process_commands(), 1);
        assert_eq!(zoomer.scale(), 0.625);
        // Centered anchor on a centered image keeps the scroll symmetric.
        let scroll = zoomer.viewport().scroll();
        assert_eq!(scroll, Vec2::new(62.5, 62.5));

        channel.emit(ZoomCommand::ZoomOut);
        zoomer.process_commands();
        assert_eq!(zoomer.scale(), 0.5);

        zoomer.zoom_in();
        channel.emit(ZoomCommand::ZoomReset);
        zoomer.process_commands();
        assert_eq!(zoomer.scale(), 0.5);
        assert_eq!(zoomer.viewport().scroll(), Vec2::ZERO);
        assert_eq!(zoomer.process_commands(), 0);
    }

    #[test]
    fn commands_apply_in_arrival_order() {
        let channel = CommandChannel::new();
        let mut zoomer = attach(&channel);

        channel.emit(ZoomCommand::ZoomIn);
        channel.emit(ZoomCommand::ZoomReset);
        channel.emit(ZoomCommand::ZoomIn);
        assert_eq!(zoomer.process_commands(), 3);
        assert_eq!(zoomer.scale(), 0.625);
    }

    #[test]
    fn each_zoomer_has_its_own_state() {
        let channel = CommandChannel::new();
        let mut a = attach(&channel);
        let mut b = attach(&channel);
        assert_eq!(channel.subscriber_count(), 2);

        a.zoom_in();
        assert_eq!(a.scale(), 0.625);
        assert_eq!(b.scale(), 0.5);

        channel.emit(ZoomCommand::ZoomOut);
        a.process_commands();
        b.process_commands();
        assert_eq!(a.scale(), 0.5);
        assert_eq!(b.scale(), 0.5);

        drop(a);
        assert_eq!(channel.subscriber_count(), 1);
    }

    #[test]
    fn input_uses_container_origin() {
        let channel = CommandChannel::new();
        let mut zoomer = attach(&channel);
        assert_eq!(zoomer.input().origin(), Point::new(20.0, 30.0));

        let (input, viewport) = zoomer.input_mut();
        // Client (20, 30) is the container's top-left corner.
        assert!(input.wheel(viewport, Point::new(20.0, 30.0), -1.0));
        assert_eq!(zoomer.viewport().scroll(), Vec2::ZERO);
        assert_eq!(zoomer.max_scale(), 3.0);
    }
}
