// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fit-to-container scale computation.

use kurbo::Size;

/// Returns the scale at which `image` is fully visible inside `container`.
///
/// The result is `min(container.width / image.width,
/// container.height / image.height, 1.0)`: the fit never upscales past the
/// image's natural size, although zooming in afterwards is allowed.
///
/// If either size is empty, negative or non-finite (for example while the
/// image is still loading), `1.0` is returned instead of dividing by zero.
///
/// ```
/// use kurbo::Size;
/// use understory_image_zoom::fit_scale;
///
/// // A 1000x500 image in a 500x500 container fits at half size.
/// assert_eq!(fit_scale(Size::new(1000.0, 500.0), Size::new(500.0, 500.0)), 0.5);
/// // Small images are not upscaled.
/// assert_eq!(fit_scale(Size::new(100.0, 100.0), Size::new(500.0, 500.0)), 1.0);
/// // Not loaded yet.
/// assert_eq!(fit_scale(Size::ZERO, Size::new(500.0, 500.0)), 1.0);
/// ```
#[must_use]
pub fn fit_scale(image: Size, container: Size) -> f64 {
    if !is_usable(image) || !is_usable(container) {
        return 1.0;
    }
    let sx = container.width / image.width;
    let sy = container.height / image.height;
    sx.min(sy).min(1.0)
}

/// `true` when both dimensions are finite and strictly positive.
pub(crate) fn is_usable(size: Size) -> bool {
    size.width.is_finite() && size.height.is_finite() && size.width > 0.0 && size.height > 0.0
}
