// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter from `ui-events` pointer events to [`ViewportInput`].
//!
//! Mouse and pen pointers drive drag-to-pan, wheel scrolling zooms in steps
//! about the pointer, and platform pinch gestures zoom continuously. Touch
//! pointers are skipped here: multi-touch needs the full list of active
//! touches, which hosts feed through [`ViewportInput::touch_start`],
//! [`ViewportInput::touch_move`] and [`ViewportInput::touch_end`].

use kurbo::{Size, Vec2};
use ui_events::ScrollDelta;
use ui_events::pointer::{
    PointerButton as UiPointerButton, PointerEvent, PointerGesture, PointerType, PointerUpdate,
};

use crate::{ImageViewport, PointerButton, ViewportInput};

impl ViewportInput {
    /// Routes a `ui-events` pointer event to the matching handler.
    ///
    /// Scroll deltas are navigation directions in a Y-down space, the same
    /// sign as DOM `deltaY`: a positive `y` (wheel rolled toward the user)
    /// zooms out, a negative one zooms in.
    ///
    /// Returns `true` if the event was consumed.
    pub fn handle_pointer_event(
        &mut self,
        viewport: &mut ImageViewport,
        event: &PointerEvent,
    ) -> bool {
        match event {
            PointerEvent::Down(e) => {
                if e.pointer.pointer_type == PointerType::Touch {
                    return false;
                }
                self.pointer_down(viewport, map_button(e.button), e.state.logical_point())
            }
            PointerEvent::Move(PointerUpdate {
                pointer, current, ..
            }) => {
                if pointer.pointer_type == PointerType::Touch {
                    return false;
                }
                self.pointer_move(viewport, current.logical_point())
            }
            PointerEvent::Up(e) => {
                if e.pointer.pointer_type == PointerType::Touch {
                    return false;
                }
                self.pointer_up(viewport)
            }
            PointerEvent::Cancel(info) => {
                if info.pointer_type == PointerType::Touch {
                    return false;
                }
                self.pointer_up(viewport)
            }
            PointerEvent::Scroll(scroll_event) => {
                let delta = scroll_delta(
                    &scroll_event.delta,
                    scroll_event.state.scale_factor,
                    viewport.container_size(),
                );
                self.wheel(viewport, scroll_event.state.logical_point(), delta.y)
            }
            PointerEvent::Gesture(gesture_event) => {
                let PointerGesture::Pinch(delta) = &gesture_event.gesture else {
                    return false;
                };
                let anchor = self.local_point(gesture_event.state.logical_point());
                viewport.zoom_at(anchor, f64::from(*delta))
            }
            PointerEvent::Enter(_) | PointerEvent::Leave(_) => false,
        }
    }
}

fn map_button(button: Option<UiPointerButton>) -> PointerButton {
    match button {
        Some(UiPointerButton::Primary) => PointerButton::Primary,
        Some(UiPointerButton::Secondary) => PointerButton::Secondary,
        Some(UiPointerButton::Auxiliary) => PointerButton::Auxiliary,
        _ => PointerButton::Other,
    }
}

/// Resolves a scroll delta into logical pixels.
///
/// Lines count as one pixel each, since only the sign matters for stepped
/// zoom; pages count as one container.
fn scroll_delta(delta: &ScrollDelta, scale_factor: f64, page: Size) -> Vec2 {
    match delta {
        ScrollDelta::PixelDelta(pos) => {
            let logical = pos.to_logical(scale_factor);
            Vec2::new(logical.x, logical.y)
        }
        ScrollDelta::LineDelta(x, y) => Vec2::new(f64::from(*x), f64::from(*y)),
        ScrollDelta::PageDelta(x, y) => {
            Vec2::new(f64::from(*x) * page.width, f64::from(*y) * page.height)
        }
    }
}
