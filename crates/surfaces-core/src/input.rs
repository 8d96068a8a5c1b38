//! Pointer, scroll and viewport state shared between event listeners and the
//! frame loop.
//!
//! Listeners and the frame callback run on the same thread, so plain `Cell`s
//! suffice. All access goes through [`InputState`]'s methods and the
//! [`InputSource`] trait so the update step never touches the cells directly.

use std::cell::Cell;

/// Bounding box of the host element in client (CSS pixel) coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElementRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// Cursor offset from the element's centre, each axis in [-0.5, 0.5].
///
/// A degenerate element reports the centre.
pub fn normalize_pointer(client_x: f32, client_y: f32, rect: &ElementRect) -> [f32; 2] {
    let axis = |pos: f32, start: f32, len: f32| {
        if len > 0.0 && len.is_finite() {
            ((pos - start) / len - 0.5).clamp(-0.5, 0.5)
        } else {
            0.0
        }
    };
    [
        axis(client_x, rect.left, rect.width),
        axis(client_y, rect.top, rect.height),
    ]
}

/// How far the element's vertical midpoint has travelled up the viewport:
/// 0 while the midpoint sits at or below the bottom edge, 1 at or above the top.
pub fn scroll_progress(rect: &ElementRect, viewport_height: f32) -> f32 {
    let midpoint = rect.top + rect.height / 2.0;
    let progress = 1.0 - midpoint / viewport_height;
    if progress.is_finite() {
        progress.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Values the frame step reads once per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputSnapshot {
    pub pointer: [f32; 2],
    pub scroll: f32,
    /// CSS size of the drawing surface.
    pub viewport: [f32; 2],
}

pub trait InputSource {
    fn snapshot(&self) -> InputSnapshot;
}

#[derive(Debug, Default)]
pub struct InputState {
    pointer: Cell<[f32; 2]>,
    scroll: Cell<f32>,
    viewport: Cell<[f32; 2]>,
}

impl InputState {
    pub fn set_pointer(&self, pointer: [f32; 2]) {
        self.pointer.set(pointer);
    }

    pub fn set_scroll(&self, progress: f32) {
        self.scroll.set(progress);
    }

    pub fn set_viewport(&self, width: f32, height: f32) {
        self.viewport.set([width, height]);
    }
}

impl InputSource for InputState {
    fn snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            pointer: self.pointer.get(),
            scroll: self.scroll.get(),
            viewport: self.viewport.get(),
        }
    }
}
