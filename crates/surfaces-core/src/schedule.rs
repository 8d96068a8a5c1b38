//! Frame-loop scheduling with an explicit stop handle.
//!
//! The host (requestAnimationFrame on the web) calls [`FrameDriver::tick`] and
//! only schedules another frame when it returns `true`.

use std::cell::Cell;
use std::rc::Rc;

/// Shared cancel flag for a running loop. Clones observe the same loop.
#[derive(Clone, Debug)]
pub struct LoopHandle {
    running: Rc<Cell<bool>>,
    frames: Rc<Cell<u64>>,
}

impl Default for LoopHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl LoopHandle {
    pub fn new() -> Self {
        Self {
            running: Rc::new(Cell::new(true)),
            frames: Rc::new(Cell::new(0)),
        }
    }

    /// No frame runs after this returns.
    pub fn stop(&self) {
        self.running.set(false);
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    pub fn frames(&self) -> u64 {
        self.frames.get()
    }
}

pub trait FrameTask {
    /// Run one frame. `time_sec` is seconds since the loop started.
    fn frame(&mut self, time_sec: f32);
}

pub struct FrameDriver<T: FrameTask> {
    task: T,
    handle: LoopHandle,
    start_sec: Option<f64>,
}

impl<T: FrameTask> FrameDriver<T> {
    pub fn new(task: T, handle: LoopHandle) -> Self {
        Self {
            task,
            handle,
            start_sec: None,
        }
    }

    pub fn handle(&self) -> &LoopHandle {
        &self.handle
    }

    /// Run a frame at host time `now_sec` unless stopped. Returns whether the
    /// host should schedule another tick.
    pub fn tick(&mut self, now_sec: f64) -> bool {
        if !self.handle.is_running() {
            return false;
        }
        let start = *self.start_sec.get_or_insert(now_sec);
        self.task.frame((now_sec - start).max(0.0) as f32);
        self.handle.frames.set(self.handle.frames.get() + 1);
        self.handle.is_running()
    }
}
