//! Mock Host
//!
//! In-memory [`EffectHost`] for tests and headless demos. Frames and resizes
//! only happen when the test asks for them, and every acquired resource is
//! counted so leaks show up as non-zero counts.

use std::cell::RefCell;
use std::rc::Rc;

use super::{EffectHost, FrameId, FrameScheduler, Surface, Viewport};
use crate::config::Rgba;
use crate::error::{NovaError, Result};

type FrameCallback = Rc<RefCell<Box<dyn FnMut()>>>;
type ResizeHandler = Rc<RefCell<Box<dyn FnMut(Viewport)>>>;

#[derive(Default)]
struct MockState {
    viewport: Viewport,
    overlays: usize,
    surface_size: Option<Viewport>,
    clears: usize,
    circles: usize,
    listeners: Vec<(u64, ResizeHandler)>,
    next_listener: u64,
    pending: Vec<(FrameId, FrameCallback)>,
    next_frame: i32,
    frames_run: usize,
    refuse_frames: bool,
}

/// Host whose clock and viewport are driven by the caller
#[derive(Clone, Default)]
pub struct MockHost {
    state: Rc<RefCell<MockState>>,
}

impl MockHost {
    pub fn new(viewport: Viewport) -> Self {
        let host = Self::default();
        host.state.borrow_mut().viewport = viewport;
        host
    }

    /// Overlays currently attached
    pub fn overlay_count(&self) -> usize {
        self.state.borrow().overlays
    }

    /// Resize handlers currently registered
    pub fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }

    /// Frame requests waiting for [`run_frame`](Self::run_frame)
    pub fn pending_frames(&self) -> usize {
        self.state.borrow().pending.len()
    }

    /// Frame callbacks invoked so far
    pub fn frames_run(&self) -> usize {
        self.state.borrow().frames_run
    }

    /// Size last applied to an overlay
    pub fn surface_size(&self) -> Option<Viewport> {
        self.state.borrow().surface_size
    }

    /// Total `clear` calls across all overlays
    pub fn clears(&self) -> usize {
        self.state.borrow().clears
    }

    /// Total circles drawn across all overlays
    pub fn circles_drawn(&self) -> usize {
        self.state.borrow().circles
    }

    /// Make subsequent frame requests fail
    pub fn refuse_frames(&self, refuse: bool) {
        self.state.borrow_mut().refuse_frames = refuse;
    }

    /// Fire every frame requested so far; returns how many ran
    pub fn run_frame(&self) -> usize {
        let due = std::mem::take(&mut self.state.borrow_mut().pending);
        for (_, callback) in &due {
            (callback.borrow_mut())();
            self.state.borrow_mut().frames_run += 1;
        }
        due.len()
    }

    /// Change the viewport and notify every resize handler
    pub fn resize(&self, viewport: Viewport) {
        let handlers: Vec<ResizeHandler> = {
            let mut state = self.state.borrow_mut();
            state.viewport = viewport;
            state.listeners.iter().map(|(_, h)| Rc::clone(h)).collect()
        };
        for handler in handlers {
            (handler.borrow_mut())(viewport);
        }
    }
}

impl FrameScheduler for MockHost {
    type Callback = FrameCallback;

    fn make_callback(&self, f: Box<dyn FnMut()>) -> Self::Callback {
        Rc::new(RefCell::new(f))
    }

    fn request_frame(&self, callback: &Self::Callback) -> Result<FrameId> {
        let mut state = self.state.borrow_mut();
        if state.refuse_frames {
            return Err(NovaError::Scheduler("frame requests refused".into()));
        }
        state.next_frame += 1;
        let id = FrameId(state.next_frame);
        state.pending.push((id, Rc::clone(callback)));
        Ok(id)
    }

    fn cancel_frame(&self, id: FrameId) {
        self.state.borrow_mut().pending.retain(|(pending, _)| *pending != id);
    }
}

impl EffectHost for MockHost {
    type Surface = MockSurface;
    type ResizeListener = MockListener;

    fn viewport(&self) -> Result<Viewport> {
        Ok(self.state.borrow().viewport)
    }

    fn seed(&self) -> u64 {
        0x6e6f_7661
    }

    fn attach_overlay(&self) -> Result<Self::Surface> {
        self.state.borrow_mut().overlays += 1;
        Ok(MockSurface {
            state: Rc::clone(&self.state),
        })
    }

    fn on_resize(&self, handler: Box<dyn FnMut(Viewport)>) -> Result<Self::ResizeListener> {
        let mut state = self.state.borrow_mut();
        state.next_listener += 1;
        let id = state.next_listener;
        state.listeners.push((id, Rc::new(RefCell::new(handler))));
        Ok(MockListener {
            state: Rc::clone(&self.state),
            id,
        })
    }
}

/// Overlay recorded by a [`MockHost`]
pub struct MockSurface {
    state: Rc<RefCell<MockState>>,
}

impl Surface for MockSurface {
    fn set_size(&mut self, viewport: Viewport) {
        self.state.borrow_mut().surface_size = Some(viewport);
    }

    fn clear(&mut self) {
        self.state.borrow_mut().clears += 1;
    }

    fn fill_circle(&mut self, _x: f64, _y: f64, _radius: f64, _color: Rgba) {
        self.state.borrow_mut().circles += 1;
    }
}

impl Drop for MockSurface {
    fn drop(&mut self) {
        let mut state = self.state.borrow_mut();
        state.overlays = state.overlays.saturating_sub(1);
    }
}

/// Resize subscription on a [`MockHost`]
pub struct MockListener {
    state: Rc<RefCell<MockState>>,
    id: u64,
}

impl Drop for MockListener {
    fn drop(&mut self) {
        self.state.borrow_mut().listeners.retain(|(id, _)| *id != self.id);
    }
}
