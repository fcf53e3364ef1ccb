//! Host Abstraction
//!
//! Everything the backdrop needs from its environment: a drawing surface, a
//! resize signal and a frame clock. The browser implements these in
//! `novabots-web`; [`MockHost`] implements them in memory for tests.
//!
//! Acquired resources are guards. Dropping a surface removes it from the
//! page and dropping a resize listener detaches it.

mod mock;

pub use mock::{MockHost, MockListener, MockSurface};

use serde::{Deserialize, Serialize};

use crate::config::Rgba;
use crate::error::Result;

/// Visible area size in CSS pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether `(x, y)` lies in `[0, width) × [0, height)`
    pub fn contains(&self, x: f64, y: f64) -> bool {
        (0.0..self.width).contains(&x) && (0.0..self.height).contains(&y)
    }
}

/// 2D drawing target
pub trait Surface {
    /// Match the backing store to `viewport`
    fn set_size(&mut self, viewport: Viewport);

    /// Erase the whole surface
    fn clear(&mut self);

    /// Fill a circle centred on `(x, y)`
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgba);
}

/// Identifier of one pending frame request
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameId(pub i32);

/// Display-refresh clock
pub trait FrameScheduler {
    /// Host-side wrapper around the per-frame callback, reused for every request
    type Callback;

    /// Wrap `f` so it can be handed to [`request_frame`](Self::request_frame)
    fn make_callback(&self, f: Box<dyn FnMut()>) -> Self::Callback;

    /// Run `callback` once on the next frame
    fn request_frame(&self, callback: &Self::Callback) -> Result<FrameId>;

    /// Drop a pending request; unknown ids are ignored
    fn cancel_frame(&self, id: FrameId);
}

/// Environment able to host the particle backdrop
pub trait EffectHost: FrameScheduler {
    /// Overlay surface; dropping it removes it from the page
    type Surface: Surface + 'static;

    /// Resize subscription; dropping it detaches the handler
    type ResizeListener: 'static;

    /// Current viewport size
    fn viewport(&self) -> Result<Viewport>;

    /// Seed for the particle RNG when the config does not pin one
    fn seed(&self) -> u64;

    /// Create the full-viewport overlay behind the page content
    fn attach_overlay(&self) -> Result<Self::Surface>;

    /// Call `handler` with the new size whenever the viewport changes
    fn on_resize(&self, handler: Box<dyn FnMut(Viewport)>) -> Result<Self::ResizeListener>;
}
