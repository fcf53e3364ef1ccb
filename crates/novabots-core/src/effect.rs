//! Particle Backdrop Effect
//!
//! Lifecycle of the animated backdrop. [`ParticleEffect::mount`] acquires the
//! overlay, the resize listener and the frame loop; dropping the returned
//! value releases all three, whichever way the owner goes away.
//!
//! ```text
//!   mount ──► Active ──(resize)──► Active (fresh field)
//!               │
//!             drop ──► frame loop cancelled, listener detached, overlay removed
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::config::EffectConfig;
use crate::error::Result;
use crate::field::{Particle, ParticleField};
use crate::host::{EffectHost, Surface, Viewport};
use crate::task::RepeatingTask;

struct EffectState<S> {
    surface: Option<S>,
    field: ParticleField,
    rng: SmallRng,
    config: EffectConfig,
}

impl<S: Surface> EffectState<S> {
    fn frame(&mut self) {
        let Self { surface, field, rng, config } = self;
        if let Some(surface) = surface {
            field.frame(surface, rng, config);
        }
    }

    fn resize(&mut self, viewport: Viewport) {
        if let Some(surface) = self.surface.as_mut() {
            surface.set_size(viewport);
        }
        self.field.regenerate(&mut self.rng, viewport, &self.config);
    }
}

/// A mounted particle backdrop
pub struct ParticleEffect<H: EffectHost> {
    task: Option<RepeatingTask<H>>,
    listener: Option<H::ResizeListener>,
    state: Rc<RefCell<EffectState<H::Surface>>>,
}

impl<H: EffectHost + 'static> ParticleEffect<H> {
    /// Attach the overlay, fill it with particles and start animating
    pub fn mount(host: Rc<H>, config: EffectConfig) -> Result<Self> {
        config.validate()?;

        let viewport = host.viewport()?;
        let mut surface = host.attach_overlay()?;
        surface.set_size(viewport);

        let mut rng = SmallRng::seed_from_u64(config.seed.unwrap_or_else(|| host.seed()));
        let field = ParticleField::generate(&mut rng, viewport, &config);
        let particle_count = field.len();

        let state = Rc::new(RefCell::new(EffectState {
            surface: Some(surface),
            field,
            rng,
            config,
        }));
        state.borrow_mut().frame();

        let weak = Rc::downgrade(&state);
        let listener = host.on_resize(Box::new(move |viewport| {
            if let Some(state) = weak.upgrade() {
                state.borrow_mut().resize(viewport);
            }
        }))?;

        let weak = Rc::downgrade(&state);
        let task = RepeatingTask::start(host, move || {
            if let Some(state) = weak.upgrade() {
                state.borrow_mut().frame();
            }
        })?;

        tracing::info!(
            width = viewport.width,
            height = viewport.height,
            particles = particle_count,
            "particle backdrop mounted"
        );

        Ok(Self {
            task: Some(task),
            listener: Some(listener),
            state,
        })
    }
}

impl<H: EffectHost> ParticleEffect<H> {
    /// Tear the backdrop down now
    pub fn unmount(self) {
        drop(self);
    }

    /// Whether the frame loop is still scheduled
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(RepeatingTask::is_active)
    }

    /// Snapshot of the current particles
    pub fn particles(&self) -> Vec<Particle> {
        self.state.borrow().field.particles().to_vec()
    }

    /// Viewport the current field was generated for
    pub fn viewport(&self) -> Viewport {
        self.state.borrow().field.viewport()
    }

    /// How many times the field has been regenerated by resizes
    pub fn generation(&self) -> u64 {
        self.state.borrow().field.generation()
    }
}

impl<H: EffectHost> Drop for ParticleEffect<H> {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.cancel();
        }
        self.listener.take();
        // The callbacks above only held weak references, so the surface is ours to drop.
        self.state.borrow_mut().surface.take();
        tracing::debug!("particle backdrop unmounted");
    }
}
