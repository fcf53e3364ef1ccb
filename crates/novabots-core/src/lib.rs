//! # novabots-core
//!
//! Host-independent core of the NovaBots landing page: the featured bot
//! catalog, its development self-tests and the animated particle backdrop.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      ParticleEffect                          │
//! │  ┌───────────────┐  ┌────────────────┐  ┌─────────────────┐  │
//! │  │ ParticleField │  │ RepeatingTask  │  │   EffectHost    │  │
//! │  │  (simulation) │──│  (frame loop)  │──│   (Strategy)    │  │
//! │  └───────────────┘  └────────────────┘  └─────────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The `EffectHost` trait lets the same backdrop run against the browser
//! (`novabots-web`) or the in-memory [`MockHost`] used by the tests.

pub mod catalog;
pub mod config;
pub mod effect;
pub mod error;
pub mod field;
pub mod host;
pub mod task;
pub mod validation;

pub use catalog::{BotCatalog, BotProfile, JsonCatalog, StaticCatalog};
pub use config::{EffectConfig, Rgba};
pub use effect::ParticleEffect;
pub use error::{NovaError, Result};
pub use field::{Particle, ParticleField};
pub use host::{EffectHost, FrameId, FrameScheduler, MockHost, Surface, Viewport};
pub use task::RepeatingTask;
pub use validation::{BuildMode, ValidationIssue, ValidationReport, run_dev_checks, validate_bots};
