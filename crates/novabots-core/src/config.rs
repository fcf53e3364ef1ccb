//! Backdrop Configuration

use serde::{Deserialize, Serialize};

use crate::error::{NovaError, Result};

/// RGBA fill color, alpha in `[0, 1]`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const WHITE: Self = Self { r: 255, g: 255, b: 255, a: 1.0 };

    /// Same color with a different alpha
    pub const fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// CSS `rgba()` notation
    pub fn to_css(self) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

fn default_particle_count() -> usize {
    50
}

fn default_radius() -> [f64; 2] {
    [0.5, 2.0]
}

fn default_max_speed() -> f64 {
    0.1
}

fn default_twinkle() -> f64 {
    0.01
}

fn default_opacity_floor() -> f64 {
    0.2
}

fn default_opacity_ceiling() -> f64 {
    1.0
}

fn default_color() -> Rgba {
    Rgba::WHITE
}

/// Particle field settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EffectConfig {
    /// Particles generated on every (re)size
    #[serde(default = "default_particle_count")]
    pub particle_count: usize,

    /// Radius range in pixels, `[min, max)`
    #[serde(default = "default_radius")]
    pub radius: [f64; 2],

    /// Velocity components are drawn from `[-max_speed, max_speed)` px/frame
    #[serde(default = "default_max_speed")]
    pub max_speed: f64,

    /// Per-frame opacity jitter is drawn from `[-twinkle, twinkle)`
    #[serde(default = "default_twinkle")]
    pub twinkle: f64,

    #[serde(default = "default_opacity_floor")]
    pub opacity_floor: f64,

    #[serde(default = "default_opacity_ceiling")]
    pub opacity_ceiling: f64,

    /// Base fill color; alpha is replaced by each particle's opacity
    #[serde(default = "default_color")]
    pub color: Rgba,

    /// Fixed RNG seed for reproducible fields
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub seed: Option<u64>,
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            particle_count: default_particle_count(),
            radius: default_radius(),
            max_speed: default_max_speed(),
            twinkle: default_twinkle(),
            opacity_floor: default_opacity_floor(),
            opacity_ceiling: default_opacity_ceiling(),
            color: default_color(),
            seed: None,
        }
    }
}

impl EffectConfig {
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reject settings that would make random ranges empty or inverted
    pub fn validate(&self) -> Result<()> {
        if self.particle_count == 0 {
            return Err(NovaError::Config("particle_count must be at least 1".into()));
        }
        let [min_radius, max_radius] = self.radius;
        let finite = [
            ("radius", min_radius),
            ("radius", max_radius),
            ("max_speed", self.max_speed),
            ("twinkle", self.twinkle),
            ("opacity_floor", self.opacity_floor),
            ("opacity_ceiling", self.opacity_ceiling),
        ];
        if let Some((name, value)) = finite.iter().find(|(_, value)| !value.is_finite()) {
            return Err(NovaError::Config(format!("{name} must be finite, got {value}")));
        }
        if !(min_radius > 0.0 && min_radius < max_radius) {
            return Err(NovaError::Config(format!(
                "radius range [{min_radius}, {max_radius}) is empty"
            )));
        }
        if self.max_speed <= 0.0 || self.max_speed > f64::MAX / 2.0 {
            return Err(NovaError::Config("max_speed must be positive and finite".into()));
        }
        if self.twinkle <= 0.0 || self.twinkle > f64::MAX / 2.0 {
            return Err(NovaError::Config("twinkle must be positive and finite".into()));
        }
        if !(0.0..=1.0).contains(&self.opacity_floor)
            || !(0.0..=1.0).contains(&self.opacity_ceiling)
            || self.opacity_floor > self.opacity_ceiling
        {
            return Err(NovaError::Config(format!(
                "opacity bounds [{}, {}] must be ordered within [0, 1]",
                self.opacity_floor, self.opacity_ceiling
            )));
        }
        Ok(())
    }
}
