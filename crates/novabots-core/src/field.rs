//! Particle Field
//!
//! Pure simulation of the drifting, twinkling dots behind the page. Knows
//! nothing about the browser: drawing goes through [`Surface`] and randomness
//! through any [`Rng`].

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::EffectConfig;
use crate::host::{Surface, Viewport};

/// One animated dot
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub vx: f64,
    pub vy: f64,
    pub opacity: f64,
}

impl Particle {
    /// Random particle somewhere inside `viewport`
    pub fn random<R: Rng + ?Sized>(rng: &mut R, viewport: Viewport, config: &EffectConfig) -> Self {
        let [min_radius, max_radius] = config.radius;
        let speed = config.max_speed;
        Self {
            x: rng.r#gen::<f64>() * viewport.width,
            y: rng.r#gen::<f64>() * viewport.height,
            radius: rng.gen_range(min_radius..max_radius),
            vx: rng.gen_range(-speed..speed),
            vy: rng.gen_range(-speed..speed),
            opacity: rng.r#gen::<f64>(),
        }
    }

    /// Advance one frame: move, twinkle, then bounce off the edges.
    ///
    /// Position is not clamped, so a particle may sit just past an edge for a
    /// frame after its velocity flips.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R, viewport: Viewport, config: &EffectConfig) {
        self.x += self.vx;
        self.y += self.vy;

        let jitter = rng.gen_range(-config.twinkle..config.twinkle);
        self.opacity = (self.opacity + jitter).clamp(config.opacity_floor, config.opacity_ceiling);

        if self.x < 0.0 || self.x > viewport.width {
            self.vx = -self.vx;
        }
        if self.y < 0.0 || self.y > viewport.height {
            self.vy = -self.vy;
        }
    }
}

/// Fixed-size particle collection bound to one viewport size
#[derive(Clone, Debug)]
pub struct ParticleField {
    viewport: Viewport,
    particles: Vec<Particle>,
    generation: u64,
}

impl ParticleField {
    /// Fresh field filling `viewport`
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, viewport: Viewport, config: &EffectConfig) -> Self {
        let particles = (0..config.particle_count)
            .map(|_| Particle::random(rng, viewport, config))
            .collect();
        Self {
            viewport,
            particles,
            generation: 0,
        }
    }

    /// Throw away every particle and regenerate for a new viewport
    pub fn regenerate<R: Rng + ?Sized>(&mut self, rng: &mut R, viewport: Viewport, config: &EffectConfig) {
        let generation = self.generation + 1;
        *self = Self::generate(rng, viewport, config);
        self.generation = generation;
        tracing::debug!(
            width = viewport.width,
            height = viewport.height,
            generation,
            "particle field regenerated"
        );
    }

    /// Clear the surface, then draw and advance every particle
    pub fn frame<S, R>(&mut self, surface: &mut S, rng: &mut R, config: &EffectConfig)
    where
        S: Surface + ?Sized,
        R: Rng + ?Sized,
    {
        surface.clear();
        let viewport = self.viewport;
        for particle in &mut self.particles {
            surface.fill_circle(
                particle.x,
                particle.y,
                particle.radius,
                config.color.with_alpha(particle.opacity),
            );
            particle.step(rng, viewport, config);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Number of regenerations since the field was first created
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;
    use crate::config::Rgba;

    #[derive(Default)]
    struct CountingSurface {
        clears: usize,
        circles: Vec<(f64, f64, f64, Rgba)>,
    }

    impl Surface for CountingSurface {
        fn set_size(&mut self, _viewport: Viewport) {}

        fn clear(&mut self) {
            self.clears += 1;
            self.circles.clear();
        }

        fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgba) {
            self.circles.push((x, y, radius, color));
        }
    }

    fn still(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
        Particle { x, y, radius: 1.0, vx, vy, opacity: 0.5 }
    }

    #[test]
    fn test_generate_respects_ranges() {
        let mut rng = SmallRng::seed_from_u64(1);
        let config = EffectConfig::default();
        let field = ParticleField::generate(&mut rng, Viewport::new(1024.0, 768.0), &config);

        assert_eq!(field.len(), 50);
        for p in field.particles() {
            assert!((0.0..1024.0).contains(&p.x));
            assert!((0.0..768.0).contains(&p.y));
            assert!((0.5..2.0).contains(&p.radius));
            assert!((-0.1..0.1).contains(&p.vx));
            assert!((-0.1..0.1).contains(&p.vy));
            assert!((0.0..1.0).contains(&p.opacity));
        }
    }

    #[test]
    fn test_opacity_stays_bounded() {
        let mut rng = SmallRng::seed_from_u64(2);
        let config = EffectConfig::default();
        let mut field = ParticleField::generate(&mut rng, Viewport::new(300.0, 200.0), &config);
        let mut surface = CountingSurface::default();

        for _ in 0..2_000 {
            field.frame(&mut surface, &mut rng, &config);
            assert!(field.particles().iter().all(|p| (0.2..=1.0).contains(&p.opacity)));
        }
    }

    #[test]
    fn test_radius_never_changes() {
        let mut rng = SmallRng::seed_from_u64(3);
        let config = EffectConfig::default();
        let mut field = ParticleField::generate(&mut rng, Viewport::new(640.0, 480.0), &config);
        let radii: Vec<f64> = field.particles().iter().map(|p| p.radius).collect();
        let mut surface = CountingSurface::default();

        for _ in 0..500 {
            field.frame(&mut surface, &mut rng, &config);
        }

        let after: Vec<f64> = field.particles().iter().map(|p| p.radius).collect();
        assert_eq!(radii, after);
    }

    #[test]
    fn test_reflects_on_every_edge() {
        let mut rng = SmallRng::seed_from_u64(4);
        let config = EffectConfig::default();
        let viewport = Viewport::new(100.0, 50.0);

        let mut left = still(0.0, 25.0, -0.05, 0.0);
        left.step(&mut rng, viewport, &config);
        assert!((left.vx - 0.05).abs() < f64::EPSILON);

        let mut right = still(100.0, 25.0, 0.05, 0.0);
        right.step(&mut rng, viewport, &config);
        assert!((right.vx + 0.05).abs() < f64::EPSILON);

        let mut top = still(50.0, 0.0, 0.0, -0.05);
        top.step(&mut rng, viewport, &config);
        assert!((top.vy - 0.05).abs() < f64::EPSILON);

        let mut bottom = still(50.0, 50.0, 0.0, 0.05);
        bottom.step(&mut rng, viewport, &config);
        assert!((bottom.vy + 0.05).abs() < f64::EPSILON);
    }

    #[test]
    fn test_interior_particle_keeps_velocity() {
        let mut rng = SmallRng::seed_from_u64(5);
        let config = EffectConfig::default();
        let mut p = still(50.0, 25.0, 0.07, -0.03);
        p.step(&mut rng, Viewport::new(100.0, 50.0), &config);

        assert!((p.x - 50.07).abs() < 1e-9);
        assert!((p.y - 24.97).abs() < 1e-9);
        assert!((p.vx - 0.07).abs() < f64::EPSILON);
        assert!((p.vy + 0.03).abs() < f64::EPSILON);
    }

    #[test]
    fn test_frame_draws_before_moving() {
        let mut rng = SmallRng::seed_from_u64(6);
        let config = EffectConfig::default();
        let mut field = ParticleField::generate(&mut rng, Viewport::new(400.0, 300.0), &config);
        let before: Vec<Particle> = field.particles().to_vec();
        let mut surface = CountingSurface::default();

        field.frame(&mut surface, &mut rng, &config);

        assert_eq!(surface.clears, 1);
        assert_eq!(surface.circles.len(), 50);
        for (p, (x, y, r, color)) in before.iter().zip(&surface.circles) {
            assert!((p.x - x).abs() < f64::EPSILON);
            assert!((p.y - y).abs() < f64::EPSILON);
            assert!((p.radius - r).abs() < f64::EPSILON);
            assert!((p.opacity - color.a).abs() < f64::EPSILON);
            assert_eq!((color.r, color.g, color.b), (255, 255, 255));
        }
    }

    #[test]
    fn test_regenerate_replaces_particles() {
        let mut rng = SmallRng::seed_from_u64(7);
        let config = EffectConfig::default();
        let mut field = ParticleField::generate(&mut rng, Viewport::new(1920.0, 1080.0), &config);

        field.regenerate(&mut rng, Viewport::new(800.0, 600.0), &config);

        assert_eq!(field.generation(), 1);
        assert_eq!(field.len(), 50);
        assert_eq!(field.viewport(), Viewport::new(800.0, 600.0));
        assert!(field
            .particles()
            .iter()
            .all(|p| (0.0..800.0).contains(&p.x) && (0.0..600.0).contains(&p.y)));
    }

    #[test]
    fn test_zero_sized_viewport() {
        let mut rng = SmallRng::seed_from_u64(8);
        let field = ParticleField::generate(&mut rng, Viewport::new(0.0, 0.0), &EffectConfig::default());
        assert!(field.particles().iter().all(|p| p.x == 0.0 && p.y == 0.0));
    }
}
