// The particle field itself: a fixed set of drifting particles confined to
// a rectangular viewport. Particles are created once, advance by their own
// velocity every frame, and bounce off the viewport edges by flipping the
// crossing velocity component. Resizing only moves the edges.

use rand::Rng;
use vecmath::{vec2_add, Vector2};

use crate::color::Color;
use crate::config::{FieldConfig, InvalidConfiguration};
use crate::particle::Particle;
use crate::surface::Surface;

pub struct ParticleField {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
    color: Color,
}

impl ParticleField {
    pub fn new(config: &FieldConfig, width: u32, height: u32) -> Result<Self, InvalidConfiguration> {
        config.validate()?;

        let width = width as f64;
        let height = height as f64;
        let [min_radius, max_radius] = config.size_range();
        let [min_opacity, max_opacity] = config.opacity_range();

        let mut rng = rand::thread_rng();
        let mut particles = Vec::with_capacity(config.particle_count as usize);
        for _ in 0..config.particle_count {
            let pos: Vector2<f64> = [rng.gen::<f64>() * width, rng.gen::<f64>() * height];
            let vel: Vector2<f64> = [
                (rng.gen::<f64>() - 0.5) * config.speed_range,
                (rng.gen::<f64>() - 0.5) * config.speed_range,
            ];
            let radius = rng.gen::<f64>() * (max_radius - min_radius) + min_radius;
            let opacity = rng.gen::<f64>() * (max_opacity - min_opacity) + min_opacity;
            particles.push(Particle::new(pos, vel, radius, opacity));
        }

        Ok(ParticleField {
            width,
            height,
            particles,
            color: config.color(),
        })
    }

    // New drawing bounds only. Particles keep their coordinates; anything
    // left outside bounces back in on its next boundary crossing.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width as f64;
        self.height = height as f64;
    }

    // Advance one frame. A particle that crosses an edge keeps its position
    // for this frame and gets that axis's velocity flipped, so the next
    // step carries it back inside.
    pub fn step(&mut self) {
        for particle in &mut self.particles {
            particle.pos = vec2_add(particle.pos, particle.vel);
            if particle.pos[0] < 0.0 || particle.pos[0] > self.width {
                particle.vel[0] *= -1.0;
            }
            if particle.pos[1] < 0.0 || particle.pos[1] > self.height {
                particle.vel[1] *= -1.0;
            }
        }
    }

    // Clear the surface, then one filled circle per particle. No state
    // mutation, so rendering twice in a row draws the same thing.
    pub fn render(&self, surface: &mut dyn Surface) {
        surface.clear(self.width, self.height);
        for particle in &self.particles {
            surface.fill_circle(
                particle.pos[0],
                particle.pos[1],
                particle.radius,
                self.color,
                particle.opacity,
            );
        }
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum DrawOp {
        Clear(f64, f64),
        Circle { x: f64, y: f64, radius: f64, fill: String },
    }

    #[derive(Default)]
    struct RecordingSurface {
        ops: Vec<DrawOp>,
    }

    impl Surface for RecordingSurface {
        fn clear(&mut self, width: f64, height: f64) {
            self.ops.push(DrawOp::Clear(width, height));
        }

        fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color, opacity: f64) {
            self.ops.push(DrawOp::Circle {
                x,
                y,
                radius,
                fill: color.to_css_rgba(opacity),
            });
        }
    }

    fn field(width: u32, height: u32) -> ParticleField {
        ParticleField::new(&FieldConfig::default(), width, height).unwrap()
    }

    #[test]
    fn creates_configured_number_of_particles_within_ranges() {
        let config = FieldConfig::default();
        let field = ParticleField::new(&config, 800, 600).unwrap();
        assert_eq!(field.particle_count(), 50);
        for p in &field.particles {
            assert!(p.pos[0] >= 0.0 && p.pos[0] < 800.0);
            assert!(p.pos[1] >= 0.0 && p.pos[1] < 600.0);
            assert!(p.vel[0] >= -0.25 && p.vel[0] <= 0.25);
            assert!(p.vel[1] >= -0.25 && p.vel[1] <= 0.25);
            assert!(p.radius >= 1.0 && p.radius < 3.0);
            assert!(p.opacity >= 0.2 && p.opacity < 0.7);
        }
    }

    #[test]
    fn rejects_malformed_configuration() {
        let mut config = FieldConfig::default();
        config.particle_count = 0;
        assert!(ParticleField::new(&config, 800, 600).is_err());

        let mut config = FieldConfig::default();
        config.set_size_range(5.0, 1.0);
        assert!(ParticleField::new(&config, 800, 600).is_err());
    }

    #[test]
    fn bounces_off_the_right_edge_by_flipping_velocity() {
        let mut field = field(800, 600);
        field.particles.truncate(1);
        field.particles[0].pos = [799.9, 300.0];
        field.particles[0].vel = [0.5, 0.0];

        // First step overshoots the edge; position is not clamped
        field.step();
        assert!(field.particles[0].pos[0] > 800.0);

        // Second step runs with the flipped velocity and comes back in
        let overshoot = field.particles[0].pos[0];
        field.step();
        assert_eq!(field.particles[0].vel[0], -0.5);
        assert!(field.particles[0].pos[0] < overshoot);
        assert!(field.particles[0].pos[0] <= 800.0);
    }

    #[test]
    fn bounces_off_the_top_edge_by_flipping_velocity() {
        let mut field = field(800, 600);
        field.particles.truncate(1);
        field.particles[0].pos = [400.0, 0.05];
        field.particles[0].vel = [0.0, -0.2];

        field.step();
        assert!(field.particles[0].pos[1] < 0.0);
        field.step();
        assert!(field.particles[0].pos[1] >= 0.0);
    }

    #[test]
    fn resize_does_not_move_particles() {
        let mut field = field(800, 600);
        field.particles[0].pos = [50.0, 50.0];
        field.resize(400, 300);
        assert_eq!(field.particles[0].pos, [50.0, 50.0]);
        assert_eq!(field.width, 400.0);
        assert_eq!(field.height, 300.0);
    }

    #[test]
    fn render_is_idempotent_without_a_step() {
        let field = field(800, 600);
        let mut first = RecordingSurface::default();
        let mut second = RecordingSurface::default();
        field.render(&mut first);
        field.render(&mut second);
        assert_eq!(first.ops, second.ops);
    }

    #[test]
    fn render_clears_then_draws_every_particle() {
        let field = field(800, 600);
        let mut surface = RecordingSurface::default();
        field.render(&mut surface);
        assert_eq!(surface.ops.len(), 51);
        assert_eq!(surface.ops[0], DrawOp::Clear(800.0, 600.0));
        for op in &surface.ops[1..] {
            match op {
                DrawOp::Circle { fill, .. } => assert!(fill.starts_with("rgba(96, 165, 250, ")),
                other => panic!("expected a circle, got {:?}", other),
            }
        }
    }

    #[test]
    fn hundred_steps_stay_near_the_viewport() {
        let mut field = field(800, 600);
        for _ in 0..100 {
            field.step();
            for p in &field.particles {
                // One frame of post-bounce overshoot is allowed, never more
                assert!(p.pos[0] >= -1.0 && p.pos[0] <= 801.0);
                assert!(p.pos[1] >= -1.0 && p.pos[1] <= 601.0);
            }
        }
    }
}
