// Simple particle struct to keep track of individual position, velocity, and size

use crate::config::FieldConfig;
use crate::pointer::Pointer;
use rand::Rng;
use vecmath::Vector2;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
    pub size: f64,
}

impl Particle {
    pub fn new(pos_x: f64, pos_y: f64, vel_x: f64, vel_y: f64, size: f64) -> Particle {
        Particle {
            pos: [pos_x, pos_y],
            vel: [vel_x, vel_y],
            size,
        }
    }

    // Uniform position over the surface, size and velocity from the configured
    // ranges. A zero-sized surface puts every particle at the origin.
    pub fn random<R: Rng + ?Sized>(
        rng: &mut R,
        width: f64,
        height: f64,
        config: &FieldConfig,
    ) -> Particle {
        let pos_x = rng.gen::<f64>() * width;
        let pos_y = rng.gen::<f64>() * height;
        let (min_size, max_size) = config.size_range;
        let (min_vel, max_vel) = config.velocity_range;
        let size = rng.gen_range(min_size, max_size);
        let vel_x = rng.gen_range(min_vel, max_vel);
        let vel_y = rng.gen_range(min_vel, max_vel);
        Particle::new(pos_x, pos_y, vel_x, vel_y, size)
    }

    // move, bounce off the edges, then get nudged by the pointer
    pub fn update(&mut self, width: f64, height: f64, pointer: &Pointer, push_factor: f64) {
        self.pos = vecmath::vec2_add(self.pos, self.vel);
        self.bounce(width, height);
        if let Some(offset) = pointer.repulsion(self.pos, push_factor) {
            self.pos = vecmath::vec2_sub(self.pos, offset);
        }
    }

    // Sign flip only; the position is left where it is, so a particle can
    // overshoot an edge by up to one frame's travel.
    fn bounce(&mut self, width: f64, height: f64) {
        if self.pos[0] > width || self.pos[0] < 0.0 {
            self.vel[0] *= -1.0;
        }
        if self.pos[1] > height || self.pos[1] < 0.0 {
            self.vel[1] *= -1.0;
        }
    }
}
