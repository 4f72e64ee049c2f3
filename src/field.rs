// A fixed set of particles drifting over the drawing surface, pushed away from
// the pointer and linked by faint lines when they come close to each other

use crate::config::FieldConfig;
use crate::particle::Particle;
use crate::pointer::Pointer;
use crate::renderer::Renderer;
use rand::Rng;
use wasm_bindgen::JsValue;
extern crate nalgebra_glm as glm;

pub struct Field {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
    pointer: Pointer,
    config: FieldConfig,
}

impl Field {
    pub fn new(width: f64, height: f64, config: FieldConfig) -> Result<Field, String> {
        let mut rng = rand::thread_rng();
        Field::with_rng(width, height, config, &mut rng)
    }

    pub fn with_rng<R: Rng + ?Sized>(
        width: f64,
        height: f64,
        config: FieldConfig,
        rng: &mut R,
    ) -> Result<Field, String> {
        config.validate()?;
        let mut particles = Vec::with_capacity(config.particle_count);
        for _ in 0..config.particle_count {
            particles.push(Particle::random(rng, width, height, &config));
        }
        Ok(Field::from_particles(width, height, config, particles))
    }

    // The configured particle count is replaced by the number of particles given
    pub fn from_particles(
        width: f64,
        height: f64,
        mut config: FieldConfig,
        particles: Vec<Particle>,
    ) -> Field {
        config.particle_count = particles.len();
        Field {
            width,
            height,
            particles,
            pointer: Pointer::new(config.pointer_radius),
            config,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn pointer(&self) -> &Pointer {
        &self.pointer
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    // Only the surface bounds change; particles keep their state even when
    // they end up outside.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        self.pointer.move_to(x, y);
    }

    pub fn frame<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> Result<(), JsValue> {
        renderer.clear(self.width, self.height)?;
        self.update_and_draw(renderer)?;
        self.connect(renderer)
    }

    pub fn update_and_draw<R: Renderer + ?Sized>(
        &mut self,
        renderer: &mut R,
    ) -> Result<(), JsValue> {
        let (width, height) = (self.width, self.height);
        let config = &self.config;
        for particle in &mut self.particles {
            particle.update(width, height, &self.pointer, config.push_factor);
            renderer.fill_circle(
                particle.pos,
                particle.size,
                config.particle_color,
                config.particle_alpha,
            )?;
        }
        Ok(())
    }

    pub fn connect<R: Renderer + ?Sized>(&self, renderer: &mut R) -> Result<(), JsValue> {
        let config = &self.config;
        for (i, a) in self.particles.iter().enumerate() {
            let a_pos = glm::vec2(a.pos[0], a.pos[1]);
            for b in &self.particles[i + 1..] {
                let distance = glm::distance(&a_pos, &glm::vec2(b.pos[0], b.pos[1]));
                if let Some(alpha) = connection_alpha(
                    distance,
                    config.connection_distance,
                    config.connection_alpha,
                ) {
                    renderer.stroke_line(
                        a.pos,
                        b.pos,
                        config.connection_color,
                        alpha,
                        config.connection_width,
                    )?;
                }
            }
        }
        Ok(())
    }
}

// None when the pair is too far apart to be linked
pub fn connection_alpha(distance: f64, threshold: f64, dampening: f64) -> Option<f64> {
    if distance < threshold {
        Some((1.0 - distance / threshold) * dampening)
    } else {
        None
    }
}
