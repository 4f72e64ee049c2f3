// Tunable constants for the particle field. The defaults are the values the
// login page background ships with.

use crate::color::Color;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub particle_count: usize,
    pub connection_distance: f64,
    pub pointer_radius: f64,
    // ranges are half-open [min, max)
    pub size_range: (f64, f64),
    pub velocity_range: (f64, f64),
    pub push_factor: f64,
    pub connection_alpha: f64,
    pub connection_width: f64,
    pub particle_alpha: f64,
    pub particle_color: Color,
    pub connection_color: Color,
}

impl FieldConfig {
    pub const PARTICLE_COUNT: usize = 80;
    pub const CONNECTION_DISTANCE: f64 = 150.0;
    pub const POINTER_RADIUS: f64 = 150.0;
    pub const SIZE_RANGE: (f64, f64) = (1.0, 3.0);
    pub const VELOCITY_RANGE: (f64, f64) = (-0.4, 0.4);
    pub const PUSH_FACTOR: f64 = 2.0;
    pub const CONNECTION_ALPHA: f64 = 0.2;
    pub const CONNECTION_WIDTH: f64 = 1.0;
    pub const PARTICLE_ALPHA: f64 = 0.5;

    pub fn with_particle_count(mut self, particle_count: usize) -> Self {
        self.particle_count = particle_count;
        self
    }

    // Spawning samples from the ranges, so they must be non-empty.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.size_range.0 < self.size_range.1) {
            return Err(format!("invalid size range {:?}", self.size_range));
        }
        if self.size_range.0 < 0.0 {
            return Err(format!("negative particle size in {:?}", self.size_range));
        }
        if !(self.velocity_range.0 < self.velocity_range.1) {
            return Err(format!("invalid velocity range {:?}", self.velocity_range));
        }
        if !(self.connection_distance > 0.0) {
            return Err(format!(
                "connection distance must be positive, got {}",
                self.connection_distance
            ));
        }
        if !(self.pointer_radius > 0.0) {
            return Err(format!(
                "pointer radius must be positive, got {}",
                self.pointer_radius
            ));
        }
        Ok(())
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            particle_count: FieldConfig::PARTICLE_COUNT,
            connection_distance: FieldConfig::CONNECTION_DISTANCE,
            pointer_radius: FieldConfig::POINTER_RADIUS,
            size_range: FieldConfig::SIZE_RANGE,
            velocity_range: FieldConfig::VELOCITY_RANGE,
            push_factor: FieldConfig::PUSH_FACTOR,
            connection_alpha: FieldConfig::CONNECTION_ALPHA,
            connection_width: FieldConfig::CONNECTION_WIDTH,
            particle_alpha: FieldConfig::PARTICLE_ALPHA,
            particle_color: Color::PARTICLE,
            connection_color: Color::CONNECTION,
        }
    }
}
