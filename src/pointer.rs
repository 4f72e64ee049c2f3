// Last known cursor position and the repulsion it exerts on nearby particles.
// The position stays unset until the first pointer move.

use vecmath::Vector2;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pointer {
    pub pos: Option<Vector2<f64>>,
    pub radius: f64,
}

impl Pointer {
    pub fn new(radius: f64) -> Self {
        Pointer { pos: None, radius }
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.pos = Some([x, y]);
    }

    pub fn is_point_inside(&self, point: Vector2<f64>) -> bool {
        match self.pos {
            Some(pos) => vecmath::vec2_len(vecmath::vec2_sub(pos, point)) < self.radius,
            None => false,
        }
    }

    // Offset to subtract from a particle at `point`. Grows linearly from 0 at
    // the edge of the radius to `push_factor` at the pointer itself.
    pub fn repulsion(&self, point: Vector2<f64>, push_factor: f64) -> Option<Vector2<f64>> {
        let pos = self.pos?;
        let to_pointer = vecmath::vec2_sub(pos, point);
        let distance = vecmath::vec2_len(to_pointer);
        // zero distance has no direction
        if distance <= 0.0 || !(distance < self.radius) {
            return None;
        }
        let direction = vecmath::vec2_scale(to_pointer, 1.0 / distance);
        let force = (self.radius - distance) / self.radius;
        Some(vecmath::vec2_scale(direction, force * push_factor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn unset_pointer_does_nothing() {
        let pointer = Pointer::new(150.0);
        assert_eq!(pointer.repulsion([10.0, 10.0], 2.0), None);
        assert!(!pointer.is_point_inside([10.0, 10.0]));
    }

    #[test]
    fn pointer_on_particle_is_skipped() {
        let mut pointer = Pointer::new(150.0);
        pointer.move_to(42.0, 42.0);
        assert_eq!(pointer.repulsion([42.0, 42.0], 2.0), None);
    }

    #[test]
    fn pushes_toward_pointer_direction_scaled_by_proximity() {
        let mut pointer = Pointer::new(150.0);
        pointer.move_to(100.0, 0.0);
        // 50 px to the left of the pointer: force = (150 - 50) / 150
        let offset = pointer.repulsion([50.0, 0.0], 2.0).unwrap();
        assert!(approx(offset[0], 2.0 * 100.0 / 150.0));
        assert!(approx(offset[1], 0.0));
    }

    #[test]
    fn no_push_at_or_beyond_radius() {
        let mut pointer = Pointer::new(150.0);
        pointer.move_to(0.0, 0.0);
        assert_eq!(pointer.repulsion([150.0, 0.0], 2.0), None);
        assert_eq!(pointer.repulsion([300.0, 400.0], 2.0), None);
        assert!(pointer.is_point_inside([149.0, 0.0]));
        assert!(!pointer.is_point_inside([150.0, 0.0]));
    }

    #[test]
    fn push_weakens_with_distance() {
        let mut pointer = Pointer::new(150.0);
        pointer.move_to(0.0, 0.0);
        let near = vecmath::vec2_len(pointer.repulsion([10.0, 0.0], 2.0).unwrap());
        let far = vecmath::vec2_len(pointer.repulsion([0.0, 120.0], 2.0).unwrap());
        assert!(near > far);
        assert!(near <= 2.0);
    }
}
