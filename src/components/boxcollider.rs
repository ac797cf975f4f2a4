//! Axis-aligned box collider used by the headless host.
//!
//! Real hosts have their own collision shapes; this one exists so that ray
//! queries and floor contacts can be answered without an engine.
use bevy_ecs::prelude::Component;
use glam::Vec3;

#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub half_extents: Vec3,
    pub offset: Vec3,
}

impl BoxCollider {
    /// Create a BoxCollider centred on its entity.
    pub fn new(half_extents: Vec3) -> Self {
        Self {
            half_extents: half_extents.abs(),
            offset: Vec3::ZERO,
        }
    }

    /// Modify BoxCollider with given offset
    pub fn with_offset(mut self, offset: Vec3) -> Self {
        self.offset = offset;
        self
    }

    /// Returns (min, max) of the collider AABB for a given entity position.
    pub fn aabb(&self, position: Vec3) -> (Vec3, Vec3) {
        let center = position + self.offset;
        (center - self.half_extents, center + self.half_extents)
    }

    /// AABB vs AABB overlap test against another BoxCollider at a different entity position.
    pub fn overlaps(&self, position: Vec3, other: &Self, other_position: Vec3) -> bool {
        let (min_a, max_a) = self.aabb(position);
        let (min_b, max_b) = other.aabb(other_position);
        min_a.cmplt(max_b).all() && max_a.cmpgt(min_b).all()
    }

    /// Point containment in world space.
    pub fn contains_point(&self, position: Vec3, point: Vec3) -> bool {
        let (min, max) = self.aabb(position);
        point.cmpge(min).all() && point.cmple(max).all()
    }

    /// Top face height of the box.
    pub fn top(&self, position: Vec3) -> f32 {
        self.aabb(position).1.y
    }

    /// Slab test. Returns the distance along `direction` and the face normal of
    /// the first intersection within `max_distance`. `direction` must be normalized.
    ///
    /// A ray starting inside the box reports no hit.
    pub fn ray_hit(
        &self,
        position: Vec3,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
    ) -> Option<(f32, Vec3)> {
        if self.contains_point(position, origin) {
            return None;
        }
        let (min, max) = self.aabb(position);
        let mut t_enter = f32::NEG_INFINITY;
        let mut t_exit = f32::INFINITY;
        let mut normal = Vec3::ZERO;

        for axis in 0..3 {
            let o = origin[axis];
            let d = direction[axis];
            if d.abs() < f32::EPSILON {
                if o < min[axis] || o > max[axis] {
                    return None;
                }
                continue;
            }
            let mut t0 = (min[axis] - o) / d;
            let mut t1 = (max[axis] - o) / d;
            let mut face = -1.0;
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
                face = 1.0;
            }
            if t0 > t_enter {
                t_enter = t0;
                normal = Vec3::ZERO;
                normal[axis] = face;
            }
            t_exit = t_exit.min(t1);
            if t_enter > t_exit {
                return None;
            }
        }

        if t_enter < 0.0 || t_enter > max_distance {
            return None;
        }
        Some((t_enter, normal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn unit_box() -> BoxCollider {
        BoxCollider::new(Vec3::splat(0.5))
    }

    #[test]
    fn overlaps_detects_touching_boxes() {
        let a = unit_box();
        let b = unit_box();
        assert!(a.overlaps(Vec3::ZERO, &b, Vec3::new(0.9, 0.0, 0.0)));
        assert!(!a.overlaps(Vec3::ZERO, &b, Vec3::new(1.1, 0.0, 0.0)));
    }

    #[test]
    fn contains_point_respects_offset() {
        let c = unit_box().with_offset(Vec3::new(0.0, 1.0, 0.0));
        assert!(c.contains_point(Vec3::ZERO, Vec3::new(0.0, 1.2, 0.0)));
        assert!(!c.contains_point(Vec3::ZERO, Vec3::ZERO + Vec3::new(0.0, 0.2, 0.0)));
    }

    #[test]
    fn downward_ray_hits_top_face() {
        let c = unit_box();
        let (t, n) = c
            .ray_hit(Vec3::ZERO, Vec3::new(0.1, 3.0, 0.1), Vec3::NEG_Y, 10.0)
            .unwrap();
        assert!((t - 2.5).abs() < EPSILON);
        assert_eq!(n, Vec3::Y);
    }

    #[test]
    fn forward_ray_hits_near_face_with_facing_normal() {
        let c = unit_box();
        let (t, n) = c
            .ray_hit(Vec3::new(0.0, 0.0, -5.0), Vec3::ZERO, Vec3::NEG_Z, 10.0)
            .unwrap();
        assert!((t - 4.5).abs() < EPSILON);
        assert_eq!(n, Vec3::Z);
    }

    #[test]
    fn ray_beyond_reach_misses() {
        let c = unit_box();
        assert!(
            c.ray_hit(Vec3::new(0.0, 0.0, -5.0), Vec3::ZERO, Vec3::NEG_Z, 3.0)
                .is_none()
        );
    }

    #[test]
    fn ray_pointing_away_misses() {
        let c = unit_box();
        assert!(
            c.ray_hit(Vec3::new(0.0, 0.0, -5.0), Vec3::ZERO, Vec3::Z, 10.0)
                .is_none()
        );
    }
}
