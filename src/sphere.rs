use crate::{
    hit::Intersect,
    vector::{dot, normalize, subtract, Vec3},
    Ray,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f64,
    /// Linear RGB, each channel nominally in `0.0..=1.0`.
    pub colour: Vec3,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f64, colour: Vec3) -> Self {
        Self {
            center,
            radius,
            colour,
        }
    }

    pub fn normal_at(&self, point: Vec3) -> Vec3 {
        normalize(subtract(point, self.center))
    }
}

impl Intersect for Sphere {
    fn intersect(&self, ray: Ray) -> Option<f64> {
        let oc = subtract(ray.origin, self.center);
        let a = dot(ray.direction, ray.direction);
        let b = 2.0 * dot(oc, ray.direction);
        let c = dot(oc, oc) - self.radius * self.radius;
        let discriminant = b * b - 4.0 * a * c;

        // tangent rays count as misses
        if discriminant <= 0.0 {
            return None;
        }

        let root = discriminant.sqrt();
        let t1 = (-b - root) / (2.0 * a);
        let t2 = (-b + root) / (2.0 * a);

        if t1 < 0.0 && t2 < 0.0 {
            return None;
        }

        // Negative when the origin is inside the sphere; callers take it as is.
        Some(t1.min(t2))
    }
}
