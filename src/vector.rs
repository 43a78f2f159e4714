use nalgebra::Vector3;

pub type Vec3 = Vector3<f64>;

pub fn subtract(a: Vec3, b: Vec3) -> Vec3 {
    a - b
}

pub fn dot(a: Vec3, b: Vec3) -> f64 {
    a.dot(&b)
}

pub fn scale(v: Vec3, s: f64) -> Vec3 {
    v * s
}

pub fn magnitude(v: Vec3) -> f64 {
    dot(v, v).sqrt()
}

/// Scales `v` to unit length.
///
/// `v` must not be the zero vector; there is no guard and the result is
/// NaN in every component if it is.
pub fn normalize(v: Vec3) -> Vec3 {
    v / magnitude(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_vectors_have_unit_length() {
        let samples = [
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(3.0, -4.0, 12.0),
            Vec3::new(1e-6, 2e-6, -3e-6),
            Vec3::new(640.0 / 720.0, -360.0 / 720.0, 1.0),
            Vec3::new(-1e6, 1e5, 7.0),
        ];
        for v in samples {
            let m = magnitude(normalize(v));
            assert!((m - 1.0).abs() < 1e-12, "{v:?} -> {m}");
        }
    }

    #[test]
    fn basic_ops() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, -5.0, 6.0);
        assert_eq!(subtract(a, b), Vec3::new(-3.0, 7.0, -3.0));
        assert_eq!(dot(a, b), 12.0);
        assert_eq!(scale(a, 2.0), Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(magnitude(Vec3::new(3.0, 4.0, 0.0)), 5.0);
    }

    #[test]
    fn zero_vector_normalizes_to_nan() {
        let n = normalize(Vec3::zeros());
        assert!(n.x.is_nan() && n.y.is_nan() && n.z.is_nan());
    }
}
