use crate::{
    frame::{Pixel, Rgba32},
    vector::{dot, normalize, scale, subtract, Vec3},
};

pub const SHININESS: f64 = 30.0;

/// Diffuse plus specular response at a surface point, in unit range.
///
/// The reflection vector is `2 * n * lambert - l`, so it shrinks with the
/// diffuse term instead of being the true mirror direction of `l`.
pub fn radiance(point: Vec3, normal: Vec3, colour: Vec3, light: Vec3, view_dir: Vec3) -> Vec3 {
    let light_dir = normalize(subtract(light, point));
    let lambert = dot(normal, light_dir).max(0.0);

    let reflected = subtract(scale(normal, 2.0 * lambert), light_dir);
    let specular = dot(reflected, view_dir).max(0.0).powf(SHININESS);

    scale(colour, lambert) + Vec3::repeat(specular)
}

pub fn shade(point: Vec3, normal: Vec3, colour: Vec3, light: Vec3, view_dir: Vec3) -> Pixel {
    Pixel::from_rgba32(radiance(point, normal, colour, light, view_dir).to_rgba32())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red() -> Vec3 {
        Vec3::new(1.0, 0.0, 0.0)
    }

    #[test]
    fn light_behind_surface_has_no_diffuse() {
        let point = Vec3::zeros();
        let normal = Vec3::new(0.0, 0.0, -1.0);
        let light = Vec3::new(0.0, 0.0, 100.0);
        let view = Vec3::new(1.0, 0.0, 0.0);
        assert_eq!(radiance(point, normal, red(), light, view), Vec3::zeros());
        assert_eq!(
            shade(point, normal, red(), light, view),
            image::Rgba([0, 0, 0, 255])
        );
    }

    #[test]
    fn back_lit_surface_still_glints_away_from_light() {
        // with lambert == 0 the reflection collapses to -light_dir
        let normal = Vec3::new(0.0, 0.0, -1.0);
        let light = Vec3::new(0.0, 0.0, 100.0);
        let view = Vec3::new(0.0, 0.0, -1.0);
        let c = radiance(Vec3::zeros(), normal, red(), light, view);
        assert_eq!(c, Vec3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn head_on_light_saturates() {
        // lambert = 1 and reflected == view, so specular = 1 as well
        let normal = Vec3::new(0.0, 0.0, -1.0);
        let light = Vec3::new(0.0, 0.0, -100.0);
        let c = radiance(Vec3::zeros(), normal, red(), light, normal);
        assert_eq!(c, Vec3::new(2.0, 1.0, 1.0));
        assert_eq!(
            shade(Vec3::zeros(), normal, red(), light, normal),
            image::Rgba([255, 255, 255, 255])
        );
    }

    #[test]
    fn oblique_light_is_mostly_diffuse() {
        let normal = Vec3::new(0.0, 0.0, -1.0);
        let light = Vec3::new(100.0, 0.0, -100.0);
        let c = radiance(Vec3::zeros(), normal, red(), light, normal);
        let lambert = std::f64::consts::FRAC_1_SQRT_2;
        let specular = lambert.powf(SHININESS);
        assert!((c.x - (lambert + specular)).abs() < 1e-12);
        assert!((c.y - specular).abs() < 1e-12);
        assert_eq!(c.y, c.z);
        let px = shade(Vec3::zeros(), normal, red(), light, normal);
        assert_eq!(px, image::Rgba([180, 0, 0, 255]));
    }

    #[test]
    fn specular_uses_the_general_power() {
        let point = Vec3::new(1.5, -2.0, 36.0);
        let normal = normalize(Vec3::new(0.3, -0.4, -1.0));
        let light = Vec3::new(300.0, -40.0, -200.0);
        let view = normalize(Vec3::new(0.0, 0.0, -50.0) - point);

        let light_dir = normalize(light - point);
        let lambert = dot(normal, light_dir).max(0.0);
        let reflected = normal * (2.0 * lambert) - light_dir;
        let expected = dot(reflected, view).max(0.0).powf(30.0);
        assert!(expected > 0.0);

        // green and blue carry only the specular term for a red sphere
        let c = radiance(point, normal, red(), light, view);
        assert_eq!(c.y, expected);
        assert_eq!(c.z, expected);
    }

    #[test]
    fn shading_is_deterministic() {
        let point = Vec3::new(1.5, -2.0, 36.0);
        let normal = normalize(Vec3::new(0.3, -0.4, -1.0));
        let light = Vec3::new(300.0, -40.0, -200.0);
        let view = normalize(Vec3::new(0.0, 0.0, -50.0) - point);
        let first = shade(point, normal, red(), light, view);
        for _ in 0..10 {
            assert_eq!(shade(point, normal, red(), light, view), first);
        }
    }
}
