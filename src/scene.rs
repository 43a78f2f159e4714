use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    config::RenderConfig,
    hit::{self, Hit},
    vector::Vec3,
    Ray, Sphere,
};

/// Spheres plus the fixed camera and light. Read-only once built.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    spheres: Vec<Sphere>,
    camera: Vec3,
    light: Vec3,
}

impl Scene {
    pub fn new(spheres: Vec<Sphere>, camera: Vec3, light: Vec3) -> Self {
        Self {
            spheres,
            camera,
            light,
        }
    }

    /// Builds the scene `config` describes, seeding from `random_seed` when set.
    pub fn from_config(config: &RenderConfig) -> Self {
        let mut rng = match config.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::random(config, &mut rng)
    }

    pub fn random<R: Rng + ?Sized>(config: &RenderConfig, rng: &mut R) -> Self {
        let [x0, y0, z0] = config.bounds_min;
        let [x1, y1, z1] = config.bounds_max;
        let colour = config.sphere_colour();
        let spheres = std::iter::repeat_with(|| {
            let center = Vec3::new(
                rng.gen_range(x0..x1),
                rng.gen_range(y0..y1),
                rng.gen_range(z0..z1),
            );
            Sphere::new(center, config.sphere_radius, colour)
        })
        .take(config.sphere_count)
        .collect();
        Self::new(spheres, config.camera_position(), config.light_position())
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    pub fn camera(&self) -> Vec3 {
        self.camera
    }

    pub fn light(&self) -> Vec3 {
        self.light
    }

    pub fn intersect(&self, ray: Ray) -> Option<Hit> {
        hit::nearest(ray, &self.spheres)
    }
}
