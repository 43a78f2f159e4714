use crate::{
    vector::{normalize, Vec3},
    Ray,
};

/// Pinhole camera looking down +z from a fixed point.
///
/// Both image axes are divided by the image height, so the vertical field of
/// view is fixed and the horizontal one widens with the aspect ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    center: Vec3,
    image_width: usize,
    image_height: usize,
}

impl Camera {
    pub fn new(center: Vec3, image_width: usize, image_height: usize) -> Self {
        Self {
            center,
            image_width,
            image_height,
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn image_width(&self) -> usize {
        self.image_width
    }

    pub fn image_height(&self) -> usize {
        self.image_height
    }

    pub fn cast(&self, x: usize, y: usize) -> Ray {
        let width = self.image_width as f64;
        let height = self.image_height as f64;
        let ix = x as f64 - width / 2.0;
        let iy = y as f64 - height / 2.0;
        let direction = normalize(Vec3::new(ix / height, iy / height, 1.0));
        Ray::new(self.center, direction)
    }
}
