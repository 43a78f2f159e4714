use std::path::Path;

use image::{ImageFormat, RgbaImage};
use rayon::prelude::*;

use crate::vector::Vec3;

pub type Pixel = image::Rgba<u8>;

pub const BACKGROUND: Pixel = image::Rgba([0, 0, 0, 255]);

pub trait Rgba32 {
    fn to_rgba32(&self) -> (u8, u8, u8, u8);
    fn from_rgba32(rgba: (u8, u8, u8, u8)) -> Self;
}

impl Rgba32 for Pixel {
    fn to_rgba32(&self) -> (u8, u8, u8, u8) {
        let [r, g, b, a] = self.0;
        (r, g, b, a)
    }

    fn from_rgba32((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        image::Rgba([r, g, b, a])
    }
}

/// Unit-range colour. Channels are scaled by 255, clamped from above and
/// truncated; alpha is always opaque.
impl Rgba32 for Vec3 {
    fn to_rgba32(&self) -> (u8, u8, u8, u8) {
        (
            (self.x * 255.0).min(255.0) as u8,
            (self.y * 255.0).min(255.0) as u8,
            (self.z * 255.0).min(255.0) as u8,
            255,
        )
    }

    fn from_rgba32((r, g, b, _): (u8, u8, u8, u8)) -> Self {
        Self::new(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
    }
}

/// Row-major RGBA8 pixels, origin at the top left.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    image: RgbaImage,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            image: RgbaImage::new(width as u32, height as u32),
        }
    }

    pub fn width(&self) -> usize {
        self.image.width() as usize
    }

    pub fn height(&self) -> usize {
        self.image.height() as usize
    }

    pub fn pixel_data(&self) -> &[u8] {
        self.image.as_raw()
    }

    /// The finished frame as handed to an encoder.
    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Rows, top to bottom, each `width * 4` bytes, for disjoint parallel writes.
    pub fn par_rows_mut(&mut self) -> rayon::slice::ChunksMut<'_, u8> {
        // chunk size must be non-zero even for an empty frame
        let stride = (self.width() * 4).max(1);
        self.image.par_chunks_mut(stride)
    }

    pub fn set_pixel<T: Rgba32>(&mut self, x: usize, y: usize, color: T) {
        let px = Pixel::from_rgba32(color.to_rgba32());
        self.image.put_pixel(x as u32, y as u32, px);
    }

    pub fn get_pixel<T: Rgba32>(&self, x: usize, y: usize) -> T {
        T::from_rgba32(self.image.get_pixel(x as u32, y as u32).to_rgba32())
    }

    pub fn pixels(&self) -> impl Iterator<Item = Pixel> + '_ {
        self.image.pixels().copied()
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> image::ImageResult<()> {
        self.image.save_with_format(path, ImageFormat::Png)
    }
}

pub(crate) fn write_pixel<T: Rgba32>(dst: &mut [u8], color: T) {
    let (r, g, b, a) = color.to_rgba32();
    dst.copy_from_slice(&[r, g, b, a]);
}
