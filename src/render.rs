use rayon::prelude::*;

use crate::{
    frame::{self, FrameBuffer, Pixel, BACKGROUND},
    shade::shade,
    vector::{normalize, subtract},
    Camera, Scene,
};

/// Colour seen through pixel `(x, y)`.
pub fn trace(scene: &Scene, camera: &Camera, x: usize, y: usize) -> Pixel {
    let ray = camera.cast(x, y);
    let Some(hit) = scene.intersect(ray) else {
        return BACKGROUND;
    };
    let sphere = &scene.spheres()[hit.index];
    let point = ray.at(hit.distance);
    let normal = sphere.normal_at(point);
    let view_dir = normalize(subtract(ray.origin, point));
    shade(point, normal, sphere.colour, scene.light(), view_dir)
}

pub fn render(scene: &Scene, width: usize, height: usize) -> FrameBuffer {
    let camera = Camera::new(scene.camera(), width, height);
    let mut frame_buffer = FrameBuffer::new(width, height);
    for y in 0..height {
        for x in 0..width {
            frame_buffer.set_pixel(x, y, trace(scene, &camera, x, y));
        }
    }
    frame_buffer
}

/// Same output as [`render`], with rows spread over the rayon pool.
pub fn render_parallel(scene: &Scene, width: usize, height: usize) -> FrameBuffer {
    let camera = Camera::new(scene.camera(), width, height);
    let mut frame_buffer = FrameBuffer::new(width, height);
    frame_buffer
        .par_rows_mut()
        .enumerate()
        .for_each(|(y, row)| {
            for (x, px) in row.chunks_exact_mut(4).enumerate() {
                frame::write_pixel(px, trace(scene, &camera, x, y));
            }
        });
    frame_buffer
}
