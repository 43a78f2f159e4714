use std::error::Error;

use sdl2::{
    event::Event,
    pixels::{Color, PixelFormatEnum},
    rect::Rect,
};

use crate::{frame::BACKGROUND, FrameBuffer};

/// Shows a finished frame in a window until it is closed.
pub fn show(frame_buffer: &FrameBuffer) -> Result<(), Box<dyn Error>> {
    let width = frame_buffer.width() as u32;
    let height = frame_buffer.height() as u32;

    let sdl2_context = sdl2::init()?;
    let mut canvas = sdl2_context
        .video()?
        .window("sphere-caster", width, height)
        .position_centered()
        .build()?
        .into_canvas()
        .build()?;
    let texture_creator = canvas.texture_creator();
    let mut texture =
        texture_creator.create_texture_streaming(PixelFormatEnum::RGBA32, width, height)?;
    let mut events = sdl2_context.event_pump()?;

    texture.update(
        Rect::new(0, 0, width, height),
        frame_buffer.pixel_data(),
        frame_buffer.width() * 4,
    )?;
    let [r, g, b, a] = BACKGROUND.0;
    canvas.set_draw_color(Color::RGBA(r, g, b, a));
    canvas.clear();
    canvas.copy(&texture, None, None)?;
    canvas.present();

    for event in events.wait_iter() {
        if let Event::Quit { .. } = event {
            break;
        }
    }
    Ok(())
}
