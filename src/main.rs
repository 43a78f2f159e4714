use std::{error::Error, path::PathBuf, time::Instant};

use clap::Parser;
use sphere_caster::{render, render_parallel, FrameBuffer, RenderConfig, Scene};
use tracing_subscriber::{prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(version, about = "Ray casts a random field of spheres into a PNG")]
struct Args {
    /// JSON file with render options; flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long)]
    width: Option<u32>,

    #[arg(long)]
    height: Option<u32>,

    #[arg(short = 'n', long)]
    spheres: Option<usize>,

    #[arg(short, long)]
    radius: Option<f64>,

    #[arg(short, long)]
    seed: Option<u64>,

    #[arg(short, long, default_value = "output-rust.png")]
    output: PathBuf,

    /// Split rows across all cores
    #[arg(short, long)]
    parallel: bool,

    /// Show the result in a window
    #[cfg(feature = "preview")]
    #[arg(long)]
    preview: bool,
}

impl Args {
    fn render_config(&self) -> Result<RenderConfig, Box<dyn Error>> {
        let mut config = match &self.config {
            Some(path) => RenderConfig::load(path)?,
            None => RenderConfig::default(),
        };
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(spheres) = self.spheres {
            config.sphere_count = spheres;
        }
        if let Some(radius) = self.radius {
            config.sphere_radius = radius;
        }
        if self.seed.is_some() {
            config.random_seed = self.seed;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let config = args.render_config()?;
    tracing::debug!(?config, "effective config");

    let scene = Scene::from_config(&config);
    tracing::info!(
        spheres = scene.spheres().len(),
        seed = ?config.random_seed,
        "scene built"
    );

    let (width, height) = (config.width as usize, config.height as usize);
    let now = Instant::now();
    let frame_buffer = if args.parallel {
        render_parallel(&scene, width, height)
    } else {
        render(&scene, width, height)
    };
    tracing::info!(
        width,
        height,
        parallel = args.parallel,
        "render finished in {}ms",
        now.elapsed().as_millis()
    );

    frame_buffer.save_png(&args.output)?;
    tracing::info!(path = %args.output.display(), "image written");

    preview(&args, &frame_buffer)
}

#[cfg(feature = "preview")]
fn preview(args: &Args, frame_buffer: &FrameBuffer) -> Result<(), Box<dyn Error>> {
    if args.preview {
        sphere_caster::preview::show(frame_buffer)?;
    }
    Ok(())
}

#[cfg(not(feature = "preview"))]
fn preview(_args: &Args, _frame_buffer: &FrameBuffer) -> Result<(), Box<dyn Error>> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let args = Args::try_parse_from([
            "sphere-caster",
            "--width",
            "64",
            "-n",
            "10",
            "-s",
            "3",
            "-p",
        ])
        .unwrap();
        let config = args.render_config().unwrap();
        assert_eq!(config.width, 64);
        assert_eq!(config.height, 720);
        assert_eq!(config.sphere_count, 10);
        assert_eq!(config.random_seed, Some(3));
        assert!(args.parallel);
        assert_eq!(args.output, PathBuf::from("output-rust.png"));
    }

    #[test]
    fn invalid_overrides_are_rejected() {
        let args = Args::try_parse_from(["sphere-caster", "--height", "0"]).unwrap();
        assert!(args.render_config().is_err());
    }
}
