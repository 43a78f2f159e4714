//! Brute-force ray caster for a field of identical spheres under one point
//! light. Every pixel casts one ray, tests it against every sphere and
//! shades the nearest hit with a diffuse and a specular term.

pub mod camera;
pub mod config;
pub mod frame;
pub mod hit;
#[cfg(feature = "preview")]
pub mod preview;
pub mod ray;
pub mod render;
pub mod scene;
pub mod shade;
pub mod sphere;
pub mod vector;

pub use camera::Camera;
pub use config::{ConfigError, RenderConfig};
pub use frame::FrameBuffer;
pub use hit::{Hit, Intersect};
pub use ray::Ray;
pub use render::{render, render_parallel};
pub use scene::Scene;
pub use sphere::Sphere;
