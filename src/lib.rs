//! Sector-based 2.5D software renderer.
//!
//! Walls are flat-shaded vertical quads projected from a yaw-only camera.
//! Sectors are drawn back to front by centroid distance instead of using a
//! depth buffer.

pub mod camera;
pub mod color;
pub mod config;
pub mod depth_sort;
pub mod error;
pub mod framebuffer;
pub mod hud;
pub mod input;
pub mod level;
pub mod player;
pub mod projection;
pub mod renderer;
pub mod scaler;
pub mod world;
