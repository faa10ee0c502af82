use clap::Parser;

use crate::projection::{FOCAL_SCALE, NEAR_Z};
use crate::renderer::RenderOptions;

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Sector-based 2.5D software renderer")]
pub struct Config {
    /// Initial window width
    #[arg(long, default_value_t = 960)]
    pub width: u32,

    /// Initial window height
    #[arg(long, default_value_t = 540)]
    pub height: u32,

    /// Internal framebuffer width
    #[arg(long, default_value_t = 640, value_parser = clap::value_parser!(u32).range(16..))]
    pub render_width: u32,

    /// Internal framebuffer height
    #[arg(long, default_value_t = 480, value_parser = clap::value_parser!(u32).range(16..))]
    pub render_height: u32,

    /// Pixels per world unit at depth 1
    #[arg(long, default_value_t = FOCAL_SCALE)]
    pub focal_scale: f32,

    /// Hide the top-down camera marker
    #[arg(long)]
    pub no_debug_marker: bool,

    #[arg(long, default_value = "2.5D Sectors")]
    pub title: String,

    /// Log filter, overridden by RUST_LOG
    #[arg(long, default_value = "info")]
    pub log: String,
}

impl Config {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            focal_scale: self.focal_scale,
            near_z: NEAR_Z,
            debug_marker: !self.no_debug_marker,
            ..RenderOptions::default()
        }
    }
}
