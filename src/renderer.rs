use tracing::trace;

use crate::camera::Camera;
use crate::color::{BACKGROUND, GREEN, RED, Rgb};
use crate::depth_sort::DrawOrder;
use crate::error::RenderError;
use crate::framebuffer::FrameBuffer;
use crate::projection::{FOCAL_SCALE, NEAR_Z, Projection, draw_wall};
use crate::world::World;

const HUD_LABEL: &str = "SECTOR TEST";

/// Text drawing offered by whatever presents the frame.
pub trait Overlay {
    fn draw_text(&mut self, text: &str, x: i32, y: i32, size: i32, color: Rgb);
    fn draw_fps(&mut self, x: i32, y: i32);
}

/// Overlay that drops every request, for headless rendering.
pub struct NoOverlay;

impl Overlay for NoOverlay {
    fn draw_text(&mut self, _text: &str, _x: i32, _y: i32, _size: i32, _color: Rgb) {}
    fn draw_fps(&mut self, _x: i32, _y: i32) {}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderOptions {
    pub focal_scale: f32,
    pub near_z: f32,
    pub background: Rgb,
    /// Top-down camera marker drawn over the 3D view.
    pub debug_marker: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            focal_scale: FOCAL_SCALE,
            near_z: NEAR_Z,
            background: BACKGROUND,
            debug_marker: true,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub sectors: usize,
    pub walls_drawn: usize,
    pub walls_skipped: usize,
}

/// Sequences one frame: clear, order sectors, draw walls, overlays.
///
/// The sector draw order is the only state kept between frames; its depths
/// are recomputed on every call.
#[derive(Default)]
pub struct SectorRenderer {
    pub options: RenderOptions,
    order: DrawOrder,
}

impl SectorRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            order: DrawOrder::new(),
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn render_frame(
        &mut self,
        buf: &mut [Rgb],
        width: usize,
        height: usize,
        world: &World,
        camera: &Camera,
        _dt: f32,
        overlay: &mut dyn Overlay,
    ) -> Result<FrameStats, RenderError> {
        let mut fb = FrameBuffer::new(buf, width, height)?;
        fb.clear(self.options.background);

        let view = camera.view();
        let proj = Projection::new(
            width,
            height,
            self.options.focal_scale,
            self.options.near_z,
        );

        self.order.update_depths(world, [camera.pos[0], camera.pos[1]]);
        self.order.sort_back_to_front();

        let mut stats = FrameStats {
            sectors: world.sectors().len(),
            ..Default::default()
        };

        for id in self.order.sectors() {
            let sector = &world.sectors()[id];
            for wall in world.sector_walls(sector) {
                if draw_wall(&mut fb, &proj, &view, wall, sector.base_level, sector.height) {
                    stats.walls_drawn += 1;
                } else {
                    stats.walls_skipped += 1;
                }
            }
        }

        if self.options.debug_marker {
            draw_camera_marker(&mut fb, camera);
        }

        overlay.draw_text(HUD_LABEL, 10, 10, 24, GREEN);
        overlay.draw_fps(10, 40);

        trace!(
            drawn = stats.walls_drawn,
            skipped = stats.walls_skipped,
            "frame rendered"
        );
        Ok(stats)
    }

    pub fn draw_order(&self) -> &DrawOrder {
        &self.order
    }
}

/// Camera position as a 4x4 square in map coordinates plus a pixel 20 units
/// along the facing direction.
pub fn draw_camera_marker(fb: &mut FrameBuffer, camera: &Camera) {
    let px = camera.pos[0] as i32;
    let py = camera.pos[1] as i32;
    let [fx, fy] = camera.forward();

    for y in -2..2 {
        for x in -2..2 {
            fb.put_pixel(px + x, py + y, RED);
        }
    }
    fb.put_pixel(px + (20.0 * fx) as i32, py + (20.0 * fy) as i32, RED);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::{spawn_camera, test_level};

    #[derive(Default)]
    struct Recorder {
        texts: Vec<(String, i32, i32)>,
        fps: Vec<(i32, i32)>,
    }

    impl Overlay for Recorder {
        fn draw_text(&mut self, text: &str, x: i32, y: i32, _size: i32, _color: Rgb) {
            self.texts.push((text.to_string(), x, y));
        }
        fn draw_fps(&mut self, x: i32, y: i32) {
            self.fps.push((x, y));
        }
    }

    #[test]
    fn empty_world_only_clears() {
        let mut buf = vec![0u32; 32 * 24];
        let mut r = SectorRenderer::new(RenderOptions {
            debug_marker: false,
            ..Default::default()
        });
        let cam = Camera {
            pos: [0.0; 3],
            yaw: 0.0,
        };
        let stats = r
            .render_frame(&mut buf, 32, 24, &World::default(), &cam, 0.016, &mut NoOverlay)
            .unwrap();
        assert_eq!(stats, FrameStats::default());
        assert!(buf.iter().all(|&p| p == BACKGROUND));
    }

    #[test]
    fn overlay_requests_label_and_fps() {
        let mut buf = vec![0u32; 64 * 48];
        let mut r = SectorRenderer::default();
        let mut rec = Recorder::default();
        r.render_frame(&mut buf, 64, 48, &World::default(), &spawn_camera(), 0.0, &mut rec)
            .unwrap();
        assert_eq!(rec.texts, vec![(HUD_LABEL.to_string(), 10, 10)]);
        assert_eq!(rec.fps, vec![(10, 40)]);
    }

    #[test]
    fn bad_buffer_fails_the_frame() {
        let mut buf = vec![0u32; 10];
        let mut r = SectorRenderer::default();
        let err = r
            .render_frame(&mut buf, 64, 48, &World::default(), &spawn_camera(), 0.0, &mut NoOverlay)
            .unwrap_err();
        assert!(matches!(err, RenderError::FramebufferSize { len: 10, .. }));
        assert!(buf.iter().all(|&p| p == 0));
    }

    #[test]
    fn test_level_draws_back_to_front() {
        let world = test_level().unwrap();
        let mut buf = vec![0u32; 640 * 480];
        let mut r = SectorRenderer::default();
        let stats = r
            .render_frame(&mut buf, 640, 480, &world, &spawn_camera(), 0.0, &mut NoOverlay)
            .unwrap();
        assert_eq!(stats.sectors, 5);
        assert_eq!(stats.walls_drawn + stats.walls_skipped, 20);
        assert!(stats.walls_drawn > 0);

        let depths: Vec<f32> = r.draw_order().entries().iter().map(|e| e.depth).collect();
        assert!(depths.windows(2).all(|w| w[0] >= w[1]));
        // the room just behind the spawn point is nearest
        assert_eq!(r.draw_order().entries().last().unwrap().sector, 3);
    }

    #[test]
    fn marker_is_clipped_at_the_edges() {
        let mut buf = vec![0u32; 16 * 16];
        let mut fb = FrameBuffer::new(&mut buf, 16, 16).unwrap();
        let cam = Camera {
            pos: [0.0, 0.0, 0.0],
            yaw: 0.0,
        };
        draw_camera_marker(&mut fb, &cam);
        // only the in-bounds quarter of the square survives
        assert_eq!(buf.iter().filter(|&&p| p == RED).count(), 4);
    }
}
