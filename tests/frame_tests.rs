use std::f32::consts::PI;

use sector25d::camera::Camera;
use sector25d::color::{BACKGROUND, RED};
use sector25d::error::RenderError;
use sector25d::projection::{FOCAL_SCALE, NEAR_Z, Projection, project_wall};
use sector25d::renderer::{NoOverlay, RenderOptions, SectorRenderer};
use sector25d::world::{SectorDef, Wall, World};

const W: usize = 640;
const H: usize = 480;

fn headless() -> SectorRenderer {
    SectorRenderer::new(RenderOptions {
        debug_marker: false,
        ..RenderOptions::default()
    })
}

fn spawn() -> Camera {
    Camera {
        pos: [120.0, 150.0, 30.0],
        yaw: PI,
    }
}

#[test]
fn single_wall_fills_only_its_projected_rectangle() {
    let wall = Wall::new([100.0, 132.0], [132.0, 132.0], RED);
    let world = World::build(vec![wall], &[SectorDef::new(0, 1, 0.0, 40.0)]).unwrap();
    let camera = spawn();

    let mut buf = vec![0u32; W * H];
    let stats = headless()
        .render_frame(&mut buf, W, H, &world, &camera, 0.016, &mut NoOverlay)
        .unwrap();
    assert_eq!(stats.walls_drawn, 1);

    let proj = Projection::new(W, H, FOCAL_SCALE, NEAR_Z);
    let pw = project_wall(&proj, &camera.view(), &wall, 0.0, 40.0).unwrap();
    let cols = proj.clip_columns(pw.col_start, pw.col_end);
    let top = (pw.y_top_start.min(pw.y_top_end) as i32).max(1) as usize;
    let bottom = (pw.y_bottom_start.max(pw.y_bottom_end) as i32).min(H as i32 - 1) as usize;
    assert!(!cols.is_empty());
    assert!(top < bottom);

    let (x_min, x_max) = (cols.start as usize, cols.end as usize);
    let mut inside = 0;
    for y in 0..H {
        for x in 0..W {
            let p = buf[y * W + x];
            if p != RED {
                continue;
            }
            assert!(
                (x_min..x_max).contains(&x) && (top..=bottom).contains(&y),
                "wall pixel at ({x}, {y}) outside [{x_min}, {x_max}) x [{top}, {bottom}]"
            );
            inside += 1;
        }
    }
    assert!(inside > 0);

    // every covered column is contiguous from its top edge downwards
    let mid = (x_min + x_max) / 2;
    let column: Vec<bool> = (0..H).map(|y| buf[y * W + mid] == RED).collect();
    let first = column.iter().position(|&c| c).unwrap();
    let last = column.iter().rposition(|&c| c).unwrap();
    assert!(column[first..=last].iter().all(|&c| c));
    assert_eq!(last, H - 1);
}

#[test]
fn walls_behind_the_camera_leave_the_background() {
    let wall = Wall::new([100.0, 170.0], [132.0, 170.0], RED);
    let world = World::build(vec![wall], &[SectorDef::new(0, 1, 0.0, 40.0)]).unwrap();

    let mut buf = vec![0u32; W * H];
    let stats = headless()
        .render_frame(&mut buf, W, H, &world, &spawn(), 0.016, &mut NoOverlay)
        .unwrap();
    assert_eq!(stats.walls_skipped, 1);
    assert!(buf.iter().all(|&p| p == BACKGROUND));
}

#[test]
fn nearer_sector_paints_over_farther_one() {
    const NEAR_COLOR: u32 = 0x0000_FF00;
    const FAR_COLOR: u32 = 0x0000_00FF;
    // Both walls face a camera at the origin looking down +y, the near one
    // listed first so array order alone would draw it underneath.
    let walls = vec![
        Wall::new([1.0, 5.0], [-1.0, 5.0], NEAR_COLOR),
        Wall::new([8.0, 20.0], [-8.0, 20.0], FAR_COLOR),
    ];
    let world = World::build(walls, &[
        SectorDef::new(0, 1, -1.0, 2.0),
        SectorDef::new(1, 2, -2.0, 4.0),
    ])
    .unwrap();
    let camera = Camera {
        pos: [0.0, 0.0, 0.0],
        yaw: 0.0,
    };

    let mut buf = vec![0u32; W * H];
    headless()
        .render_frame(&mut buf, W, H, &world, &camera, 0.0, &mut NoOverlay)
        .unwrap();

    let centre = buf[(H / 2) * W + W / 2];
    assert_eq!(centre, NEAR_COLOR);
    assert!(buf.iter().any(|&p| p == FAR_COLOR));
}

#[test]
fn wall_grazing_the_eye_renders_without_panicking() {
    let wall = Wall::new([1.0e7, 0.5], [-1.0e7, 0.5], RED);
    let world = World::build(vec![wall], &[SectorDef::new(0, 1, -100.0, 200.0)]).unwrap();
    let camera = Camera {
        pos: [0.0, 0.0, 0.0],
        yaw: 0.0,
    };

    let (w, h) = (64, 48);
    let mut buf = vec![0u32; w * h];
    let stats = headless()
        .render_frame(&mut buf, w, h, &world, &camera, 0.0, &mut NoOverlay)
        .unwrap();
    assert_eq!(stats.walls_drawn, 1);
    assert_eq!(buf.iter().filter(|&&p| p == RED).count(), (w - 2) * (h - 1));
}

#[test]
fn mismatched_framebuffer_is_reported() {
    let world = World::default();
    let mut buf = vec![0u32; W * H - 1];
    let err = headless()
        .render_frame(&mut buf, W, H, &world, &spawn(), 0.0, &mut NoOverlay)
        .unwrap_err();
    assert_eq!(
        err,
        RenderError::FramebufferSize {
            len: W * H - 1,
            width: W,
            height: H
        }
    );
}
