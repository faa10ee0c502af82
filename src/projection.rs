//! World-space wall segment to framebuffer columns.
//!
//! A wall goes through translate/rotate into camera space, near-plane
//! clipping, a perspective divide for its two endpoints, and finally a
//! per-column fill of the vertical span between the interpolated top and
//! bottom edges. Nothing is depth tested; draw order is the caller's job.

use std::ops::Range;

use crate::camera::View;
use crate::color::Rgb;
use crate::framebuffer::FrameBuffer;
use crate::world::Wall;

/// Camera-space depth below which geometry is clipped.
pub const NEAR_Z: f32 = 0.1;
/// Pixels per world unit at depth 1.
pub const FOCAL_SCALE: f32 = 200.0;

/// Screen-space parameters for one framebuffer size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    pub half_width: f32,
    pub half_height: f32,
    pub focal_scale: f32,
    pub near_z: f32,
    width: i32,
    height: i32,
}

impl Projection {
    pub fn new(width: usize, height: usize, focal_scale: f32, near_z: f32) -> Self {
        Self {
            half_width: (width / 2) as f32,
            half_height: (height / 2) as f32,
            focal_scale,
            near_z,
            width: width as i32,
            height: height as i32,
        }
    }

    #[inline]
    pub fn project_x(&self, tx: f32, ty: f32) -> f32 {
        self.half_width - tx * self.focal_scale / ty
    }

    /// Screen column of a camera-space point. Only the perspective term is
    /// truncated, toward zero.
    #[inline]
    pub fn project_column(&self, tx: f32, ty: f32) -> i32 {
        (self.width / 2).saturating_sub((tx * self.focal_scale / ty) as i32)
    }

    /// `z` is relative to the eye.
    #[inline]
    pub fn project_y(&self, z: f32, ty: f32) -> f32 {
        self.half_height - z * self.focal_scale / ty
    }

    /// Drawable columns: one pixel of margin on the left, and the last
    /// column is never reached.
    #[inline]
    pub fn clip_columns(&self, left: i32, right: i32) -> Range<i32> {
        left.max(1)..right.min(self.width - 1)
    }

    /// Clamp a vertical span to rows `1..=height-1`.
    #[inline]
    pub fn clip_rows(&self, top: i32, bottom: i32) -> Option<(i32, i32)> {
        let top = top.max(1);
        let bottom = bottom.min(self.height - 1);
        (top <= bottom).then_some((top, bottom))
    }
}

/// A wall after clipping and projection, ready for rasterization.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedWall {
    /// Camera-space endpoints after near clipping.
    pub cam_start: [f32; 2],
    pub cam_end: [f32; 2],
    /// Exact screen x of each endpoint.
    pub x_start: f32,
    pub x_end: f32,
    /// Screen columns of each endpoint, `col_start < col_end`.
    pub col_start: i32,
    pub col_end: i32,
    pub y_bottom_start: f32,
    pub y_top_start: f32,
    pub y_bottom_end: f32,
    pub y_top_end: f32,
}

impl ProjectedWall {
    /// Top and bottom rows at column `x`, before row clamping.
    #[inline]
    pub fn span_at(&self, x: i32) -> (i32, i32) {
        // i64: endpoint columns saturate for walls grazing the eye
        let dx = (self.col_end as i64 - self.col_start as i64) as f32;
        let f = (x as i64 - self.col_start as i64) as f32 / dx;
        let top = lerp(self.y_top_start, self.y_top_end, f) as i32;
        let bottom = lerp(self.y_bottom_start, self.y_bottom_end, f) as i32;
        (top, bottom)
    }
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

/// Clip a camera-space segment so both endpoints have `ty >= near`.
///
/// Returns `None` when both endpoints are behind the near plane.
pub fn clip_near(mut p0: [f32; 2], mut p1: [f32; 2], near: f32) -> Option<([f32; 2], [f32; 2])> {
    let behind0 = p0[1] < near;
    let behind1 = p1[1] < near;

    if behind0 && behind1 {
        return None;
    }

    // Slide 'a' along a->b until it sits on the near plane
    let clip_endpoint = |a: &mut [f32; 2], b: &[f32; 2]| {
        let t = (near - a[1]) / (b[1] - a[1]);
        a[0] += t * (b[0] - a[0]);
        a[1] = near;
    };

    if behind0 {
        clip_endpoint(&mut p0, &p1);
    } else if behind1 {
        clip_endpoint(&mut p1, &p0);
    }

    Some((p0, p1))
}

/// Project one wall of a sector spanning `base_level..base_level + height`.
///
/// `None` means the wall is behind the viewer, faces away, or covers no
/// whole column.
pub fn project_wall(
    proj: &Projection,
    view: &View,
    wall: &Wall,
    base_level: f32,
    height: f32,
) -> Option<ProjectedWall> {
    let p0 = view.to_camera(wall.start);
    let p1 = view.to_camera(wall.end);

    let (p0, p1) = clip_near(p0, p1, proj.near_z)?;

    let x_start = proj.project_x(p0[0], p0[1]);
    let x_end = proj.project_x(p1[0], p1[1]);
    let col_start = proj.project_column(p0[0], p0[1]);
    let col_end = proj.project_column(p1[0], p1[1]);

    // back of the wall
    if col_start >= col_end {
        return None;
    }

    let z_bottom = base_level - view.eye_z();
    let z_top = z_bottom + height;

    Some(ProjectedWall {
        cam_start: p0,
        cam_end: p1,
        x_start,
        x_end,
        col_start,
        col_end,
        y_bottom_start: proj.project_y(z_bottom, p0[1]),
        y_top_start: proj.project_y(z_top, p0[1]),
        y_bottom_end: proj.project_y(z_bottom, p1[1]),
        y_top_end: proj.project_y(z_top, p1[1]),
    })
}

/// Fill the wall's vertical spans with a flat color. Returns the number of
/// columns that received at least one pixel.
pub fn rasterize(fb: &mut FrameBuffer, proj: &Projection, wall: &ProjectedWall, color: Rgb) -> usize {
    let mut columns = 0;
    for x in proj.clip_columns(wall.col_start, wall.col_end) {
        let (top, bottom) = wall.span_at(x);
        if let Some((y0, y1)) = proj.clip_rows(top, bottom) {
            fb.fill_column(x as usize, y0 as usize, y1 as usize, color);
            columns += 1;
        }
    }
    columns
}

/// Project and rasterize one wall. Returns `false` when it was skipped.
pub fn draw_wall(
    fb: &mut FrameBuffer,
    proj: &Projection,
    view: &View,
    wall: &Wall,
    base_level: f32,
    height: f32,
) -> bool {
    match project_wall(proj, view, wall, base_level, height) {
        Some(projected) => {
            rasterize(fb, proj, &projected, wall.color);
            true
        }
        None => false,
    }
}
