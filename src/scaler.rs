use rayon::{
    iter::{IndexedParallelIterator, ParallelIterator},
    slice::ParallelSliceMut,
};

use crate::color::Rgb;

/// Destination rectangle of the scaled frame inside the window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

/// Largest uniform scale of `src` that fits in `dst`, centred.
pub fn fit_viewport(dst_w: usize, dst_h: usize, src_w: usize, src_h: usize) -> Viewport {
    if src_w == 0 || src_h == 0 {
        return Viewport::default();
    }
    let scale = (dst_w as f32 / src_w as f32).min(dst_h as f32 / src_h as f32);
    let width = ((src_w as f32 * scale) as usize).min(dst_w);
    let height = ((src_h as f32 * scale) as usize).min(dst_h);
    Viewport {
        x: (dst_w - width) / 2,
        y: (dst_h - height) / 2,
        width,
        height,
    }
}

/// Precomputed nearest-source lookup for every viewport column and row
pub struct ScaleLut {
    viewport: Viewport,
    src_x: Vec<usize>,
    src_y: Vec<usize>,
}

impl ScaleLut {
    pub fn empty() -> Self {
        Self {
            viewport: Viewport::default(),
            src_x: Vec::new(),
            src_y: Vec::new(),
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}

pub fn build_scale_lut(dst_w: usize, dst_h: usize, src_w: usize, src_h: usize) -> ScaleLut {
    let viewport = fit_viewport(dst_w, dst_h, src_w, src_h);
    if viewport.width == 0 || viewport.height == 0 {
        return ScaleLut {
            viewport,
            ..ScaleLut::empty()
        };
    }

    let sx = src_w as f32 / viewport.width as f32;
    let sy = src_h as f32 / viewport.height as f32;

    // Sample pixel centres so the mapping is symmetric
    let src_x = (0..viewport.width)
        .map(|x| (((x as f32 + 0.5) * sx) as usize).min(src_w - 1))
        .collect();
    let src_y = (0..viewport.height)
        .map(|y| (((y as f32 + 0.5) * sy) as usize).min(src_h - 1))
        .collect();

    ScaleLut {
        viewport,
        src_x,
        src_y,
    }
}

/// Parallel point-filtered stretch into the viewport, `border` elsewhere.
/// Rows are processed in parallel for cache friendly writes
pub fn blit_letterboxed(dst: &mut [Rgb], dw: usize, src: &[Rgb], sw: usize, lut: &ScaleLut, border: Rgb) {
    if dw == 0 {
        return;
    }
    let vp = lut.viewport;
    dst.par_chunks_mut(dw).enumerate().for_each(|(y, dst_row)| {
        if y < vp.y || y >= vp.y + vp.height {
            dst_row.fill(border);
            return;
        }
        let row = lut.src_y[y - vp.y] * sw;

        let (left, rest) = dst_row.split_at_mut(vp.x.min(dw));
        let (mid, right) = rest.split_at_mut(vp.width.min(rest.len()));
        left.fill(border);
        right.fill(border);
        for (d, &sx) in mid.iter_mut().zip(&lut.src_x) {
            *d = src[row + sx];
        }
    });
}
