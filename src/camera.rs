use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub pos: [f32; 3], // (x, y) in world space, z = eye height
    pub yaw: f32,      // radians, camera facing direction in the X-Y plane
}

impl Camera {
    /// Snapshot of the pose with the yaw rotation precomputed, taken once
    /// per frame.
    #[inline]
    pub fn view(&self) -> View {
        let (sin, cos) = self.yaw.sin_cos();
        View {
            origin: self.pos,
            cos,
            sin,
        }
    }

    /// Unit vector the camera looks along in the X-Y plane.
    #[inline]
    pub fn forward(&self) -> [f32; 2] {
        let (s, c) = self.yaw.sin_cos();
        [s, c]
    }

    /// Rotate by `delta` radians, keeping yaw in `[0, 2π)`.
    pub fn turn(&mut self, delta: f32) {
        self.yaw = wrap_yaw(self.yaw + delta);
    }
}

#[inline]
pub fn wrap_yaw(yaw: f32) -> f32 {
    let y = yaw.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if y >= TAU { 0.0 } else { y }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct View {
    pub origin: [f32; 3],
    pub cos: f32,
    pub sin: f32,
}

impl View {
    /// World X-Y point to camera space: `[tx, ty]` with `tx` lateral and
    /// `ty` the forward depth.
    #[inline]
    pub fn to_camera(&self, p: [f32; 2]) -> [f32; 2] {
        // Translate
        let dx = p[0] - self.origin[0];
        let dy = p[1] - self.origin[1];
        // Rotate by -yaw
        let tx = dx * self.cos - dy * self.sin;
        let ty = dy * self.cos + dx * self.sin;
        [tx, ty]
    }

    #[inline]
    pub fn eye_z(&self) -> f32 {
        self.origin[2]
    }
}
