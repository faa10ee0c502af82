use crate::camera::Camera;
use crate::input::{Action, InputQuery};

/// Walkable area in map units (matches the debug marker's framebuffer).
pub const BOUNDS_MIN: [f32; 2] = [20.0, 20.0];
pub const BOUNDS_MAX: [f32; 2] = [600.0, 450.0];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Movement {
    pub move_speed: f32, // units/s
    pub turn_speed: f32, // rad/s
}

impl Default for Movement {
    fn default() -> Self {
        Self {
            move_speed: 100.0,
            turn_speed: 1.2,
        }
    }
}

impl Movement {
    /// Apply one frame of input to the camera. No collision against walls.
    pub fn update(&self, camera: &mut Camera, input: &impl InputQuery, dt: f32) {
        camera.pos[0] = camera.pos[0].clamp(BOUNDS_MIN[0], BOUNDS_MAX[0]);
        camera.pos[1] = camera.pos[1].clamp(BOUNDS_MIN[1], BOUNDS_MAX[1]);

        let axis = |pos: Action, neg: Action| -> f32 {
            (input.is_down(pos) as i32 - input.is_down(neg) as i32) as f32
        };

        let turn = axis(Action::TurnLeft, Action::TurnRight);
        if turn != 0.0 {
            camera.turn(turn * self.turn_speed * dt);
        }

        let fwd = axis(Action::MoveForward, Action::MoveBackward);
        let strafe = axis(Action::MoveLeft, Action::MoveRight);
        let lift = axis(Action::MoveUp, Action::MoveDown);

        // Move in world space based on yaw
        let step = self.move_speed * dt;
        let [dx, dy] = camera.forward().map(|v| v * step);
        camera.pos[0] += fwd * dx + strafe * dy;
        camera.pos[1] += fwd * dy - strafe * dx;
        camera.pos[2] += lift * step;
    }
}
