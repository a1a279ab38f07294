//! Player position and gaze.

use crate::types::PlayerAction;

/// Player position in map-cell units and gaze angle in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerPose {
    pub x: f32,
    pub y: f32,
    pub angle: f32,
}

impl PlayerPose {
    pub const fn new(x: f32, y: f32, angle: f32) -> Self {
        Self { x, y, angle }
    }

    /// Unit gaze vector.
    #[inline]
    pub fn direction(&self) -> (f32, f32) {
        (self.angle.cos(), self.angle.sin())
    }

    /// Apply one movement action. `Quit` leaves the pose unchanged.
    ///
    /// There is no collision response: the player can walk into walls.
    pub fn apply(&mut self, action: PlayerAction, move_step: f32, turn_step: f32) {
        let (dx, dy) = self.direction();
        match action {
            PlayerAction::MoveForward => {
                self.x += dx * move_step;
                self.y += dy * move_step;
            }
            PlayerAction::MoveBackward => {
                self.x -= dx * move_step;
                self.y -= dy * move_step;
            }
            PlayerAction::RotateLeft => self.angle -= turn_step,
            PlayerAction::RotateRight => self.angle += turn_step,
            PlayerAction::Quit => {}
        }
    }
}

impl Default for PlayerPose {
    fn default() -> Self {
        Self::new(5.956, 11.345, -1.5)
    }
}
