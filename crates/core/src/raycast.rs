//! RayCaster module - per-column ray marching and wall projection
//!
//! For each of `N` screen columns the caster sweeps one ray across the field
//! of view. The ray parameter `t` advances in fixed steps from the player's
//! position; the first step that lands in a wall cell wins and the wall strip
//! height is `screen_height / t`. There is no sub-step refinement and no
//! fisheye correction, so wall distance has the resolution of one step and
//! thin walls can be stepped over at large step sizes.
//!
//! Every non-terminal step also leaves a dim "floor trace" pixel at the
//! minimap-scaled position of the sample point, which draws the fan of rays
//! over the minimap.

use crate::framebuffer::Framebuffer;
use crate::map::TileMap;
use crate::minimap::MinimapLayout;
use crate::pose::PlayerPose;
use crate::types::{Rgba, FOV, MARCH_STEP, MAX_RANGE};

/// Outcome of marching one ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnHit {
    /// A wall cell was reached after travelling `distance` map units.
    Wall { distance: f32, height: f32 },
    /// The march ran out of range without touching a wall.
    NoHit,
}

impl ColumnHit {
    pub fn distance(&self) -> Option<f32> {
        match *self {
            ColumnHit::Wall { distance, .. } => Some(distance),
            ColumnHit::NoHit => None,
        }
    }
}

/// Screen region the 3D view is drawn into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewRect {
    pub x: i64,
    pub y: i64,
    pub width: usize,
    pub height: usize,
}

impl ViewRect {
    pub fn new(x: i64, y: i64, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right half of a `width` x `height` screen.
    pub fn right_half(width: usize, height: usize) -> Self {
        let half = width / 2;
        Self::new(half as i64, 0, width - half, height)
    }
}

/// Fixed-step ray marcher.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayCaster {
    pub fov: f32,
    pub step: f32,
    pub max_range: f32,
    pub wall_color: u32,
    pub trace_color: u32,
}

impl Default for RayCaster {
    fn default() -> Self {
        Self {
            fov: FOV,
            step: MARCH_STEP,
            max_range: MAX_RANGE,
            wall_color: Rgba::WALL.pack(),
            trace_color: Rgba::FLOOR_TRACE.pack(),
        }
    }
}

impl RayCaster {
    pub fn new(fov: f32, step: f32, max_range: f32) -> Self {
        Self {
            fov,
            step,
            max_range,
            ..Self::default()
        }
    }

    /// Ray angle for `column` out of `columns`.
    #[inline]
    pub fn column_angle(&self, pose_angle: f32, column: usize, columns: usize) -> f32 {
        pose_angle - self.fov / 2.0 + self.fov * column as f32 / columns.max(1) as f32
    }

    /// Wall strip height for a hit at `distance`.
    ///
    /// A hit at distance zero (the player stands inside a wall cell) fills
    /// the whole screen height.
    #[inline]
    pub fn project(&self, distance: f32, screen_height: usize) -> f32 {
        if distance <= 0.0 {
            return screen_height as f32;
        }
        screen_height as f32 / distance
    }

    /// March one ray at `angle`, calling `on_step` with every sample point
    /// that did not hit a wall.
    pub fn cast(
        &self,
        map: &TileMap,
        pose: &PlayerPose,
        angle: f32,
        screen_height: usize,
        mut on_step: impl FnMut(f32, f32),
    ) -> ColumnHit {
        if !(self.step > 0.0) || !self.step.is_finite() {
            return ColumnHit::NoHit;
        }
        let (cos, sin) = (angle.cos(), angle.sin());

        // t is derived from an integer counter so it does not drift. The
        // counter is bounded by the sample count of the range (saturating
        // cast, one spare step for rounding).
        let samples = (self.max_range / self.step).ceil() as u64;
        for k in 0..=samples.saturating_add(1) {
            let t = k as f32 * self.step;
            if !(t < self.max_range) {
                break;
            }
            let cx = pose.x + t * cos;
            let cy = pose.y + t * sin;
            if map.is_wall(cx, cy) {
                return ColumnHit::Wall {
                    distance: t,
                    height: self.project(t, screen_height),
                };
            }
            on_step(cx, cy);
        }
        ColumnHit::NoHit
    }

    /// March the ray of one screen column without tracing.
    pub fn cast_column(
        &self,
        map: &TileMap,
        pose: &PlayerPose,
        column: usize,
        columns: usize,
        screen_height: usize,
    ) -> ColumnHit {
        let angle = self.column_angle(pose.angle, column, columns);
        self.cast(map, pose, angle, screen_height, |_, _| {})
    }

    /// Draw every column of `view`, leaving floor traces on the minimap.
    ///
    /// Returns the number of columns that hit a wall.
    pub fn render(
        &self,
        fb: &mut Framebuffer,
        map: &TileMap,
        pose: &PlayerPose,
        view: ViewRect,
        minimap: &MinimapLayout,
    ) -> usize {
        let columns = view.width;
        let mut hits = 0;
        for i in 0..columns {
            let angle = self.column_angle(pose.angle, i, columns);
            let hit = self.cast(map, pose, angle, view.height, |cx, cy| {
                let (px, py) = minimap.to_screen(cx, cy);
                fb.set_pixel(px, py, self.trace_color);
            });

            if let ColumnHit::Wall { height, .. } = hit {
                hits += 1;
                // Saturating float cast; the rect is clipped to the buffer.
                let h = height as usize;
                let top = view.y + (view.height / 2) as i64 - (h / 2) as i64;
                fb.draw_rect(view.x + i as i64, top, 1, h, self.wall_color);
            }
        }
        hits
    }
}
