//! Overhead minimap of the level and the player marker.

use crate::framebuffer::Framebuffer;
use crate::map::TileMap;
use crate::pose::PlayerPose;
use crate::raycast::RayCaster;
use crate::types::{Rgba, PLAYER_MARKER_SIZE};

/// Screen pixels per map cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimapLayout {
    pub cell_w: usize,
    pub cell_h: usize,
}

impl MinimapLayout {
    pub fn new(cell_w: usize, cell_h: usize) -> Self {
        Self { cell_w, cell_h }
    }

    /// Largest integer cell size that fits the map into a region.
    pub fn fit(map: &TileMap, region_w: usize, region_h: usize) -> Self {
        Self {
            cell_w: region_w / map.width().max(1),
            cell_h: region_h / map.height().max(1),
        }
    }

    /// Pixel position of a world point.
    #[inline]
    pub fn to_screen(&self, x: f32, y: f32) -> (i64, i64) {
        ((x * self.cell_w as f32) as i64, (y * self.cell_h as f32) as i64)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimapRenderer {
    pub wall_color: u32,
    pub marker_color: u32,
    pub marker_size: usize,
    /// Color of the single gaze ray; `None` disables it.
    pub gaze_color: Option<u32>,
}

impl Default for MinimapRenderer {
    fn default() -> Self {
        Self {
            wall_color: Rgba::WALL.pack(),
            marker_color: Rgba::PLAYER_MARKER.pack(),
            marker_size: PLAYER_MARKER_SIZE,
            gaze_color: None,
        }
    }
}

impl MinimapRenderer {
    pub fn with_gaze(mut self, color: u32) -> Self {
        self.gaze_color = Some(color);
        self
    }

    /// Draw every wall cell, then the player marker on top.
    pub fn render(&self, fb: &mut Framebuffer, map: &TileMap, pose: &PlayerPose, layout: &MinimapLayout) {
        for (col, row, tile) in map.tiles() {
            if !tile.is_wall() {
                continue;
            }
            fb.draw_rect(
                (col * layout.cell_w) as i64,
                (row * layout.cell_h) as i64,
                layout.cell_w,
                layout.cell_h,
                self.wall_color,
            );
        }

        let (px, py) = layout.to_screen(pose.x, pose.y);
        fb.draw_rect(px, py, self.marker_size, self.marker_size, self.marker_color);
    }

    /// Trace the ray straight along the gaze until it meets a wall.
    pub fn render_gaze(
        &self,
        fb: &mut Framebuffer,
        map: &TileMap,
        pose: &PlayerPose,
        layout: &MinimapLayout,
        caster: &RayCaster,
    ) {
        let Some(color) = self.gaze_color else {
            return;
        };
        caster.cast(map, pose, pose.angle, fb.height(), |cx, cy| {
            let (x, y) = layout.to_screen(cx, cy);
            fb.set_pixel(x, y, color);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BG: u32 = 0;

    #[test]
    fn fit_divides_region_by_map_extent() {
        let map = TileMap::default();
        let layout = MinimapLayout::fit(&map, 512, 512);
        assert_eq!(layout, MinimapLayout::new(32, 32));
    }

    #[test]
    fn walls_become_cell_sized_rects() {
        let map = TileMap::from_str_grid("#  #", 2, 2).unwrap();
        let mut fb = Framebuffer::new(8, 8, BG);
        let mm = MinimapRenderer {
            marker_size: 0,
            ..MinimapRenderer::default()
        };
        mm.render(&mut fb, &map, &PlayerPose::new(1.0, 1.0, 0.0), &MinimapLayout::new(4, 4));

        let wall = mm.wall_color;
        assert_eq!(fb.get(0, 0), Some(wall));
        assert_eq!(fb.get(3, 3), Some(wall));
        assert_eq!(fb.get(4, 0), Some(BG));
        assert_eq!(fb.get(7, 7), Some(wall));
        assert_eq!(fb.pixels().iter().filter(|&&p| p == wall).count(), 32);
    }

    #[test]
    fn player_marker_is_drawn_over_walls() {
        let map = TileMap::from_str_grid("####", 2, 2).unwrap();
        let mut fb = Framebuffer::new(20, 20, BG);
        let mm = MinimapRenderer::default();
        mm.render(&mut fb, &map, &PlayerPose::new(0.5, 0.5, 0.0), &MinimapLayout::new(10, 10));

        let marker = mm.marker_color;
        assert_eq!(fb.get(5, 5), Some(marker));
        assert_eq!(fb.get(9, 9), Some(marker));
        assert_eq!(fb.get(10, 10), Some(mm.wall_color));
        assert_eq!(fb.pixels().iter().filter(|&&p| p == marker).count(), 25);
    }

    #[test]
    fn gaze_ray_stops_at_wall() {
        let map = TileMap::from_str_grid("   #", 4, 1).unwrap();
        let mut fb = Framebuffer::new(40, 10, BG);
        let mm = MinimapRenderer::default().with_gaze(9);
        let pose = PlayerPose::new(0.5, 0.5, 0.0);
        mm.render_gaze(&mut fb, &map, &pose, &MinimapLayout::new(10, 10), &RayCaster::default());

        assert_eq!(fb.get(5, 5), Some(9));
        assert_eq!(fb.get(29, 5), Some(9));
        assert_eq!(fb.get(30, 5), Some(BG));
    }

    #[test]
    fn gaze_disabled_by_default() {
        let map = TileMap::from_str_grid("   #", 4, 1).unwrap();
        let mut fb = Framebuffer::new(40, 10, BG);
        let mm = MinimapRenderer::default();
        mm.render_gaze(&mut fb, &map, &PlayerPose::new(0.5, 0.5, 0.0), &MinimapLayout::new(10, 10), &RayCaster::default());
        assert!(fb.pixels().iter().all(|&p| p == BG));
    }
}
