use tile_raycaster::core::{PlayerPose, Scene, SceneSettings, TileMap};
use tile_raycaster::term::{encode_diff_into, HalfBlockView, Viewport};
use tile_raycaster::types::Rgba;

fn scene(width: usize, height: usize) -> Scene {
    let settings = SceneSettings {
        width,
        height,
        ..SceneSettings::default()
    };
    Scene::new(TileMap::default(), PlayerPose::default(), settings)
}

#[test]
fn term_view_fills_viewport_with_half_blocks() {
    let mut scene = scene(160, 80);
    scene.render_frame();

    let view = HalfBlockView::default();
    let cells = view.render(scene.framebuffer(), Viewport::new(80, 21), "status");

    assert_eq!(cells.width(), 80);
    assert_eq!(cells.height(), 21);
    for y in 0..20 {
        for x in 0..80 {
            assert_eq!(cells.get(x, y).unwrap().ch, '▀');
        }
    }
    assert_eq!(cells.get(0, 20).unwrap().ch, 's');
}

#[test]
fn term_view_shows_minimap_walls_top_left() {
    let mut scene = scene(160, 80);
    scene.render_frame();

    let cells = HalfBlockView::default()
        .with_status_row(false)
        .render(scene.framebuffer(), Viewport::new(160, 40), "");
    // One cell per pixel column, the top-left map cell is a wall.
    assert_eq!(cells.get(0, 0).unwrap().fg, Rgba::WALL);
}

#[test]
fn unchanged_frames_diff_to_nothing_but_reset() {
    let mut scene = scene(64, 32);
    scene.render_frame();
    let view = HalfBlockView::default();
    let a = view.render(scene.framebuffer(), Viewport::new(64, 16), "");
    scene.render_frame();
    let b = view.render(scene.framebuffer(), Viewport::new(64, 16), "");
    assert_eq!(a, b);

    let mut same = Vec::new();
    encode_diff_into(&a, &b, &mut same).unwrap();

    let mut moved = Vec::new();
    scene.queue_action(tile_raycaster::types::PlayerAction::RotateLeft);
    scene.render_frame();
    let c = view.render(scene.framebuffer(), Viewport::new(64, 16), "");
    encode_diff_into(&a, &c, &mut moved).unwrap();
    assert!(moved.len() > same.len());
}
