use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tile_raycaster::core::{PlayerPose, Scene, SceneSettings, TileMap};
use tile_raycaster::export::encode_ppm;
use tile_raycaster::term::{CellBuffer, HalfBlockView, Viewport};
use tile_raycaster::types::PlayerAction;

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            let _ = layout;
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            let _ = (layout, new_size);
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

#[test]
fn frame_and_export_hot_paths_do_not_allocate() {
    // Setup (outside counting) so one-time allocations don't trip the gate.
    let settings = SceneSettings {
        width: 256,
        height: 128,
        ..SceneSettings::default()
    };
    let mut scene = Scene::new(TileMap::default(), PlayerPose::default(), settings);
    let view = HalfBlockView::default();
    let viewport = Viewport::new(80, 24);
    let mut cells = CellBuffer::new(viewport.width, viewport.height);
    let mut ppm = Vec::new();

    // Warm-up.
    scene.render_frame();
    view.render_into(scene.framebuffer(), viewport, "", &mut cells);
    encode_ppm(scene.framebuffer(), &mut ppm);

    let allocs = with_alloc_counting(|| {
        for i in 0..50 {
            let action = if i % 2 == 0 {
                PlayerAction::RotateLeft
            } else {
                PlayerAction::MoveForward
            };
            scene.queue_action(action);
            scene.queue_action(PlayerAction::RotateRight);
            let _ = scene.render_frame();
            view.render_into(scene.framebuffer(), viewport, "status", &mut cells);
            ppm.clear();
            encode_ppm(scene.framebuffer(), &mut ppm);
        }
    });

    assert!(allocs == 0);
}
