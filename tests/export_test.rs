//! PPM and raw export of rendered frames.

use std::fs;

use tile_raycaster::core::{Framebuffer, Presenter, Scene, SceneSettings, TileMap, PlayerPose};
use tile_raycaster::export::{encode_ppm, save_ppm, write_raw, ExportFormat, FileSink};
use tile_raycaster::types::{pack, PixelLayout};

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("tile-raycaster-{}-{}", std::process::id(), name))
}

#[test]
fn two_by_two_frame_exports_exact_bytes() {
    let fb = Framebuffer::new(2, 2, pack(10, 20, 30, 255));
    let mut out = Vec::new();
    encode_ppm(&fb, &mut out);

    let header = b"P6\n2 2\n255\n";
    assert_eq!(&out[..header.len()], header);
    assert_eq!(
        &out[header.len()..],
        &[10, 20, 30, 10, 20, 30, 10, 20, 30, 10, 20, 30]
    );
}

#[test]
fn save_ppm_writes_file() {
    let path = temp_path("save.ppm");
    let fb = Framebuffer::new(3, 2, pack(1, 2, 3, 4));
    save_ppm(&path, &fb).unwrap();

    let bytes = fs::read(&path).unwrap();
    assert_eq!(bytes.len(), b"P6\n3 2\n255\n".len() + 18);
    let _ = fs::remove_file(&path);
}

#[test]
fn file_sink_presents_scene_frames() {
    let path = temp_path("scene.ppm");
    let settings = SceneSettings {
        width: 64,
        height: 32,
        ..SceneSettings::default()
    };
    let mut scene = Scene::new(TileMap::default(), PlayerPose::default(), settings);
    let mut sink = FileSink::new(&path, ExportFormat::Ppm);

    scene.render_frame();
    scene.present(&mut sink).unwrap();
    scene.render_frame();
    scene.present(&mut sink).unwrap();
    assert_eq!(sink.frames_written(), 2);

    let bytes = fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"P6\n64 32\n255\n"));
    assert_eq!(bytes.len(), b"P6\n64 32\n255\n".len() + 64 * 32 * 3);
    let _ = fs::remove_file(&path);
}

#[test]
fn raw_argb_sink_matches_texture_layout() {
    let path = temp_path("frame.argb");
    let fb = Framebuffer::new(2, 1, pack(10, 20, 30, 255));
    let mut sink = FileSink::new(&path, ExportFormat::Raw(PixelLayout::Argb8888));
    sink.present(&fb).unwrap();

    let mut expected = Vec::new();
    write_raw(&mut expected, &fb, PixelLayout::Argb8888).unwrap();
    assert_eq!(fs::read(&path).unwrap(), expected);
    assert_eq!(expected, vec![30, 20, 10, 255, 30, 20, 10, 255]);
    let _ = fs::remove_file(&path);
}

#[test]
fn unwritable_target_is_reported_and_scene_continues() {
    let dir = temp_path("no-such-dir");
    let _ = fs::remove_dir_all(&dir);
    let mut sink = FileSink::new(dir.join("frame.ppm"), ExportFormat::Ppm);
    let settings = SceneSettings {
        width: 16,
        height: 8,
        ..SceneSettings::default()
    };
    let mut scene = Scene::new(TileMap::default(), PlayerPose::default(), settings);

    scene.render_frame();
    assert!(scene.present(&mut sink).is_err());
    let stats = scene.render_frame();
    assert_eq!(stats.frame, 2);
}
