use std::fs;

use tile_raycaster::config::AppConfig;
use tile_raycaster::core::RenderError;

#[test]
fn json_file_overrides_map_and_pose() {
    let path = std::env::temp_dir().join(format!("tile-raycaster-{}-level.json", std::process::id()));
    fs::write(
        &path,
        r####"{
            "screen": {"width": 64, "height": 32},
            "player": {"x": 1.5, "y": 1.5, "angle": 0.0},
            "map": {"width": 3, "height": 3, "rows": ["###", "# #", "###"]}
        }"####,
    )
    .unwrap();

    let config = AppConfig::load(&path).unwrap();
    let mut scene = config.build_scene().unwrap();
    assert_eq!(scene.map().width(), 3);
    let stats = scene.render_frame();
    assert_eq!(stats.wall_hits, stats.columns);
    let _ = fs::remove_file(&path);
}

#[test]
fn malformed_map_aborts_with_diagnostic() {
    let config = AppConfig::from_json(r#####"{"map": {"width": 4, "height": 4, "rows": ["####", "#  #"]}}"#####).unwrap();
    let err = match config.build_scene() {
        Ok(_) => panic!("8 symbols cannot fill a 4x4 map"),
        Err(e) => e,
    };

    let message = format!("{:#}", err);
    assert!(message.contains("4x4"), "{}", message);
    assert!(message.contains("expected 16 cells, got 8"), "{}", message);
    assert!(matches!(
        err.downcast_ref::<RenderError>(),
        Some(RenderError::MalformedMap { expected: 16, actual: 8 })
    ));
}

#[test]
fn missing_config_file_is_an_error() {
    assert!(AppConfig::load("/nonexistent/tile-raycaster.json").is_err());
}
