// SPDX-License-Identifier: MPL-2.0
use iced::{Point, Vector};
use image_rs::{Rgba, RgbaImage};
use tempfile::tempdir;
use yf_image_deck::app::{startup, Startup};
use yf_image_deck::config::{self, Config, GeneralConfig, ViewerConfig};
use yf_image_deck::i18n::fluent::I18n;
use yf_image_deck::media;
use yf_image_deck::ui::notice::Severity;
use yf_image_deck::ui::state::{ViewportTransformController, WheelDirection};

#[test]
fn test_open_image_then_zoom_and_pan() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let image_path = dir.path().join("landscape.png");
    RgbaImage::from_pixel(16, 9, Rgba([10, 200, 30, 255]))
        .save(&image_path)
        .expect("Failed to write png");

    let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
    let path = match startup::plan(image_path.to_str(), &i18n) {
        Startup::Load(path) => path,
        other => panic!("expected a load, got {other:?}"),
    };
    let image = media::load_image(&path).expect("png should load");
    assert_eq!((image.width, image.height), (16, 9));
    assert_eq!(media::display_name(&path), "landscape.png");

    let mut controller = ViewportTransformController::default();
    controller.on_wheel(Point::new(100.0, 50.0), WheelDirection::Up);
    let after_zoom = controller.transform().offset;
    assert!((after_zoom.x + 10.0).abs() < 1e-4);
    assert!((after_zoom.y + 5.0).abs() < 1e-4);

    assert!(controller.on_left_button_down(Point::new(200.0, 200.0)));
    controller.on_mouse_move(Point::new(210.0, 190.0));
    controller.on_mouse_move(Point::new(260.0, 230.0));
    controller.on_left_button_up();

    let panned = controller.transform().offset;
    let expected = after_zoom + Vector::new(60.0, 30.0);
    assert!((panned.x - expected.x).abs() < 1e-4);
    assert!((panned.y - expected.y).abs() < 1e-4);

    // Dropping below natural size recenters the image.
    controller.on_wheel(Point::new(5.0, 5.0), WheelDirection::Down);
    controller.on_wheel(Point::new(5.0, 5.0), WheelDirection::Down);
    assert!(!controller.transform().scale.is_magnified());
    assert_eq!(controller.transform().offset, Vector::new(0.0, 0.0));
}

#[test]
fn test_missing_image_produces_single_info_notice() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let missing = dir.path().join("missing.jpg");
    let i18n = I18n::new(Some("zh-CN".to_string()), &Config::default());

    match startup::plan(missing.to_str(), &i18n) {
        Startup::Notify(notice) => {
            assert_eq!(notice.severity, Severity::Info);
            assert_eq!(notice.title, "提示");
        }
        other => panic!("expected a notice, got {other:?}"),
    }
}

#[test]
fn test_language_and_limits_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let chinese = Config {
        general: GeneralConfig {
            language: Some("zh-CN".to_string()),
        },
        viewer: ViewerConfig {
            max_scale: Some(2.0),
            ..ViewerConfig::default()
        },
    };
    config::save_to_path(&chinese, &config_path).expect("Failed to write config file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());

    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "zh-CN");

    let mut controller = ViewportTransformController::new(loaded.viewer.zoom_limits());
    for _ in 0..20 {
        controller.on_wheel(Point::ORIGIN, WheelDirection::Up);
    }
    assert_eq!(controller.transform().scale.value(), 2.0);

    dir.close().expect("Failed to close temporary directory");
}
