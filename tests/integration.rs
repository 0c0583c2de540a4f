// SPDX-License-Identifier: MPL-2.0
use instafilter::app::config::{self, Config, FilterConfig, GeneralConfig, PickerConfig};
use instafilter::filter::{self, FilterAmount, FilterKind};
use instafilter::i18n::fluent::I18n;
use instafilter::media::{self, ImageData, EXAMPLE_IMAGE};
use instafilter::picker::{self, Coordinator, PickerResult};
use instafilter::ui::theming::ThemeMode;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let english = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
            theme_mode: ThemeMode::Dark,
        },
        ..Config::default()
    };
    config::save_to_path(&english, &path).expect("Failed to write english config");
    let loaded = config::load_from_path(&path).expect("Failed to load english config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
    assert_eq!(i18n.tr("select-image-button"), "Select an image");

    let french = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            theme_mode: ThemeMode::Dark,
        },
        ..Config::default()
    };
    config::save_to_path(&french, &path).expect("Failed to write french config");
    let loaded = config::load_from_path(&path).expect("Failed to load french config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(i18n.tr("select-image-button"), "Choisir une image");
}

#[test]
fn test_cli_language_overrides_config() {
    let config = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn test_every_locale_translates_filter_names() {
    let mut i18n = I18n::new(Some("en-US".to_string()), &Config::default());
    for locale in i18n.available_locales.clone() {
        i18n.set_locale(locale.clone());
        for kind in FilterKind::ALL {
            let label = i18n.tr(&format!("filter-{}", kind.id()));
            assert!(
                !label.starts_with("MISSING"),
                "{locale} lacks a label for {}",
                kind.id()
            );
        }
    }
}

#[test]
fn test_filter_preferences_survive_restart() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let base = Some(dir.path().to_path_buf());

    let saved = Config {
        filter: FilterConfig {
            kind: Some(FilterKind::Vignette),
            amount: Some(FilterAmount::new(0.25)),
        },
        picker: PickerConfig {
            last_directory: Some(PathBuf::from("/photos/holiday")),
        },
        ..Config::default()
    };
    config::save_with_override(&saved, base.clone()).expect("Failed to save config");

    let loaded = config::load_with_override(base);
    assert_eq!(loaded.filter.kind_or_default(), FilterKind::Vignette);
    assert_eq!(loaded.filter.amount_or_default(), FilterAmount::new(0.25));
    assert_eq!(
        loaded.picker.last_directory,
        Some(PathBuf::from("/photos/holiday"))
    );
}

#[test]
fn test_unreadable_config_falls_back_to_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "[filter\nkind = ")
        .expect("Failed to write broken config");

    let loaded = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, Config::default());
}

#[test]
fn test_every_filter_renders_the_bundled_example() {
    let input = media::load_bundled(EXAMPLE_IMAGE).expect("bundled example should decode");
    for kind in FilterKind::ALL {
        let output = filter::render(kind, FilterAmount::new(0.5), &input)
            .unwrap_or_else(|| panic!("{} produced no output", kind.id()));
        assert_eq!((output.width, output.height), (input.width, input.height));
    }
}

#[test]
fn test_rendered_image_saves_and_reloads() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let input = ImageData::from_rgba(8, 6, vec![200; 8 * 6 * 4]);
    let output = filter::render(FilterKind::SepiaTone, FilterAmount::new(1.0), &input)
        .expect("sepia should render");

    let path = dir.path().join("out.png");
    media::save_image(&output, &path).expect("png save should succeed");
    let reloaded = media::load_image(&path).expect("saved png should decode");
    assert_eq!(reloaded, output);
}

#[tokio::test]
async fn test_single_image_pick_loads_that_image() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("picked.png");
    let picture = ImageData::from_rgba(4, 4, vec![90; 4 * 4 * 4]);
    media::save_image(&picture, &path).expect("Failed to write picked image");

    let mut coordinator = Coordinator::new();
    let session = coordinator.begin();
    let chosen = coordinator
        .did_finish_picking(session, vec![PickerResult::new(&path)])
        .expect("one image should be accepted");
    assert!(!coordinator.is_presented());

    let loaded = picker::load_selection(chosen)
        .await
        .expect("picked image should load");
    assert!(coordinator.accepts(session));
    assert_eq!(loaded, picture);
}

#[tokio::test]
async fn test_missing_pick_reports_error() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let result = picker::load_selection(dir.path().join("gone.png")).await;
    assert!(result.is_err());
}

#[test]
fn test_empty_pick_is_ignored() {
    let mut coordinator = Coordinator::new();
    let session = coordinator.begin();
    assert!(coordinator.did_finish_picking(session, Vec::new()).is_none());
    assert!(!coordinator.is_presented());
}
