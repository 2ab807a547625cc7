//! Theme Lifecycle Integration Tests
//!
//! The theme broadcast as screens see it: toggles from the settings tab,
//! OS appearance changes while mounted, and release on unmount.

use crm_fusion::app_core::auth::InMemoryAuthProvider;
use crm_fusion::app_state::{AppConfig, TogglePolicy};
use crm_fusion::app_ui::components::TabBar;
use crm_fusion::app_ui::navigation::MainTab;
use crm_fusion::app_ui::screens::SettingsScreen;
use crm_fusion::app_ui::theme::{ColorScheme, SystemAppearance, ThemeName};
use crm_fusion::App;
use std::time::Duration;

async fn wait_for_theme(app: &App, name: ThemeName) {
    let mut rx = app.theme().subscribe();
    tokio::time::timeout(Duration::from_secs(1), async {
        while rx.borrow_and_update().name != name {
            if rx.changed().await.is_err() {
                break;
            }
        }
    })
    .await
    .unwrap();
}

/// Toggling twice from settings restores the palette every screen reads
#[tokio::test]
async fn test_settings_double_toggle() {
    let app = App::in_memory();
    let settings = SettingsScreen::new();
    let before = app.theme().get_theme();
    let bar_before = TabBar::new(&before, MainTab::Settings);

    settings.toggle_theme(app.theme());
    let dark = app.theme().get_theme();
    assert!(dark.is_dark());
    assert_ne!(TabBar::new(&dark, MainTab::Settings), bar_before);

    settings.toggle_theme(app.theme());
    assert_eq!(app.theme().get_theme(), before);
    assert_eq!(TabBar::new(&app.theme().get_theme(), MainTab::Settings), bar_before);
}

/// Mounted app follows OS appearance changes
#[tokio::test]
async fn test_mounted_app_follows_system() {
    let source = SystemAppearance::new(ColorScheme::Dark);
    let mut app = App::in_memory();
    app.mount(&source);
    assert_eq!(app.theme().theme_name(), ThemeName::Dark);

    source.set(ColorScheme::Light);
    wait_for_theme(&app, ThemeName::Light).await;

    source.set(ColorScheme::NoPreference);
    source.set(ColorScheme::Dark);
    wait_for_theme(&app, ThemeName::Dark).await;
}

/// With manual pinning a toggle survives the next OS change
#[tokio::test]
async fn test_pinned_toggle_survives_system_change() {
    let mut config = AppConfig::default();
    config.theme.toggle_policy = TogglePolicy::PinManual;
    let mut app = App::new(config, InMemoryAuthProvider::new());

    let source = SystemAppearance::new(ColorScheme::Light);
    app.mount(&source);
    assert_eq!(app.theme().toggle_theme(), ThemeName::Dark);

    source.set(ColorScheme::Light);
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
    assert_eq!(app.theme().theme_name(), ThemeName::Dark);
    assert!(app.theme().is_pinned());
}

/// Unmounting stops listening to the appearance source
#[tokio::test]
async fn test_unmount_stops_following() {
    let source = SystemAppearance::new(ColorScheme::Light);
    let mut app = App::in_memory();
    app.mount(&source);
    assert_eq!(source.subscriber_count(), 1);

    app.unmount();
    for _ in 0..10 {
        if source.subscriber_count() == 0 {
            break;
        }
        tokio::task::yield_now().await;
    }
    assert_eq!(source.subscriber_count(), 0);

    source.set(ColorScheme::Dark);
    tokio::task::yield_now().await;
    assert_eq!(app.theme().theme_name(), ThemeName::Light);
}
