//! App Flow Integration Tests
//!
//! End-to-end walks through the screens: account creation, login, the
//! dashboard, the voicemail contacts panel, the dialer and logout.

use crm_fusion::app_core::auth::InMemoryAuthProvider;
use crm_fusion::app_state::AppConfig;
use crm_fusion::app_ui::navigation::{MainTab, Route};
use crm_fusion::app_ui::panel::{PanelError, PanelEvent, PanelPhase, Point};
use crm_fusion::app_ui::screens::{
    DashboardScreen, DialerScreen, LoginScreen, SettingsScreen, SignupScreen, VoicemailScreen,
};
use crm_fusion::App;
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

/// Sign up, log in, and land on the dashboard tab
#[tokio::test]
async fn test_signup_then_login() {
    let mut app = App::in_memory();

    app.navigation_mut().navigate(Route::Signup).unwrap();
    let mut signup = SignupScreen::new();
    signup.set_email("rachel@example.com");
    signup.set_password("hunter22");
    let notice = app.submit_signup(&mut signup).await.unwrap();
    assert_eq!(notice.title, "Success");
    assert_eq!(app.navigation().current_route(), &Route::Login);

    let mut login = LoginScreen::new();
    login.set_email("rachel@example.com");
    login.set_password("wrong-pass");
    let notice = app.submit_login(&mut login).await.unwrap();
    assert_eq!(notice.title, "Incorrect Password");
    assert_eq!(app.navigation().current_route(), &Route::Login);

    login.set_password("hunter22");
    let notice = app.submit_login(&mut login).await.unwrap();
    assert_eq!(notice.message, "Login successful!");
    assert_eq!(app.navigation().visible_route(), Route::Dashboard);
    assert_eq!(app.navigation().active_tab(), Some(MainTab::Dashboard));
    assert!(app.auth().is_authenticated().await);
}

/// Dashboard card 2 opens the voicemail screen; pick a contact from the panel
#[tokio::test]
async fn test_dashboard_to_voicemail_contact_switch() {
    let mut app = App::in_memory();
    app.navigation_mut().reset(Route::MainApp);

    let dashboard = DashboardScreen::new();
    dashboard.press_card("2", app.navigation_mut()).unwrap();
    assert_eq!(app.navigation().current_route(), &Route::VoiceMailActivity);

    let mut screen = app.voicemail_screen();
    assert_eq!(screen.selected_contact_id(), "1");

    screen.open_contacts();
    assert_eq!(
        screen.panel_mut().unwrap().begin_drag(Point::new(0.0, 0.0)),
        Err(PanelError::GestureRejected {
            phase: PanelPhase::Appearing
        })
    );
    assert_eq!(screen.tick(ms(200)), Some(PanelEvent::Shown));

    // drag by (+40, -25)
    let panel = screen.panel_mut().unwrap();
    let start = panel.position();
    panel.begin_drag(Point::new(600.0, 400.0)).unwrap();
    panel.drag_move(Point::new(620.0, 390.0)).unwrap();
    panel.drag_move(Point::new(640.0, 375.0)).unwrap();
    let end = panel.end_drag().unwrap();
    assert_eq!(end, Point::new(start.x + 40.0, start.y - 25.0));

    panel.set_query("stark");
    let matches: Vec<_> = panel.visible_items().iter().map(|c| c.id.clone()).collect();
    assert_eq!(matches, vec!["11".to_string()]);

    screen.select_contact("11").unwrap();
    assert_eq!(screen.selected_contact_id(), "11");
    assert_eq!(screen.tick(ms(200)), Some(PanelEvent::Hidden));

    // reopening starts centered again
    screen.open_contacts();
    assert_eq!(screen.panel().unwrap().position(), start);
    assert_eq!(screen.panel().unwrap().selected_id(), Some("11"));
}

/// Closing the panel mid-drag ends the drag and still hides cleanly
#[tokio::test]
async fn test_close_during_drag() {
    let app = App::in_memory();
    let mut screen: VoicemailScreen = app.voicemail_screen();
    screen.open_contacts();
    screen.tick(ms(200));

    let panel = screen.panel_mut().unwrap();
    panel.begin_drag(Point::new(500.0, 300.0)).unwrap();
    screen.close_contacts();

    let panel = screen.panel().unwrap();
    assert_eq!(panel.phase(), PanelPhase::Disappearing);
    assert_eq!(panel.drag_offset(), None);
    screen.tick(ms(200));
    assert!(!screen.contacts_visible());
}

/// Dialer timer counts while the call runs and holds its value after hang-up
#[tokio::test(start_paused = true)]
async fn test_dialer_call_lifecycle() {
    let mut dialer = DialerScreen::new();
    assert_eq!(dialer.call().message, "Please enter a number first.");

    for key in "5551234".chars() {
        dialer.press(key);
    }
    assert_eq!(dialer.call().message, "Calling 5551234");

    tokio::time::sleep(ms(65_500)).await;
    assert_eq!(dialer.call_duration(), "01:05");

    assert_eq!(dialer.end_call(), Some(65));
    tokio::time::sleep(ms(5_000)).await;
    assert_eq!(dialer.call_duration(), "01:05");
}

/// Logout from the settings tab returns to a fresh login stack
#[tokio::test]
async fn test_logout_from_settings() {
    let mut app = App::new(
        AppConfig::default(),
        InMemoryAuthProvider::with_account("a@b.com", "secret1"),
    );
    let mut login = LoginScreen::new();
    login.set_email("a@b.com");
    login.set_password("secret1");
    app.submit_login(&mut login).await.unwrap();
    app.navigation_mut().navigate(Route::Settings).unwrap();
    assert_eq!(app.navigation().visible_route(), Route::Settings);

    let mut settings = SettingsScreen::new();
    settings.logout.request();
    let notice = app.confirm_logout(&mut settings.logout).await.unwrap();
    assert_eq!(notice.title, "Logged out");
    assert_eq!(app.navigation().depth(), 1);
    assert_eq!(app.navigation().current_route(), &Route::Login);
    assert!(!app.auth().is_authenticated().await);
}

/// Configuration file drives the panel fade and clamping
#[tokio::test]
async fn test_app_from_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "theme": {{ "togglePolicy": "pin-manual" }},
            "panel": {{ "fadeMs": 400, "clampToScreen": true }},
            "viewport": {{ "width": 800, "height": 600 }}
        }}"#
    )
    .unwrap();

    let app = App::from_config_file(file.path(), InMemoryAuthProvider::new())
        .await
        .unwrap();
    assert_eq!(app.config().panel.fade_ms, 400);

    let mut screen = app.voicemail_screen();
    screen.open_contacts();
    assert_eq!(screen.tick(ms(200)), None);
    assert_eq!(screen.tick(ms(200)), Some(PanelEvent::Shown));

    let panel = screen.panel_mut().unwrap();
    let center = panel.position();
    panel.begin_drag(center).unwrap();
    let p = panel.drag_move(Point::new(5000.0, -5000.0)).unwrap();
    // 800 - 260 wide, top edge
    assert_eq!(p, Point::new(540.0, 0.0));
}

/// A missing config file is reported with its path
#[tokio::test]
async fn test_missing_config_file() {
    let err = App::from_config_file("/nonexistent/crm.json", InMemoryAuthProvider::new())
        .await
        .err()
        .unwrap();
    assert!(err.to_string().contains("/nonexistent/crm.json"));
}
