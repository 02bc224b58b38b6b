//! Tests for the status bar variant (StatusIndicatorController).

mod common;

use common::{fake_png, write_icon, Call, RecordingHost};
use txtpocket_shell::model::{ContextMenu, IconAppearance, MenuAction, MenuEntry};
use txtpocket_shell::shell::{ClickOutcome, StatusIndicatorController};
use txtpocket_shell::{ClickKind, ShellConfig, ShellError};

fn controller(host: RecordingHost) -> StatusIndicatorController<RecordingHost> {
    StatusIndicatorController::new(host, &ShellConfig::default())
}

fn launched(host: RecordingHost) -> StatusIndicatorController<RecordingHost> {
    let mut c = controller(host);
    c.on_will_finish_launching();
    c.on_did_finish_launching();
    c.host_mut().calls.clear();
    c
}

// === Setup idempotence ===

#[test]
fn will_then_did_finish_creates_one_status_item() {
    let mut c = controller(RecordingHost::default());
    c.on_will_finish_launching();
    c.on_did_finish_launching();
    assert_eq!(c.host().status_items_created(), 1);
    assert!(c.is_set_up());
}

#[test]
fn did_finish_alone_creates_one_status_item() {
    let mut c = controller(RecordingHost::default());
    assert!(!c.is_set_up());
    c.on_did_finish_launching();
    assert_eq!(c.host().status_items_created(), 1);
}

#[test]
fn repeated_hooks_never_create_a_second_item() {
    let mut c = controller(RecordingHost::default());
    for _ in 0..3 {
        c.on_did_finish_launching();
        c.on_will_finish_launching();
        c.setup_indicator();
    }
    assert_eq!(c.host().status_items_created(), 1);
}

#[test]
fn setup_creates_variable_length_visible_item() {
    let mut c = controller(RecordingHost::default());
    c.on_will_finish_launching();
    let calls = &c.host().calls;
    assert_eq!(calls[0], Call::CreateStatusItem(-1.0));
    assert_eq!(calls[1], Call::SetVisible(true));
    assert!(c.indicator().unwrap().visible);
}

#[test]
fn setup_binds_left_and_right_mouse_up() {
    let mut c = controller(RecordingHost::default());
    c.on_will_finish_launching();
    assert!(c.host().calls.contains(&Call::BindClicks(vec![
        ClickKind::LeftMouseUp,
        ClickKind::RightMouseUp
    ])));
}

#[test]
fn setup_installs_quit_menu_once() {
    let mut c = controller(RecordingHost::default());
    c.on_will_finish_launching();
    c.on_did_finish_launching();

    let expected = ContextMenu::status_bar("TxtPocket");
    assert_eq!(
        expected.entries(),
        &[MenuEntry::item("Quit TxtPocket", "q", MenuAction::Terminate)]
    );
    assert_eq!(c.host().count(|call| matches!(call, Call::InstallMenu(_))), 1);
    assert!(c.host().calls.contains(&Call::InstallMenu(expected.clone())));
    assert_eq!(c.indicator().unwrap().menu, expected);
}

// === Icon ===

#[test]
fn missing_icon_falls_back_to_title() {
    let dir = tempfile::tempdir().unwrap();
    let mut c = controller(RecordingHost {
        frameworks_dir: Some(dir.path().to_path_buf()),
        ..RecordingHost::default()
    });
    c.setup_indicator();

    assert_eq!(c.host().titles_set(), vec!["T"]);
    assert!(c.host().images_set().is_empty());
    assert_eq!(
        c.indicator().unwrap().appearance,
        IconAppearance::Title("T".to_string())
    );
}

#[test]
fn no_frameworks_dir_falls_back_to_title() {
    let mut c = controller(RecordingHost::default());
    c.setup_indicator();
    assert_eq!(c.host().titles_set(), vec!["T"]);
    assert!(c.host().images_set().is_empty());
}

#[test]
fn undecodable_icon_falls_back_to_title() {
    let dir = tempfile::tempdir().unwrap();
    let root = write_icon(dir.path(), b"definitely not a png");
    let mut c = controller(RecordingHost {
        frameworks_dir: Some(root),
        ..RecordingHost::default()
    });
    c.setup_indicator();
    assert_eq!(c.host().titles_set(), vec!["T"]);
    assert!(c.host().images_set().is_empty());
}

#[test]
fn valid_icon_is_sized_and_template() {
    let dir = tempfile::tempdir().unwrap();
    let root = write_icon(dir.path(), &fake_png());
    let mut c = controller(RecordingHost {
        frameworks_dir: Some(root.clone()),
        ..RecordingHost::default()
    });
    c.setup_indicator();

    let images = c.host().images_set();
    assert_eq!(images.len(), 1);
    assert_eq!(
        images[0],
        &Call::SetImage {
            path: root.join("App.framework/Resources/flutter_assets/assets/app_icon.png"),
            width: 18.0,
            height: 18.0,
            template: true,
        }
    );
    assert!(c.host().titles_set().is_empty());
    assert!(c.indicator().unwrap().appearance.is_image());
}

#[test]
fn icon_path_follows_config() {
    let dir = tempfile::tempdir().unwrap();
    let icon = dir.path().join("icons/menu.png");
    std::fs::create_dir_all(icon.parent().unwrap()).unwrap();
    std::fs::write(&icon, fake_png()).unwrap();

    let mut config = ShellConfig::default();
    config.icon.relative_path = "icons/menu.png".to_string();
    config.icon.size = 22.0;
    let mut c = StatusIndicatorController::new(
        RecordingHost {
            frameworks_dir: Some(dir.path().to_path_buf()),
            ..RecordingHost::default()
        },
        &config,
    );
    c.setup_indicator();

    assert_eq!(
        c.indicator().unwrap().appearance,
        IconAppearance::Image {
            width: 22.0,
            height: 22.0,
            template: true
        }
    );
}

// === Click dispatch ===

#[test]
fn right_click_presents_menu_without_showing_window() {
    let mut c = launched(RecordingHost::with_window());
    c.host_mut().current_event = Some(ClickKind::RightMouseUp);

    assert_eq!(c.on_indicator_clicked().unwrap(), ClickOutcome::PresentedMenu);
    assert_eq!(c.host().calls, vec![Call::PopupMenu(5.0)]);
    assert_eq!(c.host().window_calls(), 0);
}

#[test]
fn left_click_shows_window_without_menu() {
    let mut c = launched(RecordingHost::with_window());
    c.host_mut().current_event = Some(ClickKind::LeftMouseUp);

    assert_eq!(c.on_indicator_clicked().unwrap(), ClickOutcome::ShowedWindow);
    assert_eq!(
        c.host().calls,
        vec![Call::CenterWindow, Call::MakeKeyAndOrderFront, Call::Activate]
    );
    assert_eq!(c.host().popups(), 0);
}

#[test]
fn other_events_show_window() {
    let mut c = launched(RecordingHost::with_window());
    c.host_mut().current_event = Some(ClickKind::Other);
    assert_eq!(c.on_indicator_clicked().unwrap(), ClickOutcome::ShowedWindow);
    assert_eq!(c.host().popups(), 0);
}

#[test]
fn missing_current_event_is_an_error_and_mutates_nothing() {
    let mut c = launched(RecordingHost::with_window());
    c.host_mut().current_event = None;

    let result = c.on_indicator_clicked();
    assert!(matches!(result, Err(ShellError::MissingCurrentEvent)));
    assert!(c.host().calls.is_empty());
}

#[test]
fn left_click_without_window_is_harmless() {
    let mut c = launched(RecordingHost::default());
    c.host_mut().current_event = Some(ClickKind::LeftMouseUp);
    assert_eq!(c.on_indicator_clicked().unwrap(), ClickOutcome::ShowedWindow);
    assert!(c.host().calls.is_empty());
}

// === Window, policy, quit ===

#[test]
fn show_window_without_window_is_a_no_op() {
    let mut c = controller(RecordingHost::default());
    c.show_window();
    assert!(c.host().calls.is_empty());
}

#[test]
fn policy_flags_are_constant() {
    let mut c = controller(RecordingHost::with_window());
    for _ in 0..3 {
        assert!(!c.on_last_window_closed());
        assert!(c.on_supports_secure_restorable_state());
        c.on_did_finish_launching();
        c.show_window();
    }
}

#[test]
fn quit_terminates_immediately() {
    let mut c = launched(RecordingHost::with_window());
    c.quit();
    assert_eq!(c.host().calls, vec![Call::Terminate]);
}

#[test]
fn quit_menu_action_terminates() {
    let mut c = launched(RecordingHost::with_window());
    c.perform(MenuAction::Terminate);
    assert_eq!(c.host().calls, vec![Call::Terminate]);
}

#[test]
fn menu_action_before_launch_sets_up_indicator_once() {
    let mut c = controller(RecordingHost::with_window());
    c.perform(MenuAction::ShowWindow);
    assert!(c.is_set_up());
    assert_eq!(c.host().status_items_created(), 1);
    assert_eq!(c.host().window_calls(), 3);

    c.perform(MenuAction::ShowWindow);
    c.on_did_finish_launching();
    assert_eq!(c.host().status_items_created(), 1);
}

#[test]
fn reopen_without_visible_windows_recenters_and_shows() {
    let mut c = launched(RecordingHost::with_window());
    assert!(c.on_reopen(false));
    assert_eq!(c.host().window_calls(), 3);
}
