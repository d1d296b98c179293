//! Integration tests for the page orchestration core
//!
//! These tests drive a whole manager through multi-tick navigation
//! scenarios the way an embedding application would, checking the
//! cross-component guarantees:
//! - startup entry page with delay
//! - off-before-on queue priority across ticks
//! - replace-page composition and chained entries
//! - trigger bindings feeding the manager
//! - runtime config file loading

use std::io::Write;

use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

use menukit_core::{
    load_runtime_config, HeadlessSurface, HoldTrigger, LoadPageAction, ManagerConfig, PageAction,
    PageController, PageManager, PageState, ScriptedPlayer,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Page {
    Splash,
    Home,
    Settings,
    Credits,
}

/// A realistic page set: splash chains into home, everything animates
/// over a few ticks with a blend window.
fn build_manager(entry_delay: u64) -> PageManager<Page> {
    let pages = vec![
        PageController::new(
            Page::Splash,
            ScriptedPlayer::new(1, 2, 1),
            HeadlessSurface::default(),
        )
        .with_chained_next(Page::Home),
        PageController::new(
            Page::Home,
            ScriptedPlayer::new(1, 2, 1),
            HeadlessSurface::default(),
        ),
        PageController::new(
            Page::Settings,
            ScriptedPlayer::new(1, 2, 1),
            HeadlessSurface::default(),
        ),
        PageController::new(
            Page::Credits,
            ScriptedPlayer::instant(),
            HeadlessSurface::default(),
        ),
    ];
    let config = ManagerConfig::default()
        .with_entry(Page::Splash)
        .with_entry_delay(entry_delay);
    PageManager::new(pages, config).unwrap()
}

fn tick_until<F: Fn(&PageManager<Page>) -> bool>(
    manager: &mut PageManager<Page>,
    limit: u32,
    predicate: F,
) {
    for _ in 0..limit {
        if predicate(manager) {
            return;
        }
        manager.tick();
    }
    assert!(predicate(manager), "condition not reached in {limit} ticks");
}

// =============================================================================
// Startup: entry page and chained entry
// =============================================================================

#[test]
fn test_startup_chains_splash_into_home() {
    let mut manager = build_manager(2);

    // Nothing happens during the entry delay.
    manager.tick();
    manager.tick();
    assert!(!manager.any_page_is_on());

    // Splash opens, then chains into Home with no external request.
    tick_until(&mut manager, 16, |m| m.page_is_on(Page::Splash));
    tick_until(&mut manager, 16, |m| m.page_is_on(Page::Home));
    assert!(manager.page_is_on(Page::Splash));
    assert!(!manager.page_is_on(Page::Settings));
}

// =============================================================================
// Navigation: replace-page composition
// =============================================================================

#[test]
fn test_replace_navigation_never_overlaps() {
    let mut manager = build_manager(0);
    tick_until(&mut manager, 16, |m| m.page_is_on(Page::Home));

    manager.turn_page_on(Some(Page::Home), Page::Settings, false);

    let mut settings_seen_on = false;
    for _ in 0..32 {
        manager.tick();
        assert!(
            !(manager.page_is_on(Page::Home) && manager.page_is_on(Page::Settings)),
            "home and settings were on simultaneously"
        );
        settings_seen_on |= manager.page_is_on(Page::Settings);
    }
    assert!(settings_seen_on);
    assert_eq!(manager.page_state(Page::Home), Some(PageState::Off));
    assert_eq!(manager.page_state(Page::Settings), Some(PageState::On));
}

#[test]
fn test_queue_priority_across_a_mixed_tick() {
    let mut manager = build_manager(0);
    tick_until(&mut manager, 16, |m| m.page_is_on(Page::Home));

    manager.turn_page_off(Page::Home, false);
    manager.turn_page_on(None, Page::Credits, false);

    // First service pass must start Home's exit and leave Credits
    // queued, even though Credits' player is instant.
    manager.tick();
    assert!(manager.page_is_turning_off(Page::Home));
    assert!(!manager.page_is_on(Page::Credits));
    assert_eq!(manager.pending_on(), &[Page::Credits]);

    tick_until(&mut manager, 16, |m| m.page_is_on(Page::Credits));
    assert!(!manager.page_is_on(Page::Home));
}

// =============================================================================
// Trigger bindings
// =============================================================================

#[test]
fn test_hold_trigger_drives_replace_navigation() {
    let mut manager = build_manager(0);
    tick_until(&mut manager, 16, |m| m.page_is_on(Page::Home));

    let mut hold = HoldTrigger::new(1, 3);
    let open_settings = LoadPageAction::new(Page::Settings).replacing(Page::Home);

    hold.press();
    let mut fired = false;
    for _ in 0..24 {
        manager.tick();
        if hold.tick() {
            assert!(!fired, "hold trigger fired twice");
            fired = true;
            open_settings.run(&mut manager);
        }
    }

    assert!(fired);
    assert!(manager.page_is_on(Page::Settings));
    assert!(!manager.page_is_on(Page::Home));
}

#[test]
fn test_page_action_swaps_page_sets() {
    let mut manager = build_manager(0);
    tick_until(&mut manager, 16, |m| {
        m.page_is_on(Page::Splash) && m.page_is_on(Page::Home)
    });

    PageAction::new()
        .closing(Page::Splash)
        .closing(Page::Home)
        .opening(Page::Credits)
        .run(&mut manager);

    tick_until(&mut manager, 32, |m| m.page_is_on(Page::Credits));
    assert!(!manager.page_is_on(Page::Splash));
    assert!(!manager.page_is_on(Page::Home));
    assert!(!manager.pages_minus_filter_are_on(&[Page::Credits]));
}

// =============================================================================
// Shutdown paths
// =============================================================================

#[test]
fn test_close_all_pages_empties_the_menu() {
    let mut manager = build_manager(0);
    tick_until(&mut manager, 16, |m| {
        m.page_is_on(Page::Splash) && m.page_is_on(Page::Home)
    });

    manager.close_all_pages();
    tick_until(&mut manager, 16, |m| !m.any_page_is_on());

    // Every surface was withdrawn, not just hidden.
    for page in [Page::Splash, Page::Home, Page::Settings, Page::Credits] {
        let active = manager.page(page).is_some_and(PageController::surface_active);
        assert!(!active, "{page:?} surface still active");
    }
}

#[test]
fn test_clear_with_filter_respects_keep_set() {
    let mut manager = build_manager(0);
    tick_until(&mut manager, 16, |m| {
        m.page_is_on(Page::Splash) && m.page_is_on(Page::Home)
    });

    manager.clear_pages_with_filter(&[Page::Home]);
    tick_until(&mut manager, 16, |m| !m.page_is_on(Page::Splash));

    assert!(manager.page_is_on(Page::Home));
    assert!(!manager.pages_minus_filter_are_on(&[Page::Home]));
}

// =============================================================================
// Runtime configuration
// =============================================================================

#[test]
fn test_runtime_config_round_trip() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "tick_hz = 10").unwrap();
    writeln!(file, "entry_delay_ticks = 5").unwrap();
    writeln!(file, "log_filter = \"debug\"").unwrap();

    let config = load_runtime_config(file.path()).unwrap();
    assert_eq!(config.tick_hz, Some(10));
    assert_eq!(config.entry_delay(), 5);
    assert_eq!(config.log_filter.as_deref(), Some("debug"));
}
