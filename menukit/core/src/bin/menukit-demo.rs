//! Menukit Demo
//!
//! Headless scenario driver for the menukit orchestration core. Builds
//! a small page set on scripted animation players, then drives the
//! manager from a fixed-rate tick loop while walking through a typical
//! navigation session: splash chained into home, a hold-to-open
//! settings page replacing home, a close-and-open action, and a final
//! close-all.
//!
//! # Usage
//!
//! ```bash
//! # Run with defaults (30 ticks per second)
//! menukit-demo
//!
//! # With a config file
//! MENUKIT_CONFIG=/path/to/menukit.toml menukit-demo
//!
//! # With verbose logging
//! RUST_LOG=debug menukit-demo
//! ```
//!
//! # Environment Variables
//!
//! - `MENUKIT_CONFIG`: path to the runtime TOML file (default:
//!   `$XDG_CONFIG_HOME/menukit/menukit.toml`; missing files fall back
//!   to defaults)
//! - `RUST_LOG`: log level (trace, debug, info, warn, error)

use std::fmt;
use std::path::PathBuf;

use tokio::signal;
use tokio::time;
use tracing::{debug, info, warn};

use menukit_core::{
    default_config_path, load_runtime_config, HeadlessSurface, HoldTrigger, LoadPageAction,
    ManagerConfig, PageAction, PageController, PageManager, RuntimeToml, ScriptedPlayer,
};

/// Pages of the demo menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum DemoPage {
    Splash,
    Home,
    Settings,
    Credits,
}

impl fmt::Display for DemoPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Splash => "splash",
            Self::Home => "home",
            Self::Settings => "settings",
            Self::Credits => "credits",
        };
        write!(f, "{name}")
    }
}

/// Resolve the config file path from the environment.
fn config_path() -> PathBuf {
    std::env::var("MENUKIT_CONFIG").map_or_else(|_| default_config_path(), PathBuf::from)
}

/// Load the runtime config, falling back to defaults when the file is
/// absent or unreadable.
fn load_config() -> RuntimeToml {
    let path = config_path();
    match load_runtime_config(&path) {
        Ok(config) => {
            info!(path = %path.display(), "loaded runtime config");
            config
        }
        Err(err) => {
            debug!(path = %path.display(), error = %err, "using default runtime config");
            RuntimeToml::default()
        }
    }
}

/// Build the demo page set: splash chains into home; the rest open on
/// request. Timings are in scheduler ticks.
fn build_manager(entry_delay_ticks: u64) -> anyhow::Result<PageManager<DemoPage>> {
    let pages = vec![
        PageController::new(
            DemoPage::Splash,
            ScriptedPlayer::new(1, 4, 1),
            HeadlessSurface::default(),
        )
        .with_chained_next(DemoPage::Home),
        PageController::new(
            DemoPage::Home,
            ScriptedPlayer::new(1, 3, 1),
            HeadlessSurface::default(),
        ),
        PageController::new(
            DemoPage::Settings,
            ScriptedPlayer::new(1, 3, 1),
            HeadlessSurface::default(),
        ),
        PageController::new(
            DemoPage::Credits,
            ScriptedPlayer::new(0, 2, 0),
            HeadlessSurface::default(),
        ),
    ];

    let config = ManagerConfig::default()
        .with_entry(DemoPage::Splash)
        .with_entry_delay(entry_delay_ticks);

    Ok(PageManager::new(pages, config)?)
}

/// Log the lifecycle state of every page.
fn log_page_states(manager: &PageManager<DemoPage>) {
    let states: Vec<String> = manager
        .page_ids()
        .map(|page| {
            let state = manager
                .page_state(page)
                .map_or("?", menukit_core::PageState::label);
            format!("{page}={state}")
        })
        .collect();
    debug!(pages = %states.join(" "), "page states");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config();

    let filter = config
        .log_filter
        .clone()
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .init();

    let mut manager = build_manager(config.entry_delay())?;
    let mut interval = time::interval(config.tick_interval());

    // Hold-to-open settings: pressed at tick 16, fires after a short
    // delay plus the hold requirement.
    let mut hold = HoldTrigger::new(2, 6);
    let open_settings = LoadPageAction::new(DemoPage::Settings).replacing(DemoPage::Home);

    info!("menukit demo starting");
    let mut tick: u64 = 0;

    loop {
        tokio::select! {
            _ = signal::ctrl_c() => {
                info!("interrupted, shutting down");
                break;
            }
            _ = interval.tick() => {
                manager.tick();
                tick += 1;

                if hold.tick() {
                    info!("hold completed, replacing home with settings");
                    open_settings.run(&mut manager);
                }

                match tick {
                    16 => {
                        info!("holding the settings button");
                        hold.press();
                    }
                    40 => {
                        info!("closing settings, opening credits");
                        PageAction::new()
                            .closing(DemoPage::Settings)
                            .opening(DemoPage::Credits)
                            .run(&mut manager);
                    }
                    56 => {
                        info!("closing all pages");
                        manager.close_all_pages();
                    }
                    64 => {
                        if manager.any_page_is_on() {
                            warn!("pages still on at scenario end");
                        }
                        info!("scenario complete");
                        break;
                    }
                    _ => {}
                }

                log_page_states(&manager);
            }
        }
    }

    Ok(())
}
