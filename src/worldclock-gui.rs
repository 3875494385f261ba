//! World Clock GUI Application
//!
//! Shows live clocks for a set of time zones, both as a list of cards and as
//! markers on a world map, using the egui framework.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
//! The viewer features:
//! - Clock cards with time, full date and UTC offset, refreshed every second
//! - A world map overlay with one marker per clock and clickable city regions
//! - A searchable picker over the zone catalog
//! - Keyboard shortcuts: Ctrl+K opens the picker, Ctrl+L clears, Escape closes
//! - Multiple theme support with persistent preferences
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state and coordination of registry operations
//! - `state/` - Picker, theme and layout state
//! - `ui/` - Panel rendering and keyboard input
//! - `utils/` - Formatting helpers for the status bar

use clap::Parser;
use eframe::egui;

mod utils;
mod app;
mod ui;
mod state;

use app::{AppState, ApplicationCoordinator, ThemeCoordinator, SettingsCoordinator};
use state::LayoutPrefs;
use ui::panel_manager::{PanelInteraction, PanelManager};
use worldclock::TimeZoneEntry;

const LAYOUT_KEY: &str = "layout";

/// Live world clock with a map overlay.
#[derive(Parser, Debug)]
#[command(name = "worldclock-gui", version)]
struct Args {
    /// Extra clock to show, as "Display Name=Area/City" (repeatable)
    #[arg(long = "zone", value_parser = parse_zone)]
    zones: Vec<TimeZoneEntry>,

    /// Start without the default New York, London and Tokyo clocks
    #[arg(long)]
    no_defaults: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = worldclock::logging::DEFAULT_LOG_LEVEL)]
    log_level: String,
}

fn parse_zone(value: &str) -> Result<TimeZoneEntry, String> {
    TimeZoneEntry::parse_pair(value).ok_or_else(|| format!("expected NAME=ZONE_ID, got '{}'", value))
}

/// Main application entry point that initializes and launches the world clock GUI.
fn main() -> eframe::Result {
    let args = Args::parse();
    worldclock::logging::init(&args.log_level);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 760.0])
            .with_title("World Clock"),
        ..Default::default()
    };

    eframe::run_native(
        "World Clock",
        options,
        Box::new(move |cc| Ok(Box::new(WorldClockApp::new(cc, args)))),
    )
}

/// The world clock application.
///
/// Delegates to coordinators:
/// - `ApplicationCoordinator` applies user actions to the registry
/// - `ThemeCoordinator` handles theme persistence and application
/// - `PanelManager` handles UI panel layout and rendering
struct WorldClockApp {
    state: AppState,
}

impl WorldClockApp {
    /// Creates the app with preferences from persistent storage, seeds the
    /// registry and starts the refresh loop.
    fn new(cc: &eframe::CreationContext, args: Args) -> Self {
        let theme_name = ThemeCoordinator::load_theme_from_storage(cc.storage);
        let layout: LayoutPrefs =
            SettingsCoordinator::load_setting_or(cc.storage, LAYOUT_KEY, LayoutPrefs::default());

        let mut state = AppState::new(&cc.egui_ctx, theme_name, layout);

        if !args.no_defaults {
            state.registry.seed_defaults();
        }
        for entry in &args.zones {
            ApplicationCoordinator::add_zone(&mut state, entry.display_name(), entry.zone_id());
        }

        state.registry.start();

        Self { state }
    }

    fn handle_panel_interaction(&mut self, interaction: PanelInteraction) {
        match interaction {
            PanelInteraction::AddZone { display_name, zone_id } => {
                ApplicationCoordinator::add_zone(&mut self.state, &display_name, &zone_id);
            }
            PanelInteraction::PickerSelected { display_name, zone_id } => {
                ApplicationCoordinator::add_zone(&mut self.state, &display_name, &zone_id);
                self.state.picker.close();
            }
            PanelInteraction::RemoveZone { display_name, zone_id } => {
                ApplicationCoordinator::remove_zone(&mut self.state, &display_name, &zone_id);
            }
            PanelInteraction::ClearAll => {
                ApplicationCoordinator::clear_all(&mut self.state);
            }
            PanelInteraction::OpenPicker => self.state.picker.open(),
            PanelInteraction::ClosePicker => self.state.picker.close(),
            PanelInteraction::ToggleRefresh => {
                ApplicationCoordinator::toggle_refresh(&mut self.state);
            }
        }
    }
}

impl eframe::App for WorldClockApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_theme_to_storage(storage, self.state.theme.current_theme_name());
        SettingsCoordinator::save_setting(storage, LAYOUT_KEY, &self.state.layout.prefs());
    }

    /// Main update loop:
    /// 1. Consume refresh ticks
    /// 2. Apply theme
    /// 3. Render all panels via PanelManager
    /// 4. Handle panel interactions
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.registry.pump();

        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        for interaction in PanelManager::render_all_panels(ctx, &mut self.state) {
            self.handle_panel_interaction(interaction);
        }
    }
}
