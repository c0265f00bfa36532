//! App module - contains the main application state and logic

mod filters;
mod flags;
mod navigation;
mod refresh;
mod views;

use crate::constants::*;
use crate::db::{Country, Database};
use crate::search::Debouncer;
use crate::settings::Settings;
use crate::theme;
use crate::types::*;
use crate::utils::get_cache_dir;
use eframe::egui;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) db: Database,
    pub(crate) countries: Vec<Country>,
    pub(crate) filtered_indices: Vec<usize>,
    pub(crate) search_query: String,
    pub(crate) search_debounce: Debouncer,
    pub(crate) focus_search: bool,
    pub(crate) selected_region: Option<String>,
    pub(crate) available_regions: Vec<String>,
    pub(crate) logo_texture: Option<egui::TextureHandle>,
    // Navigation
    pub(crate) view: View,
    pub(crate) selected_country: Option<String>,
    // Theme
    pub(crate) dark_mode: bool,
    // View mode
    pub(crate) layout: DirectoryLayout,
    pub(crate) large_cards: bool,
    // Card field visibility
    pub(crate) show_population: bool,
    pub(crate) show_region: bool,
    pub(crate) show_capital: bool,
    pub(crate) show_settings: bool,
    // Flag cache
    pub(crate) runtime: tokio::runtime::Runtime,
    pub(crate) flag_cache: HashMap<String, Option<egui::TextureHandle>>,
    pub(crate) prefetch_started: bool,
    pub(crate) cache_dir: PathBuf,
    // Dataset refresh state
    pub(crate) refresh_in_progress: bool,
    // Toast notification
    pub(crate) toast_message: Option<String>,
    pub(crate) toast_start: Option<std::time::Instant>,
    // Window geometry
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        db: Database,
        settings: Settings,
        data_dir: PathBuf,
    ) -> Self {
        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        // Theme preference survives restarts via the session store
        let dark_mode = !matches!(
            db.session_get("dark-mode").ok().flatten().as_deref(),
            Some("disabled")
        );
        theme::apply_visuals(&cc.egui_ctx, dark_mode);

        let countries = db.get_all_countries().unwrap_or_default();
        let filtered_indices: Vec<usize> = (0..countries.len()).collect();

        let cache_dir = get_cache_dir();
        std::fs::create_dir_all(&cache_dir).ok();

        let mut app = Self {
            db,
            countries,
            filtered_indices,
            search_query: String::new(),
            search_debounce: Debouncer::new(Duration::from_millis(SEARCH_DEBOUNCE_MS)),
            focus_search: false,
            selected_region: None,
            available_regions: Vec::new(),
            logo_texture: None,
            view: View::Directory,
            selected_country: None,
            dark_mode,
            layout: if settings.list_layout {
                DirectoryLayout::List
            } else {
                DirectoryLayout::Grid
            },
            large_cards: settings.large_cards,
            show_population: settings.card_population,
            show_region: settings.card_region,
            show_capital: settings.card_capital,
            show_settings: false,
            runtime: tokio::runtime::Runtime::new().unwrap(),
            flag_cache: HashMap::new(),
            prefetch_started: false,
            cache_dir,
            refresh_in_progress: false,
            toast_message: None,
            toast_start: None,
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
        };

        app.rebuild_regions();
        app.restore_session();
        app
    }

    /// Distinct regions present in the dataset, in alphabetical order
    pub(crate) fn rebuild_regions(&mut self) {
        let mut regions: Vec<String> = self
            .countries
            .iter()
            .filter(|c| !c.region.is_empty())
            .map(|c| c.region.clone())
            .collect();
        regions.sort();
        regions.dedup();
        self.available_regions = regions;
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            card_population: self.show_population,
            card_region: self.show_region,
            card_capital: self.show_capital,
            list_layout: self.layout == DirectoryLayout::List,
            large_cards: self.large_cards,
        };
        settings.save(&self.data_dir);
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast_message = Some(message.into());
        self.toast_start = Some(std::time::Instant::now());
    }
}
