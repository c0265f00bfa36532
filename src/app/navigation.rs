//! Directory/detail navigation and theme toggle
//!
//! The selected country and theme preference live in the session table,
//! so the detail view re-resolves by name instead of holding an index
//! into a list that a background refresh may have replaced.

use super::App;
use crate::db::Country;
use crate::theme;
use crate::types::View;
use eframe::egui;
use tracing::{debug, warn};

impl App {
    /// Open the detail view for a country by name.
    pub fn select_country(&mut self, name: &str) {
        if let Err(e) = self.db.session_set("selected_country", name) {
            warn!(error = %e, "Failed to persist selection");
        }
        self.selected_country = Some(name.to_string());
        self.view = View::Detail;
        debug!(country = name, "Country selected");
    }

    /// Resolve the current selection against the loaded list. A stale
    /// name (removed by a dataset refresh) yields None and the caller
    /// falls back to the directory.
    pub fn resolve_selected(&self) -> Option<&Country> {
        let name = self.selected_country.as_deref()?;
        self.countries.iter().find(|c| c.name == name)
    }

    /// Navigate to a border country via its alpha-3 code chip.
    pub fn open_border(&mut self, code: &str) {
        let name = self
            .countries
            .iter()
            .find(|c| c.alpha3_code == code)
            .map(|c| c.name.clone());
        match name {
            Some(name) => self.select_country(&name),
            // Border codes can reference countries outside the dataset
            None => debug!(code = code, "Border country not in dataset"),
        }
    }

    pub fn back_to_directory(&mut self) {
        self.db.session_remove("selected_country").ok();
        self.selected_country = None;
        self.view = View::Directory;
    }

    pub fn toggle_dark_mode(&mut self, ctx: &egui::Context) {
        self.dark_mode = !self.dark_mode;
        let value = if self.dark_mode { "enabled" } else { "disabled" };
        if let Err(e) = self.db.session_set("dark-mode", value) {
            warn!(error = %e, "Failed to persist theme preference");
        }
        theme::apply_visuals(ctx, self.dark_mode);
    }

    /// Restore a previous session's selection at startup.
    pub fn restore_session(&mut self) {
        if let Ok(Some(name)) = self.db.session_get("selected_country") {
            if self.countries.iter().any(|c| c.name == name) {
                self.selected_country = Some(name);
                self.view = View::Detail;
            } else {
                self.db.session_remove("selected_country").ok();
            }
        }
    }
}
