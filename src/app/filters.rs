//! Search and region filter handling
//!
//! Region changes and explicit submits evaluate immediately; typing is
//! debounced so the list does not churn on every keystroke.

use super::App;
use crate::search;
use eframe::egui;
use std::time::Instant;
use tracing::debug;

impl App {
    /// Re-evaluate the directory against the current region and query.
    pub fn apply_filters(&mut self) {
        self.filtered_indices = search::filter_and_sort(
            &self.countries,
            self.selected_region.as_deref(),
            &self.search_query,
        );
        debug!(
            region = ?self.selected_region,
            query = %self.search_query,
            matches = self.filtered_indices.len(),
            "Filters applied"
        );
    }

    /// Keystroke in the search box: postpone evaluation.
    pub fn on_search_changed(&mut self) {
        self.search_debounce.reset(Instant::now());
    }

    /// Enter pressed: evaluate now, discarding any pending debounce.
    pub fn on_search_submitted(&mut self) {
        self.search_debounce.cancel();
        self.apply_filters();
    }

    /// Clear button: immediate, same as a submit.
    pub fn clear_search(&mut self) {
        self.search_query.clear();
        self.search_debounce.cancel();
        self.apply_filters();
    }

    /// Region toggle: not debounced. Clicking the active region clears it.
    pub fn set_region(&mut self, region: Option<String>) {
        if self.selected_region == region {
            self.selected_region = None;
        } else {
            self.selected_region = region;
        }
        self.apply_filters();
    }

    /// Drive the pending debounce from the frame loop.
    pub fn poll_search(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        if self.search_debounce.poll(now) {
            self.apply_filters();
        } else if let Some(remaining) = self.search_debounce.remaining(now) {
            // Sleep until the deadline instead of repainting every frame
            ctx.request_repaint_after(remaining);
        }
    }
}
