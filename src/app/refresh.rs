//! Background dataset refresh
//!
//! Fetches the published dataset on a plain thread with the blocking
//! client and reports back through egui temp memory; the frame loop
//! consumes the result keys and reloads from the database.

use super::App;
use crate::constants::*;
use crate::db::Database;
use crate::types::Dataset;
use eframe::egui;
use tracing::{debug, error, info};

impl App {
    pub fn refresh_dataset(&mut self, ctx: &egui::Context) {
        if self.refresh_in_progress {
            return;
        }
        self.refresh_in_progress = true;

        let ctx = ctx.clone();
        let current_version = self
            .db
            .get_dataset_version()
            .ok()
            .flatten()
            .unwrap_or_default();
        let db_path = self.data_dir.join("atlas.db");

        info!(version = %current_version, "Starting dataset refresh");

        std::thread::spawn(move || {
            let result: Result<(String, usize), String> = (|| {
                debug!(url = DATASET_URL, "Fetching dataset");
                let response = reqwest::blocking::get(DATASET_URL).map_err(|e| e.to_string())?;
                debug!(status = %response.status(), "Dataset response received");
                let dataset: Dataset = response.json().map_err(|e| e.to_string())?;

                if dataset.version == current_version && !current_version.is_empty() {
                    return Ok((current_version, 0));
                }

                let db = Database::open(&db_path).map_err(|e| e.to_string())?;
                db.clear_countries().map_err(|e| e.to_string())?;
                let count = db
                    .import_countries(&dataset.countries)
                    .map_err(|e| e.to_string())?;
                db.set_dataset_version(&dataset.version)
                    .map_err(|e| e.to_string())?;
                Ok((dataset.version, count))
            })();

            ctx.memory_mut(|mem| match result {
                Ok((version, count)) => {
                    info!(version = %version, count = count, "Dataset refresh complete");
                    mem.data.insert_temp(
                        "dataset_updated".into(),
                        format!("{}:{}", version, count),
                    );
                }
                Err(e) => {
                    error!(error = %e, "Dataset refresh failed");
                    mem.data.insert_temp("dataset_update_error".into(), e);
                }
            });
            ctx.request_repaint();
        });
    }

    /// Consume refresh results posted by the background thread.
    pub fn poll_refresh_results(&mut self, ctx: &egui::Context) {
        let updated: Option<String> =
            ctx.memory_mut(|mem| mem.data.remove_temp("dataset_updated".into()));
        if let Some(info) = updated {
            self.refresh_in_progress = false;
            let count: usize = info
                .rsplit(':')
                .next()
                .and_then(|c| c.parse().ok())
                .unwrap_or(0);
            if count == 0 {
                self.show_toast("Dataset is up to date");
            } else {
                self.countries = self.db.get_all_countries().unwrap_or_default();
                self.rebuild_regions();
                // A removed country may be the current selection or region
                if self.resolve_selected().is_none() {
                    self.back_to_directory();
                }
                if let Some(region) = &self.selected_region {
                    if !self.available_regions.contains(region) {
                        self.selected_region = None;
                    }
                }
                self.apply_filters();
                self.start_flag_prefetch(ctx);
                self.show_toast(format!("Dataset updated ({} countries)", count));
            }
        }

        let failed: Option<String> =
            ctx.memory_mut(|mem| mem.data.remove_temp("dataset_update_error".into()));
        if let Some(e) = failed {
            self.refresh_in_progress = false;
            self.show_toast(format!("Refresh failed: {}", e));
        }
    }
}
