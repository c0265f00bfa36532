#![windows_subsystem = "windows"]
//! Country Atlas - Main entry point

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod app;
mod constants;
mod data;
mod db;
mod search;
mod settings;
mod theme;
mod types;
mod ui;
mod utils;

use app::App;
use constants::*;
use db::Database;
use eframe::egui;
use std::path::PathBuf;
use tracing::{error, info};
use types::View;

/// Initialize file logging. Returns a guard that must be held for the app lifetime.
fn init_logging(data_dir: &std::path::Path) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let logs_dir = data_dir.join("logs");
    std::fs::create_dir_all(&logs_dir).ok();

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "country-atlas.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,country_atlas=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    guard
}

fn main() -> eframe::Result<()> {
    let data_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Country Atlas");

    std::fs::create_dir_all(&data_dir).ok();

    // Initialize logging - guard must live for entire app lifetime
    let _log_guard = init_logging(&data_dir);

    info!(version = APP_VERSION, "Country Atlas starting");

    let db_path = data_dir.join("atlas.db");
    let db = match Database::open(&db_path) {
        Ok(db) => {
            info!(path = %db_path.display(), "Database opened");
            db
        }
        Err(e) => {
            error!(error = %e, path = %db_path.display(), "Failed to open database");
            panic!("Failed to open database: {}", e);
        }
    };

    // Seed from the bundled snapshot on first run
    if db.country_count().unwrap_or(0) == 0 {
        info!("Database empty, importing bundled dataset");
        let dataset = data::load_bundled();
        let imported = db.import_countries(&dataset.countries).unwrap_or(0);
        if !dataset.version.is_empty() {
            db.set_dataset_version(&dataset.version).ok();
        }
        info!(count = imported, "Imported countries from bundled dataset");
    }

    // Load saved window position/size
    let settings = settings::Settings::load(&data_dir);
    let win_pos = match (settings.window_x, settings.window_y) {
        (Some(x), Some(y)) => Some(egui::pos2(x, y)),
        _ => None,
    };
    let win_size = match (settings.window_w, settings.window_h) {
        (Some(w), Some(h)) => Some(egui::vec2(w, h)),
        _ => None,
    };

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(win_size.unwrap_or(egui::vec2(1280.0, 800.0)))
        .with_min_inner_size([960.0, 640.0])
        .with_title("Country Atlas");

    // Set window/taskbar icon from the rasterized logo
    {
        let (rgba, w, h) = utils::rasterize_logo_square(64);
        let icon = egui::IconData {
            rgba,
            width: w,
            height: h,
        };
        viewport = viewport.with_icon(std::sync::Arc::new(icon));
    }

    let needs_center = win_pos.is_none();

    if let Some(pos) = win_pos {
        viewport = viewport.with_position(pos);
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Country Atlas",
        options,
        Box::new(move |cc| {
            let mut app = App::new(cc, db, settings, data_dir);
            app.needs_center = needs_center;
            Ok(Box::new(app))
        }),
    )
}

// ============================================================================
// MAIN UPDATE LOOP & UI RENDERING
// ============================================================================

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let p = theme::palette(self.dark_mode);

        // Track window position/size for saving on exit
        ctx.input(|i| {
            if let Some(rect) = i.viewport().outer_rect {
                self.window_pos = Some(rect.min);
            }
            if let Some(rect) = i.viewport().inner_rect {
                self.window_size = Some(rect.size());
            }
        });

        // Global keyboard capture: type anywhere to search (when no modal open)
        if self.view == View::Directory && !self.show_settings && !ctx.wants_keyboard_input() {
            let mut typed_text = String::new();
            let mut backspace = false;
            ctx.input(|i| {
                for event in &i.events {
                    if let egui::Event::Text(text) = event {
                        if !text.is_empty() && text.chars().all(|c| !c.is_control()) {
                            typed_text.push_str(text);
                        }
                    }
                    if let egui::Event::Key {
                        key: egui::Key::Backspace,
                        pressed: true,
                        ..
                    } = event
                    {
                        backspace = true;
                    }
                }
            });
            if !typed_text.is_empty() {
                self.search_query.push_str(&typed_text);
                self.focus_search = true;
                self.on_search_changed();
            }
            if backspace && !self.search_query.is_empty() {
                self.search_query.pop();
                self.focus_search = true;
                self.on_search_changed();
            }
        }

        // Start flag prefetch on first frame
        if !self.prefetch_started {
            self.prefetch_started = true;
            self.start_flag_prefetch(ctx);
        }

        // Center window on first launch
        if self.needs_center {
            self.needs_center = false;
            if let Some(cmd) = egui::ViewportCommand::center_on_screen(ctx) {
                ctx.send_viewport_cmd(cmd);
            }
        }

        // Pending debounced search and background refresh results
        self.poll_search(ctx);
        self.poll_refresh_results(ctx);

        // Escape leaves the detail view
        if self.view == View::Detail
            && !self.show_settings
            && ctx.input(|i| i.key_pressed(egui::Key::Escape))
        {
            self.back_to_directory();
        }

        // Left sidebar - search and region filters
        egui::SidePanel::left("filter_panel")
            .exact_width(theme::SIDEBAR_WIDTH)
            .resizable(false)
            .show_separator_line(false)
            .frame(
                egui::Frame::new().fill(p.bg_base).inner_margin(egui::Margin {
                    left: 16,
                    right: 16,
                    top: 0,
                    bottom: 0,
                }),
            )
            .show(ctx, |ui| {
                let panel_max_rect = ui.max_rect();
                let avail_w = ui.available_width();

                // Header with logo, centered
                ui.add_space(21.0);
                ui.with_layout(egui::Layout::top_down(egui::Align::Center), |ui| {
                    let texture = self.logo_texture.get_or_insert_with(|| {
                        let (pixels, w, h) = utils::rasterize_logo(avail_w as u32);
                        ctx.load_texture(
                            "logo",
                            egui::ColorImage::from_rgba_unmultiplied(
                                [w as usize, h as usize],
                                &pixels,
                            ),
                            egui::TextureOptions::LINEAR,
                        )
                    });

                    let logo_size = egui::vec2(56.0, 56.0);
                    ui.image(egui::load::SizedTexture::new(texture.id(), logo_size));

                    ui.add_space(4.0);
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new("COUNTRY ATLAS")
                                .size(theme::FONT_SMALL)
                                .color(p.text_dim),
                        )
                        .selectable(false),
                    );
                });
                ui.add_space(11.0);

                // Search box
                let search_frame_resp = egui::Frame::new()
                    .fill(p.bg_input)
                    .stroke(egui::Stroke::new(1.0, p.border_subtle))
                    .corner_radius(theme::RADIUS_DEFAULT)
                    .inner_margin(egui::Margin::symmetric(8, 8))
                    .show(ui, |ui| {
                        ui.spacing_mut().item_spacing.x = 4.0;
                        ui.horizontal(|ui| {
                            ui.add(
                                egui::Label::new(
                                    egui::RichText::new(
                                        egui_phosphor::regular::MAGNIFYING_GLASS,
                                    )
                                    .size(14.0)
                                    .color(p.text_dim),
                                )
                                .selectable(false),
                            );
                            let search_id = ui.make_persistent_id("search_box");
                            let search_response = ui.add(
                                egui::TextEdit::singleline(&mut self.search_query)
                                    .id(search_id)
                                    .hint_text("Search for a country...")
                                    .frame(false)
                                    .desired_width(ui.available_width()),
                            );
                            if self.focus_search {
                                self.focus_search = false;
                                search_response.request_focus();
                                if let Some(mut state) =
                                    egui::TextEdit::load_state(ui.ctx(), search_id)
                                {
                                    let ccursor =
                                        egui::text::CCursor::new(self.search_query.len());
                                    state
                                        .cursor
                                        .set_char_range(Some(egui::text::CCursorRange::one(
                                            ccursor,
                                        )));
                                    state.store(ui.ctx(), search_id);
                                }
                            }
                            // Typing is debounced; Enter evaluates immediately
                            if search_response.changed() {
                                self.on_search_changed();
                            }
                            if search_response.lost_focus()
                                && ui.input(|i| i.key_pressed(egui::Key::Enter))
                            {
                                self.on_search_submitted();
                                search_response.request_focus();
                            }
                        });
                    });
                // Clear button overlaid on right side of search frame
                if !self.search_query.is_empty() {
                    let frame_rect = search_frame_resp.response.rect;
                    let btn_size = 16.0;
                    let btn_rect = egui::Rect::from_center_size(
                        egui::pos2(frame_rect.right() - 14.0, frame_rect.center().y),
                        egui::vec2(btn_size, btn_size),
                    );
                    let clear_resp =
                        ui.interact(btn_rect, ui.id().with("search_clear"), egui::Sense::click());
                    let color = if clear_resp.hovered() {
                        p.text_muted
                    } else {
                        p.text_dim
                    };
                    if clear_resp.hovered() {
                        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                    }
                    ui.painter().text(
                        btn_rect.center(),
                        egui::Align2::CENTER_CENTER,
                        egui_phosphor::regular::X,
                        egui::FontId::proportional(12.0),
                        color,
                    );
                    if clear_resp.clicked() {
                        self.clear_search();
                    }
                }

                ui.add_space(12.0);

                // REGION section - exclusive toggles, click active to clear
                theme::section_frame(p).show(ui, |ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new("REGION")
                                .color(p.text_dim)
                                .size(theme::FONT_SMALL),
                        )
                        .selectable(false),
                    );
                    ui.add_space(8.0);

                    let regions = self.available_regions.clone();
                    let mut clicked_region: Option<String> = None;
                    for region in &regions {
                        let selected = self.selected_region.as_deref() == Some(region);
                        let fill = if selected {
                            p.toggle_selected
                        } else {
                            p.toggle_unselected
                        };
                        let (rect, response) = ui.allocate_exact_size(
                            egui::vec2(ui.available_width(), 24.0),
                            egui::Sense::click(),
                        );
                        if response.hovered() {
                            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                        }
                        if ui.is_rect_visible(rect) {
                            let (fill, draw_rect) =
                                theme::button_visual(p, &response, fill, rect);
                            ui.painter()
                                .rect_filled(draw_rect, theme::RADIUS_DEFAULT, fill);
                            ui.painter().text(
                                draw_rect.center(),
                                egui::Align2::CENTER_CENTER,
                                region,
                                egui::FontId::proportional(theme::FONT_SECTION),
                                p.text_primary,
                            );
                        }
                        if response.clicked() {
                            clicked_region = Some(region.clone());
                        }
                        ui.add_space(2.0);
                    }
                    if let Some(region) = clicked_region {
                        self.set_region(Some(region));
                    }
                });

                // Bottom: refresh button + version line
                let bottom_height = 36.0 + 6.0 + 14.0 + 8.0;
                let bottom_rect = egui::Rect::from_min_max(
                    egui::pos2(
                        panel_max_rect.left(),
                        panel_max_rect.bottom() - bottom_height,
                    ),
                    egui::pos2(panel_max_rect.right(), panel_max_rect.bottom()),
                );

                #[allow(deprecated)]
                ui.allocate_ui_at_rect(bottom_rect, |ui| {
                    ui.set_min_width(bottom_rect.width());
                    ui.spacing_mut().item_spacing.y = 0.0;

                    let refresh_enabled = !self.refresh_in_progress;
                    let refresh_rect = egui::Rect::from_min_size(
                        ui.available_rect_before_wrap().min,
                        egui::vec2(ui.available_width(), 36.0),
                    );
                    let refresh_response = ui.allocate_rect(refresh_rect, egui::Sense::click());

                    let refresh_fill = if refresh_enabled {
                        p.btn_accent
                    } else {
                        p.btn_disabled
                    };
                    let (refresh_fill, refresh_draw) = if refresh_enabled {
                        theme::button_visual(p, &refresh_response, refresh_fill, refresh_rect)
                    } else {
                        (refresh_fill, refresh_rect)
                    };
                    ui.painter()
                        .rect_filled(refresh_draw, theme::RADIUS_DEFAULT, refresh_fill);
                    let refresh_text = if self.refresh_in_progress {
                        format!("{} Refreshing...", egui_phosphor::regular::HOURGLASS)
                    } else {
                        format!("{} Refresh Dataset", egui_phosphor::regular::ARROWS_CLOCKWISE)
                    };
                    let text_color = if refresh_enabled {
                        p.btn_accent_text
                    } else {
                        p.text_dim
                    };
                    ui.painter().text(
                        refresh_draw.center(),
                        egui::Align2::CENTER_CENTER,
                        &refresh_text,
                        egui::FontId::proportional(theme::FONT_BODY),
                        text_color,
                    );
                    if refresh_response.hovered() {
                        ui.ctx().set_cursor_icon(if refresh_enabled {
                            egui::CursorIcon::PointingHand
                        } else {
                            egui::CursorIcon::NotAllowed
                        });
                    }
                    if refresh_enabled && refresh_response.clicked() {
                        self.refresh_dataset(ctx);
                    }

                    ui.add_space(6.0);

                    // Version at very bottom
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(format!("v{}", APP_VERSION))
                                .size(theme::FONT_CAPTION)
                                .color(p.text_dim),
                        )
                        .selectable(false),
                    );
                });
            });

        // Central panel - directory or detail
        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(p.bg_base)
                    .inner_margin(egui::Margin::same(16)),
            )
            .show(ctx, |ui| {
                self.render_top_bar(ui, ctx);
                match self.view {
                    View::Directory => self.render_directory(ui, ctx),
                    View::Detail => self.render_detail_view(ui, ctx),
                }
            });

        self.render_settings_modal(ctx);
        self.render_toast(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.save_settings();
    }
}
