//! View rendering (directory grid/list, detail screen, settings, toast)

use super::App;
use crate::theme;
use crate::types::DirectoryLayout;
use crate::ui::components;
use crate::utils::{format_area, format_population};
use eframe::egui;

impl App {
    // ========================================================================
    // TOP BAR (shared by directory and detail)
    // ========================================================================

    pub(crate) fn render_top_bar(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let p = theme::palette(self.dark_mode);

        ui.horizontal(|ui| {
            match self.view {
                crate::types::View::Directory => {
                    let showing = self.filtered_indices.len();
                    let total = self.countries.len();
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(format!(
                                "Showing {} of {} countries",
                                showing, total
                            ))
                            .size(theme::FONT_LABEL)
                            .color(p.text_muted),
                        )
                        .selectable(false),
                    );
                }
                crate::types::View::Detail => {
                    let back_text =
                        format!("{}  Back", egui_phosphor::regular::ARROW_LEFT);
                    let (rect, response) = ui.allocate_exact_size(
                        egui::vec2(80.0, theme::BUTTON_HEIGHT),
                        egui::Sense::click(),
                    );
                    if response.hovered() {
                        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                    }
                    let (fill, draw_rect) =
                        theme::button_visual(p, &response, p.bg_surface, rect);
                    ui.painter().rect_filled(draw_rect, theme::RADIUS_DEFAULT, fill);
                    ui.painter().text(
                        draw_rect.center(),
                        egui::Align2::CENTER_CENTER,
                        &back_text,
                        egui::FontId::proportional(theme::FONT_LABEL),
                        p.text_primary,
                    );
                    if response.clicked() {
                        self.back_to_directory();
                    }
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                // Settings gear
                if self
                    .icon_button(ui, p, egui_phosphor::regular::GEAR, "Settings")
                    .clicked()
                {
                    self.show_settings = true;
                }

                // Theme toggle
                let (icon, tooltip) = if self.dark_mode {
                    (egui_phosphor::regular::SUN, "Light mode")
                } else {
                    (egui_phosphor::regular::MOON, "Dark mode")
                };
                if self.icon_button(ui, p, icon, tooltip).clicked() {
                    self.toggle_dark_mode(ctx);
                }

                // Layout toggle (directory only)
                if self.view == crate::types::View::Directory {
                    let (icon, tooltip) = match self.layout {
                        DirectoryLayout::Grid => (egui_phosphor::regular::LIST, "List view"),
                        DirectoryLayout::List => {
                            (egui_phosphor::regular::SQUARES_FOUR, "Grid view")
                        }
                    };
                    if self.icon_button(ui, p, icon, tooltip).clicked() {
                        self.layout = match self.layout {
                            DirectoryLayout::Grid => DirectoryLayout::List,
                            DirectoryLayout::List => DirectoryLayout::Grid,
                        };
                        self.save_settings();
                    }
                }
            });
        });
        ui.add_space(theme::SPACING_MD);
    }

    fn icon_button(
        &self,
        ui: &mut egui::Ui,
        p: &theme::Palette,
        icon: &str,
        tooltip: &str,
    ) -> egui::Response {
        let size = theme::BUTTON_HEIGHT;
        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::click());
        if response.hovered() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
            ui.painter()
                .rect_filled(rect, theme::RADIUS_DEFAULT, p.bg_surface);
        }
        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            icon,
            egui::FontId::proportional(16.0),
            p.text_secondary,
        );
        response.on_hover_text(tooltip)
    }

    // ========================================================================
    // DIRECTORY
    // ========================================================================

    pub(crate) fn render_directory(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let p = theme::palette(self.dark_mode);

        if self.filtered_indices.is_empty() {
            ui.add_space(48.0);
            ui.vertical_centered(|ui| {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new("No results found.")
                            .size(theme::FONT_HEADING)
                            .color(p.text_muted),
                    )
                    .selectable(false),
                );
            });
            return;
        }

        match self.layout {
            DirectoryLayout::Grid => self.render_grid_view(ui, ctx),
            DirectoryLayout::List => self.render_list_view(ui),
        }
    }

    fn render_grid_view(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let p = theme::palette(self.dark_mode);
        let spacing = theme::SPACING_LG;
        let (base_w, base_h) = if self.large_cards {
            theme::CARD_LARGE
        } else {
            theme::CARD_SMALL
        };
        let available = ui.available_width();
        let num_cols = ((available + spacing) / (base_w + spacing)).floor().max(2.0);
        let card_w = ((available - spacing * (num_cols - 1.0)) / num_cols).floor();
        let card_h = (base_h * (card_w / base_w)).floor();

        let mut clicked_country: Option<String> = None;

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    ui.spacing_mut().item_spacing = egui::vec2(spacing, spacing);
                    let indices = self.filtered_indices.clone();
                    for &idx in &indices {
                        // Clone record data to avoid borrow issues with load_flag
                        let country = self.countries[idx].clone();

                        let (rect, response) = ui
                            .allocate_exact_size(egui::vec2(card_w, card_h), egui::Sense::click());

                        if !ui.is_rect_visible(rect) {
                            continue;
                        }

                        let flag_texture = self.load_flag(ctx, &country.alpha3_code);
                        let painter = ui.painter();

                        painter.rect_filled(rect, theme::RADIUS_LARGE, p.bg_elevated);

                        // Flag occupies the top of the card
                        let flag_h = (card_w / theme::FLAG_ASPECT_RATIO * 0.75).min(card_h * 0.55);
                        let flag_rect = egui::Rect::from_min_size(
                            rect.min,
                            egui::vec2(card_w, flag_h),
                        );
                        if let Some(tex) = flag_texture {
                            let uv = egui::Rect::from_min_max(
                                egui::pos2(0.0, 0.0),
                                egui::pos2(1.0, 1.0),
                            );
                            let brush = egui::epaint::Brush {
                                fill_texture_id: tex.id(),
                                uv,
                            };
                            let mut shape = egui::epaint::RectShape::filled(
                                flag_rect,
                                egui::CornerRadius {
                                    nw: theme::RADIUS_LARGE as u8,
                                    ne: theme::RADIUS_LARGE as u8,
                                    sw: 0,
                                    se: 0,
                                },
                                egui::Color32::WHITE,
                            );
                            shape.brush = Some(std::sync::Arc::new(brush));
                            painter.add(shape);
                        } else {
                            painter.rect_filled(flag_rect, theme::RADIUS_SMALL, p.bg_surface);
                            painter.text(
                                flag_rect.center(),
                                egui::Align2::CENTER_CENTER,
                                egui_phosphor::regular::FLAG,
                                egui::FontId::proportional(24.0),
                                p.text_dim,
                            );
                        }

                        if response.hovered() {
                            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                        }
                        let border_color = if response.hovered() {
                            p.accent
                        } else {
                            p.border_subtle
                        };
                        painter.rect_stroke(
                            rect,
                            theme::RADIUS_LARGE,
                            egui::Stroke::new(theme::STROKE_DEFAULT, border_color),
                            egui::StrokeKind::Outside,
                        );

                        // Text block below the flag
                        let text_rect = egui::Rect::from_min_max(
                            egui::pos2(rect.min.x + 12.0, flag_rect.max.y + 10.0),
                            rect.max - egui::vec2(12.0, 10.0),
                        );
                        painter.text(
                            text_rect.left_top(),
                            egui::Align2::LEFT_TOP,
                            &country.name,
                            egui::FontId::proportional(theme::FONT_BODY),
                            p.text_primary,
                        );

                        let mut line_y = 22.0;
                        let mut field = |label: &str, value: String| {
                            painter.text(
                                text_rect.left_top() + egui::vec2(0.0, line_y),
                                egui::Align2::LEFT_TOP,
                                format!("{}: {}", label, value),
                                egui::FontId::proportional(theme::FONT_SMALL),
                                p.text_muted,
                            );
                            line_y += 15.0;
                        };
                        if self.show_population {
                            field("Population", format_population(country.population));
                        }
                        if self.show_region {
                            field("Region", components::format_field(&country.region).to_string());
                        }
                        if self.show_capital {
                            field("Capital", components::format_field(&country.capital).to_string());
                        }

                        if response.clicked() {
                            clicked_country = Some(country.name.clone());
                        }
                    }
                });
            });

        if let Some(name) = clicked_country {
            self.select_country(&name);
        }
    }

    fn render_list_view(&mut self, ui: &mut egui::Ui) {
        use egui_extras::{Column, TableBuilder};

        let p = theme::palette(self.dark_mode);
        let row_height = theme::ROW_HEIGHT;
        let header_height = 36.0;

        let mut clicked_country: Option<String> = None;

        let available_width = ui.available_width();
        let part = available_width / 8.0;

        TableBuilder::new(ui)
            .striped(false)
            .resizable(false)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .sense(egui::Sense::click())
            .min_scrolled_height(0.0)
            .column(Column::exact(part * 2.5).clip(true)) // Name
            .column(Column::exact(part * 1.5).clip(true)) // Region
            .column(Column::exact(part * 1.5).clip(true)) // Capital
            .column(Column::exact(part * 1.25).clip(true)) // Population
            .column(Column::exact(part * 1.25).clip(true)) // Area
            .header(header_height, |mut header| {
                for label in ["NAME", "REGION", "CAPITAL", "POPULATION", "AREA"] {
                    header.col(|ui| {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(label)
                                    .size(theme::FONT_SECTION)
                                    .strong()
                                    .color(p.text_muted),
                            )
                            .selectable(false),
                        );
                    });
                }
            })
            .body(|mut body| {
                body.ui_mut().visuals_mut().selection.bg_fill = p.row_selected;

                let indices = self.filtered_indices.clone();
                body.rows(row_height, indices.len(), |mut row| {
                    let country = &self.countries[indices[row.index()]];
                    let name = country.name.clone();

                    row.col(|ui| {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(&country.name)
                                    .size(theme::FONT_LABEL)
                                    .color(p.text_primary),
                            )
                            .selectable(false),
                        );
                    });
                    row.col(|ui| {
                        components::region_badge(ui, p, &country.region);
                    });
                    row.col(|ui| {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(components::format_field(&country.capital))
                                    .size(theme::FONT_LABEL)
                                    .color(p.text_secondary),
                            )
                            .selectable(false),
                        );
                    });
                    row.col(|ui| {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(format_population(country.population))
                                    .size(theme::FONT_LABEL)
                                    .color(p.text_secondary),
                            )
                            .selectable(false),
                        );
                    });
                    row.col(|ui| {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(format_area(country.area))
                                    .size(theme::FONT_LABEL)
                                    .color(p.text_secondary),
                            )
                            .selectable(false),
                        );
                    });

                    if row.response().clicked() {
                        clicked_country = Some(name);
                    }
                });
            });

        if let Some(name) = clicked_country {
            self.select_country(&name);
        }
    }

    // ========================================================================
    // DETAIL
    // ========================================================================

    pub(crate) fn render_detail_view(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let p = theme::palette(self.dark_mode);

        // Stale selection (e.g. removed by a refresh) falls back to the
        // directory.
        let Some(country) = self.resolve_selected().cloned() else {
            self.back_to_directory();
            return;
        };

        let flag_texture = self.load_flag(ctx, &country.alpha3_code);
        let mut border_clicked: Option<String> = None;

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.add_space(theme::SPACING_XL);

                ui.horizontal_top(|ui| {
                    // Flag panel
                    let flag_w = (ui.available_width() * 0.38).clamp(240.0, 480.0);
                    let flag_h = flag_w / theme::FLAG_ASPECT_RATIO * 0.75;
                    let (rect, response) = ui.allocate_exact_size(
                        egui::vec2(flag_w, flag_h),
                        egui::Sense::click(),
                    );
                    if let Some(tex) = &flag_texture {
                        ui.painter().image(
                            tex.id(),
                            rect,
                            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                            egui::Color32::WHITE,
                        );
                    } else {
                        ui.painter()
                            .rect_filled(rect, theme::RADIUS_DEFAULT, p.bg_surface);
                        ui.painter().text(
                            rect.center(),
                            egui::Align2::CENTER_CENTER,
                            egui_phosphor::regular::FLAG,
                            egui::FontId::proportional(40.0),
                            p.text_dim,
                        );
                    }
                    ui.painter().rect_stroke(
                        rect,
                        theme::RADIUS_DEFAULT,
                        egui::Stroke::new(theme::STROKE_DEFAULT, p.border_subtle),
                        egui::StrokeKind::Outside,
                    );
                    if response.hovered() && !country.flags.svg.is_empty() {
                        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                    }
                    if response.clicked() && !country.flags.svg.is_empty() {
                        let _ = open::that(&country.flags.svg);
                    }
                    response.on_hover_text("Open flag in browser");

                    ui.add_space(theme::SPACING_XL * 2.0);

                    // Facts
                    ui.vertical(|ui| {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(&country.name)
                                    .size(24.0)
                                    .strong()
                                    .color(p.text_primary),
                            )
                            .selectable(false),
                        );
                        ui.add_space(theme::SPACING_LG);

                        components::detail_row(
                            ui,
                            p,
                            "Native Name:",
                            components::format_field(&country.native_name),
                        );
                        components::detail_row(
                            ui,
                            p,
                            "Population:",
                            &format_population(country.population),
                        );
                        components::detail_row(
                            ui,
                            p,
                            "Region:",
                            components::format_field(&country.region),
                        );
                        components::detail_row(
                            ui,
                            p,
                            "Sub Region:",
                            components::format_field(&country.subregion),
                        );
                        components::detail_row(
                            ui,
                            p,
                            "Capital:",
                            components::format_field(&country.capital),
                        );
                        components::detail_row(ui, p, "Area:", &format_area(country.area));

                        ui.add_space(theme::SPACING_LG);

                        components::detail_row(
                            ui,
                            p,
                            "Top Level Domain:",
                            &components::format_domains(&country),
                        );
                        components::detail_row(
                            ui,
                            p,
                            "Currencies:",
                            &components::format_currencies(&country),
                        );
                        components::detail_row(
                            ui,
                            p,
                            "Languages:",
                            &components::format_languages(&country),
                        );

                        ui.add_space(theme::SPACING_XL);

                        // Border country chips
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new("Border Countries:")
                                    .size(theme::FONT_LABEL)
                                    .color(p.text_muted),
                            )
                            .selectable(false),
                        );
                        ui.add_space(theme::SPACING_SM);
                        if country.borders.is_empty() {
                            ui.add(
                                egui::Label::new(
                                    egui::RichText::new("None")
                                        .size(theme::FONT_LABEL)
                                        .color(p.text_dim),
                                )
                                .selectable(false),
                            );
                        } else {
                            ui.horizontal_wrapped(|ui| {
                                ui.spacing_mut().item_spacing =
                                    egui::vec2(theme::SPACING_SM, theme::SPACING_SM);
                                for code in &country.borders {
                                    // Chips show the neighbor's name when it
                                    // is in the dataset, the raw code otherwise
                                    let label = self
                                        .countries
                                        .iter()
                                        .find(|c| &c.alpha3_code == code)
                                        .map(|c| c.name.clone())
                                        .unwrap_or_else(|| code.clone());
                                    let galley = ui.painter().layout_no_wrap(
                                        label.clone(),
                                        egui::FontId::proportional(theme::FONT_SMALL),
                                        p.text_primary,
                                    );
                                    let chip_size =
                                        galley.size() + egui::vec2(20.0, 10.0);
                                    let (rect, response) = ui
                                        .allocate_exact_size(chip_size, egui::Sense::click());
                                    if response.hovered() {
                                        ui.ctx()
                                            .set_cursor_icon(egui::CursorIcon::PointingHand);
                                    }
                                    let (fill, draw_rect) = theme::button_visual(
                                        p,
                                        &response,
                                        p.bg_surface,
                                        rect,
                                    );
                                    ui.painter().rect_filled(
                                        draw_rect,
                                        theme::RADIUS_DEFAULT,
                                        fill,
                                    );
                                    ui.painter().galley(
                                        draw_rect.center() - galley.size() / 2.0,
                                        galley,
                                        p.text_primary,
                                    );
                                    if response.clicked() {
                                        border_clicked = Some(code.clone());
                                    }
                                }
                            });
                        }
                    });
                });
            });

        if let Some(code) = border_clicked {
            self.open_border(&code);
        }
    }

    // ========================================================================
    // SETTINGS MODAL
    // ========================================================================

    pub(crate) fn render_settings_modal(&mut self, ctx: &egui::Context) {
        if !self.show_settings {
            return;
        }
        let p = theme::palette(self.dark_mode);

        let modal_response = egui::Modal::new(egui::Id::new("settings_modal"))
            .backdrop_color(egui::Color32::from_black_alpha(120))
            .frame(theme::modal_frame(p))
            .show(ctx, |ui| {
                ui.set_width(300.0);

                ui.horizontal(|ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new("Settings").size(theme::FONT_HEADING).strong(),
                        )
                        .selectable(false),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let close_size = 24.0;
                        let (rect, response) = ui.allocate_exact_size(
                            egui::vec2(close_size, close_size),
                            egui::Sense::click(),
                        );
                        let close_color = if response.hovered() {
                            ui.painter()
                                .rect_filled(rect, theme::RADIUS_DEFAULT, p.bg_surface);
                            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                            p.status_error
                        } else {
                            p.text_dim
                        };
                        ui.painter().text(
                            rect.center(),
                            egui::Align2::CENTER_CENTER,
                            egui_phosphor::regular::X,
                            egui::FontId::proportional(16.0),
                            close_color,
                        );
                        if response.clicked() {
                            self.show_settings = false;
                        }
                    });
                });
                ui.add_space(4.0);
                ui.separator();
                ui.add_space(theme::SPACING_SM);

                let mut changed = false;

                // — View —
                ui.add(
                    egui::Label::new(
                        egui::RichText::new("View")
                            .size(theme::FONT_LABEL)
                            .color(p.accent),
                    )
                    .selectable(false),
                );
                ui.add_space(2.0);
                if theme::settings_checkbox(ui, p, self.large_cards, "Large Cards", true) {
                    self.large_cards = !self.large_cards;
                    changed = true;
                }

                ui.add_space(theme::SPACING_MD);
                ui.separator();
                ui.add_space(theme::SPACING_SM);

                // — Card fields —
                ui.add(
                    egui::Label::new(
                        egui::RichText::new("Card Info")
                            .size(theme::FONT_LABEL)
                            .color(p.accent),
                    )
                    .selectable(false),
                );
                ui.add_space(2.0);
                theme::settings_checkbox(ui, p, true, "Name", false); // Always shown, dimmed
                for (val, label) in [
                    (&mut self.show_population, "Population"),
                    (&mut self.show_region, "Region"),
                    (&mut self.show_capital, "Capital"),
                ] {
                    if theme::settings_checkbox(ui, p, *val, label, true) {
                        *val = !*val;
                        changed = true;
                    }
                }

                if changed {
                    self.save_settings();
                }

                ui.add_space(theme::SPACING_MD);
                ui.separator();
                ui.add_space(theme::SPACING_SM);

                // — Cache —
                ui.add(
                    egui::Label::new(
                        egui::RichText::new("Cache")
                            .size(theme::FONT_LABEL)
                            .color(p.accent),
                    )
                    .selectable(false),
                );
                ui.add_space(2.0);
                let (rect, response) =
                    ui.allocate_exact_size(egui::vec2(140.0, 26.0), egui::Sense::click());
                if response.hovered() {
                    ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                }
                let (fill, draw_rect) = theme::button_visual(p, &response, p.btn_danger, rect);
                ui.painter()
                    .rect_filled(draw_rect, theme::RADIUS_DEFAULT, fill);
                ui.painter().text(
                    draw_rect.center(),
                    egui::Align2::CENTER_CENTER,
                    format!("{}  Clear Flag Cache", egui_phosphor::regular::TRASH),
                    egui::FontId::proportional(theme::FONT_SECTION),
                    egui::Color32::WHITE,
                );
                if response.clicked() {
                    let _ = std::fs::remove_dir_all(self.cache_dir.join("flags"));
                    self.flag_cache.clear();
                    self.start_flag_prefetch(ctx);
                }
            });

        if modal_response.should_close() {
            self.show_settings = false;
        }
    }

    // ========================================================================
    // TOAST
    // ========================================================================

    pub(crate) fn render_toast(&mut self, ctx: &egui::Context) {
        let Some(msg) = self.toast_message.clone() else {
            return;
        };
        let p = theme::palette(self.dark_mode);

        let visible_duration = 3.0;
        let fade_duration = 0.5;
        let total_duration = visible_duration + fade_duration;
        let margin = 12.0;

        let screen = ctx.screen_rect();
        let toast_pos = egui::pos2(screen.right() - margin, screen.bottom() - margin);

        let response = egui::Area::new(egui::Id::new("toast"))
            .fixed_pos(toast_pos)
            .pivot(egui::Align2::RIGHT_BOTTOM)
            .show(ctx, |ui| {
                let elapsed = self
                    .toast_start
                    .map(|t| t.elapsed().as_secs_f32())
                    .unwrap_or(0.0);
                let alpha = if elapsed > visible_duration {
                    (total_duration - elapsed) / fade_duration
                } else {
                    1.0
                };

                let bg = p.bg_elevated;
                egui::Frame::new()
                    .fill(egui::Color32::from_rgba_unmultiplied(
                        bg.r(),
                        bg.g(),
                        bg.b(),
                        (230.0 * alpha) as u8,
                    ))
                    .stroke(egui::Stroke::new(
                        1.0,
                        egui::Color32::from_rgba_unmultiplied(
                            p.accent.r(),
                            p.accent.g(),
                            p.accent.b(),
                            (100.0 * alpha) as u8,
                        ),
                    ))
                    .corner_radius(6.0)
                    .inner_margin(egui::Margin::symmetric(16, 10))
                    .show(ui, |ui| {
                        let fg = p.text_primary;
                        ui.label(egui::RichText::new(&msg).color(
                            egui::Color32::from_rgba_unmultiplied(
                                fg.r(),
                                fg.g(),
                                fg.b(),
                                (255.0 * alpha) as u8,
                            ),
                        ));
                    });
            });

        // Pause timer while hovering
        if response.response.hovered() {
            self.toast_start = Some(std::time::Instant::now());
        }

        let elapsed = self
            .toast_start
            .map(|t| t.elapsed().as_secs_f32())
            .unwrap_or(0.0);
        if elapsed >= total_duration {
            self.toast_message = None;
            self.toast_start = None;
        } else {
            ctx.request_repaint();
        }
    }
}
