//! Centralized theme for Country Atlas
//! All colors, sizes, and styling reference the active palette, so the
//! dark-mode toggle swaps the whole scheme at once.

use egui::Color32;

/// Full color scheme for one mode. `DARK` carries the primary zinc/teal
/// scheme; `LIGHT` mirrors it on a bright base.
pub struct Palette {
    pub dark: bool,

    // Backgrounds
    pub bg_base: Color32,
    pub bg_elevated: Color32,
    pub bg_input: Color32,
    pub bg_surface: Color32,
    pub bg_hover: Color32,
    pub bg_hover_subtle: Color32,

    // Accent (teal)
    pub accent: Color32,
    pub accent_light: Color32,

    // Text
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,
    pub text_dim: Color32,

    // Borders
    pub border_subtle: Color32,
    pub border_default: Color32,
    pub border_strong: Color32,

    // Filter toggles
    pub toggle_selected: Color32,
    pub toggle_unselected: Color32,
    pub toggle_glow: Color32,

    // Buttons
    pub btn_default: Color32,
    pub btn_accent: Color32,
    pub btn_accent_text: Color32,
    pub btn_danger: Color32,
    pub btn_disabled: Color32,

    // Status
    pub status_success: Color32,
    pub status_error: Color32,

    // Selection
    pub row_selected: Color32,
}

pub const DARK: Palette = Palette {
    dark: true,
    bg_base: Color32::from_rgb(0x09, 0x09, 0x0b),    // zinc-950
    bg_elevated: Color32::from_rgb(0x18, 0x18, 0x1b), // zinc-900
    bg_input: Color32::from_rgb(0x14, 0x14, 0x18),
    bg_surface: Color32::from_rgb(0x27, 0x27, 0x2a), // zinc-800
    bg_hover: Color32::from_rgb(0x0f, 0x1a, 0x19),   // subtle teal hover
    bg_hover_subtle: Color32::from_rgb(0x1f, 0x1f, 0x22),
    accent: Color32::from_rgb(0x2d, 0xd4, 0xbf),       // teal-400
    accent_light: Color32::from_rgb(0x5e, 0xea, 0xd4), // teal-300
    text_primary: Color32::WHITE,
    text_secondary: Color32::from_rgb(0xe4, 0xe4, 0xe7), // zinc-200
    text_muted: Color32::from_rgb(0xa1, 0xa1, 0xaa),     // zinc-400
    text_dim: Color32::from_rgb(0x71, 0x71, 0x7a),       // zinc-500
    border_subtle: Color32::from_rgb(0x27, 0x27, 0x2a),  // zinc-800
    border_default: Color32::from_rgb(0x3f, 0x3f, 0x46), // zinc-700
    border_strong: Color32::from_rgb(0x52, 0x52, 0x5b),  // zinc-600
    toggle_selected: Color32::from_rgb(0x11, 0x5e, 0x59), // teal-800
    toggle_unselected: Color32::from_rgb(0x27, 0x27, 0x2a),
    toggle_glow: Color32::from_rgb(0x0f, 0x76, 0x6e),
    btn_default: Color32::from_rgb(0x3f, 0x3f, 0x46), // zinc-700
    btn_accent: Color32::from_rgb(0x2d, 0xd4, 0xbf),  // teal-400
    btn_accent_text: Color32::from_rgb(0x04, 0x2f, 0x2e), // teal-950
    btn_danger: Color32::from_rgb(0xdc, 0x26, 0x26),  // red-600
    btn_disabled: Color32::from_rgb(0x1a, 0x1a, 0x1a),
    status_success: Color32::from_rgb(0x34, 0xd3, 0x99), // emerald-400
    status_error: Color32::from_rgb(0xf8, 0x71, 0x71),   // red-400
    row_selected: Color32::from_rgb(0x0f, 0x1a, 0x19),
};

pub const LIGHT: Palette = Palette {
    dark: false,
    bg_base: Color32::from_rgb(0xfa, 0xfa, 0xfa),    // zinc-50
    bg_elevated: Color32::WHITE,
    bg_input: Color32::WHITE,
    bg_surface: Color32::from_rgb(0xe4, 0xe4, 0xe7), // zinc-200
    bg_hover: Color32::from_rgb(0xcc, 0xfb, 0xf1),   // teal-100
    bg_hover_subtle: Color32::from_rgb(0xf4, 0xf4, 0xf5),
    accent: Color32::from_rgb(0x0d, 0x94, 0x88),       // teal-600
    accent_light: Color32::from_rgb(0x14, 0xb8, 0xa6), // teal-500
    text_primary: Color32::from_rgb(0x18, 0x18, 0x1b), // zinc-900
    text_secondary: Color32::from_rgb(0x3f, 0x3f, 0x46), // zinc-700
    text_muted: Color32::from_rgb(0x71, 0x71, 0x7a),   // zinc-500
    text_dim: Color32::from_rgb(0xa1, 0xa1, 0xaa),     // zinc-400
    border_subtle: Color32::from_rgb(0xe4, 0xe4, 0xe7), // zinc-200
    border_default: Color32::from_rgb(0xd4, 0xd4, 0xd8), // zinc-300
    border_strong: Color32::from_rgb(0xa1, 0xa1, 0xaa), // zinc-400
    toggle_selected: Color32::from_rgb(0x99, 0xf6, 0xe4), // teal-200
    toggle_unselected: Color32::from_rgb(0xe4, 0xe4, 0xe7),
    toggle_glow: Color32::from_rgb(0x5e, 0xea, 0xd4), // teal-300
    btn_default: Color32::from_rgb(0xd4, 0xd4, 0xd8), // zinc-300
    btn_accent: Color32::from_rgb(0x0d, 0x94, 0x88),  // teal-600
    btn_accent_text: Color32::WHITE,
    btn_danger: Color32::from_rgb(0xdc, 0x26, 0x26),
    btn_disabled: Color32::from_rgb(0xf4, 0xf4, 0xf5),
    status_success: Color32::from_rgb(0x05, 0x96, 0x69), // emerald-600
    status_error: Color32::from_rgb(0xdc, 0x26, 0x26),
    row_selected: Color32::from_rgb(0xcc, 0xfb, 0xf1),
};

pub fn palette(dark: bool) -> &'static Palette {
    if dark {
        &DARK
    } else {
        &LIGHT
    }
}

// =============================================================================
// COLORS - Regions
// =============================================================================
pub fn region_colors(p: &Palette, region: &str) -> (Color32, Color32) {
    // Returns (badge bg ~6% alpha, text color)
    let fg = match region {
        "Africa" => Color32::from_rgb(0xfb, 0xbf, 0x24),   // amber-400
        "Americas" => Color32::from_rgb(0x34, 0xd3, 0x99), // emerald-400
        "Asia" => Color32::from_rgb(0xf8, 0x71, 0x71),     // red-400
        "Europe" => Color32::from_rgb(0x38, 0xbd, 0xf8),   // sky-400
        "Oceania" => Color32::from_rgb(0x22, 0xd3, 0xee),  // cyan-400
        "Polar" => Color32::from_rgb(0xa5, 0xb4, 0xfc),    // indigo-300
        _ => p.text_muted,
    };
    let bg = Color32::from_rgba_unmultiplied(fg.r(), fg.g(), fg.b(), 10);
    (bg, fg)
}

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_HEADING: f32 = 16.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_LABEL: f32 = 13.0;
pub const FONT_SECTION: f32 = 12.0;
pub const FONT_SMALL: f32 = 11.0;
pub const FONT_CAPTION: f32 = 10.0;

// =============================================================================
// DIMENSIONS
// =============================================================================
pub const SIDEBAR_WIDTH: f32 = 260.0;
pub const ROW_HEIGHT: f32 = 32.0;
pub const BUTTON_HEIGHT: f32 = 28.0;

pub const CARD_SMALL: (f32, f32) = (200.0, 150.0);
pub const CARD_LARGE: (f32, f32) = (264.0, 210.0);

pub const FLAG_ASPECT_RATIO: f32 = 4.0 / 3.0;

// =============================================================================
// CORNER RADIUS
// =============================================================================
pub const RADIUS_SMALL: f32 = 2.0;
pub const RADIUS_DEFAULT: f32 = 4.0;
pub const RADIUS_LARGE: f32 = 8.0;

// =============================================================================
// STROKE WIDTHS
// =============================================================================
pub const STROKE_DEFAULT: f32 = 1.0;
pub const STROKE_MEDIUM: f32 = 1.5;

// =============================================================================
// SPACING
// =============================================================================
pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 12.0;
pub const SPACING_XL: f32 = 16.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context, dark: bool) {
    let p = palette(dark);
    let base = if dark {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };
    ctx.set_visuals(egui::Visuals {
        dark_mode: dark,
        panel_fill: p.bg_base,
        window_fill: p.bg_elevated,
        extreme_bg_color: p.bg_base,
        faint_bg_color: p.bg_elevated,
        hyperlink_color: p.accent,
        selection: egui::style::Selection {
            bg_fill: p.bg_surface,
            stroke: egui::Stroke::NONE,
        },
        widgets: egui::style::Widgets {
            noninteractive: egui::style::WidgetVisuals {
                bg_fill: p.bg_elevated,
                weak_bg_fill: p.bg_surface,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, p.border_subtle),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, p.text_primary),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            inactive: egui::style::WidgetVisuals {
                bg_fill: Color32::TRANSPARENT,
                weak_bg_fill: p.bg_elevated,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, p.border_subtle),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, p.text_secondary),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            hovered: egui::style::WidgetVisuals {
                bg_fill: p.bg_hover,
                weak_bg_fill: p.bg_hover_subtle,
                bg_stroke: egui::Stroke::NONE,
                fg_stroke: egui::Stroke::new(STROKE_MEDIUM, p.text_primary),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            active: egui::style::WidgetVisuals {
                bg_fill: p.bg_surface,
                weak_bg_fill: p.bg_surface,
                bg_stroke: egui::Stroke::NONE,
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, p.text_primary),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: -2.0,
            },
            open: egui::style::WidgetVisuals {
                bg_fill: p.bg_surface,
                weak_bg_fill: p.bg_elevated,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, p.border_subtle),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, p.text_primary),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
        },
        striped: false,
        slider_trailing_fill: false,
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        popup_shadow: egui::epaint::Shadow {
            offset: [0, 4],
            blur: 12,
            spread: 0,
            color: Color32::from_black_alpha(if dark { 80 } else { 30 }),
        },
        window_stroke: egui::Stroke::new(1.0, p.border_default),
        window_corner_radius: egui::CornerRadius::same(8),
        menu_corner_radius: egui::CornerRadius::same(8),
        ..base
    });

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.menu_margin = egui::Margin::symmetric(6, 4);
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(12.0, 6.0);
        style.spacing.scroll.bar_inner_margin = 2.0;
        style.spacing.scroll.bar_width = 6.0;
        style.spacing.scroll.bar_outer_margin = 2.0;
        style.spacing.scroll.handle_min_length = 20.0;
    });
}

// =============================================================================
// HELPER - Frames
// =============================================================================
pub fn section_frame(p: &Palette) -> egui::Frame {
    egui::Frame::new()
        .fill(p.bg_input)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, p.border_subtle))
        .corner_radius(RADIUS_DEFAULT)
        .inner_margin(egui::Margin::same(12))
}

pub fn modal_frame(p: &Palette) -> egui::Frame {
    egui::Frame::new()
        .fill(p.bg_elevated)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, p.border_default))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(egui::Margin::same(20))
}

// =============================================================================
// HELPER - Button styles
// =============================================================================

/// Returns (fill, draw_rect) for a custom-painted button with hover/press
/// effects. Shifts toward the opposite end of the scale on hover, slightly
/// more + shrinks on press.
pub fn button_visual(
    p: &Palette,
    response: &egui::Response,
    base_fill: Color32,
    rect: egui::Rect,
) -> (Color32, egui::Rect) {
    if response.is_pointer_button_down_on() {
        (shade(p, base_fill, 0.06), rect.shrink(1.5))
    } else if response.hovered() {
        (shade(p, base_fill, 0.12), rect)
    } else {
        (base_fill, rect)
    }
}

fn shade(p: &Palette, c: Color32, amount: f32) -> Color32 {
    let target = if p.dark { 255.0 } else { 0.0 };
    let mix = |v: u8| (v as f32 + (target - v as f32) * amount) as u8;
    Color32::from_rgb(mix(c.r()), mix(c.g()), mix(c.b()))
}

/// Settings checkbox row. Returns true if toggled.
pub fn settings_checkbox(
    ui: &mut egui::Ui,
    p: &Palette,
    checked: bool,
    label: &str,
    enabled: bool,
) -> bool {
    let full_width = ui.available_width();
    let row_height = 20.0;
    let (row_rect, row_resp) =
        ui.allocate_exact_size(egui::vec2(full_width, row_height), egui::Sense::click());
    if enabled && row_resp.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    let painter = ui.painter();
    let cb_size = 16.0;
    let cb_rect = egui::Rect::from_min_size(
        egui::pos2(row_rect.min.x, row_rect.center().y - cb_size / 2.0),
        egui::vec2(cb_size, cb_size),
    );
    if checked {
        painter.rect_stroke(
            cb_rect,
            3.0,
            egui::Stroke::new(1.5, p.accent),
            egui::StrokeKind::Inside,
        );
        painter.rect_filled(cb_rect.shrink(3.0), 2.0, p.accent);
    } else {
        painter.rect_stroke(
            cb_rect,
            3.0,
            egui::Stroke::new(1.5, p.border_default),
            egui::StrokeKind::Inside,
        );
    }
    let color = if enabled { p.text_primary } else { p.text_dim };
    painter.text(
        egui::pos2(cb_rect.max.x + 8.0, row_rect.center().y),
        egui::Align2::LEFT_CENTER,
        label,
        egui::FontId::proportional(FONT_BODY),
        color,
    );
    enabled && row_resp.clicked()
}
