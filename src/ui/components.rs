//! Reusable UI components
//!
//! This module contains standalone UI components that can be used
//! throughout the application.

use crate::db::Country;
use crate::theme::{self, Palette};
use eframe::egui;

/// Show a text field value, substituting "N/A" when empty
pub fn format_field(value: &str) -> &str {
    if value.is_empty() {
        "N/A"
    } else {
        value
    }
}

/// Joined currency list ("Euro (€), Danish krone (kr)"), "N/A" when empty
pub fn format_currencies(country: &Country) -> String {
    if country.currencies.is_empty() {
        return "N/A".to_string();
    }
    country
        .currencies
        .iter()
        .map(|c| {
            if c.symbol.is_empty() {
                c.name.clone()
            } else {
                format!("{} ({})", c.name, c.symbol)
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Joined language list, "N/A" when empty
pub fn format_languages(country: &Country) -> String {
    if country.languages.is_empty() {
        return "N/A".to_string();
    }
    country
        .languages
        .iter()
        .map(|l| l.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Joined top-level domain list, "N/A" when empty
pub fn format_domains(country: &Country) -> String {
    if country.top_level_domain.is_empty() {
        "N/A".to_string()
    } else {
        country.top_level_domain.join(", ")
    }
}

/// Region badge with the region's accent color
pub fn region_badge(ui: &mut egui::Ui, p: &Palette, region: &str) {
    let (bg, fg) = theme::region_colors(p, region);
    let label = if region.is_empty() { "N/A" } else { region };
    egui::Frame::new()
        .fill(bg)
        .corner_radius(theme::RADIUS_SMALL)
        .inner_margin(egui::Margin::symmetric(6, 2))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(label)
                    .size(theme::FONT_SMALL)
                    .color(fg),
            );
        });
}

/// "Label  Value" detail row used on the detail screen
pub fn detail_row(ui: &mut egui::Ui, p: &Palette, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(label)
                .size(theme::FONT_LABEL)
                .color(p.text_muted),
        );
        ui.label(
            egui::RichText::new(value)
                .size(theme::FONT_LABEL)
                .color(p.text_primary),
        );
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Currency, Language};

    fn base_country() -> Country {
        Country {
            id: 1,
            name: "Denmark".to_string(),
            alpha3_code: "DNK".to_string(),
            native_name: "Danmark".to_string(),
            region: "Europe".to_string(),
            subregion: "Northern Europe".to_string(),
            capital: "Copenhagen".to_string(),
            population: Some(5_717_014),
            area: Some(43_094.0),
            top_level_domain: vec![".dk".to_string()],
            currencies: vec![Currency {
                code: "DKK".to_string(),
                name: "Danish krone".to_string(),
                symbol: "kr".to_string(),
            }],
            languages: vec![Language {
                name: "Danish".to_string(),
            }],
            borders: vec!["DEU".to_string()],
            flags: Default::default(),
        }
    }

    #[test]
    fn empty_fields_show_na() {
        assert_eq!(format_field(""), "N/A");
        assert_eq!(format_field("Copenhagen"), "Copenhagen");
    }

    #[test]
    fn list_fields_join_or_show_na() {
        let mut country = base_country();
        assert_eq!(format_currencies(&country), "Danish krone (kr)");
        assert_eq!(format_languages(&country), "Danish");
        assert_eq!(format_domains(&country), ".dk");

        country.currencies.clear();
        country.languages.clear();
        country.top_level_domain.clear();
        assert_eq!(format_currencies(&country), "N/A");
        assert_eq!(format_languages(&country), "N/A");
        assert_eq!(format_domains(&country), "N/A");
    }

    #[test]
    fn currency_without_symbol_omits_parens() {
        let mut country = base_country();
        country.currencies[0].symbol = String::new();
        assert_eq!(format_currencies(&country), "Danish krone");
    }
}
