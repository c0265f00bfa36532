//! Utility functions

use std::path::PathBuf;

// With stroke — for sidebar logo (large display)
pub const LOGO_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64"><defs><style>.c1{fill:none;stroke:#2dd4bf;stroke-width:3px}.c2{fill:none;stroke:#fff;stroke-width:2px}</style></defs><circle class="c1" cx="32" cy="32" r="28"/><ellipse class="c2" cx="32" cy="32" rx="12" ry="28"/><ellipse class="c2" cx="32" cy="32" rx="22" ry="28"/><line class="c2" x1="4" y1="32" x2="60" y2="32"/><path class="c2" d="M8,18 Q32,26 56,18"/><path class="c2" d="M8,46 Q32,38 56,46"/></svg>"#;

// Filled, square viewBox — for window/taskbar icons
pub const ICON_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64"><defs><style>.c1{fill:#09090b}.c2{fill:none;stroke:#2dd4bf;stroke-width:3px}.c3{fill:none;stroke:#fff;stroke-width:2px}</style></defs><circle class="c1" cx="32" cy="32" r="32"/><circle class="c2" cx="32" cy="32" r="26"/><ellipse class="c3" cx="32" cy="32" rx="11" ry="26"/><line class="c3" x1="6" y1="32" x2="58" y2="32"/><path class="c3" d="M10,19 Q32,27 54,19"/><path class="c3" d="M10,45 Q32,37 54,45"/></svg>"#;

/// Rasterize the logo SVG at the given width, preserving aspect ratio.
pub fn rasterize_logo(width: u32) -> (Vec<u8>, u32, u32) {
    let tree = resvg::usvg::Tree::from_str(LOGO_SVG, &resvg::usvg::Options::default()).unwrap();
    let svg_size = tree.size();
    let scale = width as f32 / svg_size.width();
    let height = (svg_size.height() * scale).ceil() as u32;
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height).unwrap();
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    (premul_to_straight(&pixmap), width, height)
}

/// Rasterize the icon SVG to a square image (for window/taskbar icons).
pub fn rasterize_logo_square(size: u32) -> (Vec<u8>, u32, u32) {
    let tree = resvg::usvg::Tree::from_str(ICON_SVG, &resvg::usvg::Options::default()).unwrap();
    let scale = size as f32 / tree.size().width();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size, size).unwrap();
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    (premul_to_straight(&pixmap), size, size)
}

fn premul_to_straight(pixmap: &resvg::tiny_skia::Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let a = p.alpha();
            if a == 0 {
                [0, 0, 0, 0]
            } else {
                let r = (p.red() as u16 * 255 / a as u16) as u8;
                let g = (p.green() as u16 * 255 / a as u16) as u8;
                let b = (p.blue() as u16 * 255 / a as u16) as u8;
                [r, g, b, a]
            }
        })
        .collect()
}

/// Get the flag cache directory path
pub fn get_cache_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Country Atlas")
        .join("cache")
}

/// Format a population count with thousands separators, "N/A" when absent
pub fn format_population(population: Option<u64>) -> String {
    match population {
        Some(p) => group_thousands(p),
        None => "N/A".to_string(),
    }
}

/// Format an area in km² with thousands separators, "N/A" when absent
pub fn format_area(area: Option<f64>) -> String {
    match area {
        Some(a) if a >= 0.0 => {
            let whole = group_thousands(a.trunc() as u64);
            let frac = a.fract();
            if frac >= 0.05 {
                format!("{}.{:.0} km²", whole, frac * 10.0)
            } else {
                format!("{} km²", whole)
            }
        }
        _ => "N/A".to_string(),
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn population_grouping() {
        assert_eq!(format_population(Some(0)), "0");
        assert_eq!(format_population(Some(950)), "950");
        assert_eq!(format_population(Some(1000)), "1,000");
        assert_eq!(format_population(Some(81_770_900)), "81,770,900");
        assert_eq!(format_population(None), "N/A");
    }

    #[test]
    fn area_grouping() {
        assert_eq!(format_area(Some(103_000.0)), "103,000 km²");
        assert_eq!(format_area(Some(21.3)), "21.3 km²");
        assert_eq!(format_area(None), "N/A");
    }
}
