use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use ipca_dashboard::data::model::Category;

// ---------------------------------------------------------------------------
// Base colours (light theme)
// ---------------------------------------------------------------------------

const FUEL: Color32 = Color32::from_rgb(0x00, 0x9c, 0x3b);
const IPCA_ACCUMULATED: Color32 = Color32::from_rgb(0x00, 0x27, 0x76);
const IPCA_UP: Color32 = Color32::from_rgb(0xd1, 0x34, 0x38);
const IPCA_DOWN: Color32 = Color32::from_rgb(0x10, 0x7c, 0x10);
const HISTORICAL: Color32 = Color32::from_rgb(0x19, 0x87, 0x54);
const PROJECTION: Color32 = Color32::from_rgb(0xff, 0xc1, 0x07);

// ---------------------------------------------------------------------------
// Theme-aware palette
// ---------------------------------------------------------------------------

/// Series and badge colours for the current theme. Dark backgrounds get
/// lighter variants so thin lines stay readable.
#[derive(Debug, Clone, Copy)]
pub struct ChartPalette {
    pub fuel: Color32,
    pub ipca_accumulated: Color32,
    pub ipca_up: Color32,
    pub ipca_down: Color32,
    historical: Color32,
    projection: Color32,
}

impl ChartPalette {
    pub fn for_theme(dark: bool) -> Self {
        let adjust = |c: Color32| if dark { lighten(c, 0.2) } else { c };
        ChartPalette {
            fuel: adjust(FUEL),
            ipca_accumulated: adjust(IPCA_ACCUMULATED),
            ipca_up: adjust(IPCA_UP),
            ipca_down: adjust(IPCA_DOWN),
            historical: adjust(HISTORICAL),
            projection: PROJECTION,
        }
    }

    /// Badge colour for a record category.
    pub fn category(&self, category: Category) -> Color32 {
        match category {
            Category::Historical => self.historical,
            Category::Projection => self.projection,
        }
    }

    /// Bar colour for a monthly IPCA value: red for inflation, green otherwise.
    pub fn ipca_bar(&self, value: f64) -> Color32 {
        if value > 0.0 {
            self.ipca_up
        } else {
            self.ipca_down
        }
    }
}

/// Raise the HSL lightness of a colour by `amount` (0..1), capped at 0.85.
pub fn lighten(color: Color32, amount: f32) -> Color32 {
    let rgb = Srgb::new(
        color.r() as f32 / 255.0,
        color.g() as f32 / 255.0,
        color.b() as f32 / 255.0,
    );
    let mut hsl: Hsl = rgb.into_color();
    hsl.lightness = (hsl.lightness + amount).min(0.85);
    let out: Srgb = hsl.into_color();
    Color32::from_rgb(
        (out.red.clamp(0.0, 1.0) * 255.0).round() as u8,
        (out.green.clamp(0.0, 1.0) * 255.0).round() as u8,
        (out.blue.clamp(0.0, 1.0) * 255.0).round() as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn luma(c: Color32) -> u32 {
        c.r() as u32 + c.g() as u32 + c.b() as u32
    }

    #[test]
    fn lighten_increases_brightness() {
        let out = lighten(IPCA_ACCUMULATED, 0.2);
        assert!(luma(out) > luma(IPCA_ACCUMULATED));
    }

    #[test]
    fn light_theme_keeps_base_colours() {
        let p = ChartPalette::for_theme(false);
        assert_eq!(p.fuel, FUEL);
        assert_eq!(p.ipca_bar(0.3), IPCA_UP);
        assert_eq!(p.ipca_bar(0.0), IPCA_DOWN);
        assert_eq!(p.category(Category::Projection), PROJECTION);
    }
}
