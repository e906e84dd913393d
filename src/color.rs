use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use vision_dash::benchmarks::EntryKind;
use vision_dash::data::Pillar;
use vision_dash::insights::Sentiment;

// ---------------------------------------------------------------------------
// Fixed colours
// ---------------------------------------------------------------------------

pub const HIGHLIGHT: Color32 = Color32::from_rgb(0x0e, 0xa5, 0xe9);
pub const POSITIVE: Color32 = Color32::from_rgb(0x10, 0xb9, 0x81);
pub const NEGATIVE: Color32 = Color32::from_rgb(0xef, 0x44, 0x44);
pub const NEUTRAL: Color32 = Color32::from_rgb(0x3b, 0x82, 0xf6);

pub fn pillar_color(pillar: Pillar) -> Color32 {
    match pillar {
        Pillar::KeyIndicators => Color32::from_rgb(0x8b, 0x5c, 0xf6),
        Pillar::Economic => Color32::from_rgb(0x3b, 0x82, 0xf6),
        Pillar::Environmental => Color32::from_rgb(0x10, 0xb9, 0x81),
        Pillar::Human => Color32::from_rgb(0xf5, 0x9e, 0x0b),
        Pillar::Social => Color32::from_rgb(0xef, 0x44, 0x44),
    }
}

pub fn sentiment_color(sentiment: Sentiment) -> Color32 {
    match sentiment {
        Sentiment::Positive => POSITIVE,
        Sentiment::Negative => NEGATIVE,
        Sentiment::Neutral => NEUTRAL,
    }
}

/// Colour of a benchmark reference line or card row.
pub fn benchmark_color(kind: EntryKind) -> Color32 {
    match kind {
        EntryKind::Global => Color32::from_rgb(0x94, 0xa3, 0xb8),
        EntryKind::Regional => Color32::from_rgb(0x33, 0x41, 0x55),
        EntryKind::Leading => Color32::from_rgb(0xea, 0xb3, 0x08),
        EntryKind::Note => Color32::GRAY,
    }
}

// ---------------------------------------------------------------------------
// Series colours
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

/// Line colours for a chart with `n` series. A single series takes the
/// pillar colour.
pub fn series_colors(pillar: Pillar, n: usize) -> Vec<Color32> {
    if n == 1 {
        vec![pillar_color(pillar)]
    } else {
        generate_palette(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_is_distinct() {
        let colors = generate_palette(4);
        assert_eq!(colors.len(), 4);
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn single_series_uses_pillar_colour() {
        assert_eq!(series_colors(Pillar::Human, 1), vec![pillar_color(Pillar::Human)]);
        assert_eq!(series_colors(Pillar::Human, 3).len(), 3);
    }
}
