//! Pastel rainbow colors for wheel sections.

/// Convert HSV (hue in degrees, saturation and value in 0..=1) to RGB in 0..=255.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> [f64; 3] {
    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;
    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };
    [(r + m) * 255.0, (g + m) * 255.0, (b + m) * 255.0]
}

fn darken_factor(darkness: u32) -> f64 {
    (0.9 - (darkness.max(1) as f64 - 1.0) * 0.1).max(0.0)
}

fn section_color(index: usize, sections: usize, darken: f64) -> String {
    let hue = index as f64 / sections as f64 * 360.0;
    let [r, g, b] = hsv_to_rgb(hue, 0.4, 0.9);
    format!(
        "rgb({}, {}, {})",
        (r * darken).round(),
        (g * darken).round(),
        (b * darken).round()
    )
}

/// One color per section, hues spread evenly, darkened by `darkness` (1 = lightest).
pub fn pastel_colors(sections: usize, darkness: u32) -> Vec<String> {
    let darken = darken_factor(darkness);
    (0..sections)
        .map(|i| section_color(i, sections, darken))
        .collect()
}

/// Color a label had on the full wheel of `sections`, used for the winner table.
pub fn label_color(label: u32, sections: u32, darkness: u32) -> String {
    let sections = sections.max(label).max(1);
    section_color(
        label.saturating_sub(1) as usize,
        sections as usize,
        darken_factor(darkness),
    )
}
