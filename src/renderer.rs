//! Canvas drawing for the wheel and pointer.
//!
//! The renderer only reads snapshots; it has no way to change engine state.

use crate::config::WHEEL_CENTER_Y;
use crate::engine::WheelSnapshot;
use crate::palette::pastel_colors;
use crate::settings::{NumberStyle, WheelSettings};
use std::f64::consts::PI;
use web_sys::CanvasRenderingContext2d;

/// Receives everything needed to paint one frame of the wheel.
pub trait WheelRenderer {
    fn draw_wheel(&self, wheel: &WheelSnapshot, settings: &WheelSettings);
}

/// Start and end canvas angles (radians) of section `index`.
///
/// Sections run clockwise from the wheel angle; the pointer sits at canvas
/// angle π/2.
pub fn section_arc(angle: f64, index: usize, sections: usize) -> (f64, f64) {
    let per_section = 2.0 * PI / sections as f64;
    (
        angle + index as f64 * per_section,
        angle + (index + 1) as f64 * per_section,
    )
}

pub fn font_spec(size: f64, style: NumberStyle) -> String {
    match style {
        NumberStyle::Bold => format!("bold {}px Arial", size),
        NumberStyle::Regular => format!("{}px Arial", size),
    }
}

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasRenderer {
    pub fn new(ctx: CanvasRenderingContext2d, width: f64, height: f64) -> Self {
        Self { ctx, width, height }
    }

    fn draw_sections(&self, wheel: &WheelSnapshot, settings: &WheelSettings, cx: f64, cy: f64) {
        let ctx = &self.ctx;
        let radius = settings.wheel_size;
        let sections = wheel.labels.len();
        let colors = pastel_colors(sections, settings.darkness);
        let font = font_spec(settings.wheel_font_size, settings.number_style);

        for (i, label) in wheel.labels.iter().enumerate() {
            let (start, end) = section_arc(wheel.angle, i, sections);
            ctx.begin_path();
            ctx.move_to(cx, cy);
            let _ = ctx.arc(cx, cy, radius, start, end);
            let fill = match &wheel.highlight {
                Some(h) if h.section == i => h.color.as_str(),
                _ => colors[i].as_str(),
            };
            ctx.set_fill_style_str(fill);
            ctx.fill();
            ctx.set_stroke_style_str(&settings.border_color);
            ctx.set_line_width(settings.border_thickness);
            ctx.stroke();

            let text_angle = (start + end) / 2.0;
            let text = label.to_string();
            ctx.save();
            let _ = ctx.translate(
                cx + (radius - 30.0) * text_angle.cos(),
                cy + (radius - 30.0) * text_angle.sin(),
            );
            let _ = ctx.rotate(text_angle + PI / 2.0);
            ctx.set_fill_style_str(&settings.number_color);
            ctx.set_font(&font);
            let text_width = ctx.measure_text(&text).map(|m| m.width()).unwrap_or(0.0);
            let _ = ctx.fill_text(&text, -text_width / 2.0, 5.0);
            ctx.restore();
        }
    }

    fn draw_hub(&self, angle: f64, settings: &WheelSettings, cx: f64, cy: f64) {
        let ctx = &self.ctx;
        ctx.begin_path();
        let _ = ctx.arc(cx, cy, settings.center_circle_width / 2.0, 0.0, 2.0 * PI);
        ctx.set_fill_style_str(&settings.center_circle_color);
        ctx.fill();

        // Marker dot turning with the wheel.
        ctx.begin_path();
        let _ = ctx.arc(
            cx + settings.dot_offset * angle.cos(),
            cy + settings.dot_offset * angle.sin(),
            settings.dot_width / 2.0,
            0.0,
            2.0 * PI,
        );
        ctx.set_fill_style_str(&settings.dot_color);
        ctx.fill();
    }

    fn draw_pointer(&self, radius: f64, cx: f64, cy: f64) {
        let ctx = &self.ctx;
        let tip_y = cy + radius - 15.0;
        let base_y = cy + radius + 45.0;
        ctx.begin_path();
        ctx.move_to(cx - 30.0, base_y);
        ctx.line_to(cx + 30.0, base_y);
        ctx.line_to(cx, tip_y);
        ctx.set_fill_style_str("black");
        ctx.fill();

        let red_base_y = cy + radius - 3.0;
        ctx.begin_path();
        ctx.move_to(cx - 6.0, red_base_y);
        ctx.line_to(cx + 6.0, red_base_y);
        ctx.line_to(cx, tip_y);
        ctx.set_fill_style_str("red");
        ctx.fill();
    }
}

impl WheelRenderer for CanvasRenderer {
    fn draw_wheel(&self, wheel: &WheelSnapshot, settings: &WheelSettings) {
        let cx = self.width / 2.0;
        let cy = WHEEL_CENTER_Y;

        self.ctx.set_fill_style_str(&settings.bg_color);
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
        if wheel.labels.is_empty() {
            return;
        }

        self.draw_sections(wheel, settings, cx, cy);
        self.draw_hub(wheel.angle, settings, cx, cy);
        self.draw_pointer(settings.wheel_size, cx, cy);
    }
}
