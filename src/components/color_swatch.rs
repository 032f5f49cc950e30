use eframe::egui;
use crate::color::NamedColor;

/// A clickable palette entry
pub struct ColorSwatch<'a> {
    pub entry: &'a NamedColor,
    pub selected: bool,
}

impl<'a> ColorSwatch<'a> {
    pub fn new(entry: &'a NamedColor, selected: bool) -> Self {
        Self { entry, selected }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let (rect, response) = ui.allocate_exact_size(egui::vec2(24.0, 24.0), egui::Sense::click());

        if ui.is_rect_visible(rect) {
            ui.painter().rect_filled(rect, 3.0, egui::Color32::from(self.entry.color));

            let stroke = if self.selected {
                egui::Stroke::new(2.5, egui::Color32::from_rgb(33, 150, 243))
            } else if response.hovered() {
                egui::Stroke::new(1.5, egui::Color32::from_gray(160))
            } else {
                egui::Stroke::new(1.0, egui::Color32::from_gray(90))
            };
            ui.painter().rect_stroke(rect, 3.0, stroke);
        }

        response.on_hover_text(format!("{} {}", self.entry.name, self.entry.color))
    }
}
