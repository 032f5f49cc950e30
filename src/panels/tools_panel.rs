use crate::PixelArtApp;
use crate::components::{ColorSwatch, ToolButton};
use crate::tool::Tool;

pub fn tools_panel(app: &mut PixelArtApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            let active_tool = app.editor.tool();
            ui.horizontal(|ui| {
                for tool in Tool::ALL {
                    if ToolButton::new(tool, tool == active_tool).show(ui).clicked() {
                        log::info!("Tool selected from UI: {}", tool.name());
                        app.editor.select_tool(tool);
                    }
                }
            });
            ui.separator();

            ui.heading("Colors");
            let current = app.editor.color();
            let mut picked = None;
            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing = egui::vec2(4.0, 4.0);
                for entry in &app.editor.config().palette {
                    if ColorSwatch::new(entry, entry.color == current).show(ui).clicked() {
                        picked = Some(entry.color);
                    }
                }
            });

            ui.horizontal(|ui| {
                ui.label("Custom:");
                if egui::color_picker::color_edit_button_srgba(
                    ui,
                    &mut app.custom_color,
                    egui::color_picker::Alpha::Opaque,
                )
                .changed()
                {
                    picked = Some(app.custom_color.into());
                }
                ui.monospace(current.to_hex());
            });

            if let Some(color) = picked {
                app.editor.select_color(color);
            }
            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Clear").clicked() {
                    app.editor.clear_canvas();
                }
                if ui.button("Export JPEG").clicked() {
                    app.editor.request_export();
                }
            });

            let mut show_grid_lines = app.renderer.show_grid_lines();
            if ui.checkbox(&mut show_grid_lines, "Grid lines").changed() {
                app.renderer.set_show_grid_lines(show_grid_lines);
            }

            let in_flight = app.editor.exports_in_flight();
            if in_flight > 0 {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(format!("Exporting ({})", in_flight));
                });
            }
            if let Some(status) = &app.status {
                ui.label(status.as_str());
            }

            ui.separator();
            ui.small(format!(
                "{}x{} grid, fill: {}, state: {}",
                app.editor.grid().dimension(),
                app.editor.grid().dimension(),
                app.editor.fill_mode().name(),
                app.editor.state().name()
            ));
        });
}
