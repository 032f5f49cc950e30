use crate::PixelArtApp;
use crate::input::CellResolver;

pub fn central_panel(app: &mut PixelArtApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        // Largest square that fits, so cells stay square
        let available = ui.available_size();
        let side = available.x.min(available.y).max(0.0);
        let (response, painter) = ui.allocate_painter(egui::vec2(side, side), egui::Sense::click_and_drag());
        let canvas_rect = response.rect;

        let dimension = app.editor.grid().dimension();
        let resolver = CellResolver::new(canvas_rect, dimension);
        for event in app.input.process_input(&response, &resolver) {
            if let Err(err) = app.editor.handle_pointer(event) {
                log::warn!("Ignoring pointer event {:?}: {}", event, err);
            }
        }

        app.renderer.render(ctx, &painter, canvas_rect, app.editor.surface(), dimension);

        // Outline the cell the next stroke would touch
        if let Some(cell) = response.hover_pos().and_then(|pos| resolver.resolve(pos)) {
            ctx.set_cursor_icon(egui::CursorIcon::Crosshair);
            painter.rect_stroke(
                resolver.cell_rect(cell),
                0.0,
                egui::Stroke::new(1.0, egui::Color32::from_gray(96)),
            );
        }
    });
}
