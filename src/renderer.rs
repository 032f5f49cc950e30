// src/renderer.rs
use eframe::egui::{self, Color32, ColorImage, TextureHandle, TextureOptions};

use crate::surface::Surface;

/// Draws the render surface into the central panel.
///
/// The surface is uploaded to a GPU texture only when its version changes.
/// Nearest sampling keeps cells crisp at any zoom.
pub struct Renderer {
    texture: Option<TextureHandle>,
    uploaded_version: Option<u64>,
    show_grid_lines: bool,
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("has_texture", &self.texture.is_some())
            .field("uploaded_version", &self.uploaded_version)
            .field("show_grid_lines", &self.show_grid_lines)
            .finish()
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            texture: None,
            uploaded_version: None,
            show_grid_lines: true,
        }
    }

    pub fn show_grid_lines(&self) -> bool {
        self.show_grid_lines
    }

    pub fn set_show_grid_lines(&mut self, show: bool) {
        self.show_grid_lines = show;
    }

    /// Re-uploads the surface if it changed since the last upload
    fn sync_texture(&mut self, ctx: &egui::Context, surface: &Surface) -> egui::TextureId {
        let version = surface.version();
        let uploaded = &mut self.uploaded_version;
        let texture = self.texture.get_or_insert_with(|| {
            *uploaded = Some(version);
            ctx.load_texture("pixel_surface", to_color_image(surface), TextureOptions::NEAREST)
        });

        if *uploaded != Some(version) {
            texture.set(to_color_image(surface), TextureOptions::NEAREST);
            *uploaded = Some(version);
        }
        texture.id()
    }

    /// Renders the surface stretched over `rect`
    ///
    /// Args:
    ///     ctx (egui::Context): The egui context for the current frame
    ///     painter (egui::Painter): The painter to draw with
    ///     rect (egui::Rect): The square the canvas occupies on screen
    ///     surface (Surface): The raster to show
    ///     dimension (usize): Number of cells per side, for the grid overlay
    pub fn render(
        &mut self,
        ctx: &egui::Context,
        painter: &egui::Painter,
        rect: egui::Rect,
        surface: &Surface,
        dimension: usize,
    ) {
        let texture_id = self.sync_texture(ctx, surface);
        let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
        painter.image(texture_id, rect, uv, Color32::WHITE);

        if self.show_grid_lines && dimension > 0 {
            let stroke = egui::Stroke::new(1.0, Color32::from_black_alpha(24));
            let step = rect.width() / dimension as f32;
            for i in 1..dimension {
                let offset = i as f32 * step;
                painter.line_segment(
                    [
                        egui::pos2(rect.min.x + offset, rect.min.y),
                        egui::pos2(rect.min.x + offset, rect.max.y),
                    ],
                    stroke,
                );
                painter.line_segment(
                    [
                        egui::pos2(rect.min.x, rect.min.y + offset),
                        egui::pos2(rect.max.x, rect.min.y + offset),
                    ],
                    stroke,
                );
            }
        }

        painter.rect_stroke(rect, 0.0, egui::Stroke::new(1.0, Color32::from_gray(120)));
    }
}

/// Converts the surface raster into an egui image
pub fn to_color_image(surface: &Surface) -> ColorImage {
    let size = [surface.width() as usize, surface.height() as usize];
    ColorImage::from_rgb(size, surface.image().as_raw())
}
