//! Shared UI components

use eframe::egui::{self, Color32, CornerRadius, Margin, RichText, Stroke};

use crate::app::ContactApp;
use crate::ui::theme::Theme;

/// Render a full-width message region tinted with `color`
pub fn render_banner(ui: &mut egui::Ui, theme: &Theme, text: &str, color: Color32) {
    egui::Frame::new()
        .fill(theme.bg_banner)
        .stroke(Stroke::new(1.0, color))
        .corner_radius(CornerRadius::same(6))
        .inner_margin(Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(text).color(color));
        });
}

/// Render the About dialog
pub fn render_about_dialog(app: &mut ContactApp, ctx: &egui::Context) {
    if !app.ui.show_about_dialog {
        return;
    }

    let theme = app.ui.current_theme.clone();

    egui::Window::new("About Contact Me")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([280.0, 200.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(8.0);

                ui.label(
                    RichText::new("Contact Me")
                        .size(22.0)
                        .strong()
                        .color(theme.accent),
                );
                ui.label(
                    RichText::new(format!("Version {}", env!("CARGO_PKG_VERSION")))
                        .color(theme.text_muted),
                );

                ui.add_space(12.0);

                ui.label(RichText::new("Messages are sent to").color(theme.text_muted));
                ui.label(RichText::new(app.endpoint_url()).color(theme.text_primary));

                ui.add_space(12.0);

                if ui.button("Close").clicked() {
                    app.ui.show_about_dialog = false;
                }

                ui.add_space(8.0);
            });
        });
}
