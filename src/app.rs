use std::sync::Arc;

use eframe::egui;

use crate::config::Config;
use crate::state::{FormState, StateEvent, UiState};
use crate::submission::{HttpEndpoint, SubmissionController};
use crate::ui::components::render_about_dialog;
use crate::ui::render_contact_form;
use crate::ui::theme::ThemePreset;

/// Main application state
pub struct ContactApp {
    /// Application configuration
    pub config: Config,
    /// Theme and dialog state
    pub ui: UiState,
    /// The contact form and its submission
    pub form: FormState,
    /// Status message for the status bar
    pub status_message: String,
    /// Where submissions are posted, for display
    endpoint_url: String,
}

impl ContactApp {
    /// Create a new application instance
    pub fn new(_cc: &eframe::CreationContext<'_>, config: Config, endpoint: HttpEndpoint) -> Self {
        let endpoint_url = endpoint.url().to_string();
        let controller = Arc::new(SubmissionController::new(endpoint));
        let ui = UiState::new(config.appearance.theme.theme());

        Self {
            config,
            ui,
            form: FormState::new(controller),
            status_message: "Ready".to_string(),
            endpoint_url,
        }
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    /// Apply events reported by state poll methods
    pub fn handle_events(&mut self, events: Vec<StateEvent>) {
        for event in events {
            match event {
                StateEvent::StatusMessage(message) => self.status_message = message,
                StateEvent::LogError(message) => tracing::error!("{}", message),
                StateEvent::LogInfo(message) => tracing::info!("{}", message),
            }
        }
    }

    /// Switch theme and remember the choice
    fn set_theme(&mut self, preset: ThemePreset) {
        if self.config.appearance.theme == preset {
            return;
        }
        self.config.appearance.theme = preset;
        self.ui.current_theme = preset.theme();
        self.ui.theme_dirty = true;
        self.save_config();
    }

    /// Save configuration to disk
    fn save_config(&self) {
        if let Err(e) = self.config.save() {
            tracing::error!("Failed to save config: {}", e);
        }
    }
}

impl eframe::App for ContactApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.ui.theme_dirty {
            self.ui.current_theme.apply(ctx);
            self.ui.theme_dirty = false;
        }

        // Poll async tasks
        let events = self.form.poll(ctx);
        self.handle_events(events);

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("View", |ui| {
                    for &preset in ThemePreset::all() {
                        let selected = self.config.appearance.theme == preset;
                        if ui.radio(selected, preset.name()).clicked() {
                            self.set_theme(preset);
                            ui.close();
                        }
                    }
                });
                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        self.ui.show_about_dialog = true;
                        ui.close();
                    }
                });
            });
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.status_message);
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("contact_scroll")
                .show(ui, |ui| {
                    render_contact_form(self, ui);
                });
        });

        render_about_dialog(self, ctx);
    }
}
