//! Contact form rendering

use eframe::egui::{self, RichText, Vec2};

use crate::app::ContactApp;
use crate::submission::{ContactField, SubmissionPhase};
use crate::ui::components::render_banner;

/// Visible rows of the message box
const MESSAGE_ROWS: usize = 20;

const SUCCESS_TEXT: &str = "Thank you! Your message has been sent.";

/// Render the form, or the success view once the message went out
pub fn render_contact_form(app: &mut ContactApp, ui: &mut egui::Ui) {
    let theme = app.ui.current_theme.clone();
    let submission = app.form.submission.clone();

    ui.label(
        RichText::new("Contact me")
            .size(28.0)
            .strong()
            .color(theme.text_primary),
    );
    ui.add_space(16.0);

    match submission.phase() {
        SubmissionPhase::Succeeded => {
            render_banner(ui, &theme, SUCCESS_TEXT, theme.success);
            return;
        }
        SubmissionPhase::Failed => {
            if let Some(message) = submission.error_message() {
                render_banner(ui, &theme, message, theme.error);
                ui.add_space(12.0);
            }
        }
        SubmissionPhase::Idle | SubmissionPhase::Sending => {}
    }

    for &field in ContactField::all() {
        ui.label(RichText::new(field.label()).color(theme.text_muted));

        let value = app.form.fields.get_mut(field);
        let input = match field {
            ContactField::Message => egui::TextEdit::multiline(value).desired_rows(MESSAGE_ROWS),
            ContactField::Email => egui::TextEdit::singleline(value).hint_text("you@example.com"),
            ContactField::Name | ContactField::Subject => egui::TextEdit::singleline(value),
        };
        ui.add(input.desired_width(f32::INFINITY));
        ui.add_space(10.0);
    }

    let sending = app.form.is_sending();
    let label = if sending { "Sending..." } else { "Submit" };
    let button = egui::Button::new(RichText::new(label).strong())
        .fill(theme.accent)
        .min_size(Vec2::new(120.0, 34.0));

    let mut response = ui.add_enabled(app.form.can_submit(), button);
    if !sending {
        if let Some(problem) = app.form.fields.first_problem() {
            response = response.on_disabled_hover_text(problem.hint());
        }
    }

    if response.clicked() {
        if let Some(event) = app.form.start() {
            app.handle_events(vec![event]);
        }
    }
}
