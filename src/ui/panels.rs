use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar – heading and year input
// ---------------------------------------------------------------------------

/// Render the heading and the year filter.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(RichText::new("SOCIAL MEDIA USAGE").strong());
    });
    ui.add_space(4.0);

    ui.horizontal(|ui: &mut Ui| {
        ui.label("Enter Year:");
        let response = ui.add(
            egui::TextEdit::singleline(&mut state.year_input)
                .hint_text("Enter year")
                .desired_width(120.0),
        );
        // Applied on Enter or when the field loses focus, not per keystroke.
        if response.lost_focus() {
            state.commit_year_input();
        }

        if ui.small_button("Clear").clicked() {
            state.clear_year();
        }

        ui.separator();

        ui.label(format!(
            "{}: {} posts loaded, {} shown",
            state.source,
            state.dataset().len(),
            state.visible_count()
        ));

        let years = state.dataset().years();
        if let (Some(first), Some(last)) = (years.first(), years.last()) {
            ui.separator();
            ui.label(RichText::new(format!("years {first}–{last}")).weak());
        }

        if state.charts.is_placeholder() && state.year.is_some() {
            ui.separator();
            ui.label(RichText::new("no posts for this year").weak());
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::YELLOW));
        }
    });
    ui.add_space(4.0);
}
