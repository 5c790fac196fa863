//! Info panel showing the selected body's description.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::planetarium::Planetarium;

use super::InfoOverlay;

/// System that renders the info panel while a selection is shown.
pub fn info_panel(
    mut contexts: EguiContexts,
    overlay: Res<InfoOverlay>,
    mut planetarium: ResMut<Planetarium>,
) {
    let Some(payload) = overlay.payload.as_ref() else {
        return;
    };
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let panel_frame = egui::Frame::new()
        .fill(egui::Color32::from_rgba_unmultiplied(20, 20, 30, 220))
        .corner_radius(6)
        .inner_margin(egui::Margin::same(12));

    egui::Window::new("info_panel")
        .title_bar(false)
        .resizable(false)
        .anchor(egui::Align2::RIGHT_TOP, [-16.0, 16.0])
        .default_width(260.0)
        .frame(panel_frame)
        .show(ctx, |ui| {
            ui.heading(&payload.name);
            ui.add_space(4.0);
            ui.label(&payload.description);
            ui.separator();

            egui::Grid::new("info_facts")
                .num_columns(2)
                .spacing([12.0, 4.0])
                .show(ui, |ui| {
                    for (label, value) in [
                        ("Diameter", &payload.diameter),
                        ("Distance from Sun", &payload.distance_from_sun),
                        ("Orbital period", &payload.orbital_period),
                        ("Day length", &payload.day_length),
                    ] {
                        ui.label(egui::RichText::new(label).weak());
                        ui.label(value);
                        ui.end_row();
                    }
                });

            ui.add_space(8.0);
            let detail = planetarium.phase() == crate::focus::FocusPhase::Detail;
            if ui
                .add_enabled(detail, egui::Button::new("Return to overview"))
                .on_hover_text("Esc")
                .clicked()
            {
                planetarium.return_to_overview();
            }
        });
}
