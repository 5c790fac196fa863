//! Controls bar at the bottom of the screen.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::focus::{FocusPhase, TransitionDirection};
use crate::planetarium::Planetarium;

/// System that renders the pause control and the focus status.
pub fn time_controls_panel(mut contexts: EguiContexts, mut planetarium: ResMut<Planetarium>) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::TopBottomPanel::bottom("time_controls")
        .frame(
            egui::Frame::new()
                .fill(egui::Color32::from_rgba_unmultiplied(20, 20, 30, 220))
                .inner_margin(egui::Margin::symmetric(16, 8)),
        )
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                let paused = planetarium.clock().is_paused();
                let icon = if paused { "\u{25B6}" } else { "\u{23F8}" };
                if ui
                    .button(icon)
                    .on_hover_text(if paused { "Resume (Space)" } else { "Pause (Space)" })
                    .clicked()
                {
                    planetarium.toggle_pause();
                }

                ui.separator();

                ui.label(
                    egui::RichText::new(format!("t = {:.1} s", planetarium.clock().orbital_time()))
                        .monospace(),
                );

                ui.separator();

                let status = match planetarium.phase() {
                    FocusPhase::Overview => "Click a planet, or press 0-8",
                    FocusPhase::Transitioning(TransitionDirection::Forward) => "Focusing...",
                    FocusPhase::Detail => "Esc to return",
                    FocusPhase::Transitioning(TransitionDirection::Reverse) => "Returning...",
                };
                ui.label(egui::RichText::new(status).weak());
            });
        });
}
