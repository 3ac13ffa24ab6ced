//! Settings panel — active agent, webhook endpoints and session policies.

use egui::{self, RichText, Vec2};
use chat_types::config::{ChatConfig, StaleReplyPolicy, SubmitOrdering};
use crate::state::SaveFeedback;
use crate::theme::*;

/// What the caller should do after rendering the settings panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsAction {
    /// Nothing changed
    None,
    /// A field was changed (applied to the session, not yet saved)
    Changed,
    /// The user clicked the explicit Save button
    SaveClicked,
    /// Drop saved settings and go back to the built-in endpoints
    RestoreDefaults,
}

/// Render the settings panel. Returns an action for the caller to handle.
pub fn settings_panel(
    ui: &mut egui::Ui,
    config: &mut ChatConfig,
    save_feedback: Option<&SaveFeedback>,
) -> SettingsAction {
    let mut changed = false;
    let mut save_clicked = false;
    let mut restore_clicked = false;

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .inner_margin(PANEL_PADDING)
        .corner_radius(PANEL_ROUNDING)
        .show(ui, |ui| {
            ui.heading(RichText::new("Ajustes").color(TEXT_PRIMARY));
            ui.separator();

            // ── Agent Section ────────────────────────────────
            ui.label(RichText::new("Agente").color(ACCENT).strong());
            ui.add_space(2.0);

            let selected = config
                .agent(&config.default_agent)
                .map(|a| a.label.clone())
                .unwrap_or_else(|| config.default_agent.clone());
            let ids: Vec<(String, String)> = config
                .agents
                .iter()
                .map(|a| (a.id.clone(), a.label.clone()))
                .collect();
            egui::ComboBox::from_id_salt("active_agent")
                .selected_text(selected)
                .show_ui(ui, |ui| {
                    for (id, label) in ids {
                        if ui
                            .selectable_value(&mut config.default_agent, id, label)
                            .changed()
                        {
                            changed = true;
                        }
                    }
                });

            ui.add_space(8.0);

            // ── Endpoints Section ────────────────────────────
            ui.label(RichText::new("Webhooks").color(ACCENT).strong());
            ui.add_space(2.0);

            for agent in config.agents.iter_mut() {
                ui.label(RichText::new(&agent.id).color(TEXT_SECONDARY).small());
                ui.horizontal(|ui| {
                    if ui
                        .add(egui::TextEdit::singleline(&mut agent.label).desired_width(80.0))
                        .changed()
                    {
                        changed = true;
                    }
                    if ui
                        .add(egui::TextEdit::singleline(&mut agent.url).hint_text("https://..."))
                        .changed()
                    {
                        changed = true;
                    }
                });
            }

            ui.add_space(12.0);
            ui.separator();
            ui.add_space(4.0);

            // ── Session Section ──────────────────────────────
            ui.label(RichText::new("Conversación").color(ACCENT).strong());
            ui.add_space(2.0);

            ui.label(RichText::new("Respuestas tras reiniciar").color(TEXT_SECONDARY).small());
            egui::ComboBox::from_id_salt("stale_replies")
                .selected_text(config.stale_replies.label())
                .show_ui(ui, |ui| {
                    for policy in StaleReplyPolicy::all() {
                        if ui
                            .selectable_value(&mut config.stale_replies, *policy, policy.label())
                            .changed()
                        {
                            changed = true;
                        }
                    }
                });

            ui.label(RichText::new("Orden de respuestas").color(TEXT_SECONDARY).small());
            egui::ComboBox::from_id_salt("submit_ordering")
                .selected_text(config.ordering.label())
                .show_ui(ui, |ui| {
                    for ordering in SubmitOrdering::all() {
                        if ui
                            .selectable_value(&mut config.ordering, *ordering, ordering.label())
                            .changed()
                        {
                            changed = true;
                        }
                    }
                });

            ui.label(RichText::new("Duración de avisos (s)").color(TEXT_SECONDARY).small());
            if ui
                .add(egui::Slider::new(&mut config.toast_seconds, 1.0..=15.0))
                .changed()
            {
                changed = true;
            }

            // ── Save Button ──────────────────────────────────
            ui.add_space(16.0);
            ui.separator();
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let btn = ui.add(
                    egui::Button::new(
                        RichText::new("Guardar")
                            .color(TEXT_PRIMARY)
                            .strong(),
                    )
                    .fill(ACCENT)
                    .corner_radius(PANEL_ROUNDING)
                    .min_size(Vec2::new(120.0, 28.0)),
                );
                if btn.clicked() {
                    save_clicked = true;
                }
                if ui
                    .button(RichText::new("Restaurar").color(TEXT_SECONDARY))
                    .on_hover_text("Volver a los webhooks por defecto")
                    .clicked()
                {
                    restore_clicked = true;
                }

                if let Some(fb) = save_feedback {
                    let color = if fb.success { SUCCESS } else { ERROR };
                    ui.label(RichText::new(&fb.message).color(color).small());
                }
            });
        });

    if restore_clicked {
        SettingsAction::RestoreDefaults
    } else if save_clicked {
        SettingsAction::SaveClicked
    } else if changed {
        SettingsAction::Changed
    } else {
        SettingsAction::None
    }
}
