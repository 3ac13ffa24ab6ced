//! Chat panel — conversation log, typing indicator and input field.

use egui::{self, Align, Layout, RichText, ScrollArea, Vec2};
use chat_types::message::{Message, Role};
use crate::state::{ChatIntent, UiState};
use crate::theme::*;

/// Render the chat panel. Returns the user's intent, if any, this frame.
pub fn chat_panel(ui: &mut egui::Ui, state: &mut UiState) -> Option<ChatIntent> {
    let mut intent = None;

    egui::Frame::default()
        .fill(BG_PRIMARY)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                // Header
                ui.horizontal(|ui| {
                    ui.heading(
                        RichText::new(&state.agent_label)
                            .color(TEXT_PRIMARY)
                            .strong(),
                    );
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if ui
                            .button(RichText::new("Nueva conversación").color(TEXT_PRIMARY))
                            .clicked()
                        {
                            intent = Some(ChatIntent::Reset);
                        }
                        let status_color = if state.is_busy() { WARNING } else { SUCCESS };
                        ui.label(
                            RichText::new(&state.status_text)
                                .color(status_color)
                                .small(),
                        );
                    });
                });

                ui.separator();

                // Messages area
                let available_height = ui.available_height() - 60.0;
                ScrollArea::vertical()
                    .max_height(available_height)
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        if state.snapshot.messages.is_empty() {
                            ui.add_space(24.0);
                            ui.vertical_centered(|ui| {
                                ui.label(
                                    RichText::new("Escribe un mensaje para empezar")
                                        .color(TEXT_SECONDARY),
                                );
                            });
                        }

                        for message in &state.snapshot.messages {
                            render_message(ui, message);
                            ui.add_space(4.0);
                        }

                        if state.is_busy() {
                            typing_indicator(ui);
                        }
                    });

                ui.add_space(8.0);

                // Input area
                ui.horizontal(|ui| {
                    let busy = state.is_busy();
                    let input = egui::TextEdit::singleline(&mut state.input_text)
                        .hint_text("Escribe tu mensaje...")
                        .desired_width(ui.available_width() - 80.0)
                        .font(egui::FontId::proportional(14.0));

                    let response = ui.add_enabled(!busy, input);

                    let send_enabled = !state.input_text.trim().is_empty() && !busy;
                    let send_btn = ui.add_enabled(
                        send_enabled,
                        egui::Button::new(
                            RichText::new("Enviar").color(TEXT_PRIMARY),
                        )
                        .fill(if send_enabled { ACCENT } else { BG_SURFACE })
                        .corner_radius(PANEL_ROUNDING)
                        .min_size(Vec2::new(70.0, 0.0)),
                    );

                    // Submit on Enter or button click
                    let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    if send_enabled && (enter || send_btn.clicked()) {
                        if let Some(text) = state.take_input() {
                            intent = Some(ChatIntent::Submit(text));
                        }
                        response.request_focus();
                    }
                });
            });
        });

    intent
}

fn render_message(ui: &mut egui::Ui, message: &Message) {
    let (align, bg) = match message.role() {
        Role::User => (Align::Max, USER_BUBBLE),
        Role::Agent => (Align::Min, AGENT_BUBBLE),
    };
    let max_width = ui.available_width() * BUBBLE_MAX_WIDTH;

    ui.with_layout(Layout::top_down(align), |ui| {
        egui::Frame::default()
            .fill(bg)
            .corner_radius(BUBBLE_ROUNDING)
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.set_max_width(max_width);
                ui.label(
                    RichText::new(message.role().label())
                        .color(TEXT_SECONDARY)
                        .strong()
                        .small(),
                );
                ui.label(RichText::new(message.content()).color(TEXT_PRIMARY));
            });
    });
}

fn typing_indicator(ui: &mut egui::Ui) {
    let time = ui.input(|i| i.time);
    let dots = ".".repeat((time * 3.0) as usize % 3 + 1);
    egui::Frame::default()
        .fill(AGENT_BUBBLE)
        .corner_radius(BUBBLE_ROUNDING)
        .inner_margin(10.0)
        .show(ui, |ui| {
            ui.label(
                RichText::new(format!("Escribiendo{}", dots))
                    .color(ACCENT)
                    .italics(),
            );
        });
    ui.ctx().request_repaint();
}
