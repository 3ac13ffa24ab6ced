//! Main egui application — composes the panels and owns the conversation.

use std::cell::RefCell;
use std::rc::Rc;

use egui::{self, CentralPanel, RichText, SidePanel, TopBottomPanel};

use chat_core::event_bus::EventBus;
use chat_core::ports::WebhookPort;
use chat_core::session::ConversationSession;
use chat_platform::settings::SettingsStore;
use chat_platform::storage::auto_detect_storage;
use chat_platform::webhook::GlooWebhookClient;
use chat_core::ports::NotifierPort;
use chat_types::config::ChatConfig;
use chat_types::notification::Notification;
use chat_ui::panels::{chat, settings};
use chat_ui::panels::settings::SettingsAction;
use chat_ui::state::{ChatIntent, SaveFeedback, UiState};
use chat_ui::theme;
use chat_ui::toasts::{self, Toasts};

/// The main application state
pub struct ChatApp {
    ui_state: UiState,
    /// Working copy edited by the settings panel
    config: ChatConfig,
    event_bus: EventBus,
    session: ConversationSession,
    webhook: Rc<dyn WebhookPort>,
    toasts: Toasts,
    settings_store: Rc<RefCell<Option<SettingsStore>>>,
    restored_config: Rc<RefCell<Option<ChatConfig>>>,
    save_feedback: Rc<RefCell<Option<SaveFeedback>>>,
    first_frame: bool,
}

impl ChatApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = ChatConfig::default();
        let event_bus = EventBus::new();
        let session = ConversationSession::new(config.clone(), event_bus.clone());
        // mount starts the conversation
        session.initialize();

        let app = Self {
            ui_state: UiState::new(),
            config,
            event_bus,
            session,
            webhook: Rc::new(GlooWebhookClient::new()),
            toasts: Toasts::new(),
            settings_store: Rc::new(RefCell::new(None)),
            restored_config: Rc::new(RefCell::new(None)),
            save_feedback: Rc::new(RefCell::new(None)),
            first_frame: true,
        };

        Self::restore_settings(
            app.settings_store.clone(),
            app.restored_config.clone(),
            cc.egui_ctx.clone(),
        );

        app
    }

    /// Open storage and restore saved settings (async)
    fn restore_settings(
        store_slot: Rc<RefCell<Option<SettingsStore>>>,
        config_slot: Rc<RefCell<Option<ChatConfig>>>,
        ctx: egui::Context,
    ) {
        wasm_bindgen_futures::spawn_local(async move {
            let store = SettingsStore::new(auto_detect_storage().await);
            match store.load().await {
                Ok(Some(config)) => match config.validate() {
                    Ok(()) => {
                        log::info!("Settings restored from {}", store.backend_name());
                        *config_slot.borrow_mut() = Some(config);
                    }
                    Err(e) => log::warn!("Ignoring saved settings: {}", e),
                },
                Ok(None) => log::info!("No saved settings, using defaults"),
                Err(e) => log::warn!("Failed to load settings: {}", e),
            }
            *store_slot.borrow_mut() = Some(store);
            ctx.request_repaint();
        });
    }

    /// Save settings to storage (async, fire-and-forget)
    fn save_settings(&self, ctx: &egui::Context) {
        let Some(store) = self.settings_store.borrow().clone() else {
            *self.save_feedback.borrow_mut() = Some(SaveFeedback {
                message: "Almacenamiento no disponible todavía".to_string(),
                success: false,
            });
            return;
        };
        let config = self.config.clone();
        let feedback = self.save_feedback.clone();
        let ctx = ctx.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let result = store.save(&config).await;
            *feedback.borrow_mut() = Some(match result {
                Ok(()) => SaveFeedback {
                    message: "Guardado".to_string(),
                    success: true,
                },
                Err(e) => {
                    log::warn!("Failed to save settings: {}", e);
                    SaveFeedback {
                        message: e.to_string(),
                        success: false,
                    }
                }
            });
            ctx.request_repaint();
        });
    }

    /// Forget saved settings and fall back to the built-in config
    fn restore_defaults(&mut self, ctx: &egui::Context) {
        self.config = ChatConfig::default();
        self.apply_config();
        *self.save_feedback.borrow_mut() = None;

        let Some(store) = self.settings_store.borrow().clone() else {
            return;
        };
        let toasts = self.toasts.clone();
        let ctx = ctx.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match store.clear().await {
                Ok(()) => toasts.notify(Notification::info(
                    "Ajustes",
                    "Se restauraron los valores por defecto",
                )),
                Err(e) => {
                    log::warn!("Failed to clear settings: {}", e);
                    toasts.notify(Notification::error("Error", e.to_string()));
                }
            }
            ctx.request_repaint();
        });
    }

    /// Push the working config into the session
    fn apply_config(&mut self) {
        self.session.set_config(self.config.clone());
        if let Err(e) = self.session.set_agent(&self.config.default_agent) {
            log::warn!("Active agent unchanged: {}", e);
        }
    }

    fn agent_label(&self) -> String {
        let agent = self.session.agent();
        self.config
            .agent(&agent)
            .map(|a| a.label.clone())
            .unwrap_or(agent)
    }
}

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        let restored = self.restored_config.borrow_mut().take();
        if let Some(config) = restored {
            self.config = config;
            self.apply_config();
        }

        // Drain events from the session
        let events = self.event_bus.drain();
        if !events.is_empty() {
            self.ui_state.process_events(events);
            ctx.request_repaint();
        }
        self.ui_state.sync(self.session.current_state());
        self.ui_state.agent_label = self.agent_label();
        self.ui_state.save_feedback = self.save_feedback.borrow().clone();

        // ── Top bar ──────────────────────────────────────────
        TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("Asistente")
                        .strong()
                        .color(theme::ACCENT)
                        .size(16.0),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .selectable_label(self.ui_state.show_settings, "Ajustes")
                        .clicked()
                    {
                        self.ui_state.show_settings = !self.ui_state.show_settings;
                    }
                });
            });
        });

        // ── Settings side panel ──────────────────────────────
        if self.ui_state.show_settings {
            let mut action = SettingsAction::None;
            SidePanel::right("settings_panel")
                .min_width(300.0)
                .max_width(380.0)
                .show(ctx, |ui| {
                    action = settings::settings_panel(
                        ui,
                        &mut self.config,
                        self.ui_state.save_feedback.as_ref(),
                    );
                });

            match action {
                SettingsAction::None => {}
                SettingsAction::Changed => {
                    if self.config.validate().is_ok() {
                        self.apply_config();
                    }
                }
                SettingsAction::SaveClicked => match self.config.validate() {
                    Ok(()) => {
                        self.apply_config();
                        self.save_settings(ctx);
                    }
                    Err(e) => {
                        *self.save_feedback.borrow_mut() = Some(SaveFeedback {
                            message: e.to_string(),
                            success: false,
                        });
                    }
                },
                SettingsAction::RestoreDefaults => self.restore_defaults(ctx),
            }
        }

        // ── Chat ─────────────────────────────────────────────
        CentralPanel::default().show(ctx, |ui| {
            match chat::chat_panel(ui, &mut self.ui_state) {
                Some(ChatIntent::Submit(text)) => self.dispatch_message(text, ctx),
                Some(ChatIntent::Reset) => self.session.reset(),
                None => {}
            }
        });

        toasts::toasts_overlay(ctx, &self.toasts, self.config.toast_seconds);
    }
}

impl ChatApp {
    /// Submit a user message to the session (async)
    fn dispatch_message(&self, text: String, ctx: &egui::Context) {
        let session = self.session.clone();
        let webhook = self.webhook.clone();
        let toasts = self.toasts.clone();
        let repaint = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            session.submit(&text, webhook.as_ref(), &toasts).await;
            repaint.request_repaint();
        });
        ctx.request_repaint();
    }
}
