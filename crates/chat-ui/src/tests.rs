#[cfg(test)]
mod tests {
    use crate::state::*;
    use crate::toasts::*;
    use chat_core::ports::NotifierPort;
    use chat_core::session::SessionSnapshot;
    use chat_types::event::ChatEvent;
    use chat_types::message::Message;
    use chat_types::notification::{Notification, Severity};

    // ─── UiState Tests ───────────────────────────────────────

    #[test]
    fn test_ui_state_initial() {
        let state = UiState::new();
        assert!(state.snapshot.messages.is_empty());
        assert!(state.input_text.is_empty());
        assert!(!state.show_settings);
        assert_eq!(state.status_text, "Listo");
        assert!(!state.is_busy());
        assert!(state.save_feedback.is_none());
    }

    #[test]
    fn test_ui_state_sync_snapshot() {
        let mut state = UiState::new();
        state.sync(SessionSnapshot {
            messages: vec![Message::user("Hola")],
            pending: true,
        });
        assert_eq!(state.snapshot.messages.len(), 1);
        assert!(state.is_busy());
    }

    #[test]
    fn test_ui_state_request_lifecycle() {
        let mut state = UiState::new();
        state.process_events(vec![ChatEvent::RequestStarted {
            message_id: "m1".to_string(),
            agent: "salud".to_string(),
        }]);
        assert_eq!(state.status_text, "Esperando a salud...");

        state.process_events(vec![ChatEvent::RequestSettled {
            message_id: "m1".to_string(),
        }]);
        assert_eq!(state.status_text, "Listo");
    }

    #[test]
    fn test_ui_state_failure_and_reset() {
        let mut state = UiState::new();
        state.process_events(vec![ChatEvent::Failed {
            message: "HTTP error! status: 500".to_string(),
        }]);
        assert_eq!(state.status_text, "Error: HTTP error! status: 500");

        state.process_events(vec![ChatEvent::SessionStarted {
            conversation_id: "c".to_string(),
        }]);
        assert_eq!(state.status_text, "Nueva conversación");
    }

    #[test]
    fn test_ui_state_take_input() {
        let mut state = UiState::new();
        state.input_text = "   ".to_string();
        assert_eq!(state.take_input(), None);
        assert_eq!(state.input_text, "   ");

        state.input_text = "  Hola \n".to_string();
        assert_eq!(state.take_input(), Some("Hola".to_string()));
        assert!(state.input_text.is_empty());
    }

    // ─── Toasts Tests ────────────────────────────────────────

    #[test]
    fn test_toasts_notify_and_expire() {
        let toasts = Toasts::new();
        toasts.notify(Notification::error("Error", "boom"));
        assert_eq!(toasts.active().len(), 1);

        toasts.expire(10.0, 4.0);
        assert_eq!(toasts.active().len(), 1);
        toasts.expire(13.9, 4.0);
        assert_eq!(toasts.active().len(), 1);
        toasts.expire(14.0, 4.0);
        assert!(toasts.is_empty());
    }

    #[test]
    fn test_toasts_clock_starts_when_shown() {
        let toasts = Toasts::new();
        toasts.notify(Notification::error("Error", "first"));
        toasts.expire(0.0, 4.0);
        toasts.notify(Notification::error("Error", "second"));
        toasts.expire(3.0, 4.0);
        toasts.expire(5.0, 4.0);

        let active = toasts.active();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].description, "second");
    }

    #[test]
    fn test_toasts_capped_and_dismissable() {
        let toasts = Toasts::new();
        for i in 0..8 {
            toasts.notify(Notification::error("Error", format!("n{}", i)));
        }
        let active = toasts.active();
        assert_eq!(active.len(), 5);
        assert_eq!(active[0].description, "n3");

        toasts.dismiss(0);
        assert_eq!(toasts.active()[0].description, "n4");
    }

    #[test]
    fn test_toasts_clone_shares_queue() {
        let toasts = Toasts::new();
        let notifier: &dyn NotifierPort = &toasts.clone();
        notifier.notify(Notification::info("Info", "hola"));
        assert_eq!(toasts.active()[0].severity, Severity::Info);
    }

    #[test]
    fn test_severity_colors_distinct() {
        assert_ne!(severity_color(Severity::Error), severity_color(Severity::Info));
        assert_eq!(severity_color(Severity::Error), crate::theme::ERROR);
    }
}
