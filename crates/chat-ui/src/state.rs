//! UI-level state that drives rendering.
//! The message log itself lives in the session; this holds the last
//! snapshot of it plus purely visual state, updated each frame.

use chat_core::session::SessionSnapshot;
use chat_types::event::ChatEvent;

/// What the user asked for in the chat panel this frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatIntent {
    Submit(String),
    Reset,
}

/// Save feedback passed in from the app layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveFeedback {
    pub message: String,
    pub success: bool,
}

/// State visible to UI panels
pub struct UiState {
    /// Last session snapshot (messages + pending flag)
    pub snapshot: SessionSnapshot,
    /// Label of the agent answering this conversation
    pub agent_label: String,
    /// Input field content
    pub input_text: String,
    /// Whether settings panel is open
    pub show_settings: bool,
    /// Status line text
    pub status_text: String,
    pub save_feedback: Option<SaveFeedback>,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            snapshot: SessionSnapshot {
                messages: Vec::new(),
                pending: false,
            },
            agent_label: String::new(),
            input_text: String::new(),
            show_settings: false,
            status_text: "Listo".to_string(),
            save_feedback: None,
        }
    }

    /// Process events from the EventBus and update the status line
    pub fn process_events(&mut self, events: Vec<ChatEvent>) {
        for event in events {
            match event {
                ChatEvent::SessionStarted { .. } => {
                    self.status_text = "Nueva conversación".to_string();
                }
                ChatEvent::MessageAppended { .. } => {}
                ChatEvent::RequestStarted { agent, .. } => {
                    self.status_text = format!("Esperando a {}...", agent);
                }
                ChatEvent::RequestSettled { .. } => {
                    self.status_text = "Listo".to_string();
                }
                ChatEvent::StaleReplyDiscarded { .. } => {
                    self.status_text = "Respuesta anterior descartada".to_string();
                }
                ChatEvent::Failed { message } => {
                    self.status_text = format!("Error: {}", message);
                }
            }
        }
    }

    /// Replace the rendered log with the session's current state
    pub fn sync(&mut self, snapshot: SessionSnapshot) {
        self.snapshot = snapshot;
    }

    pub fn is_busy(&self) -> bool {
        self.snapshot.pending
    }

    /// Take the trimmed input for submission, leaving the field empty.
    /// `None` when there is nothing worth sending.
    pub fn take_input(&mut self) -> Option<String> {
        let text = self.input_text.trim().to_string();
        if text.is_empty() {
            return None;
        }
        self.input_text.clear();
        Some(text)
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
