//! Conversation session — the message log and the submit/reply cycle.
//!
//! One session per visible chat surface. `submit` is async and runs on the
//! single UI thread; several submits may be in flight at once and share the
//! session through a clone-cheap handle. The inner `RefCell` is never
//! borrowed across an `.await`.
//!
//! Each non-empty submission appends:
//! 1. the user message, synchronously, before any network activity
//! 2. exactly one agent message once the webhook settles: the extracted
//!    reply, or an apology carrying the error description
//!
//! `reset` starts a new conversation without cancelling in-flight requests.
//! Whether their late replies reach the new log is decided by
//! [`StaleReplyPolicy`].

use std::cell::RefCell;
use std::rc::Rc;

use futures::lock::Mutex;
use serde_json::Value;

use chat_types::{
    ChatError, Result,
    config::{ChatConfig, StaleReplyPolicy, SubmitOrdering},
    event::ChatEvent,
    message::Message,
    notification::Notification,
    webhook::WebhookRequest,
};
use crate::event_bus::EventBus;
use crate::ports::{NotifierPort, WebhookPort};
use crate::reply::extract_reply;

pub const ERROR_TITLE: &str = "Error";
pub const APOLOGY_PREFIX: &str = "Lo siento, ha ocurrido un error al procesar tu mensaje";

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Uninitialized,
    Idle,
    AwaitingReply,
}

/// What the display layer renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub messages: Vec<Message>,
    pub pending: bool,
}

struct SessionInner {
    conversation_id: Option<String>,
    messages: Vec<Message>,
    /// Requests of the current generation still awaiting the webhook
    in_flight: usize,
    /// Bumped on every initialize/reset
    generation: u64,
    agent: String,
    config: ChatConfig,
}

/// Handle to one conversation — clone-cheap via Rc.
#[derive(Clone)]
pub struct ConversationSession {
    inner: Rc<RefCell<SessionInner>>,
    event_bus: EventBus,
    /// Single slot used when `SubmitOrdering::Serialized` is configured
    submit_slot: Rc<Mutex<()>>,
}

impl ConversationSession {
    pub fn new(config: ChatConfig, event_bus: EventBus) -> Self {
        let agent = config.default_agent.clone();
        Self {
            inner: Rc::new(RefCell::new(SessionInner {
                conversation_id: None,
                messages: Vec::new(),
                in_flight: 0,
                generation: 0,
                agent,
                config,
            })),
            event_bus,
            submit_slot: Rc::new(Mutex::new(())),
        }
    }

    /// Start a conversation: fresh id, empty log, nothing pending.
    pub fn initialize(&self) {
        let conversation_id = chat_types::new_id();
        {
            let mut inner = self.inner.borrow_mut();
            inner.conversation_id = Some(conversation_id.clone());
            inner.messages.clear();
            inner.in_flight = 0;
            inner.generation += 1;
        }
        log::info!("Conversation {} started", conversation_id);
        self.event_bus.emit(ChatEvent::SessionStarted { conversation_id });
    }

    /// Clear the log and mint a new conversation id. In-flight requests
    /// keep running.
    pub fn reset(&self) {
        self.initialize();
    }

    /// Send one user turn to the current agent's webhook.
    ///
    /// Blank input and uninitialized sessions are silently ignored.
    /// Failures never escape: they are reported through `notifier` and
    /// logged as an agent apology.
    pub async fn submit(&self, text: &str, webhook: &dyn WebhookPort, notifier: &dyn NotifierPort) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }

        let (conversation_id, generation, agent, endpoint, ordering) = {
            let inner = self.inner.borrow();
            let Some(conversation_id) = inner.conversation_id.clone() else {
                log::debug!("Submit ignored: session not initialized");
                return;
            };
            let endpoint = inner.config.endpoint_for(&inner.agent).map(str::to_string);
            (
                conversation_id,
                inner.generation,
                inner.agent.clone(),
                endpoint,
                inner.config.ordering,
            )
        };

        self.append(Message::user(text));
        let _pending = PendingGuard::acquire(&self.inner);

        let request = WebhookRequest::new(text, conversation_id);
        let outcome = self
            .dispatch(&request, generation, &agent, endpoint, ordering, webhook)
            .await;
        self.settle(&request.message_id, generation, outcome, notifier);
    }

    async fn dispatch(
        &self,
        request: &WebhookRequest,
        generation: u64,
        agent: &str,
        endpoint: Result<String>,
        ordering: SubmitOrdering,
        webhook: &dyn WebhookPort,
    ) -> Result<String> {
        let url = endpoint?;
        let _slot = match ordering {
            SubmitOrdering::Serialized => Some(self.submit_slot.lock().await),
            SubmitOrdering::Concurrent => None,
        };
        // a reset may have happened while queued for the slot
        if self.discards(generation) {
            return Err(ChatError::Superseded);
        }

        log::debug!("POST {} (agent {}, message {})", url, agent, request.message_id);
        self.event_bus.emit(ChatEvent::RequestStarted {
            message_id: request.message_id.clone(),
            agent: agent.to_string(),
        });

        let response = webhook.post(&url, request).await?;
        if !response.is_success() {
            return Err(ChatError::Status { status: response.status });
        }

        let payload: Value = serde_json::from_str(&response.body)
            .map_err(|e| ChatError::InvalidResponse(e.to_string()))?;
        extract_reply(&payload)
            .into_option()
            .ok_or(ChatError::MissingReply)
    }

    fn settle(
        &self,
        message_id: &str,
        generation: u64,
        outcome: Result<String>,
        notifier: &dyn NotifierPort,
    ) {
        self.event_bus.emit(ChatEvent::RequestSettled {
            message_id: message_id.to_string(),
        });

        if self.discards(generation) {
            log::warn!("Discarding reply to {} from a previous conversation", message_id);
            self.event_bus.emit(ChatEvent::StaleReplyDiscarded {
                message_id: message_id.to_string(),
            });
            return;
        }

        match outcome {
            Ok(reply) => self.append(Message::agent(reply)),
            Err(e) => {
                log::warn!("Submit {} failed: {}", message_id, e);
                notifier.notify(Notification::error(ERROR_TITLE, e.to_string()));
                self.append(Message::agent(apology(&e)));
                self.event_bus.emit(ChatEvent::Failed { message: e.to_string() });
            }
        }
    }

    /// True when results from `generation` must not reach the log.
    fn discards(&self, generation: u64) -> bool {
        let inner = self.inner.borrow();
        inner.generation != generation && inner.config.stale_replies == StaleReplyPolicy::Discard
    }

    fn append(&self, message: Message) {
        let message_id = message.id().to_string();
        self.inner.borrow_mut().messages.push(message);
        self.event_bus.emit(ChatEvent::MessageAppended { message_id });
    }

    /// Ordered log and pending flag, for rendering.
    pub fn current_state(&self) -> SessionSnapshot {
        let inner = self.inner.borrow();
        SessionSnapshot {
            messages: inner.messages.clone(),
            pending: inner.in_flight > 0,
        }
    }

    pub fn state(&self) -> SessionState {
        let inner = self.inner.borrow();
        match (&inner.conversation_id, inner.in_flight) {
            (None, _) => SessionState::Uninitialized,
            (Some(_), 0) => SessionState::Idle,
            (Some(_), _) => SessionState::AwaitingReply,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.inner.borrow().in_flight > 0
    }

    pub fn conversation_id(&self) -> Option<String> {
        self.inner.borrow().conversation_id.clone()
    }

    pub fn generation(&self) -> u64 {
        self.inner.borrow().generation
    }

    pub fn agent(&self) -> String {
        self.inner.borrow().agent.clone()
    }

    /// Route subsequent submissions to another configured agent.
    pub fn set_agent(&self, agent: &str) -> Result<()> {
        let mut inner = self.inner.borrow_mut();
        if inner.config.agent(agent).is_none() {
            return Err(ChatError::UnknownAgent(agent.to_string()));
        }
        inner.agent = agent.to_string();
        Ok(())
    }

    pub fn config(&self) -> ChatConfig {
        self.inner.borrow().config.clone()
    }

    /// Swap the configuration. Falls back to the new default agent when the
    /// selected one no longer exists.
    pub fn set_config(&self, config: ChatConfig) {
        let mut inner = self.inner.borrow_mut();
        if config.agent(&inner.agent).is_none() {
            inner.agent = config.default_agent.clone();
        }
        inner.config = config;
    }
}

/// User-facing text logged in place of a reply when a submit fails.
pub fn apology(error: &ChatError) -> String {
    format!("{}: {}", APOLOGY_PREFIX, error)
}

/// Holds one in-flight slot; released on every exit path of `submit`,
/// including when the future is dropped mid-request.
struct PendingGuard {
    inner: Rc<RefCell<SessionInner>>,
    generation: u64,
}

impl PendingGuard {
    fn acquire(inner: &Rc<RefCell<SessionInner>>) -> Self {
        let generation = {
            let mut state = inner.borrow_mut();
            state.in_flight += 1;
            state.generation
        };
        Self {
            inner: inner.clone(),
            generation,
        }
    }
}

impl Drop for PendingGuard {
    fn drop(&mut self) {
        let mut state = self.inner.borrow_mut();
        // a reset already zeroed the counter for older generations
        if state.generation == self.generation {
            state.in_flight = state.in_flight.saturating_sub(1);
        }
    }
}
