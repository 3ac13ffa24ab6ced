use serde::{Deserialize, Serialize};

/// Events emitted by the conversation session.
/// UI subscribes to these for reactive updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatEvent {
    /// A new conversation began (mount or reset)
    SessionStarted { conversation_id: String },

    /// A message was appended to the log
    MessageAppended { message_id: String },

    /// A webhook request was dispatched
    RequestStarted { message_id: String, agent: String },

    /// A webhook request settled (success or failure)
    RequestSettled { message_id: String },

    /// A reply belonging to a previous conversation was dropped
    StaleReplyDiscarded { message_id: String },

    /// A submission failed and an apology was logged
    Failed { message: String },
}
