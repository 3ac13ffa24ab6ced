//! Reply extraction from heterogeneous webhook payloads.
//!
//! Webhooks answer either with an object carrying the text in one of a few
//! well-known fields, or with an array whose first element does. Rules are
//! tried in order and the first hit wins.

use serde_json::Value;

/// Field names probed for reply text, highest priority first.
pub const REPLY_FIELDS: [&str; 3] = ["reply", "response", "message"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    Found(String),
    NotFound,
}

impl Extraction {
    pub fn into_option(self) -> Option<String> {
        match self {
            Extraction::Found(text) => Some(text),
            Extraction::NotFound => None,
        }
    }
}

/// A single extraction rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyRule {
    /// A reply field on the top-level object
    TopLevelField,
    /// A reply field on the first element of a top-level array
    FirstArrayElement,
}

impl ReplyRule {
    pub fn apply(&self, payload: &Value) -> Extraction {
        match self {
            ReplyRule::TopLevelField => probe_fields(payload),
            ReplyRule::FirstArrayElement => match payload.as_array().and_then(|a| a.first()) {
                Some(first) => probe_fields(first),
                None => Extraction::NotFound,
            },
        }
    }
}

/// Rules in evaluation order.
pub const RULES: [ReplyRule; 2] = [ReplyRule::TopLevelField, ReplyRule::FirstArrayElement];

/// Run every rule in precedence order and return the first text found.
pub fn extract_reply(payload: &Value) -> Extraction {
    RULES
        .iter()
        .map(|rule| rule.apply(payload))
        .find(|e| matches!(e, Extraction::Found(_)))
        .unwrap_or(Extraction::NotFound)
}

fn probe_fields(value: &Value) -> Extraction {
    let Some(obj) = value.as_object() else {
        return Extraction::NotFound;
    };
    REPLY_FIELDS
        .iter()
        .filter_map(|field| obj.get(*field).and_then(Value::as_str))
        .find(|text| !text.trim().is_empty())
        .map(|text| Extraction::Found(text.to_string()))
        .unwrap_or(Extraction::NotFound)
}
