//! Destination payload — the simplified shape the push endpoint accepts.

use serde::{Deserialize, Serialize};

use crate::classify::EventType;
use crate::markdown::strip_bold;
use crate::message::Attachment;

/// One push notification, built from one attachment.
///
/// Fields the endpoint treats as optional are omitted from the JSON body
/// when empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PushPayload {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    /// All display text from the attachment's blocks, newline-joined.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_type: Option<EventType>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub color: String,
}

impl PushPayload {
    /// Build the payload for a single attachment.
    ///
    /// Walks blocks in order: a block's text run becomes one line, then each
    /// of its non-empty fields becomes one line, all stripped of bold markup.
    /// Missing blocks or fields are skipped.
    pub fn from_attachment(att: &Attachment) -> Self {
        let mut lines = Vec::new();

        if let Some(blocks) = &att.blocks {
            for block in blocks {
                if let Some(text) = &block.text {
                    if !text.text.is_empty() {
                        lines.push(strip_bold(&text.text));
                    }
                }
                if let Some(fields) = &block.fields {
                    for field in fields {
                        if !field.text.is_empty() {
                            lines.push(strip_bold(&field.text));
                        }
                    }
                }
            }
        }

        Self {
            title: att.title.clone(),
            message: lines.join("\n"),
            event_type: Some(EventType::infer(&att.title)),
            color: att.color.clone(),
        }
    }
}
