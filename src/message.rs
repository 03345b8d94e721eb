//! Source message types — the chat-webhook message shape the upstream
//! dispatch framework delivers.

use serde::{Deserialize, Serialize};

/// A chat-oriented webhook notification: an ordered list of attachments.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WebhookMessage {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
}

/// A titled, colored notification section containing rich content blocks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Attachment {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    /// Hex color string, e.g. `"#ff0000"`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocks: Option<Vec<Block>>,
}

/// A content unit within an attachment: free text and/or field pairs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Block {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<TextObject>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<Field>>,
}

/// A text run with its wire format tag (`"mrkdwn"` or `"plain_text"`).
///
/// The tag is carried through deserialization but not interpreted — the
/// stripper handles the bold markup either way.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextObject {
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub kind: String,
    #[serde(default)]
    pub text: String,
}

/// A labeled text snippet nested in a block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Field {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(default)]
    pub text: String,
}

impl TextObject {
    /// A markdown-tagged text run.
    pub fn mrkdwn(text: impl Into<String>) -> Self {
        Self {
            kind: "mrkdwn".to_string(),
            text: text.into(),
        }
    }
}
