//! Event classification — maps a notification title to a coarse category.

use serde::{Deserialize, Serialize};

/// Coarse notification category derived from title keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Callback,
    Alert,
    Feedback,
    Startup,
    Custom,
}

impl EventType {
    /// Classify a title by case-insensitive substring search.
    ///
    /// Checked in fixed priority order; first match wins. Anything
    /// unrecognized falls through to `Custom`.
    pub fn infer(title: &str) -> Self {
        let lower = title.to_lowercase();
        if lower.contains("callback") {
            Self::Callback
        } else if lower.contains("alert") {
            Self::Alert
        } else if ["feedback", "bug", "feature", "detection"]
            .iter()
            .any(|kw| lower.contains(*kw))
        {
            Self::Feedback
        } else if lower.contains("startup") {
            Self::Startup
        } else {
            Self::Custom
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Callback => "callback",
            Self::Alert => "alert",
            Self::Feedback => "feedback",
            Self::Startup => "startup",
            Self::Custom => "custom",
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infer_callback() {
        assert_eq!(EventType::infer("New Callback Received"), EventType::Callback);
    }

    #[test]
    fn infer_alert() {
        assert_eq!(EventType::infer("Critical Alert"), EventType::Alert);
    }

    #[test]
    fn infer_feedback_keywords() {
        assert_eq!(EventType::infer("Bug Report"), EventType::Feedback);
        assert_eq!(EventType::infer("Feature Request"), EventType::Feedback);
        assert_eq!(EventType::infer("New Detection"), EventType::Feedback);
        assert_eq!(EventType::infer("User Feedback"), EventType::Feedback);
    }

    #[test]
    fn infer_startup() {
        assert_eq!(EventType::infer("Service Startup"), EventType::Startup);
    }

    #[test]
    fn infer_default_custom() {
        assert_eq!(EventType::infer("hello"), EventType::Custom);
        assert_eq!(EventType::infer(""), EventType::Custom);
    }

    #[test]
    fn infer_is_case_insensitive() {
        assert_eq!(EventType::infer("CALLBACK established"), EventType::Callback);
        assert_eq!(EventType::infer("sTaRtUp done"), EventType::Startup);
    }

    #[test]
    fn infer_priority_order() {
        // "callback" outranks "alert", which outranks the feedback group.
        assert_eq!(
            EventType::infer("Alert: callback lost"),
            EventType::Callback
        );
        assert_eq!(
            EventType::infer("Bug in alert handling"),
            EventType::Alert
        );
        assert_eq!(
            EventType::infer("Startup feature enabled"),
            EventType::Feedback
        );
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&EventType::Callback).unwrap(),
            "\"callback\""
        );
        assert_eq!(
            serde_json::to_string(&EventType::Custom).unwrap(),
            "\"custom\""
        );
    }

    #[test]
    fn display_matches_wire_form() {
        assert_eq!(EventType::Feedback.to_string(), "feedback");
    }
}
