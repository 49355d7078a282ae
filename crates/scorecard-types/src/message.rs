use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Conversational side a message is shown on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// Display-ready unit handed to the chat UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: MessageContent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MessageMetadata>,
}

impl Message {
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: MessageContent::Text(text.into()),
            metadata: None,
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: MessageContent::Text(text.into()),
            metadata: None,
        }
    }

    pub fn assistant_file(path: impl Into<PathBuf>, mime_type: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: MessageContent::File {
                path: path.into(),
                mime_type: mime_type.into(),
            },
            metadata: None,
        }
    }

    pub fn with_metadata(mut self, metadata: MessageMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn text(&self) -> Option<&str> {
        match &self.content {
            MessageContent::Text(text) => Some(text),
            MessageContent::File { .. } => None,
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.metadata.as_ref()?.id.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.metadata.as_ref()?.title.as_deref()
    }

    pub fn status(&self) -> Option<MessageStatus> {
        self.metadata.as_ref()?.status
    }
}

/// Plain text, or a file the UI should render inline (image/audio)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    File { path: PathBuf, mime_type: String },
}

/// Grouping and lifecycle information for collapsible entries.
///
/// A tool-call entry carries `id`; its execution log and error entries carry
/// the same value in `parent_id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<MessageStatus>,
}

impl MessageMetadata {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    Pending,
    Done,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_message_content_serializes_untagged() {
        let text = Message::assistant("hello");
        assert_eq!(
            serde_json::to_value(&text).unwrap(),
            json!({"role": "assistant", "content": "hello"})
        );

        let file = Message::assistant_file("/tmp/a.png", "image/png");
        assert_eq!(
            serde_json::to_value(&file).unwrap(),
            json!({
                "role": "assistant",
                "content": {"path": "/tmp/a.png", "mime_type": "image/png"}
            })
        );
    }

    #[test]
    fn test_metadata_accessors() {
        let msg = Message::assistant("x").with_metadata(MessageMetadata {
            title: Some("Used tool search".to_string()),
            id: Some("call_1".to_string()),
            parent_id: None,
            status: Some(MessageStatus::Done),
        });
        assert_eq!(msg.id(), Some("call_1"));
        assert_eq!(msg.title(), Some("Used tool search"));
        assert_eq!(msg.status(), Some(MessageStatus::Done));
        assert_eq!(Message::user("q").status(), None);
    }
}
