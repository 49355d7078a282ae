use owo_colors::OwoColorize;
use scorecard_types::{Message, MessageContent, MessageStatus, Role};
use std::fmt;

use super::options::DisplayOptions;

const FOOTNOTE_OPEN: &str = "<span";
const FOOTNOTE_CLOSE: &str = "</span>";

/// Terminal rendering of one chat message.
///
/// Titled entries print their title on one line and the body indented
/// below; entries grouped under a tool call are indented one level deeper.
pub struct MessageView<'a> {
    pub message: &'a Message,
    pub options: &'a DisplayOptions,
}

impl<'a> MessageView<'a> {
    pub fn new(message: &'a Message, options: &'a DisplayOptions) -> Self {
        Self { message, options }
    }

    fn body(&self) -> String {
        match &self.message.content {
            MessageContent::Text(text) => strip_footnote_markup(text).to_string(),
            MessageContent::File { path, mime_type } => {
                format!("📎 {} ({})", path.display(), mime_type)
            }
        }
    }
}

impl fmt::Display for MessageView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color = self.options.enable_color;
        let body = self.body();

        if self.message.role == Role::User {
            return if color {
                write!(f, "{} {}", "👤 User:".bold(), body)
            } else {
                write!(f, "User: {}", body)
            };
        }

        let Some(title) = self.message.title() else {
            if color && is_muted(&self.message.content) {
                return write!(f, "{}", body.dimmed());
            }
            return write!(f, "{}", body);
        };

        let grouped = self
            .message
            .metadata
            .as_ref()
            .is_some_and(|m| m.parent_id.is_some());
        let indent = if grouped { "    " } else { "  " };
        let heading_indent = if grouped { "  " } else { "" };

        let status = match self.message.status() {
            Some(MessageStatus::Pending) => " …",
            Some(MessageStatus::Done) | None => "",
        };

        if color {
            let heading = format!("{}{}", title, status);
            let heading = if title.contains("Error") {
                heading.red().bold().to_string()
            } else if grouped {
                heading.yellow().to_string()
            } else {
                heading.cyan().bold().to_string()
            };
            write!(f, "{}{}", heading_indent, heading)?;
        } else {
            write!(f, "{}{}{}", heading_indent, title, status)?;
        }

        for line in body.lines() {
            write!(f, "\n{}{}", indent, line)?;
        }
        Ok(())
    }
}

/// Footnotes and separators are shown dimmed
fn is_muted(content: &MessageContent) -> bool {
    match content {
        MessageContent::Text(text) => {
            text.starts_with(FOOTNOTE_OPEN) || text == scorecard_engine::render::SEPARATOR
        }
        MessageContent::File { .. } => false,
    }
}

/// The HTML `<span>` wrapper of a footnote means nothing in a terminal
fn strip_footnote_markup(text: &str) -> &str {
    if !text.starts_with(FOOTNOTE_OPEN) {
        return text;
    }
    let Some(start) = text.find('>') else {
        return text;
    };
    let inner = &text[start + 1..];
    match inner.trim_end().strip_suffix(FOOTNOTE_CLOSE) {
        Some(stripped) => stripped,
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scorecard_types::MessageMetadata;

    fn plain() -> DisplayOptions {
        DisplayOptions {
            enable_color: false,
        }
    }

    #[test]
    fn test_footnote_markup_is_stripped() {
        let footnote =
            r#"<span style="color: #bbbbc2; font-size: 12px;">Step 1 | Duration: 0.50</span> "#;
        assert_eq!(strip_footnote_markup(footnote), "Step 1 | Duration: 0.50");
        assert_eq!(strip_footnote_markup("**Step 1**"), "**Step 1**");
    }

    #[test]
    fn test_tool_call_block() {
        let message = Message::assistant("```python\nprint(1)\n```").with_metadata(MessageMetadata {
            title: Some("🛠️ Used tool python_interpreter".to_string()),
            id: Some("call_1".to_string()),
            parent_id: None,
            status: Some(MessageStatus::Done),
        });
        let options = plain();
        assert_eq!(
            MessageView::new(&message, &options).to_string(),
            "🛠️ Used tool python_interpreter\n  ```python\n  print(1)\n  ```"
        );
    }

    #[test]
    fn test_grouped_entry_is_indented() {
        let message = Message::assistant("57986").with_metadata(MessageMetadata {
            title: Some("📝 Execution Logs".to_string()),
            id: None,
            parent_id: Some("call_1".to_string()),
            status: Some(MessageStatus::Done),
        });
        let options = plain();
        assert_eq!(
            MessageView::new(&message, &options).to_string(),
            "  📝 Execution Logs\n    57986"
        );
    }

    #[test]
    fn test_user_and_file_messages() {
        let options = plain();
        assert_eq!(
            MessageView::new(&Message::user("Compare MIT"), &options).to_string(),
            "User: Compare MIT"
        );
        let image = Message::assistant_file("/tmp/chart.png", "image/png");
        assert_eq!(
            MessageView::new(&image, &options).to_string(),
            "📎 /tmp/chart.png (image/png)"
        );
    }
}
