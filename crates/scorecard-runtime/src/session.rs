use scorecard_engine::{StreamOptions, stream};
use scorecard_types::{AgentExecutor, ExtraArgs, Message, MessageMetadata, MessageStatus};
use std::path::PathBuf;
use uuid::Uuid;

use crate::Result;

const UPLOADS_NOTE: &str = "You have been provided with these files, which might be helpful or not:";

/// One conversation with the agent: what was said, and which files the user
/// uploaded along the way.
#[derive(Debug, Clone)]
pub struct ChatSession {
    pub id: Uuid,
    pub history: Vec<Message>,
    pub uploads: Vec<PathBuf>,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            history: Vec::new(),
            uploads: Vec::new(),
        }
    }

    pub fn add_upload(&mut self, path: PathBuf) {
        self.uploads.push(path);
    }

    /// Task text as handed to the agent, including the uploaded-files note
    pub fn user_message(&self, text: &str) -> String {
        if self.uploads.is_empty() {
            return text.to_string();
        }
        let files = self
            .uploads
            .iter()
            .map(|p| format!("'{}'", p.display()))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}\n{} [{}]", text, UPLOADS_NOTE, files)
    }

    /// Run one user turn.
    ///
    /// Every message the stream yields is appended to the history and passed
    /// to `on_message`. If the run breaks off, an error entry is recorded and
    /// shown before the error is returned.
    pub fn interact<A, F>(
        &mut self,
        agent: &mut A,
        text: &str,
        reset_memory: bool,
        extra_args: Option<&ExtraArgs>,
        options: StreamOptions,
        mut on_message: F,
    ) -> Result<()>
    where
        A: AgentExecutor + ?Sized,
        F: FnMut(&Message),
    {
        let task = self.user_message(text);
        self.history.push(Message::user(task.clone()));
        tracing::info!(session = %self.id, uploads = self.uploads.len(), "user turn");

        let messages = match stream(agent, &task, reset_memory, extra_args, options) {
            Ok(messages) => messages,
            Err(err) => return Err(self.record_failure(err.into(), &mut on_message)),
        };

        for message in messages {
            match message {
                Ok(message) => {
                    on_message(&message);
                    self.history.push(message);
                }
                Err(err) => return Err(self.record_failure(err.into(), &mut on_message)),
            }
        }
        Ok(())
    }

    fn record_failure<F>(&mut self, err: crate::Error, on_message: &mut F) -> crate::Error
    where
        F: FnMut(&Message),
    {
        let message = Message::assistant(err.to_string()).with_metadata(MessageMetadata {
            status: Some(MessageStatus::Done),
            ..MessageMetadata::titled("💥 Error")
        });
        on_message(&message);
        self.history.push(message);
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scorecard_testing::{ScriptedAgent, StepFixture, sample_trace};
    use scorecard_types::Role;

    #[test]
    fn test_user_message_without_uploads_is_unchanged() {
        let session = ChatSession::new();
        assert_eq!(session.user_message("Compare MIT"), "Compare MIT");
    }

    #[test]
    fn test_user_message_lists_uploads() {
        let mut session = ChatSession::new();
        session.add_upload(PathBuf::from("uploads/transcript.pdf"));
        session.add_upload(PathBuf::from("uploads/essay.txt"));
        assert_eq!(
            session.user_message("Which fits me?"),
            "Which fits me?\nYou have been provided with these files, which might be helpful or not: ['uploads/transcript.pdf', 'uploads/essay.txt']"
        );
    }

    #[test]
    fn test_interact_records_turn() {
        let mut session = ChatSession::new();
        let mut agent = ScriptedAgent::new(sample_trace());
        let mut seen = 0;

        session
            .interact(&mut agent, "MIT tuition?", false, None, StreamOptions::default(), |_| {
                seen += 1
            })
            .unwrap();

        assert_eq!(session.history[0].role, Role::User);
        assert_eq!(session.history[0].text(), Some("MIT tuition?"));
        assert_eq!(seen, session.history.len() - 1);
        assert_eq!(
            session.history.last().and_then(|m| m.text()),
            Some("Final answer:\nMIT tuition is $55000")
        );
    }

    #[test]
    fn test_interact_records_upstream_failure() {
        let mut session = ChatSession::new();
        let mut agent =
            ScriptedAgent::new(vec![StepFixture::new(1).build().into()]).fail_at(0, "boom");
        let mut titles = Vec::new();

        let result = session.interact(&mut agent, "t", false, None, StreamOptions::default(), |m| {
            titles.push(m.title().map(str::to_string))
        });

        assert!(result.is_err());
        assert_eq!(titles, vec![Some("💥 Error".to_string())]);
        let last = session.history.last().unwrap();
        assert!(last.text().unwrap().contains("boom"));
    }

    #[test]
    fn test_unavailable_agent_is_recorded() {
        let mut session = ChatSession::new();
        let mut agent = ScriptedAgent::unavailable("no model");
        let result = session.interact(&mut agent, "t", false, None, StreamOptions::default(), |_| {});
        assert!(matches!(
            result,
            Err(crate::Error::Engine(scorecard_engine::Error::Agent(
                scorecard_types::Error::Unavailable(_)
            )))
        ));
        assert_eq!(session.history.len(), 2);
    }
}
