use std::time::{Duration, Instant};

use crate::navigation::Transition;

/// How long a status message stays on screen
pub(super) const MESSAGE_TTL: Duration = Duration::from_secs(3);

/// Path prompt state (opened with `:`)
#[derive(Debug, Clone, Default)]
pub(super) struct PathPrompt {
    /// Whether prompt input is active
    pub active: bool,
    /// The path typed so far
    pub input: String,
}

impl PathPrompt {
    pub fn activate(&mut self) {
        self.active = true;
        self.input.clear();
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn pop_char(&mut self) {
        self.input.pop();
    }

    /// Close the prompt and hand back what was typed
    pub fn submit(&mut self) -> String {
        self.active = false;
        std::mem::take(&mut self.input)
    }

    pub fn cancel(&mut self) {
        self.active = false;
        self.input.clear();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum MessageType {
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub(super) struct StatusMessage {
    pub message: String,
    pub message_type: MessageType,
    pub timestamp: Instant,
}

impl StatusMessage {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            message_type: MessageType::Info,
            timestamp: Instant::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            message_type: MessageType::Error,
            timestamp: Instant::now(),
        }
    }

    pub fn expired(&self) -> bool {
        self.timestamp.elapsed() > MESSAGE_TTL
    }
}

/// Human readable summary of a transition for the status bar
pub(super) fn describe_transition(transition: &Transition) -> String {
    let mut text = match &transition.from {
        Some(from) => format!("{} → {}", from.path, transition.to.path),
        None => transition.to.path.clone(),
    };
    if transition.redirected() {
        text.push_str(&format!(" (redirected from {})", transition.requested));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::RouteEntry;

    #[test]
    fn test_prompt_submit_clears() {
        let mut prompt = PathPrompt::default();
        prompt.activate();
        for c in "/tasks".chars() {
            prompt.push_char(c);
        }
        prompt.pop_char();
        prompt.push_char('s');

        assert_eq!(prompt.submit(), "/tasks");
        assert!(!prompt.active);
        assert!(prompt.input.is_empty());
    }

    #[test]
    fn test_describe_transition() {
        let transition = Transition {
            from: Some(RouteEntry::view("/team", "Team")),
            to: RouteEntry::view("/dashboard", "Dashboard"),
            requested: "/".to_string(),
        };
        assert_eq!(
            describe_transition(&transition),
            "/team → /dashboard (redirected from /)"
        );
    }
}
