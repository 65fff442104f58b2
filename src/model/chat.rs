use chrono::{DateTime, Local};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
    System,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Self::User => "You",
            Self::Assistant => "Assistant",
            Self::System => "Notice",
        }
    }
}

#[derive(Clone, Debug)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Local>,
    /// Number of retrieved passages the answer was built from
    pub sources_count: Option<usize>,
}

impl ChatMessage {
    fn now(role: Role, content: String) -> Self {
        Self {
            role,
            content,
            timestamp: Local::now(),
            sources_count: None,
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::now(Role::User, content.into())
    }

    pub fn assistant(content: impl Into<String>, sources_count: usize) -> Self {
        Self {
            sources_count: Some(sources_count),
            ..Self::now(Role::Assistant, content.into())
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::now(Role::System, content.into())
    }

    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}
