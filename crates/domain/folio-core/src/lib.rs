use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod validate;

pub use validate::{check, validate, ValidationError};

/// The in-progress contact message a user is composing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl Draft {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Email => &self.email,
            DraftField::Subject => &self.subject,
            DraftField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let slot = match field {
            DraftField::Name => &mut self.name,
            DraftField::Email => &mut self.email,
            DraftField::Subject => &mut self.subject,
            DraftField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn is_empty(&self) -> bool {
        DraftField::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Builds the transmission payload. An empty subject is replaced by
    /// `default_subject`; the reply-to address is always the sender's email.
    pub fn template_params(&self, to_email: &str, default_subject: &str) -> TemplateParams {
        let subject = if self.subject.is_empty() {
            default_subject.to_string()
        } else {
            self.subject.clone()
        };

        TemplateParams {
            to_email: to_email.to_string(),
            from_name: self.name.clone(),
            from_email: self.email.clone(),
            subject,
            message: self.message.clone(),
            reply_to: self.email.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftField {
    Name,
    Email,
    Subject,
    Message,
}

impl DraftField {
    pub const ALL: [DraftField; 4] = [
        DraftField::Name,
        DraftField::Email,
        DraftField::Subject,
        DraftField::Message,
    ];

    /// Fields that must be non-blank for a draft to be sendable.
    pub const REQUIRED: [DraftField; 3] = [DraftField::Name, DraftField::Email, DraftField::Message];

    pub fn as_str(&self) -> &'static str {
        match self {
            DraftField::Name => "name",
            DraftField::Email => "email",
            DraftField::Subject => "subject",
            DraftField::Message => "message",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown draft field '{0}'")]
pub struct UnknownField(pub String);

impl FromStr for DraftField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DraftField::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Template variables handed to the delivery provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateParams {
    pub to_email: String,
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
    pub reply_to: String,
}

/// Where a failed submission attempt went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureKind {
    Validation,
    Load,
    Transmission,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FailureKind::Validation => "validation",
            FailureKind::Load => "load",
            FailureKind::Transmission => "transmission",
        };
        f.write_str(s)
    }
}
