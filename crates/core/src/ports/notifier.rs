use crate::domain::locale::{Language, Text};
use crate::error::ValidationError;

/// How an input problem is presented to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl Severity {
    /// Localized dialog title
    pub fn title(&self, lang: Language) -> &'static str {
        match self {
            Severity::Warning => lang.text(Text::Warning),
            Severity::Error => lang.text(Text::Error),
        }
    }
}

/// Surfaces rejected input to the user (a modal, an alert, a log line...)
pub trait Notifier {
    fn notify(&mut self, severity: Severity, error: &ValidationError, lang: Language);
}

/// A single notification, as delivered to a notifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub error: ValidationError,
    pub lang: Language,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        self.error.message(self.lang)
    }
}

/// Notifier that just remembers what it was told
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub notices: Vec<Notice>,
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, severity: Severity, error: &ValidationError, lang: Language) {
        self.notices.push(Notice {
            severity,
            error: *error,
            lang,
        });
    }
}
