use lifeclock_core::domain::Language;
use lifeclock_core::ports::{Notice, Notifier, Severity};
use lifeclock_core::ValidationError;
use tracing::warn;

/// Notifier that shows one modal popup at a time.
///
/// The view draws the popup over everything else; any key dismisses it.
#[derive(Debug, Default)]
pub struct PopupNotifier {
    current: Option<Notice>,
}

impl PopupNotifier {
    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    pub fn dismiss(&mut self) -> Option<Notice> {
        self.current.take()
    }
}

impl Notifier for PopupNotifier {
    fn notify(&mut self, severity: Severity, error: &ValidationError, lang: Language) {
        warn!("Rejected input: {} ({:?})", error, severity);
        self.current = Some(Notice {
            severity,
            error: *error,
            lang,
        });
    }
}
