use anyhow::Result;
use chrono::{DateTime, Utc};
use crossterm::event::{KeyCode, KeyModifiers};
use lifeclock_core::app::{compute_stats, validate};
use lifeclock_core::domain::quote_at;
use lifeclock_core::ports::Notifier;
use lifeclock_core::ValidationError;
use tracing::{debug, info};

use super::model::{TuiModel, ViewMode};

/// What a handled key did, for the caller's logging and tests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiMessage {
    /// Input accepted; the clock engine is running
    Submitted,

    /// Input rejected; a popup is showing
    Rejected(ValidationError),

    /// Left the result view; the clock engine is idle
    Back,

    /// The application should exit
    Quit,

    /// No action needed
    None,
}

/// The Update function - handles user input and display frames
pub struct TuiUpdate;

impl TuiUpdate {
    /// Handle a key press and update the model accordingly
    pub fn handle_key(
        model: &mut TuiModel,
        key: KeyCode,
        modifiers: KeyModifiers,
        now: DateTime<Utc>,
    ) -> Result<TuiMessage> {
        // An open popup swallows the key that closes it
        if model.popup.dismiss().is_some() {
            return Ok(TuiMessage::None);
        }

        if let Some(msg) = Self::handle_global_keys(model, key, modifiers) {
            return Ok(msg);
        }

        match model.mode {
            ViewMode::Input => Self::handle_input_keys(model, key, modifiers, now),
            ViewMode::Result => Self::handle_result_keys(model, key),
        }
    }

    /// Validate the form and either start the clock or raise a popup
    pub fn submit(model: &mut TuiModel, now: DateTime<Utc>) -> TuiMessage {
        match validate(&model.input.birth_date, &model.input.expectancy, now) {
            Ok(span) => {
                info!("Showing life clock for {}", span);
                model.engine.start(span, &mut model.frames);
                model.stats = Some(compute_stats(&span, now));
                model.mode = ViewMode::Result;
                TuiMessage::Submitted
            }
            Err(err) => {
                model.popup.notify(err.severity(), &err, model.lang);
                TuiMessage::Rejected(err)
            }
        }
    }

    /// Leave the result view and stop the clock loop
    pub fn back(model: &mut TuiModel) -> TuiMessage {
        model.engine.stop(&mut model.frames);
        model.stats = None;
        model.mode = ViewMode::Input;
        info!("Back to input view");
        TuiMessage::Back
    }

    /// Deliver one display refresh: run every due frame request and refresh
    /// the stats and quote for this instant
    pub fn on_frame(model: &mut TuiModel, now: DateTime<Utc>) {
        model.now = now;
        for request in model.frames.take_due() {
            model.engine.on_frame(request, now, &mut model.frames);
        }

        if let Some(span) = model.engine.span().copied() {
            model.stats = Some(compute_stats(&span, now));
        }
        model.quote = quote_at(now, model.quote_rotate_secs);
    }

    /// Keys that work on every screen
    fn handle_global_keys(
        model: &mut TuiModel,
        key: KeyCode,
        modifiers: KeyModifiers,
    ) -> Option<TuiMessage> {
        match key {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                Some(TuiMessage::Quit)
            }

            KeyCode::F(2) => {
                model.toggle_language();
                debug!("Language switched to {}", model.lang);
                Some(TuiMessage::None)
            }

            _ => None,
        }
    }

    /// Keys on the input form
    fn handle_input_keys(
        model: &mut TuiModel,
        key: KeyCode,
        modifiers: KeyModifiers,
        now: DateTime<Utc>,
    ) -> Result<TuiMessage> {
        match key {
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                model.input.focus = model.input.focus.next();
                Ok(TuiMessage::None)
            }

            KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => {
                model.input.focused_mut().push(c);
                Ok(TuiMessage::None)
            }

            KeyCode::Backspace => {
                model.input.focused_mut().pop();
                Ok(TuiMessage::None)
            }

            KeyCode::Enter => Ok(Self::submit(model, now)),

            KeyCode::Esc => Ok(TuiMessage::Quit),

            _ => Ok(TuiMessage::None),
        }
    }

    /// Keys on the clock screen
    fn handle_result_keys(model: &mut TuiModel, key: KeyCode) -> Result<TuiMessage> {
        match key {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => Ok(Self::back(model)),

            KeyCode::Char('i') => {
                model.show_explainer = !model.show_explainer;
                Ok(TuiMessage::None)
            }

            KeyCode::Char('q') => Ok(TuiMessage::Quit),

            _ => Ok(TuiMessage::None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use lifeclock_core::domain::Language;
    use lifeclock_core::ports::Severity;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2050, 1, 1, 0, 0, 0).unwrap()
    }

    fn press(model: &mut TuiModel, key: KeyCode) -> TuiMessage {
        TuiUpdate::handle_key(model, key, KeyModifiers::NONE, now()).unwrap()
    }

    fn type_text(model: &mut TuiModel, text: &str) {
        for c in text.chars() {
            press(model, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_typing_fills_focused_field() {
        let mut model = TuiModel::new(Language::En, now());
        type_text(&mut model, "2000-01-01");
        press(&mut model, KeyCode::Tab);
        type_text(&mut model, "1000");
        press(&mut model, KeyCode::Backspace);

        assert_eq!(model.input.birth_date, "2000-01-01");
        assert_eq!(model.input.expectancy, "100");
    }

    #[test]
    fn test_submit_starts_engine() {
        let mut model = TuiModel::new(Language::En, now());
        model.input.birth_date = "2000-01-01".to_string();
        model.input.expectancy = "100".to_string();

        assert_eq!(press(&mut model, KeyCode::Enter), TuiMessage::Submitted);
        assert_eq!(model.mode, ViewMode::Result);
        assert!(model.engine.is_running());
        assert_eq!(model.frames.pending_len(), 1);
        assert_eq!(model.stats.map(|s| s.total_days), Some(36525));
    }

    #[test]
    fn test_rejected_submit_opens_popup_and_stays_on_form() {
        let mut model = TuiModel::new(Language::Ko, now());
        model.input.expectancy = "80".to_string();

        assert_eq!(
            press(&mut model, KeyCode::Enter),
            TuiMessage::Rejected(ValidationError::MissingBirthDate)
        );
        assert_eq!(model.mode, ViewMode::Input);
        assert!(!model.engine.is_running());

        let notice = model.popup.current().copied().unwrap();
        assert_eq!(notice.severity, Severity::Warning);
        assert_eq!(notice.lang, Language::Ko);

        // The next key only closes the popup
        assert_eq!(press(&mut model, KeyCode::Char('x')), TuiMessage::None);
        assert!(!model.popup.is_open());
        assert_eq!(model.input.birth_date, "");
    }

    #[test]
    fn test_frames_produce_readings_until_back() {
        let mut model = TuiModel::new(Language::En, now());
        model.input.birth_date = "2000-01-01".to_string();
        model.input.expectancy = "100".to_string();
        press(&mut model, KeyCode::Enter);

        TuiUpdate::on_frame(&mut model, now());
        assert_eq!(model.reading().map(|r| r.hour), Some(12));
        TuiUpdate::on_frame(&mut model, now());
        assert_eq!(model.engine.ticks(), 2);

        assert_eq!(press(&mut model, KeyCode::Esc), TuiMessage::Back);
        assert_eq!(model.mode, ViewMode::Input);
        assert!(model.frames.is_idle());

        TuiUpdate::on_frame(&mut model, now());
        assert!(model.reading().is_none());
        assert_eq!(model.engine.ticks(), 2);
    }

    #[test]
    fn test_escape_on_form_quits() {
        let mut model = TuiModel::new(Language::En, now());
        assert_eq!(press(&mut model, KeyCode::Esc), TuiMessage::Quit);
    }

    #[test]
    fn test_ctrl_c_quits_anywhere() {
        let mut model = TuiModel::new(Language::En, now());
        let msg = TuiUpdate::handle_key(
            &mut model,
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
            now(),
        )
        .unwrap();
        assert_eq!(msg, TuiMessage::Quit);
        assert_eq!(model.input.birth_date, "");
    }

    #[test]
    fn test_f2_toggles_language() {
        let mut model = TuiModel::new(Language::En, now());
        press(&mut model, KeyCode::F(2));
        assert_eq!(model.lang, Language::Ko);
    }

    #[test]
    fn test_explainer_toggle_on_result_view() {
        let mut model = TuiModel::new(Language::En, now());
        model.input.birth_date = "2000-01-01".to_string();
        model.input.expectancy = "100".to_string();
        press(&mut model, KeyCode::Enter);

        assert!(!model.show_explainer);
        press(&mut model, KeyCode::Char('i'));
        assert!(model.show_explainer);
    }
}
