use chrono::{DateTime, Utc};
use lifeclock_core::app::ClockEngine;
use lifeclock_core::domain::{quote_at, ClockReading, Language, LifeStats, Quote};
use lifeclock_core::ports::FrameQueue;

use super::notifier::PopupNotifier;
use crate::config::{Config, StartupInput};

/// The TUI Model - the complete UI state, passed explicitly through update
/// and view instead of living in globals
#[derive(Debug)]
pub struct TuiModel {
    /// Display language
    pub lang: Language,

    /// Which screen is showing
    pub mode: ViewMode,

    /// Form text
    pub input: InputState,

    /// Frame-driven clock loop; running exactly while `mode` is `Result`
    pub engine: ClockEngine,

    /// Next-frame requests waiting for the display driver
    pub frames: FrameQueue,

    /// Stats for the latest frame
    pub stats: Option<LifeStats>,

    /// Quote currently shown under the clock
    pub quote: &'static Quote,

    /// Modal popup for rejected input
    pub popup: PopupNotifier,

    /// Whether the calculation explainer is expanded
    pub show_explainer: bool,

    /// Seconds between quote changes
    pub quote_rotate_secs: u64,

    /// Instant of the latest frame
    pub now: DateTime<Utc>,

    /// Whether the application should quit
    pub should_quit: bool,
}

/// The two screens of the app
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Input,
    Result,
}

/// Input form fields
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    #[default]
    BirthDate,
    Expectancy,
}

impl Field {
    pub fn next(self) -> Self {
        match self {
            Field::BirthDate => Field::Expectancy,
            Field::Expectancy => Field::BirthDate,
        }
    }
}

/// Raw form text, kept as typed so the validator sees exactly what the user
/// entered
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InputState {
    pub birth_date: String,
    pub expectancy: String,
    pub focus: Field,
}

impl InputState {
    pub fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            Field::BirthDate => &mut self.birth_date,
            Field::Expectancy => &mut self.expectancy,
        }
    }
}

impl TuiModel {
    pub fn new(lang: Language, now: DateTime<Utc>) -> Self {
        Self {
            lang,
            mode: ViewMode::default(),
            input: InputState::default(),
            engine: ClockEngine::new(),
            frames: FrameQueue::new(),
            stats: None,
            quote: quote_at(now, 0),
            popup: PopupNotifier::default(),
            show_explainer: false,
            quote_rotate_secs: 0,
            now,
            should_quit: false,
        }
    }

    /// Build the model from resolved configuration and startup form text
    pub fn from_config(config: &Config, startup: &StartupInput, now: DateTime<Utc>) -> Self {
        let mut model = Self::new(config.language.resolve(), now);
        model.input.birth_date = startup.birth_date.clone();
        model.input.expectancy = startup.expectancy.clone();
        model.show_explainer = config.display.show_explainer;
        model.quote_rotate_secs = config.display.quote_rotate_secs;
        model.quote = quote_at(now, model.quote_rotate_secs);
        model
    }

    /// Latest clock reading, if the result view is live
    pub fn reading(&self) -> Option<ClockReading> {
        self.engine.latest()
    }

    pub fn toggle_language(&mut self) {
        self.lang = match self.lang {
            Language::En => Language::Ko,
            Language::Ko => Language::En,
        };
    }
}
