use crate::domain::lifespan::{add_years, LifeSpan};
use crate::domain::reading::ClockReading;
use crate::domain::stats::LifeStats;
use crate::ports::frames::{FrameRequest, FrameScheduler};
use chrono::{DateTime, Datelike, Months, NaiveDate, Utc};
use tracing::{debug, trace};

const MS_PER_DAY: i64 = 86_400_000;
const MINUTES_PER_CLOCK_DAY: f64 = 24.0 * 60.0;

/// Project the elapsed part of `span` at `now` onto the 24-hour clock.
///
/// Before birth the clock reads midnight; from the death instant on it stays
/// at `24:00:00.000.000`.
pub fn compute_reading(span: &LifeSpan, now: DateTime<Utc>) -> ClockReading {
    let birth = span.birth_instant();
    let total_ms = (span.death_instant() - birth).num_milliseconds();
    let lived_ms = (now - birth).num_milliseconds().max(0);

    if total_ms <= 0 {
        return ClockReading::from_ratio(1.0);
    }
    ClockReading::from_ratio(lived_ms as f64 / total_ms as f64)
}

/// Day counts, percentage and the calendar breakdown of what is left
pub fn compute_stats(span: &LifeSpan, now: DateTime<Utc>) -> LifeStats {
    let birth = span.birth_instant();
    let total_ms = (span.death_instant() - birth).num_milliseconds();
    let lived_ms = (now - birth).num_milliseconds();

    let total_days = (total_ms + MS_PER_DAY - 1).div_euclid(MS_PER_DAY).max(1);
    let lived_days = lived_ms.div_euclid(MS_PER_DAY).clamp(0, total_days);
    let remaining_days = total_days - lived_days;

    let today = now.date_naive();
    let (years_left, months_left, days_left) = calendar_breakdown(today, span.death_date());

    LifeStats {
        percent_lived: lived_days as f64 / total_days as f64,
        total_days,
        lived_days,
        remaining_days,
        years_left,
        months_left,
        days_left,
        life_minute_to_days: total_days as f64 / MINUTES_PER_CLOCK_DAY,
        as_of: today,
    }
}

/// Greedy whole years, then whole months, then days from `from` to `to`.
/// Zero everywhere once `to` is not after `from`.
pub fn calendar_breakdown(from: NaiveDate, to: NaiveDate) -> (u32, u32, u32) {
    if to <= from {
        return (0, 0, 0);
    }

    let mut years = (to.year() - from.year()).max(0) as u32;
    while years > 0 && add_years(from, years).map_or(true, |shifted| shifted > to) {
        years -= 1;
    }
    let after_years = add_years(from, years).unwrap_or(from);

    let month_span = (to.year() - after_years.year()) * 12 + to.month() as i32
        - after_years.month() as i32;
    let mut months = month_span.max(0) as u32;
    while months > 0
        && after_years
            .checked_add_months(Months::new(months))
            .map_or(true, |shifted| shifted > to)
    {
        months -= 1;
    }
    let after_months = after_years
        .checked_add_months(Months::new(months))
        .unwrap_or(after_years);

    let days = (to - after_months).num_days().max(0) as u32;
    (years, months, days)
}

/// Whether the engine is driving the clock
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum EngineState {
    #[default]
    Idle,
    Running {
        span: LifeSpan,
        pending: FrameRequest,
    },
}

/// Frame-driven recomputation loop for the life clock.
///
/// While running, exactly one frame request is outstanding. Each delivered
/// frame yields a fresh reading and re-arms the next request; `stop` revokes
/// the outstanding one so nothing fires after the result view is gone.
#[derive(Debug, Default)]
pub struct ClockEngine {
    state: EngineState,
    latest: Option<ClockReading>,
    ticks: u64,
}

impl ClockEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, EngineState::Running { .. })
    }

    /// Span being displayed, if running
    pub fn span(&self) -> Option<&LifeSpan> {
        match &self.state {
            EngineState::Running { span, .. } => Some(span),
            EngineState::Idle => None,
        }
    }

    /// Reading produced by the most recent frame of the current run
    pub fn latest(&self) -> Option<ClockReading> {
        self.latest
    }

    /// Frames handled since the engine was created
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Idle -> Running. Starting again while running swaps in the new span.
    pub fn start<S: FrameScheduler + ?Sized>(&mut self, span: LifeSpan, scheduler: &mut S) {
        if let EngineState::Running { pending, .. } = self.state {
            scheduler.cancel_frame(pending);
        }
        let pending = scheduler.request_frame();
        debug!("Clock engine running for {} ({})", span, pending);
        self.state = EngineState::Running { span, pending };
        self.latest = None;
    }

    /// Running -> Idle, revoking the outstanding frame request.
    /// Returns false if the engine was already idle.
    pub fn stop<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) -> bool {
        match std::mem::take(&mut self.state) {
            EngineState::Running { pending, .. } => {
                let revoked = scheduler.cancel_frame(pending);
                debug!("Clock engine idle ({} revoked: {})", pending, revoked);
                self.latest = None;
                true
            }
            EngineState::Idle => false,
        }
    }

    /// Handle a delivered frame. Only the outstanding request produces a
    /// reading; stale or foreign requests are ignored.
    pub fn on_frame<S: FrameScheduler + ?Sized>(
        &mut self,
        request: FrameRequest,
        now: DateTime<Utc>,
        scheduler: &mut S,
    ) -> Option<ClockReading> {
        match self.state {
            EngineState::Running { span, pending } if pending == request => {
                let reading = compute_reading(&span, now);
                let next = scheduler.request_frame();
                self.state = EngineState::Running {
                    span,
                    pending: next,
                };
                self.latest = Some(reading);
                self.ticks += 1;
                Some(reading)
            }
            _ => {
                trace!("Ignoring stale {}", request);
                None
            }
        }
    }
}
