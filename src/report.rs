use anyhow::Result;
use chrono::{DateTime, Utc};
use lifeclock_core::app::{compute_reading, compute_stats, validate};
use lifeclock_core::domain::{quote_at, Language};
use lifeclock_core::ports::{Notifier, Severity};
use lifeclock_core::ValidationError;
use std::io::Write;
use tracing::warn;

use crate::config::StartupInput;

/// Notifier for non-interactive runs: one line on stderr
#[derive(Debug, Default)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&mut self, severity: Severity, error: &ValidationError, lang: Language) {
        warn!("Rejected input: {}", error);
        eprintln!("{}: {}", severity.title(lang), error.message(lang));
    }
}

/// Plain-text snapshot of the clock and stats at `now`
pub fn render_report(
    startup: &StartupInput,
    lang: Language,
    now: DateTime<Utc>,
    quote_rotate_secs: u64,
) -> std::result::Result<String, ValidationError> {
    let span = validate(&startup.birth_date, &startup.expectancy, now)?;
    let reading = compute_reading(&span, now);
    let stats = compute_stats(&span, now);

    let mut lines = vec![
        reading.to_string(),
        lang.lived_sentence(&stats),
        lang.remaining_sentence(&stats),
    ];
    lines.extend(lang.explainer_lines(&stats));
    lines.push(quote_at(now, quote_rotate_secs).to_string());

    Ok(lines.join("\n") + "\n")
}

/// Write the report to `out`, or route the validation error through the
/// notifier. Returns whether the input was accepted.
pub fn print_report<W: Write, N: Notifier>(
    out: &mut W,
    notifier: &mut N,
    startup: &StartupInput,
    lang: Language,
    now: DateTime<Utc>,
    quote_rotate_secs: u64,
) -> Result<bool> {
    match render_report(startup, lang, now, quote_rotate_secs) {
        Ok(report) => {
            out.write_all(report.as_bytes())?;
            out.flush()?;
            Ok(true)
        }
        Err(err) => {
            notifier.notify(err.severity(), &err, lang);
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use lifeclock_core::ports::RecordingNotifier;

    fn startup(birth_date: &str, expectancy: &str) -> StartupInput {
        StartupInput {
            birth_date: birth_date.to_string(),
            expectancy: expectancy.to_string(),
            submit: true,
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2050, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_report_lines() {
        let report = render_report(&startup("2000-01-01", "100"), Language::En, now(), 0).unwrap();
        let lines: Vec<&str> = report.lines().collect();

        assert!(lines[0].starts_with("12:00:01."));
        assert_eq!(lines[1], "You have lived 50.0% of your life.");
        assert!(lines[2].contains("18,262 days (50y 0m 0d)"));
        assert_eq!(lines[3], "Calculated as of 2050-01-01");
        assert!(lines.last().unwrap().contains("Seneca"));
    }

    #[test]
    fn test_print_report_writes_on_success() -> Result<()> {
        let mut out = Vec::new();
        let mut notifier = RecordingNotifier::default();
        let accepted = print_report(
            &mut out,
            &mut notifier,
            &startup("2000-01-01", "100"),
            Language::Ko,
            now(),
            30,
        )?;

        assert!(accepted);
        assert!(notifier.notices.is_empty());
        assert!(String::from_utf8(out)?.contains("당신은 지금 인생의 50.0%"));
        Ok(())
    }

    #[test]
    fn test_print_report_notifies_on_rejection() -> Result<()> {
        let mut out = Vec::new();
        let mut notifier = RecordingNotifier::default();
        let accepted = print_report(
            &mut out,
            &mut notifier,
            &startup("1900-01-01", "50"),
            Language::En,
            now(),
            30,
        )?;

        assert!(!accepted);
        assert!(out.is_empty());
        assert_eq!(notifier.notices.len(), 1);
        assert_eq!(notifier.notices[0].error, ValidationError::LifeAlreadyExceeded);
        assert_eq!(notifier.notices[0].severity, Severity::Error);
        Ok(())
    }
}
