const MS_PER_HOUR: f64 = 3_600_000.0;
const MS_PER_MINUTE: f64 = 60_000.0;
const MS_PER_SECOND: f64 = 1_000.0;

/// Milliseconds in the 24-hour face a whole lifetime is projected onto
pub const MS_PER_CLOCK_DAY: f64 = 86_400_000.0;

/// The life ratio projected onto a 24-hour clock.
///
/// `hour` stays in `0..=23` while the life is running. Once the ratio reaches
/// 1.0 the reading freezes at `24:00:00.000.000`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClockReading {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub millisecond: u32,
    /// Display-only fourth digit group; derived from the millisecond value,
    /// not from a finer clock.
    pub sub_millisecond: u32,
    pub ratio: f64,
}

impl ClockReading {
    /// Project a life ratio onto the clock. Ratios are clamped to `[0, 1]`.
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio.is_nan() || ratio <= 0.0 {
            return Self::default();
        }
        if ratio >= 1.0 {
            return Self {
                hour: 24,
                ratio: 1.0,
                ..Self::default()
            };
        }

        let ms_in_clock = ratio * MS_PER_CLOCK_DAY;
        Self {
            hour: (ms_in_clock / MS_PER_HOUR).floor() as u32,
            minute: ((ms_in_clock % MS_PER_HOUR) / MS_PER_MINUTE).floor() as u32,
            second: ((ms_in_clock % MS_PER_MINUTE) / MS_PER_SECOND).floor() as u32,
            millisecond: (ms_in_clock % MS_PER_SECOND).floor() as u32,
            sub_millisecond: ((ms_in_clock * 1000.0) % 1000.0).floor() as u32,
            ratio,
        }
    }

    /// True once the whole expected lifetime has elapsed
    pub fn is_complete(&self) -> bool {
        self.ratio >= 1.0
    }

    /// `HH:MM:SS` part of the reading
    pub fn hms(&self) -> String {
        format!("{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

impl std::fmt::Display for ClockReading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}.{:03}.{:03}",
            self.hms(),
            self.millisecond,
            self.sub_millisecond
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_ratio_is_midnight() {
        let reading = ClockReading::from_ratio(0.0);
        assert_eq!(reading.to_string(), "00:00:00.000.000");
        assert!(!reading.is_complete());
    }

    #[test]
    fn test_half_life_is_noon() {
        let reading = ClockReading::from_ratio(0.5);
        assert_eq!(reading.to_string(), "12:00:00.000.000");
    }

    #[test]
    fn test_quarter_past_six() {
        assert_eq!(ClockReading::from_ratio(0.25).hms(), "06:00:00");

        // 0.2607 of a day is 22_524_480 ms
        let reading = ClockReading::from_ratio(0.2607);
        assert_eq!(reading.hour, 6);
        assert_eq!(reading.minute, 15);
        assert_eq!(reading.second, 24);
    }

    #[test]
    fn test_complete_life_freezes_at_24() {
        for ratio in [1.0, 1.5, 42.0] {
            let reading = ClockReading::from_ratio(ratio);
            assert_eq!(reading.to_string(), "24:00:00.000.000");
            assert!(reading.is_complete());
        }
    }

    #[test]
    fn test_negative_and_nan_ratios_clamp_to_zero() {
        assert_eq!(ClockReading::from_ratio(-0.25), ClockReading::default());
        assert_eq!(ClockReading::from_ratio(f64::NAN), ClockReading::default());
    }

    #[test]
    fn test_fields_stay_in_range_just_before_completion() {
        let reading = ClockReading::from_ratio(0.999_999_999);
        assert_eq!(reading.hour, 23);
        assert!(reading.minute <= 59);
        assert!(reading.second <= 59);
        assert!(reading.millisecond <= 999);
        assert!(reading.sub_millisecond <= 999);
    }
}
