use chrono::NaiveDate;

/// Derived statistics shown under the clock. Recomputed on every render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LifeStats {
    /// `lived_days / total_days`, in `[0, 1]`
    pub percent_lived: f64,
    pub total_days: i64,
    pub lived_days: i64,
    pub remaining_days: i64,
    pub years_left: u32,
    pub months_left: u32,
    pub days_left: u32,
    /// Real days represented by one minute of the life clock
    pub life_minute_to_days: f64,
    /// Date the numbers were calculated for
    pub as_of: NaiveDate,
}

impl LifeStats {
    /// Percentage with one decimal, e.g. `50.0%`
    pub fn percent_label(&self) -> String {
        format!("{:.1}%", self.percent_lived * 100.0)
    }
}

/// Format an integer with `,` thousands separators
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(36525), "36,525");
        assert_eq!(group_thousands(1234567), "1,234,567");
        assert_eq!(group_thousands(-18262), "-18,262");
    }

    #[test]
    fn test_percent_label_has_one_decimal() {
        let stats = LifeStats {
            percent_lived: 0.50004,
            total_days: 36525,
            lived_days: 18263,
            remaining_days: 18262,
            years_left: 50,
            months_left: 0,
            days_left: 0,
            life_minute_to_days: 36525.0 / 1440.0,
            as_of: NaiveDate::from_ymd_opt(2050, 1, 1).unwrap(),
        };
        assert_eq!(stats.percent_label(), "50.0%");
    }
}
