use super::stats::{group_thousands, LifeStats};

/// Environment variables consulted for the user's locale, highest priority first
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// Display language. English unless the detected locale is Korean.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    En,
    Ko,
}

/// Fixed UI labels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Text {
    Title,
    BirthDateLabel,
    BirthDatePlaceholder,
    ExpectancyLabel,
    ExpectancyPlaceholder,
    Submit,
    Back,
    ExplainerToggle,
    SwitchField,
    Quit,
    OtherLanguage,
    AppName,
    Dismiss,
    Warning,
    Error,
}

impl Language {
    /// Pick a language from a locale tag such as `ko_KR.UTF-8` or `en-US`
    pub fn detect(tag: &str) -> Self {
        if tag.trim().to_ascii_lowercase().starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    /// Detect from the process locale environment
    pub fn from_env() -> Self {
        LOCALE_VARS
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|value| !value.trim().is_empty())
            .map(|tag| Self::detect(&tag))
            .unwrap_or_default()
    }

    fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ko => "ko",
        }
    }

    pub fn text(&self, text: Text) -> &'static str {
        use Language::{En, Ko};
        match (text, self) {
            (Text::Title, En) => "Your Life Clock",
            (Text::Title, Ko) => "나의 인생 시계",
            (Text::BirthDateLabel, En) => "Your birthdate",
            (Text::BirthDateLabel, Ko) => "생년월일",
            (Text::BirthDatePlaceholder, En) => "YYYY-MM-DD",
            (Text::BirthDatePlaceholder, Ko) => "YYYY-MM-DD",
            (Text::ExpectancyLabel, En) => "Life expectancy",
            (Text::ExpectancyLabel, Ko) => "예상 수명",
            (Text::ExpectancyPlaceholder, En) => "Enter your life expectancy",
            (Text::ExpectancyPlaceholder, Ko) => "예상 수명을 입력하세요",
            (Text::Submit, En) => "Show my life clock",
            (Text::Submit, Ko) => "나의 인생 시계 보기",
            (Text::Back, En) => "Go back",
            (Text::Back, Ko) => "뒤로 가기",
            (Text::ExplainerToggle, En) => "View calculation method",
            (Text::ExplainerToggle, Ko) => "계산 방법 보기",
            (Text::SwitchField, En) => "switch field",
            (Text::SwitchField, Ko) => "입력칸 이동",
            (Text::Quit, En) => "quit",
            (Text::Quit, Ko) => "종료",
            (Text::OtherLanguage, En) => "한국어",
            (Text::OtherLanguage, Ko) => "English",
            (Text::AppName, En) => "Life Clock",
            (Text::AppName, Ko) => "인생 시계",
            (Text::Dismiss, En) => "Press any key to continue",
            (Text::Dismiss, Ko) => "아무 키나 누르세요",
            (Text::Warning, En) => "Warning",
            (Text::Warning, Ko) => "경고",
            (Text::Error, En) => "Error",
            (Text::Error, Ko) => "오류",
        }
    }

    /// "You have lived 50.0% of your life."
    pub fn lived_sentence(&self, stats: &LifeStats) -> String {
        match self {
            Language::En => format!("You have lived {} of your life.", stats.percent_label()),
            Language::Ko => format!("당신은 지금 인생의 {} 를 살아왔습니다.", stats.percent_label()),
        }
    }

    /// Remaining days with the years/months/days breakdown
    pub fn remaining_sentence(&self, stats: &LifeStats) -> String {
        let remaining = group_thousands(stats.remaining_days);
        let total = group_thousands(stats.total_days);
        match self {
            Language::En => format!(
                "You have {} days ({}y {}m {}d) left out of {} days in your life.",
                remaining, stats.years_left, stats.months_left, stats.days_left, total
            ),
            Language::Ko => format!(
                "전체 {}일 중, 앞으로 {}일 - {}년 {}개월 {}일이 남아있습니다.",
                total, remaining, stats.years_left, stats.months_left, stats.days_left
            ),
        }
    }

    /// Lines of the calculation explainer
    pub fn explainer_lines(&self, stats: &LifeStats) -> Vec<String> {
        let as_of = stats.as_of.format("%Y-%m-%d");
        match self {
            Language::En => vec![
                format!("Calculated as of {}", as_of),
                "1 year = 365 days".to_string(),
                format!(
                    "1 minute in your life clock ≈ {:.2} days",
                    stats.life_minute_to_days
                ),
            ],
            Language::Ko => vec![
                format!("{} 기준으로 계산되었습니다", as_of),
                "1년 = 365일".to_string(),
                format!("인생 시계 1분 ≈ {:.2}일", stats.life_minute_to_days),
            ],
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
