use chrono::{DateTime, Utc};

/// A motivational quote shown under the clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
}

pub const QUOTES: &[Quote] = &[
    Quote {
        text: "Life is long if you know how to use it.",
        author: "Seneca",
    },
    Quote {
        text: "Do not act as if you were going to live ten thousand years.",
        author: "Marcus Aurelius",
    },
    Quote {
        text: "Seize the day, put very little trust in tomorrow.",
        author: "Horace",
    },
    Quote {
        text: "Lost time is never found again.",
        author: "Benjamin Franklin",
    },
    Quote {
        text: "The bad news is time flies. The good news is you're the pilot.",
        author: "Michael Altshuler",
    },
    Quote {
        text: "It is not that we have a short time to live, but that we waste a lot of it.",
        author: "Seneca",
    },
];

/// Quote for the given instant, advancing every `rotate_secs` seconds.
/// A zero period pins the first quote.
pub fn quote_at(now: DateTime<Utc>, rotate_secs: u64) -> &'static Quote {
    if rotate_secs == 0 {
        return &QUOTES[0];
    }
    let slot = now.timestamp().max(0) as u64 / rotate_secs;
    &QUOTES[(slot % QUOTES.len() as u64) as usize]
}

impl std::fmt::Display for Quote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\" – {}", self.text, self.author)
    }
}
