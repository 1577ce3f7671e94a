use std::fmt;

/// Human facing sentiment of a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mood {
    Positive,
    Negative,
    Neutral,
}

impl Mood {
    pub const ALL: [Mood; 3] = [Mood::Positive, Mood::Negative, Mood::Neutral];

    /// Maps a raw classifier label code onto a mood.
    ///
    /// Unknown codes are neutral.
    pub fn from_label(label: &str) -> Self {
        match label {
            "LABEL_0" => Mood::Negative,
            "LABEL_1" => Mood::Neutral,
            "LABEL_2" => Mood::Positive,
            _ => Mood::Neutral,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Positive => "POSITIVE",
            Mood::Negative => "NEGATIVE",
            Mood::Neutral => "NEUTRAL",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
