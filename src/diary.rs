use crate::mood::Mood;

/// One scored submission.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    text: String,
    mood: Mood,
    confidence: String,
}

impl Entry {
    pub fn new(text: &str, mood: Mood, confidence: String) -> Self {
        Self {
            text: text.to_string(),
            mood,
            confidence,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }

    pub fn confidence(&self) -> &str {
        &self.confidence
    }
}

/// Append only log of the submissions made during one session.
#[derive(Debug, Default)]
pub struct MoodDiary {
    entries: Vec<Entry>,
}

impl MoodDiary {
    pub fn new() -> Self {
        Self {
            entries: vec![],
        }
    }

    pub fn record(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Oldest first.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Newest first, numbered from 1.
    pub fn recent(&self) -> impl Iterator<Item = (usize, &Entry)> {
        self.entries.iter().rev().enumerate().map(|(i, e)| (i + 1, e))
    }
}
