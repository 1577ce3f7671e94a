use rand::Rng;

use log::*;

use crate::diary::{Entry, MoodDiary};
use crate::mood::Mood;
use crate::quotes::pick_quote;
use crate::senti::Classifier;
use crate::Error;

/// Longest input the sentiment models accept.
pub const MAX_INPUT_CHARS: usize = 512;

/// What one submission produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub mood: Mood,
    pub confidence: String,
    pub quote: &'static str,
}

/// Scores submissions and keeps the session's diary.
pub struct MoodTracker<C> {
    classifier: C,
    diary: MoodDiary,
    max_chars: usize,
}

impl<C: Classifier> MoodTracker<C> {
    pub fn new(classifier: C) -> Self {
        Self::with_limit(classifier, MAX_INPUT_CHARS)
    }

    pub fn with_limit(classifier: C, max_chars: usize) -> Self {
        Self {
            classifier,
            diary: MoodDiary::new(),
            max_chars,
        }
    }

    pub fn diary(&self) -> &MoodDiary {
        &self.diary
    }

    pub fn analyse(&mut self, text: &str) -> Result<Option<Analysis>, Error> {
        self.analyse_with(text, &mut rand::thread_rng())
    }

    /// Blank text yields `Ok(None)` and leaves the diary untouched.
    pub fn analyse_with<R: Rng + ?Sized>(
        &mut self,
        text: &str,
        rng: &mut R,
    ) -> Result<Option<Analysis>, Error> {
        if text.trim().is_empty() {
            return Ok(None);
        }

        let scored = self.classifier.classify(truncate(text, self.max_chars))?;
        let mood = Mood::from_label(&scored.label);
        let confidence = format_confidence(scored.score);
        debug!("{} scored {} ({})", scored.label, mood, confidence);

        self.diary.record(Entry::new(text, mood, confidence.clone()));

        Ok(Some(Analysis {
            mood,
            confidence,
            quote: pick_quote(mood, rng),
        }))
    }
}

/// The first `max_chars` characters of `text`.
pub fn truncate(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

pub fn format_confidence(score: f64) -> String {
    format!("{:.1}%", score * 100.0)
}
