use rand::seq::SliceRandom;
use rand::Rng;

use crate::mood::Mood;

const POSITIVE: &[&str] = &[
    "Keep your face always toward the sunshine\u{2014}and shadows will fall behind you.",
    "Every day may not be good... but there\u{2019}s something good in every day.",
    "Believe you can and you're halfway there.",
    "Positive thinking evokes more energy, more initiative, more happiness.",
    "The best way to predict the future is to create it.",
    "Start each day with a positive thought and a grateful heart.",
    "Your vibe attracts your tribe.",
    "Happiness is not by chance, but by choice.",
    "You are capable of amazing things.",
    "Choose to be optimistic\u{2014}it feels better.",
];

const NEGATIVE: &[&str] = &[
    "Even the darkest night will end and the sun will rise.",
    "Tough times never last, but tough people do.",
    "It's okay to not be okay. Just don't give up.",
    "This too shall pass.",
    "You don\u{2019}t have to control your thoughts. You just have to stop letting them control you.",
    "Cry. Forgive. Learn. Move on. Let your tears water the seeds of your future happiness.",
    "Healing takes time, and that\u{2019}s okay.",
    "Sometimes, just surviving another day is courage enough.",
    "Your current situation is not your final destination.",
    "The comeback is always stronger than the setback.",
];

const NEUTRAL: &[&str] = &[
    "Stay focused and keep moving forward.",
    "Let things flow naturally forward in whatever way they like.",
    "Every moment is a fresh beginning.",
    "Silence is sometimes the best answer.",
    "Not every situation needs a reaction.",
    "Be still and calm, even in chaos.",
    "What you do makes a difference, and you have to decide what kind of difference you want to make.",
    "Sometimes you just need to pause and reset.",
    "Balance is not something you find, it\u{2019}s something you create.",
    "Everything comes to you at the right time.",
];

/// Every quote that may be suggested for `mood`.
pub fn quotes_for(mood: Mood) -> &'static [&'static str] {
    match mood {
        Mood::Positive => POSITIVE,
        Mood::Negative => NEGATIVE,
        Mood::Neutral => NEUTRAL,
    }
}

/// Picks one quote for `mood` uniformly at random.
pub fn pick_quote<R: Rng + ?Sized>(mood: Mood, rng: &mut R) -> &'static str {
    quotes_for(mood)
        .choose(rng)
        .or_else(|| NEUTRAL.choose(rng))
        .copied()
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn every_mood_has_quotes() {
        for mood in Mood::ALL.iter() {
            assert_eq!(quotes_for(*mood).len(), 10);
        }
    }

    #[test]
    fn positive_quote_is_from_positive_list() {
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let quote = pick_quote(Mood::Positive, &mut rng);
            assert!(POSITIVE.contains(&quote), "{} is not a positive quote", quote);
        }
    }

    #[test]
    fn negative_and_neutral_stay_in_their_lists() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            assert!(NEGATIVE.contains(&pick_quote(Mood::Negative, &mut rng)));
            assert!(NEUTRAL.contains(&pick_quote(Mood::Neutral, &mut rng)));
        }
    }

    #[test]
    fn selection_covers_the_list() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..1000 {
            seen.insert(pick_quote(Mood::Neutral, &mut rng));
        }
        assert_eq!(seen.len(), NEUTRAL.len());
    }
}
