//! Would-you-rather deck.

use serde::{Deserialize, Serialize};
use vp_engine::RandomSource;

/// One would-you-rather question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WyrQuestion {
    /// Stable id.
    pub id: u32,
    /// Left-hand option.
    pub option_a: &'static str,
    /// Right-hand option.
    pub option_b: &'static str,
    /// Theme label.
    pub theme: &'static str,
    /// Card emoji.
    pub emoji: &'static str,
}

const fn q(
    id: u32,
    option_a: &'static str,
    option_b: &'static str,
    theme: &'static str,
    emoji: &'static str,
) -> WyrQuestion {
    WyrQuestion {
        id,
        option_a,
        option_b,
        theme,
        emoji,
    }
}

/// Every question in the deck.
pub const QUESTIONS: &[WyrQuestion] = &[
    q(1, "Only eat pizza for the rest of your life", "Never eat pizza again", "Food", "🍕"),
    q(3, "Taste everything as incredibly spicy", "Taste everything as flavorless", "Food", "🌶️"),
    q(5, "Eat a cake that tastes like vegetables", "Eat vegetables that taste like cake", "Food", "🥕"),
    q(6, "Dream job but you can never take vacation", "Boring job but 6 months vacation per year", "Career", "💼"),
    q(7, "Be famous but everyone hates you", "Be unknown but everyone loves you", "Career", "⭐"),
    q(9, "Be CEO of a company you hate", "Be entry-level at a company you love", "Career", "👔"),
    q(12, "Be in a relationship where you love them more", "Be in a relationship where they love you more", "Romance", "💖"),
    q(13, "Have your ex become super successful and famous", "Have your ex become your boss", "Romance", "💔"),
    q(16, "Fight one horse-sized duck", "Fight 100 duck-sized horses", "Chaos", "🦆"),
    q(17, "Always speak in rhymes", "Always speak in questions?", "Chaos", "🎭"),
    q(19, "Sweat maple syrup", "Cry glitter", "Chaos", "✨"),
    q(21, "Have super fast internet but no privacy", "Have complete privacy but dial-up speed", "Tech", "💻"),
    q(23, "Have unlimited storage but everything auto-deletes after 24 hours", "Have tiny storage but everything lasts forever", "Tech", "💾"),
    q(26, "Always be 10 minutes late", "Always be 20 minutes early", "Lifestyle", "⏱️"),
    q(28, "Sleep 4 hours but feel fully rested", "Need 12 hours of sleep but wake up tired", "Lifestyle", "😴"),
    q(30, "Be invisible but can't turn it off", "Read minds but can't turn it off", "Powers", "👻"),
    q(35, "Get $1 million but work 80 hours/week forever", "Get $50k but work 20 hours/week forever", "Money", "💵"),
    q(37, "Go viral for something embarrassing", "Never get any likes or engagement ever", "Social", "📺"),
    q(40, "Sneeze confetti", "Hiccup the sound of dial-up internet", "Weird", "🎊"),
    q(46, "Visit every country but never remember the trip", "Visit one perfect place and remember every detail forever", "Travel", "🌎"),
];

/// Which side of a question was picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choice {
    /// Option A.
    A,
    /// Option B.
    B,
}

impl Choice {
    /// Parse `a`/`b` (or `left`/`right`).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" | "left" => Some(Self::A),
            "b" | "right" => Some(Self::B),
            _ => None,
        }
    }
}

/// Tally of a finished (or partial) run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WyrSummary {
    /// Questions answered.
    pub answered: usize,
    /// Times A was picked.
    pub picked_a: usize,
    /// Times B was picked.
    pub picked_b: usize,
}

/// A shuffled pass through the questions.
#[derive(Debug, Clone)]
pub struct WyrDeck {
    order: Vec<WyrQuestion>,
    answers: Vec<(u32, Choice)>,
}

impl WyrDeck {
    /// Shuffle the full question list once.
    pub fn shuffled<R: RandomSource>(rng: &mut R) -> Self {
        let mut order = QUESTIONS.to_vec();
        rng.shuffle(&mut order);
        Self {
            order,
            answers: Vec::new(),
        }
    }

    /// The question waiting for an answer.
    pub fn current(&self) -> Option<&WyrQuestion> {
        self.order.get(self.answers.len())
    }

    /// Answer the current question and advance. Returns false when finished.
    pub fn answer(&mut self, choice: Choice) -> bool {
        match self.current() {
            Some(question) => {
                let id = question.id;
                self.answers.push((id, choice));
                true
            }
            None => false,
        }
    }

    /// `(answered, total)`.
    pub fn progress(&self) -> (usize, usize) {
        (self.answers.len(), self.order.len())
    }

    /// Whether every question has an answer.
    pub fn is_finished(&self) -> bool {
        self.answers.len() >= self.order.len()
    }

    /// The choice recorded for question `id`.
    pub fn answer_for(&self, id: u32) -> Option<Choice> {
        self.answers
            .iter()
            .find(|(qid, _)| *qid == id)
            .map(|(_, c)| *c)
    }

    /// Questions in deck order.
    pub fn questions(&self) -> &[WyrQuestion] {
        &self.order
    }

    /// Count A versus B picks so far.
    pub fn summary(&self) -> WyrSummary {
        let picked_a = self.answers.iter().filter(|(_, c)| *c == Choice::A).count();
        WyrSummary {
            answered: self.answers.len(),
            picked_a,
            picked_b: self.answers.len() - picked_a,
        }
    }

    /// Clear answers and start over in the same order.
    pub fn restart(&mut self) {
        self.answers.clear();
    }
}
