//! Option suggestions keyed off the decision context.
//!
//! Each topic contributes its pool when any of its keywords appears in the
//! lowercased context; the generic pool always joins. Suggestions overlapping
//! an existing option (substring either way, ignoring case) are dropped.

use vp_engine::RandomSource;

/// How many suggestions [`suggest`] returns at most.
pub const SUGGESTION_COUNT: usize = 2;

struct Topic {
    keywords: &'static [&'static str],
    pool: &'static [&'static str],
}

const TOPICS: &[Topic] = &[
    Topic {
        keywords: &["eat", "food", "dinner", "lunch"],
        pool: &[
            "Try something spicy and regret it later 🌶️💀",
            "Order from that place you've been avoiding 🤔",
            "Make a weird fusion combo 🌮🍕",
            "Go full goblin mode with snacks 🧌🍿",
            "Cook something you can't pronounce 👨‍🍳❓",
        ],
    },
    Topic {
        keywords: &["do", "activity", "today", "weekend"],
        pool: &[
            "Touch grass (literally go outside) 🌱",
            "Learn a completely useless skill 🎪",
            "Text that person you've been avoiding 📱👻",
            "Reorganize something unnecessarily 📦✨",
            "Have a solo dance party 💃🕺",
        ],
    },
    Topic {
        keywords: &["wear", "outfit", "clothes"],
        pool: &[
            "Dress like your favorite fictional character 🎭",
            "Wear something that sparks joy ✨👗",
            "Go full cottagecore aesthetic 🌻🧺",
            "Channel your inner villain era 😈🖤",
            "Comfort over style (valid choice) 🛋️👕",
        ],
    },
    Topic {
        keywords: &["buy", "purchase", "shopping"],
        pool: &[
            "Buy something completely impractical 🦄",
            "Invest in your future self 📈💪",
            "Get something that brings chaos 🌪️",
            "Support a small business instead 🏪💜",
            "Wait and see if you still want it tomorrow ⏰🤔",
        ],
    },
    Topic {
        keywords: &["go", "travel", "visit"],
        pool: &[
            "Go somewhere you've never been 🗺️✨",
            "Take the scenic route 🌄🚗",
            "Visit that place your friend recommended 👥📍",
            "Stay local and explore like a tourist 📸🏠",
            "Follow your GPS to somewhere random 🧭❓",
        ],
    },
];

/// Always offered, whatever the context.
pub const GENERIC_SUGGESTIONS: &[&str] = &[
    "Do the opposite of what you'd normally do 🙃",
    "Ask a stranger for their opinion 👥❓",
    "Make it a group decision 🗳️",
    "Sleep on it (procrastination is valid) 😴",
    "Close your eyes and point 👆✨",
];

/// Every candidate for `context`, before filtering, in topic order.
pub fn candidates(context: &str) -> Vec<&'static str> {
    let context = context.to_lowercase();
    TOPICS
        .iter()
        .filter(|topic| topic.keywords.iter().any(|k| context.contains(k)))
        .flat_map(|topic| topic.pool.iter().copied())
        .chain(GENERIC_SUGGESTIONS.iter().copied())
        .collect()
}

/// Up to [`SUGGESTION_COUNT`] suggestions for `context` that don't overlap `existing`.
pub fn suggest<R, S>(context: &str, existing: &[S], rng: &mut R) -> Vec<String>
where
    R: RandomSource,
    S: AsRef<str>,
{
    let existing: Vec<String> = existing
        .iter()
        .map(|o| o.as_ref().trim().to_lowercase())
        .filter(|o| !o.is_empty())
        .collect();

    let mut pool: Vec<&str> = candidates(context)
        .into_iter()
        .filter(|s| {
            let s = s.to_lowercase();
            !existing.iter().any(|o| s.contains(o.as_str()) || o.contains(s.as_str()))
        })
        .collect();

    rng.shuffle(&mut pool);
    pool.into_iter()
        .take(SUGGESTION_COUNT)
        .map(str::to_string)
        .collect()
}
