//! Achievement tracking.
//!
//! Achievements unlock once, from counters fed by every decision the session
//! makes. "Decide again" runs build a streak that any fresh decision resets.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vp_engine::Mode;

/// Consecutive "decide again" runs for [`AchievementId::Indecisive`].
pub const INDECISIVE_STREAK: u32 = 5;
/// Random-mode decisions for [`AchievementId::ChaosLover`].
pub const CHAOS_LOVER_USES: u32 = 10;
/// Logic-mode decisions for [`AchievementId::LogicalThinker`].
pub const LOGICAL_THINKER_USES: u32 = 5;

/// Which achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AchievementId {
    /// Made a first decision.
    FirstDecision,
    /// Used sassy mode.
    SassyUser,
    /// Ran "decide again" several times in a row.
    Indecisive,
    /// Used random mode a lot.
    ChaosLover,
    /// Used logic mode consistently.
    LogicalThinker,
}

impl AchievementId {
    /// All achievements in display order.
    pub fn all() -> &'static [Self] {
        &[
            Self::FirstDecision,
            Self::SassyUser,
            Self::Indecisive,
            Self::ChaosLover,
            Self::LogicalThinker,
        ]
    }

    /// Stable string id.
    pub fn key(self) -> &'static str {
        match self {
            Self::FirstDecision => "first-decision",
            Self::SassyUser => "sassy-user",
            Self::Indecisive => "indecisive",
            Self::ChaosLover => "chaos-lover",
            Self::LogicalThinker => "logical-thinker",
        }
    }

    fn title(self) -> &'static str {
        match self {
            Self::FirstDecision => "First Decision Made",
            Self::SassyUser => "Went Full Sassy",
            Self::Indecisive => "Undecided Even After Picking",
            Self::ChaosLover => "Chaos Enjoyer",
            Self::LogicalThinker => "Big Brain Energy",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Self::FirstDecision => "Made your very first decision!",
            Self::SassyUser => "Used Sassy Mode like the icon you are",
            Self::Indecisive => "Hit \"Run It Back\" 5 times in a row",
            Self::ChaosLover => "Used Random mode 10 times",
            Self::LogicalThinker => "Used Logic mode consistently",
        }
    }

    fn emoji(self) -> &'static str {
        match self {
            Self::FirstDecision => "🎉",
            Self::SassyUser => "😏",
            Self::Indecisive => "🤔",
            Self::ChaosLover => "🎲",
            Self::LogicalThinker => "🧠",
        }
    }
}

/// An achievement and its unlock state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    /// Which achievement.
    pub id: AchievementId,
    /// Toast title.
    pub title: String,
    /// What it takes.
    pub description: String,
    /// Badge emoji.
    pub emoji: String,
    /// Whether it has been earned.
    pub unlocked: bool,
    /// When it was earned.
    pub unlocked_at: Option<DateTime<Utc>>,
}

impl Achievement {
    fn locked(id: AchievementId) -> Self {
        Self {
            id,
            title: id.title().to_string(),
            description: id.description().to_string(),
            emoji: id.emoji().to_string(),
            unlocked: false,
            unlocked_at: None,
        }
    }
}

/// Whether a decision was fresh or a rerun of the previous request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionKind {
    /// A new request.
    Fresh,
    /// "Decide again" on the previous request.
    Again,
}

/// Tracks counters and unlocks achievements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AchievementTracker {
    achievements: Vec<Achievement>,
    random_uses: u32,
    logic_uses: u32,
    again_streak: u32,
}

impl Default for AchievementTracker {
    fn default() -> Self {
        Self {
            achievements: AchievementId::all()
                .iter()
                .copied()
                .map(Achievement::locked)
                .collect(),
            random_uses: 0,
            logic_uses: 0,
            again_streak: 0,
        }
    }
}

impl AchievementTracker {
    /// Create a tracker with everything locked.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one decision. Returns the achievements it newly unlocked.
    pub fn observe(
        &mut self,
        mode: Option<Mode>,
        kind: DecisionKind,
        now: DateTime<Utc>,
    ) -> Vec<Achievement> {
        match kind {
            DecisionKind::Fresh => self.again_streak = 0,
            DecisionKind::Again => self.again_streak += 1,
        }
        match mode {
            Some(Mode::Random) => self.random_uses += 1,
            Some(Mode::Logic) => self.logic_uses += 1,
            _ => {}
        }

        let mut earned = vec![AchievementId::FirstDecision];
        if mode == Some(Mode::Sassy) {
            earned.push(AchievementId::SassyUser);
        }
        if self.again_streak >= INDECISIVE_STREAK {
            earned.push(AchievementId::Indecisive);
        }
        if self.random_uses >= CHAOS_LOVER_USES {
            earned.push(AchievementId::ChaosLover);
        }
        if self.logic_uses >= LOGICAL_THINKER_USES {
            earned.push(AchievementId::LogicalThinker);
        }

        earned
            .into_iter()
            .filter_map(|id| self.unlock(id, now))
            .collect()
    }

    /// Unlock `id` if still locked, returning the unlocked achievement.
    pub fn unlock(&mut self, id: AchievementId, now: DateTime<Utc>) -> Option<Achievement> {
        let achievement = self.achievements.iter_mut().find(|a| a.id == id)?;
        if achievement.unlocked {
            return None;
        }
        achievement.unlocked = true;
        achievement.unlocked_at = Some(now);
        tracing::debug!(target: "vp_session", achievement = id.key(), "achievement unlocked");
        Some(achievement.clone())
    }

    /// All achievements, locked and unlocked.
    pub fn all(&self) -> &[Achievement] {
        &self.achievements
    }

    /// Number unlocked so far.
    pub fn unlocked_count(&self) -> usize {
        self.achievements.iter().filter(|a| a.unlocked).count()
    }

    /// Whether `id` has been unlocked.
    pub fn is_unlocked(&self, id: AchievementId) -> bool {
        self.achievements.iter().any(|a| a.id == id && a.unlocked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(unlocked: &[Achievement]) -> Vec<AchievementId> {
        unlocked.iter().map(|a| a.id).collect()
    }

    #[test]
    fn starts_locked() {
        let t = AchievementTracker::new();
        assert_eq!(t.all().len(), 5);
        assert_eq!(t.unlocked_count(), 0);
    }

    #[test]
    fn first_decision_unlocks_once() {
        let mut t = AchievementTracker::new();
        let first = t.observe(Some(Mode::Ai), DecisionKind::Fresh, Utc::now());
        assert_eq!(ids(&first), vec![AchievementId::FirstDecision]);
        let second = t.observe(Some(Mode::Ai), DecisionKind::Fresh, Utc::now());
        assert!(second.is_empty());
        assert!(t.all()[0].unlocked_at.is_some());
    }

    #[test]
    fn sassy_unlocks_on_first_use() {
        let mut t = AchievementTracker::new();
        let got = t.observe(Some(Mode::Sassy), DecisionKind::Fresh, Utc::now());
        assert_eq!(
            ids(&got),
            vec![AchievementId::FirstDecision, AchievementId::SassyUser]
        );
    }

    #[test]
    fn indecisive_needs_consecutive_reruns() {
        let mut t = AchievementTracker::new();
        t.observe(None, DecisionKind::Fresh, Utc::now());
        for _ in 0..4 {
            t.observe(None, DecisionKind::Again, Utc::now());
        }
        // A fresh decision breaks the streak.
        t.observe(None, DecisionKind::Fresh, Utc::now());
        for _ in 0..4 {
            t.observe(None, DecisionKind::Again, Utc::now());
        }
        assert!(!t.is_unlocked(AchievementId::Indecisive));
        let got = t.observe(None, DecisionKind::Again, Utc::now());
        assert_eq!(ids(&got), vec![AchievementId::Indecisive]);
    }

    #[test]
    fn chaos_lover_after_ten_random() {
        let mut t = AchievementTracker::new();
        for _ in 0..9 {
            t.observe(Some(Mode::Random), DecisionKind::Fresh, Utc::now());
        }
        assert!(!t.is_unlocked(AchievementId::ChaosLover));
        t.observe(Some(Mode::Random), DecisionKind::Fresh, Utc::now());
        assert!(t.is_unlocked(AchievementId::ChaosLover));
    }

    #[test]
    fn logical_thinker_after_five_logic() {
        let mut t = AchievementTracker::new();
        for _ in 0..5 {
            t.observe(Some(Mode::Logic), DecisionKind::Fresh, Utc::now());
        }
        assert!(t.is_unlocked(AchievementId::LogicalThinker));
        assert_eq!(t.unlocked_count(), 2);
    }

    #[test]
    fn serde_roundtrip() {
        let mut t = AchievementTracker::new();
        t.observe(Some(Mode::Sassy), DecisionKind::Fresh, Utc::now());
        let json = serde_json::to_string(&t).unwrap();
        assert!(json.contains("\"sassy-user\""));
        let t2: AchievementTracker = serde_json::from_str(&json).unwrap();
        assert_eq!(t2.unlocked_count(), 2);
    }
}
