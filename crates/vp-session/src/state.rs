//! Application state and the interactive command processor.
//!
//! `AppState` owns everything that outlives a single decision: the profile,
//! the current mood and mode, pending options, history and achievements. The
//! engine itself stays stateless; each decision is a fresh request built from
//! this state.

use chrono::{Local, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;
use uuid::Uuid;
use vp_engine::{
    DecisionRequest, DecisionResult, Engine, FlavorTables, Mode, ModeSpec, Mood,
};

use crate::achievements::{Achievement, AchievementTracker, DecisionKind};
use crate::config::SessionConfig;
use crate::dilemma::dilemma_for;
use crate::error::{SessionError, SessionResult};
use crate::history::DecisionHistory;
use crate::party::PartySession;
use crate::profile::UserProfile;
use crate::quiz::{QUESTIONS, QuizAnswer, score};
use crate::suggest::suggest;
use crate::wyr::{Choice, WyrDeck, WyrQuestion};

/// What one decision produced.
#[derive(Debug, Clone)]
pub struct DecisionOutcome {
    /// The engine's result.
    pub result: DecisionResult,
    /// Achievements this decision unlocked.
    pub unlocked: Vec<Achievement>,
    /// Id of the history entry it was recorded under.
    pub history_id: Uuid,
}

/// Session state around the decision engine.
pub struct AppState {
    engine: Engine,
    profile: UserProfile,
    mood: Option<Mood>,
    mode: ModeSpec,
    options: Vec<String>,
    context: String,
    last_request: Option<DecisionRequest>,
    history: DecisionHistory,
    achievements: AchievementTracker,
    party: Option<PartySession>,
    wyr: Option<WyrDeck>,
    rng: StdRng,
}

impl AppState {
    /// Create a session with the built-in flavor tables.
    pub fn new(config: SessionConfig) -> Self {
        Self::with_tables(config, FlavorTables::default())
    }

    /// Create a session with custom flavor tables.
    pub fn with_tables(config: SessionConfig, tables: FlavorTables) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let mut profile = UserProfile::new();
        profile.set_chaos_level(config.initial_chaos);

        Self {
            engine: Engine::new(config.engine, tables),
            profile,
            mood: None,
            mode: ModeSpec::Known(Mode::Random),
            options: Vec::new(),
            context: String::new(),
            last_request: None,
            history: DecisionHistory::with_limit(config.history_limit),
            achievements: AchievementTracker::new(),
            party: None,
            wyr: None,
            rng,
        }
    }

    /// The decision engine.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// The user profile.
    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// The current mood.
    pub fn mood(&self) -> Option<Mood> {
        self.mood
    }

    /// Set or clear the mood.
    pub fn set_mood(&mut self, mood: Option<Mood>) {
        self.mood = mood;
    }

    /// The mode `pick` uses when none is given.
    pub fn mode(&self) -> &ModeSpec {
        &self.mode
    }

    /// Options entered so far.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// The current context line.
    pub fn context(&self) -> &str {
        &self.context
    }

    /// Decision history.
    pub fn history(&self) -> &DecisionHistory {
        &self.history
    }

    /// Achievement tracker.
    pub fn achievements(&self) -> &AchievementTracker {
        &self.achievements
    }

    /// The party in progress, if any.
    pub fn party(&self) -> Option<&PartySession> {
        self.party.as_ref()
    }

    /// The would-you-rather deck being played, if any.
    pub fn wyr(&self) -> Option<&WyrDeck> {
        self.wyr.as_ref()
    }

    /// Decide among `options` with the session's mood and chaos level.
    pub fn decide<I, S>(
        &mut self,
        options: I,
        mode: &str,
        context: &str,
    ) -> SessionResult<DecisionOutcome>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let request = DecisionRequest::new(options)
            .with_mode(mode)
            .with_context(context);
        self.decide_request(request)
    }

    /// Run a prepared request as a fresh decision, under the session's mood
    /// and chaos level.
    pub fn decide_request(&mut self, request: DecisionRequest) -> SessionResult<DecisionOutcome> {
        let request = request
            .with_mood(self.mood)
            .with_chaos(u32::from(self.profile.chaos_level.value()));
        self.run(request, DecisionKind::Fresh)
    }

    /// Run the previous request again, unchanged.
    pub fn decide_again(&mut self) -> SessionResult<DecisionOutcome> {
        let request = self
            .last_request
            .clone()
            .ok_or(SessionError::NothingToRepeat)?;
        self.run(request, DecisionKind::Again)
    }

    /// Flag a history entry (1 = newest) as regretted.
    pub fn regret(&mut self, position: usize) -> SessionResult<&str> {
        let id = self
            .history
            .nth(position)
            .map(|e| e.id)
            .ok_or(SessionError::HistoryNotFound(position))?;
        self.history.mark_regretted(id);
        Ok(self
            .history
            .nth(position)
            .map_or("", |e| e.selected_option.as_str()))
    }

    fn run(
        &mut self,
        request: DecisionRequest,
        kind: DecisionKind,
    ) -> SessionResult<DecisionOutcome> {
        let result = self.engine.decide(&request, &mut self.rng)?;
        let now = Utc::now();
        let history_id = self.history.record(result.history_record(now));
        let unlocked = self.achievements.observe(result.mode.mode(), kind, now);
        tracing::info!(
            target: "vp_session",
            mode = %result.mode,
            selected = %result.selected_option,
            again = kind == DecisionKind::Again,
            "decision made"
        );
        self.last_request = Some(request);

        Ok(DecisionOutcome {
            result,
            unlocked,
            history_id,
        })
    }

    /// Process a line of user input and return a response.
    pub fn process(&mut self, input: &str) -> SessionResult<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
        let cmd = parts[0].to_lowercase();
        let rest = parts.get(1).map(|s| s.trim()).unwrap_or("");

        match cmd.as_str() {
            "option" => self.do_option(rest),
            "options" => Ok(self.list_options()),
            "context" => self.do_context(rest),
            "mode" => self.do_mode(rest),
            "pick" | "decide" => self.do_pick(rest),
            "again" => self.do_again(),
            "mood" => self.do_mood(rest),
            "chaos" => self.do_chaos(rest),
            "dilemma" => self.do_dilemma(),
            "suggest" => self.do_suggest(),
            "party" => self.do_party(rest),
            "quiz" => self.do_quiz(rest),
            "wyr" => self.do_wyr(rest),
            "history" => self.do_history(),
            "export" => self.do_export(rest),
            "regret" => self.do_regret(rest),
            "achievements" => Ok(self.list_achievements()),
            "status" => Ok(self.status()),
            "help" => Ok(HELP.to_string()),
            "quit" | "q" => Ok("Goodbye!".to_string()),
            other => Err(SessionError::UnknownCommand(other.to_string())),
        }
    }

    fn do_option(&mut self, rest: &str) -> SessionResult<String> {
        let parts: Vec<&str> = rest.splitn(2, ' ').collect();
        let sub = parts[0].to_lowercase();
        let arg = parts.get(1).map(|s| s.trim()).unwrap_or("");

        match sub.as_str() {
            "add" if !arg.is_empty() => {
                let max = self.engine.config().max_options;
                if self.options.len() >= max {
                    return Err(SessionError::InvalidChoice(format!(
                        "at most {max} options"
                    )));
                }
                self.options.push(arg.to_string());
                Ok(format!("Option {} added: {arg}", self.options.len()))
            }
            "clear" => {
                self.options.clear();
                Ok("Options cleared.".to_string())
            }
            _ => Err(SessionError::InvalidChoice(
                "usage: option add <text> | option clear".to_string(),
            )),
        }
    }

    fn list_options(&self) -> String {
        if self.options.is_empty() {
            return "No options yet.".to_string();
        }
        let mut out = format!("Options ({}):\n", self.options.len());
        for (i, option) in self.options.iter().enumerate() {
            out.push_str(&format!("  {}. {option}\n", i + 1));
        }
        out.trim_end().to_string()
    }

    fn do_context(&mut self, rest: &str) -> SessionResult<String> {
        self.context = rest.to_string();
        if rest.is_empty() {
            Ok("Context cleared.".to_string())
        } else {
            Ok(format!("Context: {rest}"))
        }
    }

    fn do_mode(&mut self, rest: &str) -> SessionResult<String> {
        if rest.is_empty() {
            return Ok(format!("Mode: {} {}", self.mode.emoji(), self.mode.title()));
        }
        self.mode = ModeSpec::parse(rest);
        match &self.mode {
            ModeSpec::Known(mode) => Ok(format!("Mode set: {} {}", mode.emoji(), mode.title())),
            ModeSpec::Unknown(raw) => Ok(format!(
                "Unknown mode '{raw}', picks will fall back to the first option."
            )),
        }
    }

    fn do_pick(&mut self, rest: &str) -> SessionResult<String> {
        let mode = if rest.is_empty() {
            self.mode.clone()
        } else {
            ModeSpec::parse(rest)
        };
        let request = DecisionRequest::new(self.options.clone())
            .with_mode_spec(mode.clone())
            .with_context(self.context.clone());
        let outcome = self.decide_request(request)?;
        // the mode sticks only once a pick went through
        self.mode = mode;
        Ok(render_outcome(&outcome))
    }

    fn do_suggest(&mut self) -> SessionResult<String> {
        let max = self.engine.config().max_options;
        let room = max.saturating_sub(self.options.len());
        if room == 0 {
            return Err(SessionError::InvalidChoice(format!(
                "already at {max} options"
            )));
        }
        let picks = suggest(&self.context, &self.options, &mut self.rng);
        if picks.is_empty() {
            return Ok("No fresh ideas. Your options cover it all.".to_string());
        }
        let mut out = String::from("🤖 Suggested:");
        for pick in picks.into_iter().take(room) {
            out.push_str(&format!("\n  + {pick}"));
            self.options.push(pick);
        }
        Ok(out)
    }

    fn do_party(&mut self, rest: &str) -> SessionResult<String> {
        let parts: Vec<&str> = rest.splitn(2, ' ').collect();
        let sub = parts[0].to_lowercase();
        let arg = parts.get(1).map(|s| s.trim()).unwrap_or("");

        match sub.as_str() {
            "start" => {
                let party = PartySession::start(arg.split(','), self.context.clone())?;
                let out = format!(
                    "🎉 Party started with {}.\n{}'s turn: party add <option>",
                    party.players().join(", "),
                    party.current_player()
                );
                self.party = Some(party);
                Ok(out)
            }
            "add" => {
                let party = self.party.as_mut().ok_or_else(no_party)?;
                let suggestion = party.suggest(arg)?;
                let out = format!("{} suggests: {}", suggestion.player, suggestion.option);
                Ok(format!("{out}\n{}'s turn.", party.current_player()))
            }
            "finish" => {
                let request = self.party.as_ref().ok_or_else(no_party)?.finish()?;
                let outcome = self.decide_request(request)?;
                self.party = None;
                Ok(render_outcome(&outcome))
            }
            "cancel" => {
                self.party = None;
                Ok("Party's over.".to_string())
            }
            "" => {
                let party = self.party.as_ref().ok_or_else(no_party)?;
                let mut out = format!(
                    "Players: {}\nTurn: {}\n",
                    party.players().join(", "),
                    party.current_player()
                );
                for s in party.suggestions() {
                    out.push_str(&format!("  - {} ({})\n", s.option, s.player));
                }
                Ok(out.trim_end().to_string())
            }
            _ => Err(SessionError::InvalidChoice(
                "usage: party start <name, name, ...> | add <option> | finish | cancel"
                    .to_string(),
            )),
        }
    }

    fn do_quiz(&mut self, rest: &str) -> SessionResult<String> {
        if rest.is_empty() {
            let mut out = String::from("Personality quiz: answer with quiz <ABCD>\n");
            for (i, q) in QUESTIONS.iter().enumerate() {
                out.push_str(&format!("{}. {}\n", i + 1, q.prompt));
                for (letter, answer) in ['A', 'B', 'C', 'D'].iter().zip(q.answers) {
                    out.push_str(&format!("   {letter}) {answer}\n"));
                }
            }
            return Ok(out.trim_end().to_string());
        }
        let answers = QuizAnswer::parse_all(rest)?;
        if answers.len() != QUESTIONS.len() {
            return Err(SessionError::InvalidChoice(format!(
                "expected {} answers, got {}",
                QUESTIONS.len(),
                answers.len()
            )));
        }
        let archetype = score(&answers);
        self.profile.set_archetype(archetype);
        Ok(format!(
            "{} You are {}\n{}",
            archetype.mascot(),
            archetype.name(),
            archetype.description()
        ))
    }

    fn do_wyr(&mut self, rest: &str) -> SessionResult<String> {
        let sub = rest.to_lowercase();
        match sub.as_str() {
            "restart" => {
                if let Some(deck) = self.wyr.as_mut() {
                    deck.restart();
                }
            }
            "summary" => {
                let deck = self.wyr.as_ref().ok_or_else(|| {
                    SessionError::InvalidChoice("no would-you-rather game yet, type 'wyr'".into())
                })?;
                return Ok(wyr_summary(deck));
            }
            "" => {}
            other => {
                let choice = Choice::parse(other).ok_or_else(|| {
                    SessionError::InvalidChoice(
                        "usage: wyr [a|b|summary|restart]".to_string(),
                    )
                })?;
                let deck = self.wyr.as_mut().ok_or_else(|| {
                    SessionError::InvalidChoice("no would-you-rather game yet, type 'wyr'".into())
                })?;
                deck.answer(choice);
            }
        }

        let rng = &mut self.rng;
        let deck = self.wyr.get_or_insert_with(|| WyrDeck::shuffled(rng));
        match deck.current() {
            Some(q) => {
                let (answered, total) = deck.progress();
                Ok(render_wyr(q, answered + 1, total))
            }
            None => Ok(wyr_summary(deck)),
        }
    }

    fn do_again(&mut self) -> SessionResult<String> {
        let outcome = self.decide_again()?;
        Ok(render_outcome(&outcome))
    }

    fn do_mood(&mut self, rest: &str) -> SessionResult<String> {
        match rest.to_lowercase().as_str() {
            "" => Ok(match self.mood {
                Some(mood) => format!("Mood: {} {mood}", mood.emoji()),
                None => "No mood set.".to_string(),
            }),
            "none" | "off" | "clear" => {
                self.mood = None;
                Ok("Mood cleared.".to_string())
            }
            other => {
                let mood = Mood::parse(other).ok_or_else(|| {
                    SessionError::InvalidChoice(format!(
                        "unknown mood '{other}', use: chaotic, chill, productivity, sassy, logical, none"
                    ))
                })?;
                self.mood = Some(mood);
                Ok(format!("Mood set: {} {}", mood.emoji(), mood.description()))
            }
        }
    }

    fn do_chaos(&mut self, rest: &str) -> SessionResult<String> {
        if !rest.is_empty() {
            let value: u32 = rest.parse().map_err(|_| {
                SessionError::InvalidChoice(format!("chaos must be 0-100, got '{rest}'"))
            })?;
            self.profile.set_chaos_level(value);
        }
        let chaos = self.profile.chaos_level;
        let mut out = format!("Chaos: {chaos}/100 {}", chaos.vibe());
        if chaos.shuffles(self.engine.config().chaos_threshold) {
            out.push_str(" (options get shuffled)");
        }
        Ok(out)
    }

    fn do_dilemma(&mut self) -> SessionResult<String> {
        let dilemma = dilemma_for(Local::now().date_naive());
        self.options = dilemma.options.iter().map(|o| o.to_string()).collect();
        self.context = dilemma.question.to_string();
        let mut out = format!(
            "🌅 Daily Dilemma ({})\n{}\n",
            dilemma.category, dilemma.question
        );
        out.push_str(&self.list_options());
        out.push_str("\nType 'pick' to decide.");
        Ok(out)
    }

    fn do_history(&self) -> SessionResult<String> {
        if self.history.is_empty() {
            return Ok("No decisions yet.".to_string());
        }
        let mut out = format!(
            "History ({} of max {}):\n",
            self.history.len(),
            self.history.limit()
        );
        for (i, entry) in self.history.entries().iter().enumerate() {
            let mark = if entry.regretted { " 😬" } else { "" };
            out.push_str(&format!(
                "  {}. {} [{}]{mark}\n",
                i + 1,
                entry.selected_option,
                entry.mode
            ));
        }
        Ok(out.trim_end().to_string())
    }

    fn do_export(&self, format: &str) -> SessionResult<String> {
        match format.to_lowercase().as_str() {
            "markdown" | "md" | "" => Ok(self.history.export_markdown()),
            "text" | "txt" => Ok(self.history.export_text()),
            "json" => self.history.export_json(),
            other => Err(SessionError::InvalidChoice(format!(
                "unknown format '{other}', use: markdown, text, json"
            ))),
        }
    }

    fn do_regret(&mut self, rest: &str) -> SessionResult<String> {
        let position: usize = rest.parse().map_err(|_| {
            SessionError::InvalidChoice("usage: regret <history number>".to_string())
        })?;
        let option = self.regret(position)?;
        Ok(format!("Noted. You regret picking {option}."))
    }

    fn list_achievements(&self) -> String {
        let mut out = format!(
            "Achievements ({}/{}):\n",
            self.achievements.unlocked_count(),
            self.achievements.all().len()
        );
        for a in self.achievements.all() {
            let mark = if a.unlocked { "✅" } else { "🔒" };
            out.push_str(&format!(
                "  {mark} {} {} - {}\n",
                a.emoji, a.title, a.description
            ));
        }
        out.trim_end().to_string()
    }

    fn status(&self) -> String {
        let chaos = self.profile.chaos_level;
        let mut out = format!("Mode: {} {}\n", self.mode.emoji(), self.mode.title());
        match self.mood {
            Some(mood) => out.push_str(&format!("Mood: {} {mood}\n", mood.emoji())),
            None => out.push_str("Mood: none\n"),
        }
        out.push_str(&format!("Chaos: {chaos}/100 {}\n", chaos.vibe()));
        if let Some(party) = &self.party {
            out.push_str(&format!(
                "Party: {} players, {} suggestions\n",
                party.players().len(),
                party.suggestions().len()
            ));
        }
        if let Some(archetype) = self.profile.archetype {
            out.push_str(&format!("Personality: {} {archetype}\n", archetype.mascot()));
        }
        out.push_str(&format!("Options: {}\n", self.options.len()));
        out.push_str(&format!("Decisions: {}\n", self.history.len()));
        out.push_str(&format!(
            "Achievements: {}/{}",
            self.achievements.unlocked_count(),
            self.achievements.all().len()
        ));
        out
    }
}

fn no_party() -> SessionError {
    SessionError::InvalidChoice("no party running, use: party start <names>".to_string())
}

fn render_wyr(q: &WyrQuestion, number: usize, total: usize) -> String {
    format!(
        "{} Would you rather... ({number}/{total}, {})\n  A) {}\n  B) {}",
        q.emoji, q.theme, q.option_a, q.option_b
    )
}

fn wyr_summary(deck: &WyrDeck) -> String {
    let summary = deck.summary();
    let mut out = format!(
        "Answered {}: {} A, {} B\n",
        summary.answered, summary.picked_a, summary.picked_b
    );
    for q in deck.questions() {
        if let Some(choice) = deck.answer_for(q.id) {
            let pick = match choice {
                Choice::A => q.option_a,
                Choice::B => q.option_b,
            };
            out.push_str(&format!("  {} {pick}\n", q.emoji));
        }
    }
    out.trim_end().to_string()
}

fn render_outcome(outcome: &DecisionOutcome) -> String {
    let mut out = outcome.result.to_string();
    for a in &outcome.unlocked {
        out.push_str(&format!("\n🏆 Achievement unlocked: {} {}", a.emoji, a.title));
    }
    out
}

const HELP: &str = "\
Commands:
  option add <text>       Add an option (2-6 needed)
  option clear            Remove all options
  options                 List options
  context <text>          Set what you're deciding (empty clears)
  mode [name]             Show or set the mode
  pick [mode]             Decide now (mode sticks once the pick succeeds)
  again                   Run the last decision again
  mood <name|none>        chaotic, chill, productivity, sassy, logical
  chaos [0-100]           Show or set the chaos level
  dilemma                 Load today's dilemma
  suggest                 Add two suggested options for the context
  party start <a, b, ...> Start a party (2-6 players)
  party add <option>      Current player suggests an option
  party finish            Decide among the party's suggestions
  party cancel            End the party
  quiz [ABCD]             Show the personality quiz or answer it
  wyr [a|b]               Play would-you-rather
  wyr summary|restart     Tally answers or start over
  history                 List past decisions
  export [markdown|text|json]  Export history
  regret <n>              Mark history entry n as regretted
  achievements            List achievements
  status                  Show session status
  help                    Show this help
  quit                    Exit

Modes: random, ai, logic, sassy, reverse, party";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::achievements::AchievementId;
    use crate::profile::DecisionArchetype;

    fn state() -> AppState {
        AppState::new(SessionConfig::default().with_seed(42).with_chaos(0))
    }

    fn with_options(s: &mut AppState, options: &[&str]) {
        for o in options {
            s.process(&format!("option add {o}")).unwrap();
        }
    }

    #[test]
    fn new_state() {
        let s = state();
        assert_eq!(s.profile().chaos_level.value(), 0);
        assert!(s.history().is_empty());
        assert!(s.mood().is_none());
        assert_eq!(s.mode(), &ModeSpec::Known(Mode::Random));
    }

    #[test]
    fn decide_records_history() {
        let mut s = state();
        let outcome = s.decide(["Pizza", "Tacos"], "logic", "dinner").unwrap();
        assert_eq!(outcome.result.selected_option, "Pizza");
        assert_eq!(s.history().len(), 1);
        assert_eq!(s.history().entries()[0].id, outcome.history_id);
        assert_eq!(s.history().entries()[0].context, "dinner");
        assert_eq!(outcome.unlocked.len(), 1);
        assert_eq!(outcome.unlocked[0].id, AchievementId::FirstDecision);
    }

    #[test]
    fn rejected_decision_changes_nothing() {
        let mut s = state();
        let err = s.decide(["only"], "random", "").unwrap_err();
        assert!(matches!(err, SessionError::Engine(_)));
        assert!(s.history().is_empty());
        assert_eq!(s.achievements().unlocked_count(), 0);
        assert!(matches!(s.decide_again(), Err(SessionError::NothingToRepeat)));
    }

    #[test]
    fn mood_applies_to_decisions() {
        let mut s = state();
        s.set_mood(Some(Mood::Logical));
        let outcome = s.decide(["A", "B"], "logic", "").unwrap();
        assert!(outcome.result.message.starts_with("🤓 Facts over feelings: "));
        assert!(!outcome.result.explanation.is_empty());
    }

    #[test]
    fn decide_again_builds_indecisive_streak() {
        let mut s = state();
        s.decide(["A", "B"], "random", "").unwrap();
        for _ in 0..4 {
            s.decide_again().unwrap();
        }
        assert!(!s.achievements().is_unlocked(AchievementId::Indecisive));
        let outcome = s.decide_again().unwrap();
        assert!(
            outcome
                .unlocked
                .iter()
                .any(|a| a.id == AchievementId::Indecisive)
        );
        assert_eq!(s.history().len(), 6);
    }

    #[test]
    fn option_commands() {
        let mut s = state();
        with_options(&mut s, &["Pizza", "Tacos"]);
        assert_eq!(s.options(), ["Pizza", "Tacos"]);
        assert!(s.process("options").unwrap().contains("2. Tacos"));
        s.process("option clear").unwrap();
        assert!(s.options().is_empty());
        assert!(s.process("option add").is_err());
    }

    #[test]
    fn option_cap_enforced() {
        let mut s = state();
        with_options(&mut s, &["1", "2", "3", "4", "5", "6"]);
        let err = s.process("option add 7").unwrap_err();
        assert!(err.to_string().contains("at most 6"));
    }

    #[test]
    fn pick_command() {
        let mut s = state();
        with_options(&mut s, &["Pizza", "Tacos", "Sushi"]);
        s.process("context What's for dinner").unwrap();
        let out = s.process("pick logic").unwrap();
        assert!(out.contains("Logic Mode Says..."));
        assert!(out.contains("Pizza"));
        assert!(out.contains("Achievement unlocked"));
        assert_eq!(s.history().entries()[0].context, "What's for dinner");
    }

    #[test]
    fn pick_without_options_fails() {
        let mut s = state();
        s.process("option add lonely").unwrap();
        let err = s.process("pick").unwrap_err();
        assert!(err.to_string().contains("at least 2"));
    }

    #[test]
    fn pick_unknown_mode_falls_back() {
        let mut s = state();
        with_options(&mut s, &["One", "Two"]);
        let out = s.process("mode banana").unwrap();
        assert!(out.contains("fall back"));
        let out = s.process("pick").unwrap();
        assert!(out.contains("Decision Says..."));
        assert_eq!(s.history().entries()[0].selected_option, "One");
        assert_eq!(s.history().entries()[0].mode, "banana");
    }

    #[test]
    fn again_command() {
        let mut s = state();
        assert!(s.process("again").is_err());
        with_options(&mut s, &["A", "B"]);
        s.process("pick reverse").unwrap();
        let out = s.process("again").unwrap();
        assert!(out.contains("Reverse Psychology Says..."));
        assert_eq!(s.history().len(), 2);
    }

    #[test]
    fn mood_command() {
        let mut s = state();
        s.process("mood chill").unwrap();
        assert_eq!(s.mood(), Some(Mood::Chill));
        s.process("mood none").unwrap();
        assert_eq!(s.mood(), None);
        assert!(s.process("mood grumpy").is_err());
    }

    #[test]
    fn chaos_command() {
        let mut s = state();
        let out = s.process("chaos 90").unwrap();
        assert!(out.contains("90/100"));
        assert!(out.contains("shuffled"));
        assert_eq!(s.profile().chaos_level.value(), 90);
        s.process("chaos 500").unwrap();
        assert_eq!(s.profile().chaos_level.value(), 100);
        assert!(s.process("chaos lots").is_err());
        assert!(!s.process("chaos 75").unwrap().contains("shuffled"));
    }

    #[test]
    fn dilemma_loads_options() {
        let mut s = state();
        let out = s.process("dilemma").unwrap();
        assert!(out.contains("Daily Dilemma"));
        assert_eq!(s.options().len(), 4);
        assert!(!s.context().is_empty());
        s.process("pick").unwrap();
        assert_eq!(s.history().len(), 1);
    }

    #[test]
    fn history_and_regret() {
        let mut s = state();
        assert!(s.process("history").unwrap().contains("No decisions"));
        s.decide(["A", "B"], "logic", "").unwrap();
        let out = s.process("regret 1").unwrap();
        assert!(out.contains("regret picking A"));
        assert!(s.history().entries()[0].regretted);
        assert!(s.process("history").unwrap().contains("😬"));
        assert!(matches!(
            s.process("regret 9"),
            Err(SessionError::HistoryNotFound(9))
        ));
        assert!(s.process("regret x").is_err());
    }

    #[test]
    fn export_formats() {
        let mut s = state();
        s.decide(["A", "B"], "logic", "test").unwrap();
        assert!(s.process("export").unwrap().starts_with("# Decision History"));
        assert!(s.process("export text").unwrap().contains("A / B -> A [logic]"));
        assert!(s.process("export json").unwrap().contains("\"selected_option\""));
        assert!(s.process("export pdf").is_err());
    }

    #[test]
    fn achievements_and_status() {
        let mut s = state();
        s.decide(["A", "B"], "sassy", "").unwrap();
        let out = s.process("achievements").unwrap();
        assert!(out.contains("(2/5)"));
        assert!(out.contains("✅ 😏 Went Full Sassy"));
        let status = s.process("status").unwrap();
        assert!(status.contains("Decisions: 1"));
        assert!(status.contains("Achievements: 2/5"));
    }

    #[test]
    fn history_limit_from_config() {
        let mut s = AppState::new(SessionConfig::default().with_seed(1).with_history_limit(2));
        for _ in 0..3 {
            s.decide(["A", "B"], "random", "").unwrap();
        }
        assert_eq!(s.history().len(), 2);
    }

    #[test]
    fn same_seed_same_picks() {
        let picks = |seed| {
            let mut s = AppState::new(SessionConfig::default().with_seed(seed));
            (0..10)
                .map(|_| {
                    s.decide(["A", "B", "C"], "random", "")
                        .unwrap()
                        .result
                        .selected_option
                })
                .collect::<Vec<_>>()
        };
        assert_eq!(picks(7), picks(7));
    }

    #[test]
    fn misc_commands() {
        let mut s = state();
        assert_eq!(s.process("").unwrap(), "");
        assert_eq!(s.process("quit").unwrap(), "Goodbye!");
        assert!(s.process("help").unwrap().contains("option add"));
        assert!(matches!(
            s.process("dance"),
            Err(SessionError::UnknownCommand(_))
        ));
    }

    #[test]
    fn failed_pick_keeps_previous_mode() {
        let mut s = state();
        s.process("option add lonely").unwrap();
        assert!(s.process("pick logic").is_err());
        assert_eq!(s.mode(), &ModeSpec::Known(Mode::Random));

        s.process("option add company").unwrap();
        s.process("pick logic").unwrap();
        assert_eq!(s.mode(), &ModeSpec::Known(Mode::Logic));
    }

    #[test]
    fn suggest_adds_two_fresh_options() {
        let mut s = state();
        s.process("context What should I eat for dinner").unwrap();
        s.process("option add Cook something new").unwrap();
        let out = s.process("suggest").unwrap();
        assert!(out.contains("Suggested"));
        assert_eq!(s.options().len(), 3);
        assert_eq!(s.options()[0], "Cook something new");
        assert!(!s.options()[1..].iter().any(|o| o.starts_with("Cook something new")));
    }

    #[test]
    fn suggest_respects_option_cap() {
        let mut s = state();
        with_options(&mut s, &["1", "2", "3", "4", "5"]);
        s.process("suggest").unwrap();
        assert_eq!(s.options().len(), 6);
        assert!(s.process("suggest").is_err());
    }

    #[test]
    fn party_round_decides_among_suggestions() {
        let mut s = state();
        s.process("context Movie night").unwrap();
        assert!(s.process("party add Pizza").is_err());
        assert!(s.process("party start Ana,  ").is_err());

        let out = s.process("party start Ana, , Ben, Cleo").unwrap();
        assert!(out.contains("Ana, Ben, Cleo"));
        assert!(out.contains("Ana's turn"));
        assert!(s.process("party add Dune").unwrap().contains("Ben's turn"));
        assert!(s.process("party finish").is_err());
        s.process("party add Alien").unwrap();
        assert!(s.process("party").unwrap().contains("Turn: Cleo"));
        assert!(s.process("status").unwrap().contains("Party: 3 players, 2 suggestions"));

        let out = s.process("party finish").unwrap();
        assert!(out.contains("Party Mode Says..."));
        assert!(s.party().is_none());
        let entry = &s.history().entries()[0];
        assert_eq!(entry.options, ["Dune", "Alien"]);
        assert_eq!(entry.mode, "party");
        assert_eq!(entry.context, "Movie night");
    }

    #[test]
    fn party_finish_uses_session_mood() {
        let mut s = state();
        s.process("mood logical").unwrap();
        s.process("party start Ana, Ben").unwrap();
        s.process("party add Bowling").unwrap();
        s.process("party add Karaoke").unwrap();
        let out = s.process("party finish").unwrap();
        assert!(out.contains("🤓 Facts over feelings: "));
        assert_eq!(s.history().entries()[0].mood, Some(Mood::Logical));
    }

    #[test]
    fn party_cancel_and_bad_usage() {
        let mut s = state();
        s.process("party start Ana, Ben").unwrap();
        assert!(s.party().is_some());
        s.process("party cancel").unwrap();
        assert!(s.party().is_none());
        assert!(s.process("party dance").is_err());
        assert!(s.process("party start A, B, C, D, E, F, G").is_err());
    }

    #[test]
    fn quiz_command_sets_archetype() {
        let mut s = state();
        assert!(s.process("quiz").unwrap().contains("1. "));
        assert!(s.process("quiz AB").is_err());
        assert!(s.process("quiz ABCX").is_err());
        assert!(s.profile().archetype.is_none());

        let out = s.process("quiz c c d a").unwrap();
        assert!(out.contains("The Chaos Agent"));
        assert_eq!(s.profile().archetype, Some(DecisionArchetype::ChaosAgent));
        assert!(s.profile().completed_quiz);
        assert!(s.process("status").unwrap().contains("The Chaos Agent"));
    }

    #[test]
    fn wyr_command_plays_through_deck() {
        let mut s = state();
        assert!(s.process("wyr a").is_err());
        assert!(s.process("wyr summary").is_err());

        let out = s.process("wyr").unwrap();
        assert!(out.contains("Would you rather... (1/20"));
        let first = s.wyr().and_then(|d| d.current()).map(|q| q.option_a).unwrap();
        assert!(out.contains(first));

        assert!(s.process("wyr a").unwrap().contains("(2/20"));
        s.process("wyr b").unwrap();
        s.process("wyr left").unwrap();
        let summary = s.process("wyr summary").unwrap();
        assert!(summary.contains("Answered 3: 2 A, 1 B"));
        assert!(summary.contains(first));
        assert!(s.process("wyr maybe").is_err());

        s.process("wyr restart").unwrap();
        assert_eq!(s.wyr().map(|d| d.progress().0), Some(0));
        for _ in 0..19 {
            s.process("wyr b").unwrap();
        }
        let done = s.process("wyr b").unwrap();
        assert!(done.contains("Answered 20: 0 A, 20 B"));
        assert!(s.wyr().is_some_and(|d| d.is_finished()));
    }
}
