//! Game state entity and its turn transitions

use crate::conversation::entities::Conversation;
use crate::core::error::DomainError;
use crate::game::limits::TurnLimits;
use crate::guess::extract_guess;
use crate::prompt::PromptTemplate;
use serde::{Deserialize, Serialize};

/// What happened on a turn that reached its end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The model asked another question; the game continues.
    Question(String),
    /// The model named a word; the game is over.
    Guess(String),
    /// The question budget was spent before the model was asked.
    OutOfQuestions,
}

impl TurnOutcome {
    pub fn ends_game(&self) -> bool {
        !matches!(self, TurnOutcome::Question(_))
    }
}

/// Next step after a player answer has been recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnStep {
    /// Ask the model for its next utterance.
    AskModel,
    /// The budget is exhausted; the game ended without a model call.
    OutOfQuestions,
}

/// Player's verdict on the model's guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuessVerdict {
    Correct,
    Incorrect,
}

/// Derived view of where a game stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOutcome {
    NotStarted,
    InProgress,
    Guessed(String),
    OutOfQuestions { asked: u32 },
}

/// State of one game (Entity)
///
/// Created fresh at game start, mutated turn by turn, and replaced when a
/// new game begins. `over` is terminal: once set, no transition is
/// accepted except acknowledging a guess.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    conversation: Conversation,
    question_count: u32,
    active: bool,
    over: bool,
    guessed_word: Option<String>,
    verdict: Option<GuessVerdict>,
}

impl GameState {
    /// A freshly started game: system instruction plus greeting, no
    /// questions asked yet.
    pub fn new() -> Self {
        Self {
            conversation: PromptTemplate::initial_conversation(),
            question_count: 0,
            active: true,
            over: false,
            guessed_word: None,
            verdict: None,
        }
    }

    /// Placeholder before any game has been started.
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn question_count(&self) -> u32 {
        self.question_count
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn guessed_word(&self) -> Option<&str> {
        self.guessed_word.as_deref()
    }

    pub fn verdict(&self) -> Option<GuessVerdict> {
        self.verdict
    }

    /// Whether a player answer may be submitted.
    pub fn accepts_answer(&self) -> bool {
        self.active && !self.over
    }

    /// The question the player is currently answering.
    pub fn current_question(&self) -> Option<&str> {
        if self.accepts_answer() {
            self.conversation.last_assistant_content()
        } else {
            None
        }
    }

    pub fn outcome(&self) -> GameOutcome {
        match (&self.guessed_word, self.over) {
            (Some(word), _) => GameOutcome::Guessed(word.clone()),
            (None, true) => GameOutcome::OutOfQuestions {
                asked: self.question_count,
            },
            (None, false) if self.active => GameOutcome::InProgress,
            (None, false) => GameOutcome::NotStarted,
        }
    }

    /// Record the model's opening question. It counts as question 1 and is
    /// not checked for a guess.
    pub fn record_opening_question(&mut self, reply: impl Into<String>) -> Result<(), DomainError> {
        self.ensure_accepts_answer()?;
        self.record_question(reply.into());
        Ok(())
    }

    /// Record the player's answer and decide whether the model may be asked.
    ///
    /// When the budget is spent the game ends here and no model call should
    /// follow. On a game that is not accepting answers this is a no-op that
    /// returns [`DomainError::InvalidTransition`].
    pub fn begin_turn(&mut self, answer: &str) -> Result<TurnStep, DomainError> {
        self.ensure_accepts_answer()?;

        self.conversation.add_user_message(answer);

        if TurnLimits::is_exhausted(self.question_count) {
            self.finish();
            return Ok(TurnStep::OutOfQuestions);
        }

        Ok(TurnStep::AskModel)
    }

    /// Append the model's reply and classify it.
    pub fn apply_model_reply(&mut self, reply: impl Into<String>) -> Result<TurnOutcome, DomainError> {
        self.ensure_accepts_answer()?;

        let reply = reply.into();
        match extract_guess(&reply) {
            Some(word) => {
                self.conversation.add_assistant_message(reply);
                self.guessed_word = Some(word.clone());
                self.finish();
                Ok(TurnOutcome::Guess(word))
            }
            None => {
                self.record_question(reply.clone());
                Ok(TurnOutcome::Question(reply))
            }
        }
    }

    /// Record whether the model's guess was right and close the game.
    pub fn acknowledge_guess(&mut self, correct: bool) -> Result<GuessVerdict, DomainError> {
        if self.guessed_word.is_none() {
            return Err(DomainError::InvalidTransition(
                "no guess to acknowledge".to_string(),
            ));
        }
        if self.verdict.is_some() {
            return Err(DomainError::InvalidTransition(
                "guess already acknowledged".to_string(),
            ));
        }

        let verdict = if correct {
            GuessVerdict::Correct
        } else {
            GuessVerdict::Incorrect
        };
        self.verdict = Some(verdict);
        self.active = false;
        Ok(verdict)
    }

    fn ensure_accepts_answer(&self) -> Result<(), DomainError> {
        if self.over {
            return Err(DomainError::InvalidTransition("game is over".to_string()));
        }
        if !self.active {
            return Err(DomainError::InvalidTransition(
                "game has not started".to_string(),
            ));
        }
        Ok(())
    }

    fn record_question(&mut self, reply: String) {
        self.conversation.add_assistant_message(reply);
        self.question_count += 1;
    }

    fn finish(&mut self) {
        self.over = true;
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::entities::Role;

    fn started_with_questions(count: u32) -> GameState {
        let mut state = GameState::new();
        state.record_opening_question("Is it alive?").unwrap();
        for i in 1..count {
            state.begin_turn("No").unwrap();
            state
                .apply_model_reply(format!("Question {}?", i + 1))
                .unwrap();
        }
        state
    }

    #[test]
    fn test_new_game_is_seeded() {
        let state = GameState::new();
        assert_eq!(state.conversation().len(), 2);
        assert_eq!(state.question_count(), 0);
        assert!(state.is_active());
        assert!(!state.is_over());
        assert!(state.guessed_word().is_none());
        assert_eq!(state.outcome(), GameOutcome::InProgress);
    }

    #[test]
    fn test_idle_is_not_started() {
        let state = GameState::idle();
        assert_eq!(state.outcome(), GameOutcome::NotStarted);
        assert!(!state.accepts_answer());
    }

    #[test]
    fn test_opening_question_counts_as_one() {
        let state = started_with_questions(1);
        assert_eq!(state.question_count(), 1);
        assert_eq!(state.current_question(), Some("Is it alive?"));
    }

    #[test]
    fn test_opening_question_is_not_checked_for_guess() {
        let mut state = GameState::new();
        state.record_opening_question("Is it a mammal?").unwrap();
        assert!(!state.is_over());
        assert!(state.guessed_word().is_none());
    }

    #[test]
    fn test_question_reply_increments_count() {
        let mut state = started_with_questions(1);
        assert_eq!(state.begin_turn("Yes").unwrap(), TurnStep::AskModel);
        let outcome = state.apply_model_reply("Does it have fur?").unwrap();

        assert_eq!(outcome, TurnOutcome::Question("Does it have fur?".to_string()));
        assert_eq!(state.question_count(), 2);
        assert!(state.accepts_answer());

        let last = state.conversation().last().unwrap();
        assert_eq!(last.role, Role::Assistant);
    }

    #[test]
    fn test_guess_reply_ends_game() {
        let mut state = started_with_questions(3);
        state.begin_turn("Yes").unwrap();
        let outcome = state.apply_model_reply("GUESS: elephant").unwrap();

        assert_eq!(outcome, TurnOutcome::Guess("elephant".to_string()));
        assert_eq!(state.question_count(), 3);
        assert!(state.is_over());
        assert!(!state.is_active());
        assert_eq!(state.guessed_word(), Some("elephant"));
        assert_eq!(state.outcome(), GameOutcome::Guessed("elephant".to_string()));
        assert_eq!(
            state.conversation().last().unwrap().content,
            "GUESS: elephant"
        );
    }

    #[test]
    fn test_no_turn_limit_below_soft() {
        let mut state = started_with_questions(19);
        assert_eq!(state.begin_turn("No").unwrap(), TurnStep::AskModel);
    }

    #[test]
    fn test_grace_window_after_soft_limit() {
        let mut state = started_with_questions(20);
        assert_eq!(state.begin_turn("No").unwrap(), TurnStep::AskModel);
        state.apply_model_reply("Question 21?").unwrap();
        assert_eq!(state.question_count(), 21);
    }

    #[test]
    fn test_hard_limit_ends_game() {
        let mut state = started_with_questions(25);
        let len_before = state.conversation().len();

        assert_eq!(state.begin_turn("No").unwrap(), TurnStep::OutOfQuestions);
        assert!(state.is_over());
        assert!(!state.is_active());
        assert_eq!(state.conversation().len(), len_before + 1);
        assert_eq!(state.outcome(), GameOutcome::OutOfQuestions { asked: 25 });
    }

    #[test]
    fn test_begin_turn_on_finished_game_is_noop() {
        let mut state = started_with_questions(2);
        state.begin_turn("Yes").unwrap();
        state.apply_model_reply("GUESS: lamp").unwrap();
        let snapshot = state.clone();

        let err = state.begin_turn("Yes").unwrap_err();
        assert!(err.is_invalid_transition());
        assert_eq!(state, snapshot);
    }

    #[test]
    fn test_begin_turn_on_idle_game_is_noop() {
        let mut state = GameState::idle();
        assert!(state.begin_turn("Yes").is_err());
        assert!(state.conversation().is_empty());
    }

    #[test]
    fn test_acknowledge_guess() {
        let mut state = started_with_questions(1);
        state.begin_turn("Yes").unwrap();
        state.apply_model_reply("Is it a cat?").unwrap();

        assert_eq!(state.acknowledge_guess(true).unwrap(), GuessVerdict::Correct);
        assert_eq!(state.verdict(), Some(GuessVerdict::Correct));
        assert!(state.acknowledge_guess(false).is_err());
    }

    #[test]
    fn test_acknowledge_without_guess_fails() {
        let mut state = started_with_questions(25);
        state.begin_turn("No").unwrap();
        assert!(state.acknowledge_guess(true).is_err());
    }

    #[test]
    fn test_current_question_none_when_over() {
        let mut state = started_with_questions(1);
        state.begin_turn("Yes").unwrap();
        state.apply_model_reply("My guess is rain").unwrap();
        assert!(state.current_question().is_none());
    }

    #[test]
    fn test_state_serializes() {
        let state = started_with_questions(1);
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["question_count"], 1);
        assert_eq!(json["active"], true);
        assert_eq!(json["over"], false);
        assert!(json["guessed_word"].is_null());
    }
}
