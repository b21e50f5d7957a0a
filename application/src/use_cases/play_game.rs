//! Play Game use case.
//!
//! Drives one game of twenty questions against an [`LlmGateway`]:
//!
//! 1. [`start_game`](PlayGameUseCase::start_game) seeds a fresh
//!    [`GameState`] and asks the model for its opening question
//! 2. [`advance`](PlayGameUseCase::advance) runs one turn per player answer
//! 3. [`acknowledge`](PlayGameUseCase::acknowledge) records whether a guess
//!    was right
//!
//! Model failures never escape a turn. The failure text is recorded in the
//! transcript as the model's reply and classified like any other reply.

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::LlmGateway;
use crate::ports::progress::GameProgressNotifier;
use std::sync::Arc;
use tracing::{debug, info, warn};
use twentyq_domain::core::string::truncate;
use twentyq_domain::{Conversation, DomainError, GameState, GuessVerdict, TurnOutcome, TurnStep};

/// Use case for playing a game.
///
/// Holds no game state of its own: the caller owns the [`GameState`] and
/// passes it into every turn.
#[derive(Clone)]
pub struct PlayGameUseCase {
    gateway: Arc<dyn LlmGateway>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl PlayGameUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>) -> Self {
        Self {
            gateway,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Start a new game and obtain the model's opening question.
    ///
    /// The opening question counts as question 1.
    pub async fn start_game(
        &self,
        progress: &dyn GameProgressNotifier,
    ) -> Result<GameState, DomainError> {
        info!("Starting new game with model {}", self.gateway.model_name());

        let mut state = GameState::new();
        self.conversation_logger.log(ConversationEvent::new(
            "game_started",
            serde_json::json!({ "model": self.gateway.model_name() }),
        ));

        let reply = self.ask_model(state.conversation(), 1, progress).await;
        state.record_opening_question(reply)?;

        Ok(state)
    }

    /// Run one turn with the player's answer.
    ///
    /// On a game that is not accepting answers this returns
    /// [`DomainError::InvalidTransition`] without touching the state or
    /// calling the model. Otherwise at most one model call is made.
    pub async fn advance(
        &self,
        state: &mut GameState,
        answer: &str,
        progress: &dyn GameProgressNotifier,
    ) -> Result<TurnOutcome, DomainError> {
        let step = state.begin_turn(answer)?;

        self.conversation_logger.log(ConversationEvent::new(
            "player_answer",
            serde_json::json!({
                "answer": answer,
                "question_count": state.question_count(),
            }),
        ));

        if step == TurnStep::OutOfQuestions {
            info!(
                "Question budget exhausted after {} questions",
                state.question_count()
            );
            self.log_game_over("out_of_questions", state);
            return Ok(TurnOutcome::OutOfQuestions);
        }

        let question_number = state.question_count() + 1;
        let reply = self
            .ask_model(state.conversation(), question_number, progress)
            .await;
        let outcome = state.apply_model_reply(reply)?;

        match &outcome {
            TurnOutcome::Guess(word) => {
                info!(
                    "Model guessed '{}' after {} questions",
                    word,
                    state.question_count()
                );
                self.log_game_over("guess", state);
            }
            TurnOutcome::Question(text) => {
                debug!(
                    "Question {}: {}",
                    state.question_count(),
                    truncate(text, 100)
                );
            }
            TurnOutcome::OutOfQuestions => {}
        }

        Ok(outcome)
    }

    /// Record the player's verdict on the model's guess.
    pub fn acknowledge(
        &self,
        state: &mut GameState,
        correct: bool,
    ) -> Result<GuessVerdict, DomainError> {
        let verdict = state.acknowledge_guess(correct)?;
        info!("Player marked guess as {:?}", verdict);
        self.conversation_logger.log(ConversationEvent::new(
            "guess_verdict",
            serde_json::json!({
                "guessed_word": state.guessed_word(),
                "verdict": verdict,
            }),
        ));
        Ok(verdict)
    }

    /// Ask the model, substituting failure text for the reply on error.
    async fn ask_model(
        &self,
        conversation: &Conversation,
        question_number: u32,
        progress: &dyn GameProgressNotifier,
    ) -> String {
        progress.on_model_call_start(question_number);
        let result = self.gateway.ask(conversation.messages()).await;
        progress.on_model_call_end(result.is_ok());

        match result {
            Ok(reply) => {
                self.conversation_logger.log(ConversationEvent::new(
                    "model_reply",
                    serde_json::json!({
                        "model": self.gateway.model_name(),
                        "question_number": question_number,
                        "bytes": reply.len(),
                        "text": reply,
                    }),
                ));
                reply
            }
            Err(e) => {
                warn!("Model call failed, recording error as reply: {}", e);
                let text = e.to_reply_text();
                self.conversation_logger.log(ConversationEvent::new(
                    "model_error",
                    serde_json::json!({
                        "model": self.gateway.model_name(),
                        "configuration": e.is_configuration(),
                        "text": text,
                    }),
                ));
                text
            }
        }
    }

    fn log_game_over(&self, reason: &str, state: &GameState) {
        self.conversation_logger.log(ConversationEvent::new(
            "game_over",
            serde_json::json!({
                "reason": reason,
                "question_count": state.question_count(),
                "guessed_word": state.guessed_word(),
            }),
        ));
    }
}
