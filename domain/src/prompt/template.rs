//! Prompt templates for a game of twenty questions

use crate::conversation::entities::Conversation;
use crate::game::limits::TurnLimits;

/// Fixed texts that open every game.
pub struct PromptTemplate;

impl PromptTemplate {
    /// System instruction describing the rules the model plays by.
    pub fn game_system() -> String {
        format!(
            r#"You are playing a game of 20 Questions. The player is thinking of an English word, and you need to guess it by asking yes/no questions.

Rules:
- Ask one question at a time
- Questions should be yes/no questions
- The player can answer: "Yes", "No", "Sometimes", or "Unknown"
- Try to guess the word within {soft} questions (you can use up to {hard} if needed)
- When you are confident you know the word, make a guess using the format: "GUESS: [word]" (e.g., "GUESS: elephant")
- If you're not sure but want to test a hypothesis, you can ask "Is it [word]?" as a question
- Be strategic with your questions to narrow down possibilities
- Start with broad questions and get more specific as you learn more
- Use the conversation history to build context and make smarter guesses

Begin by asking your first question."#,
            soft = TurnLimits::SOFT,
            hard = TurnLimits::HARD,
        )
    }

    /// Greeting the assistant speaks before its first question.
    pub fn greeting() -> &'static str {
        "I'm ready to play 20 Questions! Think of an English word, and I'll try to guess it. Let me start with my first question:"
    }

    /// Seed conversation for a new game: the system instruction followed by
    /// the assistant greeting.
    pub fn initial_conversation() -> Conversation {
        let mut conversation = Conversation::with_system_prompt(Self::game_system());
        conversation.add_assistant_message(Self::greeting());
        conversation
    }
}
