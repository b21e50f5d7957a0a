//! Console output formatter for games

use colored::Colorize;
use twentyq_domain::{
    format_history, Answer, GameOutcome, GameState, GuessVerdict, Role, TurnLimits,
};

/// Formats game state for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Enable or disable ANSI colors for everything this formatter renders
    pub fn set_color(enabled: bool) {
        if enabled {
            colored::control::unset_override();
        } else {
            colored::control::set_override(false);
        }
    }

    /// Welcome banner with the rules of the game
    pub fn welcome(model: &str) -> String {
        let mut output = String::new();
        output.push_str(&Self::header("Twenty Questions"));
        output.push('\n');
        output.push_str(&format!("{} {}\n", "Model:".cyan().bold(), model));
        output.push_str(&Self::section_header("How to play"));
        output.push_str(&format!(
            "Think of a word. I will ask yes/no questions and try to guess it\n\
             within {} questions (up to {} if I need them).\n\n",
            TurnLimits::SOFT,
            TurnLimits::HARD
        ));
        output.push_str(&Self::answer_help());
        output.push('\n');
        output.push_str(&Self::commands_help());
        output
    }

    /// The answers the player can give, with their shortcuts
    pub fn answer_help() -> String {
        let answers = Answer::ALL
            .iter()
            .map(|a| format!("{} ({})", a, a.shortcut()))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{} {}\n", "Answers:".cyan().bold(), answers)
    }

    /// REPL command reference
    pub fn commands_help() -> String {
        let mut output = String::new();
        output.push_str("Commands:\n");
        output.push_str("  /new              - Start a new game\n");
        output.push_str("  /history          - Show the questions and answers so far\n");
        output.push_str("  /state            - Show the game state as JSON\n");
        output.push_str("  /help, /h, /?     - Show this help\n");
        output.push_str("  /quit, /exit, /q  - Exit\n");
        output
    }

    /// Status line, e.g. `Questions asked: 3/20`
    pub fn status_line(state: &GameState) -> String {
        let count = state.question_count();
        format!(
            "Questions asked: {}/{}",
            count,
            TurnLimits::effective_limit(count)
        )
    }

    /// The question the player is currently answering
    pub fn question(state: &GameState) -> String {
        match state.current_question() {
            Some(text) => format!(
                "{} {}\n{}",
                format!("Question {}:", state.question_count()).yellow().bold(),
                text,
                Self::status_line(state).dimmed()
            ),
            None => String::new(),
        }
    }

    /// Announce the model's guess and ask for a verdict
    pub fn guess(word: &str) -> String {
        format!(
            "{} {}\n{}",
            "I think the word is:".green().bold(),
            word.bold(),
            "Was I correct? [y/n]".cyan()
        )
    }

    /// The model ran out of questions
    pub fn out_of_questions(asked: u32) -> String {
        format!(
            "{} I couldn't guess the word in {} questions. You win!",
            "Game Over!".red().bold(),
            asked
        )
    }

    /// Reaction to the player's verdict on a guess
    pub fn verdict(verdict: GuessVerdict) -> String {
        match verdict {
            GuessVerdict::Correct => format!("{} Thanks for playing!", "I got it!".green().bold()),
            GuessVerdict::Incorrect => {
                format!("{} The word was tricky to guess.", "You win!".yellow().bold())
            }
        }
    }

    /// One line per message, system prompt excluded
    pub fn history(state: &GameState) -> String {
        let messages = format_history(state.conversation());
        if messages.is_empty() {
            return "No game in progress.\n".to_string();
        }

        let mut output = Self::section_header("Game history");
        for message in messages {
            let speaker = match message.role {
                Role::Assistant => "AI:".cyan().bold(),
                Role::User => "You:".yellow().bold(),
                Role::System => continue,
            };
            output.push_str(&format!("{} {}\n", speaker, message.content));
        }
        output
    }

    /// Text summary of a finished game
    pub fn summary(state: &GameState) -> String {
        let mut output = Self::section_header("Summary");
        match state.outcome() {
            GameOutcome::Guessed(word) => {
                output.push_str(&format!("Guess: {}\n", word));
                if let Some(verdict) = state.verdict() {
                    let label = match verdict {
                        GuessVerdict::Correct => "correct".green(),
                        GuessVerdict::Incorrect => "incorrect".red(),
                    };
                    output.push_str(&format!("Verdict: {}\n", label));
                }
            }
            GameOutcome::OutOfQuestions { asked } => {
                output.push_str(&format!("Out of questions after {}\n", asked));
            }
            GameOutcome::InProgress => output.push_str("Game in progress\n"),
            GameOutcome::NotStarted => output.push_str("No game played\n"),
        }
        output.push_str(&format!("{}\n", Self::status_line(state)));
        output
    }

    /// Game state as pretty-printed JSON
    pub fn format_json(state: &GameState) -> String {
        serde_json::to_string_pretty(state).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }
}
