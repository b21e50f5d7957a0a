//! REPL (Read-Eval-Print Loop) for playing twenty questions

use crate::ConsoleFormatter;
use crate::ThinkingSpinner;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::PathBuf;
use std::str::FromStr;
use twentyq_application::{GameProgressNotifier, NoProgress, PlayGameUseCase};
use twentyq_domain::{Answer, GameState, OutputFormat, TurnOutcome};

/// Whether the REPL should keep reading input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplControl {
    Continue,
    Exit,
}

/// Interactive game REPL
///
/// Owns the current [`GameState`] and hands it to the use case on every
/// turn. Starting a new game replaces it.
pub struct GameRepl {
    use_case: PlayGameUseCase,
    model: String,
    state: GameState,
    show_progress: bool,
    output_format: OutputFormat,
    history_path: Option<PathBuf>,
}

impl GameRepl {
    /// Create a new GameRepl
    pub fn new(use_case: PlayGameUseCase, model: impl Into<String>) -> Self {
        Self {
            use_case,
            model: model.into(),
            state: GameState::idle(),
            show_progress: true,
            output_format: OutputFormat::Text,
            history_path: None,
        }
    }

    /// Set whether to show the thinking spinner
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Set how finished games are reported
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Set the readline history file
    pub fn with_history_path(mut self, path: Option<PathBuf>) -> Self {
        self.history_path = path;
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Prompt matching what the REPL expects next
    pub fn prompt(&self) -> &'static str {
        if self.state.accepts_answer() {
            "answer [y/n/s/u]> "
        } else if self.awaiting_verdict() {
            "correct? [y/n]> "
        } else {
            ">>> "
        }
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        if let Some(ref path) = self.history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        println!("{}", ConsoleFormatter::welcome(&self.model));
        self.new_game().await;

        loop {
            match rl.readline(self.prompt()) {
                Ok(line) => {
                    let line = line.trim();
                    if !line.is_empty() {
                        let _ = rl.add_history_entry(line);
                    }
                    if self.handle_line(line).await == ReplControl::Exit {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = self.history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    /// Handle one line of player input.
    pub async fn handle_line(&mut self, line: &str) -> ReplControl {
        let line = line.trim();
        if line.is_empty() {
            return ReplControl::Continue;
        }

        if line.starts_with('/') {
            return self.handle_command(line).await;
        }

        if self.awaiting_verdict() {
            self.process_verdict(line);
        } else if self.state.accepts_answer() {
            self.process_answer(line).await;
        } else {
            println!("No game in progress. Type /new to start one.");
        }
        ReplControl::Continue
    }

    /// Handle slash commands.
    async fn handle_command(&mut self, cmd: &str) -> ReplControl {
        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                return ReplControl::Exit;
            }
            "/help" | "/h" | "/?" => {
                println!();
                print!("{}", ConsoleFormatter::answer_help());
                print!("{}", ConsoleFormatter::commands_help());
                println!();
            }
            "/new" => self.new_game().await,
            "/history" => print!("{}", ConsoleFormatter::history(&self.state)),
            "/state" => println!("{}", ConsoleFormatter::format_json(&self.state)),
            _ => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
            }
        }
        ReplControl::Continue
    }

    async fn new_game(&mut self) {
        println!();
        let progress = self.progress();
        match self.use_case.start_game(progress.as_ref()).await {
            Ok(state) => {
                self.state = state;
                println!("{}", ConsoleFormatter::question(&self.state));
            }
            Err(e) => eprintln!("Error: {}", e),
        }
        println!();
    }

    async fn process_answer(&mut self, input: &str) {
        let answer = match Answer::from_str(input) {
            Ok(answer) => answer,
            Err(e) => {
                println!("{}", e);
                print!("{}", ConsoleFormatter::answer_help());
                return;
            }
        };

        let progress = self.progress();
        let outcome = self
            .use_case
            .advance(&mut self.state, answer.as_str(), progress.as_ref())
            .await;

        println!();
        match outcome {
            Ok(TurnOutcome::Question(_)) => {
                println!("{}", ConsoleFormatter::question(&self.state));
            }
            Ok(TurnOutcome::Guess(word)) => {
                println!("{}", ConsoleFormatter::guess(&word));
            }
            Ok(TurnOutcome::OutOfQuestions) => {
                println!(
                    "{}",
                    ConsoleFormatter::out_of_questions(self.state.question_count())
                );
                self.report_finished_game();
            }
            Err(e) => eprintln!("Error: {}", e),
        }
        println!();
    }

    fn process_verdict(&mut self, input: &str) {
        let correct = match Answer::from_str(input) {
            Ok(Answer::Yes) => true,
            Ok(Answer::No) => false,
            _ => {
                println!("Please answer y or n.");
                return;
            }
        };

        match self.use_case.acknowledge(&mut self.state, correct) {
            Ok(verdict) => {
                println!("{}", ConsoleFormatter::verdict(verdict));
                self.report_finished_game();
            }
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    fn report_finished_game(&self) {
        match self.output_format {
            OutputFormat::Text => print!("{}", ConsoleFormatter::summary(&self.state)),
            OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(&self.state)),
        }
        println!("Type /new to play again or /quit to exit.");
    }

    fn awaiting_verdict(&self) -> bool {
        self.state.guessed_word().is_some() && self.state.verdict().is_none()
    }

    fn progress(&self) -> Box<dyn GameProgressNotifier> {
        if self.show_progress {
            Box::new(ThinkingSpinner::new())
        } else {
            Box::new(NoProgress)
        }
    }
}
