//! Question budget for a game.

/// Soft and hard question limits.
///
/// A game nominally allows [`TurnLimits::SOFT`] questions. Once that many
/// questions have been asked, the budget is extended to
/// [`TurnLimits::HARD`], which grants exactly one extra block of questions
/// rather than stopping at the soft limit.
pub struct TurnLimits;

impl TurnLimits {
    /// Nominal question budget.
    pub const SOFT: u32 = 20;
    /// Extended question budget, only in effect after the soft one is reached.
    pub const HARD: u32 = 25;

    /// Limit that applies given how many questions were already asked.
    pub fn effective_limit(question_count: u32) -> u32 {
        if question_count < Self::SOFT {
            Self::SOFT
        } else {
            Self::HARD
        }
    }

    /// Whether no further question may be asked.
    pub fn is_exhausted(question_count: u32) -> bool {
        question_count >= Self::effective_limit(question_count)
    }
}
