use std::path::PathBuf;

use clap::Parser;

use crate::quiz::extract::{ExtractOptions, DEFAULT_AUTHOR_LIMIT};
use crate::quiz::sampler::{DEFAULT_MAX_ATTEMPTS, DEFAULT_RADIUS};

pub const MIN_RESPONSES: usize = 2;
pub const MAX_RESPONSES: usize = 15;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Difficulty {
    #[default]
    Normal,
    /// Wrong answers are drawn from lines close to the correct one.
    Hard,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Normal => write!(f, "NORMAL"),
            Difficulty::Hard => write!(f, "HARD"),
        }
    }
}

/// Everything the quiz engine needs besides the script itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSettings {
    pub num_questions: usize,
    pub num_responses: usize,
    pub difficulty: Difficulty,
    /// Retry budget for sampling a question and for each distractor slot.
    pub max_attempts: usize,
    /// Line radius for hard-mode distractors.
    pub radius: usize,
    pub author_limit: Option<usize>,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            num_questions: 10,
            num_responses: 5,
            difficulty: Difficulty::Normal,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            radius: DEFAULT_RADIUS,
            author_limit: Some(DEFAULT_AUTHOR_LIMIT),
        }
    }
}

impl QuizSettings {
    /// Pulls counts back into their playable ranges instead of rejecting them.
    pub fn clamped(mut self) -> Self {
        self.num_questions = self.num_questions.max(1);
        self.num_responses = self.num_responses.clamp(MIN_RESPONSES, MAX_RESPONSES);
        self.max_attempts = self.max_attempts.max(1);
        self
    }

    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            author_limit: self.author_limit,
        }
    }
}

/// Asks randomly generated "what is said next" questions about a script.
///
/// Script lines look like `AUTHOR: quote`; lines starting with a tab or a
/// space continue the previous author's quote.
#[derive(Parser, Debug)]
#[command(name = "script_quiz", version)]
pub struct Cli {
    /// Script file to quiz on
    #[arg(env = "SCRIPT_QUIZ_SCRIPT")]
    pub script: PathBuf,

    /// Number of questions (at least 1)
    #[arg(
        env = "SCRIPT_QUIZ_QUESTIONS",
        default_value_t = 10,
        value_parser = parse_count,
        allow_negative_numbers = true
    )]
    pub num_questions: i64,

    /// Number of answer choices per question (2 to 15)
    #[arg(
        env = "SCRIPT_QUIZ_RESPONSES",
        default_value_t = 5,
        value_parser = parse_count,
        allow_negative_numbers = true
    )]
    pub num_responses: i64,

    /// normal (0) or hard (1); other numbers are clamped
    #[arg(
        env = "SCRIPT_QUIZ_DIFFICULTY",
        default_value_t = Difficulty::Normal,
        value_parser = parse_difficulty,
        allow_negative_numbers = true
    )]
    pub difficulty: Difficulty,

    /// Attempts per sampled question and per answer slot
    #[arg(long, env = "SCRIPT_QUIZ_ATTEMPTS", default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub attempts: usize,

    /// Line radius for hard difficulty
    #[arg(long, env = "SCRIPT_QUIZ_RADIUS", default_value_t = DEFAULT_RADIUS)]
    pub radius: usize,

    /// Longest author name shown, 0 for no limit
    #[arg(long, env = "SCRIPT_QUIZ_AUTHOR_LIMIT", default_value_t = DEFAULT_AUTHOR_LIMIT)]
    pub author_limit: usize,

    /// Seed for reproducible quizzes (defaults to system entropy)
    #[arg(long, env = "SCRIPT_QUIZ_SEED")]
    pub seed: Option<u64>,
}

impl Cli {
    pub fn settings(&self) -> QuizSettings {
        QuizSettings {
            num_questions: clamp_count(self.num_questions),
            num_responses: clamp_count(self.num_responses),
            difficulty: self.difficulty,
            max_attempts: self.attempts,
            radius: self.radius,
            author_limit: (self.author_limit > 0).then_some(self.author_limit),
        }
        .clamped()
    }
}

fn clamp_count(n: i64) -> usize {
    usize::try_from(n.max(0)).unwrap_or(usize::MAX)
}

/// Reads the leading integer of `s` the way C's `strtol` does: optional
/// leading whitespace and sign, then as many digits as there are. No digits
/// reads as 0 and overflow saturates.
fn leading_integer(s: &str) -> i64 {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, d| {
            acc.saturating_mul(10).saturating_add(i64::from(d - b'0'))
        });
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

fn parse_count(s: &str) -> Result<i64, String> {
    Ok(leading_integer(s))
}

fn parse_difficulty(s: &str) -> Result<Difficulty, String> {
    let difficulty = match s.trim().to_ascii_lowercase().as_str() {
        "normal" => Difficulty::Normal,
        "hard" => Difficulty::Hard,
        other if leading_integer(other) >= 1 => Difficulty::Hard,
        _ => Difficulty::Normal,
    };
    Ok(difficulty)
}
