//! Multiple-choice "what is said next" quizzes generated from dialogue
//! scripts.
//!
//! A script is plain text where `AUTHOR: quote` starts a turn and lines
//! indented with a tab or space continue the previous author's quote:
//!
//! ```text
//! Alice: Hello there.
//! Bob: Hi Alice!
//! Alice:	How are you?
//! 	I am fine, thanks.
//! ```

pub mod config;
pub mod error;
pub mod quiz;
pub mod script;

pub use config::{Difficulty, QuizSettings};
pub use error::{QuizError, ScriptError};
pub use quiz::builder::{build_quiz_question, reward};
pub use quiz::extract::{extract, ExtractOptions};
pub use quiz::{Answer, PresentedQuestion, Question, Quiz};
pub use script::{LineKind, Script};
