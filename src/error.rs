use std::io;
use std::path::PathBuf;

/// Failures while turning a source file into a [`Script`](crate::script::Script).
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    /// The source has no lines at all, so no question can ever be formed.
    #[error("the script is empty")]
    Empty,
    #[error("could not read the script {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failures while building or playing a quiz.
#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    /// Not even the correct answer could be sampled within the attempt budget.
    #[error("could not create a question for this script after {attempts} attempts")]
    NoQuestion { attempts: usize },
    #[error("quiz i/o failed: {0}")]
    Io(#[from] io::Error),
}
