pub mod builder;
pub mod distractor;
pub mod extract;
pub mod sampler;
pub mod session;

pub const UNKNOWN_AUTHOR: &str = "<UNKNOWN AUTHOR>";
pub const UNKNOWN_QUOTE: &str = "<UNKNOWN QUOTE>";

/// One quote and the turn that follows it, anchored at a script line.
///
/// This is a detached snapshot: it only remembers the line number, never
/// the script it was taken from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub line_num: usize,
    pub author: String,
    pub quote: String,
    pub next_author: String,
    pub next_quote: String,
}

/// Running tally of a quiz being played.
#[derive(Debug, Clone, Default)]
pub struct Quiz {
    pub total_questions: usize,
    pub current_question: usize,
    pub score: usize,
}

impl Quiz {
    pub fn new(total_questions: usize) -> Self {
        Self {
            total_questions,
            current_question: 0,
            score: 0,
        }
    }

    pub fn record(&mut self, correct: bool) {
        self.current_question += 1;
        if correct {
            self.score += 1;
        }
    }

    pub fn is_finished(&self) -> bool {
        self.current_question >= self.total_questions
    }

    /// At least half of the questions answered correctly.
    pub fn passed(&self) -> bool {
        self.total_questions > 0 && self.score * 2 >= self.total_questions
    }
}

/// A question as shown to the player: the prompt plus lettered answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentedQuestion {
    pub line_num: usize,
    pub author: String,
    pub quote: String,
    pub next_author: String,
    pub answers: Vec<Answer>,
    pub correct_index: usize,
}

impl PresentedQuestion {
    pub fn correct_answer(&self) -> &Answer {
        &self.answers[self.correct_index]
    }

    pub fn is_correct(&self, choice: Option<usize>) -> bool {
        choice == Some(self.correct_index)
    }

    pub fn render(&self) -> String {
        let prompt = format!(
            "After {} says\n\t\"{}\",\nwhat does {} say next?\n",
            self.author, self.quote, self.next_author
        );
        self.answers
            .iter()
            .enumerate()
            .map(|(i, answer)| format!("{}. {}\n", slot_letter(i), answer.text))
            .fold(prompt, |mut text, line| {
                text.push_str(&line);
                text
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub text: String,
    pub is_correct: bool,
}
impl Answer {
    pub fn new(text: String, is_correct: bool) -> Self {
        Self { text, is_correct }
    }
}

/// `0 -> 'A'`, `1 -> 'B'`, ...
pub fn slot_letter(index: usize) -> char {
    char::from(b'A' + (index % 26) as u8)
}
