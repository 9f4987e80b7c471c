use crate::quiz::Question;

/// Decides whether `candidate` may be shown as a wrong answer next to
/// `correct`, given the distractors already accepted for the same question.
///
/// A candidate is rejected when its answer:
/// - repeats the correct question's own quote, unless that quote is also the
///   correct answer,
/// - is the correct answer,
/// - comes from a question with the same author and quote as the correct one,
/// - duplicates an already accepted distractor.
pub fn is_valid(correct: &Question, candidate: &Question, accepted_so_far: &[Question]) -> bool {
    let echoes_prompt =
        candidate.next_quote == correct.quote && correct.quote != correct.next_quote;
    if echoes_prompt {
        return false;
    }

    if candidate.next_quote == correct.next_quote {
        return false;
    }

    if candidate.quote == correct.quote && candidate.author == correct.author {
        return false;
    }

    !accepted_so_far
        .iter()
        .any(|accepted| accepted.next_quote == candidate.next_quote)
}
