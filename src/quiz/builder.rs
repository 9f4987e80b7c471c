use log::{debug, warn};
use rand::Rng;

use crate::config::{Difficulty, QuizSettings};
use crate::error::QuizError;
use crate::quiz::distractor::is_valid;
use crate::quiz::sampler::{sample, AnchorConstraint};
use crate::quiz::{Answer, PresentedQuestion, Question};
use crate::script::Script;

/// Assembles one multiple-choice question: the correct answer in a random
/// slot and validated wrong answers around it.
///
/// When a slot runs out of attempts the answer list is cut short. If that
/// happens before the correct slot was reached, the failing slot shows the
/// correct answer instead, so there is always exactly one correct answer.
pub fn build_quiz_question<R: Rng + ?Sized>(
    script: &Script,
    settings: &QuizSettings,
    rng: &mut R,
) -> Result<PresentedQuestion, QuizError> {
    let options = settings.extract_options();
    let correct = sample_correct(script, settings, rng)?;
    debug!(
        "Correct answer anchored at line {}: {:?}",
        correct.line_num, correct.next_quote
    );

    let num_responses = settings.num_responses.max(1);
    let mut correct_index = rng.gen_range(0..num_responses);
    let constraint = match settings.difficulty {
        Difficulty::Normal => AnchorConstraint::Anywhere,
        Difficulty::Hard => AnchorConstraint::Near {
            line: correct.line_num,
            radius: settings.radius,
        },
    };

    let mut answers = Vec::with_capacity(num_responses);
    let mut distractors: Vec<Question> = Vec::with_capacity(num_responses - 1);

    for slot in 0..num_responses {
        if slot == correct_index {
            answers.push(Answer::new(correct.next_quote.clone(), true));
            continue;
        }

        let distractor = (0..settings.max_attempts).find_map(|_| {
            sample(script, constraint, settings.max_attempts, &options, rng)
                .filter(|candidate| is_valid(&correct, candidate, &distractors))
        });

        match distractor {
            Some(distractor) => {
                answers.push(Answer::new(distractor.next_quote.clone(), false));
                distractors.push(distractor);
            }
            None if slot > correct_index => {
                warn!(
                    "Only {} of {} answers could be found for line {}",
                    answers.len(),
                    num_responses,
                    correct.line_num
                );
                break;
            }
            None => {
                warn!(
                    "Ran out of wrong answers at slot {}, moving the correct answer there",
                    slot
                );
                answers.push(Answer::new(correct.next_quote.clone(), true));
                correct_index = slot;
                break;
            }
        }
    }

    Ok(PresentedQuestion {
        line_num: correct.line_num,
        author: correct.author,
        quote: correct.quote,
        next_author: correct.next_author,
        answers,
        correct_index,
    })
}

/// A random quote for the end-of-quiz message, drawn like a correct answer.
pub fn reward<R: Rng + ?Sized>(
    script: &Script,
    settings: &QuizSettings,
    rng: &mut R,
) -> Result<Question, QuizError> {
    sample_correct(script, settings, rng)
}

fn sample_correct<R: Rng + ?Sized>(
    script: &Script,
    settings: &QuizSettings,
    rng: &mut R,
) -> Result<Question, QuizError> {
    sample(
        script,
        AnchorConstraint::Anywhere,
        settings.max_attempts,
        &settings.extract_options(),
        rng,
    )
    .ok_or(QuizError::NoQuestion {
        attempts: settings.max_attempts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn numbered_script(len: usize) -> Script {
        Script::from_lines((0..len).map(|i| format!("Speaker{}: line {}", i % 4, i))).unwrap()
    }

    fn assert_well_formed(q: &PresentedQuestion) {
        assert!(!q.answers.is_empty());
        assert!(q.correct_index < q.answers.len());
        assert_eq!(q.answers.iter().filter(|a| a.is_correct).count(), 1);
        assert!(q.answers[q.correct_index].is_correct);

        let texts: HashSet<&str> = q.answers.iter().map(|a| a.text.as_str()).collect();
        assert_eq!(texts.len(), q.answers.len(), "duplicate answers: {:?}", q.answers);
    }

    #[test]
    fn full_answer_set_on_a_rich_script() {
        let script = numbered_script(60);
        let settings = QuizSettings::default();
        let mut rng = StdRng::seed_from_u64(2024);

        for _ in 0..50 {
            let q = build_quiz_question(&script, &settings, &mut rng).unwrap();
            assert_well_formed(&q);
            assert_eq!(q.answers.len(), settings.num_responses);
            assert_eq!(q.correct_answer().text, format!("line {}", q.line_num + 1));
            assert_eq!(q.quote, format!("line {}", q.line_num));
            assert_eq!(q.author, format!("Speaker{}", q.line_num % 4));
        }
    }

    #[test]
    fn hard_distractors_come_from_nearby_lines() {
        let script = numbered_script(300);
        let settings = QuizSettings {
            difficulty: Difficulty::Hard,
            ..QuizSettings::default()
        };
        let mut rng = StdRng::seed_from_u64(99);

        for _ in 0..50 {
            let q = build_quiz_question(&script, &settings, &mut rng).unwrap();
            assert_well_formed(&q);
            for answer in q.answers.iter().filter(|a| !a.is_correct) {
                let n: usize = answer.text.trim_start_matches("line ").parse().unwrap();
                // Distractor anchors sit within the radius; their answer is the line after.
                let anchor = n - 1;
                assert!(anchor.abs_diff(q.line_num) <= settings.radius);
            }
        }
    }

    #[test]
    fn scarce_script_falls_back_to_the_correct_answer() {
        let script = Script::from_lines(["Alice: Hi.", "Bob: Hello."]).unwrap();
        let settings = QuizSettings {
            max_attempts: 60,
            ..QuizSettings::default()
        };

        for seed in 0..30 {
            let mut rng = StdRng::seed_from_u64(seed);
            let q = build_quiz_question(&script, &settings, &mut rng).unwrap();
            assert_well_formed(&q);
            assert_eq!(q.answers.len(), 1);
            assert_eq!(q.correct_answer().text, "Hello.");
        }
    }

    #[test]
    fn two_question_script_never_exceeds_two_answers() {
        let script = Script::from_lines(["A: one", "B: two", "C: three"]).unwrap();
        let settings = QuizSettings {
            num_responses: 5,
            max_attempts: 40,
            ..QuizSettings::default()
        };

        for seed in 0..30 {
            let mut rng = StdRng::seed_from_u64(seed);
            let q = build_quiz_question(&script, &settings, &mut rng).unwrap();
            assert_well_formed(&q);
            assert!(q.answers.len() <= 2);
        }
    }

    #[test]
    fn dense_two_turn_script_within_default_budget() {
        let script = Script::from_lines(["Alice: Ready?", "Bob: Always."]).unwrap();
        let settings = QuizSettings {
            num_responses: 5,
            ..QuizSettings::default()
        };
        assert_eq!(settings.max_attempts, 20);

        for seed in 0..30 {
            let mut rng = StdRng::seed_from_u64(seed);
            let q = build_quiz_question(&script, &settings, &mut rng).unwrap();
            assert_well_formed(&q);
            assert_eq!(q.answers.len(), 1);
            assert_eq!(q.correct_answer().text, "Always.");
        }
    }

    #[test]
    fn script_without_turns_is_fatal() {
        let script = Script::from_lines(["", "***", "Alice: the end"]).unwrap();
        let settings = QuizSettings::default();
        let mut rng = StdRng::seed_from_u64(0);

        match build_quiz_question(&script, &settings, &mut rng) {
            Err(QuizError::NoQuestion { attempts }) => assert_eq!(attempts, 20),
            other => panic!("expected NoQuestion, got {other:?}"),
        }
        assert!(reward(&script, &settings, &mut rng).is_err());
    }

    #[test]
    fn reward_is_a_plain_question() {
        let script = numbered_script(10);
        let mut rng = StdRng::seed_from_u64(4);
        let q = reward(&script, &QuizSettings::default(), &mut rng).unwrap();
        assert_eq!(q.quote, format!("line {}", q.line_num));
    }
}
