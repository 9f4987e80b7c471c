use std::io::{BufRead, Write};

use log::info;
use rand::Rng;

use crate::config::QuizSettings;
use crate::error::QuizError;
use crate::quiz::builder::{build_quiz_question, reward};
use crate::quiz::{slot_letter, Quiz};
use crate::script::Script;

/// Turns a typed response into an answer slot.
///
/// Only the first word counts, and within it the first ASCII letter or
/// digit. Letters map to slots (`a`/`A` is 0); digits and punctuation never
/// match any slot.
pub fn parse_answer(response: &str) -> Option<usize> {
    let word = response.split_whitespace().next()?;
    let c = word.chars().find(|c| c.is_ascii_alphanumeric())?;
    c.is_ascii_alphabetic()
        .then(|| usize::from(c.to_ascii_lowercase() as u8 - b'a'))
}

/// Plays a whole quiz over `input`/`output` and returns the final tally.
pub fn play<R, I, O>(
    script: &Script,
    script_name: &str,
    settings: &QuizSettings,
    rng: &mut R,
    input: &mut I,
    output: &mut O,
) -> Result<Quiz, QuizError>
where
    R: Rng + ?Sized,
    I: BufRead,
    O: Write,
{
    info!(
        "Starting a {} question quiz on {} ({} difficulty)",
        settings.num_questions, script_name, settings.difficulty
    );

    write!(output, "\nWelcome to Script Quiz!\n\n")?;
    writeln!(
        output,
        "This is a {} question quiz where you will be given up",
        settings.num_questions
    )?;
    writeln!(
        output,
        "to {} possible response{} to a quote from the script:",
        settings.num_responses,
        if settings.num_responses == 1 { "" } else { "s" }
    )?;
    write!(output, "\t{}\n\n", script_name)?;
    write!(
        output,
        "Type the corresponding letter to choose your answer. Good luck!\n\n"
    )?;
    write!(output, "Difficulty: {}\n\n\n", settings.difficulty)?;

    let mut quiz = Quiz::new(settings.num_questions);
    while !quiz.is_finished() {
        let question = build_quiz_question(script, settings, rng)?;

        write!(output, "\nQuestion #{}:\n", quiz.current_question + 1)?;
        write!(output, "{}", question.render())?;
        write!(output, "Answer: ")?;
        output.flush()?;

        let choice = read_answer(input)?;
        let correct = question.is_correct(choice);
        if correct {
            writeln!(output, "--CORRECT!--")?;
        } else {
            writeln!(
                output,
                "--INCORRECT! The right choice was {}!--",
                slot_letter(question.correct_index)
            )?;
        }
        quiz.record(correct);
    }

    write!(
        output,
        "\nYou got {}/{} correct.\n\n",
        quiz.score, quiz.total_questions
    )?;

    if quiz.passed() {
        let reward = reward(script, settings, rng)?;
        writeln!(output, "Congrats on getting {} correct!", quiz.score)?;
        writeln!(
            output,
            "As a reward... {} has a special message for you...",
            reward.author
        )?;
        write!(output, "\"{}\"\n\n", reward.quote)?;
    }
    output.flush()?;

    info!("Quiz finished: {}/{}", quiz.score, quiz.total_questions);
    Ok(quiz)
}

// Blank lines are skipped; end of input leaves the question unanswered.
fn read_answer<I: BufRead>(input: &mut I) -> std::io::Result<Option<usize>> {
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if !line.trim().is_empty() {
            return Ok(parse_answer(&line));
        }
    }
}
