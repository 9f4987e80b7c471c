use log::debug;
use rand::Rng;

use crate::quiz::extract::{extract, ExtractOptions};
use crate::quiz::Question;
use crate::script::Script;

pub const DEFAULT_MAX_ATTEMPTS: usize = 20;
pub const DEFAULT_RADIUS: usize = 10;

/// Where random anchors may be drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorConstraint {
    Anywhere,
    /// Within `radius` lines of `line`, clamped to the script.
    Near { line: usize, radius: usize },
}

/// Draws anchors under `constraint` until one extracts, at most
/// `max_attempts` times.
pub fn sample<R: Rng + ?Sized>(
    script: &Script,
    constraint: AnchorConstraint,
    max_attempts: usize,
    options: &ExtractOptions,
    rng: &mut R,
) -> Option<Question> {
    let found = (0..max_attempts).find_map(|_| {
        let index = pick_index(script.len(), constraint, rng);
        extract(script, index, options)
    });

    if found.is_none() {
        debug!(
            "No question found after {} attempts ({:?})",
            max_attempts, constraint
        );
    }
    found
}

fn pick_index<R: Rng + ?Sized>(len: usize, constraint: AnchorConstraint, rng: &mut R) -> usize {
    match constraint {
        AnchorConstraint::Near { line, radius } if line < len => {
            let low = line.saturating_sub(radius);
            let high = line.saturating_add(radius).min(len - 1);
            rng.gen_range(low..=high)
        }
        // An anchor outside the script constrains nothing.
        _ => rng.gen_range(0..len),
    }
}
