//! Terminal rendering of guesses.

use crate::feedback::{Feedback, FeedbackPattern};
use crate::word::Word;
use colored::Colorize;

/// Uppercase guess with hits in green and close letters in yellow.
pub fn render_guess(guess: Word, pattern: FeedbackPattern) -> String {
    guess
        .to_uppercase()
        .chars()
        .zip(pattern.feedbacks())
        .map(|(letter, feedback)| {
            let letter = letter.to_string();
            match feedback {
                Feedback::Hit => letter.bright_green().bold().to_string(),
                Feedback::Close => letter.bright_yellow().bold().to_string(),
                Feedback::Miss => letter,
            }
        })
        .collect()
}

/// Guess followed by its emoji pattern, e.g. `CRANE 🟩🟨⬛⬛⬛`.
pub fn render_line(guess: Word, pattern: FeedbackPattern) -> String {
    format!("{} {}", render_guess(guess, pattern), pattern)
}
