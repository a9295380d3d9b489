//! Interactive input surface.
//!
//! The workflow never reads stdin directly. It asks a [`Prompt`] for lines,
//! so the CLI can plug in [`StdinPrompt`] while tests feed scripted answers.

use std::io::{self, BufRead, Write};

pub trait Prompt {
    /// Shows `message` and returns the trimmed answer, or `None` once input
    /// is exhausted.
    fn ask(&mut self, message: &str) -> Option<String>;
}

impl<P: Prompt + ?Sized> Prompt for &mut P {
    fn ask(&mut self, message: &str) -> Option<String> {
        (**self).ask(message)
    }
}

pub struct StdinPrompt;

impl Prompt for StdinPrompt {
    fn ask(&mut self, message: &str) -> Option<String> {
        print!("{}", message);
        let _ = io::stdout().flush();

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }
}

/// Interprets an answer to "pick 1..=count, or 0 to skip".
///
/// Returns `Ok(Some(index))` with a zero-based index, `Ok(None)` for skip and
/// `Err` with the message to show before asking again.
pub fn parse_choice(input: &str, count: usize) -> Result<Option<usize>, String> {
    let choice: usize = input
        .trim()
        .parse()
        .map_err(|_| "Please enter a valid number".to_string())?;

    match choice {
        0 => Ok(None),
        n if n <= count => Ok(Some(n - 1)),
        _ => Err(format!("Please enter a number between 0 and {}", count)),
    }
}

/// Asks until a valid choice or skip is given. End of input counts as skip.
pub fn choose<P: Prompt>(prompt: &mut P, label: &str, count: usize) -> Option<usize> {
    loop {
        let answer = prompt.ask(&format!(
            "\nSelect {label} (1-{count}) or 0 to skip: ",
            label = label,
            count = count
        ))?;

        match parse_choice(&answer, count) {
            Ok(choice) => return choice,
            Err(message) => println!("{}", message),
        }
    }
}

/// Yes/no question, anything but `y` is a no.
pub fn confirm<P: Prompt>(prompt: &mut P, message: &str) -> bool {
    prompt
        .ask(message)
        .map(|answer| answer.eq_ignore_ascii_case("y"))
        .unwrap_or(false)
}
