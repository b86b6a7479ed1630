//! Line-based interactive prompts.
//!
//! Every answer is trimmed and lowercased before validation, so " Yes\n" is
//! accepted as "yes". End of input is reported as `None` to the caller.

use crate::errors::AppResult;
use crate::utils::colors::Theme;
use std::io::{BufRead, Write};

pub const YES_NO: [&str; 2] = ["yes", "no"];
pub const YES_NO_RETRY: &str = "Please enter 'yes' or 'no'!";

/// Normalized `raw` if it is one of `accepted`, `None` otherwise.
pub fn validate_choice(raw: &str, accepted: &[&str]) -> Option<String> {
    let normalized = raw.trim().to_lowercase();
    accepted
        .iter()
        .any(|a| *a == normalized)
        .then_some(normalized)
}

pub struct Prompter<R, W> {
    input: R,
    output: W,
    theme: Theme,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W, theme: Theme) -> Self {
        Self {
            input,
            output,
            theme,
        }
    }

    /// Writer shared with the reporters
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Prints `question` on its own line and reads one answer.
    pub fn ask(&mut self, question: &str) -> AppResult<Option<String>> {
        writeln!(self.output, "{}", self.theme.prompt(question))?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            log::debug!("input closed while asking: {}", question);
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Asks until the answer is one of `accepted`; `retry` is shown after
    /// each invalid answer.
    pub fn ask_choice(
        &mut self,
        question: &str,
        retry: &str,
        accepted: &[&str],
    ) -> AppResult<Option<String>> {
        let mut current = question;
        loop {
            let Some(answer) = self.ask(current)? else {
                return Ok(None);
            };
            if let Some(valid) = validate_choice(&answer, accepted) {
                return Ok(Some(valid));
            }
            log::debug!("rejected answer {:?}", answer.trim_end());
            current = retry;
        }
    }

    /// `Some(true)` for yes, `Some(false)` for no.
    pub fn ask_yes_no(&mut self, question: &str) -> AppResult<Option<bool>> {
        Ok(self
            .ask_choice(question, YES_NO_RETRY, &YES_NO)?
            .map(|a| a == "yes"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(script: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(
            Cursor::new(script.as_bytes().to_vec()),
            Vec::new(),
            Theme::plain(),
        )
    }

    #[test]
    fn test_validate_choice() {
        let accepted = ["chicago", "new york city"];
        assert_eq!(
            validate_choice("New York City\n", &accepted).as_deref(),
            Some("new york city")
        );
        assert_eq!(validate_choice("  CHICAGO ", &accepted).as_deref(), Some("chicago"));
        assert_eq!(validate_choice("boston", &accepted), None);
        assert_eq!(validate_choice("", &accepted), None);
    }

    #[test]
    fn test_ask_choice_reprompts_until_valid() {
        let mut p = prompter("paris\nlondon\nWashington\n");
        let answer = p
            .ask_choice("City?", "Invalid city! Try again", &["washington"])
            .unwrap();
        assert_eq!(answer.as_deref(), Some("washington"));

        let out = String::from_utf8(p.output).unwrap();
        assert_eq!(out.matches("Invalid city! Try again").count(), 2);
        assert_eq!(out.matches("City?").count(), 1);
    }

    #[test]
    fn test_yes_no_accepts_surrounding_whitespace() {
        let mut p = prompter(" yes\n");
        assert_eq!(p.ask_yes_no("More?").unwrap(), Some(true));
    }

    #[test]
    fn test_yes_no_reprompts() {
        let mut p = prompter("y\nmaybe\nNO\n");
        assert_eq!(p.ask_yes_no("More?").unwrap(), Some(false));
        let out = String::from_utf8(p.output).unwrap();
        assert_eq!(out.matches(YES_NO_RETRY).count(), 2);
    }

    #[test]
    fn test_end_of_input_is_none() {
        let mut p = prompter("maybe\n");
        assert_eq!(p.ask_yes_no("More?").unwrap(), None);
    }
}
