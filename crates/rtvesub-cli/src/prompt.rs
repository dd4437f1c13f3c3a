//! Interactive prompts

#[cfg(test)]
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Source of answers to interactive questions
pub trait Prompter {
    /// Show `prompt` and return the answer without its line ending
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;
}

/// Prompts on stdout and reads answers from stdin
pub struct StdinPrompter;

impl Prompter for StdinPrompter {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(prompt.as_bytes())?;
        stdout.flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Replays fixed answers in order; an exhausted script answers with an
/// empty line, like a closed stdin.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    pub asked: Vec<String>,
}

#[cfg(test)]
impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }
}

#[cfg(test)]
impl Prompter for ScriptedPrompter {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        self.asked.push(prompt.to_string());
        Ok(self.answers.pop_front().unwrap_or_default())
    }
}

/// Whether an overwrite answer means "overwrite"; anything but `o` skips
pub fn is_overwrite(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("o")
}
