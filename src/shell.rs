//! Line-oriented console around the evaluator.
//!
//! Each round reads two hands from one line, prints the winner, and asks
//! whether to keep playing. An evaluation error ends the session.

use crate::config::Config;
use crate::evaluator::{showdown, EvalError};
use crossterm::style::{style, Color, Stylize};
use std::io::{self, BufRead, Write};
use tracing::{event, Level};

pub const PROMPT: &str = "Enter two poker hands (space separated), type end for ending the game";
pub const CONTINUE_PROMPT: &str = "Do you still want to play more? (yes/no) ";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Blank,
    End,
    /// Only one token was given.
    Incomplete,
    Hands(String, String),
}

/// Parse a line of whitespace-separated tokens. Tokens after the second are ignored.
///
/// ```
/// use poker_showdown::shell::{parse_line, Command};
///
/// assert_eq!(parse_line("AAKK2 23456"), Command::Hands("AAKK2".into(), "23456".into()));
/// assert_eq!(parse_line("end now"), Command::End);
/// assert_eq!(parse_line("AAKK2"), Command::Incomplete);
/// ```
pub fn parse_line(line: &str) -> Command {
    let mut parts = line.split_whitespace();
    match (parts.next(), parts.next()) {
        (None, _) => Command::Blank,
        (Some("end"), _) => Command::End,
        (Some(_), None) => Command::Incomplete,
        (Some(a), Some(b)) => Command::Hands(a.to_string(), b.to_string()),
    }
}

/// How a session finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user typed `end`.
    Ended,
    /// The user answered `no` to the continue prompt.
    Declined,
    /// Input reached end of file.
    InputClosed,
    /// The evaluator rejected a pair of hands.
    Failed(EvalError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    /// Rounds that produced a result.
    pub rounds: usize,
    pub end: SessionEnd,
}

impl SessionSummary {
    pub fn is_failure(&self) -> bool {
        matches!(self.end, SessionEnd::Failed(_))
    }
}

pub struct Shell<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, config: &Config) -> Self {
        Self { input, output, color: config.color() }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run rounds until the user stops, input ends, or evaluation fails.
    pub fn run(&mut self) -> io::Result<SessionSummary> {
        let mut rounds = 0;
        loop {
            writeln!(self.output, "{PROMPT}")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(SessionSummary { rounds, end: SessionEnd::InputClosed });
            };

            let (hand1, hand2) = match parse_line(&line) {
                Command::Blank => continue,
                Command::End => {
                    writeln!(self.output, "Game ended.")?;
                    return Ok(SessionSummary { rounds, end: SessionEnd::Ended });
                }
                Command::Incomplete => {
                    let warning = self.paint(
                        "You have provided only one, Please enter two inputs.",
                        Color::Yellow,
                    );
                    writeln!(self.output, "{warning}")?;
                    continue;
                }
                Command::Hands(a, b) => (a, b),
            };

            writeln!(self.output, "You entered: {hand1} and {hand2}")?;
            match showdown(&hand1, &hand2) {
                Ok(result) => {
                    rounds += 1;
                    event!(Level::DEBUG, round = rounds, %hand1, %hand2, %result, "round played");
                    let result = self.paint(&result, Color::Green);
                    writeln!(self.output, "Your result of the poker game is {result}")?;
                }
                Err(err) => {
                    event!(Level::WARN, %hand1, %hand2, error = %err, "session aborted");
                    let message = self.paint(
                        &format!("There was a problem while playing the poker game {err}"),
                        Color::Red,
                    );
                    writeln!(self.output, "{message}")?;
                    return Ok(SessionSummary { rounds, end: SessionEnd::Failed(err) });
                }
            }

            write!(self.output, "{CONTINUE_PROMPT}")?;
            self.output.flush()?;
            match self.read_line()? {
                None => return Ok(SessionSummary { rounds, end: SessionEnd::InputClosed }),
                Some(answer) if answer.trim() == "no" => {
                    writeln!(self.output, "Have a good day !!!")?;
                    return Ok(SessionSummary { rounds, end: SessionEnd::Declined });
                }
                Some(_) => {}
            }
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn paint(&self, text: &str, color: Color) -> String {
        paint(text, color, self.color)
    }
}

fn paint(text: &str, color: Color, enabled: bool) -> String {
    if enabled {
        style(text).with(color).to_string()
    } else {
        text.to_string()
    }
}
