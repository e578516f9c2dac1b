//! Prompt layer: blocking text and choice questions with validation.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crate::common::Coordinate;

/// Suspension-bearing prompt collaborator. Each call blocks until a response
/// arrives; a closed input stream surfaces as an error.
pub trait Console {
    /// Free-form text answer, trimmed.
    fn ask_text(&mut self, prompt: &str) -> io::Result<String>;

    /// One of `options`, returned verbatim.
    fn ask_choice(&mut self, prompt: &str, options: &[&str]) -> io::Result<String>;
}

/// Console reading from any buffered input, normally stdin.
pub struct StdConsole<B> {
    read: B,
    buf: String,
}

impl StdConsole<io::BufReader<io::Stdin>> {
    pub fn stdin() -> Self {
        Self::new(io::BufReader::new(io::stdin()))
    }
}

impl<B: BufRead> StdConsole<B> {
    pub fn new(read: B) -> Self {
        StdConsole {
            read,
            buf: String::new(),
        }
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(self.buf.trim().to_string())
    }
}

impl<B: BufRead> Console for StdConsole<B> {
    fn ask_text(&mut self, prompt: &str) -> io::Result<String> {
        self.read_line(prompt)
    }

    fn ask_choice(&mut self, prompt: &str, options: &[&str]) -> io::Result<String> {
        loop {
            println!("{}", prompt);
            for (i, option) in options.iter().enumerate() {
                println!("  {}) {}", i + 1, option);
            }
            let answer = self.read_line(">")?;
            if let Some(option) = options.iter().find(|o| o.eq_ignore_ascii_case(&answer)) {
                return Ok(option.to_string());
            }
            if let Ok(n) = answer.parse::<usize>() {
                if n >= 1 && n <= options.len() {
                    return Ok(options[n - 1].to_string());
                }
            }
            println!("Invalid selection.");
        }
    }
}

/// Test double fed a fixed script of answers.
pub struct ScriptedConsole {
    answers: VecDeque<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedConsole {
            answers: answers.into_iter().map(Into::into).collect(),
        }
    }

    fn next(&mut self) -> io::Result<String> {
        self.answers.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "answer script exhausted")
        })
    }
}

impl Console for ScriptedConsole {
    fn ask_text(&mut self, _prompt: &str) -> io::Result<String> {
        self.next()
    }

    fn ask_choice(&mut self, _prompt: &str, options: &[&str]) -> io::Result<String> {
        let answer = self.next()?;
        options
            .iter()
            .find(|o| **o == answer)
            .map(|o| o.to_string())
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("scripted answer '{}' was not offered", answer),
                )
            })
    }
}

fn parse_answer(answer: &str, board_size: usize) -> Option<Coordinate> {
    Coordinate::parse(answer).filter(|c| c.in_bounds(board_size))
}

/// Ask until the answer is a well-formed coordinate on the board.
pub fn ask_coordinate(
    console: &mut dyn Console,
    prompt: &str,
    board_size: usize,
) -> io::Result<Coordinate> {
    loop {
        if let Some(coord) = parse_answer(&console.ask_text(prompt)?, board_size) {
            return Ok(coord);
        }
        println!("Enter a column letter and row digit, e.g. A:1 or B:2.");
    }
}

/// Like [`ask_coordinate`], but an empty answer returns `None` so the caller
/// can fall back to random placement.
pub fn ask_coordinate_or_empty(
    console: &mut dyn Console,
    prompt: &str,
    board_size: usize,
) -> io::Result<Option<Coordinate>> {
    loop {
        let answer = console.ask_text(prompt)?;
        if answer.is_empty() {
            return Ok(None);
        }
        if let Some(coord) = parse_answer(&answer, board_size) {
            return Ok(Some(coord));
        }
        println!("Enter a column letter and row digit, e.g. A:1 or B:2.");
    }
}
