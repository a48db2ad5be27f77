//! The interactive question loop.

use std::io::{BufRead, Write};

use log::debug;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::engine::Answerer;
use crate::types::{QaError, QaResult};

pub const BANNER: &str = "===== 英语学习助手 =====";
pub const HINT: &str = "您可以提问关于Unit 1 'Fresh Start'的问题，输入'q'退出";
pub const FAREWELL: &str = "问答系统初始化完成，可以开始使用了！";

/// Where the loop gets its questions from.
pub trait LineSource {
    /// The next line without its terminator, or `None` once input is over.
    fn read_line(&mut self, prompt: &str) -> QaResult<Option<String>>;
}

/// Line-edited terminal input with history.
pub struct Terminal {
    editor: DefaultEditor,
}

impl Terminal {
    pub fn new() -> QaResult<Self> {
        let editor = DefaultEditor::new().map_err(|e| QaError::Readline(e.to_string()))?;
        Ok(Self { editor })
    }
}

impl LineSource for Terminal {
    fn read_line(&mut self, prompt: &str) -> QaResult<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(e) = self.editor.add_history_entry(line.as_str()) {
                        debug!("history entry not recorded: {e}");
                    }
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => Ok(None),
            Err(e) => Err(QaError::Readline(e.to_string())),
        }
    }
}

/// Plain buffered input, used when stdin is not a terminal. No prompt is shown.
pub struct Piped<R> {
    reader: R,
}

impl<R: BufRead> Piped<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for Piped<R> {
    fn read_line(&mut self, _prompt: &str) -> QaResult<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(|c: char| c == '\n' || c == '\r').len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

/// True for the quit command: exactly `q` or `Q`, no surrounding whitespace.
pub fn is_quit(line: &str) -> bool {
    line.eq_ignore_ascii_case("q")
}

/// Answer questions until `q` or end of input. Returns how many were answered.
pub fn run_repl<S, W>(
    answerer: &Answerer<'_>,
    prompt: &str,
    input: &mut S,
    out: &mut W,
) -> QaResult<usize>
where
    S: LineSource,
    W: Write,
{
    writeln!(out, "{BANNER}")?;
    writeln!(out, "{HINT}")?;
    out.flush()?;

    let mut answered = 0;
    while let Some(line) = input.read_line(prompt)? {
        if is_quit(&line) {
            break;
        }
        let answer = answerer.generate_answer(&line);
        writeln!(out, "回答: {answer}\n")?;
        out.flush()?;
        answered += 1;
    }

    writeln!(out, "{FAREWELL}")?;
    Ok(answered)
}
