// Test doubles: in-memory stand-ins for the network, the terminal prompts
// and the output sink, so commands can be run end to end without a terminal
// or a server.

use crate::api::{Reply, Transport};
use crate::error::{PasteError, Result};
use crate::ui::{Output, Prompter, Tone};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;

/// A request the mock transport received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Form {
        url: String,
        fields: Vec<(String, String)>,
    },
    Bytes {
        url: String,
        body: Vec<u8>,
    },
    Delete {
        url: String,
    },
}

/// Records every request and answers each with the same canned reply, or
/// with a freshly made error.
pub struct MockTransport {
    outcome: Outcome,
    sent: RefCell<Vec<Sent>>,
}

enum Outcome {
    Reply(Reply),
    Fail(Box<dyn Fn() -> PasteError>),
}

impl MockTransport {
    pub fn replying(reply: Reply) -> Self {
        Self {
            outcome: Outcome::Reply(reply),
            sent: RefCell::new(Vec::new()),
        }
    }

    /// Every request is recorded and then fails with `make_error()`.
    pub fn failing(make_error: impl Fn() -> PasteError + 'static) -> Self {
        Self {
            outcome: Outcome::Fail(Box::new(make_error)),
            sent: RefCell::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.borrow().clone()
    }

    fn record(&self, sent: Sent) -> Result<Reply> {
        self.sent.borrow_mut().push(sent);
        match &self.outcome {
            Outcome::Reply(reply) => Ok(reply.clone()),
            Outcome::Fail(make_error) => Err(make_error()),
        }
    }
}

impl Transport for MockTransport {
    fn post_form(&self, url: &str, form: &[(&str, &str)]) -> Result<Reply> {
        let fields = form
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self.record(Sent::Form {
            url: url.to_string(),
            fields,
        })
    }

    fn post_bytes(&self, url: &str, body: Vec<u8>) -> Result<Reply> {
        self.record(Sent::Bytes {
            url: url.to_string(),
            body,
        })
    }

    fn delete(&self, url: &str) -> Result<Reply> {
        self.record(Sent::Delete {
            url: url.to_string(),
        })
    }
}

/// Answers prompts from a fixed script. An empty answer takes the prompt's
/// default; running out of answers is an `UnexpectedEof` error.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    asked: Vec<String>,
}

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

    /// Prompts shown so far, in order.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    fn next(&mut self, prompt: &str) -> io::Result<String> {
        self.asked.push(prompt.to_string());
        self.answers.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, format!("no answer for {prompt:?}"))
        })
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, prompt: &str, default: Option<&str>) -> io::Result<String> {
        let answer = self.next(prompt)?;
        match default {
            Some(d) if answer.is_empty() => Ok(d.to_string()),
            _ => Ok(answer),
        }
    }

    fn choose(&mut self, prompt: &str, choices: &[&str], default: usize) -> io::Result<usize> {
        let answer = self.next(prompt)?;
        if answer.is_empty() {
            return Ok(default);
        }
        choices.iter().position(|c| *c == answer).ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, format!("{answer:?} is not a choice"))
        })
    }
}

/// One message written to a `RecordingOutput`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Plain(String),
    Info(String),
    Success(String),
    Error(String),
    Panel { title: String, body: String, tone: Tone },
}

#[derive(Debug, Default)]
pub struct RecordingOutput {
    pub lines: Vec<Line>,
}

impl RecordingOutput {
    /// Everything written, flattened to plain text.
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(|line| match line {
                Line::Plain(m) | Line::Info(m) | Line::Success(m) | Line::Error(m) => m.clone(),
                Line::Panel { title, body, .. } => format!("[{title}]\n{body}"),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn panels(&self) -> Vec<(&str, &str, Tone)> {
        self.lines
            .iter()
            .filter_map(|line| match line {
                Line::Panel { title, body, tone } => Some((title.as_str(), body.as_str(), *tone)),
                _ => None,
            })
            .collect()
    }
}

impl Output for RecordingOutput {
    fn plain(&mut self, msg: &str) {
        self.lines.push(Line::Plain(msg.to_string()));
    }

    fn info(&mut self, msg: &str) {
        self.lines.push(Line::Info(msg.to_string()));
    }

    fn success(&mut self, msg: &str) {
        self.lines.push(Line::Success(msg.to_string()));
    }

    fn error(&mut self, msg: &str) {
        self.lines.push(Line::Error(msg.to_string()));
    }

    fn panel(&mut self, title: &str, body: &str, tone: Tone) {
        self.lines.push(Line::Panel {
            title: title.to_string(),
            body: body.to_string(),
            tone,
        });
    }
}
