// UI layer: the two capabilities the workflow needs from a terminal, an
// output sink and a prompt source, plus their real implementations
// (crossterm for colour, `dialoguer` for prompts).

use crossterm::style::{Color, Stylize};
use dialoguer::{Input, Select};
use std::io::Write;

/// Colour of a panel frame and title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Error,
}

impl Tone {
    fn color(self) -> Color {
        match self {
            Tone::Success => Color::Green,
            Tone::Warning => Color::Yellow,
            Tone::Error => Color::Red,
        }
    }
}

/// Where user-facing messages go.
pub trait Output {
    /// Unstyled text, such as usage.
    fn plain(&mut self, msg: &str);
    fn info(&mut self, msg: &str);
    fn success(&mut self, msg: &str);
    fn error(&mut self, msg: &str);
    /// A framed block with a title, used for paste results.
    fn panel(&mut self, title: &str, body: &str, tone: Tone);
}

/// Writes styled text to a terminal stream (stdout by default).
pub struct TerminalOutput<W: Write> {
    out: W,
}

impl TerminalOutput<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self {
            out: std::io::stdout(),
        }
    }
}

impl<W: Write> TerminalOutput<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    // A broken stdout has nowhere left to report to, so write errors are dropped.
    fn line(&mut self, text: impl std::fmt::Display) {
        let _ = writeln!(self.out, "{}", text);
    }
}

impl<W: Write> Output for TerminalOutput<W> {
    fn plain(&mut self, msg: &str) {
        self.line(msg);
    }

    fn info(&mut self, msg: &str) {
        self.line(msg.cyan());
    }

    fn success(&mut self, msg: &str) {
        self.line(format!("{} {}", "✓".green(), msg));
    }

    fn error(&mut self, msg: &str) {
        self.line(format!("{} {}", "✗".red(), msg));
    }

    fn panel(&mut self, title: &str, body: &str, tone: Tone) {
        let color = tone.color();
        let width = body
            .lines()
            .map(|l| l.chars().count())
            .chain(std::iter::once(title.chars().count() + 2))
            .max()
            .unwrap_or(0);

        let head_fill = width - title.chars().count() - 1;
        let top = format!("╭─ {} {}╮", title.with(color).bold(), "─".repeat(head_fill));
        self.line(top);
        for l in body.lines() {
            let pad = width - l.chars().count();
            self.line(format!("│ {}{} │", l, " ".repeat(pad)));
        }
        self.line(format!("╰{}╯", "─".repeat(width + 2)));
    }
}

/// Where answers to interactive questions come from.
pub trait Prompter {
    /// Ask for a line of text. With a default, an empty answer yields it.
    fn ask(&mut self, prompt: &str, default: Option<&str>) -> std::io::Result<String>;

    /// Pick one of `choices`, returning its index.
    fn choose(&mut self, prompt: &str, choices: &[&str], default: usize) -> std::io::Result<usize>;
}

/// `dialoguer`-backed prompts on the controlling terminal.
#[derive(Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn ask(&mut self, prompt: &str, default: Option<&str>) -> std::io::Result<String> {
        let mut input = Input::<String>::new();
        input.with_prompt(prompt);
        if let Some(d) = default {
            input.default(d.to_string());
        }
        input.interact_text()
    }

    fn choose(&mut self, prompt: &str, choices: &[&str], default: usize) -> std::io::Result<usize> {
        Select::new()
            .with_prompt(prompt)
            .items(choices)
            .default(default)
            .interact()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut TerminalOutput<&mut Vec<u8>>)) -> String {
        let mut buf = Vec::new();
        f(&mut TerminalOutput::new(&mut buf));
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn panel_frames_body_lines() {
        let text = render(|out| out.panel("Paste Created", "https://paste.rs/abc", Tone::Success));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Paste Created"));
        assert!(lines[1].contains("https://paste.rs/abc"));
        assert!(lines[2].starts_with('╰'));
    }

    #[test]
    fn panel_handles_title_wider_than_body() {
        let text = render(|out| out.panel("Partial Upload", "x", Tone::Warning));
        assert!(text.contains("Partial Upload"));
        assert!(text.contains("│ x"));
    }

    #[test]
    fn success_and_error_are_marked() {
        let text = render(|out| {
            out.success("Deleted paste: https://paste.rs/abc");
            out.error("boom");
        });
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].contains('✓'));
        assert!(lines[0].ends_with("Deleted paste: https://paste.rs/abc"));
        assert!(lines[1].contains('✗'));
        assert!(lines[1].ends_with("boom"));
    }
}
