// Building a `PasteRequest`, either from `create` flags or by asking.

use crate::backend::{PasteRequest, Visibility};
use crate::error::{PasteError, Result};
use crate::ui::Prompter;
use std::path::{Path, PathBuf};

pub const DEFAULT_TITLE: &str = "untitled";
pub const DEFAULT_PRIVATE: &str = "no";
pub const DEFAULT_EXPIRE: &str = "10M";
pub const DEFAULT_FORMAT: &str = "text";

/// Values given on the `create` command line. Empty strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasteArgs {
    pub text: Option<String>,
    pub file: Option<PathBuf>,
    pub title: Option<String>,
    pub private: Option<String>,
    pub expire: Option<String>,
    pub format: Option<String>,
}

impl PasteArgs {
    /// Content was supplied, so no prompting should happen.
    pub fn has_content(&self) -> bool {
        non_empty(&self.text).is_some() || self.file.as_ref().is_some_and(|p| !p.as_os_str().is_empty())
    }
}

/// What the interactive flow produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Composed {
    Ready(PasteRequest),
    Cancelled,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn or_default(value: &Option<String>, default: &str) -> String {
    non_empty(value).unwrap_or(default).to_string()
}

/// Argument mode. A file wins over inline text; neither is an error.
pub fn from_args(args: &PasteArgs) -> Result<PasteRequest> {
    let body = match (&args.file, non_empty(&args.text)) {
        (Some(path), _) if !path.as_os_str().is_empty() => read_file(path)?,
        (_, Some(text)) => text.to_string(),
        _ => return Err(PasteError::NoInputProvided),
    };

    Ok(PasteRequest {
        title: or_default(&args.title, DEFAULT_TITLE),
        body,
        visibility: Visibility::from_flag(&or_default(&args.private, DEFAULT_PRIVATE)),
        expire: or_default(&args.expire, DEFAULT_EXPIRE),
        format: or_default(&args.format, DEFAULT_FORMAT),
    })
}

fn read_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(PasteError::InputNotFound(path.to_path_buf()));
    }
    std::fs::read_to_string(path).map_err(|source| PasteError::InputUnreadable {
        path: path.to_path_buf(),
        source,
    })
}

/// Interactive mode: ask for every field, then require `y`/`yes`.
pub fn interactive(prompt: &mut dyn Prompter) -> Result<Composed> {
    let title = prompt.ask("title", Some(DEFAULT_TITLE))?;
    let body = prompt.ask("text", None)?;
    let private = prompt.ask("private? (yes/no)", Some(DEFAULT_PRIVATE))?;
    let expire = prompt.ask("expire (10M, 1D)", Some(DEFAULT_EXPIRE))?;
    let format = prompt.ask("format (python, bash, etc)", Some(DEFAULT_FORMAT))?;
    let confirm = prompt.ask("continue? (y/n)", Some("y"))?;

    if !is_affirmative(&confirm) {
        return Ok(Composed::Cancelled);
    }

    Ok(Composed::Ready(PasteRequest {
        title,
        body,
        visibility: Visibility::from_flag(&private),
        expire,
        format,
    }))
}

fn is_affirmative(answer: &str) -> bool {
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedPrompter;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn text_with_defaults() {
        let args = PasteArgs {
            text: Some("hi".into()),
            ..Default::default()
        };
        let req = from_args(&args).unwrap();
        assert_eq!(
            req,
            PasteRequest {
                title: "untitled".into(),
                body: "hi".into(),
                visibility: Visibility::Public,
                expire: "10M".into(),
                format: "text".into(),
            }
        );
    }

    #[test]
    fn explicit_fields_are_kept() {
        let args = PasteArgs {
            text: Some("print(1)".into()),
            title: Some("script".into()),
            private: Some("Yes".into()),
            expire: Some("1D".into()),
            format: Some("python".into()),
            ..Default::default()
        };
        let req = from_args(&args).unwrap();
        assert_eq!(req.title, "script");
        assert_eq!(req.visibility, Visibility::Private);
        assert_eq!(req.expire, "1D");
        assert_eq!(req.format, "python");
    }

    #[test]
    fn file_is_read_as_text() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("snippet.py");
        fs::write(&path, "print('hello')\n").unwrap();

        let args = PasteArgs {
            file: Some(path),
            ..Default::default()
        };
        assert_eq!(from_args(&args).unwrap().body, "print('hello')\n");
    }

    #[test]
    fn missing_file_is_input_not_found() {
        let dir = TempDir::new().unwrap();
        let args = PasteArgs {
            file: Some(dir.path().join("missing.txt")),
            ..Default::default()
        };
        assert!(matches!(from_args(&args), Err(PasteError::InputNotFound(_))));
    }

    #[test]
    fn non_utf8_file_is_unreadable() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("blob.bin");
        fs::write(&path, [0xff, 0xfe, 0x00, 0xc3]).unwrap();
        let args = PasteArgs {
            file: Some(path),
            ..Default::default()
        };
        assert!(matches!(from_args(&args), Err(PasteError::InputUnreadable { .. })));
    }

    #[test]
    fn no_content_is_no_input_provided() {
        let args = PasteArgs {
            title: Some("t".into()),
            text: Some(String::new()),
            ..Default::default()
        };
        assert!(!args.has_content());
        assert!(matches!(from_args(&args), Err(PasteError::NoInputProvided)));
    }

    #[test]
    fn interactive_uses_defaults_on_empty_answers() {
        let mut prompt = ScriptedPrompter::new(["", "some text", "", "", "", ""]);
        let composed = interactive(&mut prompt).unwrap();
        assert_eq!(
            composed,
            Composed::Ready(PasteRequest {
                title: "untitled".into(),
                body: "some text".into(),
                visibility: Visibility::Public,
                expire: "10M".into(),
                format: "text".into(),
            })
        );
        assert_eq!(prompt.asked().len(), 6);
    }

    #[test]
    fn interactive_accepts_yes_in_any_case() {
        for answer in ["y", "Y", "yes", "YES"] {
            let mut prompt = ScriptedPrompter::new(["t", "body", "yes", "1H", "bash", answer]);
            match interactive(&mut prompt).unwrap() {
                Composed::Ready(req) => assert_eq!(req.visibility, Visibility::Private),
                Composed::Cancelled => panic!("{answer:?} should confirm"),
            }
        }
    }

    #[test]
    fn interactive_other_answers_cancel() {
        for answer in ["n", "no", "nope", "yess", " "] {
            let mut prompt = ScriptedPrompter::new(["t", "body", "no", "10M", "text", answer]);
            assert_eq!(interactive(&mut prompt).unwrap(), Composed::Cancelled, "{answer:?}");
        }
    }
}
