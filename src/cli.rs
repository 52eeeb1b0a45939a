// Command line surface and the dispatcher that drives one command from
// parsing through rendering. Every collaborator is injected so the whole
// flow runs against test doubles.

use crate::api::{Endpoints, Transport, PASTEBIN_POST_URL, PASTERS_BASE_URL};
use crate::backend::{Backend, PasteResult, Pasters};
use crate::compose::{self, Composed, PasteArgs};
use crate::config::{self, ConfigStore};
use crate::error::{PasteError, Result};
use crate::ui::{Output, Prompter, Tone};
use clap::{Args, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "pastebincli",
    about = "CLI pastebin / paste.rs client",
    version,
    disable_help_subcommand = true,
    allow_external_subcommands = true
)]
pub struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding config.toml [default: ~/.config/pastebincli]
    #[arg(long, global = true, value_name = "DIR", env = "PASTEBINCLI_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    /// pastebin.com submission endpoint
    #[arg(long, global = true, hide = true, env = "PASTEBINCLI_PASTEBIN_URL", default_value = PASTEBIN_POST_URL)]
    pub pastebin_url: String,

    /// paste.rs base URL
    #[arg(long, global = true, hide = true, env = "PASTEBINCLI_PASTERS_URL", default_value = PASTERS_BASE_URL)]
    pub pasters_url: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    pub fn endpoints(&self) -> Endpoints {
        Endpoints {
            pastebin: self.pastebin_url.clone(),
            pasters: self.pasters_url.clone(),
        }
    }

    pub fn config_store(&self) -> ConfigStore {
        ConfigStore::locate(self.config_dir.as_deref())
    }
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Setup configuration
    #[command(alias = "config")]
    Setup,
    /// Create new paste
    Create(CreateArgs),
    /// Delete paste.rs paste by ID
    Delete {
        /// Paste ID to delete
        paste_id: String,
    },
    /// Show this help
    Help,
    #[command(external_subcommand)]
    Unknown(Vec<String>),
}

#[derive(Args, Debug, Default, PartialEq, Eq)]
pub struct CreateArgs {
    /// Paste text
    #[arg(long, conflicts_with = "file")]
    pub text: Option<String>,
    /// Path to file
    #[arg(long)]
    pub file: Option<PathBuf>,
    /// Title of paste
    #[arg(long)]
    pub title: Option<String>,
    /// yes/no
    #[arg(long, value_name = "yes|no")]
    pub private: Option<String>,
    /// Expiration time (10M, 1D, etc)
    #[arg(long)]
    pub expire: Option<String>,
    /// Language format (py, txt, etc)
    #[arg(long)]
    pub format: Option<String>,
}

impl From<CreateArgs> for PasteArgs {
    fn from(args: CreateArgs) -> Self {
        PasteArgs {
            text: args.text,
            file: args.file,
            title: args.title,
            private: args.private,
            expire: args.expire,
            format: args.format,
        }
    }
}

/// Install the stderr subscriber. `PASTEBINCLI_LOG` takes an `EnvFilter`
/// directive; otherwise only warnings show unless `--verbose` is given.
pub fn init_logging(verbose: bool) {
    let fallback = if verbose { "pastebincli=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("PASTEBINCLI_LOG").unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Usage text, with the `create` options rendered by clap.
pub fn usage() -> String {
    let mut cli = Cli::command();
    // Building first gives subcommands their full `pastebincli create` bin name.
    cli.build();
    let create_help = cli
        .find_subcommand_mut("create")
        .map(|create| create.render_help().to_string())
        .unwrap_or_default();

    format!(
        "pastebincli - CLI pastebin / paste.rs client

Usage:
  pastebincli <command> [options]

Commands:
  create     create new paste
  delete     delete paste.rs paste by ID
  setup      setup configuration (alias: config)
  help       show this help

Create options:
{create_help}
Examples:
  pastebincli create --text \"hello world\"
  pastebincli create --file test.py --title script
  pastebincli delete a1b2c3d4
  pastebincli setup"
    )
}

pub struct App<'a> {
    pub store: ConfigStore,
    pub endpoints: Endpoints,
    pub transport: &'a dyn Transport,
    pub prompt: &'a mut dyn Prompter,
    pub out: &'a mut dyn Output,
}

impl App<'_> {
    /// Run one command and return the process exit code.
    pub fn run(&mut self, command: Option<Command>) -> u8 {
        match self.dispatch(command) {
            Ok(()) => 0,
            Err(err) => {
                tracing::debug!(error = ?err, "command failed");
                self.report(&err);
                1
            }
        }
    }

    pub fn dispatch(&mut self, command: Option<Command>) -> Result<()> {
        match command {
            Some(Command::Setup) => config::setup(&self.store, self.prompt, self.out).map(|_| ()),
            Some(Command::Create(args)) => self.create(args.into()),
            Some(Command::Delete { paste_id }) => self.delete(&paste_id),
            Some(Command::Unknown(tokens)) => {
                let token = tokens.first().map(String::as_str).unwrap_or_default();
                self.out.error(&format!("Unknown command: {token}"));
                self.out.plain(&usage());
                Ok(())
            }
            Some(Command::Help) | None => {
                self.out.plain(&usage());
                Ok(())
            }
        }
    }

    fn create(&mut self, args: PasteArgs) -> Result<()> {
        let config = self.store.load()?;
        let request = if args.has_content() {
            compose::from_args(&args)?
        } else {
            match compose::interactive(self.prompt)? {
                Composed::Ready(request) => request,
                Composed::Cancelled => {
                    self.out.info("Cancelled.");
                    return Ok(());
                }
            }
        };

        let backend = Backend::from_config(&config, &self.endpoints);
        self.out.info(&format!("Sending paste to {}...", backend.service_name()));
        match backend.submit(&request, self.transport)? {
            PasteResult::Created { url } => {
                self.out.panel("Paste Created", &url, Tone::Success);
                Ok(())
            }
            PasteResult::PartiallyCreated { url, note } => {
                self.out.panel("Partial Upload", &format!("{url}\n({note})"), Tone::Warning);
                Ok(())
            }
            PasteResult::Failed { status, body } => Err(PasteError::RemoteFailure { status, body }),
        }
    }

    // paste.rs only. Run regardless of the configured backend.
    fn delete(&mut self, paste_id: &str) -> Result<()> {
        let url = Pasters::new(self.endpoints.pasters.clone()).delete(paste_id, self.transport)?;
        self.out.success(&format!("Deleted paste: {url}"));
        Ok(())
    }

    fn report(&mut self, err: &PasteError) {
        match err {
            PasteError::RemoteFailure { status, body } => {
                let detail = format!("Upload failed\nStatus code: {status}\n{body}");
                self.out.panel("Error", &detail, Tone::Error);
            }
            other => self.out.error(&other.to_string()),
        }
    }
}
