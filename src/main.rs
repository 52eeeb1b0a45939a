// Entrypoint for the CLI application.
// - Keeps `main` small: parse, wire the real terminal and HTTP client into
//   the dispatcher, and turn its result into the exit code.

use clap::Parser;
use pastebincli::api::HttpTransport;
use pastebincli::cli::{init_logging, App, Cli};
use pastebincli::ui::{TerminalOutput, TerminalPrompter};
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let transport = HttpTransport::new()?;
    let mut prompt = TerminalPrompter;
    let mut out = TerminalOutput::stdout();

    let mut app = App {
        store: cli.config_store(),
        endpoints: cli.endpoints(),
        transport: &transport,
        prompt: &mut prompt,
        out: &mut out,
    };
    Ok(ExitCode::from(app.run(cli.command)))
}
