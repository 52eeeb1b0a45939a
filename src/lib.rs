// Library root
// -----------
// The binary (`main.rs`) parses arguments and hands a `cli::App` its real
// collaborators; everything else lives here so it can be driven by tests.
//
// Module responsibilities:
// - `api`: blocking HTTP transport and the service endpoints.
// - `backend`: pastebin.com and paste.rs request shapes and status handling.
// - `config`: the persisted config file and the setup wizard.
// - `compose`: building a paste from flags or interactive prompts.
// - `cli`: argument definitions, usage text and command dispatch.
// - `ui`: output sink and prompt source traits with terminal implementations.
// - `testing`: in-memory doubles for the transport, prompts and output.
pub mod api;
pub mod backend;
pub mod cli;
pub mod compose;
pub mod config;
pub mod error;
pub mod testing;
pub mod ui;

pub use error::{PasteError, Result};
