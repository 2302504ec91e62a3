// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) uses these modules to implement the interactive front end.
//
// Module responsibilities:
// - `api`: Encapsulates HTTP interactions with the FOSSA-style scanning
//   service (analyze, latest-scan, project stats) and holds the session
//   API key.
// - `key`: Resolves the API key from the environment, the OS secrets
//   store, or an interactive masked prompt, in that order.
// - `ui`: Implements the terminal menu and the three page flows and
//   delegates requests to `api`.
//
// Keeping this separation makes it easier to test the API logic or
// replace the UI in the future (for example, adding a TUI or GUI).
pub mod api;
pub mod key;
pub mod ui;
