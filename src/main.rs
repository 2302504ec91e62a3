// Entrypoint for the CLI application.
// - Keeps `main` small: create an API client and hand it to the UI loop.
// - Returns `anyhow::Result` to simplify error handling for the prototype.

use fossa_scan_cli::{api::ApiClient, ui::main_menu};

fn main() -> anyhow::Result<()> {
    // RUST_LOG controls verbosity; failure details from the API are
    // logged at debug level while the UI shows generic notices.
    env_logger::init();

    let api = ApiClient::new()?;

    // Start the interactive menu. This call blocks until the user exits.
    main_menu(api)?;
    Ok(())
}
