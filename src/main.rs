use anyhow::Result;
use std::process::ExitCode;
use tracing::error;

use clubsite::cli::App;

fn main() -> Result<ExitCode> {
    let app = App::from_args();
    app.init_logging()?;

    match app.run() {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            error!("{}", e);
            Ok(ExitCode::from(e.exit_code()))
        }
    }
}
