use std::process::ExitCode;

use clap::Parser;
use refuge::cli::RefugeApp;

fn main() -> ExitCode {
    env_logger::init();
    let args = RefugeApp::parse();
    match args.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("{}", e.alert());
            ExitCode::FAILURE
        }
    }
}
