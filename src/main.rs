use std::process::ExitCode;

use clap::Parser;
use telex::cli::{self, Cli};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli::run(cli).await {
        Ok(line) => {
            println!("{line}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("received the following error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
