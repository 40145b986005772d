use std::process::ExitCode;
use tree_runner::{EXIT_RUN_ERROR, cli};

#[tokio::main]
async fn main() -> ExitCode {
    match cli::run().await {
        Ok(code) => ExitCode::from(u8::try_from(code).unwrap_or(EXIT_RUN_ERROR)),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(EXIT_RUN_ERROR)
        }
    }
}
