use clap::Parser;
use signup_client::Args;
use signup_client::frameworks::app;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env before parsing so env-backed flags see it.
    let _ = dotenvy::dotenv();
    app::init_tracing();

    let args = Args::parse();
    signup_client::run(args).await
}
