//! Kodegen Bundler Android - Trusted Web Activity package builder.
//!
//! This binary builds an Android APK for a web app from its package settings,
//! optionally signs it, and reports the artifact as JSON on stdout.

use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match kodegen_bundler_android::cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
