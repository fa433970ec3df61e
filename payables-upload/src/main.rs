//! Receipt upload endpoint
//!
//! A thin HTTP service with exactly one job: accept `multipart/form-data`
//! receipt uploads, store the file, and hand back JSON metadata. Everything
//! else about documents lives in the backend proper.

mod config;
mod error;
mod multipart;
mod server;

use std::fs::File;

use simplelog::Config;
use simplelog::LevelFilter;
use simplelog::WriteLogger;

use crate::config::UploadConfig;

#[tokio::main]
async fn main() {
    let log_file = File::create("payables-upload.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let config = UploadConfig::from_env();

    if let Err(e) = server::run(config).await {
        eprintln!("Error: {}", e);
    }
}
