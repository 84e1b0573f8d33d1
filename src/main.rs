#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(
    unused,
    clippy::correctness,
    missing_debug_implementations,
    missing_docs,
    clippy::all,
    clippy::wildcard_imports,
    clippy::needless_borrow,
    clippy::cast_lossless,
    clippy::unused_async,
    clippy::explicit_iter_loop,
    clippy::explicit_into_iter_loop,
    clippy::cloned_instead_of_copied
)]
#![cfg_attr(not(test), forbid(clippy::indexing_slicing))]
#![cfg_attr(not(test), forbid(clippy::string_slice))]
#![allow(clippy::match_bool, clippy::bool_assert_comparison)]
mod config;
pub(crate) mod driver;
pub(crate) mod error;
pub(crate) mod filter;
pub(crate) mod input;
pub(crate) mod output;

use config::Config;
use driver::run_batch;
use env_logger::Env;
use std::env;
use std::process;

#[cfg(feature = "mimalloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() {
    // stdout carries the result, keep stderr quiet by default
    let env = Env::new().filter_or("RUST_LOG", "warn");
    env_logger::Builder::from_env(env).init();

    let args: Vec<String> = env::args().collect();
    if args.len() > 2 {
        eprintln!(
            "Usage: {} [config_file] < input",
            args.first().unwrap_or(&"delivery-filter".to_string())
        );
        process::exit(1);
    }

    let config = match args.get(1) {
        Some(config_path) => match Config::from_file(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Failed to read config: {}", e);
                process::exit(1);
            }
        },
        None => Config::default(),
    };
    log::debug!("Using {config:?}");

    if let Err(e) = run_batch(tokio::io::stdin(), tokio::io::stdout(), &config).await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
