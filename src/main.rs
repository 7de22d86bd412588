use clap::Parser;
use std::env;
use tiny_squeeze::batch::shrink_tree_sync;
use tiny_squeeze::cli::Args;
use tiny_squeeze::client::ShrinkOptions;
use tiny_squeeze::constants::API_KEY_ENV;
use tiny_squeeze::error::{Result, SqueezeError};
use tiny_squeeze::{error, logger};

fn main() {
    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    logger::configure(args.quiet, args.verbose);

    // The key is the only fatal configuration: nothing is walked or
    // spawned without it.
    let secret = env::var(API_KEY_ENV).unwrap_or_default();
    if secret.is_empty() {
        return Err(SqueezeError::MissingApiKey);
    }

    let options = ShrinkOptions::new(args.api_url, secret);
    shrink_tree_sync(&args.path, &options)
}
