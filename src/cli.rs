use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "tiny-squeeze",
    about = "Recursively shrink every file in a directory tree through the TinyPNG API, in place",
    long_about = "tiny-squeeze walks a directory tree, uploads each file it finds to the TinyPNG \
                  compression service, and overwrites the original with the compressed result. \
                  Files are processed concurrently and replaced in place; no backups are kept. \
                  Requires a TinyPNG account key in the TINY_PNG_KEY environment variable.",
    version = "0.1.0",
    after_help = "EXAMPLES:\n  \
    TINY_PNG_KEY=xxxx tiny-squeeze ./images\n  \
    TINY_PNG_KEY=xxxx tiny-squeeze photo.png\n  \
    TINY_PNG_KEY=xxxx tiny-squeeze"
)]
pub struct Args {
    #[arg(
        default_value = ".",
        help = "File or directory to shrink (default: current directory)",
        long_help = "Root of the tree to process. Every regular file below it is uploaded \
                     and overwritten with the compressed result, regardless of extension. \
                     A single file path is also accepted."
    )]
    pub path: PathBuf,

    #[arg(
        long,
        help = "Override the compression service endpoint",
        long_help = "Override the shrink endpoint URL. \
                     Default: https://api.tinify.com/shrink"
    )]
    pub api_url: Option<String>,

    #[arg(short = 'q', long, help = "Suppress non-error output")]
    pub quiet: bool,

    #[arg(short = 'v', long, help = "Show per-file upload/download progress")]
    pub verbose: bool,
}
