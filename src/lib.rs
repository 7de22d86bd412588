pub mod batch;
pub mod cli;
pub mod client;
pub mod constants;
pub mod error;
pub mod logger;
pub mod walker;

pub use batch::{shrink_file, shrink_tree_async, shrink_tree_sync};
pub use client::{basic_auth, ShrinkClient, ShrinkOptions, ShrinkOutput, ShrinkResponse};
pub use error::{Result, SqueezeError};
pub use walker::walk;
