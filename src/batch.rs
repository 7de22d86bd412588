use crate::client::{ShrinkClient, ShrinkOptions};
use crate::error::{Result, SqueezeError};
use crate::walker::walk;
use crate::{error, info, transfer, warn};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinSet;

/// Runs the upload/download round-trip for one file and overwrites it in
/// place with the compressed bytes.
///
/// Terminal on first failure: no retry, no rollback. Any error before the
/// final write leaves the original file untouched; the write itself
/// truncates first, so the uncompressed content is gone once it starts.
pub async fn shrink_file(client: Arc<ShrinkClient>, path: &Path) -> Result<()> {
    let original = tokio::fs::read(path).await?;
    transfer!("Uploading {:?} ({} bytes)", path, original.len());

    let response = client.shrink(original).await?;
    transfer!("Downloading {:?} from {}", path, response.output.url);

    let compressed = client.fetch(&response.output.url).await?;
    tokio::fs::write(path, &compressed).await?;
    Ok(())
}

/// Walks `root` and spawns one shrink task per discovered file, with no
/// cap on in-flight tasks. Returns only after every spawned task has
/// finished, even when some of them failed.
///
/// Per-file failures are logged and swallowed; a walk failure stops
/// discovery but neither cancels already-spawned tasks nor fails the run.
pub async fn shrink_tree_async(root: &Path, options: &ShrinkOptions) -> Result<()> {
    info!("🚀 Shrinking files under {:?}", root);
    let start_time = Instant::now();

    let client = Arc::new(ShrinkClient::new(options)?);

    let progress = ProgressBar::new(0);
    progress.set_style(ProgressStyle::default_bar());

    let mut tasks: JoinSet<()> = JoinSet::new();
    let mut spawned: usize = 0;
    let mut walk_error: Option<SqueezeError> = None;

    for entry in walk(root) {
        match entry {
            Ok(path) => {
                spawned += 1;
                progress.inc_length(1);
                tasks.spawn(shrink_task(Arc::clone(&client), path, progress.clone()));
            }
            Err(e) => {
                // First traversal failure ends discovery; tasks already
                // spawned keep running.
                walk_error = Some(SqueezeError::Walk(e));
                break;
            }
        }
    }

    // Full join before returning, regardless of task outcomes.
    while tasks.join_next().await.is_some() {}

    progress.finish_and_clear();

    if let Some(e) = walk_error {
        error!("Directory walk failed: {}", e);
    }

    if spawned == 0 {
        warn!("No files found under {:?}", root);
    }

    info!(
        "✅ Processed {} file(s) in {:?}",
        spawned,
        start_time.elapsed()
    );

    Ok(())
}

async fn shrink_task(client: Arc<ShrinkClient>, path: PathBuf, progress: ProgressBar) {
    if let Err(e) = shrink_file(client, &path).await {
        error!("Failed to shrink {:?}: {}", path, e);
    }
    progress.inc(1);
}

pub fn shrink_tree_sync(root: &Path, options: &ShrinkOptions) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(shrink_tree_async(root, options))
}
