//! Command implementations

mod remove;
mod show;

pub use remove::run_remove;
pub use show::run_show;

use blockcut_fs::{ConfigStore, NormalizedPath};
use blockcut_span::{RemovalJob, SpanResolver};

use crate::cli::Selection;
use crate::error::{CliError, Result};

/// Merge the job file (if any) with command-line values and build the
/// document path and resolver.
///
/// A relative `file` from a job file is taken relative to the job file's
/// directory; a `FILE` argument is taken relative to the working directory.
pub(crate) fn prepare(selection: &Selection) -> Result<(NormalizedPath, SpanResolver)> {
    let base = match &selection.config {
        Some(config_path) => {
            let mut job: RemovalJob = ConfigStore::new().load(&NormalizedPath::new(config_path))?;
            if let (Some(file), Some(dir)) = (&mut job.file, config_path.parent()) {
                if file.is_relative() {
                    *file = dir.join(&*file);
                }
            }
            job
        }
        None => RemovalJob::default(),
    };

    let job = base.merge(selection.to_job());
    tracing::debug!(?job, "effective removal job");

    let file = job.file.as_deref().ok_or_else(|| {
        CliError::user("no document given: pass FILE or set `file` in the job file")
    })?;
    let resolver = job.resolver()?;

    Ok((NormalizedPath::new(file), resolver))
}
