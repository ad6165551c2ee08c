//! Output store provisioning from the packaged template.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{Result, StoreError};

/// Copy the template store into `output_folder` as `Job_<job_id>.gdb`.
///
/// Idempotent by overwrite: any prior store at the computed path is removed
/// before the copy, so re-provisioning the same job yields a store holding
/// only the subsequent run's appends.
pub fn provision_from_template(
    template: &Path,
    output_folder: &Path,
    job_id: i64,
) -> Result<PathBuf> {
    if !template.is_dir() {
        return Err(StoreError::TemplateMissing {
            path: template.to_path_buf(),
        });
    }

    let output_path = output_folder.join(format!("Job_{job_id}.gdb"));
    if output_path.exists() {
        fs::remove_dir_all(&output_path).map_err(|e| StoreError::io(&output_path, e))?;
    }
    copy_dir(template, &output_path)?;
    info!(path = %output_path.display(), job_id, "provisioned output store");
    Ok(output_path)
}

fn copy_dir(from: &Path, to: &Path) -> Result<()> {
    fs::create_dir_all(to).map_err(|e| StoreError::io(to, e))?;
    let entries = fs::read_dir(from).map_err(|e| StoreError::io(from, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| StoreError::io(from, e))?;
        let source = entry.path();
        let dest = to.join(entry.file_name());
        if source.is_dir() {
            copy_dir(&source, &dest)?;
        } else {
            fs::copy(&source, &dest).map_err(|e| StoreError::io(&source, e))?;
        }
    }
    Ok(())
}
