//! Writes the site as plain files for static hosting.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::app::STYLESHEET;
use crate::config::BasePath;
use crate::motion::MotionLayer;
use crate::render::render_document;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// What an export produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub index: PathBuf,
    /// Copied stylesheet, `None` when no compiled stylesheet was found
    pub stylesheet: Option<PathBuf>,
}

/// Render the page into `out_dir/index.html` and copy the compiled stylesheet
/// from `site_root` next to it.
///
/// `out_dir` maps to `base` once published, so asset URLs in the document are
/// prefixed with the base path while files on disk are not.
pub fn export_site(
    base: &BasePath,
    site_root: &Path,
    out_dir: &Path,
) -> Result<ExportReport, ExportError> {
    let io_err = |path: &Path| {
        let path = path.to_path_buf();
        move |source| ExportError::Io { path, source }
    };

    fs::create_dir_all(out_dir).map_err(io_err(out_dir))?;

    let index = out_dir.join("index.html");
    let html = render_document(base, MotionLayer::Animated);
    fs::write(&index, html).map_err(io_err(&index))?;
    tracing::info!(path = %index.display(), %base, "wrote page");

    let compiled = site_root.join(STYLESHEET);
    let stylesheet = if compiled.is_file() {
        let target = out_dir.join(STYLESHEET);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(io_err(parent))?;
        }
        fs::copy(&compiled, &target).map_err(io_err(&target))?;
        tracing::info!(path = %target.display(), "copied stylesheet");
        Some(target)
    } else {
        tracing::warn!(
            path = %compiled.display(),
            "no compiled stylesheet found, run `cargo leptos build` first; exporting without it"
        );
        None
    };

    Ok(ExportReport { index, stylesheet })
}
