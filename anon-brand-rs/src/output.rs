//! Writing generated files.

use crate::error::{BrandError, BrandResult};
use anon_brand_canvas2d::Canvas;
use std::path::{Path, PathBuf};

/// Create `dir` and any missing parents.
pub fn ensure_dir(dir: &Path) -> BrandResult<()> {
    std::fs::create_dir_all(dir).map_err(|source| BrandError::Io {
        path: dir.to_path_buf(),
        source,
    })
}

/// Write `bytes` to `out_dir/file_name`, replacing any existing file.
pub fn write_file(out_dir: &Path, file_name: &str, bytes: &[u8]) -> BrandResult<PathBuf> {
    let path = out_dir.join(file_name);
    std::fs::write(&path, bytes).map_err(|source| BrandError::Io {
        path: path.clone(),
        source,
    })?;
    log::info!("Wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(path)
}

/// Encode `canvas` as PNG and write it to `out_dir/file_name`.
pub fn save_png(canvas: &Canvas, out_dir: &Path, file_name: &str) -> BrandResult<PathBuf> {
    let png = canvas.encode_png()?;
    write_file(out_dir, file_name, &png)
}
