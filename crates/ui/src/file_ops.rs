//! File Operations for Catalog Admin
//!
//! Native dialogs via the `rfd` crate: picking product photos to attach
//! and choosing where to export a catalog snapshot.

use catalog_core::{CatalogError, CatalogResult};
use catalog_model::{AttachedFile, CatalogSnapshot, SNAPSHOT_EXTENSION, save_snapshot};
use rfd::AsyncFileDialog;
use std::path::{Path, PathBuf};

// ============================================================================
// File Filter Constants
// ============================================================================

/// Extensions offered by the photo picker
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Display name for the photo filter
pub const IMAGE_TYPE_NAME: &str = "PNG or JPEG image";

/// Display name for the snapshot filter
pub const SNAPSHOT_TYPE_NAME: &str = "Catalog snapshot";

// ============================================================================
// Photo picking
// ============================================================================

/// Open a file dialog to select product photos
///
/// Returns the selected paths in selection order, or None if the dialog
/// was cancelled.
pub async fn show_image_dialog() -> Option<Vec<PathBuf>> {
    let files = AsyncFileDialog::new()
        .set_title("Attach Photos")
        .add_filter(IMAGE_TYPE_NAME, IMAGE_EXTENSIONS)
        .pick_files()
        .await?;

    Some(files.iter().map(|f| f.path().to_path_buf()).collect())
}

/// Read one picked file into an attachment
///
/// Only PNG and JPEG files are accepted.
pub async fn read_attachment(path: &Path) -> CatalogResult<AttachedFile> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| CatalogError::invalid_field("images", "path has no file name"))?;

    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| CatalogError::FileRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let file = AttachedFile::from_name(name, bytes);
    if !file.is_accepted_image() {
        return Err(CatalogError::invalid_field(
            "images",
            format!("'{}' is not a PNG or JPEG image", file.name),
        ));
    }
    Ok(file)
}

/// Read picked files, keeping their order
///
/// Files that cannot be read or are not images are skipped and logged.
pub async fn read_attachments(paths: &[PathBuf]) -> Vec<AttachedFile> {
    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        match read_attachment(path).await {
            Ok(file) => files.push(file),
            Err(e) => tracing::warn!("Skipping {}: {}", path.display(), e),
        }
    }
    files
}

/// Ask for photos and read them
///
/// Returns [`CatalogError::Cancelled`] if the dialog was dismissed.
pub async fn pick_images() -> CatalogResult<Vec<AttachedFile>> {
    let paths = show_image_dialog().await.ok_or(CatalogError::Cancelled)?;
    let files = read_attachments(&paths).await;
    tracing::debug!("Picked {} of {} files", files.len(), paths.len());
    Ok(files)
}

// ============================================================================
// Snapshot export
// ============================================================================

/// Open a file dialog to select where to export the catalog
pub async fn show_export_dialog() -> Option<PathBuf> {
    let file = AsyncFileDialog::new()
        .set_title("Export Catalog")
        .add_filter(SNAPSHOT_TYPE_NAME, &[SNAPSHOT_EXTENSION])
        .set_file_name("catalog.json")
        .save_file()
        .await?;

    Some(ensure_extension(file.path().to_path_buf()))
}

/// Write a snapshot, asking for the destination if none is given
pub async fn export_snapshot(
    snapshot: &CatalogSnapshot,
    path: Option<PathBuf>,
) -> CatalogResult<PathBuf> {
    let path = match path {
        Some(p) => ensure_extension(p),
        None => show_export_dialog().await.ok_or(CatalogError::Cancelled)?,
    };

    save_snapshot(snapshot, &path)?;
    tracing::info!("Exported catalog to {}", path.display());
    Ok(path)
}

/// Ensure a path has the snapshot extension
fn ensure_extension(path: PathBuf) -> PathBuf {
    if path.extension().is_some_and(|ext| ext == SNAPSHOT_EXTENSION) {
        path
    } else {
        path.with_extension(SNAPSHOT_EXTENSION)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_model::Category;

    #[test]
    fn test_ensure_extension() {
        assert_eq!(
            ensure_extension(PathBuf::from("out/catalog")),
            PathBuf::from("out/catalog.json")
        );
        assert_eq!(
            ensure_extension(PathBuf::from("catalog.json")),
            PathBuf::from("catalog.json")
        );
    }

    #[test]
    fn test_read_attachments_keeps_order_and_skips_non_images() {
        let dir = tempfile::tempdir().unwrap();
        let front = dir.path().join("front.png");
        let notes = dir.path().join("notes.txt");
        let back = dir.path().join("back.JPG");
        std::fs::write(&front, [1u8, 2]).unwrap();
        std::fs::write(&notes, b"hello").unwrap();
        std::fs::write(&back, [3u8]).unwrap();

        let files = tokio_test::block_on(read_attachments(&[
            front,
            notes,
            back,
            dir.path().join("missing.png"),
        ]));

        let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["front.png", "back.JPG"]);
        assert_eq!(files[0].bytes, vec![1, 2]);
        assert_eq!(files[1].mime, "image/jpeg");
    }

    #[test]
    fn test_export_snapshot_to_given_path() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = CatalogSnapshot::new(vec![Category::new("Shirts")], Vec::new());

        let path = tokio_test::block_on(export_snapshot(
            &snapshot,
            Some(dir.path().join("export")),
        ))
        .unwrap();

        assert_eq!(path, dir.path().join("export.json"));
        assert!(path.exists());
    }
}
