//! Document I/O operations for imposition

use crate::render::PdfSource;
use crate::types::*;
use lopdf::Document;
use std::path::Path;

/// Read a file's bytes
pub async fn read_bytes(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    Ok(tokio::fs::read(path).await?)
}

/// Load and parse a PDF document
pub async fn load_pdf(path: impl AsRef<Path>) -> Result<PdfSource> {
    let bytes = read_bytes(path).await?;
    tokio::task::spawn_blocking(move || PdfSource::load(&bytes)).await?
}

/// Write imposed output bytes
pub async fn save_pdf(bytes: &[u8], path: impl AsRef<Path>) -> Result<()> {
    tokio::fs::write(path, bytes).await?;
    Ok(())
}

/// Serialize and save a document
pub async fn save_document(mut doc: Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::task::spawn_blocking(move || {
        let mut writer = Vec::new();
        doc.save_to(&mut writer)?;
        Ok::<_, ImposeError>(writer)
    })
    .await??;
    save_pdf(&bytes, path).await
}
