use metrics_exporter_prometheus::PrometheusHandle;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use visa_docs::config::AppConfig;
use visa_docs::documents::{CaseRecord, DocumentEngine, FontSet, RenderedDocument};
use visa_docs::error::AppError;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Loads the configured fonts once. A missing face is fatal for every caller.
pub(crate) fn load_engine(config: &AppConfig) -> Result<DocumentEngine, AppError> {
    let fonts = FontSet::load(&config.fonts)?;
    Ok(DocumentEngine::new(fonts, config.documents.policy()))
}

pub(crate) fn read_case(path: &Path) -> Result<CaseRecord, AppError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Writes each document as `<FILE_STEM>.pdf` under `dir`, replacing older copies.
pub(crate) fn write_documents<I>(dir: &Path, documents: I) -> Result<Vec<PathBuf>, AppError>
where
    I: IntoIterator<Item = RenderedDocument>,
{
    fs::create_dir_all(dir)?;
    let mut written = Vec::new();
    for document in documents {
        let path = dir.join(document.file_name());
        fs::write(&path, document.bytes())?;
        written.push(path);
    }
    Ok(written)
}
