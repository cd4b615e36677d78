use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::case::CaseRecord;
use super::kind::DocumentType;
use super::placeholders::{build_placeholders, BuildNote, PlaceholderMap, PlaceholderPolicy};
use super::render::{self, FontSet, RenderError};
use super::stamp::stamp_page_numbers;
use super::validator::{validate_case, RequiredField};

/// Finished PDF bytes for one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    kind: DocumentType,
    bytes: Vec<u8>,
}

impl RenderedDocument {
    pub fn kind(&self) -> DocumentType {
        self.kind
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn file_name(&self) -> String {
        format!("{}.pdf", self.kind.file_stem())
    }
}

/// One rendered document per [`DocumentType`], in [`DocumentType::ordered`] order.
#[derive(Debug, Clone)]
pub struct DocumentBundle {
    documents: Vec<RenderedDocument>,
}

impl DocumentBundle {
    pub fn get(&self, kind: DocumentType) -> Option<&RenderedDocument> {
        self.documents.iter().find(|document| document.kind == kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RenderedDocument> {
        self.documents.iter()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl IntoIterator for DocumentBundle {
    type Item = RenderedDocument;
    type IntoIter = std::vec::IntoIter<RenderedDocument>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.into_iter()
    }
}

/// A batch stopped at the first document that failed; nothing else is returned.
#[derive(Debug, thiserror::Error)]
#[error("batch generation stopped at {failed}: {source}")]
pub struct BatchError {
    pub failed: DocumentType,
    #[source]
    pub source: RenderError,
}

/// Preview of what a generation call would print, without rendering.
#[derive(Debug, Clone, Serialize)]
pub struct CasePreview {
    pub missing: Vec<RequiredField>,
    pub notes: Vec<BuildNote>,
    pub placeholders: PlaceholderMap,
}

impl CasePreview {
    /// Needs no fonts, so hosts can preview before the engine is loaded.
    pub fn new(case: &CaseRecord, policy: &PlaceholderPolicy) -> Self {
        let placeholders = build_placeholders(case, policy);
        Self {
            missing: validate_case(case),
            notes: placeholders.notes().to_vec(),
            placeholders,
        }
    }
}

/// Sequences validation, placeholder building, rendering and page stamping.
///
/// Cheap to clone; the loaded fonts are shared.
#[derive(Debug, Clone)]
pub struct DocumentEngine {
    fonts: Arc<FontSet>,
    policy: PlaceholderPolicy,
}

impl DocumentEngine {
    pub fn new(fonts: FontSet, policy: PlaceholderPolicy) -> Self {
        Self::with_shared_fonts(Arc::new(fonts), policy)
    }

    pub fn with_shared_fonts(fonts: Arc<FontSet>, policy: PlaceholderPolicy) -> Self {
        Self { fonts, policy }
    }

    pub fn policy(&self) -> &PlaceholderPolicy {
        &self.policy
    }

    pub fn validate(&self, case: &CaseRecord) -> Vec<RequiredField> {
        validate_case(case)
    }

    pub fn placeholders(&self, case: &CaseRecord) -> PlaceholderMap {
        build_placeholders(case, &self.policy)
    }

    pub fn preview(&self, case: &CaseRecord) -> CasePreview {
        CasePreview::new(case, &self.policy)
    }

    /// Renders a single document. Validation is the caller's decision.
    pub fn generate_document(
        &self,
        kind: DocumentType,
        case: &CaseRecord,
    ) -> Result<RenderedDocument, RenderError> {
        let map = self.placeholders(case);
        self.render_with(kind, &map)
    }

    /// Renders all four documents from one placeholder map, stopping at the first
    /// failure.
    pub fn generate_all(&self, case: &CaseRecord) -> Result<DocumentBundle, BatchError> {
        let map = self.placeholders(case);
        let mut documents = Vec::with_capacity(DocumentType::ordered().len());
        for kind in DocumentType::ordered() {
            let document = self.render_with(kind, &map).map_err(|source| {
                warn!(document = %kind, error = %source, "batch generation aborted");
                BatchError {
                    failed: kind,
                    source,
                }
            })?;
            documents.push(document);
        }
        info!(documents = documents.len(), "generated document bundle");
        Ok(DocumentBundle { documents })
    }

    fn render_with(
        &self,
        kind: DocumentType,
        map: &PlaceholderMap,
    ) -> Result<RenderedDocument, RenderError> {
        let mut bytes = render::render(kind, map, &self.fonts)?;
        if kind.is_paginated() {
            bytes = stamp_page_numbers(&bytes)
                .map_err(|source| RenderError::Stamp { kind, source })?;
        }
        debug!(document = %kind, bytes = bytes.len(), "rendered document");
        Ok(RenderedDocument { kind, bytes })
    }
}
