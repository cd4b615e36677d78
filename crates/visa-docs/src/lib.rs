//! Bilingual work-visa contract documents: validation, placeholder derivation,
//! PDF rendering and page numbering, plus the configuration and telemetry
//! shared by the service binary.

pub mod config;
pub mod documents;
pub mod error;
pub mod telemetry;

pub use documents::{
    CaseRecord, DocumentBundle, DocumentEngine, DocumentType, PlaceholderPolicy, RenderedDocument,
    RequiredField,
};
pub use error::AppError;
