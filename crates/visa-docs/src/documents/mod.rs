//! Contract document generation: case validation, placeholder derivation,
//! bilingual rendering and page numbering.

pub mod case;
mod engine;
pub mod kind;
pub mod placeholders;
pub mod render;
pub mod stamp;
pub mod validator;

pub use case::CaseRecord;
pub use engine::{BatchError, CasePreview, DocumentBundle, DocumentEngine, RenderedDocument};
pub use kind::{DocumentType, UnknownDocumentType};
pub use placeholders::{
    build_placeholders, BuildNote, Placeholder, PlaceholderMap, PlaceholderPolicy, SENTINEL,
};
pub use render::{AssetLoadError, FontSet, RenderError};
pub use stamp::{stamp_page_numbers, StampError};
pub use validator::{validate_case, RequiredField};
