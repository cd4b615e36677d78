//! Turns a placeholder map into PDF bytes, one renderer per document type.

mod authorization;
mod consent;
mod contract;
mod elements;
mod fonts;
mod invitation;
pub mod layout;

pub use authorization::power_of_attorney;
pub use consent::statement_of_consent;
pub use contract::employment_contract;
pub use fonts::{AssetLoadError, FontSet};
pub use invitation::invitation_letter;
pub use layout::{compose, Sheet};

use super::kind::DocumentType;
use super::placeholders::PlaceholderMap;
use super::stamp::StampError;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to lay out {kind}: {source}")]
    Layout {
        kind: DocumentType,
        #[source]
        source: genpdf::error::Error,
    },
    #[error("failed to stamp page numbers on {kind}: {source}")]
    Stamp {
        kind: DocumentType,
        #[source]
        source: StampError,
    },
    #[error("renderer for {kind} produced a buffer that is not a PDF")]
    Corrupt { kind: DocumentType },
}

impl RenderError {
    pub fn kind(&self) -> DocumentType {
        match self {
            RenderError::Layout { kind, .. }
            | RenderError::Stamp { kind, .. }
            | RenderError::Corrupt { kind } => *kind,
        }
    }
}

/// Layout description for `kind`, without touching fonts.
pub fn sheet_for(kind: DocumentType, map: &PlaceholderMap) -> Sheet {
    match kind {
        DocumentType::EmploymentContract => employment_contract(map),
        DocumentType::StatementOfConsent => statement_of_consent(map),
        DocumentType::PowerOfAttorney => power_of_attorney(map),
        DocumentType::InvitationLetter => invitation_letter(map),
    }
}

/// Renders one unstamped document. Output that is not a PDF is rejected.
pub fn render(
    kind: DocumentType,
    map: &PlaceholderMap,
    fonts: &FontSet,
) -> Result<Vec<u8>, RenderError> {
    let bytes =
        compose(sheet_for(kind, map), fonts).map_err(|source| RenderError::Layout { kind, source })?;
    if !bytes.starts_with(b"%PDF-") {
        return Err(RenderError::Corrupt { kind });
    }
    Ok(bytes)
}

#[cfg(test)]
pub(crate) fn sample_map() -> PlaceholderMap {
    use super::case::CaseRecord;
    use super::placeholders::{build_placeholders, PlaceholderPolicy};

    build_placeholders(&CaseRecord::sample(), &PlaceholderPolicy::default())
}
