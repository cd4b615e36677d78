use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four documents produced for every approved case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    EmploymentContract,
    StatementOfConsent,
    PowerOfAttorney,
    InvitationLetter,
}

impl DocumentType {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::EmploymentContract,
            Self::StatementOfConsent,
            Self::PowerOfAttorney,
            Self::InvitationLetter,
        ]
    }

    /// Short code used by the admin tooling and file naming.
    pub const fn code(self) -> &'static str {
        match self {
            Self::EmploymentContract => "UGOVOR",
            Self::StatementOfConsent => "IZJAVA",
            Self::PowerOfAttorney => "OVLASCENJE",
            Self::InvitationLetter => "POZIVNO_PISMO",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::EmploymentContract => "UGOVOR O RADU",
            Self::StatementOfConsent => "IZJAVA O SAGLASNOSTI",
            Self::PowerOfAttorney => "OVLAŠĆENJE",
            Self::InvitationLetter => "POZIVNO PISMO",
        }
    }

    pub const fn file_stem(self) -> &'static str {
        match self {
            Self::EmploymentContract => "UGOVOR_O_RADU",
            Self::StatementOfConsent => "IZJAVA_O_SAGLASNOSTI",
            Self::PowerOfAttorney => "OVLASCENJE",
            Self::InvitationLetter => "POZIVNO_PISMO",
        }
    }

    /// Only the contract is long enough to need page numbers.
    pub const fn is_paginated(self) -> bool {
        matches!(self, Self::EmploymentContract)
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported document type '{0}'")]
pub struct UnknownDocumentType(pub String);

impl FromStr for DocumentType {
    type Err = UnknownDocumentType;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "ugovor" | "ugovor_o_radu" | "employment_contract" | "contract" => {
                Ok(Self::EmploymentContract)
            }
            "izjava" | "izjava_o_saglasnosti" | "statement_of_consent" | "consent" => {
                Ok(Self::StatementOfConsent)
            }
            "ovlascenje" | "power_of_attorney" | "authorization" => Ok(Self::PowerOfAttorney),
            "pozivno_pismo" | "invitation_letter" | "invitation" => Ok(Self::InvitationLetter),
            _ => Err(UnknownDocumentType(value.to_string())),
        }
    }
}
