use serde::Serialize;

use super::SENTINEL;

/// Serbian case forms and the English adjective for a worker's nationality.
///
/// `genitive` completes "državljanin ___", `locative` completes "u ___".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NationalityForms {
    pub genitive: String,
    pub locative: String,
    pub english: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NationalityLookup {
    Known(NationalityForms),
    /// The raw value is used verbatim in every slot.
    Unmapped(NationalityForms),
    Missing(NationalityForms),
}

impl NationalityLookup {
    pub fn forms(&self) -> &NationalityForms {
        match self {
            Self::Known(forms) | Self::Unmapped(forms) | Self::Missing(forms) => forms,
        }
    }

    pub fn into_forms(self) -> NationalityForms {
        match self {
            Self::Known(forms) | Self::Unmapped(forms) | Self::Missing(forms) => forms,
        }
    }
}

struct Forms {
    genitive: &'static str,
    locative: &'static str,
    english: &'static str,
}

const fn forms(genitive: &'static str, locative: &'static str, english: &'static str) -> Forms {
    Forms {
        genitive,
        locative,
        english,
    }
}

const NEPAL: Forms = forms("Nepala", "Nepalu", "Nepalese");
const BANGLADESH: Forms = forms("Bangladeša", "Bangladešu", "Bangladeshi");
const INDIA: Forms = forms("Indije", "Indiji", "Indian");
const PAKISTAN: Forms = forms("Pakistana", "Pakistanu", "Pakistani");
const SRI_LANKA: Forms = forms("Šri Lanke", "Šri Lanki", "Sri Lankan");
const PHILIPPINES: Forms = forms("Filipina", "Filipinima", "Filipino");
const INDONESIA: Forms = forms("Indonezije", "Indoneziji", "Indonesian");
const VIETNAM: Forms = forms("Vijetnama", "Vijetnamu", "Vietnamese");
const UZBEKISTAN: Forms = forms("Uzbekistana", "Uzbekistanu", "Uzbek");
const CHINA: Forms = forms("Kine", "Kini", "Chinese");
const TURKEY: Forms = forms("Turske", "Turskoj", "Turkish");
const EGYPT: Forms = forms("Egipta", "Egiptu", "Egyptian");
const TUNISIA: Forms = forms("Tunisa", "Tunisu", "Tunisian");
const MOROCCO: Forms = forms("Maroka", "Maroku", "Moroccan");
const ALBANIA: Forms = forms("Albanije", "Albaniji", "Albanian");
const UKRAINE: Forms = forms("Ukrajine", "Ukrajini", "Ukrainian");
const SERBIA: Forms = forms("Srbije", "Srbiji", "Serbian");

/// Keys are normalized the way passport OCR output is normalized before lookup.
const NATIONALITY_TABLE: &[(&str, &Forms)] = &[
    ("nepalese", &NEPAL),
    ("nepali", &NEPAL),
    ("nepal", &NEPAL),
    ("bangladeshi", &BANGLADESH),
    ("bangladesh", &BANGLADESH),
    ("indian", &INDIA),
    ("india", &INDIA),
    ("pakistani", &PAKISTAN),
    ("pakistan", &PAKISTAN),
    ("sri lankan", &SRI_LANKA),
    ("filipino", &PHILIPPINES),
    ("philippine", &PHILIPPINES),
    ("indonesian", &INDONESIA),
    ("vietnamese", &VIETNAM),
    ("uzbek", &UZBEKISTAN),
    ("chinese", &CHINA),
    ("turkish", &TURKEY),
    ("egyptian", &EGYPT),
    ("tunisian", &TUNISIA),
    ("moroccan", &MOROCCO),
    ("albanian", &ALBANIA),
    ("ukrainian", &UKRAINE),
    ("serbian", &SERBIA),
];

const NEPAL_ISSUER: &str = "MOFA, DEPARTMENT OF PASSPORTS";
const BANGLADESH_ISSUER: &str = "DIP, DHAKA";

const DEFAULT_ISSUERS: &[(&str, &str)] = &[
    ("nepalese", NEPAL_ISSUER),
    ("nepali", NEPAL_ISSUER),
    ("nepal", NEPAL_ISSUER),
    ("bangladeshi", BANGLADESH_ISSUER),
    ("bangladesh", BANGLADESH_ISSUER),
];

/// Trims, lowercases and collapses inner whitespace.
pub fn normalize(nationality: &str) -> String {
    nationality
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

pub fn nationality_forms(nationality: Option<&str>) -> NationalityLookup {
    let Some(raw) = nationality.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return NationalityLookup::Missing(repeated(SENTINEL));
    };

    let key = normalize(raw);
    match NATIONALITY_TABLE.iter().find(|(candidate, _)| *candidate == key) {
        Some((_, forms)) => NationalityLookup::Known(NationalityForms {
            genitive: forms.genitive.to_string(),
            locative: forms.locative.to_string(),
            english: forms.english.to_string(),
        }),
        None => NationalityLookup::Unmapped(repeated(raw)),
    }
}

/// Issuing authority printed on passports of the given nationality, when the
/// agency has a standing default for it.
pub fn default_issuer(nationality: &str) -> Option<&'static str> {
    let key = normalize(nationality);
    DEFAULT_ISSUERS
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, issuer)| *issuer)
}

/// Outcome of resolving the passport issuer slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssuerChoice {
    Extracted(String),
    Defaulted(&'static str),
    /// Too short to trust, but nothing better is known.
    KeptNoisy(String),
    Missing,
}

impl IssuerChoice {
    pub fn into_value(self) -> String {
        match self {
            Self::Extracted(value) | Self::KeptNoisy(value) => value,
            Self::Defaulted(value) => value.to_string(),
            Self::Missing => SENTINEL.to_string(),
        }
    }
}

/// Picks the passport issuer, replacing OCR noise (trimmed length at or below
/// `noise_threshold` characters) with the nationality default where one exists.
pub fn passport_issuer(
    issuer: Option<&str>,
    nationality: Option<&str>,
    noise_threshold: usize,
) -> IssuerChoice {
    let issuer = issuer.map(str::trim).filter(|value| !value.is_empty());
    if let Some(value) = issuer {
        if value.chars().count() > noise_threshold {
            return IssuerChoice::Extracted(value.to_string());
        }
    }

    if let Some(default) = nationality.and_then(default_issuer) {
        return IssuerChoice::Defaulted(default);
    }

    match issuer {
        Some(value) => IssuerChoice::KeptNoisy(value.to_string()),
        None => IssuerChoice::Missing,
    }
}

fn repeated(value: &str) -> NationalityForms {
    NationalityForms {
        genitive: value.to_string(),
        locative: value.to_string(),
        english: value.to_string(),
    }
}
