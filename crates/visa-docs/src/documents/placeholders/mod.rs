//! Flattens a case record into the string slots every template draws from.

mod currency;
mod dates;
mod job;
mod names;
mod nationality;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use tracing::{debug, warn};

use super::case::{present, CaseRecord};

pub use currency::format_rsd;
pub use dates::{format_date_en, format_date_sr, parse_date};
pub use job::split_job_description;
pub use names::split_name;
pub use nationality::{
    default_issuer, nationality_forms, passport_issuer, IssuerChoice, NationalityForms,
    NationalityLookup,
};

/// Blank line printed wherever a value is unknown, so the signed paper can be
/// completed by hand.
pub const SENTINEL: &str = "___________";

/// Printed in the invitation letter when the worker has no recorded stays.
pub const NO_PREVIOUS_STAYS: &str = "Нема / None";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Placeholder {
    WorkerFullName,
    WorkerFirstName,
    WorkerLastName,
    WorkerAddress,
    PassportNumber,
    DateOfBirth,
    PlaceOfBirth,
    PassportIssueDate,
    PassportExpiryDate,
    PassportIssuer,
    NationalitySrGenitive,
    NationalitySrLocative,
    NationalityEn,
    EmployerName,
    EmployerFullReference,
    EmployerAddress,
    EmployerCity,
    EmployerPib,
    EmployerMb,
    EmployerDirector,
    EmployerFoundingDate,
    EmployerAprNumber,
    JobTitleSr,
    JobTitleEn,
    JobDescSr1,
    JobDescSr2,
    JobDescSr3,
    JobDescEn1,
    JobDescEn2,
    JobDescEn3,
    SalaryRsd,
    ContractStartDate,
    ContractEndDate,
    SigningDateSr,
    SigningDateEn,
    ContactEmail,
    ContactPhone,
    AccommodationAddress,
    SigningCity,
    PreviousStays,
}

impl Placeholder {
    pub const fn ordered() -> [Self; 40] {
        [
            Self::WorkerFullName,
            Self::WorkerFirstName,
            Self::WorkerLastName,
            Self::WorkerAddress,
            Self::PassportNumber,
            Self::DateOfBirth,
            Self::PlaceOfBirth,
            Self::PassportIssueDate,
            Self::PassportExpiryDate,
            Self::PassportIssuer,
            Self::NationalitySrGenitive,
            Self::NationalitySrLocative,
            Self::NationalityEn,
            Self::EmployerName,
            Self::EmployerFullReference,
            Self::EmployerAddress,
            Self::EmployerCity,
            Self::EmployerPib,
            Self::EmployerMb,
            Self::EmployerDirector,
            Self::EmployerFoundingDate,
            Self::EmployerAprNumber,
            Self::JobTitleSr,
            Self::JobTitleEn,
            Self::JobDescSr1,
            Self::JobDescSr2,
            Self::JobDescSr3,
            Self::JobDescEn1,
            Self::JobDescEn2,
            Self::JobDescEn3,
            Self::SalaryRsd,
            Self::ContractStartDate,
            Self::ContractEndDate,
            Self::SigningDateSr,
            Self::SigningDateEn,
            Self::ContactEmail,
            Self::ContactPhone,
            Self::AccommodationAddress,
            Self::SigningCity,
            Self::PreviousStays,
        ]
    }

    /// Template key, as used by the admin preview.
    pub const fn key(self) -> &'static str {
        match self {
            Self::WorkerFullName => "WORKER_FULL_NAME",
            Self::WorkerFirstName => "WORKER_FIRST_NAME",
            Self::WorkerLastName => "WORKER_LAST_NAME",
            Self::WorkerAddress => "WORKER_ADDRESS",
            Self::PassportNumber => "PASSPORT_NUMBER",
            Self::DateOfBirth => "DATE_OF_BIRTH",
            Self::PlaceOfBirth => "PLACE_OF_BIRTH",
            Self::PassportIssueDate => "PASSPORT_ISSUE_DATE",
            Self::PassportExpiryDate => "PASSPORT_EXPIRY_DATE",
            Self::PassportIssuer => "PASSPORT_ISSUER",
            Self::NationalitySrGenitive => "NATIONALITY_SR_GENITIVE",
            Self::NationalitySrLocative => "NATIONALITY_SR_LOCATIVE",
            Self::NationalityEn => "NATIONALITY_EN",
            Self::EmployerName => "EMPLOYER_NAME",
            Self::EmployerFullReference => "EMPLOYER_FULL_REFERENCE",
            Self::EmployerAddress => "EMPLOYER_ADDRESS",
            Self::EmployerCity => "EMPLOYER_CITY",
            Self::EmployerPib => "EMPLOYER_PIB",
            Self::EmployerMb => "EMPLOYER_MB",
            Self::EmployerDirector => "EMPLOYER_DIRECTOR",
            Self::EmployerFoundingDate => "EMPLOYER_FOUNDING_DATE",
            Self::EmployerAprNumber => "EMPLOYER_APR_NUMBER",
            Self::JobTitleSr => "JOB_TITLE_SR",
            Self::JobTitleEn => "JOB_TITLE_EN",
            Self::JobDescSr1 => "JOB_DESC_SR_1",
            Self::JobDescSr2 => "JOB_DESC_SR_2",
            Self::JobDescSr3 => "JOB_DESC_SR_3",
            Self::JobDescEn1 => "JOB_DESC_EN_1",
            Self::JobDescEn2 => "JOB_DESC_EN_2",
            Self::JobDescEn3 => "JOB_DESC_EN_3",
            Self::SalaryRsd => "SALARY_RSD",
            Self::ContractStartDate => "CONTRACT_START_DATE",
            Self::ContractEndDate => "CONTRACT_END_DATE",
            Self::SigningDateSr => "SIGNING_DATE_SR",
            Self::SigningDateEn => "SIGNING_DATE_EN",
            Self::ContactEmail => "CONTACT_EMAIL",
            Self::ContactPhone => "CONTACT_PHONE",
            Self::AccommodationAddress => "ACCOMMODATION_ADDRESS",
            Self::SigningCity => "SIGNING_CITY",
            Self::PreviousStays => "PREVIOUS_STAYS",
        }
    }
}

/// Tunables for the defensive defaults applied while building.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderPolicy {
    /// Issuers at or below this many characters are treated as OCR noise.
    pub issuer_noise_threshold: usize,
    pub fallback_contact_email: Option<String>,
}

impl Default for PlaceholderPolicy {
    fn default() -> Self {
        Self {
            issuer_noise_threshold: 3,
            fallback_contact_email: None,
        }
    }
}

/// A non-fatal degradation noticed while building. Never blocks generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BuildNote {
    UnmappedNationality { value: String },
    IssuerDefaulted { issuer: String },
    UnparseableDate { field: &'static str, value: String },
}

impl std::fmt::Display for BuildNote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnmappedNationality { value } => {
                write!(f, "nationality '{value}' has no Serbian grammar mapping; used verbatim")
            }
            Self::IssuerDefaulted { issuer } => {
                write!(f, "passport issuer defaulted to '{issuer}'")
            }
            Self::UnparseableDate { field, value } => {
                write!(f, "{field}: date '{value}' could not be parsed; printed verbatim")
            }
        }
    }
}

/// Every [`Placeholder`] mapped to a non-empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderMap {
    values: BTreeMap<Placeholder, String>,
    notes: Vec<BuildNote>,
}

impl PlaceholderMap {
    pub fn get(&self, key: Placeholder) -> &str {
        self.values.get(&key).map_or(SENTINEL, String::as_str)
    }

    /// The value, unless it is the sentinel.
    pub fn optional(&self, key: Placeholder) -> Option<&str> {
        Some(self.get(key)).filter(|value| *value != SENTINEL)
    }

    pub fn notes(&self) -> &[BuildNote] {
        &self.notes
    }

    pub fn iter(&self) -> impl Iterator<Item = (Placeholder, &str)> + '_ {
        self.values.iter().map(|(key, value)| (*key, value.as_str()))
    }

    fn put(&mut self, key: Placeholder, value: impl Into<String>) {
        let value = value.into();
        let value = if value.trim().is_empty() {
            SENTINEL.to_string()
        } else {
            value
        };
        self.values.insert(key, value);
    }
}

impl Serialize for PlaceholderMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (key, value) in &self.values {
            map.serialize_entry(key.key(), value)?;
        }
        map.end()
    }
}

/// Builds the full placeholder map for one generation call.
pub fn build_placeholders(case: &CaseRecord, policy: &PlaceholderPolicy) -> PlaceholderMap {
    use Placeholder as P;

    let mut map = PlaceholderMap {
        values: BTreeMap::new(),
        notes: Vec::new(),
    };

    let text = |value: &Option<String>| present(value).unwrap_or(SENTINEL).to_string();

    // Worker
    let full_name = present(&case.candidate_full_name).unwrap_or_default();
    let (first, last) = split_name(full_name);
    map.put(P::WorkerFullName, text(&case.candidate_full_name));
    map.put(P::WorkerFirstName, first);
    map.put(P::WorkerLastName, last);
    map.put(P::WorkerAddress, text(&case.candidate_address));

    // Passport
    map.put(P::PassportNumber, text(&case.candidate_passport_number));
    let dob = date_sr(&mut map, P::DateOfBirth, &case.candidate_date_of_birth);
    map.put(P::DateOfBirth, dob);
    map.put(P::PlaceOfBirth, text(&case.candidate_place_of_birth));
    let issued = date_sr(&mut map, P::PassportIssueDate, &case.candidate_passport_issue_date);
    map.put(P::PassportIssueDate, issued);
    let expiry = date_sr(&mut map, P::PassportExpiryDate, &case.candidate_passport_expiry);
    map.put(P::PassportExpiryDate, expiry);

    let nationality = present(&case.candidate_nationality);
    let issuer = passport_issuer(
        present(&case.candidate_passport_issuer),
        nationality,
        policy.issuer_noise_threshold,
    );
    if let IssuerChoice::Defaulted(default) = &issuer {
        debug!(issuer = %default, "passport issuer defaulted from nationality");
        map.notes.push(BuildNote::IssuerDefaulted {
            issuer: default.to_string(),
        });
    }
    map.put(P::PassportIssuer, issuer.into_value());

    // Nationality
    let lookup = nationality_forms(nationality);
    if let (NationalityLookup::Unmapped(_), Some(raw)) = (&lookup, nationality) {
        warn!(nationality = %raw, "nationality has no Serbian grammar mapping; using raw value");
        map.notes.push(BuildNote::UnmappedNationality {
            value: raw.to_string(),
        });
    }
    let forms = lookup.into_forms();
    map.put(P::NationalitySrGenitive, forms.genitive);
    map.put(P::NationalitySrLocative, forms.locative);
    map.put(P::NationalityEn, forms.english);

    // Employer
    let reference: Vec<&str> = [
        &case.employer_company_name,
        &case.employer_address,
        &case.employer_city,
    ]
    .into_iter()
    .filter_map(present)
    .collect();
    map.put(P::EmployerName, text(&case.employer_company_name));
    map.put(P::EmployerFullReference, reference.join(", "));
    map.put(P::EmployerAddress, text(&case.employer_address));
    map.put(P::EmployerCity, text(&case.employer_city));
    map.put(P::EmployerPib, text(&case.employer_pib));
    map.put(P::EmployerMb, text(&case.employer_mb));
    let director = present(&case.employer_director)
        .or_else(|| present(&case.employer_representative_name))
        .unwrap_or(SENTINEL);
    map.put(P::EmployerDirector, director);
    let founded = date_sr(&mut map, P::EmployerFoundingDate, &case.employer_founding_date);
    map.put(P::EmployerFoundingDate, founded);
    map.put(P::EmployerAprNumber, text(&case.employer_apr_number));

    // Job
    map.put(P::JobTitleSr, text(&case.job_title));
    let title_en = present(&case.job_title_en)
        .or_else(|| present(&case.job_title))
        .unwrap_or(SENTINEL);
    map.put(P::JobTitleEn, title_en);
    let [sr1, sr2, sr3] = split_job_description(present(&case.job_description_sr));
    let [en1, en2, en3] = split_job_description(present(&case.job_description_en));
    map.put(P::JobDescSr1, sr1);
    map.put(P::JobDescSr2, sr2);
    map.put(P::JobDescSr3, sr3);
    map.put(P::JobDescEn1, en1);
    map.put(P::JobDescEn2, en2);
    map.put(P::JobDescEn3, en3);
    map.put(P::SalaryRsd, format_rsd(case.salary_rsd));

    // Dates
    let start = date_sr(&mut map, P::ContractStartDate, &case.start_date);
    map.put(P::ContractStartDate, start);
    let end = date_sr(&mut map, P::ContractEndDate, &case.end_date);
    map.put(P::ContractEndDate, end);
    let signed = date_sr(&mut map, P::SigningDateSr, &case.signing_date);
    map.put(P::SigningDateSr, signed);
    map.put(
        P::SigningDateEn,
        format_date_en(present(&case.signing_date)),
    );

    // Contact and logistics
    let email = present(&case.contact_email)
        .or(policy.fallback_contact_email.as_deref())
        .unwrap_or(SENTINEL);
    map.put(P::ContactEmail, email);
    map.put(P::ContactPhone, text(&case.contact_phone));
    map.put(P::AccommodationAddress, text(&case.accommodation_address));
    map.put(P::SigningCity, text(&case.signing_city));
    map.put(
        P::PreviousStays,
        present(&case.previous_stays).unwrap_or(NO_PREVIOUS_STAYS),
    );

    map
}

/// Serbian date for `key`, recording a note when the raw value is not a date.
fn date_sr(map: &mut PlaceholderMap, key: Placeholder, raw: &Option<String>) -> String {
    let raw = present(raw);
    if let Some(value) = raw {
        if parse_date(value).is_none() {
            warn!(field = key.key(), value, "unparseable date printed verbatim");
            map.notes.push(BuildNote::UnparseableDate {
                field: key.key(),
                value: value.to_string(),
            });
        }
    }
    format_date_sr(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(case: &CaseRecord) -> PlaceholderMap {
        build_placeholders(case, &PlaceholderPolicy::default())
    }

    #[test]
    fn sample_case_fills_every_slot() {
        let map = build(&CaseRecord::sample());

        assert_eq!(map.iter().count(), Placeholder::ordered().len());
        assert_eq!(map.get(Placeholder::WorkerFirstName), "Ram Bahadur");
        assert_eq!(map.get(Placeholder::WorkerLastName), "Tamang");
        assert_eq!(map.get(Placeholder::NationalitySrGenitive), "Nepala");
        assert_eq!(map.get(Placeholder::SalaryRsd), "55.000,00");
        assert_eq!(map.get(Placeholder::SigningDateSr), "15.03.2026.");
        assert_eq!(map.get(Placeholder::SigningDateEn), "March 15, 2026");
        assert_eq!(map.get(Placeholder::EmployerFoundingDate), "01.01.2024.");
        assert_eq!(map.get(Placeholder::JobTitleEn), "Construction Assistant");
        assert_eq!(
            map.get(Placeholder::EmployerFullReference),
            "Workers United DOO, Bulevar Kralja Aleksandra 100, Beograd"
        );
        assert_eq!(map.get(Placeholder::PreviousStays), NO_PREVIOUS_STAYS);
        assert!(map.notes().is_empty());
    }

    #[test]
    fn empty_case_is_all_sentinels_except_defaults() {
        let map = build(&CaseRecord::default());

        for (key, value) in map.iter() {
            match key {
                Placeholder::PreviousStays => assert_eq!(value, NO_PREVIOUS_STAYS),
                _ => assert_eq!(value, SENTINEL, "{}", key.key()),
            }
        }
        assert!(map.optional(Placeholder::JobDescSr1).is_none());
    }

    #[test]
    fn director_and_english_title_fall_back() {
        let mut case = CaseRecord::sample();
        case.employer_director = Some(" ".to_string());
        case.employer_representative_name = Some("Jelena Jovanović".to_string());
        case.job_title_en = None;

        let map = build(&case);
        assert_eq!(map.get(Placeholder::EmployerDirector), "Jelena Jovanović");
        assert_eq!(
            map.get(Placeholder::JobTitleEn),
            "Pomoćni radnik u građevinarstvu"
        );
    }

    #[test]
    fn contact_email_uses_policy_fallback() {
        let mut case = CaseRecord::sample();
        case.contact_email = None;
        let policy = PlaceholderPolicy {
            fallback_contact_email: Some("office@example.rs".to_string()),
            ..PlaceholderPolicy::default()
        };

        let map = build_placeholders(&case, &policy);
        assert_eq!(map.get(Placeholder::ContactEmail), "office@example.rs");
        assert_eq!(build(&case).get(Placeholder::ContactEmail), SENTINEL);
    }

    #[test]
    fn degradations_are_recorded_as_notes() {
        let mut case = CaseRecord::sample();
        case.candidate_nationality = Some("Kenyan".to_string());
        case.candidate_passport_issuer = Some("KE".to_string());
        case.start_date = Some("first of April".to_string());

        let map = build(&case);
        assert_eq!(map.get(Placeholder::NationalityEn), "Kenyan");
        assert_eq!(map.get(Placeholder::PassportIssuer), "KE");
        assert_eq!(map.get(Placeholder::ContractStartDate), "first of April");
        assert_eq!(
            map.notes(),
            &[
                BuildNote::UnmappedNationality {
                    value: "Kenyan".to_string()
                },
                BuildNote::UnparseableDate {
                    field: "CONTRACT_START_DATE",
                    value: "first of April".to_string()
                },
            ]
        );
    }

    #[test]
    fn defaulted_issuer_is_noted() {
        let mut case = CaseRecord::sample();
        case.candidate_passport_issuer = Some("M0".to_string());

        let map = build(&case);
        assert_eq!(map.get(Placeholder::PassportIssuer), "MOFA, DEPARTMENT OF PASSPORTS");
        assert!(matches!(
            map.notes(),
            [BuildNote::IssuerDefaulted { .. }]
        ));
    }

    #[test]
    fn serializes_with_template_keys() {
        let map = build(&CaseRecord::sample());
        let json = serde_json::to_value(&map).expect("map serializes");

        assert_eq!(json["WORKER_FULL_NAME"], "Ram Bahadur Tamang");
        assert_eq!(json["JOB_DESC_EN_3"], "Assisting qualified workers");
        assert_eq!(json.as_object().map(|object| object.len()), Some(40));
    }
}
