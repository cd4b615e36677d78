use serde::{Deserialize, Serialize};

/// Approved case data supplied by the admin workflow at generation time.
///
/// Text fields arrive from onboarding forms and passport OCR, so any of them may be
/// missing or blank. Blank values are treated exactly like missing ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaseRecord {
    // Worker
    pub candidate_full_name: Option<String>,
    pub candidate_passport_number: Option<String>,
    pub candidate_nationality: Option<String>,
    pub candidate_date_of_birth: Option<String>,
    pub candidate_passport_expiry: Option<String>,
    pub candidate_address: Option<String>,
    pub candidate_passport_issue_date: Option<String>,
    pub candidate_passport_issuer: Option<String>,
    pub candidate_place_of_birth: Option<String>,
    pub candidate_gender: Option<String>,

    // Employer
    pub employer_company_name: Option<String>,
    pub employer_pib: Option<String>,
    pub employer_address: Option<String>,
    pub employer_representative_name: Option<String>,
    pub employer_mb: Option<String>,
    pub employer_city: Option<String>,
    pub employer_director: Option<String>,
    pub employer_founding_date: Option<String>,
    pub employer_apr_number: Option<String>,

    // Job
    pub job_title: Option<String>,
    pub job_title_en: Option<String>,
    pub job_description_sr: Option<String>,
    pub job_description_en: Option<String>,
    pub salary_rsd: Option<f64>,

    // Contract dates (ISO 8601)
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub signing_date: Option<String>,

    // Contact
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,

    // Visa logistics
    pub accommodation_address: Option<String>,
    pub signing_city: Option<String>,
    pub previous_stays: Option<String>,
}

impl CaseRecord {
    /// Fully populated reference case used by the CLI demo and smoke tests.
    pub fn sample() -> Self {
        Self {
            candidate_full_name: Some("Ram Bahadur Tamang".to_string()),
            candidate_passport_number: Some("PA1234567".to_string()),
            candidate_nationality: Some("Nepalese".to_string()),
            candidate_date_of_birth: Some("1990-05-15".to_string()),
            candidate_passport_expiry: Some("2030-05-15".to_string()),
            candidate_address: Some("Kathmandu, Nepal".to_string()),
            candidate_passport_issue_date: Some("2020-05-15".to_string()),
            candidate_passport_issuer: Some("MOFA, DEPARTMENT OF PASSPORTS".to_string()),
            candidate_place_of_birth: Some("Kathmandu".to_string()),
            candidate_gender: Some("Male".to_string()),

            employer_company_name: Some("Workers United DOO".to_string()),
            employer_pib: Some("112233445".to_string()),
            employer_address: Some("Bulevar Kralja Aleksandra 100".to_string()),
            employer_representative_name: Some("Borivoje Petrović".to_string()),
            employer_mb: Some("21987654".to_string()),
            employer_city: Some("Beograd".to_string()),
            employer_director: Some("Borivoje Petrović".to_string()),
            employer_founding_date: Some("2024-01-01".to_string()),
            employer_apr_number: Some("BD 12345/2024".to_string()),

            job_title: Some("Pomoćni radnik u građevinarstvu".to_string()),
            job_title_en: Some("Construction Assistant".to_string()),
            job_description_sr: Some(
                "Utovar i istovar građevinskog materijala\nČišćenje i priprema gradilišta\nPomoć kvalifikovanim radnicima"
                    .to_string(),
            ),
            job_description_en: Some(
                "Loading and unloading construction materials\nCleaning and preparing the construction site\nAssisting qualified workers"
                    .to_string(),
            ),
            salary_rsd: Some(55000.0),

            start_date: Some("2026-04-01".to_string()),
            end_date: Some("2027-04-01".to_string()),
            signing_date: Some("2026-03-15".to_string()),

            contact_email: Some("contact@workersunited.eu".to_string()),
            contact_phone: Some("+381 11 123 4567".to_string()),

            accommodation_address: Some("Bulevar Oslobođenja 50, Beograd".to_string()),
            signing_city: Some("Beograd".to_string()),
            previous_stays: None,
        }
    }
}

/// Returns the trimmed value when the field carries any non-whitespace text.
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|trimmed| !trimmed.is_empty())
}
