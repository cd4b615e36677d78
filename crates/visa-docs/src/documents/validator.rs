use serde::{Deserialize, Serialize};

use super::case::{present, CaseRecord};

/// Fields that must be populated before the documents are legally usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequiredField {
    WorkerFullName,
    PassportNumber,
    Nationality,
    DateOfBirth,
    PassportExpiry,
    EmployerName,
    EmployerAddress,
    EmployerPib,
    EmployerMb,
    EmployerCity,
    EmployerDirector,
    SigningCity,
    AccommodationAddress,
    JobTitle,
    Salary,
    ContractStartDate,
    ContractEndDate,
    SigningDate,
}

impl RequiredField {
    pub const fn ordered() -> [Self; 18] {
        [
            Self::WorkerFullName,
            Self::PassportNumber,
            Self::Nationality,
            Self::DateOfBirth,
            Self::PassportExpiry,
            Self::EmployerName,
            Self::EmployerAddress,
            Self::EmployerPib,
            Self::EmployerMb,
            Self::EmployerCity,
            Self::EmployerDirector,
            Self::SigningCity,
            Self::AccommodationAddress,
            Self::JobTitle,
            Self::Salary,
            Self::ContractStartDate,
            Self::ContractEndDate,
            Self::SigningDate,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::WorkerFullName => "Worker full name",
            Self::PassportNumber => "Passport number",
            Self::Nationality => "Nationality",
            Self::DateOfBirth => "Date of birth",
            Self::PassportExpiry => "Passport expiry date",
            Self::EmployerName => "Employer company name",
            Self::EmployerAddress => "Employer address",
            Self::EmployerPib => "Employer PIB",
            Self::EmployerMb => "Employer MB (matični broj)",
            Self::EmployerCity => "Employer city",
            Self::EmployerDirector => "Employer director",
            Self::SigningCity => "Signing city",
            Self::AccommodationAddress => "Accommodation address",
            Self::JobTitle => "Job title",
            Self::Salary => "Salary (RSD)",
            Self::ContractStartDate => "Contract start date",
            Self::ContractEndDate => "Contract end date",
            Self::SigningDate => "Signing date",
        }
    }

    fn is_satisfied_by(self, case: &CaseRecord) -> bool {
        let text = match self {
            Self::WorkerFullName => &case.candidate_full_name,
            Self::PassportNumber => &case.candidate_passport_number,
            Self::Nationality => &case.candidate_nationality,
            Self::DateOfBirth => &case.candidate_date_of_birth,
            Self::PassportExpiry => &case.candidate_passport_expiry,
            Self::EmployerName => &case.employer_company_name,
            Self::EmployerAddress => &case.employer_address,
            Self::EmployerPib => &case.employer_pib,
            Self::EmployerMb => &case.employer_mb,
            Self::EmployerCity => &case.employer_city,
            Self::EmployerDirector => &case.employer_director,
            Self::SigningCity => &case.signing_city,
            Self::AccommodationAddress => &case.accommodation_address,
            Self::JobTitle => &case.job_title,
            Self::Salary => {
                return case
                    .salary_rsd
                    .is_some_and(|salary| salary.is_finite() && salary > 0.0)
            }
            Self::ContractStartDate => &case.start_date,
            Self::ContractEndDate => &case.end_date,
            Self::SigningDate => &case.signing_date,
        };
        present(text).is_some()
    }
}

/// Lists the required fields the case is missing, in declaration order.
///
/// An empty result means the record is complete. The caller decides whether an
/// incomplete record may still be rendered for manual review.
pub fn validate_case(case: &CaseRecord) -> Vec<RequiredField> {
    RequiredField::ordered()
        .into_iter()
        .filter(|field| !field.is_satisfied_by(case))
        .collect()
}
