use proptest::prelude::*;
use serde_json::{Map, Value};
use visa_docs::documents::{
    build_placeholders, CaseRecord, Placeholder, PlaceholderPolicy, SENTINEL,
};

const TEXT_FIELDS: [&str; 31] = [
    "candidate_full_name",
    "candidate_passport_number",
    "candidate_nationality",
    "candidate_date_of_birth",
    "candidate_passport_expiry",
    "candidate_address",
    "candidate_passport_issue_date",
    "candidate_passport_issuer",
    "candidate_place_of_birth",
    "candidate_gender",
    "employer_company_name",
    "employer_pib",
    "employer_address",
    "employer_representative_name",
    "employer_mb",
    "employer_city",
    "employer_director",
    "employer_founding_date",
    "employer_apr_number",
    "job_title",
    "job_title_en",
    "job_description_sr",
    "job_description_en",
    "start_date",
    "end_date",
    "signing_date",
    "contact_email",
    "contact_phone",
    "accommodation_address",
    "signing_city",
    "previous_stays",
];

fn field_value() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        Just(Some("   \n\t".to_string())),
        Just(Some("2026-02-30".to_string())),
        Just(Some("2026-04-01T10:30:00Z".to_string())),
        Just(Some("Nepalese".to_string())),
        Just(Some("one\n\ntwo\nthree\nfour".to_string())),
        "\\PC{0,24}".prop_map(Some),
    ]
}

fn case_record() -> impl Strategy<Value = CaseRecord> {
    (
        proptest::collection::vec(field_value(), TEXT_FIELDS.len()),
        proptest::option::of(any::<f64>()),
    )
        .prop_map(|(values, salary)| {
            let fields: Map<String, Value> = TEXT_FIELDS
                .iter()
                .zip(values)
                .map(|(name, value)| {
                    (
                        name.to_string(),
                        value.map_or(Value::Null, Value::String),
                    )
                })
                .collect();
            let mut case: CaseRecord =
                serde_json::from_value(Value::Object(fields)).expect("record deserializes");
            case.salary_rsd = salary;
            case
        })
}

proptest! {
    #[test]
    fn every_placeholder_is_filled(case in case_record(), threshold in 0usize..8) {
        let policy = PlaceholderPolicy {
            issuer_noise_threshold: threshold,
            fallback_contact_email: None,
        };
        let map = build_placeholders(&case, &policy);

        prop_assert_eq!(map.iter().count(), Placeholder::ordered().len());
        for key in Placeholder::ordered() {
            let value = map.get(key);
            prop_assert!(!value.trim().is_empty(), "{} is blank", key.key());
        }
    }

    #[test]
    fn missing_salaries_print_the_sentinel(salary in prop_oneof![
        Just(None),
        Just(Some(0.0)),
        Just(Some(f64::NAN)),
        Just(Some(f64::INFINITY)),
    ]) {
        let case = CaseRecord { salary_rsd: salary, ..CaseRecord::default() };
        let map = build_placeholders(&case, &PlaceholderPolicy::default());
        prop_assert_eq!(map.get(Placeholder::SalaryRsd), SENTINEL);
    }
}
