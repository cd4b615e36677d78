use crate::infra::{load_engine, read_case, write_documents};
use clap::Args;
use std::path::PathBuf;
use visa_docs::config::AppConfig;
use visa_docs::documents::{
    validate_case, BuildNote, CaseRecord, DocumentEngine, DocumentType, Placeholder,
    RenderedDocument,
};
use visa_docs::error::AppError;

#[derive(Args, Debug)]
pub(crate) struct ValidateArgs {
    /// Case record as JSON
    #[arg(long)]
    pub(crate) case: PathBuf,
}

#[derive(Args, Debug)]
pub(crate) struct GenerateArgs {
    /// Case record as JSON
    #[arg(long)]
    pub(crate) case: PathBuf,
    /// Directory receiving the PDF files
    #[arg(long)]
    pub(crate) out: PathBuf,
    /// Render a single document (UGOVOR, IZJAVA, OVLASCENJE, POZIVNO_PISMO)
    #[arg(long)]
    pub(crate) document: Option<DocumentType>,
    /// Render even when required fields are missing
    #[arg(long)]
    pub(crate) force: bool,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Directory receiving the sample PDF files
    #[arg(long, default_value = "generated")]
    pub(crate) out: PathBuf,
}

pub(crate) fn run_validate(args: ValidateArgs) -> Result<(), AppError> {
    let case = read_case(&args.case)?;
    let missing = validate_case(&case);
    if missing.is_empty() {
        println!("Case record is complete.");
        return Ok(());
    }

    println!("Missing required fields ({}):", missing.len());
    for field in &missing {
        println!("  - {}", field.label());
    }
    Err(AppError::IncompleteCase(missing))
}

pub(crate) fn run_generate(args: GenerateArgs) -> Result<(), AppError> {
    let GenerateArgs {
        case,
        out,
        document,
        force,
    } = args;

    let case = read_case(&case)?;
    let missing = validate_case(&case);
    if !missing.is_empty() {
        if !force {
            return Err(AppError::IncompleteCase(missing));
        }
        println!(
            "Rendering with {} missing field(s); blanks print as placeholders.",
            missing.len()
        );
    }

    let config = AppConfig::load()?;
    let engine = load_engine(&config)?;
    print_notes(engine.placeholders(&case).notes());

    let documents = render(&engine, &case, document)?;
    report_written(&write_documents(&out, documents)?);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let engine = load_engine(&config)?;
    let case = CaseRecord::sample();

    println!("Contract document demo");
    let preview = engine.preview(&case);
    for key in [
        Placeholder::WorkerFullName,
        Placeholder::NationalitySrGenitive,
        Placeholder::PassportIssuer,
        Placeholder::EmployerFullReference,
        Placeholder::SalaryRsd,
        Placeholder::ContractStartDate,
        Placeholder::SigningDateEn,
    ] {
        println!("  {:<26} {}", key.key(), preview.placeholders.get(key));
    }
    print_notes(&preview.notes);

    let documents = render(&engine, &case, None)?;
    report_written(&write_documents(&args.out, documents)?);
    Ok(())
}

fn render(
    engine: &DocumentEngine,
    case: &CaseRecord,
    document: Option<DocumentType>,
) -> Result<Vec<RenderedDocument>, AppError> {
    match document {
        Some(kind) => Ok(vec![engine.generate_document(kind, case)?]),
        None => Ok(engine.generate_all(case)?.into_iter().collect()),
    }
}

fn print_notes(notes: &[BuildNote]) {
    for note in notes {
        println!("note: {note}");
    }
}

fn report_written(paths: &[PathBuf]) {
    println!("Wrote {} document(s):", paths.len());
    for path in paths {
        println!("  {}", path.display());
    }
}
