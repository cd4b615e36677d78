use crate::demo::{run_demo, run_generate, run_validate, DemoArgs, GenerateArgs, ValidateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use visa_docs::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Visa Contract Documents",
    about = "Validate case records and render the bilingual work-visa document set",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// List the required fields a case record is missing
    Validate(ValidateArgs),
    /// Render documents for a case record into a directory
    Generate(GenerateArgs),
    /// Render the built-in sample case end to end
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Validate(args) => run_validate(args),
        Command::Generate(args) => run_generate(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use visa_docs::DocumentType;

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["visa-docs-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn generate_accepts_document_codes() {
        let cli = Cli::try_parse_from([
            "visa-docs-api",
            "generate",
            "--case",
            "case.json",
            "--out",
            "out",
            "--document",
            "pozivno-pismo",
            "--force",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Generate(args)) => {
                assert_eq!(args.document, Some(DocumentType::InvitationLetter));
                assert!(args.force);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn generate_rejects_unknown_documents() {
        let result = Cli::try_parse_from([
            "visa-docs-api",
            "generate",
            "--case",
            "case.json",
            "--out",
            "out",
            "--document",
            "residence_permit",
        ]);
        assert!(result.is_err());
    }
}
