use crate::score::{run_score, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use lead_iq::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "lead-iq",
    about = "Score a local business lead from a website URL",
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
    /// Score a single lead and print the result as JSON
    Score(ScoreArgs),
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
        Command::Score(args) => run_score(args).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_serve_without_subcommand() {
        let cli = Cli::try_parse_from(["lead-iq"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_score_arguments() {
        let cli = Cli::try_parse_from([
            "lead-iq",
            "score",
            "--biz",
            "Joe's Pizza",
            "--url",
            "joespizza.example",
            "--category",
            "restaurant",
            "--debug",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Score(args)) => {
                assert_eq!(args.biz, "Joe's Pizza");
                assert_eq!(args.category, "restaurant");
                assert_eq!(args.town, "");
                assert!(args.debug);
            }
            other => panic!("expected score command, got {other:?}"),
        }
    }

    #[test]
    fn score_requires_business_and_url() {
        assert!(Cli::try_parse_from(["lead-iq", "score", "--url", "example.com"]).is_err());
        assert!(Cli::try_parse_from(["lead-iq", "score", "--biz", "Acme"]).is_err());
    }
}
