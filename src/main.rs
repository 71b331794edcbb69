use anyhow::Result;
use clap::Parser;
use pkgver::{
    CompareOptions, InstalledOptions, Scheme,
    commands::{self, config::Config},
    runtime::RealRuntime,
};
use std::io;
use std::process::ExitCode;

/// pkgver - package version comparator
///
/// Parse and compare RPM-style versions of the form [EPOCH:]VERSION[-RELEASE],
/// and check whether a package is installed at a given version.
///
/// Examples:
///   pkgver compare 1.2-1 1.10-1        # prints -1
///   pkgver installed bash 5.2 --at-least
#[derive(Parser, Debug)]
#[command(author, version = env!("PKGVER_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Package manager binary (overrides defaults; also via PKGVER_RPM)
    #[arg(long = "rpm", value_name = "PATH", global = true)]
    pub rpm: Option<String>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Compare two versions and print -1, 0 or 1
    Compare(CompareArgs),

    /// Show how a version string is split into fields
    Parse(ParseArgs),

    /// Check whether a package is installed, optionally at a version
    Installed(InstalledArgs),
}

#[derive(clap::Args, Debug)]
pub struct CompareArgs {
    #[arg(value_name = "A", allow_hyphen_values = true)]
    pub a: String,

    #[arg(value_name = "B", allow_hyphen_values = true)]
    pub b: String,

    /// Include the epoch in the comparison
    #[arg(long)]
    pub epoch: bool,

    /// Ordering scheme: simple or rpm
    #[arg(long, default_value = "simple")]
    pub scheme: Scheme,
}

#[derive(clap::Args, Debug)]
pub struct ParseArgs {
    #[arg(value_name = "VERSION", allow_hyphen_values = true)]
    pub version: String,

    /// Print the parsed fields as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(clap::Args, Debug)]
pub struct InstalledArgs {
    /// Package name
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Required version; without it the package only has to be present
    #[arg(value_name = "VERSION")]
    pub version: Option<String>,

    /// Include the epoch in the comparison
    #[arg(long)]
    pub epoch: bool,

    /// Accept any installed version at or above VERSION instead of an exact match
    #[arg(long)]
    pub at_least: bool,

    /// Ordering scheme: simple or rpm
    #[arg(long, default_value = "simple")]
    pub scheme: Scheme,
}

fn run(cli: Cli) -> Result<ExitCode> {
    let mut stdout = io::stdout().lock();

    match cli.command {
        Commands::Compare(args) => {
            let options = CompareOptions {
                compare_epoch: args.epoch,
                scheme: args.scheme,
            };
            commands::compare(&mut stdout, &args.a, &args.b, &options)?;
        }
        Commands::Parse(args) => {
            commands::parse(&mut stdout, &args.version, args.json)?;
        }
        Commands::Installed(args) => {
            let query = Config::new(RealRuntime, cli.rpm).into_query();
            let options = InstalledOptions {
                compare_epoch: args.epoch,
                exact: !args.at_least,
                scheme: args.scheme,
            };
            let found = commands::installed(
                &mut stdout,
                &query,
                &args.name,
                args.version.as_deref(),
                &options,
            )?;
            if !found {
                return Ok(ExitCode::FAILURE);
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    run(Cli::parse())
}
