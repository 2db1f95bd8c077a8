use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use log::{info, LevelFilter};

use fa2seq::errors::Fa2SeqError;
use fa2seq::extract::extract;

/// Strip FASTA headers and write the concatenated raw sequence
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Cli
{
    /// FASTA input (plain or gzip compressed), then the raw sequence output
    #[arg(num_args = 0.., value_name = "FILE")]
    files: Vec<PathBuf>,

    /// More log output (repeat for debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli
{
    fn log_level(&self) -> LevelFilter
    {
        if self.quiet
        {
            return LevelFilter::Error;
        }
        match self.verbose
        {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }
}

fn run(cli: &Cli, program_name: &str) -> Result<(), Fa2SeqError>
{
    let (fa_name, output_name) = match cli.files.as_slice()
    {
        [fa_name, output_name] => (fa_name, output_name),
        _ => return Err(Fa2SeqError::Usage(format!("Usage {} faName outputName", program_name))),
    };

    info!("extracting {} into {}", fa_name.display(), output_name.display());
    let summary = extract(fa_name, output_name)?;
    println!("{}", summary);
    Ok(())
}

fn main() -> ExitCode
{
    let program_name = std::env::args_os()
        .next()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "fa2seq".to_string());
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    match run(&cli, &program_name)
    {
        Ok(()) => ExitCode::SUCCESS,
        Err(Fa2SeqError::Usage(usage)) =>
        {
            // nothing processed, not a failure
            eprintln!("{}", usage);
            ExitCode::SUCCESS
        }
        Err(e) =>
        {
            eprintln!("fa2seq: {}", e);
            ExitCode::FAILURE
        }
    }
}
