mod cli;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};

use luhnix::OutputFormat;

#[derive(Parser)]
#[command(
    name = "luhnix",
    about = "Luhn checksum toolkit - validate, complete and count identifiers",
    version
)]
struct Cli {
    #[arg(
        long,
        short,
        global = true,
        help = "Output format: terminal, json (default from luhnix.toml)"
    )]
    format: Option<OutputFormat>,

    #[arg(long, global = true, help = "Configuration profile to use")]
    profile: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check one or more numbers against the Luhn checksum
    Validate(ValidateArgs),
    /// Validate one number per line read from stdin
    Stdin,
    /// Compute the check digit for a number without its last digit
    Generate(GenerateArgs),
    /// Count valid numbers in an inclusive range
    Count(CountArgs),
    /// List the next valid numbers after a starting point
    Next(NextArgs),
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Parser)]
struct ValidateArgs {
    #[arg(required = true, help = "Numbers to check; spaces and dashes are ignored")]
    numbers: Vec<String>,
}

#[derive(Parser)]
struct GenerateArgs {
    #[arg(help = "Partial number, excluding the check digit")]
    partial: String,
}

#[derive(Parser)]
struct CountArgs {
    #[arg(help = "First number of the range (inclusive)")]
    start: String,

    #[arg(help = "Last number of the range (inclusive)")]
    end: String,

    #[arg(
        long,
        help = "Cross-check the result by testing every number in the range"
    )]
    verify: bool,
}

#[derive(Parser)]
struct NextArgs {
    #[arg(help = "Starting number (need not be valid)")]
    number: String,

    #[arg(long, short = 'n', default_value_t = 1, help = "How many numbers to list")]
    count: usize,
}

#[derive(Parser)]
struct CompletionsArgs {
    #[arg(help = "Target shell: bash, zsh, fish, elvish, powershell")]
    shell: Shell,
}

fn main() -> Result<()> {
    let opts = Cli::parse();

    if let Command::Completions(args) = &opts.command {
        generate(
            args.shell,
            &mut Cli::command(),
            "luhnix",
            &mut std::io::stdout(),
        );
        return Ok(());
    }

    let config = cli::load_config(opts.profile.as_deref())?;
    luhnix::logging::init_logging(&config.logging)?;
    if !config.output.color {
        colored::control::set_override(false);
    }
    let format = opts.format.unwrap_or(config.output.format);

    match opts.command {
        Command::Validate(args) => cli::check::run_validate(&args.numbers, format),
        Command::Stdin => cli::check::run_stdin(format),
        Command::Generate(args) => cli::generate::run_generate(&args.partial, format),
        Command::Count(args) => {
            cli::range::run_count(&args.start, &args.end, args.verify, &config, format)
        }
        Command::Next(args) => cli::range::run_next(&args.number, args.count, format),
        Command::Completions(_) => Ok(()),
    }
}
