//! Card Forge CLI
//!
//! Usage:
//!   card-forge [OPTIONS] [COMMAND] [ARGS]...
//!
//! Commands:
//!   generate <name> <template> [cost] [attack] [defense]
//!   random [count]
//!   batch [count]
//!   custom
//!   templates
//!
//! Options:
//!   -o, --output-dir <DIR>   Directory receiving generated cards
//!   -c, --config <FILE>      Configuration file (TOML format)
//!       --seed <SEED>        Seed for random generation
//!   -v, --verbose            Debug logging on stderr
//!   -h, --help               Print help

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use card_forge::interactive::run_custom;
use card_forge::{Command, Generator, GeneratorConfig, TemplateRegistry};

const BIN: &str = "card-forge";

#[derive(Parser)]
#[command(name = "card-forge")]
#[command(about = "Card generator for the Janet-based game")]
struct Cli {
    /// Directory receiving generated cards
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for random generation
    #[arg(long)]
    seed: Option<u64>,

    /// Debug logging on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Command followed by its arguments
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => match GeneratorConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => GeneratorConfig::default(),
    };
    if let Some(dir) = cli.output_dir {
        config = config.with_output_dir(dir);
    }

    let generator = Generator::new(TemplateRegistry::builtin(), config);
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let command = Command::from_args(&cli.args);
    tracing::debug!(event = "command_parsed", command = ?command);

    let result = match &command {
        Command::Generate { name, template, .. } => generator
            .generate(name, template, &command.overrides())
            .map(|path| report(&path)),
        Command::GenerateUsage => {
            println!("Usage: {} generate <name> <template> [cost] [attack] [defense]", BIN);
            println!("Example: {} generate 'Fire Mage' ranged_unit 3 2 1", BIN);
            print!("{}", generator.registry().listing());
            return ExitCode::FAILURE;
        }
        Command::Random { count } => generator
            .generate_batch(*count, &mut rng, report)
            .map(|_| ()),
        Command::Batch { count } => {
            println!("Generating {} random cards...", count);
            generator
                .generate_batch(*count, &mut rng, report)
                .map(|_| ())
        }
        Command::Templates => {
            print!("{}", generator.registry().listing());
            Ok(())
        }
        Command::Custom => {
            let mut input = io::stdin().lock();
            let mut output = io::stdout();
            match run_custom(&generator, &mut input, &mut output) {
                Ok(path) => {
                    report(&path);
                    Ok(())
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    return ExitCode::FAILURE;
                }
            }
        }
        Command::Help => {
            print_help(&generator);
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn report(path: &Path) {
    println!("Generated: {}", path.display());
}

fn print_help(generator: &Generator) {
    println!(
        r#"Card Generator for Janet-based Game

Usage:
  {bin} generate <name> <template> [cost] [attack] [defense]
  {bin} random [count]                    # Generate random cards
  {bin} batch [count]                     # Generate batch of cards
  {bin} custom                            # Interactive card creation
  {bin} templates                         # List available templates

Options (before the command):
  -o, --output-dir <DIR>   Write cards to DIR (default: generated_cards)
  -c, --config <FILE>      Load output settings from a TOML file
      --seed <SEED>        Reproducible random generation
  -v, --verbose            Debug logging on stderr

Examples:
  {bin} generate 'Fire Warrior' heavy_unit 4 3 2
  {bin} random 3
  {bin} batch 10
"#,
        bin = BIN
    );
    print!("{}", generator.registry().listing());
}
