use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use insult_gen_core::config::SOURCE_FILE;
use insult_gen_core::{GeneratorConfig, InsultGenerator};

#[derive(Parser, Debug)]
#[command(name = "insult-gen")]
#[command(about = "Generate randomized Shakespearean insults from a three-column phrase source")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Phrase source file (three whitespace-separated columns)
    #[arg(long, global = true, env = "INSULT_SOURCE", default_value = SOURCE_FILE)]
    source: PathBuf,

    /// Fixed RNG seed for reproducible output
    #[arg(long, global = true, env = "INSULT_SEED")]
    seed: Option<u64>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print a single random insult
    Talk,
    /// Print unique insults in alphabetical order
    Generate {
        /// Number of insults (1 to 10000)
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        count: i64,

        /// Output as JSON, including each insult's index triple
        #[arg(long)]
        json: bool,
    },
    /// Save unique insults to a file, one per line
    Save {
        /// Destination file (overwritten)
        path: PathBuf,

        /// Number of insults (1 to 10000)
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        count: i64,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = GeneratorConfig::default()
        .with_source(&cli.source)
        .with_seed(cli.seed);
    log::debug!("Using phrase source {}", cli.source.display());
    let mut generator = InsultGenerator::new(config);

    // Counts are signed so that negative input is reported as an invalid
    // count, and they are checked before the source is loaded
    match cli.command {
        Commands::Talk => {
            generator.initialize()?;
            println!("{}", generator.talk_to_me()?);
        }
        Commands::Generate { count, json } => {
            let count = generator.check_count(count)?;
            generator.initialize()?;
            if json {
                let insults = generator.generate_insults(count)?;
                println!("{}", serde_json::to_string_pretty(&insults)?);
            } else {
                for insult in generator.generate(count)? {
                    println!("{}", insult);
                }
            }
        }
        Commands::Save { path, count } => {
            let count = generator.check_count(count)?;
            generator.initialize()?;
            generator.generate_and_save(&path, count)?;
        }
    }

    Ok(())
}
