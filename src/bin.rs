use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use taocp_perm::{
    notation::{format_cycles, format_letters, parse_cycles, parse_factors},
    permutation::{
        cycles_to_table, invert, product_a, product_b, table_to_cycles, validate_cycles, Cycle,
        Factors, PermutationTable,
    },
};

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        for cause in err.chain().skip(1) {
            eprintln!("  caused by: {cause}");
        }
        std::process::exit(1);
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "taocp-perm",
    version,
    about = "Multiply, invert and convert permutations written as products of cycles."
)]
struct Cli {
    /// Print results in letter notation (a = 1, ..., z = 26) when possible.
    #[arg(long, global = true, action = ArgAction::SetTrue)]
    letters: bool,
    /// Reject cycles with repeated or zero elements before computing.
    #[arg(long, global = true, action = ArgAction::SetTrue)]
    validate: bool,
    /// Increase logging verbosity (-v, -vv, -vvv).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Product of cycles, applied left to right; `;` separates permutations.
    Product {
        #[arg(long, value_enum, default_value_t = Method::A)]
        method: Method,
        #[arg(value_name = "FACTORS")]
        factors: String,
    },
    /// Inverse of a permutation in cycle form.
    Invert {
        #[arg(value_name = "PERM")]
        perm: String,
    },
    /// One-line table form of a permutation in cycle form.
    Table {
        #[arg(value_name = "PERM")]
        perm: String,
    },
    /// Cycle form of a permutation given by the images of 1, 2, ..., n.
    Cycles {
        #[arg(value_name = "IMAGE", required = true)]
        images: Vec<usize>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Method {
    /// Scan the formula symbol by symbol (Algorithm A).
    A,
    /// Apply every cycle to a table (Algorithm B).
    B,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .parse_default_env()
        .init();

    let output = match cli.command {
        Command::Product { method, factors } => {
            let factors = parse_factors(&factors)
                .with_context(|| format!("failed to parse factors {factors:?}"))?;
            if cli.validate {
                validate_factors(&factors)?;
            }
            log::info!("multiplying with method {method:?}");
            let product = match method {
                Method::A => product_a(factors),
                Method::B => product_b(factors),
            };
            render(&product, cli.letters)
        }
        Command::Invert { perm } => {
            let cycles = parse_perm(&perm, cli.validate)?;
            render(&invert(&cycles), cli.letters)
        }
        Command::Table { perm } => {
            let cycles = parse_perm(&perm, cli.validate)?;
            cycles_to_table(&cycles).to_string()
        }
        Command::Cycles { images } => {
            let table = PermutationTable::from_images(images)
                .context("the images do not form a permutation")?;
            render(&table_to_cycles(&table), cli.letters)
        }
    };
    println!("{output}");
    Ok(())
}

fn parse_perm(input: &str, validate: bool) -> Result<Vec<Cycle>> {
    let cycles =
        parse_cycles(input).with_context(|| format!("failed to parse permutation {input:?}"))?;
    if validate {
        validate_cycles(&cycles).with_context(|| format!("invalid permutation {input:?}"))?;
    }
    Ok(cycles)
}

/// Cycles of a flat product may overlap, so each is checked on its own. A
/// permutation given between `;` must be disjoint.
fn validate_factors(factors: &Factors) -> Result<()> {
    match factors {
        Factors::Cycles(cycles) => {
            for (k, cycle) in cycles.iter().enumerate() {
                validate_cycles(std::slice::from_ref(cycle))
                    .with_context(|| format!("invalid cycle #{} {cycle}", k + 1))?;
            }
        }
        Factors::Permutations(perms) => {
            for (k, perm) in perms.iter().enumerate() {
                validate_cycles(perm).with_context(|| {
                    format!("invalid permutation #{} {}", k + 1, format_cycles(perm))
                })?;
            }
        }
    }
    Ok(())
}

fn render(cycles: &[Cycle], letters: bool) -> String {
    if letters {
        if let Some(out) = format_letters(cycles) {
            return out;
        }
        log::warn!("elements above 26 cannot be written as letters");
    }
    format_cycles(cycles)
}
