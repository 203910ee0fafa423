use std::fs;
use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use env_logger::Builder;
use log::info;

use crnrs_core::configuration::{ConfigurationBuilder, TermOrder};
use crnrs_core::io::equation_parse::parse_network;
use crnrs_core::kinetics::rate_equation::RateEquations;
use crnrs_core::reaction_network::network::ReactionNetwork;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Network followed by the rate equations, as plain text
    Text,
    /// A single JSON document
    Json,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TermOrderArg {
    /// Order terms by reaction index
    Index,
    /// Order terms by their rendered text
    Lexicographic,
}

impl From<TermOrderArg> for TermOrder {
    fn from(value: TermOrderArg) -> Self {
        match value {
            TermOrderArg::Index => TermOrder::ReactionIndex,
            TermOrderArg::Lexicographic => TermOrder::Lexicographic,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "crnrs")]
#[command(author, version, about = "Derive mass-action rate equations from reaction equations.")]
pub struct Cli {
    /// Input file with one reaction equation per line, or "-" for stdin
    #[arg(value_name = "INPUT", default_value = "-")]
    input: String,

    /// Read the input as a JSON network instead of reaction equations
    #[arg(long)]
    json_input: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Order of the terms within each rate equation
    #[arg(long, value_enum, default_value_t = TermOrderArg::Index)]
    term_order: TermOrderArg,

    /// Prefix of the rate constant labels
    #[arg(long, value_name = "PREFIX", default_value = "k")]
    rate_constant: String,

    /// Also print the stoichiometric matrix (text output only)
    #[arg(long)]
    stoichiometry: bool,

    /// Verbosity (-v = info, -vv = debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read reaction equations from stdin")?;
        Ok(buffer)
    } else {
        fs::read_to_string(input).with_context(|| format!("Failed to read input file `{}`", input))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let configuration = ConfigurationBuilder::default()
        .term_order(TermOrder::from(cli.term_order))
        .rate_constant_prefix(cli.rate_constant.clone())
        .build()?;

    let text = read_input(&cli.input)?;
    let network = if cli.json_input {
        ReactionNetwork::from_json_str(&text).context("Failed to read JSON network")?
    } else {
        parse_network(text.lines())?
    };
    info!(
        "Network has {} reactions over {} species",
        network.len(),
        network.species().len()
    );

    match cli.format {
        OutputFormat::Text => {
            let rate_equations = RateEquations::with_configuration(&network, &configuration);
            print!("{}", network.render());
            println!();
            print!("{}", rate_equations.render());
            if cli.stoichiometry {
                println!();
                print!("{}", network.render_stoichiometric_matrix(&configuration));
            }
        }
        OutputFormat::Json => {
            println!("{}", network.to_json_string(&configuration)?);
        }
    }

    Ok(())
}
