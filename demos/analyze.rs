//! Command-line front end for the logic engine.
//!
//! Run with:
//! ```bash
//! cargo run --example analyze -- table "(A → B) ∧ A" --csv out.csv
//! cargo run --example analyze -- simplify "¬(A ∧ B)"
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::eyre;

use logic_rs::engine::{Engine, EngineConfig};
use logic_rs::types::Assignment;

#[derive(Parser)]
#[command(name = "analyze")]
#[command(about = "Validate, evaluate, tabulate and simplify propositional formulas")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Largest number of variables for truth tables
    #[arg(long, default_value = "20")]
    max_variables: usize,

    /// Simplifier iteration cap
    #[arg(long, default_value = "20")]
    max_iterations: usize,

    /// Reject evaluation when a variable has no value
    #[arg(long)]
    strict: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Check the syntax of an expression
    Validate { expression: String },

    /// List the variables of an expression
    Vars { expression: String },

    /// Evaluate an expression under an assignment
    Eval {
        expression: String,

        /// Variable values, e.g. "A=1, B=0"
        #[arg(short, long, default_value = "")]
        set: String,
    },

    /// Print the truth table of an expression
    Table {
        expression: String,

        /// Also write the table to a CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Simplify an expression and show every step
    Simplify { expression: String },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    simplelog::TermLogger::init(
        if args.verbose {
            simplelog::LevelFilter::Debug
        } else {
            simplelog::LevelFilter::Warn
        },
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let engine = Engine::new(EngineConfig {
        max_variables: args.max_variables,
        max_iterations: args.max_iterations,
        strict_assignments: args.strict,
        ..EngineConfig::default()
    });

    match args.command {
        Command::Validate { expression } => match engine.validate(&expression) {
            Ok(()) => println!("valid"),
            Err(e) => return Err(eyre!("invalid: {}", e)),
        },

        Command::Vars { expression } => {
            let vars: Vec<String> = engine
                .extract_variables(&expression)
                .iter()
                .map(|v| v.to_string())
                .collect();
            println!("{}", vars.join(", "));
        }

        Command::Eval { expression, set } => {
            engine.validate(&expression)?;
            let assignment: Assignment = set.parse()?;
            let value = engine.evaluate(&expression, &assignment)?;
            println!("{} under [{}] = {}", expression, assignment, value as u8);
        }

        Command::Table { expression, csv } => {
            let table = engine.generate_truth_table(&expression)?;
            print!("{}", table);

            let summary = table.summary();
            println!();
            println!("Rows: {} ({} true, {} false)", summary.total_rows, summary.true_count, summary.false_count);
            println!("Classification: {}", table.classification());
            println!("Minterms: {:?}", table.minterms());
            println!("Maxterms: {:?}", table.maxterms());

            if let Some(path) = csv {
                table.save_csv(&path)?;
                println!("Wrote {}", path.display());
            }
        }

        Command::Simplify { expression } => {
            let result = engine.simplify(&expression);
            for (i, step) in result.steps.iter().enumerate() {
                println!("{:>3}. {}", i, step);
            }
            if !result.converged {
                println!("(stopped after {} iterations)", result.iterations);
            }

            let stats = result.stats();
            println!();
            println!("Result: {}", result.expression);
            println!(
                "Length: {} -> {} ({:.1}% shorter)",
                stats.original_length, stats.simplified_length, stats.reduction_percent
            );
        }
    }

    Ok(())
}
