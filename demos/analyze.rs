//! Command-line truth-table analyzer.
//!
//! Run with:
//! ```bash
//! cargo run --example analyze -- "(A OR B) AND NOT (A AND B)"
//! ```

use clap::Parser;

use truthtab::table::{TruthTable, DEFAULT_VARIABLE_LIMIT};

#[derive(Parser)]
#[command(about = "Print the truth table and semantic analysis of a propositional expression")]
struct Args {
    /// The expression, e.g. "(A OR B) AND NOT (A AND B)"
    expression: String,

    /// Ceiling on the number of distinct variables
    #[arg(long, default_value_t = DEFAULT_VARIABLE_LIMIT)]
    max_variables: usize,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    let expr = truthtab::parser::parse(&args.expression)?;
    println!("{}", expr);
    println!();

    let table = TruthTable::build(&expr, args.max_variables)?;
    println!("{}", table);

    println!("{}", table.analyze());

    Ok(())
}
