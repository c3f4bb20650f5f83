//! spmatrix: add, subtract or multiply two sparse matrix files.
//!
//! Arguments that are not given on the command line are prompted for on
//! stdin. Errors from the library are reported at this boundary.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use spmatrix::{MultiplyStrategy, OpsConfig, SparseMatrix};

/// Sparse matrix operation tool.
#[derive(Parser, Debug)]
#[command(name = "spmatrix", version = spmatrix::VERSION)]
struct Cli {
    /// Operation: 1/add, 2/subtract or 3/multiply.
    operation: Option<String>,

    /// Path to the first matrix file.
    first: Option<PathBuf>,

    /// Path to the second matrix file.
    second: Option<PathBuf>,

    /// Write the result to this file instead of printing it.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Number of threads for parallel multiplication.
    #[arg(long)]
    threads: Option<usize>,

    /// Multiplication strategy: sequential, parallel or auto.
    #[arg(long, default_value = "auto")]
    strategy: MultiplyStrategy,
}

#[derive(Debug, Clone, Copy)]
enum Operation {
    Add,
    Subtract,
    Multiply,
}

impl Operation {
    fn parse(choice: &str) -> Option<Self> {
        match choice.trim().to_ascii_lowercase().as_str() {
            "1" | "add" | "addition" => Some(Operation::Add),
            "2" | "sub" | "subtract" | "subtraction" => Some(Operation::Subtract),
            "3" | "mul" | "multiply" | "multiplication" => Some(Operation::Multiply),
            _ => None,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Operation::Add => "Addition",
            Operation::Subtract => "Subtraction",
            Operation::Multiply => "Multiplication",
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let choice = match cli.operation {
        Some(choice) => choice,
        None => {
            println!("Sparse Matrix Operation Tool");
            println!("Choose an operation:");
            println!("1. Addition");
            println!("2. Subtraction");
            println!("3. Multiplication");
            prompt("Enter choice (1/2/3): ")?
        }
    };

    let first = match cli.first {
        Some(path) => path,
        None => prompt("Enter path to first matrix file: ")?.into(),
    };
    let second = match cli.second {
        Some(path) => path,
        None => prompt("Enter path to second matrix file: ")?.into(),
    };

    let Some(operation) = Operation::parse(&choice) else {
        println!("Invalid choice.");
        return Ok(());
    };

    let a = SparseMatrix::<i64>::from_file(&first)?;
    let b = SparseMatrix::<i64>::from_file(&second)?;

    let mut config = OpsConfig {
        strategy: cli.strategy,
        ..OpsConfig::default()
    };
    if let Some(threads) = cli.threads {
        config.n_threads = threads.max(1);
    }

    let result = match operation {
        Operation::Add => a.add(&b)?,
        Operation::Subtract => a.subtract(&b)?,
        Operation::Multiply => a.multiply_with(&b, &config)?,
    };

    match cli.output {
        Some(path) => {
            result.to_file(&path)?;
            println!("Result of {} written to {}", operation.label(), path.display());
        }
        None => {
            println!("\nResult of {}:", operation.label());
            println!("{}", result);
        }
    }

    Ok(())
}

/// Prints `label` and reads one trimmed line from stdin
fn prompt(label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read from stdin")?;

    Ok(line.trim().to_string())
}
