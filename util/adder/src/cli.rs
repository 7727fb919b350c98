use clap::{Parser, Subcommand};

/// 1-bit full adder simulator built on gatesim-core
#[derive(Parser, Debug)]
#[command(name = "adder")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add two bits plus a carry and show every gate's state
    Run(RunCommand),
    /// Print the full 8-row truth table
    Table,
}

#[derive(Parser, Debug)]
pub struct RunCommand {
    /// First operand bit (0/1/true/false)
    #[arg(value_name = "A", value_parser = parse_bit)]
    pub a: bool,

    /// Second operand bit (0/1/true/false)
    #[arg(value_name = "B", value_parser = parse_bit)]
    pub b: bool,

    /// Carry-in bit (0/1/true/false)
    #[arg(value_name = "CARRY_IN", value_parser = parse_bit)]
    pub carry_in: bool,
}

fn parse_bit(s: &str) -> Result<bool, String> {
    match s {
        "0" | "false" => Ok(false),
        "1" | "true" => Ok(true),
        other => Err(format!("expected 0, 1, true, or false, got `{other}`")),
    }
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
