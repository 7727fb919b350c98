//! CLI tool for simulating the 1-bit full adder circuit.

mod cli;

use anyhow::Result;
use cli::{Cli, Command, RunCommand};
use gatesim_core::adder::{FullAdder, full_adder};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Cli::parse_args();

    match args.command {
        Command::Run(run) => run_adder(run),
        Command::Table => print_table(),
    }
}

fn run_adder(args: RunCommand) -> Result<()> {
    println!("1-bit Full Adder");
    println!("================");
    println!(
        "a={} b={} carry_in={}",
        args.a as u8, args.b as u8, args.carry_in as u8
    );
    println!();

    let mut adder = FullAdder::new()?;
    adder.set_a(args.a)?;
    adder.set_b(args.b)?;
    adder.set_carry_in(args.carry_in)?;

    // The registry iterates most-recent-first; show build order instead.
    let mut gates: Vec<_> = adder.circuit().gates(adder.netlist()).collect();
    gates.reverse();
    for id in gates {
        println!("  {}", adder.netlist().describe(id)?);
    }

    println!();
    print_outputs(&adder);
    Ok(())
}

fn print_table() -> Result<()> {
    println!("a b ci | sum co");
    println!("-------+-------");
    let mut cost = 0;
    for bits in 0u8..8 {
        let a = bits & 4 != 0;
        let b = bits & 2 != 0;
        let ci = bits & 1 != 0;
        let (sum, carry_out, c) = full_adder(a, b, ci)?;
        cost = c;
        println!(
            "{} {} {}  |  {}  {}",
            a as u8, b as u8, ci as u8, sum as u8, carry_out as u8
        );
    }
    println!();
    println!("Circuit cost: {cost}");
    Ok(())
}

fn print_outputs(adder: &FullAdder) {
    let fmt = |v: Option<bool>| match v {
        Some(v) => (v as u8).to_string(),
        None => "(undefined)".to_string(),
    };
    println!("sum       = {}", fmt(adder.sum()));
    println!("carry_out = {}", fmt(adder.carry_out()));
    println!("cost      = {}", adder.cost());
}
