//! 1-bit full adder built from five primitive gates.
//!
//! ```text
//! sum       = (a XOR b) XOR carry_in
//! carry_out = ((a XOR b) AND carry_in) OR (a AND b)
//! ```
//!
//! Two XOR, two AND, and one OR gate, all at the default component count,
//! for a total circuit cost of 450.

use crate::circuit::Circuit;
use crate::error::Result;
use crate::gate::GateKind;
use crate::netlist::{GateId, InputId, Netlist};

/// A wired, registered 1-bit full adder.
///
/// All internal edges are connected at construction; the three primary
/// inputs start undriven, so [`sum`](Self::sum) and
/// [`carry_out`](Self::carry_out) read as `None` until every primary input
/// has been driven at least once. The primaries can be driven in any order
/// and re-driven freely.
#[derive(Debug)]
pub struct FullAdder {
    net: Netlist,
    circuit: Circuit,
    a: [InputId; 2],
    b: [InputId; 2],
    carry_in: [InputId; 2],
    sum: GateId,
    carry: GateId,
}

impl FullAdder {
    /// Builds and wires the adder, leaving the primary inputs undriven.
    pub fn new() -> Result<Self> {
        let mut net = Netlist::new();
        let mut circuit = Circuit::new();

        let xor_ab = circuit.gate(&mut net, GateKind::Xor, "xor_ab")?;
        let xor_sum = circuit.gate(&mut net, GateKind::Xor, "xor_sum")?;
        let and_prop = circuit.gate(&mut net, GateKind::And, "and_prop")?;
        let and_ab = circuit.gate(&mut net, GateKind::And, "and_ab")?;
        let or_carry = circuit.gate(&mut net, GateKind::Or, "or_carry")?;

        // Internal edges first, primary drives come later from the caller.
        net.connect(xor_ab, net.input(xor_sum, 0)?)?;
        net.connect(xor_ab, net.input(and_prop, 0)?)?;
        net.connect(and_prop, net.input(or_carry, 0)?)?;
        net.connect(and_ab, net.input(or_carry, 1)?)?;

        Ok(FullAdder {
            a: [net.input(xor_ab, 0)?, net.input(and_ab, 0)?],
            b: [net.input(xor_ab, 1)?, net.input(and_ab, 1)?],
            carry_in: [net.input(xor_sum, 1)?, net.input(and_prop, 1)?],
            sum: xor_sum,
            carry: or_carry,
            net,
            circuit,
        })
    }

    /// Drives the `a` operand.
    pub fn set_a(&mut self, value: bool) -> Result<()> {
        for input in self.a {
            self.net.drive(input, value)?;
        }
        Ok(())
    }

    /// Drives the `b` operand.
    pub fn set_b(&mut self, value: bool) -> Result<()> {
        for input in self.b {
            self.net.drive(input, value)?;
        }
        Ok(())
    }

    /// Drives the carry-in.
    pub fn set_carry_in(&mut self, value: bool) -> Result<()> {
        for input in self.carry_in {
            self.net.drive(input, value)?;
        }
        Ok(())
    }

    /// The sum output, `None` until its dependency chain is complete.
    pub fn sum(&self) -> Option<bool> {
        // Handles were created in new(), the lookup cannot fail.
        self.net.output_value(self.sum).ok().flatten()
    }

    /// The carry output, `None` until its dependency chain is complete.
    pub fn carry_out(&self) -> Option<bool> {
        self.net.output_value(self.carry).ok().flatten()
    }

    /// Total structural cost of the five gates.
    pub fn cost(&self) -> u64 {
        self.circuit.cost(&self.net)
    }

    /// The underlying netlist, for inspection and describe strings.
    pub fn netlist(&self) -> &Netlist {
        &self.net
    }

    /// The circuit registry holding the five gates.
    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }
}

/// One-shot full addition: returns `(sum, carry_out, cost)`.
pub fn full_adder(a: bool, b: bool, carry_in: bool) -> Result<(bool, bool, u64)> {
    let mut adder = FullAdder::new()?;
    adder.set_a(a)?;
    adder.set_b(b)?;
    adder.set_carry_in(carry_in)?;
    let (Some(sum), Some(carry_out)) = (adder.sum(), adder.carry_out()) else {
        unreachable!("all primary inputs driven");
    };
    Ok((sum, carry_out, adder.cost()))
}
