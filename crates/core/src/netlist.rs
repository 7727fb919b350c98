//! Gate arena, wiring, and synchronous signal propagation.

use std::fmt;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::gate::{Gate, GateKind};

/// Upper bound on input-drive steps in one propagation pass.
///
/// An acyclic wiring settles long before this; the budget exists so that
/// accidental feedback wiring fails with [`Error::PropagationLimit`] instead
/// of looping forever.
pub const MAX_PROPAGATION_STEPS: usize = 1 << 20;

/// Stable handle to a gate in a [`Netlist`].
///
/// Handles are plain indices: cheap to copy, valid for the lifetime of the
/// netlist that issued them, and meaningless in any other netlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GateId(pub(crate) u32);

impl GateId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for GateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "g{}", self.0)
    }
}

/// Handle to one input pin of a gate.
///
/// Obtained through [`Netlist::input`], which validates the pin against the
/// gate's arity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InputId {
    pub(crate) gate: GateId,
    pub(crate) pin: u8,
}

impl InputId {
    /// The gate owning this pin.
    pub fn gate(self) -> GateId {
        self.gate
    }

    /// The pin index on the owning gate (0 or 1).
    pub fn pin(self) -> u8 {
        self.pin
    }
}

impl fmt::Display for InputId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.in{}", self.gate, self.pin)
    }
}

/// Arena owning the gates of one signal graph.
///
/// All construction, wiring, driving, and reading goes through the netlist;
/// gates reference each other only by handle, never by live reference.
#[derive(Debug, Default)]
pub struct Netlist {
    gates: Vec<Gate>,
}

impl Netlist {
    /// Creates an empty netlist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of gates in the arena.
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// Whether the arena holds no gates.
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Adds a gate with the kind's default component count.
    pub fn add_gate(&mut self, kind: GateKind, name: impl Into<String>) -> GateId {
        self.add_gate_with_components(kind, name, kind.default_components())
    }

    /// Adds a gate with an explicit component count (cost only).
    pub fn add_gate_with_components(
        &mut self,
        kind: GateKind,
        name: impl Into<String>,
        components: u32,
    ) -> GateId {
        let id = GateId(self.gates.len() as u32);
        let name = name.into();
        debug!(%id, %name, kind = %kind, components, "gate added");
        self.gates.push(Gate::new(kind, name, components));
        id
    }

    /// Resolves a pin index on a gate to an input handle.
    ///
    /// Fails with [`Error::NoSuchPin`] when the pin is beyond the gate's
    /// arity (pin 1 on a NOT gate, pin 2 and up everywhere).
    pub fn input(&self, gate: GateId, pin: u8) -> Result<InputId> {
        let g = self.gate(gate)?;
        let arity = g.kind.arity();
        if pin >= arity {
            return Err(Error::NoSuchPin {
                gate: g.name.clone(),
                pin,
                arity,
            });
        }
        Ok(InputId { gate, pin })
    }

    /// Connects a gate's output to an input pin.
    ///
    /// Idempotent: an edge that already exists is left alone and nothing is
    /// re-driven. On a new edge, if the source output already holds a value
    /// the target is driven with it immediately, cascading downstream.
    pub fn connect(&mut self, from: GateId, to: InputId) -> Result<()> {
        self.input(to.gate, to.pin)?;
        let source = self.gate_mut(from)?;
        if !source.fanout.insert(to) {
            return Ok(());
        }
        debug!(%from, %to, "connected");
        let pending = source.output;
        if let Some(value) = pending {
            self.drive(to, value)?;
        }
        Ok(())
    }

    /// Drives an input pin with a value, propagating synchronously.
    ///
    /// The owning gate re-evaluates from the full current input snapshot; a
    /// defined result is written to its output and delivered to every
    /// connected input in connection order, each delivery re-evaluating its
    /// own gate in turn. The call returns once the whole cascade has
    /// settled. A pass that exceeds [`MAX_PROPAGATION_STEPS`] aborts with
    /// [`Error::PropagationLimit`], leaving the graph partially updated.
    pub fn drive(&mut self, input: InputId, value: bool) -> Result<()> {
        self.input(input.gate, input.pin)?;

        // Explicit LIFO work list instead of recursion: popping the last
        // pushed edge first reproduces depth-first delivery order without
        // consuming call stack.
        let mut work = vec![(input, value)];
        let mut steps = 0usize;
        while let Some((target, value)) = work.pop() {
            steps += 1;
            if steps > MAX_PROPAGATION_STEPS {
                return Err(Error::PropagationLimit(MAX_PROPAGATION_STEPS));
            }

            let gate = &mut self.gates[target.gate.index()];
            gate.inputs[target.pin as usize] = Some(value);
            trace!(%target, value, gate = %gate.name, "input driven");

            let Some(out) = gate.kind.eval(gate.inputs[0], gate.inputs[1]) else {
                // A required input is still undefined: leave the output
                // untouched and stop this branch of the cascade.
                continue;
            };
            gate.output = Some(out);
            trace!(gate = %gate.name, output = out, "output written");

            // Reversed so the first connection ends up on top of the stack.
            for edge in gate.fanout.iter().rev() {
                work.push((*edge, out));
            }
        }
        Ok(())
    }

    /// Current value of an input pin, `None` if never driven.
    pub fn input_value(&self, input: InputId) -> Result<Option<bool>> {
        self.input(input.gate, input.pin)?;
        Ok(self.gates[input.gate.index()].inputs[input.pin as usize])
    }

    /// Current value of a gate's output, `None` if never written.
    pub fn output_value(&self, gate: GateId) -> Result<Option<bool>> {
        Ok(self.gate(gate)?.output)
    }

    /// Number of input pins currently connected to the gate's output.
    pub fn fan_out(&self, gate: GateId) -> Result<usize> {
        Ok(self.gate(gate)?.fanout.len())
    }

    /// The gate's name.
    pub fn name(&self, gate: GateId) -> Result<&str> {
        Ok(self.gate(gate)?.name.as_str())
    }

    /// Structural cost of one gate: `10 * components^2`.
    pub fn gate_cost(&self, gate: GateId) -> Result<u64> {
        Ok(self.gate(gate)?.cost())
    }

    /// Display string of the gate's current state.
    ///
    /// Undriven slots render as `(undefined)`, e.g.
    /// `XOR xor_ab: input0=true, input1=(undefined), output=(undefined)`.
    pub fn describe(&self, gate: GateId) -> Result<String> {
        let g = self.gate(gate)?;
        let out = fmt_value(g.output);
        let s = match g.kind.arity() {
            1 => format!(
                "{} {}: input={}, output={}",
                g.kind,
                g.name,
                fmt_value(g.inputs[0]),
                out
            ),
            _ => format!(
                "{} {}: input0={}, input1={}, output={}",
                g.kind,
                g.name,
                fmt_value(g.inputs[0]),
                fmt_value(g.inputs[1]),
                out
            ),
        };
        Ok(s)
    }

    /// Links a gate into a circuit registry chain.
    ///
    /// `next` is the registry's previous head. Fails when the gate is
    /// already registered; a gate belongs to at most one circuit, once.
    pub(crate) fn register(&mut self, gate: GateId, next: Option<GateId>) -> Result<()> {
        let g = self.gate_mut(gate)?;
        if g.registered {
            return Err(Error::AlreadyRegistered(g.name.clone()));
        }
        g.next = next;
        g.registered = true;
        debug!(%gate, name = %g.name, "registered to circuit");
        Ok(())
    }

    /// Successor in the registry chain. Valid handles only.
    pub(crate) fn successor(&self, gate: GateId) -> Option<GateId> {
        self.gates[gate.index()].next
    }

    /// Cost lookup for registry traversal. Valid handles only.
    pub(crate) fn cost_of(&self, gate: GateId) -> u64 {
        self.gates[gate.index()].cost()
    }

    fn gate(&self, id: GateId) -> Result<&Gate> {
        self.gates.get(id.index()).ok_or(Error::UnknownGate(id))
    }

    fn gate_mut(&mut self, id: GateId) -> Result<&mut Gate> {
        self.gates.get_mut(id.index()).ok_or(Error::UnknownGate(id))
    }
}

fn fmt_value(value: Option<bool>) -> &'static str {
    match value {
        Some(true) => "true",
        Some(false) => "false",
        None => "(undefined)",
    }
}
