//! Circuit registry and the aggregate cost query.

use crate::error::Result;
use crate::gate::GateKind;
use crate::netlist::{GateId, Netlist};

/// Registry of gates composing one circuit.
///
/// Gates are threaded into a singly linked chain through their successor
/// fields, most recently added first. The chain is bookkeeping only; it
/// carries no signals. A gate registers to at most one circuit, exactly
/// once: re-registration fails instead of silently relinking.
#[derive(Debug, Default)]
pub struct Circuit {
    head: Option<GateId>,
}

impl Circuit {
    /// Creates an empty circuit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs a gate in the netlist and registers it here.
    pub fn gate(
        &mut self,
        net: &mut Netlist,
        kind: GateKind,
        name: impl Into<String>,
    ) -> Result<GateId> {
        let id = net.add_gate(kind, name);
        self.add(net, id)?;
        Ok(id)
    }

    /// Like [`Circuit::gate`] with an explicit component count.
    pub fn gate_with_components(
        &mut self,
        net: &mut Netlist,
        kind: GateKind,
        name: impl Into<String>,
        components: u32,
    ) -> Result<GateId> {
        let id = net.add_gate_with_components(kind, name, components);
        self.add(net, id)?;
        Ok(id)
    }

    /// Registers an existing gate as the new head of the chain.
    pub fn add(&mut self, net: &mut Netlist, gate: GateId) -> Result<()> {
        net.register(gate, self.head)?;
        self.head = Some(gate);
        Ok(())
    }

    /// Total structural cost of all registered gates.
    ///
    /// Recomputed by walking the full chain on every call; O(registered
    /// gates), never cached.
    pub fn cost(&self, net: &Netlist) -> u64 {
        self.gates(net).map(|id| net.cost_of(id)).sum()
    }

    /// Iterates the registered gates, most recently added first.
    pub fn gates<'n>(&self, net: &'n Netlist) -> Gates<'n> {
        Gates {
            net,
            cur: self.head,
        }
    }
}

/// Iterator over a circuit's registered gates.
#[derive(Debug)]
pub struct Gates<'n> {
    net: &'n Netlist,
    cur: Option<GateId>,
}

impl Iterator for Gates<'_> {
    type Item = GateId;

    fn next(&mut self) -> Option<GateId> {
        let id = self.cur?;
        self.cur = self.net.successor(id);
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn cost_sums_registered_gates() {
        let mut net = Netlist::new();
        let mut circuit = Circuit::new();
        circuit.gate(&mut net, GateKind::Not, "not1").unwrap();
        // One NOT gate, components=2: 10 * 2^2.
        assert_eq!(circuit.cost(&net), 40);
        circuit.gate(&mut net, GateKind::And, "and1").unwrap();
        // Plus one AND gate, components=3: 10 * 3^2.
        assert_eq!(circuit.cost(&net), 130);
        // Repeated queries re-traverse, they do not accumulate.
        assert_eq!(circuit.cost(&net), 130);
    }

    #[test]
    fn cost_with_custom_components() {
        let mut net = Netlist::new();
        let mut circuit = Circuit::new();
        let big = net.add_gate_with_components(GateKind::Or, "or1", 4);
        circuit.add(&mut net, big).unwrap();
        assert_eq!(circuit.cost(&net), 160);
        circuit
            .gate_with_components(&mut net, GateKind::Not, "not1", 5)
            .unwrap();
        assert_eq!(circuit.cost(&net), 410);
    }

    #[test]
    fn unregistered_gates_do_not_count() {
        let mut net = Netlist::new();
        let mut circuit = Circuit::new();
        net.add_gate(GateKind::Xor, "loose");
        assert_eq!(circuit.cost(&net), 0);
        circuit.gate(&mut net, GateKind::Not, "not1").unwrap();
        assert_eq!(circuit.cost(&net), 40);
    }

    #[test]
    fn chain_order_is_most_recent_first() {
        let mut net = Netlist::new();
        let mut circuit = Circuit::new();
        let a = circuit.gate(&mut net, GateKind::Not, "a").unwrap();
        let b = circuit.gate(&mut net, GateKind::Not, "b").unwrap();
        let c = circuit.gate(&mut net, GateKind::Not, "c").unwrap();
        let order: Vec<_> = circuit.gates(&net).collect();
        assert_eq!(order, vec![c, b, a]);
    }

    #[test]
    fn double_registration_fails() {
        let mut net = Netlist::new();
        let mut circuit = Circuit::new();
        let not = circuit.gate(&mut net, GateKind::Not, "not1").unwrap();
        assert_eq!(
            circuit.add(&mut net, not),
            Err(Error::AlreadyRegistered("not1".into()))
        );

        // Also across circuits: a gate belongs to one circuit at a time.
        let mut other = Circuit::new();
        assert_eq!(
            other.add(&mut net, not),
            Err(Error::AlreadyRegistered("not1".into()))
        );
        // The failed add leaves the original chain intact.
        assert_eq!(circuit.cost(&net), 40);
    }
}
