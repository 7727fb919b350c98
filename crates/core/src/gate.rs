//! Gate variants, evaluation rules, and the per-gate cost model.

use std::fmt;

use indexmap::IndexSet;

use crate::netlist::{GateId, InputId};

/// Multiplier applied to the squared component count in the cost formula.
pub const COST_MULTIPLIER: u64 = 10;

/// The boolean function computed by a gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GateKind {
    /// Unary negation.
    Not,
    /// Binary conjunction.
    And,
    /// Binary disjunction.
    Or,
    /// Binary exclusive or.
    Xor,
}

impl GateKind {
    /// Number of input pins the gate requires.
    pub const fn arity(self) -> u8 {
        match self {
            GateKind::Not => 1,
            GateKind::And | GateKind::Or | GateKind::Xor => 2,
        }
    }

    /// Component count used for cost when none is given at construction.
    pub const fn default_components(self) -> u32 {
        match self {
            GateKind::Not => 2,
            GateKind::And | GateKind::Or | GateKind::Xor => 3,
        }
    }

    /// Computes the gate function over the current input snapshot.
    ///
    /// Returns `None` when any required input is still undefined; the caller
    /// must leave the output untouched in that case.
    pub(crate) fn eval(self, in0: Option<bool>, in1: Option<bool>) -> Option<bool> {
        match self {
            GateKind::Not => in0.map(|a| !a),
            GateKind::And => Some(in0? && in1?),
            GateKind::Or => Some(in0? || in1?),
            GateKind::Xor => Some(in0? != in1?),
        }
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GateKind::Not => "NOT",
            GateKind::And => "AND",
            GateKind::Or => "OR",
            GateKind::Xor => "XOR",
        };
        f.write_str(s)
    }
}

/// Arena record for one gate instance.
///
/// Pin 1 is unused for unary gates. The fan-out set preserves insertion
/// order and ignores duplicate edges. `next` threads the gate into a
/// circuit registry and plays no part in signal flow.
#[derive(Debug)]
pub(crate) struct Gate {
    pub(crate) name: String,
    pub(crate) kind: GateKind,
    pub(crate) components: u32,
    pub(crate) inputs: [Option<bool>; 2],
    pub(crate) output: Option<bool>,
    pub(crate) fanout: IndexSet<InputId>,
    pub(crate) next: Option<GateId>,
    pub(crate) registered: bool,
}

impl Gate {
    pub(crate) fn new(kind: GateKind, name: String, components: u32) -> Self {
        Gate {
            name,
            kind,
            components,
            inputs: [None, None],
            output: None,
            fanout: IndexSet::new(),
            next: None,
            registered: false,
        }
    }

    /// Structural cost: `COST_MULTIPLIER * components^2`.
    pub(crate) fn cost(&self) -> u64 {
        COST_MULTIPLIER * u64::from(self.components).pow(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truth_tables() {
        for a in [false, true] {
            assert_eq!(GateKind::Not.eval(Some(a), None), Some(!a));
            for b in [false, true] {
                assert_eq!(GateKind::And.eval(Some(a), Some(b)), Some(a && b));
                assert_eq!(GateKind::Or.eval(Some(a), Some(b)), Some(a || b));
                assert_eq!(GateKind::Xor.eval(Some(a), Some(b)), Some(a != b));
            }
        }
    }

    #[test]
    fn undefined_input_skips_evaluation() {
        assert_eq!(GateKind::Not.eval(None, None), None);
        for kind in [GateKind::And, GateKind::Or, GateKind::Xor] {
            assert_eq!(kind.eval(Some(true), None), None);
            assert_eq!(kind.eval(None, Some(true)), None);
            assert_eq!(kind.eval(None, None), None);
        }
    }

    #[test]
    fn not_ignores_second_pin() {
        // Unary gates only look at pin 0.
        assert_eq!(GateKind::Not.eval(Some(false), Some(true)), Some(true));
    }

    #[test]
    fn arities_and_defaults() {
        assert_eq!(GateKind::Not.arity(), 1);
        assert_eq!(GateKind::Not.default_components(), 2);
        for kind in [GateKind::And, GateKind::Or, GateKind::Xor] {
            assert_eq!(kind.arity(), 2);
            assert_eq!(kind.default_components(), 3);
        }
    }

    #[test]
    fn cost_formula() {
        let not = Gate::new(GateKind::Not, "n".into(), 2);
        assert_eq!(not.cost(), 40);
        let and = Gate::new(GateKind::And, "a".into(), 3);
        assert_eq!(and.cost(), 90);
        let custom = Gate::new(GateKind::Xor, "x".into(), 5);
        assert_eq!(custom.cost(), 250);
    }
}
