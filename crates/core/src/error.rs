//! Error types for netlist construction and propagation.

use thiserror::Error;

use crate::netlist::GateId;

/// Errors reported by netlist and circuit operations.
///
/// Reading a never-driven value is *not* an error: it is the `None` case of
/// the tri-state value model. Likewise a gate declining to evaluate because
/// one of its inputs is still undefined is normal control flow and never
/// surfaces here.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The handle was not issued by this netlist.
    #[error("unknown gate handle {0}")]
    UnknownGate(GateId),

    /// The pin index is beyond the gate's arity.
    #[error("gate `{gate}` has {arity} input pin(s), pin {pin} does not exist")]
    NoSuchPin {
        /// Name of the gate the pin was requested on.
        gate: String,
        /// The requested pin index.
        pin: u8,
        /// The gate's actual input pin count.
        arity: u8,
    },

    /// The gate is already registered to a circuit.
    #[error("gate `{0}` is already registered to a circuit")]
    AlreadyRegistered(String),

    /// A propagation pass exceeded its step budget.
    ///
    /// Only reachable when the wiring feeds a gate's output back into one of
    /// its own transitive inputs, which the simulator does not detect at
    /// wiring time.
    #[error("propagation exceeded {0} steps, wiring likely contains a feedback loop")]
    PropagationLimit(usize),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
