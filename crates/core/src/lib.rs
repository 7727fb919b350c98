//! Synchronous boolean logic gate simulator.
//!
//! Primitive gates (NOT, AND, OR, XOR) live in a [`Netlist`] arena and are
//! wired into a directed signal graph by connecting gate outputs to gate
//! input pins. Driving an input propagates synchronously through the whole
//! fan-out graph before the call returns. A [`Circuit`] registers gates and
//! aggregates a structural cost metric over them.
//!
//! Values are tri-state: an input or output that was never driven reads as
//! `None`, which is distinct from `Some(false)`.

pub mod adder;
pub mod circuit;
pub mod error;
pub mod gate;
pub mod netlist;

// Re-export the main types at crate root.
pub use circuit::Circuit;
pub use error::{Error, Result};
pub use gate::GateKind;
pub use netlist::{GateId, InputId, MAX_PROPAGATION_STEPS, Netlist};
