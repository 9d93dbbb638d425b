//! This crate provides engines for two classical models of computation: deterministic
//! finite state machines and Turing Machines, over letter and state types of your choice.
//! It includes immutable shareable tables, id registries, both engines, and a compiler
//! from finite state machines to Turing Machines.

pub mod catalog;
pub mod compiler;
pub mod frozen;
pub mod fsm;
pub mod machine;
pub mod registry;
pub mod types;
mod validation;

/// Re-exports the frozen table types from the frozen module.
pub use frozen::{FrozenMatrix, FrozenVector};
/// Re-exports the finite state machine definition and execution.
pub use fsm::{FsmDefinition, FsmExecution};
/// Re-exports the Turing Machine definition and execution.
pub use machine::{TuringMachineDefinition, TuringMachineExecution};
/// Re-exports the registry types, including the `Ids` marker for id-only machines.
pub use registry::{Ids, IntoRegistry, Registry, Role, Symbol};
/// Re-exports value and error types from the types module.
pub use types::{
    Action, ConstructionError, Direction, Halt, MachineError, Status, Step, ACCEPT_CODE,
    REJECT_CODE,
};
