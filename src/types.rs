//! This module defines the small value types shared by the finite state machine and
//! Turing Machine engines: halt codes, head directions, step outcomes and the error types.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Transition-table code for "halt and reject".
pub const REJECT_CODE: i32 = -1;
/// Transition-table code for "halt and accept".
pub const ACCEPT_CODE: i32 = -2;
/// Transition-table code for a move to the left.
pub const LEFT_CODE: i32 = -1;
/// Transition-table code for staying on the current cell.
pub const STAY_CODE: i32 = 0;
/// Transition-table code for a move to the right.
pub const RIGHT_CODE: i32 = 1;

/// Represents the possible directions a Turing Machine head can move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// Move the head one position to the left.
    Left,
    /// Keep the head in the same position.
    Stay,
    /// Move the head one position to the right.
    Right,
}

impl Direction {
    /// Decodes a direction cell of a transition table.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            LEFT_CODE => Some(Direction::Left),
            STAY_CODE => Some(Direction::Stay),
            RIGHT_CODE => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn code(self) -> i32 {
        match self {
            Direction::Left => LEFT_CODE,
            Direction::Stay => STAY_CODE,
            Direction::Right => RIGHT_CODE,
        }
    }
}

/// The terminal signal of a Turing Machine run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Halt {
    /// Halted in the rejecting configuration (code `-1`).
    Reject,
    /// Halted in the accepting configuration (code `-2`).
    Accept,
}

impl Halt {
    /// Decodes a next-state cell; returns `None` for ordinary state ids.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            REJECT_CODE => Some(Halt::Reject),
            ACCEPT_CODE => Some(Halt::Accept),
            _ => None,
        }
    }

    pub fn code(self) -> i32 {
        match self {
            Halt::Reject => REJECT_CODE,
            Halt::Accept => ACCEPT_CODE,
        }
    }

    pub fn is_accept(self) -> bool {
        self == Halt::Accept
    }
}

/// The control state of a Turing Machine execution.
///
/// `Running` carries the current state id. Once `Halted`, no transition leaves the status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Status {
    Running(usize),
    Halted(Halt),
}

impl Status {
    /// Decodes a next-state cell that already passed validation.
    pub(crate) fn from_code(code: i32) -> Self {
        match Halt::from_code(code) {
            Some(halt) => Status::Halted(halt),
            None => Status::Running(code as usize),
        }
    }

    /// Returns the numeric form used in transition tables: the state id while running,
    /// `-1` or `-2` once halted.
    pub fn code(self) -> i64 {
        match self {
            Status::Running(state) => state as i64,
            Status::Halted(halt) => halt.code() as i64,
        }
    }

    pub fn is_halted(self) -> bool {
        matches!(self, Status::Halted(_))
    }
}

/// A decoded transition-table entry: what a Turing Machine does in a given state
/// when it reads a given letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Action {
    /// The status after the step.
    pub next: Status,
    /// The letter id written under the head.
    pub write: usize,
    /// The head movement performed after writing.
    pub direction: Direction,
}

/// Represents the outcome of a Turing Machine execution step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The machine is still running.
    Continue,
    /// The machine has halted.
    Halt(Halt),
}

/// Errors raised while building a definition, a frozen table or a registry.
///
/// A definition either passes every check or is never produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructionError {
    /// The same letter appears twice in an alphabet.
    #[error("Duplicated letter in alphabet: {0}")]
    DuplicateSymbol(String),
    /// The same state appears twice in a state collection.
    #[error("Duplicated state in states: {0}")]
    DuplicateState(String),
    #[error("Initial state ({state}) is out of range, it should be in [0, {count})")]
    InitialStateOutOfRange { state: usize, count: usize },
    #[error("Blank symbol ({blank}) is out of range, it should be in [0, {size})")]
    BlankOutOfRange { blank: usize, size: usize },
    #[error("Tape alphabet must contain at least one letter")]
    EmptyTapeAlphabet,
    #[error("A machine must have at least one state")]
    NoStates,
    /// The transition table does not have the dimensions implied by the alphabet and states.
    #[error("Transition table is {found_rows}x{found_cols}, expected {expected_rows}x{expected_cols}")]
    TableShape {
        expected_rows: usize,
        expected_cols: usize,
        found_rows: usize,
        found_cols: usize,
    },
    /// A matrix was built from rows of unequal length.
    #[error("Row {row} has {found} columns, expected {expected}")]
    RaggedMatrix {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("Final state vector has length {found}, expected {expected}")]
    FinalStatesLength { expected: usize, found: usize },
    #[error("Input alphabet vector has length {found}, expected {expected}")]
    InputAlphabetLength { expected: usize, found: usize },
    #[error("Blank symbol must not be part of the input alphabet")]
    BlankInInputAlphabet,
    /// A finite state machine transition leads to a state that does not exist.
    #[error("Transition from state {state} on letter {letter} references state {target}, expected [0, {count})")]
    TransitionOutOfRange {
        state: usize,
        letter: usize,
        target: usize,
        count: usize,
    },
    #[error("Transition from state {state} on letter {letter} references state {value}, expected [-2, {count})")]
    NextStateOutOfRange {
        state: usize,
        letter: usize,
        value: i32,
        count: usize,
    },
    #[error("Transition from state {state} on letter {letter} writes letter {value}, expected [0, {size})")]
    WriteOutOfRange {
        state: usize,
        letter: usize,
        value: i32,
        size: usize,
    },
    #[error("Transition from state {state} on letter {letter} has direction {value}, expected -1, 0 or 1")]
    DirectionOutOfRange {
        state: usize,
        letter: usize,
        value: i32,
    },
}

/// Represents the errors returned by the machine engines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MachineError {
    /// The definition could not be built.
    #[error("Invalid machine definition: {0}")]
    Construction(#[from] ConstructionError),
    /// A typed letter is not part of the alphabet.
    #[error("Unknown symbol: {0}")]
    UnknownSymbol(String),
    /// A typed state is not part of the states.
    #[error("Unknown state: {0}")]
    UnknownState(String),
    /// A finite state machine was asked to read a letter it does not know.
    #[error("Invalid letter: {0}")]
    InvalidLetter(String),
    /// A Turing Machine input word contains a letter outside the input alphabet.
    #[error("Letter {0} is not in the input alphabet")]
    SymbolNotInInputAlphabet(usize),
    /// An index exceeded the declared dimension of a table.
    #[error("Index {index} is out of range for length {len}")]
    OutOfRange { index: usize, len: usize },
}
