//! A collection of classic machine definitions, ready to run or to use as test fixtures.

use crate::fsm::FsmDefinition;
use crate::frozen::FrozenVector;
use crate::machine::TuringMachineDefinition;
use crate::registry::Ids;
use crate::types::MachineError;

/// The kind of machine a catalog entry builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    FiniteStateMachine,
    TuringMachine,
}

/// Summary of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgramInfo {
    pub name: &'static str,
    pub kind: Kind,
    pub description: &'static str,
}

/// Every machine the catalog can build.
pub const PROGRAMS: [ProgramInfo; 6] = [
    ProgramInfo {
        name: "odd-binary-number",
        kind: Kind::FiniteStateMachine,
        description: "Accepts binary numbers (most significant bit first) that are odd",
    },
    ProgramInfo {
        name: "even-binary-number",
        kind: Kind::FiniteStateMachine,
        description: "Accepts binary numbers that are even, including the empty word",
    },
    ProgramInfo {
        name: "accept-all",
        kind: Kind::FiniteStateMachine,
        description: "Accepts every word over {0, 1}",
    },
    ProgramInfo {
        name: "a-star-b-star",
        kind: Kind::FiniteStateMachine,
        description: "Accepts a*b* over {a, b}",
    },
    ProgramInfo {
        name: "busy-beaver-3",
        kind: Kind::TuringMachine,
        description: "The 3-state, 2-symbol busy beaver; halts after 13 steps with six 1s",
    },
    ProgramInfo {
        name: "odd-binary-number-tm",
        kind: Kind::TuringMachine,
        description: "odd-binary-number compiled into a Turing Machine",
    },
];

/// Get information about a catalog entry by its name.
pub fn program_info(name: &str) -> Option<ProgramInfo> {
    PROGRAMS.iter().find(|program| program.name == name).copied()
}

/// List all program names.
pub fn list_program_names() -> Vec<&'static str> {
    PROGRAMS.iter().map(|program| program.name).collect()
}

/// Reads a binary number most significant bit first; final in state `odd`.
pub fn odd_binary_number() -> Result<FsmDefinition<char, &'static str>, MachineError> {
    binary_parity([false, true])
}

pub fn even_binary_number() -> Result<FsmDefinition<char, &'static str>, MachineError> {
    binary_parity([true, false])
}

fn binary_parity(final_states: [bool; 2]) -> Result<FsmDefinition<char, &'static str>, MachineError> {
    let transitions: [[usize; 2]; 2] = [
        // read 0, read 1
        [0, 1], // even so far
        [0, 1], // odd so far
    ];
    FsmDefinition::new("01".chars(), ["even", "odd"], 0, transitions, final_states)
}

pub fn accept_all() -> Result<FsmDefinition<char, char>, MachineError> {
    let transitions: [[usize; 2]; 1] = [[0, 0]];
    FsmDefinition::new("01".chars(), ['F'], 0, transitions, [true])
}

/// State 0 has read only `a`s, state 1 has read at least one `b`, state 2 is the sink.
pub fn a_star_b_star() -> Result<FsmDefinition<char, usize>, MachineError> {
    let transitions: [[usize; 2]; 3] = [[0, 1], [2, 1], [2, 2]];
    FsmDefinition::new("ab".chars(), Ids, 0, transitions, [true, true, false])
}

/// Letter 0 is the blank, letter 1 is the only input letter.
pub fn busy_beaver_3() -> Result<TuringMachineDefinition<usize, usize>, MachineError> {
    let transitions: [[i32; 6]; 3] = [
        // read 0      read 1
        [1, 1, 1, 2, 1, -1],
        [0, 1, -1, 1, 1, 1],
        [1, 1, -1, -2, 1, 0],
    ];
    TuringMachineDefinition::by_id(0, Some(FrozenVector::from([false, true])), 0, transitions)
}

pub fn odd_binary_number_tm() -> Result<TuringMachineDefinition<usize, usize>, MachineError> {
    odd_binary_number()?.to_turing_machine_by_id()
}
