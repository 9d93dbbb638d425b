//! Construction-time checks for machine definitions.
//!
//! Every invariant the engines rely on is checked here, once, before a definition
//! exists. The execution code assumes these checks passed and does not re-check them.

use crate::frozen::{FrozenMatrix, FrozenVector};
use crate::types::{ConstructionError, Direction, ACCEPT_CODE};

/// The id-level parts of a finite state machine, before they are accepted.
pub(crate) struct FsmParts<'a> {
    pub alphabet_size: usize,
    pub num_states: usize,
    pub initial_state: usize,
    pub transitions: &'a FrozenMatrix<usize>,
    pub final_states: &'a FrozenVector<bool>,
}

/// The id-level parts of a Turing Machine, before they are accepted.
pub(crate) struct TmParts<'a> {
    pub tape_alphabet_size: usize,
    pub blank: usize,
    pub input_alphabet: &'a FrozenVector<bool>,
    pub num_states: usize,
    pub initial_state: usize,
    pub transitions: &'a FrozenMatrix<i32>,
}

/// Runs every finite state machine check and returns the first failure.
pub(crate) fn validate_fsm(parts: &FsmParts) -> Result<(), ConstructionError> {
    check_fsm_initial_state(parts)?;
    check_fsm_shape(parts)?;
    check_final_states(parts)?;
    check_fsm_targets(parts)
}

/// Runs every Turing Machine check and returns the first failure.
pub(crate) fn validate_tm(parts: &TmParts) -> Result<(), ConstructionError> {
    check_tape_alphabet(parts)?;
    check_input_alphabet(parts)?;
    check_tm_states(parts)?;
    check_tm_shape(parts)?;
    check_tm_cells(parts)
}

/// The input alphabet used when none is given: every tape letter except the blank.
pub(crate) fn default_input_alphabet(tape_alphabet_size: usize, blank: usize) -> FrozenVector<bool> {
    (0..tape_alphabet_size)
        .map(|letter| letter != blank)
        .collect::<Vec<_>>()
        .into()
}

fn check_fsm_initial_state(parts: &FsmParts) -> Result<(), ConstructionError> {
    if parts.initial_state >= parts.num_states {
        return Err(ConstructionError::InitialStateOutOfRange {
            state: parts.initial_state,
            count: parts.num_states,
        });
    }
    Ok(())
}

fn check_fsm_shape(parts: &FsmParts) -> Result<(), ConstructionError> {
    check_shape(parts.transitions, parts.num_states, parts.alphabet_size)
}

fn check_final_states(parts: &FsmParts) -> Result<(), ConstructionError> {
    if parts.final_states.len() != parts.num_states {
        return Err(ConstructionError::FinalStatesLength {
            expected: parts.num_states,
            found: parts.final_states.len(),
        });
    }
    Ok(())
}

fn check_fsm_targets(parts: &FsmParts) -> Result<(), ConstructionError> {
    for state in 0..parts.num_states {
        for letter in 0..parts.alphabet_size {
            let target = parts.transitions.at(state, letter);
            if target >= parts.num_states {
                return Err(ConstructionError::TransitionOutOfRange {
                    state,
                    letter,
                    target,
                    count: parts.num_states,
                });
            }
        }
    }
    Ok(())
}

fn check_tape_alphabet(parts: &TmParts) -> Result<(), ConstructionError> {
    if parts.tape_alphabet_size == 0 {
        return Err(ConstructionError::EmptyTapeAlphabet);
    }
    if parts.blank >= parts.tape_alphabet_size {
        return Err(ConstructionError::BlankOutOfRange {
            blank: parts.blank,
            size: parts.tape_alphabet_size,
        });
    }
    Ok(())
}

fn check_input_alphabet(parts: &TmParts) -> Result<(), ConstructionError> {
    if parts.input_alphabet.len() != parts.tape_alphabet_size {
        return Err(ConstructionError::InputAlphabetLength {
            expected: parts.tape_alphabet_size,
            found: parts.input_alphabet.len(),
        });
    }
    if parts.input_alphabet.at(parts.blank) {
        return Err(ConstructionError::BlankInInputAlphabet);
    }
    Ok(())
}

fn check_tm_states(parts: &TmParts) -> Result<(), ConstructionError> {
    if parts.num_states == 0 {
        return Err(ConstructionError::NoStates);
    }
    check_tm_initial_state(parts)
}

fn check_tm_initial_state(parts: &TmParts) -> Result<(), ConstructionError> {
    if parts.initial_state >= parts.num_states {
        return Err(ConstructionError::InitialStateOutOfRange {
            state: parts.initial_state,
            count: parts.num_states,
        });
    }
    Ok(())
}

fn check_tm_shape(parts: &TmParts) -> Result<(), ConstructionError> {
    check_shape(parts.transitions, parts.num_states, 3 * parts.tape_alphabet_size)
}

fn check_tm_cells(parts: &TmParts) -> Result<(), ConstructionError> {
    let states = parts.num_states as i64;
    let size = parts.tape_alphabet_size as i64;

    for state in 0..parts.num_states {
        for letter in 0..parts.tape_alphabet_size {
            let next = parts.transitions.at(state, 3 * letter);
            let write = parts.transitions.at(state, 3 * letter + 1);
            let direction = parts.transitions.at(state, 3 * letter + 2);

            if !(ACCEPT_CODE as i64..states).contains(&(next as i64)) {
                return Err(ConstructionError::NextStateOutOfRange {
                    state,
                    letter,
                    value: next,
                    count: parts.num_states,
                });
            }
            if !(0..size).contains(&(write as i64)) {
                return Err(ConstructionError::WriteOutOfRange {
                    state,
                    letter,
                    value: write,
                    size: parts.tape_alphabet_size,
                });
            }
            if Direction::from_code(direction).is_none() {
                return Err(ConstructionError::DirectionOutOfRange {
                    state,
                    letter,
                    value: direction,
                });
            }
        }
    }
    Ok(())
}

fn check_shape<T: Copy>(
    matrix: &FrozenMatrix<T>,
    rows: usize,
    cols: usize,
) -> Result<(), ConstructionError> {
    if matrix.rows() != rows || matrix.cols() != cols {
        return Err(ConstructionError::TableShape {
            expected_rows: rows,
            expected_cols: cols,
            found_rows: matrix.rows(),
            found_cols: matrix.cols(),
        });
    }
    Ok(())
}
