//! Compiles a finite state machine into an equivalent Turing Machine.
//!
//! The Turing Machine has the states of the finite state machine and one extra blank
//! letter. It walks right over the input without changing it, applying the finite state
//! machine's transitions, and halts on the first blank: accept in a final state, reject
//! otherwise.

use log::debug;

use crate::frozen::FrozenMatrix;
use crate::fsm::FsmDefinition;
use crate::machine::TuringMachineDefinition;
use crate::registry::Symbol;
use crate::types::{MachineError, ACCEPT_CODE, REJECT_CODE, RIGHT_CODE};

impl<A: Symbol, S: Symbol> FsmDefinition<A, S> {
    /// Builds the id-only Turing Machine that decides the same language.
    ///
    /// Letter ids are kept; the blank gets id `alphabet_size`.
    pub fn to_turing_machine_by_id(
        &self,
    ) -> Result<TuringMachineDefinition<usize, usize>, MachineError> {
        TuringMachineDefinition::by_id(
            self.alphabet_size(),
            None,
            self.initial_state_id(),
            self.scanner_table()?,
        )
    }

    /// Builds the same machine as [`to_turing_machine_by_id`](Self::to_turing_machine_by_id)
    /// with typed letters and states: each letter `a` becomes `Some(a)` and the blank is
    /// `None`.
    pub fn to_turing_machine(&self) -> Result<TuringMachineDefinition<Option<A>, S>, MachineError> {
        let tape_alphabet = self
            .alphabet()
            .iter()
            .cloned()
            .map(Some)
            .chain(std::iter::once(None));

        TuringMachineDefinition::new(
            tape_alphabet,
            self.alphabet_size(),
            None,
            self.states().iter().cloned(),
            self.initial_state_id(),
            self.scanner_table()?,
        )
    }

    fn scanner_table(&self) -> Result<FrozenMatrix<i32>, MachineError> {
        let blank = self.alphabet_size();
        let cols = 3 * (blank + 1);
        let mut table = Vec::with_capacity(self.num_states() * cols);

        for state in 0..self.num_states() {
            for letter in 0..blank {
                table.push(self.transition_by_id(state, letter)? as i32);
                table.push(letter as i32);
                table.push(RIGHT_CODE);
            }
            let halt = if self.is_final_by_id(state)? {
                ACCEPT_CODE
            } else {
                REJECT_CODE
            };
            table.extend([halt, blank as i32, RIGHT_CODE]);
        }

        debug!(
            "Compiled finite state machine with {} states into a Turing Machine",
            self.num_states()
        );

        Ok(FrozenMatrix::from_flat(self.num_states(), cols, table)?)
    }
}
