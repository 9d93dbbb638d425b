//! This module defines Turing Machine definitions and their executions.
//!
//! A Turing Machine is a tuple M = (Γ, b, Σ, Q, q0, δ): a tape alphabet, a blank letter, an
//! input alphabet `Σ ⊆ Γ \ {b}`, a set of states, an initial state and a transition function
//! `Q x Γ -> (Q ∪ {reject, accept}) x Γ x {left, stay, right}`.
//!
//! The transition table has one row per state and three columns per letter: for letter `l`,
//! column `3l` holds the next state (`-1` rejects, `-2` accepts), column `3l + 1` the letter
//! to write and column `3l + 2` the direction (`-1`, `0` or `1`).

use std::borrow::Borrow;
use std::collections::VecDeque;
use std::fmt;
use std::hash::Hash;

use log::{debug, trace};

use crate::frozen::{FrozenMatrix, FrozenVector};
use crate::registry::{Ids, IntoRegistry, Registry, Role, Symbol};
use crate::types::{Action, Direction, Halt, MachineError, Status, Step};
use crate::validation::{default_input_alphabet, validate_tm, TmParts};

/// The id-level machine.
#[derive(Debug, Clone)]
struct TmCore {
    tape_alphabet_size: usize,
    blank: usize,
    input_alphabet: FrozenVector<bool>,
    num_states: usize,
    initial_state: usize,
    transitions: FrozenMatrix<i32>,
}

impl TmCore {
    /// Decodes the action for a validated (`state`, `letter`) pair.
    fn action(&self, state: usize, letter: usize) -> Action {
        let next = self.transitions.at(state, 3 * letter);
        let write = self.transitions.at(state, 3 * letter + 1);
        let direction = self.transitions.at(state, 3 * letter + 2);

        let direction = match Direction::from_code(direction) {
            Some(direction) => direction,
            None => unreachable!("direction {direction} passed validation"),
        };

        Action {
            next: Status::from_code(next),
            write: write as usize,
            direction,
        }
    }
}

/// A validated, immutable Turing Machine over tape letters `A` and states `S`.
#[derive(Debug, Clone)]
pub struct TuringMachineDefinition<A, S> {
    core: TmCore,
    tape_alphabet: Registry<A>,
    states: Registry<S>,
}

impl<A: Symbol, S: Symbol> TuringMachineDefinition<A, S> {
    /// Creates a Turing Machine definition.
    ///
    /// # Arguments
    ///
    /// * `tape_alphabet` - The distinct tape letters, or [`Ids`]; at least one letter.
    /// * `blank_id` - The id of the blank letter.
    /// * `input_alphabet` - One flag per tape letter, the blank excluded. `None` means every
    ///   letter but the blank.
    /// * `states` - The distinct states, or [`Ids`]; at least one state.
    /// * `initial_state_id` - The id of the initial state.
    /// * `transitions` - A `states x (3 * letters)` table, see the module documentation.
    ///
    /// With [`Ids`], the number of letters is a third of the number of columns and the
    /// number of states is the number of rows of `transitions`.
    pub fn new(
        tape_alphabet: impl IntoRegistry<A>,
        blank_id: usize,
        input_alphabet: Option<FrozenVector<bool>>,
        states: impl IntoRegistry<S>,
        initial_state_id: usize,
        transitions: impl Into<FrozenMatrix<i32>>,
    ) -> Result<Self, MachineError> {
        let transitions = transitions.into();
        let tape_alphabet = tape_alphabet.into_registry(transitions.cols() / 3, Role::Letter)?;
        let states = states.into_registry(transitions.rows(), Role::State)?;
        let input_alphabet = input_alphabet
            .unwrap_or_else(|| default_input_alphabet(tape_alphabet.len(), blank_id));

        validate_tm(&TmParts {
            tape_alphabet_size: tape_alphabet.len(),
            blank: blank_id,
            input_alphabet: &input_alphabet,
            num_states: states.len(),
            initial_state: initial_state_id,
            transitions: &transitions,
        })?;

        debug!(
            "Built Turing Machine with {} tape letters and {} states",
            tape_alphabet.len(),
            states.len()
        );

        Ok(Self {
            core: TmCore {
                tape_alphabet_size: tape_alphabet.len(),
                blank: blank_id,
                input_alphabet,
                num_states: states.len(),
                initial_state: initial_state_id,
                transitions,
            },
            tape_alphabet,
            states,
        })
    }

    pub fn tape_alphabet_size(&self) -> usize {
        self.core.tape_alphabet_size
    }

    pub fn blank_id(&self) -> usize {
        self.core.blank
    }

    pub fn blank(&self) -> &A {
        &self.tape_alphabet.as_slice()[self.core.blank]
    }

    pub fn input_alphabet(&self) -> &FrozenVector<bool> {
        &self.core.input_alphabet
    }

    /// Tells whether `letter_id` may appear in an input word.
    pub fn is_input_by_id(&self, letter_id: usize) -> bool {
        self.core.input_alphabet.get(letter_id).unwrap_or(false)
    }

    pub fn is_input<Q>(&self, letter: &Q) -> Result<bool, MachineError>
    where
        A: Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        Ok(self.is_input_by_id(self.tape_alphabet.id_of(letter)?))
    }

    pub fn num_states(&self) -> usize {
        self.core.num_states
    }

    pub fn initial_state_id(&self) -> usize {
        self.core.initial_state
    }

    pub fn initial_state(&self) -> &S {
        &self.states.as_slice()[self.core.initial_state]
    }

    pub fn tape_alphabet(&self) -> &Registry<A> {
        &self.tape_alphabet
    }

    pub fn states(&self) -> &Registry<S> {
        &self.states
    }

    pub fn transitions(&self) -> &FrozenMatrix<i32> {
        &self.core.transitions
    }

    pub fn letter_of_id(&self, letter_id: usize) -> Option<&A> {
        self.tape_alphabet.value_of(letter_id)
    }

    pub fn id_of_letter<Q>(&self, letter: &Q) -> Result<usize, MachineError>
    where
        A: Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        self.tape_alphabet.id_of(letter)
    }

    pub fn state_of_id(&self, state_id: usize) -> Option<&S> {
        self.states.value_of(state_id)
    }

    pub fn id_of_state<Q>(&self, state: &Q) -> Result<usize, MachineError>
    where
        S: Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        self.states.id_of(state)
    }

    /// Returns the raw transition-table cell at (`state_id`, `column`).
    pub fn transition_cell(&self, state_id: usize, column: usize) -> Result<i32, MachineError> {
        self.core.transitions.get(state_id, column)
    }

    /// Returns the decoded action for `state_id` reading `letter_id`.
    pub fn action(&self, state_id: usize, letter_id: usize) -> Result<Action, MachineError> {
        if state_id >= self.core.num_states {
            return Err(MachineError::OutOfRange {
                index: state_id,
                len: self.core.num_states,
            });
        }
        if letter_id >= self.core.tape_alphabet_size {
            return Err(MachineError::OutOfRange {
                index: letter_id,
                len: self.core.tape_alphabet_size,
            });
        }
        Ok(self.core.action(state_id, letter_id))
    }

    /// Creates an execution whose tape holds `word`, given as letter ids.
    ///
    /// Every letter must belong to the input alphabet. An empty word yields a tape with a
    /// single blank cell.
    pub fn new_execution_by_id<I>(
        &self,
        word: I,
    ) -> Result<TuringMachineExecution<'_, A, S>, MachineError>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut tape = VecDeque::new();
        for letter_id in word {
            if !self.is_input_by_id(letter_id) {
                return Err(MachineError::SymbolNotInInputAlphabet(letter_id));
            }
            tape.push_back(letter_id);
        }
        Ok(TuringMachineExecution::new(self, tape))
    }

    /// Creates an execution whose tape holds `word`.
    pub fn new_execution<I>(
        &self,
        word: I,
    ) -> Result<TuringMachineExecution<'_, A, S>, MachineError>
    where
        I: IntoIterator,
        I::Item: Borrow<A>,
    {
        let ids = word
            .into_iter()
            .map(|letter| self.tape_alphabet.id_of(letter.borrow()))
            .collect::<Result<Vec<_>, _>>()?;
        self.new_execution_by_id(ids)
    }

    /// Creates an execution on a blank tape.
    pub fn new_blank_execution(&self) -> TuringMachineExecution<'_, A, S> {
        TuringMachineExecution::new(self, VecDeque::new())
    }

    /// Runs the machine on `word` until it halts and tells whether it accepted.
    ///
    /// This does not return if the machine never halts on `word`.
    pub fn accepts<I>(&self, word: I) -> Result<bool, MachineError>
    where
        I: IntoIterator,
        I::Item: Borrow<A>,
    {
        Ok(self.new_execution(word)?.run_to_halt().is_accept())
    }

    pub fn accepts_by_id<I>(&self, word: I) -> Result<bool, MachineError>
    where
        I: IntoIterator<Item = usize>,
    {
        Ok(self.new_execution_by_id(word)?.run_to_halt().is_accept())
    }
}

impl TuringMachineDefinition<usize, usize> {
    /// Creates a definition that identifies letters and states by their ids only.
    pub fn by_id(
        blank_id: usize,
        input_alphabet: Option<FrozenVector<bool>>,
        initial_state_id: usize,
        transitions: impl Into<FrozenMatrix<i32>>,
    ) -> Result<Self, MachineError> {
        Self::new(Ids, blank_id, input_alphabet, Ids, initial_state_id, transitions)
    }
}

/// A running Turing Machine.
///
/// The tape only materializes the cells the machine has visited; every other cell is
/// blank. Blank cells at either end are dropped when the head walks away from them.
#[derive(Debug)]
pub struct TuringMachineExecution<'d, A, S> {
    definition: &'d TuringMachineDefinition<A, S>,
    tape: VecDeque<usize>,
    cursor: usize,
    status: Status,
    step_count: usize,
}

impl<A, S> Clone for TuringMachineExecution<'_, A, S> {
    fn clone(&self) -> Self {
        Self {
            definition: self.definition,
            tape: self.tape.clone(),
            cursor: self.cursor,
            status: self.status,
            step_count: self.step_count,
        }
    }
}

impl<'d, A: Symbol, S: Symbol> TuringMachineExecution<'d, A, S> {
    fn new(definition: &'d TuringMachineDefinition<A, S>, mut tape: VecDeque<usize>) -> Self {
        if tape.is_empty() {
            tape.push_back(definition.core.blank);
        }

        Self {
            definition,
            tape,
            cursor: 0,
            status: Status::Running(definition.core.initial_state),
            step_count: 0,
        }
    }

    pub fn definition(&self) -> &'d TuringMachineDefinition<A, S> {
        self.definition
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_halted(&self) -> bool {
        self.status.is_halted()
    }

    /// The halt signal, once the machine has halted.
    pub fn halt(&self) -> Option<Halt> {
        match self.status {
            Status::Halted(halt) => Some(halt),
            Status::Running(_) => None,
        }
    }

    /// The current state id, while the machine is running.
    pub fn state_id(&self) -> Option<usize> {
        match self.status {
            Status::Running(state) => Some(state),
            Status::Halted(_) => None,
        }
    }

    pub fn state(&self) -> Option<&'d S> {
        self.state_id()
            .map(|state| &self.definition.states.as_slice()[state])
    }

    /// Returns the number of steps executed so far.
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// The position of the head within [`tape_ids`](Self::tape_ids).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The materialized tape cells, as letter ids.
    pub fn tape_ids(&self) -> impl Iterator<Item = usize> + '_ {
        self.tape.iter().copied()
    }

    /// The materialized tape cells, as letters.
    pub fn tape(&self) -> Vec<&'d A> {
        let letters = self.definition.tape_alphabet.as_slice();
        self.tape.iter().map(|&letter| &letters[letter]).collect()
    }

    pub fn symbol_id_under_cursor(&self) -> usize {
        self.tape[self.cursor]
    }

    pub fn symbol_under_cursor(&self) -> &'d A {
        &self.definition.tape_alphabet.as_slice()[self.tape[self.cursor]]
    }

    /// Executes a single step of the machine.
    ///
    /// Reads the letter under the head, writes the letter the table prescribes, switches
    /// state and moves the head. Does nothing once the machine has halted.
    ///
    /// # Returns
    ///
    /// * `Step::Continue` if the machine is still running after the step.
    /// * `Step::Halt(_)` if the machine has halted.
    pub fn do_one_step(&mut self) -> Step {
        let state = match self.status {
            Status::Running(state) => state,
            Status::Halted(halt) => return Step::Halt(halt),
        };

        let blank = self.definition.core.blank;
        let letter = self.tape[self.cursor];
        let action = self.definition.core.action(state, letter);

        self.tape[self.cursor] = action.write;
        self.status = action.next;
        self.step_count += 1;

        match action.direction {
            Direction::Stay => {}
            Direction::Right => {
                // A blank left end can never be told apart from unmaterialized tape.
                if self.cursor == 0 && action.write == blank {
                    self.tape.pop_front();
                } else {
                    self.cursor += 1;
                }
                if self.cursor == self.tape.len() {
                    self.tape.push_back(blank);
                }
            }
            Direction::Left => {
                if self.cursor + 1 == self.tape.len() && action.write == blank {
                    self.tape.pop_back();
                }
                if self.cursor == 0 {
                    self.tape.push_front(blank);
                } else {
                    self.cursor -= 1;
                }
            }
        }

        trace!("step {}: {}", self.step_count, self.full_state_as_string());

        match self.status {
            Status::Running(_) => Step::Continue,
            Status::Halted(halt) => {
                debug!("Turing Machine halted after {} steps: {:?}", self.step_count, halt);
                Step::Halt(halt)
            }
        }
    }

    /// Executes up to `n` steps, stopping early if the machine halts.
    pub fn do_many_steps(&mut self, n: usize) -> Step {
        for _ in 0..n {
            if let Step::Halt(halt) = self.do_one_step() {
                return Step::Halt(halt);
            }
        }

        match self.status {
            Status::Running(_) => Step::Continue,
            Status::Halted(halt) => Step::Halt(halt),
        }
    }

    /// Runs the machine until it halts.
    ///
    /// Some Turing Machines never halt; this call does not return for them. Use
    /// [`do_many_steps`](Self::do_many_steps) for a bounded run.
    pub fn run_to_halt(&mut self) -> Halt {
        loop {
            if let Step::Halt(halt) = self.do_one_step() {
                return halt;
            }
        }
    }

    /// The tape as space-separated letter ids.
    pub fn tape_as_string(&self) -> String {
        self.render(false)
    }

    /// The tape as space-separated letter ids, with `[state]>` in front of the cell under
    /// the head. Halted machines show `-1` (reject) or `-2` (accept) as their state.
    pub fn full_state_as_string(&self) -> String {
        self.render(true)
    }

    fn render(&self, with_head: bool) -> String {
        self.tape
            .iter()
            .enumerate()
            .map(|(position, letter)| {
                if with_head && position == self.cursor {
                    format!("[{}]>{}", self.status.code(), letter)
                } else {
                    letter.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<A: Symbol, S: Symbol> fmt::Display for TuringMachineExecution<'_, A, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_state_as_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ConstructionError;

    fn busy_beaver() -> TuringMachineDefinition<usize, usize> {
        TuringMachineDefinition::by_id(
            0,
            Some(FrozenVector::from([false, true])),
            0,
            [
                [1, 1, 1, 2, 1, -1],
                [0, 1, -1, 1, 1, 1],
                [1, 1, -1, -2, 1, 0],
            ],
        )
        .unwrap()
    }

    /// Erases every `1` from left to right, then accepts on the first blank.
    fn eraser() -> TuringMachineDefinition<char, &'static str> {
        TuringMachineDefinition::new(
            "_1".chars(),
            0,
            None,
            ["erase"],
            0,
            [[-2, 0, 0, 0, 0, 1]],
        )
        .unwrap()
    }

    #[test]
    fn test_machine_creation() {
        let machine = busy_beaver();
        let execution = machine.new_blank_execution();

        assert_eq!(execution.status(), Status::Running(0));
        assert_eq!(execution.tape_ids().collect::<Vec<_>>(), vec![0]);
        assert_eq!(execution.cursor(), 0);
        assert_eq!(execution.step_count(), 0);
    }

    #[test]
    fn test_busy_beaver_halts_after_13_steps() {
        let machine = busy_beaver();
        let mut execution = machine.new_blank_execution();

        let mut steps = 0;
        while !execution.is_halted() {
            execution.do_one_step();
            steps += 1;
        }

        assert_eq!(steps, 13);
        assert_eq!(execution.step_count(), 13);
        assert_eq!(execution.halt(), Some(Halt::Accept));
        assert_eq!(execution.tape_as_string(), "1 1 1 1 1 1");
        assert_eq!(execution.full_state_as_string(), "1 1 1 [-2]>1 1 1");
    }

    #[test]
    fn test_single_steps() {
        let machine = busy_beaver();
        let mut execution = machine.new_blank_execution();

        assert_eq!(execution.do_one_step(), Step::Continue);
        assert_eq!(execution.full_state_as_string(), "1 [1]>0");

        assert_eq!(execution.do_one_step(), Step::Continue);
        assert_eq!(execution.full_state_as_string(), "[0]>1 1");

        // Moving left off the first cell materializes a blank.
        assert_eq!(execution.do_one_step(), Step::Continue);
        assert_eq!(execution.full_state_as_string(), "[2]>0 1 1");
    }

    #[test]
    fn test_blank_ends_are_trimmed() {
        let machine = eraser();
        let mut execution = machine.new_execution("11".chars()).unwrap();

        execution.do_one_step();
        assert_eq!(execution.tape(), vec![&'1']);
        assert_eq!(execution.cursor(), 0);

        execution.do_one_step();
        assert_eq!(execution.tape(), vec![&'_']);

        assert_eq!(execution.run_to_halt(), Halt::Accept);
        assert_eq!(execution.step_count(), 3);
        assert_eq!(execution.tape_as_string(), "0");
    }

    #[test]
    fn test_left_trim_at_right_end() {
        // Erases the last cell while walking left, then rejects on the blank.
        let machine = TuringMachineDefinition::by_id(
            0,
            None,
            0,
            [[-1, 0, 0, 0, 0, -1]],
        )
        .unwrap();
        let mut execution = machine.new_execution_by_id([1]).unwrap();

        execution.do_one_step();
        assert_eq!(execution.tape_ids().collect::<Vec<_>>(), vec![0]);
        assert_eq!(execution.cursor(), 0);
        assert_eq!(execution.run_to_halt(), Halt::Reject);
    }

    #[test]
    fn test_stay_direction() {
        let machine = TuringMachineDefinition::by_id(0, None, 0, [[-1, 0, 0, 0, 0, 0]]).unwrap();
        let mut execution = machine.new_execution_by_id([1, 1]).unwrap();

        assert_eq!(execution.do_one_step(), Step::Continue);
        assert_eq!(execution.cursor(), 0);
        assert_eq!(execution.tape_as_string(), "0 1");
        assert_eq!(execution.do_one_step(), Step::Halt(Halt::Reject));
    }

    #[test]
    fn test_do_many_steps() {
        let machine = busy_beaver();
        let mut execution = machine.new_blank_execution();

        assert_eq!(execution.do_many_steps(5), Step::Continue);
        assert_eq!(execution.step_count(), 5);

        assert_eq!(execution.do_many_steps(100), Step::Halt(Halt::Accept));
        assert_eq!(execution.step_count(), 13);

        let snapshot = execution.full_state_as_string();
        assert_eq!(execution.do_many_steps(10), Step::Halt(Halt::Accept));
        assert_eq!(execution.do_one_step(), Step::Halt(Halt::Accept));
        assert_eq!(execution.step_count(), 13);
        assert_eq!(execution.full_state_as_string(), snapshot);
    }

    #[test]
    fn test_cloned_executions_are_independent() {
        let machine = busy_beaver();
        let mut execution = machine.new_blank_execution();
        execution.do_many_steps(4);

        let mut copy = execution.clone();
        copy.run_to_halt();

        assert!(!execution.is_halted());
        assert_eq!(execution.step_count(), 4);
        assert_eq!(copy.step_count(), 13);
    }

    #[test]
    fn test_input_alphabet() {
        let machine = eraser();

        assert_eq!(machine.blank(), &'_');
        assert_eq!(machine.is_input(&'1'), Ok(true));
        assert_eq!(machine.is_input(&'_'), Ok(false));
        assert!(matches!(
            machine.new_execution("1_".chars()),
            Err(MachineError::SymbolNotInInputAlphabet(0))
        ));
        assert!(matches!(
            machine.new_execution("1x".chars()),
            Err(MachineError::UnknownSymbol(_))
        ));
        assert!(matches!(
            machine.new_execution_by_id([7]),
            Err(MachineError::SymbolNotInInputAlphabet(7))
        ));
    }

    #[test]
    fn test_accepts() {
        let machine = eraser();
        assert_eq!(machine.accepts("".chars()), Ok(true));
        assert_eq!(machine.accepts("111".chars()), Ok(true));
    }

    #[test]
    fn test_typed_state() {
        let machine = eraser();
        let mut execution = machine.new_execution("1".chars()).unwrap();

        assert_eq!(execution.state(), Some(&"erase"));
        assert_eq!(execution.symbol_under_cursor(), &'1');
        execution.run_to_halt();
        assert_eq!(execution.state(), None);
        assert_eq!(execution.state_id(), None);
    }

    #[test]
    fn test_action_lookup() {
        let machine = busy_beaver();

        assert_eq!(
            machine.action(0, 1),
            Ok(Action {
                next: Status::Running(2),
                write: 1,
                direction: Direction::Left,
            })
        );
        assert_eq!(
            machine.action(2, 1).map(|action| action.next),
            Ok(Status::Halted(Halt::Accept))
        );
        assert!(machine.action(3, 0).is_err());
        assert_eq!(machine.transition_cell(2, 3), Ok(-2));
    }

    #[test]
    fn test_construction_failures() {
        let empty: [[i32; 0]; 1] = [[]];
        assert_eq!(
            TuringMachineDefinition::by_id(0, None, 0, empty).unwrap_err(),
            MachineError::Construction(ConstructionError::EmptyTapeAlphabet)
        );

        assert_eq!(
            TuringMachineDefinition::by_id(2, None, 0, [[-1, 0, 0, -1, 0, 0]]).unwrap_err(),
            MachineError::Construction(ConstructionError::BlankOutOfRange { blank: 2, size: 2 })
        );

        let no_states: [[i32; 3]; 0] = [];
        assert_eq!(
            TuringMachineDefinition::<char, usize>::new("_".chars(), 0, None, Ids, 0, no_states)
                .unwrap_err(),
            MachineError::Construction(ConstructionError::NoStates)
        );

        assert_eq!(
            TuringMachineDefinition::by_id(
                0,
                Some(FrozenVector::from([false, true, true])),
                0,
                [[-1, 0, 0, -1, 0, 0]]
            )
            .unwrap_err(),
            MachineError::Construction(ConstructionError::InputAlphabetLength {
                expected: 2,
                found: 3
            })
        );

        assert!(matches!(
            TuringMachineDefinition::by_id(0, None, 1, [[-1, 0, 0, -1, 0, 0]]),
            Err(MachineError::Construction(
                ConstructionError::InitialStateOutOfRange { state: 1, count: 1 }
            ))
        ));

        assert!(matches!(
            TuringMachineDefinition::<char, usize>::new("_1".chars(), 0, None, Ids, 0, [[-1, 0, 0]]),
            Err(MachineError::Construction(ConstructionError::TableShape { .. }))
        ));
    }

    fn assert_sync<T: Sync>() {}

    #[test]
    fn test_definitions_are_shared_across_threads() {
        assert_sync::<TuringMachineDefinition<usize, usize>>();
        assert_sync::<TuringMachineDefinition<char, &'static str>>();

        let machine = &busy_beaver();
        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    scope.spawn(move || {
                        let mut execution = machine.new_blank_execution();
                        (execution.run_to_halt(), execution.step_count())
                    })
                })
                .collect();

            for handle in handles {
                assert_eq!(handle.join().unwrap(), (Halt::Accept, 13));
            }
        });
    }
}
