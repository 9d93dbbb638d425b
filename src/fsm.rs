//! Deterministic finite state machines.
//!
//! A finite state machine is a quintuple (Σ, S, s0, δ, F): an alphabet, a set of states,
//! an initial state, a total transition function `S x Σ -> S` and a set of final states.
//! [`FsmDefinition`] holds that quintuple, validated and immutable; [`FsmExecution`] is a
//! running copy that only stores its current state.

use std::borrow::Borrow;
use std::fmt::Debug;
use std::hash::Hash;

use log::debug;

use crate::frozen::{FrozenMatrix, FrozenVector};
use crate::registry::{Ids, IntoRegistry, Registry, Role, Symbol};
use crate::types::MachineError;
use crate::validation::{validate_fsm, FsmParts};

/// The id-level machine. Everything typed is layered on top of it.
#[derive(Debug, Clone)]
struct FsmCore {
    alphabet_size: usize,
    num_states: usize,
    initial_state: usize,
    transitions: FrozenMatrix<usize>,
    final_states: FrozenVector<bool>,
}

impl FsmCore {
    fn step(&self, state: usize, letter: usize) -> usize {
        self.transitions.at(state, letter)
    }

    fn is_final(&self, state: usize) -> bool {
        self.final_states.at(state)
    }
}

/// A validated, immutable finite state machine over letters `A` and states `S`.
#[derive(Debug, Clone)]
pub struct FsmDefinition<A, S> {
    core: FsmCore,
    alphabet: Registry<A>,
    states: Registry<S>,
}

impl<A: Symbol, S: Symbol> FsmDefinition<A, S> {
    /// Creates a finite state machine definition.
    ///
    /// # Arguments
    ///
    /// * `alphabet` - The distinct letters, or [`Ids`] to use letter ids directly.
    /// * `states` - The distinct states, or [`Ids`] to use state ids directly.
    /// * `initial_state_id` - The id of the initial state.
    /// * `transitions` - A `states x letters` table; entry `[s][a]` is the state reached from
    ///   state `s` when reading letter `a`.
    /// * `final_states` - One flag per state.
    ///
    /// With [`Ids`], the number of letters (or states) is the number of columns (or rows)
    /// of `transitions`.
    pub fn new(
        alphabet: impl IntoRegistry<A>,
        states: impl IntoRegistry<S>,
        initial_state_id: usize,
        transitions: impl Into<FrozenMatrix<usize>>,
        final_states: impl Into<FrozenVector<bool>>,
    ) -> Result<Self, MachineError> {
        let transitions = transitions.into();
        let final_states = final_states.into();
        let alphabet = alphabet.into_registry(transitions.cols(), Role::Letter)?;
        let states = states.into_registry(transitions.rows(), Role::State)?;

        validate_fsm(&FsmParts {
            alphabet_size: alphabet.len(),
            num_states: states.len(),
            initial_state: initial_state_id,
            transitions: &transitions,
            final_states: &final_states,
        })?;

        debug!(
            "Built finite state machine with {} letters and {} states",
            alphabet.len(),
            states.len()
        );

        Ok(Self {
            core: FsmCore {
                alphabet_size: alphabet.len(),
                num_states: states.len(),
                initial_state: initial_state_id,
                transitions,
                final_states,
            },
            alphabet,
            states,
        })
    }

    pub fn alphabet_size(&self) -> usize {
        self.core.alphabet_size
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

    pub fn alphabet(&self) -> &Registry<A> {
        &self.alphabet
    }

    pub fn states(&self) -> &Registry<S> {
        &self.states
    }

    /// The transition table; cloning it shares storage with this definition.
    pub fn transitions(&self) -> &FrozenMatrix<usize> {
        &self.core.transitions
    }

    pub fn final_states(&self) -> &FrozenVector<bool> {
        &self.core.final_states
    }

    pub fn letter_of_id(&self, letter_id: usize) -> Option<&A> {
        self.alphabet.value_of(letter_id)
    }

    pub fn id_of_letter<Q>(&self, letter: &Q) -> Result<usize, MachineError>
    where
        A: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        self.alphabet.id_of(letter)
    }

    pub fn state_of_id(&self, state_id: usize) -> Option<&S> {
        self.states.value_of(state_id)
    }

    pub fn id_of_state<Q>(&self, state: &Q) -> Result<usize, MachineError>
    where
        S: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        self.states.id_of(state)
    }

    /// The state reached from `state_id` when reading `letter_id`.
    pub fn transition_by_id(&self, state_id: usize, letter_id: usize) -> Result<usize, MachineError> {
        self.core.transitions.get(state_id, letter_id)
    }

    /// Same as [`transition_by_id`](Self::transition_by_id), with typed values.
    pub fn transition(&self, state: &S, letter: &A) -> Result<&S, MachineError> {
        let state_id = self.states.id_of(state)?;
        let letter_id = self.alphabet.id_of(letter)?;
        Ok(&self.states.as_slice()[self.core.step(state_id, letter_id)])
    }

    pub fn is_final_by_id(&self, state_id: usize) -> Result<bool, MachineError> {
        self.core.final_states.get(state_id)
    }

    pub fn is_final(&self, state: &S) -> Result<bool, MachineError> {
        Ok(self.core.is_final(self.states.id_of(state)?))
    }

    /// Creates an execution of this definition, starting at the initial state.
    pub fn new_execution(&self) -> FsmExecution<'_, A, S> {
        FsmExecution {
            definition: self,
            state: self.core.initial_state,
        }
    }

    /// Runs a fresh execution over `word` and returns the id of the reached state.
    pub fn read_and_return_state_id<I>(&self, word: I) -> Result<usize, MachineError>
    where
        I: IntoIterator,
        I::Item: Borrow<A>,
    {
        let mut execution = self.new_execution();
        execution.read_word(word)?;
        Ok(execution.state_id())
    }

    pub fn read_and_return_state<I>(&self, word: I) -> Result<&S, MachineError>
    where
        I: IntoIterator,
        I::Item: Borrow<A>,
    {
        let state_id = self.read_and_return_state_id(word)?;
        Ok(&self.states.as_slice()[state_id])
    }

    pub fn read_by_id_and_return_state_id<I>(&self, word: I) -> Result<usize, MachineError>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut execution = self.new_execution();
        execution.read_word_by_id(word)?;
        Ok(execution.state_id())
    }

    pub fn read_by_id_and_return_state<I>(&self, word: I) -> Result<&S, MachineError>
    where
        I: IntoIterator<Item = usize>,
    {
        let state_id = self.read_by_id_and_return_state_id(word)?;
        Ok(&self.states.as_slice()[state_id])
    }

    /// Tells whether the machine ends in a final state after reading `word` from the
    /// initial state.
    pub fn accepts<I>(&self, word: I) -> Result<bool, MachineError>
    where
        I: IntoIterator,
        I::Item: Borrow<A>,
    {
        Ok(self.core.is_final(self.read_and_return_state_id(word)?))
    }

    pub fn accepts_by_id<I>(&self, word: I) -> Result<bool, MachineError>
    where
        I: IntoIterator<Item = usize>,
    {
        Ok(self.core.is_final(self.read_by_id_and_return_state_id(word)?))
    }
}

impl FsmDefinition<usize, usize> {
    /// Creates a definition that identifies letters and states by their ids only.
    pub fn by_id(
        initial_state_id: usize,
        transitions: impl Into<FrozenMatrix<usize>>,
        final_states: impl Into<FrozenVector<bool>>,
    ) -> Result<Self, MachineError> {
        Self::new(Ids, Ids, initial_state_id, transitions, final_states)
    }
}

/// A running finite state machine.
///
/// It borrows its definition and owns only the current state id, so any number of
/// executions can run over the same definition.
#[derive(Debug)]
pub struct FsmExecution<'d, A, S> {
    definition: &'d FsmDefinition<A, S>,
    state: usize,
}

impl<A, S> Clone for FsmExecution<'_, A, S> {
    fn clone(&self) -> Self {
        Self {
            definition: self.definition,
            state: self.state,
        }
    }
}

impl<'d, A: Symbol, S: Symbol> FsmExecution<'d, A, S> {
    pub fn definition(&self) -> &'d FsmDefinition<A, S> {
        self.definition
    }

    pub fn state_id(&self) -> usize {
        self.state
    }

    pub fn state(&self) -> &'d S {
        &self.definition.states.as_slice()[self.state]
    }

    /// Overwrites the current state.
    pub fn set_state_id(&mut self, state_id: usize) -> Result<(), MachineError> {
        if state_id >= self.definition.core.num_states {
            return Err(MachineError::OutOfRange {
                index: state_id,
                len: self.definition.core.num_states,
            });
        }
        self.state = state_id;
        Ok(())
    }

    pub fn set_state(&mut self, state: &S) -> Result<(), MachineError> {
        self.state = self.definition.states.id_of(state)?;
        Ok(())
    }

    /// Reads one letter and moves to the next state.
    pub fn read(&mut self, letter: &A) -> Result<(), MachineError> {
        let letter_id = self.letter_id(letter)?;
        self.state = self.definition.core.step(self.state, letter_id);
        Ok(())
    }

    /// Reads every letter of `word` in order.
    ///
    /// The whole word is resolved before the state changes, so an unknown letter leaves
    /// the execution where it was.
    pub fn read_word<I>(&mut self, word: I) -> Result<(), MachineError>
    where
        I: IntoIterator,
        I::Item: Borrow<A>,
    {
        let ids = word
            .into_iter()
            .map(|letter| self.letter_id(letter.borrow()))
            .collect::<Result<Vec<_>, _>>()?;
        self.advance(&ids);
        Ok(())
    }

    pub fn read_by_id(&mut self, letter_id: usize) -> Result<(), MachineError> {
        self.check_letter_id(letter_id)?;
        self.state = self.definition.core.step(self.state, letter_id);
        Ok(())
    }

    pub fn read_word_by_id<I>(&mut self, word: I) -> Result<(), MachineError>
    where
        I: IntoIterator<Item = usize>,
    {
        let ids = word
            .into_iter()
            .map(|letter_id| self.check_letter_id(letter_id).map(|_| letter_id))
            .collect::<Result<Vec<_>, _>>()?;
        self.advance(&ids);
        Ok(())
    }

    pub fn is_in_final_state(&self) -> bool {
        self.definition.core.is_final(self.state)
    }

    fn advance(&mut self, letter_ids: &[usize]) {
        let core = &self.definition.core;
        self.state = letter_ids
            .iter()
            .fold(self.state, |state, &letter| core.step(state, letter));
    }

    fn letter_id(&self, letter: &A) -> Result<usize, MachineError> {
        self.definition
            .alphabet
            .id_of(letter)
            .map_err(|_| MachineError::InvalidLetter(format!("{:?}", letter)))
    }

    fn check_letter_id(&self, letter_id: usize) -> Result<(), MachineError> {
        if letter_id >= self.definition.core.alphabet_size {
            return Err(MachineError::InvalidLetter(letter_id.to_string()));
        }
        Ok(())
    }
}
