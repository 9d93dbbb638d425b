//! Property-based tests for the finite state machine and Turing Machine engines.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated machines and words.

use automa::catalog::{a_star_b_star, busy_beaver_3, odd_binary_number};
use automa::{FrozenMatrix, FrozenVector, FsmDefinition, Halt, Step};
use proptest::collection::vec;
use proptest::prelude::*;

/// A random total transition table with its final-state flags.
#[derive(Debug, Clone)]
struct RandomFsm {
    alphabet_size: usize,
    transitions: Vec<Vec<usize>>,
    final_states: Vec<bool>,
}

impl RandomFsm {
    fn build(&self) -> FsmDefinition<usize, usize> {
        FsmDefinition::by_id(
            0,
            FrozenMatrix::from_rows(&self.transitions).unwrap(),
            self.final_states.as_slice(),
        )
        .unwrap()
    }
}

prop_compose! {
    fn arbitrary_fsm()(num_states in 1..6usize, alphabet_size in 1..4usize)
        (transitions in vec(vec(0..num_states, alphabet_size), num_states),
         final_states in vec(any::<bool>(), num_states),
         alphabet_size in Just(alphabet_size))
        -> RandomFsm {
        RandomFsm { alphabet_size, transitions, final_states }
    }
}

prop_compose! {
    fn fsm_and_word()(fsm in arbitrary_fsm())
        (word in vec(0..fsm.alphabet_size, 0..24), fsm in Just(fsm))
        -> (RandomFsm, Vec<usize>) {
        (fsm, word)
    }
}

proptest! {
    #[test]
    fn compiled_machine_agrees_with_fsm((random, word) in fsm_and_word()) {
        let fsm = random.build();
        let tm = fsm.to_turing_machine_by_id().unwrap();

        prop_assert_eq!(
            fsm.accepts_by_id(word.iter().copied()).unwrap(),
            tm.accepts_by_id(word.iter().copied()).unwrap()
        );
    }

    #[test]
    fn compiled_machine_halts_after_reading_the_word((random, word) in fsm_and_word()) {
        let fsm = random.build();
        let tm = fsm.to_turing_machine_by_id().unwrap();
        let mut execution = tm.new_execution_by_id(word.iter().copied()).unwrap();

        prop_assert_eq!(execution.do_many_steps(word.len()), Step::Continue);
        prop_assert!(matches!(execution.do_one_step(), Step::Halt(_)));
        prop_assert_eq!(execution.step_count(), word.len() + 1);
    }

    #[test]
    fn read_is_a_table_lookup((random, word) in fsm_and_word()) {
        let fsm = random.build();
        let mut execution = fsm.new_execution();

        for letter in word {
            let expected = random.transitions[execution.state_id()][letter];
            execution.read_by_id(letter).unwrap();
            prop_assert_eq!(execution.state_id(), expected);
        }
        prop_assert_eq!(
            execution.is_in_final_state(),
            random.final_states[execution.state_id()]
        );
    }

    #[test]
    fn typed_compilation_agrees_with_fsm(word in "[01]{0,20}") {
        let fsm = odd_binary_number().unwrap();
        let tm = fsm.to_turing_machine().unwrap();

        prop_assert_eq!(
            fsm.accepts(word.chars()).unwrap(),
            tm.accepts(word.chars().map(Some)).unwrap()
        );
        prop_assert_eq!(fsm.accepts(word.chars()).unwrap(), word.ends_with('1'));
    }

    #[test]
    fn cloned_executions_are_independent(
        prefix in "[ab]{0,8}",
        left in "[ab]{0,8}",
        right in "[ab]{0,8}",
    ) {
        let fsm = a_star_b_star().unwrap();
        let mut original = fsm.new_execution();
        original.read_word(prefix.chars()).unwrap();
        let before = original.state_id();

        let mut first = original.clone();
        let mut second = original.clone();
        first.read_word(left.chars()).unwrap();
        second.read_word(right.chars()).unwrap();

        prop_assert_eq!(original.state_id(), before);
        prop_assert_eq!(
            first.is_in_final_state(),
            fsm.accepts(format!("{prefix}{left}").chars()).unwrap()
        );
        prop_assert_eq!(
            second.is_in_final_state(),
            fsm.accepts(format!("{prefix}{right}").chars()).unwrap()
        );
    }

    #[test]
    fn frozen_tables_ignore_source_mutation(
        (random, word) in fsm_and_word(),
        flip in any::<prop::sample::Index>(),
    ) {
        let mut final_states = random.final_states.clone();
        let fsm = FsmDefinition::by_id(
            0,
            FrozenMatrix::from_rows(&random.transitions).unwrap(),
            FrozenVector::new(&final_states),
        )
        .unwrap();
        let before = fsm.accepts_by_id(word.iter().copied()).unwrap();

        let index = flip.index(final_states.len());
        final_states[index] = !final_states[index];

        prop_assert_eq!(fsm.accepts_by_id(word.iter().copied()).unwrap(), before);
    }

    #[test]
    fn halted_machines_ignore_further_steps(extra in 0..1000usize) {
        let tm = busy_beaver_3().unwrap();
        let mut execution = tm.new_blank_execution();
        execution.run_to_halt();
        let snapshot = execution.full_state_as_string();

        prop_assert_eq!(execution.do_many_steps(extra), Step::Halt(Halt::Accept));
        prop_assert_eq!(execution.step_count(), 13);
        prop_assert_eq!(execution.full_state_as_string(), snapshot);
    }
}
