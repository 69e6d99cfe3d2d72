//! Tests for the `MonadState` capability.

use effect_caps::effect::{MonadState, State, StateBrand, StateCombinators};
use effect_caps::typeclass::{Applicative, Functor, Monad};
use rstest::rstest;

// =============================================================================
// Generic programs
// =============================================================================

/// Pushes a value, returning the new depth.
fn push<M: StateCombinators<Vec<i32>>>(value: i32) -> M::WithType<usize> {
    M::then(
        M::modify(move |mut stack: Vec<i32>| {
            stack.push(value);
            stack
        }),
        M::gets(|stack: Vec<i32>| stack.len()),
    )
}

fn pop<M: StateCombinators<Vec<i32>>>() -> M::WithType<Option<i32>> {
    M::state(|mut stack: Vec<i32>| {
        let top = stack.pop();
        (top, stack)
    })
}

type Stack = StateBrand<Vec<i32>>;

#[rstest]
fn stack_program_threads_state() {
    let program = Stack::flat_map(push::<Stack>(1), |_| {
        Stack::flat_map(push::<Stack>(2), |depth| {
            Stack::fmap(pop::<Stack>(), move |top| (depth, top))
        })
    });
    assert_eq!(program.run(Vec::new()), ((2, Some(2)), vec![1]));
}

#[rstest]
fn pop_on_empty_keeps_empty_state() {
    assert_eq!(pop::<Stack>().run(Vec::new()), (None, Vec::new()));
}

// =============================================================================
// Primitives and combinators
// =============================================================================

type Counter = StateBrand<i32>;

#[rstest]
#[case(0, 5)]
#[case(-2, 5)]
fn put_then_get_yields_written_state(#[case] initial: i32, #[case] written: i32) {
    let program = Counter::flat_map(Counter::put(written), |()| Counter::get());
    assert_eq!(program.run(initial), (written, written));
}

#[rstest]
fn gets_reads_without_writing() {
    assert_eq!(Counter::gets(|count| count > 0).run(3), (true, 3));
}

#[rstest]
fn modify_equals_get_then_put() {
    let derived: State<i32, ()> = Counter::modify(|count| count * 2);
    let manual: State<i32, ()> = Counter::flat_map(Counter::get(), |count| Counter::put(count * 2));
    assert_eq!(derived.run(21), manual.run(21));
}

#[rstest]
fn modify_composes_in_sequence() {
    let sequenced = Counter::then(Counter::modify(|count| count + 1), Counter::modify(|count| count * 10));
    assert_eq!(sequenced.exec(1), 20);
}

#[rstest]
fn modify_get_returns_updated_state() {
    assert_eq!(Counter::modify_get(|count| count - 1).eval(1), 0);
}

#[rstest]
fn pure_leaves_state_alone() {
    assert_eq!(Counter::pure("value").run(9), ("value", 9));
}
