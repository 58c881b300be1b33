use std::cell::Cell;

use proptest::prelude::*;
use resolver_chain::{build, Chain, Outcome, Producer, ProducerFailure};

// What a stand-in producer does when called.
#[derive(Debug, Clone)]
enum Step {
    Empty,
    Value(String),
    Fail(String),
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        3 => Just(Step::Empty),
        1 => "[a-z]{1,8}".prop_map(Step::Value),
        1 => "[A-Z]{1,8}".prop_map(Step::Fail),
    ]
}

// Builds producers that record how many of them ran.
fn producers<'a>(steps: &[Step], calls: &'a Cell<usize>) -> Vec<Producer<'a>> {
    steps
        .iter()
        .cloned()
        .map(|step| {
            Box::new(move || {
                calls.set(calls.get() + 1);
                match &step {
                    Step::Empty => Ok(String::new()),
                    Step::Value(v) => Ok(v.clone()),
                    Step::Fail(m) => Err(ProducerFailure::new(m.clone())),
                }
            }) as Producer<'a>
        })
        .collect()
}

// Reference answer: (outcome, number of producers that should have run).
fn expected(steps: &[Step]) -> (Outcome, usize) {
    for (i, step) in steps.iter().enumerate() {
        match step {
            Step::Empty => continue,
            Step::Value(v) => return (Outcome::Resolved(v.clone()), i + 1),
            Step::Fail(m) => return (Outcome::Failed(ProducerFailure::new(m.clone())), i + 1),
        }
    }
    (Outcome::Exhausted, steps.len())
}

proptest! {
    #[test]
    fn resolve_matches_first_decisive_step(steps in prop::collection::vec(step(), 0..40)) {
        let calls = Cell::new(0);
        let chain = build(producers(&steps, &calls));

        let (outcome, ran) = expected(&steps);

        prop_assert_eq!(chain.resolve_outcome(), outcome);
        prop_assert_eq!(calls.get(), ran);
    }

    #[test]
    fn first_non_empty_value_wins(first in "[a-z]{1,8}", rest in prop::collection::vec(step(), 0..10)) {
        let calls = Cell::new(0);
        let mut steps = vec![Step::Value(first.clone())];
        steps.extend(rest);

        prop_assert_eq!(build(producers(&steps, &calls)).resolve(), Ok(first));
        prop_assert_eq!(calls.get(), 1);
    }

    #[test]
    fn failure_at_k_hides_everything_after(
        k in 0usize..15,
        message in "[A-Z]{1,8}",
        tail in prop::collection::vec(step(), 0..10),
    ) {
        let calls = Cell::new(0);
        let mut steps = vec![Step::Empty; k];
        steps.push(Step::Fail(message.clone()));
        steps.extend(tail);

        let result = build(producers(&steps, &calls)).resolve();

        prop_assert_eq!(result, Err(ProducerFailure::new(message)));
        prop_assert_eq!(calls.get(), k + 1);
    }

    #[test]
    fn all_empty_resolves_to_empty(n in 0usize..50) {
        let calls = Cell::new(0);
        let steps = vec![Step::Empty; n];

        prop_assert_eq!(build(producers(&steps, &calls)).resolve(), Ok(String::new()));
        prop_assert_eq!(calls.get(), n);
    }
}

#[test]
fn empty_chain_resolves_to_empty_value() {
    let chain: Chain = build(Vec::new());
    assert_eq!(chain.resolve(), Ok(String::new()));
    assert_eq!(chain.resolve_outcome(), Outcome::Exhausted);
}

#[test]
fn resolving_twice_calls_producers_again() {
    let calls = Cell::new(0);
    let steps = vec![Step::Empty, Step::Value("v".to_string())];
    let chain = build(producers(&steps, &calls));

    assert_eq!(chain.resolve(), Ok("v".to_string()));
    assert_eq!(chain.resolve(), Ok("v".to_string()));
    assert_eq!(calls.get(), 4);
}

#[test]
fn anyhow_errors_come_back_unwrapped() {
    let chain: Chain<anyhow::Error> = Chain::new()
        .link(|| Ok(String::new()))
        .link(|| Err(anyhow::anyhow!("database unreachable")));

    let err = chain.resolve().unwrap_err();
    assert_eq!(err.to_string(), "database unreachable");
}
