//! E2E: the dispatch surface of a node, driven with external identifiers
//! and JSON arguments the way a command layer would call it.

use aethyr_core::{ComputeError, TaskOutput};
use aethyr_tests::seeded_core;
use serde_json::json;

#[test]
fn nth_prime_values() {
    let mut core = seeded_core(1);
    assert_eq!(core.dispatch("nth_prime", &[json!(1)]), Ok(TaskOutput::Integer(2)));
    assert_eq!(core.dispatch("nth_prime", &[json!(6)]), Ok(TaskOutput::Integer(13)));
    assert!(matches!(
        core.dispatch("nth_prime", &[json!(0)]),
        Err(ComputeError::InvalidArgument { .. })
    ));
}

#[test]
fn square_free_count_of_ten() {
    let mut core = seeded_core(1);
    assert_eq!(
        core.dispatch("square_free_count", &[json!(10)]),
        Ok(TaskOutput::Integer(7))
    );
}

#[test]
fn matrix_product_and_mismatch() {
    let mut core = seeded_core(1);
    let out = core
        .dispatch(
            "matrix_multiply",
            &[json!([[1, 2], [3, 4]]), json!([[5, 6], [7, 8]])],
        )
        .unwrap();
    assert_eq!(serde_json::to_value(&out).unwrap(), json!([[19.0, 22.0], [43.0, 50.0]]));

    let err = core
        .dispatch("matrix_multiply", &[json!([[1, 2]]), json!([[1, 2]])])
        .unwrap_err();
    assert_eq!(
        err,
        ComputeError::DimensionMismatch {
            left_cols: 2,
            right_rows: 1
        }
    );
}

#[test]
fn neural_simulation_shape_and_range() {
    let mut core = seeded_core(1);
    let input = json!([0.5, -2.0, 10.0, 0.0, 1.0]);
    let out = core.dispatch("neural_simulation", &[input]).unwrap();
    let v = out.as_vector().unwrap();
    assert_eq!(v.len(), 5);
    assert!(v.iter().all(|x| (-1.0..=1.0).contains(x)));
}

#[test]
fn unknown_task_carries_identifier() {
    let mut core = seeded_core(1);
    assert_eq!(
        core.dispatch("unknown_task", &[]),
        Err(ComputeError::UnsupportedTask("unknown_task".into()))
    );
}

#[test]
fn type_and_arity_errors_are_invalid_argument() {
    let mut core = seeded_core(1);
    let cases = [
        ("nth_prime", vec![]),
        ("nth_prime", vec![json!(null)]),
        ("square_free_count", vec![json!({"limit": 10})]),
        ("matrix_multiply", vec![json!([[1]])]),
        ("matrix_multiply", vec![json!(3), json!([[1]])]),
        ("matrix_multiply", vec![json!([]), json!([[1]])]),
        ("matrix_multiply", vec![json!([[1, 2], [3]]), json!([[1]])]),
        ("neural_simulation", vec![json!("vector")]),
        ("neural_simulation", vec![json!([1, true])]),
    ];
    for (task, args) in cases {
        let err = core.dispatch(task, &args).unwrap_err();
        assert!(
            matches!(err, ComputeError::InvalidArgument { .. }),
            "{} {:?} gave {:?}",
            task,
            args,
            err
        );
    }
}

#[test]
fn failures_are_counted_in_snapshot() {
    let mut core = seeded_core(1);
    let _ = core.dispatch("nth_prime", &[json!(5)]);
    let _ = core.dispatch("bogus", &[]);
    let snap = core.snapshot();
    assert_eq!(snap.tasks_dispatched, 2);
    assert_eq!(snap.tasks_failed, 1);
}
