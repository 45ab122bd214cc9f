//! Property tests: the dispatcher answers every input with a value or a
//! typed error, and successful outputs respect their shape contracts.

use aethyr_compute::{
    is_square_free, matrix_multiply, neural_layer, nth_prime, square_free_count, ComputeError,
    TaskDispatcher,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde_json::{json, Value};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Small JSON values; integers stay low so prime searches finish quickly.
fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-20i64..400).prop_map(|i| json!(i)),
        (-50.0f64..500.0).prop_map(|f| json!(f)),
        "[a-z0-9 ]{0,3}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop::collection::vec(inner, 0..4).prop_map(Value::Array)
    })
}

fn arb_task_id() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("nth_prime".to_string()),
        Just("square_free_count".to_string()),
        Just("matrix_multiply".to_string()),
        Just("neural_simulation".to_string()),
        "[a-z_]{0,12}",
    ]
}

fn arb_matrix(rows: usize, cols: usize) -> impl Strategy<Value = Vec<Vec<f64>>> {
    prop::collection::vec(prop::collection::vec(-100.0f64..100.0, cols), rows)
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    /// Arbitrary identifiers and arguments never panic and fail only with
    /// one of the three documented kinds.
    #[test]
    fn dispatch_is_total(
        task_id in arb_task_id(),
        args in prop::collection::vec(arb_json(), 0..3),
        seed in any::<u64>(),
    ) {
        let mut dispatcher = TaskDispatcher::seeded(seed);
        match dispatcher.dispatch(&task_id, &args) {
            Ok(_) => {}
            Err(ComputeError::UnsupportedTask(id)) => prop_assert_eq!(id, task_id),
            Err(ComputeError::InvalidArgument { .. }) | Err(ComputeError::DimensionMismatch { .. }) => {}
        }
    }

    /// Output vectors keep the input length and stay inside [-1, 1].
    #[test]
    fn neural_output_contract(
        input in prop::collection::vec(-1e3f64..1e3, 0..32),
        seed in any::<u64>(),
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let out = neural_layer(&input, &mut rng).unwrap();
        prop_assert_eq!(out.len(), input.len());
        prop_assert!(out.iter().all(|v| (-1.0..=1.0).contains(v)));
    }

    /// Products of compatible matrices have shape rows(a) x cols(b).
    #[test]
    fn product_shape(
        (a, b) in (1usize..6, 1usize..6, 1usize..6)
            .prop_flat_map(|(r, k, c)| (arb_matrix(r, k), arb_matrix(k, c))),
    ) {
        let product = matrix_multiply(&a, &b).unwrap();
        prop_assert_eq!(product.len(), a.len());
        prop_assert!(product.iter().all(|row| row.len() == b[0].len()));
    }

    /// Incompatible inner dimensions always report both sides.
    #[test]
    fn product_mismatch(
        (a, b) in (1usize..5, 1usize..5, 1usize..5, 1usize..5)
            .prop_filter("inner dims differ", |(_, k1, k2, _)| k1 != k2)
            .prop_flat_map(|(r, k1, k2, c)| (arb_matrix(r, k1), arb_matrix(k2, c))),
    ) {
        let err = matrix_multiply(&a, &b).unwrap_err();
        prop_assert_eq!(
            err,
            ComputeError::DimensionMismatch { left_cols: a[0].len(), right_rows: b.len() }
        );
    }

    /// Primes come out strictly increasing and have no smaller divisor.
    #[test]
    fn primes_increase(n in 1u64..300) {
        let p = nth_prime(n).unwrap();
        let next = nth_prime(n + 1).unwrap();
        prop_assert!(next > p);
        prop_assert!((2..p).take_while(|d| d * d <= p).all(|d| p % d != 0));
    }

    /// The count grows by one exactly when the next integer is square-free.
    #[test]
    fn square_free_count_steps(limit in 1u64..2000) {
        let here = square_free_count(limit).unwrap();
        let next = square_free_count(limit + 1).unwrap();
        prop_assert!(here <= limit);
        prop_assert_eq!(next - here, u64::from(is_square_free(limit + 1)));
    }
}
