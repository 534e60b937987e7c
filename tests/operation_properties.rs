// Property tests for the arithmetic pipeline
// Author: kelexine (https://github.com/kelexine)

use axum::body::Body;
use axum::http::{Request, StatusCode};
use calculator_microservice::calculator::{operands_for, Operation};
use calculator_microservice::config::AppConfig;
use calculator_microservice::error::CalculatorError;
use calculator_microservice::server::create_router;
use proptest::prelude::*;
use serde_json::Value;
use std::collections::HashMap;
use tower::ServiceExt;

fn query(pairs: &[(&str, String)]) -> HashMap<String, String> {
    pairs.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
}

fn finite() -> impl Strategy<Value = f64> {
    -1e12f64..1e12f64
}

fn run(op: Operation, pairs: &[(&str, String)]) -> Result<f64, CalculatorError> {
    operands_for(op, &query(pairs)).and_then(|values| op.apply(&values))
}

fn get_json(uri: &str) -> (StatusCode, Value) {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();
    runtime.block_on(async {
        let response = create_router(AppConfig::default())
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    })
}

proptest! {
    #[test]
    fn add_matches_float_addition(a in finite(), b in finite()) {
        let result = run(Operation::Add, &[("num1", a.to_string()), ("num2", b.to_string())]).unwrap();
        prop_assert_eq!(result, a + b);
    }

    #[test]
    fn divide_matches_float_division(a in finite(), b in finite()) {
        prop_assume!(b != 0.0);
        let result = run(Operation::Divide, &[("num1", a.to_string()), ("num2", b.to_string())]).unwrap();
        prop_assert_eq!(result, a / b);
    }

    #[test]
    fn divide_by_zero_always_fails(a in finite()) {
        let result = run(Operation::Divide, &[("num1", a.to_string()), ("num2", "0".to_string())]);
        prop_assert!(matches!(result, Err(CalculatorError::DivisionByZero)));
    }

    #[test]
    fn sqrt_matches_for_non_negative(n in 0.0f64..1e12) {
        let result = run(Operation::Sqrt, &[("num", n.to_string())]).unwrap();
        prop_assert_eq!(result, n.sqrt());
    }

    #[test]
    fn sqrt_of_negative_always_fails(n in -1e12f64..-1e-12) {
        let result = run(Operation::Sqrt, &[("num", n.to_string())]);
        prop_assert!(matches!(result, Err(CalculatorError::NegativeSquareRoot)));
    }

    #[test]
    fn modulo_by_zero_always_fails(a in finite()) {
        let result = run(Operation::Modulo, &[("num1", a.to_string()), ("num2", "0".to_string())]);
        prop_assert!(matches!(result, Err(CalculatorError::ModuloByZero)));
    }

    #[test]
    fn alphabetic_input_is_rejected(word in "[a-zA-Z]{1,8}", b in finite()) {
        // `inf`, `nan` and friends are words too, and they are rejected as non-finite
        let result = run(Operation::Multiply, &[("num1", word), ("num2", b.to_string())]);
        prop_assert!(matches!(result, Err(CalculatorError::InvalidInput(_))));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn add_route_returns_sum(a in -1_000_000i64..1_000_000, b in -1_000_000i64..1_000_000) {
        let (status, body) = get_json(&format!("/add?num1={}&num2={}", a, b));
        prop_assert_eq!(status, StatusCode::OK);
        prop_assert_eq!(body["result"].as_i64(), Some(a + b));
    }

    #[test]
    fn divide_route_rejects_zero(a in -1_000_000i64..1_000_000) {
        let (status, body) = get_json(&format!("/divide?num1={}&num2=0", a));
        prop_assert_eq!(status, StatusCode::BAD_REQUEST);
        prop_assert_eq!(body["error"].as_str(), Some("You cannot divide by zero!"));
    }
}
