// Log sink tests. Installs the global subscriber, so this binary holds a single test.
// Author: kelexine (https://github.com/kelexine)

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use calculator_microservice::config::{AppConfig, LoggingConfig};
use calculator_microservice::server::create_router;
use calculator_microservice::utils::logging;
use serde_json::{json, Value};
use std::path::Path;
use tower::ServiceExt;

async fn send(app: &Router, uri: &str) -> StatusCode {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
        .status()
}

fn entries(path: &Path) -> Vec<Value> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).expect("each entry is one JSON object"))
        .collect()
}

fn find<'a>(entries: &'a [Value], message: &str) -> Option<&'a Value> {
    entries
        .iter()
        .find(|entry| entry["fields"]["message"] == message)
}

#[tokio::test]
async fn test_request_and_computation_entries_reach_the_right_files() {
    let dir = tempfile::tempdir().unwrap();
    let log_dir = dir.path().join("logs");
    let logging_config = LoggingConfig {
        directory: log_dir.to_string_lossy().to_string(),
        ..LoggingConfig::default()
    };
    let combined_path = logging_config.combined_path();
    let error_path = logging_config.error_path();

    let guard = logging::init(&logging_config).unwrap();
    assert!(log_dir.is_dir(), "log directory should be created");

    let app = create_router(AppConfig {
        logging: logging_config,
        ..AppConfig::default()
    });
    assert_eq!(send(&app, "/add?num1=5&num2=3").await, StatusCode::OK);
    assert_eq!(send(&app, "/divide?num1=1&num2=0").await, StatusCode::BAD_REQUEST);
    assert_eq!(send(&app, "/power?base=x&exp=2").await, StatusCode::BAD_REQUEST);

    // Flushes the non-blocking writers
    drop(guard);

    let combined = entries(&combined_path);

    // One request entry per inbound request, before handling
    let requests: Vec<&Value> = combined
        .iter()
        .filter(|entry| entry["fields"]["message"] == "Incoming request")
        .collect();
    assert_eq!(requests.len(), 3);
    let request = requests
        .iter()
        .find(|entry| entry["fields"]["uri"] == "/add?num1=5&num2=3")
        .expect("request entry for /add");
    assert_eq!(request["level"], "INFO");
    assert_eq!(request["fields"]["method"], "GET");
    assert_eq!(request["fields"]["client"], "unknown");
    assert_eq!(request["fields"]["service"], "calculator-microservice");
    let query: Value = serde_json::from_str(request["fields"]["query"].as_str().unwrap()).unwrap();
    assert_eq!(query, json!({ "num1": "5", "num2": "3" }));

    // Success line carries each operand and the result as separate fields
    let success = find(&combined, "Addition: 5 + 3 = 8").expect("success entry");
    assert_eq!(success["level"], "INFO");
    assert_eq!(success["fields"]["operation"], "add");
    assert_eq!(success["fields"]["num1"], "5");
    assert_eq!(success["fields"]["num2"], "3");
    assert_eq!(success["fields"]["result"].as_f64(), Some(8.0));
    assert_eq!(success["fields"]["service"], "calculator-microservice");

    // Failure lines go to both files with operand fields and the response message
    let errors = entries(&error_path);
    for file in [&combined, &errors] {
        let division = find(file, "Division Error: You cannot divide by zero! | num1=1, num2=0")
            .expect("division error entry");
        assert_eq!(division["level"], "ERROR");
        assert_eq!(division["fields"]["num1"], "1");
        assert_eq!(division["fields"]["num2"], "0");
        assert_eq!(division["fields"]["error"], "You cannot divide by zero!");

        let power = find(file, "Power Error: Inputs must be numbers | base=x, exp=2")
            .expect("power error entry");
        assert_eq!(power["fields"]["base"], "x");
        assert_eq!(power["fields"]["exp"], "2");
        assert_eq!(
            power["fields"]["error"],
            "Both base and exponent must be numbers."
        );
    }

    // The error file holds errors only
    assert_eq!(errors.len(), 2);
    assert!(errors.iter().all(|entry| entry["level"] == "ERROR"));
    assert!(find(&errors, "Incoming request").is_none());
    assert!(find(&errors, "Addition: 5 + 3 = 8").is_none());

    // A second subscriber cannot be installed
    assert!(logging::init(&LoggingConfig {
        directory: dir.path().join("again").to_string_lossy().to_string(),
        ..LoggingConfig::default()
    })
    .is_err());
}
