//! Verify request building and response handling against JSON test vectors
//! stored in `test-vectors/`.
//!
//! Each vector names an operation, the expected request path, a simulated
//! response (or transport failure), and the expected result: either the
//! payload or the flattened error mapping. Comparing parsed JSON avoids false
//! negatives from field ordering.

use std::sync::Mutex;

use joke_core::{
    into_value, ApiRequest, ClientConfig, HttpRequest, HttpResponse, Transport, TransportError,
};
use serde_json::Value;

const BASE_URL: &str = "http://localhost:3000";

/// Transport that answers from a vector's `simulated_response` and records
/// the URL it was asked for.
struct Simulated {
    case: Value,
    requested: Mutex<Option<String>>,
}

impl Transport for Simulated {
    fn get(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        *self.requested.lock().unwrap() = Some(request.url.clone());
        let sim = &self.case["simulated_response"];
        if let Some(message) = sim.get("transport_error") {
            return Err(TransportError(message.as_str().unwrap().to_string()));
        }
        Ok(HttpResponse {
            status: sim["status"].as_u64().unwrap() as u16,
            body: sim["body"].as_str().unwrap().to_string(),
        })
    }
}

fn run_vectors(raw: &str) {
    let vectors: Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap().to_string();
        let transport = Simulated {
            case: case.clone(),
            requested: Mutex::new(None),
        };
        let api = ApiRequest::with_transport(ClientConfig::default().with_base_url(BASE_URL), transport);

        let result = match case["operation"].as_str().unwrap() {
            "get_random" => api.get_random(),
            "get_categories" => api.get_categories(),
            "find_specific" => api.find_specific(case["category"].as_str().unwrap()),
            other => panic!("{name}: unknown operation: {other}"),
        };

        let expected_path = case["expected_request"]["path"].as_str().unwrap();
        let url = format!("{BASE_URL}{expected_path}");
        let requested = api.transport().requested.lock().unwrap().clone();
        assert_eq!(requested.as_deref(), Some(url.as_str()), "{name}: path");

        let mut expected = case["expected_result"].clone();
        // `{url}` in an expected error message stands for the full request URL.
        if let Some(Value::String(message)) = expected.get_mut("error") {
            *message = message.replace("{url}", &url);
        }
        assert_eq!(into_value(result), expected, "{name}: result");
    }
}

#[test]
fn random_test_vectors() {
    run_vectors(include_str!("../../test-vectors/random.json"));
}

#[test]
fn categories_test_vectors() {
    run_vectors(include_str!("../../test-vectors/categories.json"));
}

#[test]
fn find_specific_test_vectors() {
    run_vectors(include_str!("../../test-vectors/find_specific.json"));
}
