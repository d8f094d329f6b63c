use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use vasari_core::{CompletionRequest, CompletionResponse};
use vasari_error::{CompletionError, CompletionErrorKind, VasariErrorKind, VasariResult};
use vasari_interface::VasariDriver;
use vasari_pipeline::{BatchOptions, GenerationPipeline};

/// Mock driver that echoes the prompt back as the single generated item.
///
/// Prompts containing `slow_marker` are delayed so completion order differs
/// from submission order; prompts containing `fail_marker` fail outright.
#[derive(Default)]
struct EchoDriver {
    calls: Arc<Mutex<usize>>,
    slow_marker: Option<&'static str>,
    fail_marker: Option<&'static str>,
}

impl EchoDriver {
    fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl VasariDriver for EchoDriver {
    async fn complete(&self, req: &CompletionRequest) -> VasariResult<CompletionResponse> {
        *self.calls.lock().unwrap() += 1;
        if let Some(marker) = self.fail_marker {
            if req.prompt.contains(marker) {
                return Err(CompletionError::new(CompletionErrorKind::Http(
                    "connection reset".to_string(),
                ))
                .into());
            }
        }
        if let Some(marker) = self.slow_marker {
            let delay = if req.prompt.contains(marker) { 30 } else { 1 };
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        let text = serde_json::json!({ "data": [req.prompt.clone()] }).to_string();
        Ok(CompletionResponse { text })
    }

    fn provider_name(&self) -> &'static str {
        "echo"
    }

    fn model_name(&self) -> &str {
        "echo-model-v1"
    }
}

/// Mock driver that tracks how many calls are in flight at once.
#[derive(Default)]
struct GateDriver {
    current: Arc<Mutex<usize>>,
    peak: Arc<Mutex<usize>>,
}

impl GateDriver {
    fn peak(&self) -> usize {
        *self.peak.lock().unwrap()
    }
}

#[async_trait]
impl VasariDriver for GateDriver {
    async fn complete(&self, _req: &CompletionRequest) -> VasariResult<CompletionResponse> {
        {
            let mut current = self.current.lock().unwrap();
            *current += 1;
            let mut peak = self.peak.lock().unwrap();
            if *current > *peak {
                *peak = *current;
            }
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
        *self.current.lock().unwrap() -= 1;
        Ok(CompletionResponse {
            text: r#"{"data": ["task"]}"#.to_string(),
        })
    }

    fn provider_name(&self) -> &'static str {
        "gate"
    }

    fn model_name(&self) -> &str {
        "gate-model-v1"
    }
}

fn names(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[tokio::test]
async fn test_matrix_covers_every_pair_in_key_order() {
    // Alice's calls finish last, so completion order differs from key order.
    let driver = EchoDriver {
        slow_marker: Some("Alice"),
        ..Default::default()
    };
    let pipeline = GenerationPipeline::new(driver);
    let personas = names(&["Alice", "Bob"]);
    let integrations = names(&["Payments", "Search"]);

    let matrix = pipeline
        .generate_task_matrix(
            "An online bakery",
            &personas,
            &integrations,
            &BatchOptions { concurrency: 4 },
        )
        .await
        .expect("matrix generation failed");

    assert_eq!(matrix.len(), 4);
    assert_eq!(pipeline.driver().calls(), 4);

    let keys: Vec<(&str, &str)> = matrix
        .keys()
        .map(|key| (key.persona().as_str(), key.integration().as_str()))
        .collect();
    assert_eq!(
        keys,
        vec![
            ("Alice", "Payments"),
            ("Alice", "Search"),
            ("Bob", "Payments"),
            ("Bob", "Search"),
        ]
    );

    for (key, result) in matrix.iter() {
        let prompt = &result.items()[0];
        assert!(prompt.contains(key.persona()), "cell holds its own persona");
        assert!(
            prompt.contains(key.integration()),
            "cell holds its own integration"
        );
    }
}

#[tokio::test]
async fn test_matrix_lookup_by_pair() {
    let driver = EchoDriver::default();
    let pipeline = GenerationPipeline::new(driver);
    let personas = names(&["Bob"]);
    let integrations = names(&["Search"]);

    let matrix = pipeline
        .generate_task_matrix(
            "An online bakery",
            &personas,
            &integrations,
            &BatchOptions::default(),
        )
        .await
        .expect("matrix generation failed");

    assert!(matrix.get("Bob", "Search").is_some());
    assert!(matrix.get("Bob", "Payments").is_none());
    assert!(matrix.get("Alice", "Search").is_none());
}

#[tokio::test]
async fn test_failing_pair_fails_the_whole_matrix() {
    let driver = EchoDriver {
        fail_marker: Some("Billing"),
        ..Default::default()
    };
    let pipeline = GenerationPipeline::new(driver);
    let personas = names(&["Alice"]);
    let integrations = names(&["Payments", "Billing"]);

    let err = pipeline
        .generate_task_matrix(
            "An online bakery",
            &personas,
            &integrations,
            &BatchOptions::default(),
        )
        .await
        .expect_err("a failing pair must fail the matrix");
    assert!(matches!(err.kind(), VasariErrorKind::Completion(_)));
}

#[tokio::test]
async fn test_empty_personas_yield_an_empty_matrix_without_calls() {
    let driver = EchoDriver::default();
    let pipeline = GenerationPipeline::new(driver);
    let integrations = names(&["Payments"]);

    let matrix = pipeline
        .generate_task_matrix(
            "An online bakery",
            &[],
            &integrations,
            &BatchOptions::default(),
        )
        .await
        .expect("empty input is not an error");

    assert!(matrix.is_empty());
    assert_eq!(pipeline.driver().calls(), 0);
}

#[tokio::test]
async fn test_empty_integrations_yield_an_empty_matrix_without_calls() {
    let driver = EchoDriver::default();
    let pipeline = GenerationPipeline::new(driver);
    let personas = names(&["Alice"]);

    let matrix = pipeline
        .generate_task_matrix("An online bakery", &personas, &[], &BatchOptions::default())
        .await
        .expect("empty input is not an error");

    assert!(matrix.is_empty());
    assert_eq!(pipeline.driver().calls(), 0);
}

#[tokio::test]
async fn test_concurrency_bound_is_respected() {
    let driver = GateDriver::default();
    let pipeline = GenerationPipeline::new(driver);
    let personas = names(&["Alice", "Bob", "Carol"]);
    let integrations = names(&["Payments", "Search"]);

    pipeline
        .generate_task_matrix(
            "An online bakery",
            &personas,
            &integrations,
            &BatchOptions { concurrency: 2 },
        )
        .await
        .expect("matrix generation failed");

    assert_eq!(pipeline.driver().peak(), 2);
}

#[tokio::test]
async fn test_zero_concurrency_is_clamped_to_one() {
    let driver = GateDriver::default();
    let pipeline = GenerationPipeline::new(driver);
    let personas = names(&["Alice", "Bob"]);
    let integrations = names(&["Payments"]);

    pipeline
        .generate_task_matrix(
            "An online bakery",
            &personas,
            &integrations,
            &BatchOptions { concurrency: 0 },
        )
        .await
        .expect("matrix generation failed");

    assert_eq!(pipeline.driver().peak(), 1);
}
