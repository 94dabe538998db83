use hello_cicd::{GreetingEngine, GreetingProvider, HelloController, OutputFormat, GREETING};
use std::collections::HashSet;
use std::sync::Arc;

#[test]
fn test_hello_returns_expected_message() {
    let controller = HelloController::new();
    assert_eq!(controller.hello(), "Hello from CI/CD!");
}

#[test]
fn test_greeting_is_exact_literal() {
    let greeting = HelloController::new().greeting();
    let text = greeting.as_str();

    assert_eq!(text, "Hello from CI/CD!");
    assert_eq!(text.len(), 17);
    assert!(text.is_ascii());
    assert!(text.starts_with('H'));
    assert!(text.ends_with('!'));
    assert_eq!(text, text.trim());
}

#[test]
fn test_repeated_calls_are_identical() {
    let controller = HelloController::new();
    let first = controller.greeting();

    for _ in 0..1_000 {
        assert_eq!(controller.greeting(), first);
        assert_eq!(controller.hello(), GREETING);
    }
}

#[test]
fn test_calls_do_not_affect_later_calls() {
    let a = HelloController::new();
    let b = HelloController::default();

    // Interleave calls across instances and accessors in arbitrary order.
    let observed = vec![
        a.hello().to_string(),
        b.greeting().to_string(),
        a.greeting().to_string(),
        b.hello().to_string(),
        a.hello().to_string(),
    ];

    let distinct: HashSet<_> = observed.iter().collect();
    assert_eq!(distinct.len(), 1);
    assert_eq!(observed[0], GREETING);
}

#[test]
fn test_concurrent_threads_observe_same_value() {
    let controller = Arc::new(HelloController::new());

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let controller = Arc::clone(&controller);
            std::thread::spawn(move || {
                (0..100)
                    .map(|_| controller.greeting().as_str())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        let results = handle.join().unwrap();
        assert_eq!(results.len(), 100);
        assert!(results.iter().all(|text| *text == GREETING));
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_tasks_observe_same_value() {
    let engine = Arc::new(GreetingEngine::new(HelloController::new()));

    let mut tasks = tokio::task::JoinSet::new();
    for _ in 0..64 {
        let engine = Arc::clone(&engine);
        tasks.spawn(async move { engine.render(OutputFormat::Text) });
    }

    let mut count = 0;
    while let Some(joined) = tasks.join_next().await {
        let rendered = joined.unwrap().unwrap();
        assert_eq!(rendered, GREETING);
        count += 1;
    }
    assert_eq!(count, 64);
}

#[test]
fn test_engine_accepts_any_provider() {
    struct Fixed;

    impl GreetingProvider for Fixed {
        fn greeting(&self) -> hello_cicd::Greeting {
            hello_cicd::Greeting::new()
        }
    }

    let engine = GreetingEngine::new(Fixed);
    let json = engine.render(OutputFormat::Json).unwrap();
    assert_eq!(json, r#"{"message":"Hello from CI/CD!"}"#);
}

#[test]
fn test_run_from_blocking_context() {
    let engine = GreetingEngine::new(HelloController::new());

    let lines = tokio_test::block_on(async {
        tokio::task::spawn_blocking(move || engine.run(OutputFormat::Json, 3))
            .await
            .unwrap()
    });

    let lines = tokio_test::assert_ok!(lines);
    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|l| l == r#"{"message":"Hello from CI/CD!"}"#));
}
