//! Async refinement behavior: sync checks gate the async pass, async
//! failures aggregate, and concurrent validations stay independent.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use futures::FutureExt;
use serde_json::json;
use viu_valid::{extract_errors, object, string};

#[tokio::test]
async fn async_refinement_failure_surfaces_at_declared_path() {
    let schema = object()
        .field("email", string().trim().lowercase())
        .refine_async("email", "email já está em uso", |value| {
            let email = value["email"].as_str().unwrap_or_default().to_string();
            async move {
                tokio::time::sleep(Duration::from_millis(10)).await;
                email != "taken@viu.com"
            }
            .boxed()
        })
        .build();

    let ok = schema
        .validate_async(&json!({"email": "free@viu.com"}))
        .await;
    assert!(ok.is_ok());

    let err = schema
        .validate_async(&json!({"email": "TAKEN@VIU.COM"}))
        .await
        .unwrap_err();
    assert_eq!(err.issues().len(), 1);
    assert_eq!(err.issues()[0].path, "email");
    assert_eq!(err.issues()[0].message, "email já está em uso");
}

#[tokio::test]
async fn sync_failures_skip_async_predicates() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);

    let schema = object()
        .field("email", string().min_len(5, "email curto demais"))
        .refine_async("email", "email já está em uso", move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            async { true }.boxed()
        })
        .build();

    let err = schema.validate_async(&json!({"email": "a@b"})).await;
    assert!(err.is_err());
    assert_eq!(calls.load(Ordering::SeqCst), 0, "async predicate must not run");
}

#[tokio::test]
async fn async_failures_aggregate_across_refinements() {
    let schema = object()
        .field("email", string())
        .field("slug", string())
        .refine_async("email", "email já está em uso", |_| async { false }.boxed())
        .refine_async("slug", "slug já está em uso", |_| async { false }.boxed())
        .build();

    let err = schema
        .validate_async(&json!({"email": "a@viu.com", "slug": "meu-projeto"}))
        .await
        .unwrap_err();
    let map = extract_errors(&err);
    assert_eq!(map["email"], vec!["email já está em uso"]);
    assert_eq!(map["slug"], vec!["slug já está em uso"]);
}

#[tokio::test]
async fn concurrent_validations_do_not_interact() {
    let slow = object()
        .field("name", string())
        .refine_async("name", "taken", |_| {
            async {
                tokio::time::sleep(Duration::from_millis(50)).await;
                false
            }
            .boxed()
        })
        .build();
    let fast = object().field("name", string()).build();

    let slow_input = json!({"name": "a"});
    let fast_input = json!({"name": "b"});
    let slow_call = slow.validate_async(&slow_input);
    let fast_call = fast.validate_async(&fast_input);

    // The fast validation completes with its own result regardless of
    // the slow one still being in flight.
    let (slow_result, fast_result) = tokio::join!(slow_call, fast_call);
    assert!(slow_result.is_err());
    assert!(fast_result.is_ok());
}

#[tokio::test]
async fn safe_async_variant_returns_outcome() {
    let schema = object()
        .field("name", string())
        .refine_async("name", "taken", |_| async { false }.boxed())
        .build();

    let outcome = schema.safe_validate_async(&json!({"name": "x"})).await;
    assert!(!outcome.is_valid());

    let outcome = schema.safe_validate_async(&json!({"name": 1})).await;
    assert!(!outcome.is_valid());
    // The sync issue is the one reported, not the refinement.
    assert_eq!(
        outcome.error().map(|e| e.issues()[0].message.as_str()),
        Some("expected a string")
    );
}
