use std::fmt::Write;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use snippetrun::catalog::{Catalog, Snippet};
use snippetrun::check::ExpectationCheck;
use snippetrun::execution::{Executor, SnippetFailure, run_catalog};
use snippetrun::report::render;
use snippetrun::state::{Outcome, SnippetStatus};

fn executor() -> Executor {
    Executor::new(Duration::from_secs(5))
}

#[tokio::test]
async fn test_matching_output() {
    let snippet = Snippet::new("hello", |out| {
        out.line("hello");
        Ok(None)
    })
    .expect_lines(["hello"]);

    let result = executor().execute(&snippet).await;

    assert_eq!(result.snippet_id, "hello");
    assert_eq!(result.outcome, Outcome::Success);
    assert_eq!(result.expectation, ExpectationCheck::Matched);
    assert_eq!(result.captured_output, vec!["hello"]);
    assert_eq!(result.status(), SnippetStatus::Pass);
}

#[tokio::test]
async fn test_single_character_change_mismatches() {
    let body = |out: &mut snippetrun::Output| -> anyhow::Result<Option<String>> {
        out.line("hello");
        Ok(None)
    };
    let exact = Snippet::new("exact", body).expect_lines(["hello"]);
    let off_by_one = Snippet::new("off", body).expect_lines(["hellO"]);

    let exec = executor();
    assert_eq!(exec.execute(&exact).await.expectation.matched(), Some(true));
    assert_eq!(exec.execute(&off_by_one).await.expectation.matched(), Some(false));
}

#[tokio::test]
async fn test_line_count_mismatch() {
    let snippet = Snippet::new("short", |out| {
        out.line("a");
        Ok(None)
    })
    .expect_lines(["a", "b"]);

    let result = executor().execute(&snippet).await;
    assert_eq!(result.status(), SnippetStatus::Fail);
    assert!(result.outcome.is_success());
}

#[tokio::test]
async fn test_error_becomes_failure() {
    let snippet = Snippet::new("fails", |out| {
        out.line("before");
        anyhow::bail!("boom")
    });

    let result = executor().execute(&snippet).await;

    assert_eq!(
        result.outcome,
        Outcome::Failure(SnippetFailure::fault("boom"))
    );
    assert_eq!(result.captured_output, vec!["before"]);
    assert_eq!(result.expectation, ExpectationCheck::NotChecked);
}

#[tokio::test]
async fn test_panic_becomes_failure() {
    let snippet = Snippet::new("panics", |_| panic!("kaboom")).expect_lines(["never"]);

    let result = executor().execute(&snippet).await;

    assert_eq!(
        result.outcome,
        Outcome::Failure(SnippetFailure::panic("kaboom"))
    );
    assert_eq!(result.status(), SnippetStatus::Fail);
}

#[tokio::test]
async fn test_timeout_abandons_snippet() {
    let snippet = Snippet::new("sleepy", |out| {
        std::thread::sleep(Duration::from_secs(3));
        out.line("too late");
        Ok(None)
    })
    .expect_lines(["too late"]);

    let started = Instant::now();
    let result = Executor::new(Duration::from_millis(50)).execute(&snippet).await;

    assert!(started.elapsed() < Duration::from_secs(2));
    assert_eq!(
        result.outcome,
        Outcome::Failure(SnippetFailure::Timeout { limit_ms: 50 })
    );
    assert!(result.captured_output.is_empty());
    assert_eq!(result.expectation, ExpectationCheck::NotChecked);
}

#[tokio::test]
async fn test_return_value_recorded() {
    let snippet = Snippet::new("value", |out| {
        write!(out, "partial")?;
        Ok(Some("42".to_string()))
    });

    let result = executor().execute(&snippet).await;
    assert_eq!(result.return_value.as_deref(), Some("42"));
    assert_eq!(result.captured_output, vec!["partial"]);
}

#[tokio::test]
async fn test_outputs_do_not_leak_between_runs() {
    let exec = executor();
    let first = Snippet::new("first", |out| {
        out.line("one");
        panic!("stop");
    });
    let second = Snippet::new("second", |out| {
        out.line("two");
        Ok(None)
    })
    .expect_lines(["two"]);

    let a = exec.execute(&first).await;
    let b = exec.execute(&second).await;

    assert_eq!(a.captured_output, vec!["one"]);
    assert_eq!(b.captured_output, vec!["two"]);
    assert_eq!(b.status(), SnippetStatus::Pass);
}

fn scenario_catalog() -> Catalog {
    let mut builder = Catalog::builder();
    builder
        .register(
            Snippet::new("A", |out| {
                out.line("hello");
                Ok(None)
            })
            .expect_lines(["hello"]),
        )
        .unwrap();
    builder
        .register(
            Snippet::new("B", |out| {
                out.line("x");
                Ok(None)
            })
            .expect_lines(["y"]),
        )
        .unwrap();
    builder
        .register(Snippet::new("C", |_| anyhow::bail!("fault in C")))
        .unwrap();
    builder.freeze()
}

#[tokio::test]
async fn test_scenario_a_b_c() {
    let catalog = scenario_catalog();
    let summary = run_catalog(&catalog, &executor(), 1, &[]).await;

    assert_eq!(summary.total(), 3);
    assert_eq!(summary.passed(), 1);
    assert_eq!(summary.failed(), 2);
    assert_eq!(summary.unchecked(), 0);
    assert_eq!(summary.exit_code(), 1);

    assert_eq!(summary.all()[0].status(), SnippetStatus::Pass);
    assert!(matches!(
        summary.all()[1].expectation,
        ExpectationCheck::Mismatched(_)
    ));
    assert!(!summary.all()[2].outcome.is_success());

    let text = render(&summary);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].contains("A:"));
    assert!(lines[1].contains("B:"));
    assert!(lines[2].contains("C:"));
    assert_eq!(lines[3], "total: 3, passed: 1, failed: 2, unchecked: 0");
}

#[tokio::test]
async fn test_unchecked_snippets_count() {
    let n = 7;
    let mut builder = Catalog::builder();
    for k in 0..n {
        builder
            .register(Snippet::new(format!("s{}", k), move |out| {
                out.line(k);
                Ok(None)
            }))
            .unwrap();
    }
    let catalog = builder.freeze();

    let summary = run_catalog(&catalog, &executor(), 1, &[]).await;

    assert_eq!(summary.total(), n);
    assert_eq!(summary.failed(), 0);
    assert_eq!(summary.unchecked(), n);
    assert_eq!(summary.exit_code(), 0);
}

#[tokio::test]
async fn test_render_is_idempotent() {
    let catalog = scenario_catalog();
    let exec = executor();

    let first = render(&run_catalog(&catalog, &exec, 1, &[]).await);
    let second = render(&run_catalog(&catalog, &exec, 1, &[]).await);

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_parallel_run_keeps_catalog_order() {
    let mut builder = Catalog::builder();
    // Earlier snippets sleep longer so they finish last.
    for k in 0..6u64 {
        builder
            .register(
                Snippet::new(format!("p{}", k), move |out| {
                    std::thread::sleep(Duration::from_millis((6 - k) * 20));
                    out.line(k);
                    Ok(None)
                })
                .expect_lines([k.to_string()]),
            )
            .unwrap();
    }
    let catalog = builder.freeze();
    let exec = executor();

    let parallel = run_catalog(&catalog, &exec, 4, &[]).await;
    let sequential = run_catalog(&catalog, &exec, 1, &[]).await;

    let ids: Vec<&str> = parallel.all().iter().map(|r| r.snippet_id.as_str()).collect();
    assert_eq!(ids, vec!["p0", "p1", "p2", "p3", "p4", "p5"]);
    assert_eq!(render(&parallel), render(&sequential));
    assert_eq!(parallel.metrics().parallel_jobs, 4);
}

#[tokio::test]
async fn test_runaway_snippet_does_not_stall_catalog() {
    let ran_after = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&ran_after);

    let mut builder = Catalog::builder();
    builder
        .register(Snippet::new("runaway", |_| {
            std::thread::sleep(Duration::from_secs(3));
            Ok(None)
        }))
        .unwrap();
    builder
        .register(Snippet::new("after", move |out| {
            counter.fetch_add(1, Ordering::SeqCst);
            out.line("still ran");
            Ok(None)
        }))
        .unwrap();
    let catalog = builder.freeze();

    let summary = run_catalog(&catalog, &Executor::new(Duration::from_millis(50)), 1, &[]).await;

    assert_eq!(ran_after.load(Ordering::SeqCst), 1);
    assert_eq!(summary.failed(), 1);
    assert_eq!(summary.unchecked(), 1);
}

#[tokio::test]
async fn test_builtin_lessons_all_pass() {
    let catalog = snippetrun::lessons::catalog().expect("built-in catalog");
    let summary = run_catalog(&catalog, &executor(), 4, &[]).await;

    for result in summary.all() {
        assert_ne!(
            result.status(),
            SnippetStatus::Fail,
            "{} failed: {:?}",
            result.snippet_id,
            result.failure_reason()
        );
    }
    assert_eq!(summary.exit_code(), 0);
}

#[tokio::test]
async fn test_multiline_error_renders_one_line() {
    let mut builder = Catalog::builder();
    builder
        .register(Snippet::new("A", |_| anyhow::bail!("first\nsecond")))
        .unwrap();
    builder
        .register(Snippet::new("B", |_| panic!("left\nright")))
        .unwrap();
    let catalog = builder.freeze();

    let summary = run_catalog(&catalog, &executor(), 1, &[]).await;
    let text = render(&summary);

    assert_eq!(text.lines().count(), 3);
    assert!(text.starts_with("FAIL      A: failure (error: first\\nsecond), not checked\n"));
    assert!(text.contains("FAIL      B: failure (panicked: left\\nright), not checked\n"));
}
