//! Integration tests for the monthly batch orchestrator.

mod test_utils;

use murillo_core::{PostFormat, Progress, SocialNetwork};
use murillo_error::GatewayErrorKind;
use murillo_pipeline::{INTER_POST_DELAY, PostPipeline};
use serde_json::json;
use test_utils::mock_gateway::{MockGateway, TestClock};
use test_utils::{analysis_json, draft_json, media, sample_input};

fn ideas_json(ideas: &[&str]) -> serde_json::Value {
    json!({
        "ideas": ideas.iter().map(|idea| json!({ "idea": idea })).collect::<Vec<_>>()
    })
}

/// Queue one full successful pipeline run.
fn queue_success(mock: &MockGateway, copy: &str) {
    mock.push_structured(draft_json(copy))
        .push_text("scene")
        .push_image(media("aW1n"))
        .push_structured(analysis_json(75, 75, 75, 75));
}

#[tokio::test]
async fn one_failing_idea_is_skipped_and_recorded() {
    let mock = MockGateway::new();
    mock.push_structured(ideas_json(&[
        "idea one",
        "idea two",
        "idea three",
        "idea four",
        "idea five",
    ]));
    queue_success(&mock, "post one");
    queue_success(&mock, "post two");
    // The third idea dies at the copy stage; its run makes no further calls.
    mock.fail_structured(GatewayErrorKind::HttpError {
        status_code: 500,
        message: "backend error".to_string(),
    });
    queue_success(&mock, "post four");
    queue_success(&mock, "post five");

    let clock = TestClock::new();
    let runner = PostPipeline::with_clock(mock.clone(), clock.clone());
    let input = sample_input(SocialNetwork::Instagram, PostFormat::Feed);

    let mut events: Vec<Progress> = Vec::new();
    let report = runner
        .generate_monthly(&input, |progress| events.push(progress.clone()))
        .await
        .unwrap();

    // Four successes in ideation order, one recorded failure.
    let copies: Vec<&str> = report.posts.iter().map(|p| p.main_copy.as_str()).collect();
    assert_eq!(copies, vec!["post one", "post two", "post four", "post five"]);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].idea, "idea three");
    assert!(report.failures[0].message.contains("backend error"));

    // One post-ideation event plus one per idea, success or failure alike.
    assert_eq!(events.len(), 6);
    assert_eq!(events[0].current_step, 0);
    assert_eq!(events[0].percentage, 15);
    let steps: Vec<usize> = events[1..].iter().map(|e| e.current_step).collect();
    assert_eq!(steps, vec![1, 2, 3, 4, 5]);
    assert_eq!(events.last().unwrap().percentage, 100);
    assert!(events.windows(2).all(|w| w[0].percentage < w[1].percentage));

    // Sequential pacing: one fixed pause before every idea.
    assert_eq!(clock.sleeps(), vec![INTER_POST_DELAY; 5]);
}

#[tokio::test]
async fn empty_ideation_fails_without_progress_events() {
    let mock = MockGateway::new();
    mock.push_structured(ideas_json(&[]));

    let clock = TestClock::new();
    let runner = PostPipeline::with_clock(mock.clone(), clock.clone());
    let input = sample_input(SocialNetwork::Instagram, PostFormat::Feed);

    let mut events: Vec<Progress> = Vec::new();
    let err = runner
        .generate_monthly(&input, |progress| events.push(progress.clone()))
        .await
        .unwrap_err();

    assert!(format!("{err}").contains("no post ideas"));
    assert!(events.is_empty());
    assert!(clock.sleeps().is_empty());
}

#[tokio::test]
async fn ideation_transport_failure_is_fatal() {
    let mock = MockGateway::new();
    mock.fail_structured(GatewayErrorKind::Transport("connection reset".to_string()));

    let runner = PostPipeline::with_clock(mock.clone(), TestClock::new());
    let input = sample_input(SocialNetwork::Instagram, PostFormat::Feed);

    let err = runner
        .generate_monthly(&input, |_| {})
        .await
        .unwrap_err();

    let message = format!("{err}");
    assert!(message.contains("ideation"));
    assert!(message.contains("connection reset"));
}

#[tokio::test]
async fn all_ideas_failing_is_fatal_after_the_full_sweep() {
    let mock = MockGateway::new();
    mock.push_structured(ideas_json(&["idea one", "idea two"]));
    mock.fail_structured(GatewayErrorKind::Transport("down".to_string()));
    mock.fail_structured(GatewayErrorKind::Transport("still down".to_string()));

    let runner = PostPipeline::with_clock(mock.clone(), TestClock::new());
    let input = sample_input(SocialNetwork::Instagram, PostFormat::Feed);

    let mut events: Vec<Progress> = Vec::new();
    let err = runner
        .generate_monthly(&input, |progress| events.push(progress.clone()))
        .await
        .unwrap_err();

    assert!(format!("{err}").contains("All 2 post generations failed"));
    // Every idea was still attempted and reported before giving up.
    assert_eq!(events.len(), 3);
    assert_eq!(events.last().unwrap().percentage, 100);
}
