//! End-to-end tests of the submit cycle with a mock delivery and a paused clock.

mod mocks;

use contact_form::form::{ids, DEFAULT_SUBMIT_LABEL};
use contact_form::{
    ContactForm, FormMessagePresenter, MessageKind, SubmissionOrchestrator, SubmissionState,
    SubmitOutcome,
};
use mocks::{filled_form, Behavior, MockDelivery};
use std::sync::{Arc, Mutex};
use std::time::Duration;

fn setup(behavior: Behavior) -> (contact_form::SharedForm, MockDelivery, SubmissionOrchestrator) {
    let form = filled_form();
    let delivery = MockDelivery::new(behavior).watching(form.clone());
    let orchestrator = SubmissionOrchestrator::new(
        form.clone(),
        Arc::new(delivery.clone()),
        FormMessagePresenter::new(),
    );
    (form, delivery, orchestrator)
}

#[tokio::test(start_paused = true)]
async fn test_success_clears_form_and_restores_button() {
    let (form, delivery, orchestrator) = setup(Behavior::Succeed);

    assert_eq!(orchestrator.submit().await, SubmitOutcome::Succeeded);

    assert_eq!(delivery.call_count(), 1);
    assert!(delivery.saw_loading_state());

    let form = form.lock().unwrap();
    assert!(form.fields().iter().all(|f| f.value().is_empty()));
    assert!(!form.field(ids::SITE_VISIT).unwrap().is_checked());
    assert!(!form.submit_button().disabled);
    assert_eq!(form.submit_button().label, DEFAULT_SUBMIT_LABEL);
    assert_eq!(orchestrator.state(), SubmissionState::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_delivery_duration_follows_runtime_clock() {
    let (_form, _delivery, orchestrator) = setup(Behavior::Succeed);

    orchestrator.submit().await;

    assert_eq!(orchestrator.metrics().deliveries_total(), 1);
    assert_eq!(orchestrator.metrics().delivery_duration_total_ms(), 1500);
}

#[tokio::test(start_paused = true)]
async fn test_snapshot_is_taken_at_submit_time() {
    let (_form, delivery, orchestrator) = setup(Behavior::Succeed);

    orchestrator.submit().await;

    let calls = delivery.calls();
    assert_eq!(calls.len(), 1);
    let submission = &calls[0];
    assert_eq!(submission.name, "Kari Nordmann");
    assert_eq!(submission.address, "Storgata 1");
    assert_eq!(submission.job_type, "reparasjon");
    assert!(submission.want_site_visit);
}

#[tokio::test(start_paused = true)]
async fn test_failure_keeps_values_and_restores_button() {
    let (form, delivery, orchestrator) = setup(Behavior::Fail);

    let outcome = orchestrator.submit().await;
    assert_eq!(
        outcome,
        SubmitOutcome::Failed("HTTP request failed: connection reset".to_string())
    );
    assert!(delivery.saw_loading_state());

    let banner = orchestrator.presenter().banner();
    assert_eq!(banner.kind, Some(MessageKind::Error));
    assert!(banner.visible);
    assert!(!orchestrator.presenter().has_pending_hide());

    let form = form.lock().unwrap();
    assert_eq!(form.field(ids::NAME).unwrap().value(), "  Kari Nordmann ");
    assert_eq!(form.field(ids::DESCRIPTION).unwrap().value(), "Lekkasje i hydraulikk");
    assert!(form.field(ids::SITE_VISIT).unwrap().is_checked());
    assert!(!form.submit_button().disabled);
    assert_eq!(form.submit_button().label, DEFAULT_SUBMIT_LABEL);
}

#[tokio::test(start_paused = true)]
async fn test_custom_label_is_restored_verbatim() {
    let form = filled_form();
    form.lock().unwrap().submit_button_mut().label =
        r#"<i class="icon-send"></i> Send forespørsel"#.to_string();

    let delivery = MockDelivery::new(Behavior::Fail);
    let orchestrator = SubmissionOrchestrator::new(
        form.clone(),
        Arc::new(delivery),
        FormMessagePresenter::new(),
    );
    orchestrator.submit().await;

    assert_eq!(
        form.lock().unwrap().submit_button().label,
        r#"<i class="icon-send"></i> Send forespørsel"#
    );
}

#[tokio::test(start_paused = true)]
async fn test_success_banner_auto_hides_after_ten_seconds() {
    let (_form, _delivery, orchestrator) = setup(Behavior::Succeed);

    orchestrator.submit().await;
    assert!(orchestrator.presenter().banner().visible);

    tokio::time::sleep(Duration::from_millis(9_900)).await;
    assert!(orchestrator.presenter().banner().visible);

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert!(!orchestrator.presenter().banner().visible);
}

#[tokio::test(start_paused = true)]
async fn test_second_submit_while_in_flight_is_ignored() {
    let (_form, delivery, orchestrator) = setup(Behavior::Succeed);

    let (first, second) = tokio::join!(orchestrator.submit(), orchestrator.submit());

    assert_eq!(first, SubmitOutcome::Succeeded);
    assert_eq!(second, SubmitOutcome::Ignored);
    assert_eq!(delivery.call_count(), 1);
    assert_eq!(orchestrator.metrics().submissions_total(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_submit_after_completion_runs_again() {
    let (form, delivery, orchestrator) = setup(Behavior::Fail);

    orchestrator.submit().await;
    assert!(!form.lock().unwrap().submit_button().disabled);
    orchestrator.submit().await;

    assert_eq!(delivery.call_count(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_invalid_form_never_reaches_delivery() {
    let form = Arc::new(Mutex::new(ContactForm::standard()));
    form.lock().unwrap().set_value(ids::EMAIL, "a@b");
    let delivery = MockDelivery::new(Behavior::Succeed).watching(form.clone());
    let orchestrator = SubmissionOrchestrator::new(
        form.clone(),
        Arc::new(delivery.clone()),
        FormMessagePresenter::new(),
    );

    assert_eq!(orchestrator.submit().await, SubmitOutcome::Invalid);
    assert_eq!(delivery.call_count(), 0);
    assert_eq!(orchestrator.presenter().banner().scroll_count, 0);

    let form = form.lock().unwrap();
    assert_eq!(form.submit_button().label, DEFAULT_SUBMIT_LABEL);
    assert_eq!(
        form.field(ids::EMAIL).unwrap().error_message(),
        Some("Vennligst oppgi en gyldig e-postadresse")
    );
}

#[tokio::test(start_paused = true)]
async fn test_button_restored_when_delivery_panics() {
    let (form, delivery, orchestrator) = setup(Behavior::Panic);
    let orchestrator = Arc::new(orchestrator);

    let task = {
        let orchestrator = orchestrator.clone();
        tokio::spawn(async move { orchestrator.submit().await })
    };
    let joined = task.await;

    assert!(joined.unwrap_err().is_panic());
    assert_eq!(delivery.call_count(), 1);

    let form = form.lock().unwrap_or_else(|p| p.into_inner());
    assert!(!form.submit_button().disabled);
    assert_eq!(form.submit_button().label, DEFAULT_SUBMIT_LABEL);
    assert_eq!(orchestrator.state(), SubmissionState::Idle);
}
