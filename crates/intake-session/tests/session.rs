use std::sync::Arc;

use intake_core::models::evaluation::{EvaluationDetail, EvaluationSubmission, SubmissionReceipt};
use intake_core::models::form::FieldUpdate;
use intake_core::models::insight::FunctionalLevel;
use intake_core::reference;
use intake_services::BoxFuture;
use intake_services::error::ServiceError;
use intake_services::evaluation::{demo_evaluation, EvaluationGateway, InMemoryEvaluationGateway};
use intake_session::notice::{Notice, NoticeSeverity};
use intake_session::{EvaluationSession, Services, SessionError};

/// Loads fine, refuses every submission.
struct RejectingGateway;

impl EvaluationGateway for RejectingGateway {
    fn fetch_detail(&self, evaluation_id: &str, _token: &str) -> BoxFuture<'_, Result<EvaluationDetail, ServiceError>> {
        let detail = demo_evaluation(evaluation_id);
        Box::pin(async move { Ok(detail) })
    }

    fn submit(&self, _submission: &EvaluationSubmission) -> BoxFuture<'_, Result<SubmissionReceipt, ServiceError>> {
        Box::pin(async { Err(ServiceError::Http("503 Service Unavailable".to_string())) })
    }
}

async fn demo_session() -> EvaluationSession {
    EvaluationSession::open(Services::demo(), "EVAL-001", "demo-token").await
}

/// Fill the clinician-entered fields and score one FIM row.
fn complete(session: &mut EvaluationSession) {
    session.update_fields(FieldUpdate {
        therapist_name: Some("Alex Morgan".to_string()),
        referring_physician: Some("Dr. Patel".to_string()),
        referral_source: Some("Physician".to_string()),
        ..FieldUpdate::default()
    });
    let fim = &reference::standard_assessments()[1];
    session.select_assessment(0, fim).unwrap();
    session.set_score(0, Some(90.0)).unwrap();
}

#[tokio::test]
async fn loading_populates_fields_from_the_evaluation() {
    let session = demo_session().await;
    let fields = session.fields();

    assert_eq!(fields.clinic_name.as_deref(), Some("Springfield Rehabilitation Center"));
    assert_eq!(fields.clinic_license.as_deref(), Some("12345678"));
    assert_eq!(fields.patient_name.as_deref(), Some("John Doe"));
    assert_eq!(fields.client_id.as_deref(), Some("67890"));
    assert_eq!(fields.birth_date.as_deref(), Some("15-05-1980"));
    assert_eq!(fields.address.as_deref(), Some("Main Street, 123, A, 12345"));
    assert_eq!(fields.diagnosis_code.as_deref(), Some(""));
    assert!(session.notice().is_none());

    let snapshot = session.snapshot();
    assert!(snapshot.show_diagnosis_code);
    assert_eq!(snapshot.status.map(|s| s.label()), Some("In Progress"));
}

#[tokio::test]
async fn failed_load_posts_generic_notice() {
    let services = Services::with_gateway(Arc::new(InMemoryEvaluationGateway::new()));
    let session = EvaluationSession::open(services, "EVAL-404", "token").await;

    assert_eq!(session.notice(), Some(&Notice::load_failed()));
    assert_eq!(session.notice().unwrap().detail, "Something went wrong!");
    assert!(session.detail().is_none());
}

#[tokio::test]
async fn postal_code_change_resets_house_number_and_addition() {
    let mut session = demo_session().await;
    session.change_postal_code(Some("67890".to_string())).await.unwrap();

    let fields = session.fields();
    assert!(fields.house_number.is_none());
    assert!(fields.addition.is_none());
    assert_eq!(fields.street.as_deref(), Some("Oak Avenue"));
    assert_eq!(fields.city.as_deref(), Some("Madison"));
    assert_eq!(fields.address.as_deref(), Some("Oak Avenue, 67890"));
    assert_eq!(
        session.address_options().house_numbers,
        ["100", "102", "104", "106", "108", "110"]
    );
}

#[tokio::test]
async fn incomplete_postal_code_skips_lookup() {
    let mut session = demo_session().await;
    session.change_postal_code(Some("678".to_string())).await.unwrap();

    assert!(session.address_options().house_numbers.is_empty());
    assert_eq!(session.fields().address.as_deref(), Some("678"));
    assert_eq!(session.fields().street.as_deref(), Some(""));
}

#[tokio::test]
async fn house_number_then_addition_compose_the_address() {
    let mut session = demo_session().await;
    session.change_postal_code(Some("67890".to_string())).await.unwrap();
    session.change_house_number(Some("100".to_string())).await.unwrap();

    assert_eq!(session.address_options().house_number_additions, ["A", "B", "C"]);
    assert_eq!(session.fields().address.as_deref(), Some("Oak Avenue, 100, 67890"));

    session.change_addition(Some("B".to_string()));
    assert_eq!(session.fields().address.as_deref(), Some("Oak Avenue, 100, B, 67890"));
    assert_eq!(session.fields().addition.as_deref(), Some("B"));

    session.change_house_number(Some("102".to_string())).await.unwrap();
    assert!(session.fields().addition.is_none());
    assert_eq!(session.fields().address.as_deref(), Some("Oak Avenue, 102, 67890"));
}

#[tokio::test]
async fn insights_follow_every_row_edit() {
    let mut session = demo_session().await;
    assert!(session.insights().is_none());

    let fim = &reference::standard_assessments()[1];
    session.select_assessment(0, fim).unwrap();
    session.set_score(0, Some(126.0)).unwrap();
    let report = session.insights().unwrap();
    assert_eq!(report.functional_level, FunctionalLevel::Independent);
    assert!(report.strengths.contains(&"Functional Independence Measure: Above expected level".to_string()));

    let row = &session.rows()[0];
    assert_eq!(row.percentile, Some(100));

    session.add_row().unwrap();
    let moca = &reference::standard_assessments()[2];
    session.select_assessment(1, moca).unwrap();
    session.set_score(1, Some(4.0)).unwrap();
    // (126 + 4) / 2 = 65
    let report = session.insights().unwrap();
    assert_eq!(report.average_score, 65.0);
    assert_eq!(report.functional_level, FunctionalLevel::ModifiedIndependent);
    assert!(report.has_priority_area("Cognitive Function"));
}

#[tokio::test]
async fn clearing_all_scores_keeps_the_previous_report() {
    let mut session = demo_session().await;
    let fim = &reference::standard_assessments()[1];
    session.select_assessment(0, fim).unwrap();
    session.set_score(0, Some(30.0)).unwrap();
    let before = session.insights().cloned();

    session.set_score(0, None).unwrap();
    assert_eq!(session.insights().cloned(), before);

    session.remove_row(0).unwrap();
    assert!(session.rows().is_empty());
    assert_eq!(session.insights().cloned(), before);
}

#[tokio::test]
async fn rows_cannot_be_added_while_one_is_incomplete() {
    let mut session = demo_session().await;
    assert!(matches!(session.add_row(), Err(SessionError::IncompleteAssessments)));

    let copm = &reference::standard_assessments()[0];
    session.select_assessment(0, copm).unwrap();
    assert!(matches!(session.add_row(), Err(SessionError::IncompleteAssessments)));

    session.set_score(0, Some(6.0)).unwrap();
    assert_eq!(session.add_row().unwrap(), 1);
}

#[tokio::test]
async fn row_operations_check_the_index() {
    let mut session = demo_session().await;
    assert!(matches!(session.set_score(3, Some(1.0)), Err(SessionError::NoSuchRow(3))));
    assert!(matches!(session.remove_row(1), Err(SessionError::NoSuchRow(1))));
    assert!(matches!(
        session.select_assessment_by_id(0, 99).await,
        Err(SessionError::Service(ServiceError::AssessmentNotFound(99)))
    ));
}

#[tokio::test]
async fn selecting_by_id_uses_the_catalog() {
    let mut session = demo_session().await;
    session.select_assessment_by_id(0, 4).await.unwrap();
    let row = &session.rows()[0];
    assert!(row.enabled);
    assert_eq!(row.assessment.code, "NHPT");
    assert_eq!(row.assessment.category.as_deref(), Some("Motor Skills"));

    session.set_notes(0, "Dominant hand only".to_string()).unwrap();
    assert_eq!(session.rows()[0].assessment.notes, "Dominant hand only");
    session.clear_notes(0).unwrap();
    assert!(session.rows()[0].assessment.notes.is_empty());
}

#[tokio::test]
async fn invalid_form_is_not_submitted() {
    let mut session = demo_session().await;
    let err = session.submit().await.unwrap_err();

    let SessionError::Invalid(errors) = err else {
        panic!("expected validation failure");
    };
    let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
    assert!(fields.contains(&"therapistName"));
    assert!(fields.contains(&"referralSource"));
    assert!(fields.contains(&"assessments[0].name"));
    assert!(errors.iter().all(|e| e.message == "Field is required!"));
}

#[tokio::test]
async fn negative_scores_fail_validation() {
    let mut session = demo_session().await;
    complete(&mut session);
    session.set_score(0, Some(-1.0)).unwrap();

    let errors = session.validate();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "assessments[0].score");
    assert_eq!(errors[0].message, "Score must be 0 or greater");
}

#[tokio::test]
async fn valid_controls_are_counted() {
    let mut session = demo_session().await;
    // Loading fills nine of the twelve required fields; the two optional
    // ones always count and the empty assessment row does not.
    assert_eq!(session.valid_control_count(), 9 + 2);

    complete(&mut session);
    assert_eq!(session.valid_control_count(), 15);
}

#[tokio::test]
async fn successful_submission_sends_payload_and_reloads() {
    let gateway = Arc::new(InMemoryEvaluationGateway::demo());
    let services = Services::with_gateway(gateway.clone());
    let mut session = EvaluationSession::open(services, "EVAL-009", "token").await;
    complete(&mut session);

    let receipt = session.submit().await.unwrap();
    assert!(receipt.success);
    assert_eq!(session.notice().map(|n| n.severity), Some(NoticeSeverity::Success));

    let sent = gateway.submissions();
    assert_eq!(sent.len(), 1);
    let request = &sent[0].evaluation_request;
    assert_eq!(sent[0].evaluation_id, "EVAL-009");
    assert_eq!(request.therapist_name, "Alex Morgan");
    assert_eq!(request.patient_gender, "Male");
    assert_eq!(request.patient_initials, "J");
    assert_eq!(request.assessments[0].assessment_code, "FIM");
    assert_eq!(request.assessments[0].score, Some(90.0));
    assert!(request.insights.is_some());

    // Reloading resets the clinician-entered fields.
    assert_eq!(session.fields().therapist_name.as_deref(), Some(""));
}

#[tokio::test]
async fn failed_submission_posts_generic_notice() {
    let services = Services::with_gateway(Arc::new(RejectingGateway));
    let mut session = EvaluationSession::open(services, "EVAL-001", "token").await;
    complete(&mut session);

    let err = session.submit().await.unwrap_err();
    assert!(matches!(err, SessionError::Service(ServiceError::Http(_))));
    assert_eq!(session.notice(), Some(&Notice::submit_failed()));
    assert_eq!(
        session.notice().unwrap().detail,
        "Failed to submit evaluation. Please try again."
    );
    assert_eq!(session.fields().therapist_name.as_deref(), Some("Alex Morgan"));
}

#[tokio::test]
async fn payload_without_insights_omits_the_key() {
    let session = demo_session().await;
    let json = serde_json::to_value(session.build_submission()).unwrap();
    assert!(json["evaluationRequest"].get("insights").is_none());
    assert_eq!(json["evaluationRequest"]["addition"], "A");
    assert_eq!(json["evaluationRequest"]["houseNumber"], "123");
}

#[tokio::test]
async fn unselected_rows_refuse_scores_and_notes() {
    let mut session = demo_session().await;

    assert!(matches!(session.set_score(0, Some(100.0)), Err(SessionError::RowNotSelected(0))));
    assert!(matches!(
        session.set_notes(0, "early note".to_string()),
        Err(SessionError::RowNotSelected(0))
    ));
    assert!(session.rows()[0].assessment.score.is_none());
    assert!(session.insights().is_none());

    let copm = &reference::standard_assessments()[0];
    session.select_assessment(0, copm).unwrap();
    session.set_score(0, Some(8.0)).unwrap();
    assert_eq!(session.insights().unwrap().total_assessments, 1);
}
