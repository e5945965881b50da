use std::collections::HashMap;
use std::sync::Mutex;

use intake_core::models::evaluation::{
    EvaluationDetail, EvaluationSubmission, EvaluationType, PatientAddress, SubmissionReceipt,
    TherapistType,
};

use crate::BoxFuture;
use crate::error::ServiceError;

/// The evaluation backend: loads the evaluation a form is opened for and
/// accepts the finished submission.
pub trait EvaluationGateway: Send + Sync {
    fn fetch_detail(
        &self,
        evaluation_id: &str,
        token: &str,
    ) -> BoxFuture<'_, Result<EvaluationDetail, ServiceError>>;

    fn submit(
        &self,
        submission: &EvaluationSubmission,
    ) -> BoxFuture<'_, Result<SubmissionReceipt, ServiceError>>;
}

/// Gateway that keeps everything in process. Submissions are recorded so
/// they can be inspected afterwards.
#[derive(Debug, Default)]
pub struct InMemoryEvaluationGateway {
    details: HashMap<String, EvaluationDetail>,
    /// Answers for ids not registered explicitly, with the id substituted.
    fallback: Option<EvaluationDetail>,
    submissions: Mutex<Vec<EvaluationSubmission>>,
}

impl InMemoryEvaluationGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// A gateway that answers every id with the demo patient.
    pub fn demo() -> Self {
        Self {
            fallback: Some(demo_evaluation("EVAL-001")),
            ..Self::default()
        }
    }

    pub fn with_detail(mut self, detail: EvaluationDetail) -> Self {
        self.details.insert(detail.evaluation_id.clone(), detail);
        self
    }

    pub fn submissions(&self) -> Vec<EvaluationSubmission> {
        self.submissions
            .lock()
            .map(|s| s.clone())
            .unwrap_or_default()
    }
}

impl EvaluationGateway for InMemoryEvaluationGateway {
    fn fetch_detail(
        &self,
        evaluation_id: &str,
        _token: &str,
    ) -> BoxFuture<'_, Result<EvaluationDetail, ServiceError>> {
        let result = match self.details.get(evaluation_id) {
            Some(detail) => Ok(detail.clone()),
            None => self
                .fallback
                .clone()
                .map(|mut detail| {
                    detail.evaluation_id = evaluation_id.to_string();
                    detail
                })
                .ok_or_else(|| ServiceError::EvaluationNotFound(evaluation_id.to_string())),
        };
        Box::pin(async move { result })
    }

    fn submit(
        &self,
        submission: &EvaluationSubmission,
    ) -> BoxFuture<'_, Result<SubmissionReceipt, ServiceError>> {
        let submission = submission.clone();
        Box::pin(async move {
            let mut submissions = self
                .submissions
                .lock()
                .map_err(|e| ServiceError::Http(format!("submission log poisoned: {e}")))?;
            submissions.push(submission.clone());
            tracing::info!(
                evaluation_id = %submission.evaluation_id,
                count = submissions.len(),
                "recorded evaluation submission"
            );
            Ok(SubmissionReceipt {
                success: true,
                message: "Evaluation submitted successfully".to_string(),
                data: serde_json::json!({ "id": submissions.len() }),
            })
        })
    }
}

/// Gateway talking JSON over HTTP to an evaluation backend.
///
/// `GET {base}/evaluations/{id}` returns the detail; `POST {base}/evaluations`
/// accepts the submission body. Requests run on the blocking pool.
#[derive(Clone)]
pub struct HttpEvaluationGateway {
    base_url: String,
    agent: ureq::Agent,
}

impl HttpEvaluationGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            agent: ureq::Agent::new_with_defaults(),
        }
    }

    pub fn detail_url(&self, evaluation_id: &str) -> String {
        format!("{}/evaluations/{evaluation_id}", self.base_url)
    }

    pub fn submit_url(&self) -> String {
        format!("{}/evaluations", self.base_url)
    }
}

impl EvaluationGateway for HttpEvaluationGateway {
    fn fetch_detail(
        &self,
        evaluation_id: &str,
        token: &str,
    ) -> BoxFuture<'_, Result<EvaluationDetail, ServiceError>> {
        let url = self.detail_url(evaluation_id);
        let evaluation_id = evaluation_id.to_string();
        let auth = format!("Bearer {token}");
        let agent = self.agent.clone();

        Box::pin(async move {
            let body = tokio::task::spawn_blocking(move || -> Result<String, ServiceError> {
                let mut response = match agent.get(&url).header("Authorization", &auth).call() {
                    Ok(response) => response,
                    Err(ureq::Error::StatusCode(404)) => {
                        return Err(ServiceError::EvaluationNotFound(evaluation_id));
                    }
                    Err(e) => return Err(e.into()),
                };
                Ok(response.body_mut().read_to_string()?)
            })
            .await??;

            Ok(serde_json::from_str(&body)?)
        })
    }

    fn submit(
        &self,
        submission: &EvaluationSubmission,
    ) -> BoxFuture<'_, Result<SubmissionReceipt, ServiceError>> {
        let url = self.submit_url();
        let payload = serde_json::to_string(submission);
        let agent = self.agent.clone();

        Box::pin(async move {
            let payload = payload?;
            tracing::debug!(%url, bytes = payload.len(), "posting evaluation");

            let body = tokio::task::spawn_blocking(move || -> Result<String, ServiceError> {
                let mut response = agent
                    .post(&url)
                    .header("Content-Type", "application/json")
                    .send(payload)?;
                Ok(response.body_mut().read_to_string()?)
            })
            .await??;

            let data = if body.trim().is_empty() {
                serde_json::Value::Null
            } else {
                serde_json::from_str(&body)?
            };

            Ok(SubmissionReceipt {
                success: true,
                message: "Evaluation submitted successfully".to_string(),
                data,
            })
        })
    }
}

/// The demo patient used when no backend is configured.
pub fn demo_evaluation(evaluation_id: &str) -> EvaluationDetail {
    EvaluationDetail {
        evaluation_id: evaluation_id.to_string(),
        patient_id: 12345,
        patient_client_id: 67890,
        clinic_client_id: 11111,
        clinic_id: 1,
        full_name: "John Doe".to_string(),
        initial: "J".to_string(),
        last_name: "Doe".to_string(),
        gender: "Male".to_string(),
        birth_date: jiff::civil::date(1980, 5, 15),
        evaluation_date: jiff::Timestamp::now(),
        therapist_type: TherapistType::Occupational,
        evaluation_type: EvaluationType::Initial,
        is_complete: false,
        clinic_name: "Springfield Rehabilitation Center".to_string(),
        clinic_license: 12345678,
        default_patient_address: PatientAddress {
            address_id: 1,
            postal_code: "12345".to_string(),
            house_number: 123,
            house_number_addition: Some("A".to_string()),
            full_address: "123A Main Street, Springfield, IL 12345".to_string(),
            street: "Main Street".to_string(),
            city: "Springfield".to_string(),
            is_default: true,
            kind: 1,
            latitude: 39.7817,
            longitude: -89.6501,
        },
    }
}
