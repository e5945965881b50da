use serde::Serialize;

use intake_core::models::address::{compose_address, AddressOptions, AddressParts};
use intake_core::models::assessment::{AssessmentDefinition, ScoredAssessment};
use intake_core::models::evaluation::{
    AssessmentSubmission, EvaluationDetail, EvaluationRequest, EvaluationStatus,
    EvaluationSubmission, EvaluationType, SubmissionReceipt,
};
use intake_core::models::form::{EvaluationFields, FieldUpdate, BIRTH_DATE_FORMAT};
use intake_core::models::insight::InsightReport;
use intake_insights::derive_insights;

use crate::error::SessionError;
use crate::notice::Notice;
use crate::row::AssessmentRow;
use crate::services::Services;
use crate::validation::{self, FieldError};

/// Postal codes are looked up only once they reach this length.
const POSTAL_CODE_LEN: usize = 5;

/// State of one evaluation form, from loading to submission.
pub struct EvaluationSession {
    services: Services,
    evaluation_id: String,
    token: String,
    detail: Option<EvaluationDetail>,
    status: Option<EvaluationStatus>,
    show_diagnosis_code: bool,
    fields: EvaluationFields,
    address_options: AddressOptions,
    rows: Vec<AssessmentRow>,
    insights: Option<InsightReport>,
    notice: Option<Notice>,
}

/// Read-only view of a session for rendering or transport.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub evaluation_id: String,
    pub status: Option<EvaluationStatus>,
    pub show_diagnosis_code: bool,
    pub fields: EvaluationFields,
    /// Today's age from the birth date control; `None` when it is empty
    /// or unparseable.
    pub patient_age: Option<u32>,
    pub address_options: AddressOptions,
    pub assessments: Vec<AssessmentRow>,
    pub insights: Option<InsightReport>,
    pub notice: Option<Notice>,
    pub valid_controls: usize,
    pub errors: Vec<FieldError>,
}

impl EvaluationSession {
    /// An unloaded form with a single empty assessment row.
    pub fn new(services: Services, evaluation_id: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            services,
            evaluation_id: evaluation_id.into(),
            token: token.into(),
            detail: None,
            status: None,
            show_diagnosis_code: false,
            fields: EvaluationFields::default(),
            address_options: AddressOptions::default(),
            rows: vec![AssessmentRow::default()],
            insights: None,
            notice: None,
        }
    }

    /// Create a session and load its evaluation. A failed load still
    /// yields the session, carrying the error notice.
    pub async fn open(services: Services, evaluation_id: impl Into<String>, token: impl Into<String>) -> Self {
        let mut session = Self::new(services, evaluation_id, token);
        if let Err(e) = session.load().await {
            tracing::warn!(evaluation_id = %session.evaluation_id, error = %e, "evaluation failed to load");
        }
        session
    }

    pub fn evaluation_id(&self) -> &str {
        &self.evaluation_id
    }

    pub fn detail(&self) -> Option<&EvaluationDetail> {
        self.detail.as_ref()
    }

    pub fn fields(&self) -> &EvaluationFields {
        &self.fields
    }

    pub fn address_options(&self) -> &AddressOptions {
        &self.address_options
    }

    pub fn rows(&self) -> &[AssessmentRow] {
        &self.rows
    }

    pub fn insights(&self) -> Option<&InsightReport> {
        self.insights.as_ref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    /// Fetch the evaluation and populate the form from it.
    pub async fn load(&mut self) -> Result<(), SessionError> {
        let detail = match self
            .services
            .evaluations
            .fetch_detail(&self.evaluation_id, &self.token)
            .await
        {
            Ok(detail) => detail,
            Err(e) => {
                self.notice = Some(Notice::load_failed());
                return Err(e.into());
            }
        };

        self.populate(&detail);

        let address = &detail.default_patient_address;
        self.generate_address(AddressOptions {
            street: Some(address.street.clone()),
            city: Some(address.city.clone()),
            house_number: Some(address.house_number.to_string()),
            house_number_addition: address.house_number_addition.clone(),
            ..AddressOptions::default()
        });

        self.status = Some(EvaluationStatus::from_complete(detail.is_complete));
        if detail.evaluation_type == EvaluationType::Initial {
            self.show_diagnosis_code = true;
            self.fields.diagnosis_code = Some(String::new());
        }

        tracing::info!(
            evaluation_id = %self.evaluation_id,
            status = ?self.status,
            "evaluation loaded"
        );
        self.detail = Some(detail);
        Ok(())
    }

    fn populate(&mut self, detail: &EvaluationDetail) {
        let address = &detail.default_patient_address;
        self.fields = EvaluationFields {
            clinic_name: Some(detail.clinic_name.clone()),
            clinic_license: Some(detail.clinic_license.to_string()),
            therapist_name: Some(String::new()),
            patient_name: Some(detail.full_name.clone()),
            patient_id: Some(detail.patient_id.to_string()),
            client_id: Some(detail.patient_client_id.to_string()),
            birth_date: Some(detail.birth_date.strftime(BIRTH_DATE_FORMAT).to_string()),
            postal_code: Some(address.postal_code.clone()),
            house_number: Some(address.house_number.to_string()),
            addition: address.house_number_addition.clone(),
            address: Some(address.full_address.clone()),
            referring_physician: Some(String::new()),
            referral_source: None,
            diagnosis_code: None,
            patient_gender: Some(detail.gender.clone()),
            patient_initials: Some(detail.initial.clone()),
            city: Some(address.city.clone()),
            street: Some(address.street.clone()),
        };
    }

    pub fn update_fields(&mut self, update: FieldUpdate) {
        self.fields.apply(update);
    }

    /// A new postal code invalidates house number and addition. Complete
    /// codes are looked up to offer the house numbers on that street.
    pub async fn change_postal_code(&mut self, postal_code: Option<String>) -> Result<(), SessionError> {
        self.fields.postal_code = postal_code;
        self.fields.house_number = None;
        self.fields.addition = None;
        self.address_options = AddressOptions::default();

        let Some(code) = self
            .fields
            .postal_code
            .clone()
            .filter(|c| c.chars().count() == POSTAL_CODE_LEN)
        else {
            self.generate_address(AddressOptions::default());
            return Ok(());
        };

        let lookup = self.services.addresses.house_numbers(&code.to_uppercase()).await?;
        tracing::debug!(postal_code = %code, found = lookup.house_numbers.len(), "postal code looked up");

        self.generate_address(AddressOptions {
            house_numbers: lookup.house_numbers.iter().map(u32::to_string).collect(),
            street: Some(lookup.street),
            city: Some(lookup.city),
            ..AddressOptions::default()
        });
        Ok(())
    }

    /// A new house number invalidates the addition and offers the
    /// additions known at that number.
    pub async fn change_house_number(&mut self, house_number: Option<String>) -> Result<(), SessionError> {
        self.fields.house_number = house_number;
        self.fields.addition = None;

        let mut options = AddressOptions {
            house_number: self.fields.house_number.clone(),
            house_number_addition: None,
            house_number_additions: Vec::new(),
            ..self.address_options.clone()
        };

        if let (Some(number), Some(code)) = (&self.fields.house_number, &self.fields.postal_code) {
            let uids = self.services.addresses.address_uids(code, number).await?;
            options.house_number_additions = uids.into_iter().filter_map(|u| u.house_number_add).collect();
        }

        self.generate_address(options);
        Ok(())
    }

    pub fn change_addition(&mut self, addition: Option<String>) {
        self.fields.addition = addition.clone();
        let options = AddressOptions {
            house_number_addition: addition,
            ..self.address_options.clone()
        };
        self.generate_address(options);
    }

    /// Store the address options and recompose the address line and the
    /// address parts of the submission from them.
    fn generate_address(&mut self, mut options: AddressOptions) {
        let composed = compose_address(&AddressParts {
            street: options.street.as_deref(),
            house_number: options.house_number.as_deref(),
            house_number_addition: options.house_number_addition.as_deref(),
            postal_code: self.fields.postal_code.as_deref(),
        });
        options.address = Some(composed.clone());

        self.fields.address = Some(composed);
        self.fields.city = Some(options.city.clone().unwrap_or_default());
        self.fields.street = Some(options.street.clone().unwrap_or_default());
        self.fields.house_number = options.house_number.clone();
        self.fields.addition = options.house_number_addition.clone();
        self.address_options = options;
    }

    /// Append an empty row. Refused while any existing row is incomplete.
    pub fn add_row(&mut self) -> Result<usize, SessionError> {
        if !self.rows.iter().all(AssessmentRow::is_valid) {
            return Err(SessionError::IncompleteAssessments);
        }
        self.rows.push(AssessmentRow::default());
        Ok(self.rows.len() - 1)
    }

    pub fn remove_row(&mut self, index: usize) -> Result<(), SessionError> {
        if index >= self.rows.len() {
            return Err(SessionError::NoSuchRow(index));
        }
        self.rows.remove(index);
        self.recompute_insights();
        Ok(())
    }

    pub fn select_assessment(&mut self, index: usize, definition: &AssessmentDefinition) -> Result<(), SessionError> {
        self.row_mut(index)?.select(definition);
        self.recompute_insights();
        Ok(())
    }

    /// Look the instrument up in the catalog and select it for a row.
    pub async fn select_assessment_by_id(&mut self, index: usize, assessment_id: u32) -> Result<(), SessionError> {
        self.row_mut(index)?;
        let definition = self.services.catalog.get(assessment_id).await?;
        self.select_assessment(index, &definition)
    }

    /// Score and notes stay locked until an instrument is selected.
    pub fn set_score(&mut self, index: usize, score: Option<f64>) -> Result<(), SessionError> {
        self.selected_row_mut(index)?.set_score(score);
        self.recompute_insights();
        Ok(())
    }

    pub fn set_notes(&mut self, index: usize, notes: String) -> Result<(), SessionError> {
        self.selected_row_mut(index)?.assessment.notes = notes;
        Ok(())
    }

    pub fn clear_notes(&mut self, index: usize) -> Result<(), SessionError> {
        self.set_notes(index, String::new())
    }

    fn row_mut(&mut self, index: usize) -> Result<&mut AssessmentRow, SessionError> {
        self.rows.get_mut(index).ok_or(SessionError::NoSuchRow(index))
    }

    fn selected_row_mut(&mut self, index: usize) -> Result<&mut AssessmentRow, SessionError> {
        let row = self.row_mut(index)?;
        if !row.enabled {
            return Err(SessionError::RowNotSelected(index));
        }
        Ok(row)
    }

    /// Rederive insights from the current rows. With nothing scored the
    /// previous report stays in place.
    fn recompute_insights(&mut self) {
        let assessments = self.scored_assessments();
        if let Some(report) = derive_insights(&assessments) {
            tracing::debug!(
                average = report.average_score,
                level = %report.functional_level,
                "insights recomputed"
            );
            self.insights = Some(report);
        }
    }

    pub fn scored_assessments(&self) -> Vec<ScoredAssessment> {
        self.rows.iter().map(|r| r.assessment.clone()).collect()
    }

    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = validation::validate_fields(&self.fields);
        errors.extend(validation::validate_rows(&self.rows));
        errors
    }

    pub fn valid_control_count(&self) -> usize {
        validation::valid_control_count(&self.fields, &self.rows)
    }

    /// The payload [`submit`](Self::submit) sends.
    pub fn build_submission(&self) -> EvaluationSubmission {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();
        let f = &self.fields;

        EvaluationSubmission {
            evaluation_request: EvaluationRequest {
                clinic_name: text(&f.clinic_name),
                clinic_license: text(&f.clinic_license),
                therapist_name: text(&f.therapist_name),
                patient_name: text(&f.patient_name),
                patient_gender: text(&f.patient_gender),
                patient_initials: text(&f.patient_initials),
                patient_id: text(&f.patient_id),
                client_id: text(&f.client_id),
                birth_date: text(&f.birth_date),
                address: text(&f.address),
                house_number: text(&f.house_number),
                city: text(&f.city),
                street: text(&f.street),
                postal_code: text(&f.postal_code),
                addition: text(&f.addition),
                referral_source: f.referral_source.clone(),
                referring_physician: text(&f.referring_physician),
                diagnosis_code: f.diagnosis_code.clone(),
                assessments: self
                    .rows
                    .iter()
                    .map(|row| AssessmentSubmission {
                        assessment_name: row.assessment.name.clone(),
                        assessment_code: row.assessment.code.clone(),
                        score: row.assessment.score,
                        notes: row.assessment.notes.clone(),
                    })
                    .collect(),
                insights: self.insights.clone(),
            },
            evaluation_id: self.evaluation_id.clone(),
        }
    }

    /// Submit the form. Invalid forms are not sent. After a successful
    /// submission the evaluation is reloaded.
    pub async fn submit(&mut self) -> Result<SubmissionReceipt, SessionError> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(SessionError::Invalid(errors));
        }

        let submission = self.build_submission();
        match self.services.evaluations.submit(&submission).await {
            Ok(receipt) => {
                tracing::info!(evaluation_id = %self.evaluation_id, "evaluation submitted");
                self.notice = Some(Notice::submitted());
                if let Err(e) = self.load().await {
                    tracing::warn!(error = %e, "reload after submission failed");
                }
                Ok(receipt)
            }
            Err(e) => {
                tracing::error!(evaluation_id = %self.evaluation_id, error = %e, "submission failed");
                self.notice = Some(Notice::submit_failed());
                Err(e.into())
            }
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            evaluation_id: self.evaluation_id.clone(),
            status: self.status,
            show_diagnosis_code: self.show_diagnosis_code,
            fields: self.fields.clone(),
            patient_age: self
                .fields
                .patient_age(jiff::Zoned::now().date())
                .ok()
                .flatten(),
            address_options: self.address_options.clone(),
            assessments: self.rows.clone(),
            insights: self.insights.clone(),
            notice: self.notice.clone(),
            valid_controls: self.valid_control_count(),
            errors: self.validate(),
        }
    }
}
