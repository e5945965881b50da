use std::sync::Arc;

use intake_services::address::{AddressDirectory, StaticAddressDirectory};
use intake_services::catalog::{AssessmentCatalog, StaticAssessmentCatalog};
use intake_services::evaluation::{EvaluationGateway, InMemoryEvaluationGateway};

/// The data-access handles a session works through.
#[derive(Clone)]
pub struct Services {
    pub addresses: Arc<dyn AddressDirectory>,
    pub catalog: Arc<dyn AssessmentCatalog>,
    pub evaluations: Arc<dyn EvaluationGateway>,
}

impl Services {
    /// Static lookups with the given evaluation backend.
    pub fn with_gateway(evaluations: Arc<dyn EvaluationGateway>) -> Self {
        Self {
            addresses: Arc::new(StaticAddressDirectory),
            catalog: Arc::new(StaticAssessmentCatalog::default()),
            evaluations,
        }
    }

    /// Everything in process, answering with the demo patient.
    pub fn demo() -> Self {
        Self::with_gateway(Arc::new(InMemoryEvaluationGateway::demo()))
    }
}
