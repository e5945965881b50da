use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use intake_session::{EvaluationSession, Services};

/// One open form. Mutations on the same evaluation are serialized by its
/// own lock.
pub type SharedSession = Arc<Mutex<EvaluationSession>>;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub services: Services,
    /// Open evaluation forms keyed by evaluation id. The map lock is only
    /// held to look a session up, insert or remove it.
    sessions: Arc<Mutex<HashMap<String, SharedSession>>>,
}

impl AppState {
    pub fn new(services: Services) -> Self {
        Self {
            services,
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub async fn session(&self, evaluation_id: &str) -> Option<SharedSession> {
        self.sessions.lock().await.get(evaluation_id).cloned()
    }

    /// Store a session, replacing any form already open for the evaluation.
    pub async fn insert_session(&self, evaluation_id: String, session: EvaluationSession) {
        self.sessions
            .lock()
            .await
            .insert(evaluation_id, Arc::new(Mutex::new(session)));
    }

    pub async fn close_session(&self, evaluation_id: &str) -> Option<SharedSession> {
        self.sessions.lock().await.remove(evaluation_id)
    }
}
