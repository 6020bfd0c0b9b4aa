//! Context fixtures shared by unit tests across modules

use super::{
    Context, ExecutionType, InMemoryStore, PauseRequest, Project, RunContext, RunControl,
    ServerContext, StopResponse, VersionedContext,
};
use serde_json::json;
use std::sync::{Arc, Mutex};

/// Run control that records every call
#[derive(Debug, Default)]
pub(crate) struct RecordingRunControl {
    pub stops: Mutex<Vec<Option<StopResponse>>>,
    pub pauses: Mutex<Vec<PauseRequest>>,
}

impl RunControl for RecordingRunControl {
    fn stop(&self, response: Option<StopResponse>) {
        self.stops.lock().unwrap().push(response);
    }

    fn pause(&self, request: PauseRequest) {
        self.pauses.lock().unwrap().push(request);
    }
}

/// A begin-execution context with a couple of props and an in-memory store
pub(crate) fn sample_context() -> Context {
    let props_value = json!({ "channel": "#general", "text": "hello" });

    Context {
        execution_type: ExecutionType::Begin,
        auth: Some(json!({ "access_token": "xoxb-123" })),
        props_value: props_value.as_object().cloned().unwrap_or_default(),
        store: Arc::new(InMemoryStore::new()),
        project: Project {
            id: "proj_1".to_string(),
            external_id: Some("ext_1".to_string()),
        },
        server: ServerContext {
            api_url: "http://localhost:3000/api/".to_string(),
            public_url: "https://cloud.example.com/".to_string(),
            token: "engine-token".to_string(),
        },
        run: RunContext::new("run_1", Arc::new(RecordingRunControl::default())),
        webhook_url: None,
        payload: None,
    }
}

/// The sample context as a V1 callback argument
pub(crate) fn sample_v1() -> VersionedContext {
    VersionedContext::V1(sample_context())
}
