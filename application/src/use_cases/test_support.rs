//! Fakes shared by use case tests

use crate::ports::assessment_logger::{AssessmentEvent, AssessmentLogger};
use serde_json::Value;
use std::sync::Mutex;

/// Logger that keeps every event in memory
#[derive(Default)]
pub(crate) struct RecordingLogger {
    events: Mutex<Vec<(&'static str, Value)>>,
}

impl RecordingLogger {
    pub(crate) fn events(&self) -> Vec<(&'static str, Value)> {
        self.events.lock().unwrap().clone()
    }
}

impl AssessmentLogger for RecordingLogger {
    fn log(&self, event: AssessmentEvent) {
        self.events
            .lock()
            .unwrap()
            .push((event.event_type, event.payload));
    }
}
