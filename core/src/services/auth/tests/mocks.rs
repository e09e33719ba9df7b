//! Mock implementations for testing the authentication service

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::domain::value_objects::Challenge;
use crate::errors::ProviderError;
use crate::services::verification::VerificationProvider;

pub const ACCEPTED_CODE: &str = "1234";

/// Provider double recording every call it receives
pub struct RecordingProvider {
    pub started: Mutex<Vec<(u64, String)>>,
    pub checked: Mutex<Vec<(String, String)>>,
    pub cancelled: Mutex<Vec<String>>,
    pub fail_start: Option<ProviderError>,
    pub fail_cancel: bool,
    next_id: AtomicUsize,
}

impl RecordingProvider {
    pub fn new() -> Self {
        Self {
            started: Mutex::new(Vec::new()),
            checked: Mutex::new(Vec::new()),
            cancelled: Mutex::new(Vec::new()),
            fail_start: None,
            fail_cancel: false,
            next_id: AtomicUsize::new(1),
        }
    }

    pub fn failing_start(message: &str) -> Self {
        Self {
            fail_start: Some(ProviderError::new(message).with_status("3")),
            ..Self::new()
        }
    }

    pub fn start_calls(&self) -> usize {
        self.started.lock().unwrap().len()
    }

    pub fn check_calls(&self) -> usize {
        self.checked.lock().unwrap().len()
    }
}

#[async_trait]
impl VerificationProvider for RecordingProvider {
    async fn start(&self, number: u64, brand: &str) -> Result<Challenge, ProviderError> {
        self.started
            .lock()
            .unwrap()
            .push((number, brand.to_string()));
        if let Some(error) = &self.fail_start {
            return Err(error.clone());
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        Ok(Challenge::new(format!("req-{}", id)))
    }

    async fn check(&self, challenge: &Challenge, code: &str) -> Result<(), ProviderError> {
        self.checked
            .lock()
            .unwrap()
            .push((challenge.request_id().to_string(), code.to_string()));
        if code == ACCEPTED_CODE {
            Ok(())
        } else {
            Err(ProviderError::new(
                "The code provided does not match the expected value",
            )
            .with_status("16"))
        }
    }

    async fn cancel(&self, challenge: &Challenge) -> Result<(), ProviderError> {
        self.cancelled
            .lock()
            .unwrap()
            .push(challenge.request_id().to_string());
        if self.fail_cancel {
            Err(ProviderError::new("Verification request can't be cancelled now").with_status("19"))
        } else {
            Ok(())
        }
    }
}
