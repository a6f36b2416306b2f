//! Deployment run state shared by both admin deploy pages.
//!
//! DESIGN
//! ======
//! Transitions are plain methods on a value type so pages only wire signals
//! and spawn requests; the status/message/toast rules live here and are
//! tested without a browser.

#[cfg(test)]
#[path = "deploy_test.rs"]
mod deploy_test;

use crate::net::api::ApiError;
use crate::net::types::DeploySuccess;
use crate::state::toast::ToastKind;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeployStatus {
    #[default]
    Idle,
    Deploying,
    Success,
    Error,
}

impl DeployStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Deploying => "deploying",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeployState {
    pub status: DeployStatus,
    pub logs: Vec<String>,
    pub message: Option<String>,
    pub last_deployment: Option<String>,
}

impl DeployState {
    /// Enter `Deploying`. Returns `false` (and changes nothing) when a deploy
    /// is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.status == DeployStatus::Deploying {
            return false;
        }
        self.status = DeployStatus::Deploying;
        self.logs.clear();
        self.message = Some("Deploying...".to_owned());
        true
    }

    /// Record the outcome of a deploy call and return the toast to show.
    pub fn finish(&mut self, result: Result<DeploySuccess, ApiError>) -> (ToastKind, String) {
        match result {
            Ok(success) => {
                self.status = DeployStatus::Success;
                self.logs = success.logs;
                self.last_deployment = Some(success.timestamp);
                self.message = Some("Deployment successful".to_owned());
                (ToastKind::Success, "Deployment successful".to_owned())
            }
            Err(err) => {
                let text = deploy_failed_message(&err);
                self.status = DeployStatus::Error;
                self.logs = err.logs().to_vec();
                self.message = Some(text.clone());
                (ToastKind::Error, text)
            }
        }
    }

    pub fn is_deploying(&self) -> bool {
        self.status == DeployStatus::Deploying
    }
}

pub fn deploy_failed_message(err: &ApiError) -> String {
    format!("Deployment failed: {err}")
}
