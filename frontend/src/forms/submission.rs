use std::rc::Rc;

use async_trait::async_trait;
use futures::future::{select, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use log::{info, warn};
use serde::Serialize;
use thiserror::Error;
use yew::prelude::*;

use crate::config;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewsletterPayload {
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    Contact(ContactPayload),
    Newsletter(NewsletterPayload),
}

impl Submission {
    pub fn path(&self) -> &'static str {
        match self {
            Submission::Contact(_) => "/contact",
            Submission::Newsletter(_) => "/newsletter",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ack;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Could not reach the server: {0}")]
    Network(String),
    #[error("The server took too long to answer")]
    Timeout,
    #[error("The server rejected the submission (status {status})")]
    Rejected { status: u16 },
}

impl SubmitError {
    /// Network trouble may clear on its own; a rejection will not.
    pub fn is_transient(&self) -> bool {
        matches!(self, SubmitError::Network(_) | SubmitError::Timeout)
    }
}

#[async_trait(?Send)]
pub trait Submitter {
    async fn submit(&self, submission: &Submission) -> Result<Ack, SubmitError>;

    /// Where submissions end up, for logs.
    fn target(&self) -> String;
}

/// Stands in for a backend: waits, then always succeeds.
#[derive(Clone, Copy, Debug)]
pub struct SimulatedSubmitter {
    pub contact_delay_ms: u32,
    pub newsletter_delay_ms: u32,
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self {
            contact_delay_ms: config::CONTACT_SIMULATED_DELAY_MS,
            newsletter_delay_ms: config::NEWSLETTER_SIMULATED_DELAY_MS,
        }
    }
}

#[async_trait(?Send)]
impl Submitter for SimulatedSubmitter {
    async fn submit(&self, submission: &Submission) -> Result<Ack, SubmitError> {
        let delay = match submission {
            Submission::Contact(_) => self.contact_delay_ms,
            Submission::Newsletter(_) => self.newsletter_delay_ms,
        };
        info!("Simulating {} submission ({}ms)", submission.path(), delay);
        TimeoutFuture::new(delay).await;
        Ok(Ack)
    }

    fn target(&self) -> String {
        "local simulation".to_string()
    }
}

#[derive(Clone, Debug)]
pub struct HttpSubmitter {
    pub endpoint: String,
    pub timeout_ms: u32,
}

impl HttpSubmitter {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout_ms: config::SUBMIT_TIMEOUT_MS,
        }
    }

    async fn post(&self, submission: &Submission) -> Result<Ack, SubmitError> {
        let url = format!("{}{}", self.endpoint, submission.path());
        let request = match submission {
            Submission::Contact(payload) => Request::post(&url).json(payload),
            Submission::Newsletter(payload) => Request::post(&url).json(payload),
        }
        .map_err(|e| SubmitError::Network(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;

        if response.ok() {
            Ok(Ack)
        } else {
            Err(SubmitError::Rejected { status: response.status() })
        }
    }
}

#[async_trait(?Send)]
impl Submitter for HttpSubmitter {
    async fn submit(&self, submission: &Submission) -> Result<Ack, SubmitError> {
        let post = Box::pin(self.post(submission));
        let timeout = Box::pin(TimeoutFuture::new(self.timeout_ms));
        match select(post, timeout).await {
            Either::Left((result, _)) => {
                if let Err(e) = &result {
                    warn!("Submission to {} failed: {}", submission.path(), e);
                }
                result
            }
            Either::Right(_) => {
                warn!("Submission to {} timed out", submission.path());
                Err(SubmitError::Timeout)
            }
        }
    }

    fn target(&self) -> String {
        self.endpoint.clone()
    }
}

/// Shared handle the forms pull out of context. Compared by pointer so
/// components only re-render when a different submitter is provided.
#[derive(Clone)]
pub struct SubmitterHandle(pub Rc<dyn Submitter>);

impl SubmitterHandle {
    pub fn new(submitter: impl Submitter + 'static) -> Self {
        Self(Rc::new(submitter))
    }

    /// An HTTP submitter when an endpoint is configured, otherwise the
    /// local simulation.
    pub fn from_config() -> Self {
        let handle = Self::for_endpoint(config::submission_endpoint());
        info!("Form submissions go to {}", handle.0.target());
        handle
    }

    pub fn for_endpoint(endpoint: Option<String>) -> Self {
        match endpoint {
            Some(endpoint) => Self::new(HttpSubmitter::new(endpoint)),
            None => Self::new(SimulatedSubmitter::default()),
        }
    }
}

impl PartialEq for SubmitterHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[hook]
pub fn use_submitter() -> SubmitterHandle {
    use_context::<SubmitterHandle>().unwrap_or_else(|| SubmitterHandle::new(SimulatedSubmitter::default()))
}
