//! Upload state and its transitions.
//!
//! [`UploadState`] holds the four fields the page renders from: the selected
//! file, the loading flag, the error message and the result image. Error and
//! result are never set together.
//!
//! An upload is split into [`UploadState::begin_upload`] and
//! [`UploadState::settle`] so the state can live in a reactive signal while
//! the request runs elsewhere. Each started request gets a
//! [`RequestTicket`]; settling with a ticket that is no longer current is a
//! no-op, which is how cancellation is expressed.

use crate::backend::{detect, DetectionBackend};
use crate::config::{RetriggerPolicy, NO_FILE_MESSAGE};
use crate::error::UploadResult;

/// Identifies one in-flight request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestTicket(u64);

/// Outcome of [`UploadState::begin_upload`].
#[derive(Debug, Clone, PartialEq)]
pub enum UploadStart<F> {
    /// No file selected; the error is set and nothing should be sent.
    Rejected,
    /// A request is already in flight and the policy is to ignore re-triggers.
    Ignored,
    /// A request should be sent for `file` and settled with `ticket`.
    Started {
        ticket: RequestTicket,
        file: F,
        /// Request this one replaces; the caller should abort it.
        superseded: Option<RequestTicket>,
    },
}

/// Transient per-page upload state.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadState<F> {
    selected: Option<F>,
    loading: bool,
    error: Option<String>,
    result: Option<String>,
    generation: u64,
}

impl<F> Default for UploadState<F> {
    fn default() -> Self {
        Self {
            selected: None,
            loading: false,
            error: None,
            result: None,
            generation: 0,
        }
    }
}

impl<F> UploadState<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&F> {
        self.selected.as_ref()
    }

    pub fn has_selection(&self) -> bool {
        self.selected.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Data URI of the last detection image.
    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    /// Ticket of the request currently in flight, if any.
    pub fn in_flight(&self) -> Option<RequestTicket> {
        self.loading.then_some(RequestTicket(self.generation))
    }

    /// Handle a file-picker change: keep the first file, clear error and result.
    ///
    /// An empty list clears the selection. A pending request is cancelled and
    /// its ticket returned so the caller can abort it.
    pub fn select<I>(&mut self, files: I) -> Option<RequestTicket>
    where
        I: IntoIterator<Item = F>,
    {
        let cancelled = self.cancel();

        self.selected = files.into_iter().next();
        self.error = None;
        self.result = None;

        cancelled
    }

    /// Drop the in-flight request, if any. Its settlement will be ignored.
    pub fn cancel(&mut self) -> Option<RequestTicket> {
        let ticket = self.in_flight()?;
        log::debug!("Cancelling upload request {:?}", ticket);
        self.generation += 1;
        self.loading = false;
        Some(ticket)
    }

    /// Apply the outcome of the request identified by `ticket`.
    ///
    /// Returns `false` when the ticket is stale and nothing changed.
    pub fn settle(&mut self, ticket: RequestTicket, outcome: UploadResult<String>) -> bool {
        if self.in_flight() != Some(ticket) {
            log::debug!("Ignoring settlement of stale request {:?}", ticket);
            return false;
        }

        match outcome {
            Ok(data_uri) => {
                log::info!("Image set successfully");
                self.error = None;
                self.result = Some(data_uri);
            }
            Err(err) => {
                log::error!("Upload error: {}", err);
                self.result = None;
                self.error = Some(err.user_message());
            }
        }

        self.loading = false;
        true
    }
}

impl<F: Clone> UploadState<F> {
    /// Handle an upload trigger.
    ///
    /// Without a selection the precondition error is set and the loading flag
    /// is left alone. Otherwise loading is raised, error and result are
    /// cleared, and a fresh ticket is issued.
    pub fn begin_upload(&mut self, policy: RetriggerPolicy) -> UploadStart<F> {
        let Some(file) = self.selected.clone() else {
            self.result = None;
            self.error = Some(NO_FILE_MESSAGE.to_string());
            return UploadStart::Rejected;
        };

        let superseded = match (self.in_flight(), policy) {
            (Some(_), RetriggerPolicy::Ignore) => return UploadStart::Ignored,
            (pending, _) => pending,
        };

        self.generation += 1;
        self.loading = true;
        self.error = None;
        self.result = None;

        log::info!("Sending request to backend...");
        UploadStart::Started {
            ticket: RequestTicket(self.generation),
            file,
            superseded,
        }
    }

    /// Run a whole upload against `backend`: begin, post, settle.
    ///
    /// Holds `&mut self` across the request, so this is for callers that own
    /// the state outright (CLI, tests). The UI drives the two halves itself.
    pub async fn upload<B>(&mut self, backend: &B, policy: RetriggerPolicy)
    where
        B: DetectionBackend<File = F>,
    {
        if let UploadStart::Started { ticket, file, .. } = self.begin_upload(policy) {
            let outcome = detect(backend, &file).await;
            self.settle(ticket, outcome);
        }
    }
}
