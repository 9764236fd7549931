use std::time::Duration;

use log::{ debug, info };

use crate::errors::{ RtlForgeError, RtlForgeResult };
use crate::models::artifact::GenerationResult;
use crate::models::common::OperationMode;
use crate::models::request::GenerationRequest;
use crate::models::state::AppState;
use crate::traits::design_assistant::DesignAssistant;

/// How often the progress message advances while a request is in flight
pub const PROGRESS_INTERVAL: Duration = Duration::from_millis(2500);

const GENERATE_MESSAGES: &[&str] = &[
    "Analyzing requirements...",
    "Synthesizing RTL...",
    "Building UVM environment...",
    "Generating assertions & coverage...",
    "Writing simulation scripts...",
    "Finalizing documentation...",
];

const EXPLORE_MESSAGES: &[&str] = &[
    "Considering architectural trade-offs...",
    "Evaluating performance characteristics...",
    "Analyzing area and power constraints...",
    "Formulating design proposals...",
    "Comparing implementation strategies...",
];

/// Rotation of cosmetic progress messages for `mode`
pub fn progress_messages(mode: OperationMode) -> &'static [&'static str] {
    match mode {
        OperationMode::Generate => GENERATE_MESSAGES,
        OperationMode::Explore => EXPLORE_MESSAGES,
    }
}

/// Identifies one submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

/// Issues monotonically increasing tickets; only the latest one is current
#[derive(Debug, Default)]
pub struct RequestTracker {
    latest: u64,
}

impl RequestTracker {
    pub fn issue(&mut self) -> RequestTicket {
        self.latest += 1;
        RequestTicket(self.latest)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.latest
    }
}

/// Form state plus the outcome of the latest submission
#[derive(Debug, Default)]
pub struct Session {
    pub state: AppState,
    pub is_loading: bool,
    pub error: Option<String>,
    pub output: Option<GenerationResult>,
    pub active_tab: Option<String>,
    tracker: RequestTracker,
}

impl Session {
    pub fn new(state: AppState) -> Self {
        Self { state, ..Self::default() }
    }

    /// Start a submission.
    ///
    /// Returns `None` while another request is outstanding or when the
    /// description is blank. Otherwise clears the previous outcome.
    pub fn begin_submission(&mut self) -> Option<(RequestTicket, GenerationRequest)> {
        if self.is_loading {
            debug!("Submission ignored: a request is already in flight");
            return None;
        }
        let request = self.state.to_request().ok()?;

        self.is_loading = true;
        self.error = None;
        self.output = None;
        let ticket = self.tracker.issue();
        info!("Submitting {} request #{}", request.mode, ticket.0);
        Some((ticket, request))
    }

    /// Apply the outcome of the submission identified by `ticket`.
    ///
    /// Outcomes for superseded tickets are discarded. Returns whether the
    /// outcome was applied.
    pub fn complete(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<GenerationResult, &RtlForgeError>
    ) -> bool {
        if !self.tracker.is_current(ticket) {
            debug!("Discarding stale result for request #{}", ticket.0);
            return false;
        }
        self.is_loading = false;

        match outcome {
            Ok(result) => {
                if let Some(first) = result.first_key() {
                    self.active_tab = Some(first.to_string());
                }
                self.output = Some(result);
            }
            Err(e) => {
                self.output = None;
                self.error = Some(format!("Failed to generate content. {}", e));
            }
        }
        true
    }

    /// Run one submission end to end against `assistant`.
    ///
    /// `None` when the submission was ignored; otherwise the outcome, which has
    /// also been applied to the session.
    pub async fn submit<A: DesignAssistant + ?Sized>(
        &mut self,
        assistant: &A
    ) -> Option<RtlForgeResult<()>> {
        let (ticket, request) = self.begin_submission()?;
        match assistant.process(&request).await {
            Ok(result) => {
                self.complete(ticket, Ok(result));
                Some(Ok(()))
            }
            Err(e) => {
                self.complete(ticket, Err(&e));
                Some(Err(e))
            }
        }
    }

    /// Stop waiting for the in-flight request; its outcome will be discarded
    pub fn abandon_pending(&mut self) {
        if self.is_loading {
            self.tracker.issue();
            self.is_loading = false;
        }
    }

    pub fn set_active_tab(&mut self, key: &str) {
        self.active_tab = Some(key.to_string());
    }
}
