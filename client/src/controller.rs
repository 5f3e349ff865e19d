//! Upload controller: owns the selection and the [`UploadState`].
//!
//! An upload runs in three steps so the await can happen away from the
//! owner of the state when needed (the web page keeps the flow in a signal
//! and cannot hold a borrow across the request):
//!
//! ```text
//! begin()  ──▶  perform(transport, file)  ──▶  finish(attempt, outcome)
//! Idle→Uploading        (suspends)              Uploading→Success|Error
//! ```
//!
//! [`UploadFlow::submit`] chains the three while holding `&mut self`.

use serde_json::Value;

use crate::error::{SelectResult, UploadError, UploadResult};
use crate::models::{FileCandidate, SelectedFile, SimplifyResponse, UploadEvent, UploadState};
use crate::selector::FileSelector;
use crate::transport::{HttpReply, Transport};

/// Handed out by [`UploadFlow::begin`]; identifies one upload attempt.
#[derive(Debug, Clone)]
pub struct UploadTicket<B = Vec<u8>> {
    attempt: u64,
    file: SelectedFile<B>,
}

impl<B> UploadTicket<B> {
    pub fn attempt(&self) -> u64 {
        self.attempt
    }

    pub fn file(&self) -> &SelectedFile<B> {
        &self.file
    }
}

/// The whole interactive flow: selector, state and attempt counter.
#[derive(Debug, Clone)]
pub struct UploadFlow<B = Vec<u8>> {
    selector: FileSelector<B>,
    state: UploadState,
    attempt: u64,
}

impl<B> Default for UploadFlow<B> {
    fn default() -> Self {
        Self {
            selector: FileSelector::default(),
            state: UploadState::Idle,
            attempt: 0,
        }
    }
}

impl<B> UploadFlow<B> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &UploadState {
        &self.state
    }

    pub fn selected(&self) -> Option<&SelectedFile<B>> {
        self.selector.selected()
    }

    pub fn is_dragging(&self) -> bool {
        self.selector.is_dragging()
    }

    pub fn drag_over(&mut self) -> bool {
        self.selector.drag_over()
    }

    pub fn drag_leave(&mut self) -> bool {
        self.selector.drag_leave()
    }

    pub fn drop_file(&mut self, candidate: FileCandidate<B>) -> SelectResult<&SelectedFile<B>> {
        self.selector.drop_file(candidate)
    }

    pub fn pick_file(&mut self, candidate: FileCandidate<B>) -> SelectResult<&SelectedFile<B>> {
        self.selector.pick_file(candidate)
    }

    /// Whether the submit action is available: a file is held and nothing
    /// has been submitted since the last reset.
    pub fn can_submit(&self) -> bool {
        self.selector.selected().is_some() && self.state.is_idle()
    }

    /// Apply the outcome of attempt `attempt`.
    ///
    /// Outcomes for any attempt other than the one currently uploading are
    /// dropped. Returns whether the state changed.
    pub fn finish(&mut self, attempt: u64, outcome: UploadResult<SimplifyResponse>) -> bool {
        if !self.state.is_uploading() || attempt != self.attempt {
            log::debug!("Discarding outcome of stale attempt {}", attempt);
            return false;
        }

        let event = match outcome {
            Ok(response) => {
                log::info!(
                    "Summary received for {} ({} chars, source: {})",
                    self.state.file_name().unwrap_or_default(),
                    response.summary.chars().count(),
                    response.source_type.as_deref().unwrap_or("unknown"),
                );
                UploadEvent::Succeeded {
                    summary: response.summary,
                }
            }
            Err(err) => {
                log::warn!("Upload failed: {}", err);
                UploadEvent::Failed {
                    message: err.user_message(),
                }
            }
        };

        self.apply(event);
        true
    }

    /// Back to `Idle` with no file held. Not available while uploading.
    pub fn reset(&mut self) -> bool {
        if self.state.is_uploading() {
            return false;
        }
        self.selector.clear();
        self.apply(UploadEvent::Reset);
        true
    }

    fn apply(&mut self, event: UploadEvent) {
        let from = self.state.status();
        self.state = std::mem::take(&mut self.state).transition(event);
        log::debug!("Upload state {} -> {}", from, self.state.status());
    }
}

impl<B: Clone> UploadFlow<B> {
    /// Enter `Uploading` for the held file.
    ///
    /// `None`, with nothing changed, when no file is held or the flow is
    /// not idle.
    pub fn begin(&mut self) -> Option<UploadTicket<B>> {
        if !self.can_submit() {
            return None;
        }
        let file = self.selector.selected()?.clone();

        self.attempt += 1;
        log::info!("Uploading {} ({})", file.name(), file.media_type());
        self.apply(UploadEvent::Submit {
            file_name: file.name().to_string(),
        });

        Some(UploadTicket {
            attempt: self.attempt,
            file,
        })
    }

    /// Submit the held file and wait for the outcome.
    ///
    /// A no-op when [`can_submit`](Self::can_submit) is false.
    pub async fn submit<T: Transport<B>>(&mut self, transport: &T) -> &UploadState {
        if let Some(ticket) = self.begin() {
            let outcome = perform(transport, ticket.file()).await;
            self.finish(ticket.attempt(), outcome);
        }
        &self.state
    }
}

/// Post `file` and interpret the reply.
pub async fn perform<B, T: Transport<B>>(
    transport: &T,
    file: &SelectedFile<B>,
) -> UploadResult<SimplifyResponse> {
    let reply = transport.post_file(file).await?;
    interpret(reply)
}

/// Map a raw reply to a summary or an [`UploadError`].
pub fn interpret(reply: HttpReply) -> UploadResult<SimplifyResponse> {
    if !reply.is_success() {
        if let Some(detail) = error_detail(&reply.body) {
            log::warn!("Service rejected the report ({}): {}", reply.status, detail);
        }
        return Err(UploadError::Http {
            status: reply.status,
            status_text: reply.status_text,
        });
    }

    serde_json::from_slice::<SimplifyResponse>(&reply.body)
        .map_err(|e| UploadError::MalformedResponse(e.to_string()))
}

/// `detail` field of an error body, when there is one.
fn error_detail(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    match value.get("detail")? {
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
