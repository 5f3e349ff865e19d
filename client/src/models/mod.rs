//! Domain models of the upload flow.
//!
//! - [`FileCandidate`] / [`SelectedFile`] - a report before and after validation
//! - [`UploadState`] / [`UploadEvent`] - the four-state lifecycle
//! - [`SimplifyResponse`] - body returned by the summarizing service
//! - [`ALLOWED_MEDIA_TYPES`] - accepted media types

use serde::{Deserialize, Serialize};

// =============================================================================
// Media Types
// =============================================================================

/// Media types accepted by the selector.
pub const ALLOWED_MEDIA_TYPES: [&str; 5] = [
    "application/pdf",
    "image/jpeg",
    "image/png",
    "image/gif",
    "image/webp",
];

/// Exact, case-sensitive membership test against [`ALLOWED_MEDIA_TYPES`].
pub fn is_allowed_media_type(media_type: &str) -> bool {
    ALLOWED_MEDIA_TYPES.contains(&media_type)
}

// =============================================================================
// Files
// =============================================================================

/// A file offered by a drop or a picker change, not yet validated.
///
/// `B` is whatever holds the content: bytes on native builds, the
/// browser's file handle in the web page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCandidate<B = Vec<u8>> {
    pub name: String,
    pub media_type: String,
    pub content: B,
}

impl<B> FileCandidate<B> {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, content: B) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            content,
        }
    }
}

/// A report that passed the media type check.
///
/// Only [`crate::selector::try_select`] builds one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile<B = Vec<u8>> {
    name: String,
    media_type: String,
    content: B,
}

impl<B> SelectedFile<B> {
    pub(crate) fn from_candidate(candidate: FileCandidate<B>) -> Self {
        Self {
            name: candidate.name,
            media_type: candidate.media_type,
            content: candidate.content,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn content(&self) -> &B {
        &self.content
    }
}

// =============================================================================
// Upload State
// =============================================================================

/// Lifecycle of one upload. Exactly one variant is active.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum UploadState {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// Request in flight.
    Uploading {
        #[serde(rename = "fileName")]
        file_name: String,
    },
    /// The service returned a summary.
    Success {
        #[serde(rename = "fileName")]
        file_name: String,
        summary: String,
    },
    /// The upload failed; `message` is shown to the user.
    Error {
        #[serde(rename = "fileName")]
        file_name: String,
        message: String,
    },
}

/// Events that move an [`UploadState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadEvent {
    Submit { file_name: String },
    Succeeded { summary: String },
    Failed { message: String },
    Reset,
}

impl UploadState {
    /// Apply an event. Total: combinations that have no transition leave
    /// the state as it is.
    ///
    /// | from        | event       | to          |
    /// |-------------|-------------|-------------|
    /// | `Idle`      | `Submit`    | `Uploading` |
    /// | `Uploading` | `Succeeded` | `Success`   |
    /// | `Uploading` | `Failed`    | `Error`     |
    /// | `Success`   | `Reset`     | `Idle`      |
    /// | `Error`     | `Reset`     | `Idle`      |
    pub fn transition(self, event: UploadEvent) -> UploadState {
        match (self, event) {
            (UploadState::Idle, UploadEvent::Submit { file_name }) => {
                UploadState::Uploading { file_name }
            }
            (UploadState::Uploading { file_name }, UploadEvent::Succeeded { summary }) => {
                UploadState::Success { file_name, summary }
            }
            (UploadState::Uploading { file_name }, UploadEvent::Failed { message }) => {
                UploadState::Error { file_name, message }
            }
            (UploadState::Success { .. } | UploadState::Error { .. }, UploadEvent::Reset) => {
                UploadState::Idle
            }
            (state, _) => state,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, UploadState::Idle)
    }

    pub fn is_uploading(&self) -> bool {
        matches!(self, UploadState::Uploading { .. })
    }

    /// File name of the current attempt, if any.
    pub fn file_name(&self) -> Option<&str> {
        match self {
            UploadState::Idle => None,
            UploadState::Uploading { file_name }
            | UploadState::Success { file_name, .. }
            | UploadState::Error { file_name, .. } => Some(file_name),
        }
    }

    /// Short lowercase tag, as used in the JSON form.
    pub fn status(&self) -> &'static str {
        match self {
            UploadState::Idle => "idle",
            UploadState::Uploading { .. } => "uploading",
            UploadState::Success { .. } => "success",
            UploadState::Error { .. } => "error",
        }
    }
}

// =============================================================================
// Service Response
// =============================================================================

/// Body of a successful `/api/simplify` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimplifyResponse {
    /// Plain-text explanation, displayed verbatim.
    pub summary: String,
    /// `"pdf"` or `"image"`, when the service reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uploading() -> UploadState {
        UploadState::Uploading {
            file_name: "report.pdf".into(),
        }
    }

    #[test]
    fn test_allowed_media_types() {
        assert!(is_allowed_media_type("application/pdf"));
        assert!(is_allowed_media_type("image/webp"));
        assert!(!is_allowed_media_type("text/plain"));
        assert!(!is_allowed_media_type("image/svg+xml"));
        assert!(!is_allowed_media_type("Application/PDF"));
        assert!(!is_allowed_media_type(""));
    }

    #[test]
    fn test_submit_only_from_idle() {
        let submit = UploadEvent::Submit {
            file_name: "report.pdf".into(),
        };
        assert_eq!(UploadState::Idle.transition(submit.clone()), uploading());
        assert_eq!(uploading().transition(submit.clone()), uploading());

        let done = UploadState::Success {
            file_name: "a.png".into(),
            summary: "ok".into(),
        };
        assert_eq!(done.clone().transition(submit), done);
    }

    #[test]
    fn test_outcomes_only_from_uploading() {
        let ok = UploadEvent::Succeeded {
            summary: "Your glucose is normal.".into(),
        };
        assert_eq!(
            uploading().transition(ok.clone()),
            UploadState::Success {
                file_name: "report.pdf".into(),
                summary: "Your glucose is normal.".into(),
            }
        );
        assert_eq!(UploadState::Idle.transition(ok), UploadState::Idle);

        let failed = UploadEvent::Failed {
            message: "boom".into(),
        };
        assert_eq!(
            uploading().transition(failed.clone()),
            UploadState::Error {
                file_name: "report.pdf".into(),
                message: "boom".into(),
            }
        );
        assert_eq!(UploadState::Idle.transition(failed), UploadState::Idle);
    }

    #[test]
    fn test_reset_does_not_interrupt_upload() {
        assert_eq!(uploading().transition(UploadEvent::Reset), uploading());
        assert_eq!(UploadState::Idle.transition(UploadEvent::Reset), UploadState::Idle);
    }

    #[test]
    fn test_reset_from_result_returns_to_idle() {
        let success = UploadState::Success {
            file_name: "report.pdf".into(),
            summary: "All normal.".into(),
        };
        let error = UploadState::Error {
            file_name: "report.pdf".into(),
            message: "Failed to process the file".into(),
        };
        assert_eq!(success.transition(UploadEvent::Reset), UploadState::Idle);
        assert_eq!(error.transition(UploadEvent::Reset), UploadState::Idle);
    }

    #[test]
    fn test_state_json_shape() {
        let state = UploadState::Error {
            file_name: "scan.png".into(),
            message: "API error: Bad Request".into(),
        };
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["status"], "error");
        assert_eq!(json["fileName"], "scan.png");
        assert_eq!(json["message"], "API error: Bad Request");

        let idle = serde_json::to_value(UploadState::Idle).unwrap();
        assert_eq!(idle, serde_json::json!({ "status": "idle" }));
    }

    #[test]
    fn test_response_source_type_is_optional() {
        let with: SimplifyResponse =
            serde_json::from_str(r#"{"summary": "fine", "source_type": "pdf"}"#).unwrap();
        assert_eq!(with.source_type.as_deref(), Some("pdf"));

        let without: SimplifyResponse = serde_json::from_str(r#"{"summary": "fine"}"#).unwrap();
        assert_eq!(without.summary, "fine");
        assert!(without.source_type.is_none());
    }
}
