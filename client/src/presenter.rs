//! State presenter: which view to show for an [`UploadState`].
//!
//! Pure mapping, no I/O. The web page renders [`View`] as markup, the CLI
//! through [`render_plain`].

use crate::models::UploadState;

pub const TITLE: &str = "Medical Test Result Simplifier";
pub const TAGLINE: &str = "Upload your lab report and get clear, easy-to-understand explanations";

pub const DROP_PROMPT: &str = "Drop your file here";
pub const BROWSE_HINT: &str = "or click to browse PDF or images";

pub const SUBMIT_LABEL: &str = "Simplify Results";
pub const BUSY_LABEL: &str = "Analyzing your report...";

pub const SUCCESS_HEADING: &str = "Report analyzed successfully";
pub const SUMMARY_HEADING: &str = "Easy-to-Read Summary";
pub const ERROR_HEADING: &str = "Error processing file";

pub const ANALYZE_ANOTHER_LABEL: &str = "Analyze Another Report";
pub const TRY_AGAIN_LABEL: &str = "Try Again";

/// Shown in every state.
pub const DISCLAIMER: &str = "⚠️ Medical Disclaimer: This tool provides general information only. \
Always consult a qualified healthcare professional for proper medical interpretation and advice.";

/// One of the mutually exclusive views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View<'a> {
    /// Drop zone, picker and submit control. Shared by `Idle` and
    /// `Uploading`; `busy` is set while uploading.
    Selector { busy: bool },
    /// Summary, shown verbatim as preformatted text.
    Success { summary: &'a str },
    /// Failure message.
    Error { message: &'a str },
}

impl View<'_> {
    /// Label of the reset action, for the views that have one.
    pub fn reset_label(&self) -> Option<&'static str> {
        match self {
            View::Selector { .. } => None,
            View::Success { .. } => Some(ANALYZE_ANOTHER_LABEL),
            View::Error { .. } => Some(TRY_AGAIN_LABEL),
        }
    }

    pub fn heading(&self) -> Option<&'static str> {
        match self {
            View::Selector { .. } => None,
            View::Success { .. } => Some(SUCCESS_HEADING),
            View::Error { .. } => Some(ERROR_HEADING),
        }
    }
}

pub fn present(state: &UploadState) -> View<'_> {
    match state {
        UploadState::Idle => View::Selector { busy: false },
        UploadState::Uploading { .. } => View::Selector { busy: true },
        UploadState::Success { summary, .. } => View::Success { summary },
        UploadState::Error { message, .. } => View::Error { message },
    }
}

/// State of the primary action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitControl {
    pub enabled: bool,
    pub busy: bool,
    pub label: &'static str,
}

/// Submit control for the selector view: disabled without a file or while
/// uploading.
pub fn submit_control(state: &UploadState, has_file: bool) -> SubmitControl {
    let busy = state.is_uploading();
    SubmitControl {
        enabled: has_file && state.is_idle(),
        busy,
        label: if busy { BUSY_LABEL } else { SUBMIT_LABEL },
    }
}

/// Main line of the drop zone.
pub fn drop_prompt(file_name: Option<&str>) -> String {
    match file_name {
        Some(name) => format!("✓ {name}"),
        None => DROP_PROMPT.to_string(),
    }
}

/// Terminal rendition of a view, disclaimer last.
pub fn render_plain(view: &View<'_>, file_name: Option<&str>) -> String {
    let mut out = String::new();

    match view {
        View::Selector { busy } => {
            out.push_str(&drop_prompt(file_name));
            out.push('\n');
            out.push_str(if *busy { BUSY_LABEL } else { SUBMIT_LABEL });
            out.push('\n');
        }
        View::Success { summary } => {
            out.push_str(&format!("✅ {SUCCESS_HEADING}\n\n{SUMMARY_HEADING}\n\n"));
            out.push_str(summary);
            out.push('\n');
        }
        View::Error { message } => {
            out.push_str(&format!("❌ {ERROR_HEADING}\n{message}\n"));
        }
    }

    out.push('\n');
    out.push_str(DISCLAIMER);
    out.push('\n');
    out
}
