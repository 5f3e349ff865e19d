//! File selection: media type filtering for dropped and picked files.
//!
//! Both entry points validate the same way. Drag-over and drag-leave only
//! toggle the `dragging` flag and never touch the held file.

use crate::error::{RejectedFile, SelectResult};
use crate::models::{is_allowed_media_type, FileCandidate, SelectedFile};

/// Turn a candidate into a [`SelectedFile`] iff its media type is allowed.
pub fn try_select<B>(candidate: FileCandidate<B>) -> SelectResult<SelectedFile<B>> {
    if is_allowed_media_type(&candidate.media_type) {
        Ok(SelectedFile::from_candidate(candidate))
    } else {
        Err(RejectedFile {
            name: candidate.name,
            media_type: candidate.media_type,
        })
    }
}

/// Holds the current selection and the transient drag flag.
#[derive(Debug, Clone)]
pub struct FileSelector<B = Vec<u8>> {
    selected: Option<SelectedFile<B>>,
    dragging: bool,
}

impl<B> Default for FileSelector<B> {
    fn default() -> Self {
        Self {
            selected: None,
            dragging: false,
        }
    }
}

impl<B> FileSelector<B> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&SelectedFile<B>> {
        self.selected.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Returns whether the flag changed; `dragover` fires continuously.
    pub fn drag_over(&mut self) -> bool {
        !std::mem::replace(&mut self.dragging, true)
    }

    /// Returns whether the flag changed.
    pub fn drag_leave(&mut self) -> bool {
        std::mem::replace(&mut self.dragging, false)
    }

    /// Drop completion. Ends the drag whether or not the file is accepted.
    pub fn drop_file(&mut self, candidate: FileCandidate<B>) -> SelectResult<&SelectedFile<B>> {
        self.dragging = false;
        self.offer(candidate)
    }

    /// Picker change completion.
    pub fn pick_file(&mut self, candidate: FileCandidate<B>) -> SelectResult<&SelectedFile<B>> {
        self.offer(candidate)
    }

    /// Forget the held file.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    fn offer(&mut self, candidate: FileCandidate<B>) -> SelectResult<&SelectedFile<B>> {
        match try_select(candidate) {
            Ok(file) => {
                log::debug!("Selected {} ({})", file.name(), file.media_type());
                Ok(self.selected.insert(file))
            }
            Err(rejected) => {
                log::warn!("Ignoring {}", rejected);
                Err(rejected)
            }
        }
    }
}

/// Media type for a local path, inferred from its extension.
///
/// Unknown extensions map to `application/octet-stream`, which the
/// selector refuses.
pub fn media_type_for_path(path: &std::path::Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("pdf") => "application/pdf",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn candidate(name: &str, media_type: &str) -> FileCandidate {
        FileCandidate::new(name, media_type, name.as_bytes().to_vec())
    }

    #[test]
    fn test_try_select_follows_allow_list() {
        for media_type in ["application/pdf", "image/jpeg", "image/png", "image/gif", "image/webp"] {
            let file = try_select(candidate("x", media_type)).unwrap();
            assert_eq!(file.media_type(), media_type);
        }

        let rejected = try_select(candidate("notes.txt", "text/plain")).unwrap_err();
        assert_eq!(rejected.name, "notes.txt");
        assert_eq!(rejected.media_type, "text/plain");
    }

    #[test]
    fn test_accepted_file_replaces_previous() {
        let mut selector = FileSelector::new();
        selector.pick_file(candidate("first.pdf", "application/pdf")).unwrap();
        selector.drop_file(candidate("second.png", "image/png")).unwrap();

        assert_eq!(selector.selected().unwrap().name(), "second.png");
        assert_eq!(selector.selected().unwrap().content(), &b"second.png".to_vec());
    }

    #[test]
    fn test_rejected_file_keeps_previous() {
        let mut selector = FileSelector::new();
        selector.pick_file(candidate("report.pdf", "application/pdf")).unwrap();

        assert!(selector.pick_file(candidate("notes.txt", "text/plain")).is_err());
        assert!(selector.drop_file(candidate("song.mp3", "audio/mpeg")).is_err());
        assert_eq!(selector.selected().unwrap().name(), "report.pdf");
    }

    #[test]
    fn test_drag_flag_is_independent_of_selection() {
        let mut selector: FileSelector = FileSelector::new();
        selector.drag_over();
        assert!(selector.is_dragging());
        assert!(selector.selected().is_none());

        selector.drag_leave();
        assert!(!selector.is_dragging());

        selector.drag_over();
        let _ = selector.drop_file(candidate("notes.txt", "text/plain"));
        assert!(!selector.is_dragging());
        assert!(selector.selected().is_none());
    }

    #[test]
    fn test_drag_flag_reports_changes_only() {
        let mut selector = FileSelector::<Vec<u8>>::new();
        assert!(!selector.drag_leave());

        assert!(selector.drag_over());
        assert!(!selector.drag_over());
        assert!(!selector.drag_over());
        assert!(selector.is_dragging());

        assert!(selector.drag_leave());
        assert!(!selector.drag_leave());
        assert!(!selector.is_dragging());
    }

    #[test]
    fn test_clear() {
        let mut selector = FileSelector::new();
        selector.pick_file(candidate("report.pdf", "application/pdf")).unwrap();
        selector.clear();
        assert!(selector.selected().is_none());
    }

    #[test]
    fn test_media_type_for_path() {
        assert_eq!(media_type_for_path(Path::new("report.pdf")), "application/pdf");
        assert_eq!(media_type_for_path(Path::new("scan.JPG")), "image/jpeg");
        assert_eq!(media_type_for_path(Path::new("scan.jpeg")), "image/jpeg");
        assert_eq!(media_type_for_path(Path::new("a/b/c.webp")), "image/webp");
        assert_eq!(media_type_for_path(Path::new("notes.txt")), "application/octet-stream");
        assert_eq!(media_type_for_path(Path::new("README")), "application/octet-stream");
    }
}
