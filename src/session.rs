//! Preview session lifecycle.
//!
//! Orchestrates one preview: stores the path handed over by the host,
//! opens the source on demand, materializes it into a staging grid and
//! installs the populated view only on full success. The session moves
//! through three states — idle, initialized (path stored), previewing
//! (view visible) — and `unload` returns it to idle.

use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::grid::TextGrid;
use crate::host::{AcceleratorMsg, Handled, HostFrame, Rect, WindowHandle};
use crate::materialize::{materialize, TableSummary};
use crate::source::RecordSource;

/// The visible result of a successful preview.
///
/// Owns the populated grid and with it every display string; dropping
/// the view releases them all at once.
#[derive(Debug)]
pub struct PreviewView {
    title: String,
    grid: TextGrid,
    summary: TableSummary,
    rect: Rect,
    visible: bool,
}

impl PreviewView {
    /// Title of the view (display form of the previewed path).
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The populated grid.
    #[must_use]
    pub fn grid(&self) -> &TextGrid {
        &self.grid
    }

    /// Column and row counters reported by the reader.
    #[must_use]
    pub fn summary(&self) -> TableSummary {
        self.summary
    }

    /// Current placement rectangle.
    #[must_use]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Whether the view is currently shown.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    fn layout(&mut self, rect: Rect) {
        self.rect = rect;
    }
}

/// A preview session driven by the host's lifecycle calls.
#[derive(Default)]
pub struct PreviewSession {
    path: Option<PathBuf>,
    parent: Option<WindowHandle>,
    rect: Rect,
    frame: Option<Box<dyn HostFrame>>,
    view: Option<PreviewView>,
}

impl PreviewSession {
    /// Create an idle session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the path to preview. Valid in any state; a previously
    /// stored path is replaced. The file is not touched here.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `path` is empty.
    pub fn initialize(&mut self, path: impl Into<PathBuf>) -> Result<()> {
        let path = path.into();
        if path.as_os_str().is_empty() {
            return Err(Error::invalid_argument("path is empty"));
        }
        self.path = Some(path);
        Ok(())
    }

    /// Record the parent window and placement rectangle.
    ///
    /// Re-layouts the live view when one is visible.
    pub fn set_window(&mut self, parent: WindowHandle, rect: Rect) {
        self.parent = Some(parent);
        self.set_rect(rect);
    }

    /// Record a new placement rectangle, re-layouting any live view.
    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
        if let Some(view) = &mut self.view {
            view.layout(rect);
        }
    }

    /// Open the stored path and render it into a fresh view.
    ///
    /// The file is opened, its schema turned into column headers and
    /// every batch materialized into a staging grid; only when all of
    /// that succeeds does the view become visible. On failure no view
    /// exists and the session stays initialized.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidState`] if a preview is already active or no
    ///   path has been stored
    /// - [`Error::SourceUnavailable`] / decode errors from opening and
    ///   reading the file
    pub fn do_preview(&mut self) -> Result<TableSummary> {
        if self.view.is_some() {
            return Err(Error::invalid_state(
                "preview already active; unload first",
            ));
        }
        let Some(path) = self.path.clone() else {
            return Err(Error::invalid_state("no path initialized"));
        };

        let mut source = RecordSource::open(&path)?;
        let mut grid = TextGrid::new();
        let summary = materialize(&mut source, &mut grid)?;

        self.view = Some(PreviewView {
            title: path.display().to_string(),
            grid,
            summary,
            rect: self.rect,
            visible: true,
        });
        Ok(summary)
    }

    /// Direct focus to the preview. True only while a view is visible.
    pub fn set_focus(&mut self) -> bool {
        self.view.as_ref().map_or(false, |v| v.visible)
    }

    /// The window handle holding focus, if a view is visible.
    #[must_use]
    pub fn query_focus(&self) -> Option<WindowHandle> {
        if self.view.as_ref().is_some_and(|v| v.visible) {
            self.parent
        } else {
            None
        }
    }

    /// Forward a keystroke to the host frame.
    ///
    /// Without an attached frame the message is reported unhandled.
    pub fn translate_accelerator(&mut self, msg: &AcceleratorMsg) -> Handled {
        match &mut self.frame {
            Some(frame) => frame.translate_accelerator(msg),
            None => Handled::No,
        }
    }

    /// Attach or detach the host frame used for accelerator forwarding.
    pub fn set_frame(&mut self, frame: Option<Box<dyn HostFrame>>) {
        self.frame = frame;
    }

    /// Release the view, all its display strings and the stored path.
    ///
    /// Idempotent; the session returns to idle.
    pub fn unload(&mut self) {
        self.view = None;
        self.path = None;
    }

    /// The active view, if previewing.
    #[must_use]
    pub fn view(&self) -> Option<&PreviewView> {
        self.view.as_ref()
    }

    /// True once a path has been stored and until `unload`.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.path.is_some()
    }

    /// True while a view is installed.
    #[must_use]
    pub fn is_previewing(&self) -> bool {
        self.view.is_some()
    }
}

impl std::fmt::Debug for PreviewSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreviewSession")
            .field("path", &self.path)
            .field("parent", &self.parent)
            .field("rect", &self.rect)
            .field("previewing", &self.view.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct RecordingFrame {
        seen: Vec<u32>,
    }

    impl HostFrame for RecordingFrame {
        fn translate_accelerator(&mut self, msg: &AcceleratorMsg) -> Handled {
            self.seen.push(msg.code);
            Handled::Yes
        }
    }

    #[test]
    fn test_initialize_empty_path_is_invalid_argument() {
        let mut session = PreviewSession::new();
        let result = session.initialize("");
        assert!(matches!(result, Err(Error::InvalidArgument { .. })));
        assert!(!session.is_initialized());
    }

    #[test]
    fn test_reinitialize_replaces_path() {
        let mut session = PreviewSession::new();
        session.initialize("/data/a.arrow").unwrap();
        session.initialize("/data/b.arrow").unwrap();
        assert!(session.is_initialized());
    }

    #[test]
    fn test_preview_without_initialize_is_invalid_state() {
        let mut session = PreviewSession::new();
        let result = session.do_preview();
        assert!(matches!(result, Err(Error::InvalidState { .. })));
    }

    #[test]
    fn test_preview_nonexistent_path_creates_no_view() {
        let mut session = PreviewSession::new();
        session.initialize("/nonexistent/data.arrow").unwrap();
        let result = session.do_preview();
        assert!(matches!(result, Err(Error::SourceUnavailable { .. })));
        assert!(session.view().is_none());
        // Still initialized: the host may retry or unload.
        assert!(session.is_initialized());
    }

    #[test]
    fn test_set_rect_before_preview_is_recorded() {
        let mut session = PreviewSession::new();
        session.set_rect(Rect::new(0, 0, 640, 480));
        assert!(session.view().is_none());
    }

    #[test]
    fn test_focus_without_view() {
        let mut session = PreviewSession::new();
        assert!(!session.set_focus());
        assert_eq!(session.query_focus(), None);
    }

    #[test]
    fn test_translate_accelerator_without_frame_is_unhandled() {
        let mut session = PreviewSession::new();
        let msg = AcceleratorMsg { code: 9 };
        assert_eq!(session.translate_accelerator(&msg), Handled::No);
    }

    #[test]
    fn test_translate_accelerator_forwards_to_frame() {
        let mut session = PreviewSession::new();
        session.set_frame(Some(Box::new(RecordingFrame { seen: Vec::new() })));
        let msg = AcceleratorMsg { code: 13 };
        assert_eq!(session.translate_accelerator(&msg), Handled::Yes);
    }

    #[test]
    fn test_unload_is_idempotent() {
        let mut session = PreviewSession::new();
        session.initialize("/data/a.arrow").unwrap();
        session.unload();
        session.unload();
        assert!(!session.is_initialized());
        assert!(!session.is_previewing());
    }
}
