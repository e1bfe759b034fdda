//! Host-contract boundary types.
//!
//! Thin, widget-free analogues of the hosting application's preview
//! contract: a parent window handle, a placement rectangle, and an
//! optional frame that accepts forwarded accelerator keystrokes. The
//! actual window toolkit lives outside this crate.

/// Placement rectangle within the host's preview pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    /// Left edge.
    pub left: i32,
    /// Top edge.
    pub top: i32,
    /// Right edge.
    pub right: i32,
    /// Bottom edge.
    pub bottom: i32,
}

impl Rect {
    /// Create a rectangle from its four edges.
    #[must_use]
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Width of the rectangle.
    #[must_use]
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    /// Height of the rectangle.
    #[must_use]
    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

/// Opaque handle to a host window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(pub u64);

/// A keystroke message forwarded by the host's message pump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcceleratorMsg {
    /// Host-defined key code.
    pub code: u32,
}

/// Whether a forwarded message was consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// The message was consumed.
    Yes,
    /// The message was not consumed; the caller should keep routing it.
    No,
}

/// The host frame that accelerator keystrokes are forwarded to.
///
/// Absence of a frame is not an error: forwarding without one simply
/// reports [`Handled::No`].
pub trait HostFrame {
    /// Offer `msg` to the frame.
    fn translate_accelerator(&mut self, msg: &AcceleratorMsg) -> Handled;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_dimensions() {
        let rect = Rect::new(10, 20, 110, 80);
        assert_eq!(rect.width(), 100);
        assert_eq!(rect.height(), 60);
    }

    #[test]
    fn test_rect_default_is_empty() {
        let rect = Rect::default();
        assert_eq!(rect.width(), 0);
        assert_eq!(rect.height(), 0);
    }

    #[test]
    fn test_window_handle_equality() {
        assert_eq!(WindowHandle(7), WindowHandle(7));
        assert_ne!(WindowHandle(7), WindowHandle(8));
    }
}
