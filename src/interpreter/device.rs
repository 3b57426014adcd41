/// Color names and hex notation.
pub mod color;
/// A window device that draws nowhere.
pub mod headless;
/// A desktop window, built with the `window` feature.
#[cfg(feature = "window")]
pub mod native;

use std::fmt;

pub use headless::HeadlessDevice;
#[cfg(feature = "window")]
pub use native::NativeDevice;

/// Width of the window, in pixels.
pub const WINDOW_WIDTH: usize = 640;
/// Height of the window, in pixels.
pub const WINDOW_HEIGHT: usize = 480;

/// Identifies a window opened by a [`WindowDevice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(pub u32);

impl fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The windowing surface driven by the window opcodes.
///
/// The evaluator only ever holds one handle at a time and checks the
/// open/closed lifecycle itself; implementations deal with the platform and
/// with interpreting color names.
pub trait WindowDevice {
    /// Opens a window and returns its handle.
    ///
    /// # Errors
    /// `DeviceError::Unavailable` if no window can be created.
    fn open(&mut self) -> Result<WindowHandle, DeviceError>;

    /// Closes the window and releases its resources.
    ///
    /// # Errors
    /// `DeviceError::InvalidHandle` if the handle is not open.
    fn close(&mut self, handle: WindowHandle) -> Result<(), DeviceError>;

    /// Drains pending events and reports whether a close was requested since
    /// the previous poll.
    ///
    /// # Errors
    /// `DeviceError::InvalidHandle` if the handle is not open.
    fn poll_close_requested(&mut self, handle: WindowHandle) -> Result<bool, DeviceError>;

    /// Fills the back buffer with the named color.
    ///
    /// # Errors
    /// `DeviceError::UnknownColor` if the name cannot be parsed,
    /// `DeviceError::InvalidHandle` if the handle is not open.
    fn fill(&mut self, handle: WindowHandle, color: &str) -> Result<(), DeviceError>;

    /// Shows the back buffer.
    ///
    /// # Errors
    /// `DeviceError::InvalidHandle` if the handle is not open,
    /// `DeviceError::Unavailable` if the platform lost the window.
    fn present(&mut self, handle: WindowHandle) -> Result<(), DeviceError>;
}

/// Failures reported by a [`WindowDevice`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceError {
    /// The color name is neither a known name nor valid hex.
    UnknownColor {
        /// The name as given by the program.
        name: String,
    },
    /// The handle does not refer to an open window.
    InvalidHandle {
        /// The stale handle.
        handle: WindowHandle,
    },
    /// The platform refused to create a window.
    Unavailable {
        /// Reason given by the platform.
        reason: String,
    },
}

impl fmt::Display for DeviceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownColor { name } => write!(f, "invalid color '{name}'"),
            Self::InvalidHandle { handle } => write!(f, "window {handle} is not open"),
            Self::Unavailable { reason } => write!(f, "cannot open a window: {reason}"),
        }
    }
}

impl std::error::Error for DeviceError {}

impl<T: WindowDevice + ?Sized> WindowDevice for &mut T {
    fn open(&mut self) -> Result<WindowHandle, DeviceError> {
        (**self).open()
    }

    fn close(&mut self, handle: WindowHandle) -> Result<(), DeviceError> {
        (**self).close(handle)
    }

    fn poll_close_requested(&mut self, handle: WindowHandle) -> Result<bool, DeviceError> {
        (**self).poll_close_requested(handle)
    }

    fn fill(&mut self, handle: WindowHandle, color: &str) -> Result<(), DeviceError> {
        (**self).fill(handle, color)
    }

    fn present(&mut self, handle: WindowHandle) -> Result<(), DeviceError> {
        (**self).present(handle)
    }
}
