use crate::interpreter::device::{
    DeviceError, WINDOW_HEIGHT, WINDOW_WIDTH, WindowDevice, WindowHandle,
    color::{Rgb, parse_color},
};

/// A [`WindowDevice`] with no platform window behind it.
///
/// Keeps the state a real window would have (current fill, presented frames)
/// so programs using the window opcodes can run in terminals and tests. It can
/// be told to request a close after a number of presented frames, which is how
/// a `windowRunning` loop gets to end.
#[derive(Debug, Default)]
pub struct HeadlessDevice {
    open:          Option<WindowHandle>,
    next_handle:   u32,
    back_buffer:   Rgb,
    front_buffer:  Option<Rgb>,
    frames:        u64,
    close_after:   Option<u64>,
    close_pending: bool,
}

impl HeadlessDevice {
    /// Creates a device that never requests a close.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a device that requests a close once `frames` frames have been
    /// presented.
    #[must_use]
    pub fn with_close_after(frames: u64) -> Self {
        Self { close_after: Some(frames),
               ..Self::default() }
    }

    /// Returns `true` while a window is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Color of the last presented frame, if any frame was presented.
    #[must_use]
    pub const fn presented_color(&self) -> Option<Rgb> {
        self.front_buffer
    }

    /// Number of frames presented since the device was created.
    #[must_use]
    pub const fn frames_presented(&self) -> u64 {
        self.frames
    }

    fn check(&self, handle: WindowHandle) -> Result<(), DeviceError> {
        if self.open == Some(handle) {
            Ok(())
        } else {
            Err(DeviceError::InvalidHandle { handle })
        }
    }
}

impl WindowDevice for HeadlessDevice {
    fn open(&mut self) -> Result<WindowHandle, DeviceError> {
        if self.open.is_some() {
            return Err(DeviceError::Unavailable { reason: "a window is already open".to_string() });
        }

        self.next_handle += 1;
        let handle = WindowHandle(self.next_handle);
        self.open = Some(handle);
        self.back_buffer = Rgb::default();
        self.close_pending = self.close_after.is_some_and(|n| self.frames >= n);
        tracing::debug!(%handle, width = WINDOW_WIDTH, height = WINDOW_HEIGHT, "opened headless window");

        Ok(handle)
    }

    fn close(&mut self, handle: WindowHandle) -> Result<(), DeviceError> {
        self.check(handle)?;
        self.open = None;
        self.close_pending = false;
        tracing::debug!(%handle, frames = self.frames, "closed headless window");

        Ok(())
    }

    fn poll_close_requested(&mut self, handle: WindowHandle) -> Result<bool, DeviceError> {
        self.check(handle)?;
        Ok(std::mem::take(&mut self.close_pending))
    }

    fn fill(&mut self, handle: WindowHandle, color: &str) -> Result<(), DeviceError> {
        self.check(handle)?;
        self.back_buffer =
            parse_color(color).ok_or_else(|| DeviceError::UnknownColor { name: color.to_string() })?;

        Ok(())
    }

    fn present(&mut self, handle: WindowHandle) -> Result<(), DeviceError> {
        self.check(handle)?;
        self.front_buffer = Some(self.back_buffer);
        self.frames += 1;

        if self.close_after == Some(self.frames) {
            self.close_pending = true;
        }

        Ok(())
    }
}
