use minifb::{Key, Window, WindowOptions};

use crate::interpreter::device::{
    DeviceError, WINDOW_HEIGHT, WINDOW_WIDTH, WindowDevice, WindowHandle,
    color::{Rgb, parse_color},
};

/// Frames per second `windowUpdate` is paced to.
const TARGET_FPS: usize = 60;

/// A [`WindowDevice`] that opens a real desktop window.
///
/// Closing the window or pressing Escape is reported as a close request on
/// the next `windowRunning`.
pub struct NativeDevice {
    open:        Option<(WindowHandle, Window)>,
    next_handle: u32,
    pixels:      Vec<u32>,
}

impl NativeDevice {
    /// Creates a device with no window open yet.
    #[must_use]
    pub fn new() -> Self {
        Self { open:        None,
               next_handle: 0,
               pixels:      vec![Rgb::default().to_pixel(); WINDOW_WIDTH * WINDOW_HEIGHT], }
    }

    fn window(&mut self, handle: WindowHandle) -> Result<&mut Window, DeviceError> {
        match &mut self.open {
            Some((open, window)) if *open == handle => Ok(window),
            _ => Err(DeviceError::InvalidHandle { handle }),
        }
    }
}

impl Default for NativeDevice {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowDevice for NativeDevice {
    fn open(&mut self) -> Result<WindowHandle, DeviceError> {
        if self.open.is_some() {
            return Err(DeviceError::Unavailable { reason: "a window is already open".to_string() });
        }

        let mut window =
            Window::new("stacko", WINDOW_WIDTH, WINDOW_HEIGHT, WindowOptions::default())
                .map_err(|e| DeviceError::Unavailable { reason: e.to_string() })?;
        window.set_target_fps(TARGET_FPS);

        self.next_handle += 1;
        let handle = WindowHandle(self.next_handle);
        self.pixels.fill(Rgb::default().to_pixel());
        self.open = Some((handle, window));
        tracing::debug!(%handle, width = WINDOW_WIDTH, height = WINDOW_HEIGHT, "opened window");

        Ok(handle)
    }

    fn close(&mut self, handle: WindowHandle) -> Result<(), DeviceError> {
        self.window(handle)?;
        self.open = None;
        tracing::debug!(%handle, "closed window");

        Ok(())
    }

    fn poll_close_requested(&mut self, handle: WindowHandle) -> Result<bool, DeviceError> {
        let window = self.window(handle)?;
        window.update();

        Ok(!window.is_open() || window.is_key_down(Key::Escape))
    }

    fn fill(&mut self, handle: WindowHandle, color: &str) -> Result<(), DeviceError> {
        self.window(handle)?;
        let rgb =
            parse_color(color).ok_or_else(|| DeviceError::UnknownColor { name: color.to_string() })?;
        self.pixels.fill(rgb.to_pixel());

        Ok(())
    }

    fn present(&mut self, handle: WindowHandle) -> Result<(), DeviceError> {
        let Some((open, window)) = &mut self.open else {
            return Err(DeviceError::InvalidHandle { handle });
        };
        if *open != handle {
            return Err(DeviceError::InvalidHandle { handle });
        }

        window.update_with_buffer(&self.pixels, WINDOW_WIDTH, WINDOW_HEIGHT)
              .map_err(|e| DeviceError::Unavailable { reason: e.to_string() })
    }
}
