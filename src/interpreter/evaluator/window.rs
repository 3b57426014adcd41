use crate::{
    ast::Location,
    error::RuntimeError,
    interpreter::{
        device::{DeviceError, WindowDevice, WindowHandle},
        evaluator::core::{Context, EvalResult},
    },
};

/// The window opcodes.
///
/// At most one window is open at a time. `createWindow` fails while one is
/// open; every other window opcode fails while none is.
impl<D: WindowDevice> Context<'_, D> {
    pub(super) fn create_window(&mut self, location: &Location) -> EvalResult<()> {
        if self.window.is_some() {
            return Err(RuntimeError::WindowAlreadyOpen { location: location.clone() });
        }

        let handle = self.device.open().map_err(|source| device_error(source, location))?;
        tracing::debug!(%handle, %location, "window created");
        self.window = Some(handle);

        Ok(())
    }

    pub(super) fn close_window(&mut self, location: &Location) -> EvalResult<()> {
        let handle = self.window
                         .take()
                         .ok_or_else(|| RuntimeError::WindowNotOpen { location: location.clone() })?;
        self.device.close(handle).map_err(|source| device_error(source, location))?;
        tracing::debug!(%handle, %location, "window closed");

        Ok(())
    }

    /// Pushes `Yes` until the window has been asked to close.
    pub(super) fn window_running(&mut self, location: &Location) -> EvalResult<()> {
        let handle = self.open_window(location)?;
        let close_requested = self.device
                                  .poll_close_requested(handle)
                                  .map_err(|source| device_error(source, location))?;
        self.stack.push(!close_requested);

        Ok(())
    }

    pub(super) fn set_window_color(&mut self, location: &Location) -> EvalResult<()> {
        let color = self.stack.pop_string(location)?;
        let handle = self.open_window(location)?;

        self.device
            .fill(handle, &color)
            .map_err(|source| device_error(source, location))
    }

    pub(super) fn window_update(&mut self, location: &Location) -> EvalResult<()> {
        let handle = self.open_window(location)?;
        self.device.present(handle).map_err(|source| device_error(source, location))
    }

    fn open_window(&self, location: &Location) -> EvalResult<WindowHandle> {
        self.window.ok_or_else(|| RuntimeError::WindowNotOpen { location: location.clone() })
    }
}

fn device_error(source: DeviceError, location: &Location) -> RuntimeError {
    RuntimeError::Device { source,
                           location: location.clone() }
}
