/// Default limit on nested function calls.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 10_000;

/// Run-time settings of the interpreter.
///
/// The command line fills these in; embedders and tests can start from
/// [`Settings::default`] and override what they need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Maximum number of nested function calls before evaluation stops with a
    /// recursion error.
    pub max_call_depth:     usize,
    /// Runs the window opcodes on a headless device that requests a close
    /// after this many presented frames. `None` uses the platform device.
    pub close_after_frames: Option<u64>,
    /// Seed for `random`. `None` seeds from the operating system.
    pub seed:               Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self { max_call_depth:     DEFAULT_MAX_CALL_DEPTH,
               close_after_frames: None,
               seed:               None, }
    }
}
