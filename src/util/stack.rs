/// Minimum stack space to keep available (100KB red zone).
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Ensures sufficient stack space is available before executing `f`.
///
/// Grows the stack onto the heap when less than the red zone remains, which
/// lets deeply nested blocks and recursive functions run until the
/// interpreter's own depth limit rather than a native stack overflow.
#[inline]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}
