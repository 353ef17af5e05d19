// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! What an `each` handler may return.

use std::ops::ControlFlow;

/// The return value of a `Store::each` handler.
///
/// Handlers returning `()` visit every entry. Returning `false` or
/// `ControlFlow::Break(())` stops the walk after the current entry.
pub trait Step {
    /// Whether the walk should go on to the next entry.
    fn proceed(self) -> bool;
}

impl Step for () {
    #[inline]
    fn proceed(self) -> bool {
        return true;
    }
}

impl Step for bool {
    #[inline]
    fn proceed(self) -> bool {
        return self;
    }
}

impl Step for ControlFlow<()> {
    #[inline]
    fn proceed(self) -> bool {
        return self.is_continue();
    }
}
