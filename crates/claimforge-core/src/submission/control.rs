//! The submit control: a single flag that blocks overlapping submissions.

use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Default)]
pub struct SubmitControl {
    disabled: AtomicBool,
}

impl SubmitControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled.load(Ordering::Acquire)
    }

    /// Disable the control, or return `None` if it already is.
    ///
    /// The control is enabled again when the returned guard is dropped.
    pub fn try_disable(&self) -> Option<SubmitGuard<'_>> {
        self.disabled
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| SubmitGuard { control: self })
    }
}

/// Holds the control disabled for as long as it lives.
#[derive(Debug)]
pub struct SubmitGuard<'a> {
    control: &'a SubmitControl,
}

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        self.control.disabled.store(false, Ordering::Release);
    }
}
