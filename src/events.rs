//! Event hook result vocabulary

/// Result from an event handler determining how the host proceeds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum HookResult {
    /// No opinion: the host's default push handling runs normally
    Continue = 0,

    /// Handled: the host suppresses its built-in push behavior for this event
    Handled = 1,
}

impl Default for HookResult {
    fn default() -> Self {
        Self::Continue
    }
}

impl HookResult {
    /// Whether this result suppresses the host's default handling
    pub fn is_handled(&self) -> bool {
        matches!(self, Self::Handled)
    }
}
