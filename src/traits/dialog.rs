//! Interactive confirmation trait.

/// Blocking yes/no prompt shown before destructive actions.
pub trait Dialog: Send + Sync {
    /// Ask the user to confirm `message`. `false` means declined.
    fn confirm(&self, message: &str) -> bool;
}
