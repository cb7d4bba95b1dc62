#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StateSyncStatus {
    /// Needs `compute()` before it can be trusted.
    #[default]
    Dirty,
    Clean,
}
