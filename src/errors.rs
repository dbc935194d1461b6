//! Generation errors

/// Failure modes of a generation pass.
///
/// Generation is pure and deterministic, so an error is reported once to the
/// caller and never retried internally.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    /// (EmptyCrossSection) The cross-section has zero sides — the `0` sentinel
    /// used by configuration surfaces to disable a mesh. No geometry is
    /// produced for it, degenerate or otherwise.
    #[error("cross-section has zero sides, no mesh can be generated")]
    EmptyCrossSection,
}
