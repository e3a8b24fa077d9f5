use crate::solver::model::VariableId;

pub type Result<T, E = SolverError> = core::result::Result<T, E>;

/// The two ways a solve can fail. Both mean "unsatisfiable", not "crashed":
/// [`SolverError::DomainExhausted`] raised during propagation proves the
/// puzzle has no solution, while during search it only dooms the current
/// branch and is consumed by backtracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SolverError {
    /// A variable's domain became empty during propagation or forward
    /// checking.
    #[error("domain of variable {0} became empty")]
    DomainExhausted(VariableId),

    /// Every candidate value at a decision point has been tried and failed.
    #[error("no candidate value extends the current assignment")]
    SearchExhausted,
}
