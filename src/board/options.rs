use crate::engine::EngineLimits;

/// Options which determine how a [`Board`](crate::Board) behaves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoardOptions {
    /// Limits handed to the engine when the global constraint is built.
    pub limits: EngineLimits,
    /// Reject a placement whose cell belongs to no complete solution instead of committing it.
    ///
    /// Cells classified as open are always feasible, so in practice only the first move of a
    /// session, which is made before any classification has run, can be rejected. When disabled,
    /// such a first move is committed and leaves a board with every other cell blocked.
    pub validate_first_move: bool,
}
