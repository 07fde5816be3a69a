/// Errors reported by list and cursor operations.
///
/// Reading operations (`get`, `set`, `remove_at`) do not use this type; they
/// are no-ops returning `None` on invalid input. Only the operations whose
/// contract is to reject bad calls report an `Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The list has no elements left to remove or pop.
    #[error("the list is empty")]
    Empty,

    /// An index was outside the range accepted by the operation.
    #[error("index {index} is out of bounds for length {len}")]
    OutOfBounds {
        /// The rejected index.
        index: usize,
        /// The list length at the time of the call.
        len: usize,
    },

    /// The list was structurally modified behind a live cursor.
    ///
    /// The cursor is unusable from this point on; create a new one.
    #[error("the list was structurally modified behind the cursor")]
    Invalidated,

    /// A cursor was advanced past an end of the list.
    #[error("the cursor ran past the end of the list")]
    Exhausted,

    /// A cursor mutation required an element returned by a previous
    /// `next`/`previous` call, and none is pending.
    #[error("the cursor has no current element")]
    NoCurrent,
}
