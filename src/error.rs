/// Returned by a companion's `from<Param>` lookup when no variant's accessor
/// yields the requested value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, thiserror::Error)]
#[error("No constant found")]
pub struct NoConstantFound;
