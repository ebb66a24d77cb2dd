use strum_macros::{Display, EnumIter};

/// Classification of an augmented system's solution set.
///
/// `Undetermined` only exists between elimination and the consistency check;
/// a finished solve always resolves it to `Infinite` or `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum SolutionKind {
    Unique,
    Infinite,
    None,
    Undetermined,
}

impl SolutionKind {
    pub fn is_resolved(&self) -> bool {
        !matches!(self, Self::Undetermined)
    }
}
