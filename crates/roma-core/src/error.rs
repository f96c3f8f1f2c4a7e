/// Failure to turn a typing unit into keystrokes.
///
/// Either error means the whole input cannot be practiced; callers should
/// not fall back to a partial target.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExpandError {
    /// A computed spelling contains a character no key produces. Usually a
    /// character outside the table's repertoire (kanji, Greek, …).
    #[error("unit {unit:?} produced non-typeable spelling {spelling:?}")]
    NonTypeable { unit: String, spelling: String },
    /// Every spelling of the unit was rejected by the join rules.
    #[error("unit {unit:?} has no valid spelling")]
    Unconvertible { unit: String },
}
