use serde::{Deserialize, Serialize};

/// Classification of one point of divergence between two in-order
/// sequences.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiffKind {
    /// Both sides produced a value at this position and the values differ.
    ValueMismatch,
    /// The first tree's sequence ended before this position.
    MissingInFirst,
    /// The second tree's sequence ended before this position.
    MissingInSecond,
}

/// One divergence between two trees' in-order emission sequences.
///
/// `position` is the 1-based index of the paired read at which the
/// divergence was observed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffEvent {
    pub kind: DiffKind,
    pub first: Option<i64>,
    pub second: Option<i64>,
    pub position: u64,
}

impl DiffEvent {
    #[must_use]
    pub const fn value_mismatch(position: u64, first: i64, second: i64) -> Self {
        Self {
            kind: DiffKind::ValueMismatch,
            first: Some(first),
            second: Some(second),
            position,
        }
    }

    /// The first tree ran out of values; `second` is what the second tree
    /// produced at this position.
    #[must_use]
    pub const fn missing_in_first(position: u64, second: i64) -> Self {
        Self {
            kind: DiffKind::MissingInFirst,
            first: None,
            second: Some(second),
            position,
        }
    }

    /// The second tree ran out of values; `first` is what the first tree
    /// produced at this position.
    #[must_use]
    pub const fn missing_in_second(position: u64, first: i64) -> Self {
        Self {
            kind: DiffKind::MissingInSecond,
            first: Some(first),
            second: None,
            position,
        }
    }
}
