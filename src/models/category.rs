use std::str::FromStr;

use crate::error::LedgerError;

/// Closed set of expense categories.
///
/// Declaration order is the canonical ordering used for sorted summaries and
/// for breaking ties between categories with equal totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum Category {
    Food,
    Travel,
    Shopping,
    Bills,
    Entertainment,
    Health,
    Other,
}

impl Category {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Travel => "Travel",
            Self::Shopping => "Shopping",
            Self::Bills => "Bills",
            Self::Entertainment => "Entertainment",
            Self::Health => "Health",
            Self::Other => "Other",
        }
    }

    pub(crate) fn all() -> &'static [Category] {
        &[
            Self::Food,
            Self::Travel,
            Self::Shopping,
            Self::Bills,
            Self::Entertainment,
            Self::Health,
            Self::Other,
        ]
    }
}

impl FromStr for Category {
    type Err = LedgerError;

    /// Case-insensitive; unknown labels are rejected rather than mapped to `Other`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| LedgerError::Validation(format!("unknown category '{wanted}'")))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
