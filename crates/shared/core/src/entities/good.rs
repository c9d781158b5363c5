use serde::{Deserialize, Serialize};

/// Good traded in the economy
///
/// The set is closed: every agent produces one of the two goods and
/// consumes the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Good {
    A,
    B,
}

impl Good {
    /// Every good, in clearing order
    pub const ALL: [Good; 2] = [Good::A, Good::B];

    /// Returns the other good
    pub fn counterpart(&self) -> Self {
        match self {
            Good::A => Good::B,
            Good::B => Good::A,
        }
    }
}

impl std::fmt::Display for Good {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Good::A => write!(f, "A"),
            Good::B => write!(f, "B"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counterpart_is_involution() {
        for good in Good::ALL {
            assert_ne!(good, good.counterpart());
            assert_eq!(good, good.counterpart().counterpart());
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Good::A.to_string(), "A");
        assert_eq!(Good::B.to_string(), "B");
    }
}
