// 👤 Trader Entity - Immutable identity record
// A trader is a name plus the city they work from

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// TRADER ENTITY
// ============================================================================

/// Trader record - constructed once, immutable thereafter.
///
/// Two traders compare equal for distinct/set purposes iff both `name` and
/// `city` match exactly (case-sensitive value equality).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Trader {
    name: String,
    city: String,
}

impl Trader {
    pub fn new(name: impl Into<String>, city: impl Into<String>) -> Self {
        Trader {
            name: name.into(),
            city: city.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn city(&self) -> &str {
        &self.city
    }
}

impl fmt::Display for Trader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.city)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_by_value() {
        let a = Trader::new("Raoul", "Cambridge");
        let b = Trader::new("Raoul", "Cambridge");
        let c = Trader::new("Raoul", "Milan");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_equality_is_case_sensitive() {
        let a = Trader::new("Raoul", "Cambridge");
        let b = Trader::new("raoul", "Cambridge");

        assert_ne!(a, b);
    }

    #[test]
    fn test_display_shows_name_and_city() {
        let trader = Trader::new("Alan", "Cambridge");

        assert_eq!(trader.to_string(), "Alan (Cambridge)");
    }
}
