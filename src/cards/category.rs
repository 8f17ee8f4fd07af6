//! Card categories.
//!
//! A category names both a card type's functional class and the
//! destination pile it targets: every player owns one pile per category,
//! and a card is always placed on the pile matching its own category.

use serde::{Deserialize, Serialize};

/// A card type's functional class.
///
/// `Status` and `Speed` cards set or clear conditions; the four distance
/// tiers (`Min` through `Max`) contribute mileage toward the win
/// threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    /// Go / stop conditions (collisions, fuel, tires).
    Status,
    /// Speed restrictions (city limits, open country).
    Speed,
    /// Shortest distance tier.
    Min,
    /// Low distance tier.
    Low,
    /// High distance tier.
    High,
    /// Longest distance tier.
    Max,
}

impl Category {
    /// All categories, in pile-layout order.
    pub const ALL: [Category; 6] = [
        Category::Status,
        Category::Speed,
        Category::Min,
        Category::Low,
        Category::High,
        Category::Max,
    ];

    /// The four distance tiers, in ascending value order.
    pub const DISTANCE: [Category; 4] =
        [Category::Min, Category::Low, Category::High, Category::Max];

    /// Check whether this category contributes mileage.
    #[must_use]
    pub const fn is_distance(self) -> bool {
        matches!(
            self,
            Category::Min | Category::Low | Category::High | Category::Max
        )
    }

    /// Stable lowercase name, matching the schema identifiers.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Category::Status => "status",
            Category::Speed => "speed",
            Category::Min => "min",
            Category::Low => "low",
            Category::High => "high",
            Category::Max => "max",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_split() {
        assert!(!Category::Status.is_distance());
        assert!(!Category::Speed.is_distance());
        for category in Category::DISTANCE {
            assert!(category.is_distance());
        }
    }

    #[test]
    fn test_all_covers_every_category() {
        assert_eq!(Category::ALL.len(), 6);
        for category in Category::DISTANCE {
            assert!(Category::ALL.contains(&category));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Category::Status), "status");
        assert_eq!(format!("{}", Category::Max), "max");
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Category::Low).unwrap();
        assert_eq!(json, "\"low\"");
    }
}
