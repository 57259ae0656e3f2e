//! Star rating value object

use crate::core::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A review star rating, always within 1..=5 (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Create a rating, rejecting values outside 1..=5
    pub fn new(value: i64) -> Result<Self, DomainError> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(DomainError::InvalidRating(value))
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Zero-based bucket index (1 star -> 0, 5 stars -> 4)
    pub fn bucket(&self) -> usize {
        (self.0 - Self::MIN) as usize
    }

    pub fn is_positive(&self) -> bool {
        self.0 >= 4
    }

    pub fn is_negative(&self) -> bool {
        self.0 <= 2
    }

    /// All valid ratings in ascending order
    pub fn all() -> impl Iterator<Item = Rating> {
        (Self::MIN..=Self::MAX).map(Rating)
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for Rating {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Rating::new(value)
    }
}

impl Serialize for Rating {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.0)
    }
}

impl<'de> Deserialize<'de> for Rating {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        Rating::new(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bounds() {
        assert!(Rating::new(0).is_err());
        assert!(Rating::new(6).is_err());
        assert_eq!(Rating::new(1).unwrap().bucket(), 0);
        assert_eq!(Rating::new(5).unwrap().bucket(), 4);
    }

    #[test]
    fn test_rating_sentiment() {
        assert!(Rating::new(5).unwrap().is_positive());
        assert!(Rating::new(2).unwrap().is_negative());
        let three = Rating::new(3).unwrap();
        assert!(!three.is_positive() && !three.is_negative());
    }

    #[test]
    fn test_rating_deserialize_rejects_out_of_range() {
        assert!(serde_json::from_str::<Rating>("9").is_err());
        assert_eq!(serde_json::from_str::<Rating>("4").unwrap().value(), 4);
    }

    #[test]
    fn test_all_ratings() {
        let values: Vec<u8> = Rating::all().map(|r| r.value()).collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5]);
    }
}
