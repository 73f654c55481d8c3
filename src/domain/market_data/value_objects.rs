use derive_more::{Constructor, Display, From, Into};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Value Object - price level
#[derive(
    Debug, Clone, Copy, PartialEq, Display, From, Into, Constructor, Serialize, Deserialize,
)]
pub struct Price(f64);

impl Price {
    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}

impl PartialOrd for Price {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

/// Value Object - traded volume
#[derive(
    Debug, Clone, Copy, PartialEq, Display, From, Into, Constructor, Serialize, Deserialize,
)]
pub struct Volume(f64);

impl Volume {
    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Value Object - epoch milliseconds, UTC
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    From,
    Into,
    Constructor,
    Serialize,
    Deserialize,
)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn value(&self) -> i64 {
        self.0
    }

    pub fn as_f64(&self) -> f64 {
        self.0 as f64
    }

    pub fn from_millis(value: i64) -> Self {
        Self(value)
    }
}
