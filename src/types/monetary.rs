use crate::types::errors::MonetaryError;
use serde::{de, Deserialize, Deserializer};
use std::cmp::Ordering;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::iter::Sum;
use std::ops::AddAssign;
use std::str::FromStr;
use tracing::error;

const DECIMAL_PLACES: usize = 4;

/// A non-negative, finite monetary amount.
///
/// The value is kept exactly as it was read; no rounding or currency conversion is applied.
/// Because NaN and infinities are rejected at construction, amounts have a total order.
#[derive(Debug, Clone, Copy)]
pub struct Monetary(f64);

impl Monetary {
    pub fn new(value: f64) -> Result<Self, MonetaryError> {
        if !value.is_finite() {
            return Err(MonetaryError::NotFinite)
        }

        if value < 0.0 {
            return Err(MonetaryError::Negative(value))
        }

        //NOTE: Normalises -0.0 so that it compares equal to 0.0 under the total order
        Ok(Monetary(value + 0.0))
    }

    pub fn zero() -> Self {
        Monetary(0.0)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    pub fn checked_add(self, rhs: Monetary) -> Option<Monetary> {
        let sum = self.0 + rhs.0;
        sum.is_finite().then_some(Monetary(sum))
    }
}

impl Default for Monetary {
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialEq for Monetary {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Monetary {}

impl PartialOrd for Monetary {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Monetary {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Adds in place; a sum that would not be finite is logged and the previous value is kept.
impl AddAssign<Monetary> for Monetary {
    fn add_assign(&mut self, rhs: Monetary) {
        if let Some(new_val) = self.checked_add(rhs) {
            self.0 = new_val.0;
        } else {
            error!("Monetary AddAssign error: Overflow")
        }
    }
}

/// Totals with `AddAssign`, so an addend that would overflow is skipped after being logged and the
/// result under-reports instead of becoming infinite.
impl Sum for Monetary {
    fn sum<I: Iterator<Item = Monetary>>(iter: I) -> Self {
        iter.fold(Monetary::zero(), |mut total, amount| {
            total += amount;
            total
        })
    }
}

impl<'a> Sum<&'a Monetary> for Monetary {
    fn sum<I: Iterator<Item = &'a Monetary>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl TryFrom<f64> for Monetary {
    type Error = MonetaryError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Monetary::new(value)
    }
}

impl Display for Monetary {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{:.width$}", self.0, width = DECIMAL_PLACES)
    }
}

impl FromStr for Monetary {
    type Err = MonetaryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.is_empty() {
            return Err(MonetaryError::InvalidFormat("Value is an empty string".to_string()));
        }

        Monetary::new(value.parse::<f64>()?)
    }
}

impl<'de> Deserialize<'de> for Monetary {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Monetary::new(value).map_err(de::Error::custom)
    }
}
