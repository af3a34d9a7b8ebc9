//! Certainty-factor algebra.
//!
//! Evidence for the same hypothesis is combined with
//! `a ⊕ b = a + b·(1 − a)`. The operator is associative and commutative with
//! `0` as identity, so a disease's confidence is a fold over its weights in
//! any order.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CertaintyFactor(f64);

impl CertaintyFactor {
    /// No evidence either way.
    pub const IDENTITY: Self = Self(0.0);

    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Parallel combination of two pieces of evidence.
    pub fn combine(self, other: Self) -> Self {
        Self(self.0 + other.0 * (1.0 - self.0))
    }

    /// Folds any number of weights into one factor.
    pub fn combine_all<I>(weights: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        weights.into_iter().map(Self::new).collect()
    }
}

impl FromIterator<CertaintyFactor> for CertaintyFactor {
    fn from_iter<T: IntoIterator<Item = CertaintyFactor>>(iter: T) -> Self {
        iter.into_iter().fold(Self::IDENTITY, Self::combine)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WeightError {
    #[error("Certainty factor must be a number")]
    NotANumber,
    #[error("Certainty factor {0} is outside [-1, 1]")]
    OutOfRange(f64),
}

/// An expert-entered rule weight, guaranteed finite and within [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Weight(f64);

impl Weight {
    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Weight {
    type Error = WeightError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(WeightError::NotANumber);
        }
        if !(-1.0..=1.0).contains(&value) {
            return Err(WeightError::OutOfRange(value));
        }
        Ok(Self(value))
    }
}

impl std::str::FromStr for Weight {
    type Err = WeightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s.trim().parse().map_err(|_| WeightError::NotANumber)?;
        Self::try_from(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_single_weight_is_identity() {
        for w in [-1.0, -0.35, 0.0, 0.4, 1.0] {
            assert_eq!(CertaintyFactor::combine_all([w]).value(), w);
        }
    }

    #[test]
    fn test_two_positive_weights() {
        let cf = CertaintyFactor::combine_all([0.8, 0.5]);
        assert!((cf.value() - 0.9).abs() < EPS);
    }

    #[test]
    fn test_combine_is_commutative_and_associative() {
        let permutations = [
            [0.6, 0.3, -0.2],
            [0.6, -0.2, 0.3],
            [0.3, 0.6, -0.2],
            [0.3, -0.2, 0.6],
            [-0.2, 0.6, 0.3],
            [-0.2, 0.3, 0.6],
        ];
        let expected = CertaintyFactor::combine_all(permutations[0]).value();
        for p in permutations {
            let cf = CertaintyFactor::combine_all(p).value();
            assert!((cf - expected).abs() < EPS, "{:?} gave {}", p, cf);
        }

        let a = CertaintyFactor::new(0.6);
        let b = CertaintyFactor::new(0.3);
        let c = CertaintyFactor::new(-0.2);
        let left = a.combine(b).combine(c).value();
        let right = a.combine(b.combine(c)).value();
        assert!((left - right).abs() < EPS);
    }

    #[test]
    fn test_from_iterator_matches_combine_all() {
        let collected: CertaintyFactor = [0.7, 0.2]
            .into_iter()
            .map(CertaintyFactor::new)
            .collect();
        assert_eq!(collected, CertaintyFactor::combine_all([0.7, 0.2]));
    }

    #[test]
    fn test_empty_fold_is_identity() {
        assert_eq!(
            CertaintyFactor::combine_all(std::iter::empty()),
            CertaintyFactor::IDENTITY
        );
    }

    #[test]
    fn test_weight_validation() {
        assert!(Weight::try_from(0.75).is_ok());
        assert!(Weight::try_from(-1.0).is_ok());
        assert_eq!(Weight::try_from(1.5), Err(WeightError::OutOfRange(1.5)));
        assert_eq!(Weight::try_from(f64::NAN), Err(WeightError::NotANumber));
        assert_eq!("0.4".parse::<Weight>().map(Weight::value), Ok(0.4));
        assert_eq!("abc".parse::<Weight>(), Err(WeightError::NotANumber));
    }
}
