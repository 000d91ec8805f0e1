//! Target class balance.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SamplingError};

/// Which classes to grow, and to what size.
///
/// Every variant except [`Ratio`](Self::Ratio) grows the selected classes to
/// the size of the majority class.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SamplingStrategy {
    /// Only the smallest class.
    #[default]
    Minority,
    /// Every class except the largest.
    NotMajority,
    /// Every class except the smallest.
    NotMinority,
    /// Every class.
    All,
    /// Same as `NotMajority`.
    Auto,
    /// Binary only: grow the minority class to `floor(r * majority)` rows.
    Ratio(f64),
}

impl SamplingStrategy {
    /// A ratio strategy, checked to lie in `(0, 1]`.
    pub fn ratio(ratio: f64) -> Result<Self> {
        if ratio > 0.0 && ratio <= 1.0 {
            Ok(Self::Ratio(ratio))
        } else {
            Err(SamplingError::InvalidStrategy {
                value: ratio.to_string(),
                reason: "ratio must lie in (0, 1]".to_string(),
            })
        }
    }

    /// Rows to add per class, given the current class sizes.
    ///
    /// Classes needing no rows are left out. Ties for smallest or largest
    /// class go to the lowest label.
    ///
    /// # Errors
    ///
    /// - [`SamplingError::SingleClass`] with fewer than two classes
    /// - [`SamplingError::InvalidStrategy`] for a ratio on non-binary data or
    ///   a ratio that would shrink the minority class
    pub fn samples_to_add(&self, counts: &BTreeMap<i64, usize>) -> Result<BTreeMap<i64, usize>> {
        if counts.len() < 2 {
            return Err(SamplingError::SingleClass {
                classes: counts.len(),
            });
        }

        let mut minority: Option<(i64, usize)> = None;
        let mut majority: Option<(i64, usize)> = None;
        for (&label, &count) in counts {
            if minority.is_none_or(|(_, n)| count < n) {
                minority = Some((label, count));
            }
            if majority.is_none_or(|(_, n)| count > n) {
                majority = Some((label, count));
            }
        }
        let (Some((minority_label, minority_count)), Some((majority_label, majority_count))) =
            (minority, majority)
        else {
            return Ok(BTreeMap::new());
        };

        let grow = |selected: fn(i64, i64, i64) -> bool| {
            counts
                .iter()
                .filter(|(label, _)| selected(**label, minority_label, majority_label))
                .map(|(&label, &count)| (label, majority_count - count))
                .filter(|(_, add)| *add > 0)
                .collect::<BTreeMap<_, _>>()
        };

        let targets = match *self {
            Self::Minority => grow(|label, minority, _| label == minority),
            Self::NotMajority | Self::Auto => grow(|label, _, majority| label != majority),
            Self::NotMinority => grow(|label, minority, _| label != minority),
            Self::All => grow(|_, _, _| true),
            Self::Ratio(ratio) => {
                if counts.len() != 2 {
                    return Err(SamplingError::InvalidStrategy {
                        value: self.to_string(),
                        reason: format!("a ratio needs two classes, found {}", counts.len()),
                    });
                }
                let target = (ratio * majority_count as f64).floor() as usize;
                if target < minority_count {
                    return Err(SamplingError::InvalidStrategy {
                        value: self.to_string(),
                        reason: format!(
                            "target of {target} rows is below the {minority_count} minority rows"
                        ),
                    });
                }
                let mut targets = BTreeMap::new();
                if target > minority_count {
                    targets.insert(minority_label, target - minority_count);
                }
                targets
            }
        };
        Ok(targets)
    }
}

impl fmt::Display for SamplingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Minority => f.write_str("minority"),
            Self::NotMajority => f.write_str("not majority"),
            Self::NotMinority => f.write_str("not minority"),
            Self::All => f.write_str("all"),
            Self::Auto => f.write_str("auto"),
            Self::Ratio(ratio) => write!(f, "{ratio}"),
        }
    }
}

impl FromStr for SamplingStrategy {
    type Err = SamplingError;

    /// Accepts the strategy names in any case, with spaces, `_` or `-`
    /// between words, or a ratio in `(0, 1]`.
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace(['_', '-'], " ");
        match normalized.as_str() {
            "minority" => Ok(Self::Minority),
            "not majority" => Ok(Self::NotMajority),
            "not minority" => Ok(Self::NotMinority),
            "all" => Ok(Self::All),
            "auto" => Ok(Self::Auto),
            other => match other.parse::<f64>() {
                Ok(ratio) => Self::ratio(ratio).map_err(|_| SamplingError::InvalidStrategy {
                    value: s.to_string(),
                    reason: "ratio must lie in (0, 1]".to_string(),
                }),
                Err(_) => Err(SamplingError::InvalidStrategy {
                    value: s.to_string(),
                    reason: "expected minority, not majority, not minority, all, auto or a ratio"
                        .to_string(),
                }),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(pairs: &[(i64, usize)]) -> BTreeMap<i64, usize> {
        pairs.iter().copied().collect()
    }

    #[test]
    fn parses_names_and_ratios() {
        assert_eq!("Minority".parse::<SamplingStrategy>().unwrap(), SamplingStrategy::Minority);
        assert_eq!(
            "not_majority".parse::<SamplingStrategy>().unwrap(),
            SamplingStrategy::NotMajority
        );
        assert_eq!(
            " not minority ".parse::<SamplingStrategy>().unwrap(),
            SamplingStrategy::NotMinority
        );
        assert_eq!("0.5".parse::<SamplingStrategy>().unwrap(), SamplingStrategy::Ratio(0.5));
        assert!("1.5".parse::<SamplingStrategy>().is_err());
        assert!("majority".parse::<SamplingStrategy>().is_err());
    }

    #[test]
    fn minority_grows_to_majority() {
        let add = SamplingStrategy::Minority
            .samples_to_add(&counts(&[(0, 90), (1, 10)]))
            .unwrap();
        assert_eq!(add, counts(&[(1, 80)]));
    }

    #[test]
    fn multiclass_selections() {
        let c = counts(&[(0, 50), (1, 10), (2, 30)]);
        assert_eq!(
            SamplingStrategy::NotMajority.samples_to_add(&c).unwrap(),
            counts(&[(1, 40), (2, 20)])
        );
        assert_eq!(
            SamplingStrategy::NotMinority.samples_to_add(&c).unwrap(),
            counts(&[(2, 20)])
        );
        assert_eq!(
            SamplingStrategy::All.samples_to_add(&c).unwrap(),
            SamplingStrategy::Auto.samples_to_add(&c).unwrap()
        );
    }

    #[test]
    fn ratio_targets_share_of_majority() {
        let c = counts(&[(0, 100), (1, 10)]);
        assert_eq!(
            SamplingStrategy::Ratio(0.5).samples_to_add(&c).unwrap(),
            counts(&[(1, 40)])
        );
        assert!(matches!(
            SamplingStrategy::Ratio(0.05).samples_to_add(&c),
            Err(SamplingError::InvalidStrategy { .. })
        ));
    }

    #[test]
    fn single_class_is_rejected() {
        assert!(matches!(
            SamplingStrategy::Minority.samples_to_add(&counts(&[(0, 5)])),
            Err(SamplingError::SingleClass { classes: 1 })
        ));
    }
}
