//! Validation layer: free-form array text in, bounded integer sequence out.
//!
//! Rules are applied in a fixed order and the first failure wins:
//!
//! 1. blank input is [`ValidationError::Empty`]
//! 2. only ASCII digits, commas and whitespace are accepted
//! 3. comma-separated segments must be non-empty single integers
//! 4. the element count must lie within [`ArrayBounds`]
//! 5. every value must lie within [`ArrayBounds`]; all offenders are reported

mod error;

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub use error::ValidationError;

/// Accepted element count and value range (both inclusive).
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, JsonSchema,
)]
#[schemars(title = "Input", inline)]
#[serde(default)]
pub struct ArrayBounds {
    /// Fewest elements accepted.
    #[schemars(title = "Minimum Length", range(min = 1))]
    pub min_len: usize,
    /// Most elements accepted.
    #[schemars(title = "Maximum Length", range(min = 1))]
    pub max_len: usize,
    /// Lowest value accepted.
    #[schemars(title = "Minimum Value")]
    pub min_value: i64,
    /// Highest value accepted.
    #[schemars(title = "Maximum Value")]
    pub max_value: i64,
}

impl Default for ArrayBounds {
    fn default() -> Self {
        Self {
            min_len: 1,
            max_len: 50,
            min_value: 1,
            max_value: 100,
        }
    }
}

impl ArrayBounds {
    /// Whether an array of `len` elements is accepted.
    #[must_use]
    pub fn contains_len(&self, len: usize) -> bool {
        (self.min_len..=self.max_len).contains(&len)
    }

    /// Whether `value` is accepted.
    #[must_use]
    pub fn contains_value(&self, value: i64) -> bool {
        (self.min_value..=self.max_value).contains(&value)
    }

    fn check_len(&self, count: usize) -> Result<(), ValidationError> {
        if count == 0 {
            return Err(ValidationError::Empty);
        }
        if count < self.min_len {
            return Err(ValidationError::TooFew {
                count,
                min: self.min_len,
            });
        }
        if count > self.max_len {
            return Err(ValidationError::TooMany {
                count,
                max: self.max_len,
            });
        }
        Ok(())
    }

    fn out_of_range(&self, offending: Vec<String>) -> ValidationError {
        ValidationError::OutOfRange {
            min: self.min_value,
            max: self.max_value,
            offending,
        }
    }
}

/// A sequence that satisfies every [`ArrayBounds`] rule. Immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedArray {
    values: Vec<i64>,
}

impl ValidatedArray {
    /// Validate already-parsed values against `bounds`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] for an empty or over-long sequence, or
    /// when any value falls outside the bounds.
    pub fn new(
        values: Vec<i64>,
        bounds: &ArrayBounds,
    ) -> Result<Self, ValidationError> {
        bounds.check_len(values.len())?;
        let offending: Vec<String> = values
            .iter()
            .filter(|&&v| !bounds.contains_value(v))
            .map(ToString::to_string)
            .collect();
        if !offending.is_empty() {
            return Err(bounds.out_of_range(offending));
        }
        Ok(Self { values })
    }

    /// An empty array. Bypasses the length rule; adapters accept it and
    /// produce an empty trace.
    #[must_use]
    pub fn empty() -> Self {
        Self { values: Vec::new() }
    }

    /// The validated values.
    #[must_use]
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// Number of values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether there are no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Consume into the inner vector.
    #[must_use]
    pub fn into_inner(self) -> Vec<i64> {
        self.values
    }

    /// One-line description, e.g. `"Array of 5 elements (range: 1-9)"`.
    #[must_use]
    pub fn summary(&self) -> String {
        match (self.values.iter().min(), self.values.iter().max()) {
            (Some(lo), Some(hi)) => format!(
                "Array of {} elements (range: {lo}-{hi})",
                self.values.len()
            ),
            _ => "Empty array".into(),
        }
    }
}

impl fmt::Display for ValidatedArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

fn accepted_char(c: char) -> bool {
    c.is_ascii_digit() || c == ',' || c.is_whitespace()
}

/// Parse and bound-check comma-separated integer text.
///
/// # Errors
///
/// Returns the [`ValidationError`] of the first rule the input breaks.
pub fn validate(
    raw: &str,
    bounds: &ArrayBounds,
) -> Result<ValidatedArray, ValidationError> {
    if raw.trim().is_empty() {
        return Err(ValidationError::Empty);
    }

    if let Some((offset, found)) =
        raw.char_indices().find(|&(_, c)| !accepted_char(c))
    {
        return Err(ValidationError::InvalidCharacter { found, offset });
    }

    let mut tokens = Vec::new();
    for (segment, part) in raw.split(',').enumerate() {
        let token = part.trim();
        if token.is_empty() {
            return Err(ValidationError::EmptySegment { segment });
        }
        if token.contains(char::is_whitespace) {
            return Err(ValidationError::InvalidNumber {
                segment,
                token: token.to_owned(),
            });
        }
        tokens.push(token);
    }

    bounds.check_len(tokens.len())?;

    let mut values = Vec::with_capacity(tokens.len());
    let mut offending = Vec::new();
    for token in tokens {
        // Only digits remain, so a parse failure is an i64 overflow.
        match token.parse::<i64>() {
            Ok(v) if bounds.contains_value(v) => values.push(v),
            _ => offending.push(token.to_owned()),
        }
    }
    if !offending.is_empty() {
        log::debug!("rejected out-of-range values: {offending:?}");
        return Err(bounds.out_of_range(offending));
    }

    Ok(ValidatedArray { values })
}

/// A shuffled array of `len` elements (clamped to `bounds`).
///
/// When the value range is wide enough the array is a permutation of
/// `min_value..min_value + len`; otherwise values are drawn uniformly and
/// may repeat.
pub fn random_array<R: Rng + ?Sized>(
    len: usize,
    bounds: &ArrayBounds,
    rng: &mut R,
) -> ValidatedArray {
    let len = len.clamp(bounds.min_len, bounds.max_len.max(bounds.min_len));
    let span = bounds.max_value.saturating_sub(bounds.min_value);
    let values = if span >= 0 && span as u64 + 1 >= len as u64 {
        let mut run: Vec<i64> =
            (0..len as i64).map(|i| bounds.min_value + i).collect();
        run.shuffle(rng);
        run
    } else {
        let hi = bounds.max_value.max(bounds.min_value);
        (0..len)
            .map(|_| rng.random_range(bounds.min_value..=hi))
            .collect()
    };
    ValidatedArray { values }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn check(raw: &str) -> Result<Vec<i64>, ValidationError> {
        validate(raw, &ArrayBounds::default()).map(ValidatedArray::into_inner)
    }

    #[test]
    fn accepts_plain_list() {
        assert_eq!(check("5,3,8,1,9"), Ok(vec![5, 3, 8, 1, 9]));
    }

    #[test]
    fn trims_whitespace_around_values() {
        assert_eq!(check("  1 , 2 ,\t3  "), Ok(vec![1, 2, 3]));
    }

    #[test]
    fn blank_is_empty_input() {
        let err = check("").unwrap_err();
        assert_eq!(err, ValidationError::Empty);
        assert_eq!(err.reason(), "empty input");
        assert_eq!(check("   \n").unwrap_err(), ValidationError::Empty);
    }

    #[test]
    fn rejects_foreign_characters_first() {
        assert_eq!(
            check("1; DROP TABLE"),
            Err(ValidationError::InvalidCharacter {
                found: ';',
                offset: 1
            })
        );
        // Minus signs are not digits, so negatives fail rule 2.
        assert_eq!(
            check("3,-1").unwrap_err().reason(),
            "invalid character"
        );
        // Character rule wins over the range rule.
        assert_eq!(check("101,x").unwrap_err().reason(), "invalid character");
    }

    #[test]
    fn rejects_empty_segments() {
        assert_eq!(
            check("1,,2"),
            Err(ValidationError::EmptySegment { segment: 1 })
        );
        assert_eq!(
            check("1,2,"),
            Err(ValidationError::EmptySegment { segment: 2 })
        );
    }

    #[test]
    fn rejects_whitespace_inside_a_segment() {
        assert_eq!(
            check("1 2,3"),
            Err(ValidationError::InvalidNumber {
                segment: 0,
                token: "1 2".into()
            })
        );
    }

    #[test]
    fn rejects_too_many_elements() {
        let raw = vec!["1"; 51].join(",");
        let err = check(&raw).unwrap_err();
        assert_eq!(err, ValidationError::TooMany { count: 51, max: 50 });
        assert_eq!(err.hint(), "Maximum 50 elements allowed.");
        assert!(check(&vec!["1"; 50].join(",")).is_ok());
    }

    #[test]
    fn reports_every_out_of_range_value() {
        let err = check("101,2,3").unwrap_err();
        assert_eq!(err.offending_values(), &["101".to_owned()]);
        assert_eq!(err.hint(), "Numbers must be between 1 and 100.");

        let err = check("0,50,200").unwrap_err();
        assert_eq!(err.offending_values(), &["0".to_owned(), "200".to_owned()]);
    }

    #[test]
    fn overflowing_token_is_out_of_range() {
        let err = check("99999999999999999999999").unwrap_err();
        assert_eq!(err.reason(), "value out of range");
    }

    #[test]
    fn custom_bounds_apply() {
        let bounds = ArrayBounds {
            min_len: 3,
            max_len: 4,
            min_value: 10,
            max_value: 20,
        };
        assert_eq!(
            validate("10,11", &bounds),
            Err(ValidationError::TooFew { count: 2, min: 3 })
        );
        assert!(validate("10,20,15", &bounds).is_ok());
    }

    #[test]
    fn summary_and_display() {
        let array = validate("5, 3, 8", &ArrayBounds::default()).unwrap();
        assert_eq!(array.to_string(), "5, 3, 8");
        assert_eq!(array.summary(), "Array of 3 elements (range: 3-8)");
        assert_eq!(ValidatedArray::empty().summary(), "Empty array");
    }

    #[test]
    fn new_checks_parsed_values() {
        let bounds = ArrayBounds::default();
        assert!(ValidatedArray::new(vec![1, 100], &bounds).is_ok());
        assert_eq!(
            ValidatedArray::new(vec![], &bounds),
            Err(ValidationError::Empty)
        );
        assert_eq!(
            ValidatedArray::new(vec![0], &bounds)
                .unwrap_err()
                .offending_values(),
            &["0".to_owned()]
        );
    }

    #[test]
    fn random_array_is_a_shuffled_run() {
        let mut rng = StdRng::seed_from_u64(7);
        let bounds = ArrayBounds::default();
        let array = random_array(25, &bounds, &mut rng);
        let mut sorted = array.values().to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, (1..=25).collect::<Vec<_>>());
    }

    #[test]
    fn random_array_respects_narrow_ranges() {
        let mut rng = StdRng::seed_from_u64(11);
        let bounds = ArrayBounds {
            min_len: 1,
            max_len: 50,
            min_value: 1,
            max_value: 3,
        };
        let array = random_array(80, &bounds, &mut rng);
        assert_eq!(array.len(), 50);
        assert!(array.values().iter().all(|&v| (1..=3).contains(&v)));
    }
}
