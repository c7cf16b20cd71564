//! Stateless constraint checks for user supplied values.
//!
//! A [`Validatable`] pairs a text or numeric value with the constraints it must
//! satisfy. Constraints that do not apply to the value's kind (a length bound on
//! a number, a numeric bound on text) are skipped rather than reported.

/// The value under validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    Text(&'a str),
    Number(f64),
}

impl Value<'_> {
    fn is_blank(&self) -> bool {
        match self {
            Value::Text(text) => text.trim().is_empty(),
            Value::Number(number) => number.to_string().trim().is_empty(),
        }
    }
}

/// A value together with the constraints it has to meet.
#[derive(Debug, Clone, PartialEq)]
pub struct Validatable<'a> {
    pub value: Value<'a>,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl<'a> Validatable<'a> {
    /// Starts an unconstrained check of a text value
    pub fn text(value: &'a str) -> Self {
        Self::of(Value::Text(value))
    }

    /// Starts an unconstrained check of a numeric value
    pub fn number(value: f64) -> Self {
        Self::of(Value::Number(value))
    }

    fn of(value: Value<'a>) -> Self {
        Validatable {
            value,
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Returns whether every supplied constraint holds
    pub fn is_valid(&self) -> bool {
        validate(self)
    }
}

/// Checks `input` against all of its constraints.
///
/// Lengths are counted in characters, not bytes. A NaN number never satisfies
/// a numeric bound.
pub fn validate(input: &Validatable<'_>) -> bool {
    if input.required && input.value.is_blank() {
        return false;
    }

    match input.value {
        Value::Text(text) => {
            let length = text.chars().count();
            input.min_length.is_none_or(|min| length >= min)
                && input.max_length.is_none_or(|max| length <= max)
        }
        Value::Number(number) => {
            input.min.is_none_or(|min| number >= min) && input.max.is_none_or(|max| number <= max)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconstrained_values_are_valid() {
        assert!(Validatable::text("").is_valid());
        assert!(Validatable::number(-4.0).is_valid());
    }

    #[test]
    fn required_text_rejects_blank_values() {
        assert!(!Validatable::text("").required().is_valid());
        assert!(!Validatable::text("   \t").required().is_valid());
        assert!(Validatable::text(" a ").required().is_valid());
    }

    #[test]
    fn required_number_is_always_present() {
        assert!(Validatable::number(0.0).required().is_valid());
    }

    #[test]
    fn title_boundary_is_inclusive() {
        let at_limit = "a".repeat(32);
        let over_limit = "a".repeat(33);

        assert!(Validatable::text(&at_limit).required().max_length(32).is_valid());
        assert!(!Validatable::text(&over_limit).required().max_length(32).is_valid());
    }

    #[test]
    fn whitespace_title_fails_regardless_of_length() {
        let blank = " ".repeat(10);

        assert!(!Validatable::text(&blank).required().max_length(32).is_valid());
    }

    #[test]
    fn min_length_counts_characters() {
        assert!(Validatable::text("héllo").min_length(5).is_valid());
        assert!(!Validatable::text("four").min_length(5).is_valid());
    }

    #[test]
    fn people_lower_bound() {
        assert!(!Validatable::number(0.0).required().min(1.0).is_valid());
        assert!(Validatable::number(1.0).required().min(1.0).is_valid());
    }

    #[test]
    fn max_rejects_values_above_the_cap() {
        assert!(Validatable::number(5.0).max(5.0).is_valid());
        assert!(Validatable::number(2.0).max(5.0).is_valid());
        assert!(!Validatable::number(6.0).max(5.0).is_valid());
    }

    #[test]
    fn nan_never_satisfies_numeric_bounds() {
        assert!(!Validatable::number(f64::NAN).min(1.0).is_valid());
        assert!(!Validatable::number(f64::NAN).max(1.0).is_valid());
    }

    #[test]
    fn mismatched_constraints_are_skipped() {
        assert!(Validatable::number(3.0).min_length(10).max_length(1).is_valid());
        assert!(Validatable::text("abc").min(10.0).max(1.0).is_valid());
    }

    #[test]
    fn all_constraints_must_hold() {
        let input = Validatable::text("abcdef").required().min_length(2).max_length(4);

        assert!(!validate(&input));
    }
}
