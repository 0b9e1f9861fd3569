//! Summation Utility

use std::iter::Sum;

use serde_json::{Number, Value};

use crate::error::{value_kind, HelperError, Result};

/// Adds up `numbers` from left to right.
///
/// An empty slice sums to zero. Overflow behaviour is that of `T`'s
/// own addition.
///
/// # Example
///
/// ```
/// use workflow_helpers::helpers::calculate_sum;
///
/// assert_eq!(calculate_sum(&[1, 2, 3]), 6);
/// assert_eq!(calculate_sum::<f64>(&[]), 0.0);
/// ```
pub fn calculate_sum<T>(numbers: &[T]) -> T
where
    T: Copy + Sum<T>,
{
    numbers.iter().copied().sum()
}

/// Running total that stays integral until a float shows up.
///
/// The integral total is wide enough for any mix of `i64` and `u64`
/// inputs; the final value must fit one of them.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Total {
    Integer(i128),
    Float(f64),
}

impl Total {
    fn plus(self, n: &Number) -> Result<Self> {
        let integral = n
            .as_i64()
            .map(i128::from)
            .or_else(|| n.as_u64().map(i128::from));

        match (self, integral) {
            (Total::Integer(acc), Some(i)) => acc
                .checked_add(i)
                .map(Total::Integer)
                .ok_or(HelperError::Overflow),
            (Total::Integer(acc), None) => Ok(Total::Float(acc as f64 + number_as_f64(n)?)),
            (Total::Float(acc), _) => Ok(Total::Float(acc + number_as_f64(n)?)),
        }
    }

    fn into_value(self) -> Result<Value> {
        match self {
            Total::Integer(i) => {
                if let Ok(signed) = i64::try_from(i) {
                    Ok(Value::from(signed))
                } else if let Ok(unsigned) = u64::try_from(i) {
                    Ok(Value::from(unsigned))
                } else {
                    Err(HelperError::Overflow)
                }
            }
            Total::Float(f) => Ok(Value::from(f)),
        }
    }
}

fn number_as_f64(n: &Number) -> Result<f64> {
    n.as_f64()
        .ok_or_else(|| HelperError::InvalidInput(format!("'{}' is not a representable number", n)))
}

/// Sums a JSON list of numbers.
///
/// Integers are added exactly; once a floating-point value is seen the
/// total continues as a float. An integral total outside the `i64` and
/// `u64` ranges is an overflow. Non-numeric elements are rejected.
pub fn sum_values(values: &[Value]) -> Result<Value> {
    let mut total = Total::Integer(0);

    for (index, value) in values.iter().enumerate() {
        let Value::Number(n) = value else {
            return Err(HelperError::InvalidInput(format!(
                "element {} of 'numbers' must be a number, found {}",
                index,
                value_kind(value)
            )));
        };
        total = total.plus(n)?;
    }

    total.into_value()
}
