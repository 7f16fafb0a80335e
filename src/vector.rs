//! Single pass numeric helpers over slices of values.

use num_traits::Float;

use crate::error::{Error, Result};

/// How [`normalize`] rescales a vector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Normalization {
    /// Linear rescaling into `[0, 1]` using the minimum and maximum values.
    #[default]
    MaxMin,
    /// Division by the sum of the values, so the result sums to one.
    SumToOne,
}

/// Returns the `(max, min)` pair of the values, or `None` if there are none.
///
/// # Examples
///
/// ```
/// use amgraph::vector::max_min;
///
/// assert_eq!(max_min(&[3, -1, 7, 0]), Some((7, -1)));
/// assert_eq!(max_min::<u8>(&[]), None);
/// ```
pub fn max_min<T: PartialOrd + Copy>(values: &[T]) -> Option<(T, T)> {
    let (&first, rest) = values.split_first()?;

    Some(rest.iter().fold((first, first), |(max, min), &value| {
        (
            if value > max { value } else { max },
            if value < min { value } else { min },
        )
    }))
}

/// Normalizes the values in place.
///
/// Fails with [`Error::EmptyVector`] if there are no values and with [`Error::NonFiniteElement`]
/// at the first NaN or infinity. [`Normalization::MaxMin`] also fails with
/// [`Error::DegenerateRange`] when every value is equal and [`Normalization::SumToOne`] with
/// [`Error::ZeroSum`] when the values sum to zero. The values are left untouched on failure.
///
/// # Examples
///
/// ```
/// use amgraph::vector::{normalize, Normalization};
///
/// let mut values = vec![1.0, 3.0, 5.0];
/// normalize(&mut values, Normalization::MaxMin).unwrap();
/// assert_eq!(values, vec![0.0, 0.5, 1.0]);
///
/// let mut values = vec![1.0, 3.0, 4.0];
/// normalize(&mut values, Normalization::SumToOne).unwrap();
/// assert_eq!(values, vec![0.125, 0.375, 0.5]);
/// ```
pub fn normalize<T: Float>(values: &mut [T], method: Normalization) -> Result<()> {
    if values.is_empty() {
        return Err(Error::EmptyVector);
    }

    if let Some(index) = values.iter().position(|value| !value.is_finite()) {
        return Err(Error::NonFiniteElement { index });
    }

    match method {
        Normalization::MaxMin => {
            let (max, min) = max_min(values).ok_or(Error::EmptyVector)?;

            if min >= max {
                return Err(Error::DegenerateRange);
            }

            let range = max - min;
            if range.is_finite() {
                for value in values.iter_mut() {
                    *value = (*value - min) / range;
                }
            } else {
                let two = T::one() + T::one();
                let (min, range) = (min / two, max / two - min / two);
                for value in values.iter_mut() {
                    *value = (*value / two - min) / range;
                }
            }
        }
        Normalization::SumToOne => {
            let sum = values.iter().fold(T::zero(), |sum, &value| sum + value);
            if sum.is_zero() {
                return Err(Error::ZeroSum);
            }

            for value in values.iter_mut() {
                *value = *value / sum;
            }
        }
    }

    Ok(())
}

/// Returns the euclidean norm of the values, zero if there are none.
///
/// # Examples
///
/// ```
/// use amgraph::vector::euclidean_norm;
///
/// assert_eq!(euclidean_norm(&[3.0, 4.0]), 5.0);
/// ```
pub fn euclidean_norm<T: Float>(values: &[T]) -> T {
    values
        .iter()
        .fold(T::zero(), |sum, &value| sum + value * value)
        .sqrt()
}

/// Returns the euclidean distance between two vectors of the same length.
///
/// # Examples
///
/// ```
/// use amgraph::vector::euclidean_distance;
///
/// assert_eq!(euclidean_distance(&[1.0, 1.0], &[4.0, 5.0]), Ok(5.0));
/// assert!(euclidean_distance(&[1.0], &[1.0, 2.0]).is_err());
/// ```
pub fn euclidean_distance<T: Float>(a: &[T], b: &[T]) -> Result<T> {
    if a.len() != b.len() {
        return Err(Error::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    Ok(a.iter()
        .zip(b)
        .fold(T::zero(), |sum, (&a, &b)| sum + (a - b) * (a - b))
        .sqrt())
}
