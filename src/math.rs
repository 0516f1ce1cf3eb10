//! Math utility functions.

use num_traits::Float;

/// Return the smallest of the given values, or zero when given none.
///
/// The zero default for empty input is part of the contract; callers rely on
/// it instead of an error or an infinity sentinel.
pub fn min<T: Float>(values: impl IntoIterator<Item = T>) -> T {
    let mut values = values.into_iter();
    let first = match values.next() {
        Some(value) => value,
        None => return T::zero(),
    };
    values.fold(first, T::min)
}

/// Return the largest of the given values, or zero when given none.
///
/// The zero default for empty input is part of the contract; callers rely on
/// it instead of an error or an infinity sentinel.
pub fn max<T: Float>(values: impl IntoIterator<Item = T>) -> T {
    let mut values = values.into_iter();
    let first = match values.next() {
        Some(value) => value,
        None => return T::zero(),
    };
    values.fold(first, T::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Component;

    #[test]
    fn min_and_max_over_values() {
        let values: [Component; 3] = [0.3, 0.1, 0.2];
        assert_eq!(min(values), 0.1);
        assert_eq!(max(values), 0.3);

        let values: [Component; 3] = [-1.0, 0.0, 1.0];
        assert_eq!(min(values), -1.0);
        assert_eq!(max(values), 1.0);
    }

    #[test]
    fn single_value_is_its_own_extremum() {
        let values: [Component; 1] = [0.5];
        assert_eq!(min(values), 0.5);
        assert_eq!(max(values), 0.5);
    }

    #[test]
    fn empty_input_yields_zero() {
        assert_eq!(min(std::iter::empty::<Component>()), 0.0);
        assert_eq!(max(std::iter::empty::<Component>()), 0.0);
    }
}
