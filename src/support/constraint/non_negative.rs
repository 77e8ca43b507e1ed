use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type for values that are zero or greater.
///
/// # Examples
///
/// ```
/// use twine_wind::support::constraint::NonNegative;
/// use uom::si::{angle::degree, f64::Angle};
///
/// assert!(NonNegative::new(Angle::new::<degree>(0.0)).is_ok());
/// assert!(NonNegative::new(Angle::new::<degree>(12.0)).is_ok());
/// assert!(NonNegative::new(Angle::new::<degree>(-1.0)).is_err());
/// assert!(NonNegative::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Constructs a [`Constrained<T, NonNegative>`] if the value is non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, NonNegative>, ConstraintError> {
        Constrained::<T, NonNegative>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{angle::degree, f64::Angle};

    #[test]
    fn floats() {
        assert!(NonNegative::new(0.0).is_ok());
        assert!(NonNegative::new(3.5).is_ok());
        assert_eq!(NonNegative::new(-0.5), Err(ConstraintError::Negative));
        assert_eq!(NonNegative::new(f64::NAN), Err(ConstraintError::NotANumber));
    }

    #[test]
    fn angles() {
        let stalled = Angle::new::<degree>(18.0);
        assert_eq!(NonNegative::new(stalled).unwrap().into_inner(), stalled);

        assert!(NonNegative::new(Angle::new::<degree>(-0.1)).is_err());
    }
}
