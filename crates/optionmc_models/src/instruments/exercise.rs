//! Exercise schedules for options.

use optionmc_core::types::time::Date;

use super::InstrumentError;

/// When an option may be exercised.
///
/// Monte Carlo European pricing only consumes the final date; the American
/// variant exists so instrument descriptions can round-trip and engines can
/// reject what they cannot price.
///
/// # Examples
/// ```
/// use optionmc_core::types::time::Date;
/// use optionmc_models::instruments::Exercise;
///
/// let expiry = Date::from_ymd(2025, 6, 20).unwrap();
/// let exercise = Exercise::european(expiry);
/// assert!(exercise.is_european());
/// assert_eq!(exercise.last_date(), expiry);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Exercise {
    /// Exercise only at expiry
    European {
        /// Expiry date
        expiry: Date,
    },
    /// Exercise at any date inside the window
    American {
        /// First permitted exercise date
        earliest: Date,
        /// Last permitted exercise date
        latest: Date,
    },
}

impl Exercise {
    /// Creates a European exercise at the given expiry.
    #[inline]
    pub fn european(expiry: Date) -> Self {
        Exercise::European { expiry }
    }

    /// Creates an American exercise window.
    ///
    /// # Errors
    /// - `InstrumentError::InvalidExerciseWindow` if `latest < earliest`
    pub fn american(earliest: Date, latest: Date) -> Result<Self, InstrumentError> {
        if latest < earliest {
            return Err(InstrumentError::InvalidExerciseWindow {
                earliest: earliest.to_string(),
                latest: latest.to_string(),
            });
        }
        Ok(Exercise::American { earliest, latest })
    }

    /// Returns the last date on which exercise is possible.
    #[inline]
    pub fn last_date(&self) -> Date {
        match self {
            Exercise::European { expiry } => *expiry,
            Exercise::American { latest, .. } => *latest,
        }
    }

    /// Whether this is a European exercise.
    #[inline]
    pub fn is_european(&self) -> bool {
        matches!(self, Exercise::European { .. })
    }
}
