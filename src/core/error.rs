use thiserror::Error;

/// Errors raised by the amortization calculator and the projection engine.
///
/// There is a single failure kind: a parameter outside its valid domain.
/// It is raised at the computation that first sees the bad value and no
/// partial results are produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectionError {
    #[error("invalid parameter `{name}`: {reason} (got {value})")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
}

impl ProjectionError {
    pub fn invalid(name: &'static str, value: impl Into<f64>, reason: &'static str) -> Self {
        ProjectionError::InvalidParameter {
            name,
            value: value.into(),
            reason,
        }
    }

    /// Name of the offending parameter.
    pub fn parameter(&self) -> &'static str {
        match self {
            ProjectionError::InvalidParameter { name, .. } => name,
        }
    }
}

/// Reject negative, NaN or infinite values.
pub(crate) fn ensure_non_negative(name: &'static str, value: f64) -> Result<f64, ProjectionError> {
    if !value.is_finite() {
        return Err(ProjectionError::invalid(name, value, "must be finite"));
    }
    if value < 0.0 {
        return Err(ProjectionError::invalid(name, value, "must not be negative"));
    }
    Ok(value)
}

/// Reject values outside `[0, 1]`.
pub(crate) fn ensure_fraction(name: &'static str, value: f64) -> Result<f64, ProjectionError> {
    ensure_non_negative(name, value)?;
    if value > 1.0 {
        return Err(ProjectionError::invalid(name, value, "must be a fraction no greater than 1"));
    }
    Ok(value)
}

pub(crate) fn ensure_positive_years(name: &'static str, years: u32) -> Result<u32, ProjectionError> {
    if years == 0 {
        return Err(ProjectionError::invalid(name, years, "must be a positive number of years"));
    }
    Ok(years)
}

/// Longest loan term, horizon or comparison span accepted, in years.
pub const MAX_YEARS: u32 = 100;

/// Reject zero and anything above [`MAX_YEARS`].
pub(crate) fn ensure_year_count(name: &'static str, years: u32) -> Result<u32, ProjectionError> {
    ensure_positive_years(name, years)?;
    if years > MAX_YEARS {
        return Err(ProjectionError::invalid(name, years, "must not exceed 100 years"));
    }
    Ok(years)
}
