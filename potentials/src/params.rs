//! Parameter checks shared by the concrete potentials.

use ep_types::ParameterError;

/// Relative tolerance for mixture weights summing to one.
pub(crate) const SIMPLEX_TOLERANCE: f64 = 1e-9;

/// Largest accepted mixture component count.
pub(crate) const MAX_COMPONENTS: u32 = 1 << 16;

pub(crate) fn exact_len(params: &[f64], expected: usize) -> Result<(), ParameterError> {
    if params.len() == expected {
        Ok(())
    } else {
        Err(ParameterError::Length {
            expected,
            got: params.len(),
        })
    }
}

pub(crate) fn finite(name: &'static str, value: f64) -> Result<f64, ParameterError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ParameterError::NonFinite { name, value })
    }
}

pub(crate) fn positive(name: &'static str, value: f64) -> Result<f64, ParameterError> {
    let value = finite(name, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(ParameterError::NotPositive { name, value })
    }
}

pub(crate) fn non_negative(name: &'static str, value: f64) -> Result<f64, ParameterError> {
    let value = finite(name, value)?;
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(ParameterError::Negative { name, value })
    }
}

pub(crate) fn open_unit(name: &'static str, value: f64) -> Result<f64, ParameterError> {
    let value = finite(name, value)?;
    if value > 0.0 && value < 1.0 {
        Ok(value)
    } else {
        Err(ParameterError::OutsideUnitInterval { name, value })
    }
}

// Exact comparison: labels are written as literal +1/-1.
#[allow(clippy::float_cmp)]
pub(crate) fn label(name: &'static str, value: f64) -> Result<f64, ParameterError> {
    if value == 1.0 || value == -1.0 {
        Ok(value)
    } else {
        Err(ParameterError::NotALabel { name, value })
    }
}

pub(crate) fn component_count(value: f64) -> Result<usize, ParameterError> {
    if value.is_finite()
        && value >= 1.0
        && value.fract() == 0.0
        && value <= f64::from(MAX_COMPONENTS)
    {
        Ok(value as usize)
    } else {
        Err(ParameterError::ComponentCount {
            value,
            max: MAX_COMPONENTS,
        })
    }
}
