//! Input parsing helpers for caller-supplied numeric strings

use bigdecimal::BigDecimal;

use crate::types::{LedgerError, LedgerResult};

fn parse_decimal(field: &str, raw: &str) -> LedgerResult<BigDecimal> {
    raw.trim().parse::<BigDecimal>().map_err(|_| {
        LedgerError::InvalidArgument(format!("{} must be a decimal number, got '{}'", field, raw))
    })
}

/// Parse `raw` as a decimal that is zero or greater.
///
/// `field` names the offending input in the error message.
pub fn parse_nonnegative_decimal(field: &str, raw: &str) -> LedgerResult<BigDecimal> {
    let value = parse_decimal(field, raw)?;
    if value < BigDecimal::from(0) {
        return Err(LedgerError::InvalidArgument(format!(
            "{} cannot be negative, got {}",
            field, value
        )));
    }
    Ok(value)
}

/// Parse `raw` as a decimal that is strictly greater than zero.
pub fn parse_positive_decimal(field: &str, raw: &str) -> LedgerResult<BigDecimal> {
    let value = parse_decimal(field, raw)?;
    if value <= BigDecimal::from(0) {
        return Err(LedgerError::InvalidArgument(format!(
            "{} must be positive, got {}",
            field, value
        )));
    }
    Ok(value)
}
