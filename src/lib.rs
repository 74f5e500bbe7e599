//! R bindings for fastArrayutils.
//!
//! Provides R access to the fastArrayutils Rust library via extendr. The
//! bindings are compiled with the `r` feature; the argument parsing helpers
//! below are always available so they can be tested without an R toolchain.

#![allow(non_snake_case)]

#[cfg(feature = "r")]
use extendr_api::prelude::*;

use ::fastArrayutils::prelude::{ArrayError, PadDirection, Validator};

#[cfg(feature = "r")]
use ::fastArrayutils::prelude::{
    pad_edges_to_match as pad_edges, repeat_until_n as repeat_n, tile_until_n as tile_n,
    PeriodicProcessSample,
};

// ============================================================================
// Helper Functions
// ============================================================================

/// Parse pad direction from string
#[cfg_attr(not(feature = "r"), allow(dead_code))]
fn parse_pad_direction(name: &str) -> std::result::Result<PadDirection, ArrayError> {
    name.parse()
}

/// Parse a count-like R numeric (offset, period_size, n_timepoints)
#[cfg_attr(not(feature = "r"), allow(dead_code))]
fn parse_count(parameter: &'static str, value: f64) -> std::result::Result<usize, ArrayError> {
    Validator::validate_count(parameter, value)
}

/// Parse tiling arguments, offset first
#[cfg_attr(not(feature = "r"), allow(dead_code))]
fn parse_tile_args(n_timepoints: f64, offset: f64) -> std::result::Result<(usize, usize), ArrayError> {
    let offset = parse_count("offset", offset)?;
    let n_timepoints = parse_count("n_timepoints", n_timepoints)?;
    Ok((n_timepoints, offset))
}

/// Parse period repeat arguments in the order offset, period_size, n_timepoints
#[cfg_attr(not(feature = "r"), allow(dead_code))]
fn parse_repeat_args(
    period_size: f64,
    n_timepoints: f64,
    offset: f64,
) -> std::result::Result<(usize, usize, usize), ArrayError> {
    let offset = parse_count("offset", offset)?;
    let period_size = parse_count("period_size", period_size)?;
    let n_timepoints = parse_count("n_timepoints", n_timepoints)?;
    Ok((period_size, n_timepoints, offset))
}

// ============================================================================
// R Functions
// ============================================================================

/// Pad the shorter of two vectors with its edge value.
///
/// @param x Numeric vector.
/// @param y Numeric vector.
/// @param pad_direction Side to pad: "start" or "end" (default: "end").
/// @param fix_y If TRUE, error when y would need padding.
/// @return A list with the aligned x and y.
/// @export
#[cfg(feature = "r")]
#[extendr]
fn pad_edges_to_match(x: &[f64], y: &[f64], pad_direction: &str, fix_y: bool) -> Result<List> {
    let direction = parse_pad_direction(pad_direction).map_err(|e| Error::Other(e.to_string()))?;
    let x = ndarray::ArrayView1::from(x);
    let y = ndarray::ArrayView1::from(y);

    let (x, y) = pad_edges(&x, &y, 0, direction, fix_y).map_err(|e| Error::Other(e.to_string()))?;

    Ok(list!(
        x = x.iter().copied().collect::<Vec<f64>>(),
        y = y.iter().copied().collect::<Vec<f64>>()
    ))
}

/// Tile a vector until it has n_timepoints values.
///
/// @param data Numeric vector to tile.
/// @param n_timepoints Output length.
/// @param offset Starting position within the tiling (default: 0).
/// @return Numeric vector of length n_timepoints.
/// @export
#[cfg(feature = "r")]
#[extendr]
fn tile_until_n(data: &[f64], n_timepoints: f64, offset: f64) -> Result<Vec<f64>> {
    let (n_timepoints, offset) =
        parse_tile_args(n_timepoints, offset).map_err(|e| Error::Other(e.to_string()))?;

    let tiled = tile_n(data, n_timepoints, offset).map_err(|e| Error::Other(e.to_string()))?;
    Ok(tiled.to_vec())
}

/// Repeat each entry of a vector period_size times.
///
/// @param data Numeric vector to repeat.
/// @param period_size Number of output steps per input value.
/// @param n_timepoints Output length.
/// @param offset Steps skipped at the start of the first period (default: 0).
/// @return Numeric vector of length n_timepoints.
/// @export
#[cfg(feature = "r")]
#[extendr]
fn repeat_until_n(data: &[f64], period_size: f64, n_timepoints: f64, offset: f64) -> Result<Vec<f64>> {
    let (period_size, n_timepoints, offset) = parse_repeat_args(period_size, n_timepoints, offset)
        .map_err(|e| Error::Other(e.to_string()))?;

    let repeated = repeat_n(data, period_size, n_timepoints, offset)
        .map_err(|e| Error::Other(e.to_string()))?;
    Ok(repeated.to_vec())
}

/// Wrap a value as a periodic process sample.
///
/// @param value Numeric vector, or NULL for an empty sample.
/// @return A list with a single `value` element and a printable description.
/// @export
#[cfg(feature = "r")]
#[extendr]
fn periodic_process_sample(value: Nullable<Vec<f64>>) -> Result<List> {
    let sample = match value {
        Nullable::NotNull(v) => PeriodicProcessSample::from(v),
        Nullable::Null => PeriodicProcessSample::empty(),
    };
    let label = sample.to_string();

    let value = match sample.into_value() {
        Some(v) => v.into_robj(),
        None => ().into_robj(),
    };
    Ok(list!(value = value, repr = label))
}

// ============================================================================
// Module Registration
// ============================================================================

#[cfg(feature = "r")]
extendr_module! {
    mod fastArrayutilsR;
    fn pad_edges_to_match;
    fn tile_until_n;
    fn repeat_until_n;
    fn periodic_process_sample;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_directions() {
        assert_eq!(parse_pad_direction("start"), Ok(PadDirection::Start));
        assert!(parse_pad_direction("middle").is_err());
    }

    #[test]
    fn rejects_fractional_offset_first() {
        assert_eq!(
            parse_repeat_args(0.0, 10.0, 0.5),
            Err(ArrayError::NonIntegerParameter {
                parameter: "offset",
                value: 0.5
            })
        );
    }

    #[test]
    fn parses_whole_numbers() {
        assert_eq!(parse_repeat_args(7.0, 28.0, 3.0), Ok((7, 28, 3)));
        assert_eq!(parse_tile_args(5.0, 0.0), Ok((5, 0)));
    }

    #[test]
    fn period_size_is_checked_before_n_timepoints() {
        assert!(matches!(
            parse_repeat_args(2.5, -1.0, 0.0),
            Err(ArrayError::NonIntegerParameter {
                parameter: "period_size",
                ..
            })
        ));
        assert!(matches!(
            parse_tile_args(-1.0, 0.5),
            Err(ArrayError::NonIntegerParameter {
                parameter: "offset",
                ..
            })
        ));
    }

    #[test]
    fn negative_counts_are_rejected() {
        assert!(matches!(
            parse_count("n_timepoints", -2.0),
            Err(ArrayError::NegativeParameter { .. })
        ));
    }
}
