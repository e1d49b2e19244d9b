//! Phase parsing.
//!
//! Phases are written in units of π: `"0.5"` means a shift of π/2. A phase
//! string holds up to three whitespace-separated tokens for the X, Y and Z
//! axes; missing trailing axes are 0.
//!
//! Each token is a plain number or a small `pi` literal:
//!
//! ```text
//! token   := number | pi_term
//! pi_term := ["-"] "pi" [ ("/" | "*") number ]
//! ```
//!
//! A `pi` term names the angle with π spelled out, so `"pi/2"` and `"0.5"`
//! are the same phase. Nothing else is accepted; in particular tokens are
//! never evaluated as general expressions.

use crate::error::CurveError;

/// Number of axes a phase string can address.
pub const PHASE_AXES: usize = 3;

/// Parse a phase string into exactly three values (X, Y, Z), in units of π.
///
/// An empty or all-whitespace string yields `[0.0, 0.0, 0.0]`.
pub fn parse_phases(phase: &str) -> Result<[f64; PHASE_AXES], CurveError> {
    let mut phases = [0.0; PHASE_AXES];

    for (i, token) in phase.split_whitespace().enumerate() {
        if i >= PHASE_AXES {
            return Err(CurveError::parameter(format!(
                "phase '{}' has more than {} values",
                phase, PHASE_AXES
            )));
        }
        phases[i] = parse_phase_token(token)?;
    }

    Ok(phases)
}

/// Parse a single phase token, returning its value in units of π.
pub fn parse_phase_token(token: &str) -> Result<f64, CurveError> {
    let invalid = || CurveError::parameter(format!("invalid phase value '{}'", token));

    let lowered = token.to_ascii_lowercase();
    let (negative, body) = match lowered.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, lowered.as_str()),
    };

    let value = if let Some(rest) = body.strip_prefix("pi") {
        let magnitude = if rest.is_empty() {
            1.0
        } else if let Some(divisor) = rest.strip_prefix('/') {
            let divisor = parse_number(divisor).ok_or_else(invalid)?;
            if divisor == 0.0 {
                return Err(invalid());
            }
            1.0 / divisor
        } else if let Some(factor) = rest.strip_prefix('*') {
            parse_number(factor).ok_or_else(invalid)?
        } else {
            return Err(invalid());
        };
        if negative { -magnitude } else { magnitude }
    } else {
        // Plain number: parse the original token so the sign is kept as written.
        parse_number(token).ok_or_else(invalid)?
    };

    if value.is_finite() { Ok(value) } else { Err(invalid()) }
}

/// Parse a finite decimal number. Rejects `inf`/`nan` spellings.
fn parse_number(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}
