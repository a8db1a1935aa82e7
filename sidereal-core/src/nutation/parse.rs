//! Text parser for nutation coefficient tables.
//!
//! Tables are whitespace-separated with one header line. Each row holds the
//! integer argument multipliers followed by amplitudes in milliarcseconds with
//! four decimals. Amplitudes are stored as integer counts of 0.1 µas.
//!
//! Reading stops at the first line with fewer than two fields, so a blank line
//! ends the table and anything after it is ignored.

use super::terms::{LunisolarTerm, PlanetaryTerm};
use crate::errors::{AstroError, AstroResult};

const LUNISOLAR_MULTIPLIERS: usize = 5;
const LUNISOLAR_AMPLITUDES: usize = 6;
const PLANETARY_MULTIPLIERS: usize = 14;
const PLANETARY_AMPLITUDES: usize = 4;

/// Milliarcseconds to 0.1 µas.
const MAS_TO_TABLE_UNITS: f64 = 1.0e4;

struct RawRow {
    multipliers: Vec<i32>,
    amplitudes: Vec<f64>,
}

pub fn parse_lunisolar_table(content: &str, source: &str) -> AstroResult<Vec<LunisolarTerm>> {
    let rows = parse_rows(
        content,
        source,
        LUNISOLAR_MULTIPLIERS,
        LUNISOLAR_AMPLITUDES,
    )?;

    let mut terms = Vec::with_capacity(rows.len());
    for row in rows {
        let mut multipliers = [0i32; LUNISOLAR_MULTIPLIERS];
        multipliers.copy_from_slice(&row.multipliers);
        let a = &row.amplitudes;
        terms.push(LunisolarTerm {
            multipliers,
            psi_sin: a[0],
            psi_sin_t: a[1],
            psi_cos: a[2],
            eps_cos: a[3],
            eps_cos_t: a[4],
            eps_sin: a[5],
        });
    }

    if terms.is_empty() {
        return Err(AstroError::missing_table(&format!("lunisolar ({})", source)));
    }
    Ok(terms)
}

pub fn parse_planetary_table(content: &str, source: &str) -> AstroResult<Vec<PlanetaryTerm>> {
    let rows = parse_rows(
        content,
        source,
        PLANETARY_MULTIPLIERS,
        PLANETARY_AMPLITUDES,
    )?;

    let mut terms = Vec::with_capacity(rows.len());
    for row in rows {
        let mut multipliers = [0i32; PLANETARY_MULTIPLIERS];
        multipliers.copy_from_slice(&row.multipliers);
        let a = &row.amplitudes;
        terms.push(PlanetaryTerm {
            multipliers,
            psi_sin: a[0],
            psi_cos: a[1],
            eps_sin: a[2],
            eps_cos: a[3],
        });
    }

    if terms.is_empty() {
        return Err(AstroError::missing_table(&format!("planetary ({})", source)));
    }
    Ok(terms)
}

fn parse_rows(
    content: &str,
    source: &str,
    n_multipliers: usize,
    n_amplitudes: usize,
) -> AstroResult<Vec<RawRow>> {
    let expected = n_multipliers + n_amplitudes;
    let mut rows = Vec::new();

    for (index, line) in content.lines().enumerate().skip(1) {
        let line_no = index + 1;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 2 {
            break;
        }
        if fields.len() != expected {
            return Err(row_error(
                source,
                line_no,
                &format!("expected {} fields, found {}", expected, fields.len()),
            ));
        }

        let mut multipliers = Vec::with_capacity(n_multipliers);
        for field in &fields[..n_multipliers] {
            let value = field.parse::<i32>().map_err(|_| {
                row_error(source, line_no, &format!("invalid multiplier '{}'", field))
            })?;
            multipliers.push(value);
        }

        let mut amplitudes = Vec::with_capacity(n_amplitudes);
        for field in &fields[n_multipliers..] {
            amplitudes.push(parse_amplitude(field).ok_or_else(|| {
                row_error(source, line_no, &format!("invalid amplitude '{}'", field))
            })?);
        }

        rows.push(RawRow {
            multipliers,
            amplitudes,
        });
    }

    Ok(rows)
}

/// Milliarcseconds with four decimals to an integral count of 0.1 µas.
fn parse_amplitude(field: &str) -> Option<f64> {
    let mas = field.parse::<f64>().ok()?;
    if !mas.is_finite() {
        return None;
    }
    Some(libm::round(mas * MAS_TO_TABLE_UNITS))
}

fn row_error(source: &str, line_no: usize, message: &str) -> AstroError {
    AstroError::data_error(
        "nutation table",
        "parse",
        &format!("{} line {}: {}", source, line_no, message),
    )
}
