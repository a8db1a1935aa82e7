#[inline]
pub fn fmod(x: f64, y: f64) -> f64 {
    libm::fmod(x, y)
}

/// Evaluates `c[0] + c[1]·t + c[2]·t² + ...` by Horner's rule.
#[inline]
pub fn horner(t: f64, coefficients: &[f64]) -> f64 {
    coefficients.iter().rev().fold(0.0, |acc, &c| acc * t + c)
}
