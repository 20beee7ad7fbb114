/// Divisors closer to zero than this are rejected.
pub const ZERO_TOLERANCE: f64 = 1e-15;
/// Results this close to an integer are printed without a fraction.
pub const INTEGER_TOLERANCE: f64 = 1e-12;
pub const SIGNIFICANT_DIGITS: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvalOptions {
    pub zero_tolerance: f64,
    pub integer_tolerance: f64,
    pub significant_digits: usize,
}

impl EvalOptions {
    /// Only an exact `0.0` divisor is an error.
    pub fn exact() -> Self {
        Self {
            zero_tolerance: 0.0,
            ..Self::default()
        }
    }
}

impl Default for EvalOptions {
    fn default() -> Self {
        Self {
            zero_tolerance: ZERO_TOLERANCE,
            integer_tolerance: INTEGER_TOLERANCE,
            significant_digits: SIGNIFICANT_DIGITS,
        }
    }
}
