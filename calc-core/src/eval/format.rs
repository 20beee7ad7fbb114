use crate::parser::prelude::ParseError;
use super::options::EvalOptions;

/// Renders the single output line for an evaluation: the number, or
/// `ERROR:<position>`.
pub fn format_outcome(outcome: &Result<f64, ParseError>, options: &EvalOptions) -> String {
    match outcome {
        Ok(value) => format_value(*value, options),
        Err(err) => format!("ERROR:{}", err.position()),
    }
}

pub fn format_value(value: f64, options: &EvalOptions) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }

    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let nearest = value.round();

    if (value - nearest).abs() < options.integer_tolerance {
        // adding 0.0 turns -0.0 into 0.0
        return format!("{:.0}", nearest + 0.0);
    }

    format_significant(value, options.significant_digits)
}

/// `printf("%.*g")`: `digits` significant digits, trailing zeros dropped,
/// exponent notation outside `1e-4 <= |value| < 10^digits`.
pub fn format_significant(value: f64, digits: usize) -> String {
    let digits = digits.max(1);
    let scientific = format!("{:.*e}", digits - 1, value);

    let (mantissa, exponent) = match scientific.split_once('e') {
        Some(parts) => parts,
        None => return scientific,
    };

    let exponent = exponent.parse::<i32>().unwrap_or(0);

    if exponent < -4 || exponent >= digits as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };

        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    } else {
        let decimals = (digits as i32 - 1 - exponent) as usize;

        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}
