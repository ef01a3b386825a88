//! Parsers for scalar literals used on the command line.

use crate::coord::Coord;
use crate::error::TypeError;

/// Parse a finite floating-point literal.
pub fn parse_number(s: &str) -> Result<f64, TypeError> {
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(TypeError::InvalidNumber(s.to_string())),
    }
}

/// Parse exactly `true` or `false`.
pub fn parse_bool(s: &str) -> Result<bool, TypeError> {
    match s {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(TypeError::InvalidBool(s.to_string())),
    }
}

/// Parse an `x,y` coordinate literal.
pub fn parse_coord(s: &str) -> Result<Coord, TypeError> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| TypeError::InvalidNumber(s.to_string()))?;
    Ok(Coord::new(parse_number(x.trim())?, parse_number(y.trim())?))
}

/// Returns `true` if `s` looks like a numeric literal rather than a name.
pub fn looks_numeric(s: &str) -> bool {
    matches!(s.as_bytes().first(), Some(b'0'..=b'9' | b'.' | b'-' | b'+'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers() {
        assert_eq!(parse_number("3.5").unwrap(), 3.5);
        assert_eq!(parse_number("-2").unwrap(), -2.0);
        assert!(parse_number("1.2.3").is_err());
        assert!(parse_number("inf").is_err());
        assert!(parse_number("NaN").is_err());
    }

    #[test]
    fn booleans_are_strict() {
        assert!(parse_bool("true").unwrap());
        assert!(!parse_bool("false").unwrap());
        assert_eq!(parse_bool("yes"), Err(TypeError::InvalidBool("yes".into())));
        assert!(parse_bool("TRUE").is_err());
    }

    #[test]
    fn coordinate_literals() {
        assert_eq!(parse_coord("1,2").unwrap(), Coord::new(1.0, 2.0));
        assert_eq!(parse_coord("-1.5, 0").unwrap(), Coord::new(-1.5, 0.0));
        assert!(parse_coord("1;2").is_err());
        assert!(parse_coord("a,2").is_err());
    }

    #[test]
    fn numeric_detection() {
        assert!(looks_numeric("12"));
        assert!(looks_numeric(".5"));
        assert!(looks_numeric("-3"));
        assert!(!looks_numeric("P1"));
        assert!(!looks_numeric(""));
    }
}
