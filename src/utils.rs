use std::fmt;

/// Settings form parsing errors
#[derive(Debug, PartialEq)]
pub enum FieldParseError {
    Empty(String),
    NotANumber(String),
    InvalidColor(String),
}

impl fmt::Display for FieldParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldParseError::Empty(field) => write!(f, "{} cannot be empty", field),
            FieldParseError::NotANumber(field) => write!(f, "{} must be a valid number", field),
            FieldParseError::InvalidColor(field) => {
                write!(f, "{} must be a color like #1a2b3c", field)
            }
        }
    }
}

impl std::error::Error for FieldParseError {}

/// Parse a numeric settings field.
///
/// Range checks are deliberately absent: out-of-range values are clamped when
/// the settings are saved, so only text that is not a number is refused here.
///
/// # Examples
/// ```ignore
/// assert_eq!(parse_number_input(" 12 ", "Sections"), Ok(12.0));
/// assert!(parse_number_input("twelve", "Sections").is_err());
/// ```
pub fn parse_number_input(input: &str, field_name: &str) -> Result<f64, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(FieldParseError::Empty(field_name.to_string()).to_string());
    }
    match trimmed.parse::<f64>() {
        Ok(val) if val.is_finite() => Ok(val),
        _ => Err(FieldParseError::NotANumber(field_name.to_string()).to_string()),
    }
}

/// Parse a `#rrggbb` color field.
pub fn parse_color_input(input: &str, field_name: &str) -> Result<String, String> {
    let trimmed = input.trim();
    if number_wheel::settings::is_hex_color(trimmed) {
        Ok(trimmed.to_string())
    } else {
        Err(FieldParseError::InvalidColor(field_name.to_string()).to_string())
    }
}

/// Whole-number settings arrive from the form as `f64`; negatives become 0.
pub fn to_count(value: f64) -> u32 {
    // `as` saturates, so huge inputs become u32::MAX and get clamped on save.
    value.round().max(0.0) as u32
}
