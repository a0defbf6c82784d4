//! Derived body metrics
//!
//! Values are re-parsed from the raw answer strings every time they are
//! needed. Anything that fails to parse degrades to zero or an empty series.

/// Parse a user-entered measurement, accepting `,` as decimal separator.
///
/// Only finite, strictly positive values are returned.
pub fn parse_measure(input: &str) -> Option<f64> {
    let value: f64 = input.trim().replace(',', ".").parse().ok()?;
    if value.is_finite() && value > 0.0 {
        Some(value)
    } else {
        None
    }
}

/// Body mass index from weight in kilograms and height in centimetres,
/// rounded to one decimal.
///
/// # Examples
/// ```
/// use quizfunnel::models::metrics::bmi;
///
/// assert_eq!(bmi("70", "175"), 22.9);
/// assert_eq!(bmi("70", ""), 0.0);
/// ```
pub fn bmi(weight_kg: &str, height_cm: &str) -> f64 {
    match (parse_measure(weight_kg), parse_measure(height_cm)) {
        (Some(weight), Some(height)) => {
            let meters = height / 100.0;
            round_one_decimal(weight / (meters * meters))
        }
        _ => 0.0,
    }
}

/// Format a BMI value the way it is shown on screen
pub fn format_bmi(value: f64) -> String {
    format!("{:.1}", value)
}

/// Whether the BMI card shows the urgent variant of its message
pub fn needs_attention(bmi: f64) -> bool {
    bmi > 25.0
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// BMI classification bands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    Healthy,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Classify a BMI value
    pub fn classify(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 24.9 {
            Self::Healthy
        } else if bmi < 29.9 {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    /// Label shown on the report card
    pub fn label(&self) -> &'static str {
        match self {
            Self::Underweight => "Abaixo do peso",
            Self::Healthy => "Saudável",
            Self::Overweight => "Sobrepeso",
            Self::Obese => "Obesidade",
        }
    }
}

/// One bar of the projected weight chart
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionPoint {
    pub label: &'static str,
    pub weight: f64,
}

/// Projected weight over three weeks starting from the current weight.
///
/// Empty when the current weight does not parse.
pub fn projection(current_weight: &str) -> Vec<ProjectionPoint> {
    const STEPS: [(&str, f64); 4] = [
        ("Início", 0.0),
        ("Semana 1", 5.0),
        ("Semana 2", 9.0),
        ("Semana 3", 15.0),
    ];

    match parse_measure(current_weight) {
        Some(start) => STEPS
            .iter()
            .map(|&(label, loss)| ProjectionPoint {
                label,
                weight: (start - loss).max(0.0),
            })
            .collect(),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_measure() {
        assert_eq!(parse_measure("75.5"), Some(75.5));
        assert_eq!(parse_measure("75,5"), Some(75.5));
        assert_eq!(parse_measure(" 80 "), Some(80.0));
        assert_eq!(parse_measure(""), None);
        assert_eq!(parse_measure("abc"), None);
        assert_eq!(parse_measure("0"), None);
        assert_eq!(parse_measure("-3"), None);
        assert_eq!(parse_measure("inf"), None);
    }

    #[test]
    fn test_bmi_reference_value() {
        assert_eq!(bmi("70", "175"), 22.9);
        assert_eq!(format_bmi(bmi("70", "175")), "22.9");
    }

    #[test]
    fn test_bmi_degrades_to_zero() {
        assert_eq!(bmi("", "175"), 0.0);
        assert_eq!(bmi("70", "x"), 0.0);
        assert_eq!(bmi("70", "0"), 0.0);
        assert_eq!(format_bmi(bmi("", "")), "0.0");
    }

    #[test]
    fn test_bmi_comma_decimal() {
        assert_eq!(bmi("82,4", "165"), 30.3);
    }

    #[test]
    fn test_category_bands() {
        assert_eq!(BmiCategory::classify(0.0), BmiCategory::Underweight);
        assert_eq!(BmiCategory::classify(18.5), BmiCategory::Healthy);
        assert_eq!(BmiCategory::classify(24.9), BmiCategory::Overweight);
        assert_eq!(BmiCategory::classify(29.9), BmiCategory::Obese);
        assert_eq!(BmiCategory::classify(22.9).label(), "Saudável");
    }

    #[test]
    fn test_needs_attention() {
        assert!(!needs_attention(25.0));
        assert!(needs_attention(25.1));
    }

    #[test]
    fn test_projection() {
        let points = projection("80");
        let weights: Vec<f64> = points.iter().map(|p| p.weight).collect();
        assert_eq!(weights, vec![80.0, 75.0, 71.0, 65.0]);
        assert_eq!(points[0].label, "Início");
        assert!(projection("").is_empty());
    }

    #[test]
    fn test_projection_floors_at_zero() {
        let points = projection("10");
        assert_eq!(points[3].weight, 0.0);
    }
}
