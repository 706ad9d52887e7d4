//! Area formulas for the shape calculator.

use super::error::{Error, Result};

/// Shapes offered by the area tool's tab row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display, strum::EnumIter)]
pub enum Shape {
    #[default]
    Rectangle,
    Circle,
    Triangle,
}

fn check_positive(name: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::validation(name, "must be a positive number"));
    }
    Ok(())
}

pub fn rectangle_area(width: f64, length: f64) -> Result<f64> {
    check_positive("width", width)?;
    check_positive("length", length)?;
    Ok(width * length)
}

pub fn circle_area(radius: f64) -> Result<f64> {
    check_positive("radius", radius)?;
    Ok(std::f64::consts::PI * radius * radius)
}

pub fn triangle_area(base: f64, height: f64) -> Result<f64> {
    check_positive("base", base)?;
    check_positive("height", height)?;
    Ok(0.5 * base * height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle() {
        assert_eq!(rectangle_area(3.0, 4.0).unwrap(), 12.0);
        assert!(rectangle_area(0.0, 4.0).is_err());
        assert!(rectangle_area(3.0, -1.0).is_err());
    }

    #[test]
    fn test_circle() {
        let a = circle_area(2.0).unwrap();
        assert!((a - 4.0 * std::f64::consts::PI).abs() < 1e-12);
        assert!(circle_area(0.0).is_err());
    }

    #[test]
    fn test_triangle() {
        assert_eq!(triangle_area(6.0, 4.0).unwrap(), 12.0);
        assert!(triangle_area(f64::NAN, 4.0).is_err());
    }
}
