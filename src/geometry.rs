//! Plane geometry support types.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle.
///
/// Fields are public; [`area`](Rectangle::area) is recomputed from the
/// current field values on every call.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    /// Creates a rectangle with the given dimensions.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The rectangle's area, `width * height`.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_area() {
        let rect = Rectangle::new(10.0, 20.0);
        assert_eq!(rect.area(), 200.0);
    }

    #[test]
    fn test_area_tracks_field_changes() {
        let mut rect = Rectangle::new(10.0, 20.0);
        rect.width = 5.0;
        assert_eq!(rect.area(), 100.0);
    }

    #[test]
    fn test_rectangle_default_is_degenerate() {
        assert_eq!(Rectangle::default().area(), 0.0);
    }
}
