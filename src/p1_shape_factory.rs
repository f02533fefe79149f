// Pattern 1: Factory - String Key to Product Variant
// Demonstrates a single-level factory: keys are parsed into a closed enum at
// the boundary, products are built per request behind a trait object.

use std::str::FromStr;
use thiserror::Error;

// ============================================================================
// Example: Product Variants
// ============================================================================

trait Shape {
    fn draw(&self) -> String;
}

struct Circle;
impl Shape for Circle {
    fn draw(&self) -> String {
        "Drawing a Circle".to_string()
    }
}

struct Rectangle;
impl Shape for Rectangle {
    fn draw(&self) -> String {
        "Drawing a Rectangle".to_string()
    }
}

struct Square;
impl Shape for Square {
    fn draw(&self) -> String {
        "Drawing a Square".to_string()
    }
}

// ============================================================================
// Example: Boundary Parsing into a Closed Enum
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShapeKind {
    Circle,
    Rectangle,
    Square,
}

/// Rejecting unknown keys with a typed error keeps the failure visible at the
/// parse boundary instead of surfacing later as a missing product.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown shape variant: {0:?}")]
struct UnknownShape(String);

impl FromStr for ShapeKind {
    type Err = UnknownShape;

    // Keys are case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "circle" => Ok(ShapeKind::Circle),
            "rectangle" => Ok(ShapeKind::Rectangle),
            "square" => Ok(ShapeKind::Square),
            other => Err(UnknownShape(other.to_string())),
        }
    }
}

// ============================================================================
// Example: Factory with Exhaustive Dispatch
// ============================================================================

struct ShapeFactory;

impl ShapeFactory {
    /// Build a fresh product for the given kind. Nothing is cached; every
    /// call allocates a new trait object.
    fn create(&self, kind: ShapeKind) -> Box<dyn Shape> {
        match kind {
            ShapeKind::Circle => Box::new(Circle),
            ShapeKind::Rectangle => Box::new(Rectangle),
            ShapeKind::Square => Box::new(Square),
        }
    }

    /// Parse an external key and build the matching product.
    fn create_from_key(&self, key: &str) -> Result<Box<dyn Shape>, UnknownShape> {
        Ok(self.create(key.parse()?))
    }
}

// ============================================================================
// Example: Demo
// ============================================================================

fn demo_lines() -> Result<Vec<String>, UnknownShape> {
    let factory = ShapeFactory;
    ["circle", "rectangle", "square"]
        .into_iter()
        .map(|key| Ok(factory.create_from_key(key)?.draw()))
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn recognized_keys_parse() {
        assert_eq!("circle".parse(), Ok(ShapeKind::Circle));
        assert_eq!("rectangle".parse(), Ok(ShapeKind::Rectangle));
        assert_eq!("square".parse(), Ok(ShapeKind::Square));
    }

    #[test]
    fn drawn_line_names_the_variant() {
        let factory = ShapeFactory;
        for (key, name) in [
            ("circle", "Circle"),
            ("rectangle", "Rectangle"),
            ("square", "Square"),
        ] {
            let shape = factory.create_from_key(key).unwrap();
            assert!(shape.draw().contains(name));
        }
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = "triangle".parse::<ShapeKind>().unwrap_err();
        assert_eq!(err, UnknownShape("triangle".to_string()));
    }

    #[test]
    fn keys_are_case_sensitive() {
        assert!("Circle".parse::<ShapeKind>().is_err());
        assert!("CIRCLE".parse::<ShapeKind>().is_err());
    }

    #[test]
    fn factory_error_propagates_through_create() {
        let factory = ShapeFactory;
        assert!(factory.create_from_key("hexagon").is_err());
    }

    #[test]
    fn demo_prints_three_lines_in_order() {
        let lines = demo_lines().unwrap();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Circle"));
        assert!(lines[1].contains("Rectangle"));
        assert!(lines[2].contains("Square"));
    }

    proptest! {
        #[test]
        fn arbitrary_unknown_keys_error(key in "[a-zA-Z]{1,12}") {
            prop_assume!(!matches!(key.as_str(), "circle" | "rectangle" | "square"));
            prop_assert!(key.parse::<ShapeKind>().is_err());
        }
    }
}

fn main() -> Result<(), UnknownShape> {
    for line in demo_lines()? {
        println!("{}", line);
    }
    Ok(())
}
