// Pattern 2: Abstract Factory - Family-Exclusive Product Factories
// Demonstrates two-level dispatch: a producer selects a family factory by
// category key, and each factory builds only the products of its own family.

use std::str::FromStr;
use thiserror::Error;

// ============================================================================
// Example: Shape Family
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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShapeKind {
    Circle,
    Rectangle,
    Square,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown shape variant: {0:?}")]
struct UnknownShape(String);

impl FromStr for ShapeKind {
    type Err = UnknownShape;

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
// Example: Color Family
// ============================================================================

trait Color {
    fn fill(&self) -> String;
}

struct Red;
impl Color for Red {
    fn fill(&self) -> String {
        "Filling with Red".to_string()
    }
}

struct Green;
impl Color for Green {
    fn fill(&self) -> String {
        "Filling with Green".to_string()
    }
}

struct Blue;
impl Color for Blue {
    fn fill(&self) -> String {
        "Filling with Blue".to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColorKind {
    Red,
    Green,
    Blue,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown color variant: {0:?}")]
struct UnknownColor(String);

impl FromStr for ColorKind {
    type Err = UnknownColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "red" => Ok(ColorKind::Red),
            "green" => Ok(ColorKind::Green),
            "blue" => Ok(ColorKind::Blue),
            other => Err(UnknownColor(other.to_string())),
        }
    }
}

// ============================================================================
// Example: Family-Split Provider Traits
// ============================================================================

// One provider trait per family. A factory that builds shapes has no color
// operation at all, so "asked the wrong family" cannot happen at runtime.

trait ShapeProvider {
    fn shape(&self, kind: ShapeKind) -> Box<dyn Shape>;
}

trait ColorProvider {
    fn color(&self, kind: ColorKind) -> Box<dyn Color>;
}

#[derive(Debug)]
struct ShapeFactory;

impl ShapeProvider for ShapeFactory {
    fn shape(&self, kind: ShapeKind) -> Box<dyn Shape> {
        match kind {
            ShapeKind::Circle => Box::new(Circle),
            ShapeKind::Rectangle => Box::new(Rectangle),
            ShapeKind::Square => Box::new(Square),
        }
    }
}

#[derive(Debug)]
struct ColorFactory;

impl ColorProvider for ColorFactory {
    fn color(&self, kind: ColorKind) -> Box<dyn Color> {
        match kind {
            ColorKind::Red => Box::new(Red),
            ColorKind::Green => Box::new(Green),
            ColorKind::Blue => Box::new(Blue),
        }
    }
}

// ============================================================================
// Example: Factory Producer
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FactoryFamily {
    Shape,
    Color,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown factory family: {0:?}")]
struct UnknownFamily(String);

impl FromStr for FactoryFamily {
    type Err = UnknownFamily;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "shape" => Ok(FactoryFamily::Shape),
            "color" => Ok(FactoryFamily::Color),
            other => Err(UnknownFamily(other.to_string())),
        }
    }
}

/// A concrete factory for exactly one family. Callers match on the variant
/// (or use the accessors below); the capability of the other family is
/// absent, not a silent no-op.
#[derive(Debug)]
enum ProductFactory {
    Shapes(ShapeFactory),
    Colors(ColorFactory),
}

impl ProductFactory {
    fn as_shapes(&self) -> Option<&dyn ShapeProvider> {
        match self {
            ProductFactory::Shapes(factory) => Some(factory),
            ProductFactory::Colors(_) => None,
        }
    }

    fn as_colors(&self) -> Option<&dyn ColorProvider> {
        match self {
            ProductFactory::Shapes(_) => None,
            ProductFactory::Colors(factory) => Some(factory),
        }
    }
}

struct FactoryProducer;

impl FactoryProducer {
    fn factory_for(family: FactoryFamily) -> ProductFactory {
        match family {
            FactoryFamily::Shape => ProductFactory::Shapes(ShapeFactory),
            FactoryFamily::Color => ProductFactory::Colors(ColorFactory),
        }
    }

    fn factory_for_key(key: &str) -> Result<ProductFactory, UnknownFamily> {
        Ok(Self::factory_for(key.parse()?))
    }
}

// ============================================================================
// Example: Demo
// ============================================================================

#[derive(Error, Debug)]
enum FactoryError {
    #[error(transparent)]
    Family(#[from] UnknownFamily),
    #[error(transparent)]
    Shape(#[from] UnknownShape),
    #[error(transparent)]
    Color(#[from] UnknownColor),
}

fn demo_lines() -> Result<Vec<String>, FactoryError> {
    let mut lines = Vec::new();

    let factory = FactoryProducer::factory_for_key("shape")?;
    if let Some(shapes) = factory.as_shapes() {
        for key in ["circle", "rectangle", "square"] {
            lines.push(shapes.shape(key.parse()?).draw());
        }
    }

    let factory = FactoryProducer::factory_for_key("color")?;
    if let Some(colors) = factory.as_colors() {
        for key in ["red", "green", "blue"] {
            lines.push(colors.color(key.parse()?).fill());
        }
    }

    Ok(lines)
}

// ============================================================================
// Tests
// ============================================================================


fn main() -> Result<(), FactoryError> {
    for line in demo_lines()? {
        println!("{}", line);
    }
    Ok(())
}
