use crate::domain::ports::{Describe, FromDescription};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    pub name: String,
}

impl Shape {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl FromDescription for Shape {
    fn from_name(name: String) -> Self {
        Self::new(name)
    }
}

impl Describe for Shape {
    fn describe(&self) -> String {
        format!("This is a shape named {}", self.name)
    }
}

/// Shape variant; wraps the base so it keeps its name handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Circle {
    shape: Shape,
}

impl Circle {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            shape: Shape::new(name),
        }
    }

    pub fn name(&self) -> &str {
        &self.shape.name
    }

    pub fn as_shape(&self) -> &Shape {
        &self.shape
    }
}

impl FromDescription for Circle {
    fn from_name(name: String) -> Self {
        Self::new(name)
    }
}

impl Describe for Circle {
    fn describe(&self) -> String {
        format!("A circle named {}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_description_builds_invoking_type() {
        let shape = Shape::from_description("hexagon");
        let circle = Circle::from_description("donut");

        assert_eq!(shape, Shape::new("HEXAGON"));
        assert_eq!(circle, Circle::new("DONUT"));
        assert_eq!(shape.describe(), "This is a shape named HEXAGON");
        assert_eq!(circle.describe(), "A circle named DONUT");
    }

    #[test]
    fn test_circle_keeps_base_name() {
        let circle = Circle::from_description("Ring");
        assert_eq!(circle.as_shape().name, "RING");
        assert_eq!(circle.as_shape().describe(), "This is a shape named RING");
    }

    fn build<T: FromDescription + Describe>(desc: &str) -> String {
        T::from_description(desc).describe()
    }

    #[test]
    fn test_generic_factory_dispatch() {
        assert_eq!(build::<Shape>("square"), "This is a shape named SQUARE");
        assert_eq!(build::<Circle>("square"), "A circle named SQUARE");
    }
}
