/// Circle measured by its radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    /// Shared by every circle; the lecture rounds pi to four places.
    pub const PI: f64 = 3.1416;

    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn area(&self) -> f64 {
        Self::PI * self.radius * self.radius
    }

    pub fn from_diameter(diameter: f64) -> Self {
        Self::new(diameter / 2.0)
    }

    pub fn unit_circle() -> Self {
        Circle::new(1.0)
    }
}
