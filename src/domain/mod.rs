// Domain layer: the lecture's object taxonomy and the traits it is built on.

pub mod geometry;
pub mod model;
pub mod ports;
pub mod shapes;
pub mod vehicles;
