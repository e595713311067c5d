// Domain layer: the numeric types the rest of the crate converts into.

pub mod model;
