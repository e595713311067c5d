/// Floating-point type for continuous values.
pub type Real = f64;

/// Wide signed integer type for counting and indexing.
pub type Index = i64;
