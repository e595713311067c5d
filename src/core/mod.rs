pub mod convert;
pub mod scan;

pub use crate::domain::model::{Index, Real};
pub use crate::utils::error::Result;
