pub mod core;
pub mod domain;
pub mod utils;

pub use crate::core::convert::{to_index, to_real};
pub use crate::domain::model::{Index, Real};
pub use crate::utils::error::{ParseError, Result};
