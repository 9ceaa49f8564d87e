#[forbid(unsafe_code)]
mod emissions;
mod error;
mod factors;
pub mod input;
mod report;

pub use emissions::*;
pub use error::{Error, Result};
pub use factors::*;
pub use report::*;
