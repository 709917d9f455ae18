pub mod error;
pub mod model;
pub mod parsers;
pub mod services;

pub use error::{Result, TangoError};
