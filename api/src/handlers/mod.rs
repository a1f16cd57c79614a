pub mod boundary;
pub mod error;
pub mod health;

pub use boundary::async_handler;
pub use error::*;
pub use health::health_check;
