pub mod error;
pub mod new;
pub mod start;
