pub mod convert;
pub mod require;
pub mod traits;
