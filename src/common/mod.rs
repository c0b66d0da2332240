pub mod error;
pub mod logging;
pub mod reporter;
pub mod result;
