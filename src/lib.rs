// Crate root library declaration and module exports.
pub mod address_book;
pub mod cli;
pub mod compiler;
pub mod config;
pub mod context;
pub mod error;
pub mod model;
pub mod storage;
pub mod workbook;

pub use compiler::{Schedule, ScheduleCompiler};
pub use error::FormatError;
