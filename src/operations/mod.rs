// Operations module - starship listing, pilot lookup and the report

pub mod starships;
pub mod pilots;
pub mod report;

pub use starships::*;
pub use pilots::*;
pub use report::*;
