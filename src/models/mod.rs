// Models module - SWAPI records and the entities mapped from them

pub mod starship;
pub mod pilot;
pub mod responses;

pub use starship::*;
pub use pilot::*;
pub use responses::*;
