//! Units module - shared movement/body attributes and actor capabilities.

mod actor;
mod unit;

pub use actor::{Actor, Damageable, Mobile};
pub use unit::{BodyBox, Direction, Unit};
