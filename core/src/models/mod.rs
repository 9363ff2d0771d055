//! Domain models for the house containment hierarchy

pub mod house;
pub mod object;
pub mod room;

// Re-exports
pub use house::House;
pub use object::{Object, SharedObject};
pub use room::{Room, RoomError, SharedRoom};
