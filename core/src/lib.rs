//! House Model Core
//!
//! In-memory containment hierarchy: a house holds an ordered list of rooms,
//! and each room holds an ordered list of objects.
//!
//! # Architecture
//!
//! - **models**: Domain types (House, Room, Object) and their shared handles
//!
//! # Critical Invariants
//!
//! 1. Collections keep insertion order and admit duplicate entries
//! 2. Identity is handle identity (`Rc::ptr_eq`), never field equality
//! 3. Removing a room from a house never touches the room's own contents

// Module declarations
pub mod models;

// Re-exports for convenience
pub use models::{
    house::House,
    object::{Object, SharedObject},
    room::{Room, RoomError, SharedRoom},
};
