//! House model
//!
//! Top-level container of the hierarchy. A house has a street address and an
//! ordered list of rooms.
//!
//! # Critical Invariants
//!
//! 1. Room order is insertion order; nothing re-sorts or re-numbers rooms
//! 2. Removal matches by handle identity and takes the first match only
//! 3. Removing a room never mutates the room's own object collection

use serde::{Deserialize, Serialize};
use std::rc::Rc;

use crate::models::room::{Room, SharedRoom};

/// A house holding an ordered list of rooms
///
/// Rooms are shared handles: removing one from the house does not destroy it,
/// and whatever objects it holds stay reachable through any other handle.
///
/// # Example
/// ```
/// use house_model_core::House;
///
/// let house = House::new("123 Fake St".to_string(), 3);
/// assert_eq!(house.address(), "123 Fake St");
/// assert_eq!(house.room_count(), 3);
/// assert_eq!(house.rooms()[0].borrow().number(), 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct House {
    /// Street address, mutable, no validation
    address: String,

    /// Rooms in this house, in insertion order
    ///
    /// Duplicate entries are permitted; numbers are assigned at construction
    /// and never re-validated afterwards.
    rooms: Vec<SharedRoom>,
}

impl House {
    /// Create a new house populated with numbered rooms
    ///
    /// Rooms are numbered `1..=room_count` in order. A count of zero yields
    /// an empty room collection.
    ///
    /// # Arguments
    /// * `address` - Street address (any string is accepted)
    /// * `room_count` - Number of rooms to create up front
    ///
    /// # Example
    /// ```
    /// use house_model_core::House;
    ///
    /// let house = House::new("123 Fake St".to_string(), 2);
    /// assert_eq!(house.rooms()[1].borrow().number(), 2);
    /// ```
    pub fn new(address: String, room_count: u32) -> Self {
        let rooms = (1..=room_count).map(Room::new_shared).collect();
        Self { address, rooms }
    }

    /// Get the house address
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Set the house address
    pub fn set_address(&mut self, address: String) {
        self.address = address;
    }

    /// Get the rooms in this house, in insertion order
    pub fn rooms(&self) -> &[SharedRoom] {
        &self.rooms
    }

    /// Replace the entire room collection wholesale
    ///
    /// No validation is applied to the new collection.
    ///
    /// # Example
    /// ```
    /// use house_model_core::{House, Room};
    ///
    /// let mut house = House::new("123 Fake St".to_string(), 2);
    /// house.set_rooms(vec![Room::new_shared(10)]);
    /// assert_eq!(house.room_count(), 1);
    /// ```
    pub fn set_rooms(&mut self, rooms: Vec<SharedRoom>) {
        self.rooms = rooms;
    }

    /// Add a room to the end of the collection
    ///
    /// No duplicate or absence check is applied; the same handle may be
    /// appended more than once.
    ///
    /// # Example
    /// ```
    /// use house_model_core::{House, Room};
    /// use std::rc::Rc;
    ///
    /// let mut house = House::new("123 Fake St".to_string(), 0);
    /// let room = Room::new_shared(7);
    /// house.add_room(Rc::clone(&room));
    /// assert!(house.contains_room(&room));
    /// ```
    pub fn add_room(&mut self, room: SharedRoom) {
        self.rooms.push(room);
    }

    /// Remove a room from the collection
    ///
    /// Matches by handle identity and removes the first matching entry only.
    /// The removed room's own object collection is left untouched.
    ///
    /// # Arguments
    /// * `room` - Handle of the room to remove
    ///
    /// # Returns
    /// true if found and removed, false if the room is not in the house
    ///
    /// # Example
    /// ```
    /// use house_model_core::{House, Room};
    /// use std::rc::Rc;
    ///
    /// let mut house = House::new("123 Fake St".to_string(), 0);
    /// let room = Room::new_shared(7);
    /// house.add_room(Rc::clone(&room));
    ///
    /// assert!(house.remove_room(&room));
    /// assert!(!house.remove_room(&room)); // Already removed
    /// ```
    pub fn remove_room(&mut self, room: &SharedRoom) -> bool {
        if let Some(pos) = self.rooms.iter().position(|entry| Rc::ptr_eq(entry, room)) {
            self.rooms.remove(pos);
            true
        } else {
            false
        }
    }

    /// Get the number of rooms in this house
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Check whether this house holds the given room
    ///
    /// Membership is handle identity: a room with an equal number but a
    /// different handle does not count.
    pub fn contains_room(&self, room: &SharedRoom) -> bool {
        self.rooms.iter().any(|entry| Rc::ptr_eq(entry, room))
    }
}
