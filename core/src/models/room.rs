//! Room model
//!
//! Mid-level container: a numbered room holding an ordered list of objects.
//! Each room has:
//! - A mutable number (uniqueness is not enforced)
//! - An ordered object collection (duplicates permitted, appended over time)
//!
//! An absent object reference passed to the add operation is rejected, so the
//! collection never silently contains a hole.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;
use thiserror::Error;

use crate::models::object::SharedObject;

/// Shared handle to a room.
///
/// Rooms are aliased: a house and any number of outside holders may point at
/// the same room, and mutations through one handle are visible through all of
/// them. Identity is the handle itself (`Rc::ptr_eq`), never the room number.
pub type SharedRoom = Rc<RefCell<Room>>;

/// Errors that can occur during room operations
#[derive(Debug, Error, PartialEq)]
pub enum RoomError {
    #[error("Cannot add an absent object reference to a room")]
    MissingObject,
}

/// A numbered room holding objects
///
/// # Example
/// ```
/// use house_model_core::{Object, Room};
///
/// let mut room = Room::new(1);
/// room.add_object(Some(Object::new_shared("Lamp".to_string()))).unwrap();
/// assert_eq!(room.object_count(), 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Room number, mutable, not required to be unique
    number: u32,

    /// Objects in this room, in insertion order
    ///
    /// Entries are shared handles: the same object may appear in several
    /// rooms (or several times in this one), and removing this room from a
    /// house leaves every entry intact.
    objects: Vec<SharedObject>,
}

impl Room {
    /// Create a new room with an empty object collection
    ///
    /// # Arguments
    /// * `number` - Identifying number (uniqueness is not enforced)
    pub fn new(number: u32) -> Self {
        Self {
            number,
            objects: Vec::new(),
        }
    }

    /// Create a new room behind a shared handle
    ///
    /// # Example
    /// ```
    /// use house_model_core::Room;
    ///
    /// let room = Room::new_shared(3);
    /// assert_eq!(room.borrow().number(), 3);
    /// ```
    pub fn new_shared(number: u32) -> SharedRoom {
        Rc::new(RefCell::new(Self::new(number)))
    }

    /// Get the room number
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Set the room number
    pub fn set_number(&mut self, number: u32) {
        self.number = number;
    }

    /// Get the objects in this room, in insertion order
    pub fn objects(&self) -> &[SharedObject] {
        &self.objects
    }

    /// Replace the entire object collection wholesale
    ///
    /// No validation is applied to the new collection.
    pub fn set_objects(&mut self, objects: Vec<SharedObject>) {
        self.objects = objects;
    }

    /// Add an object to the end of the collection
    ///
    /// An absent reference is rejected and the collection stays unchanged.
    ///
    /// # Arguments
    /// * `object` - Handle to add, or `None` for an absent reference
    ///
    /// # Returns
    /// - Ok(()) if the object was appended
    /// - Err if the reference was absent
    ///
    /// # Example
    /// ```
    /// use house_model_core::{Object, Room, RoomError};
    ///
    /// let mut room = Room::new(1);
    /// room.add_object(Some(Object::new_shared("Lamp".to_string()))).unwrap();
    ///
    /// let err = room.add_object(None).unwrap_err();
    /// assert_eq!(err, RoomError::MissingObject);
    /// assert_eq!(room.object_count(), 1);
    /// ```
    pub fn add_object(&mut self, object: Option<SharedObject>) -> Result<(), RoomError> {
        let object = object.ok_or(RoomError::MissingObject)?;
        self.objects.push(object);
        Ok(())
    }

    /// Get the number of objects in this room
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Check whether this room holds the given object
    ///
    /// Membership is handle identity: an object with an equal name but a
    /// different handle does not count.
    pub fn contains_object(&self, object: &SharedObject) -> bool {
        self.objects.iter().any(|entry| Rc::ptr_eq(entry, object))
    }
}
