//! Object model
//!
//! Leaf of the hierarchy: a named object with no children of its own. One
//! object may sit in any number of rooms at once; every holder shares the
//! same handle, so renaming it through one handle renames it everywhere.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

/// Shared handle to an object.
///
/// Identity is the handle itself (`Rc::ptr_eq`), never the name. Two objects
/// both called "Lamp" are distinct; two clones of the same handle are the
/// same object.
pub type SharedObject = Rc<RefCell<Object>>;

/// A named object placed inside rooms
///
/// # Example
/// ```
/// use house_model_core::Object;
///
/// let mut object = Object::new("Lamp".to_string());
/// object.set_name("Desk lamp".to_string());
/// assert_eq!(object.name(), "Desk lamp");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Object {
    /// Display name, mutable, no validation
    name: String,
}

impl Object {
    /// Create a new object
    ///
    /// # Arguments
    /// * `name` - Display name (any string is accepted)
    pub fn new(name: String) -> Self {
        Self { name }
    }

    /// Create a new object behind a shared handle
    ///
    /// # Example
    /// ```
    /// use house_model_core::Object;
    /// use std::rc::Rc;
    ///
    /// let object = Object::new_shared("Lamp".to_string());
    /// let alias = Rc::clone(&object);
    ///
    /// alias.borrow_mut().set_name("Desk lamp".to_string());
    /// assert_eq!(object.borrow().name(), "Desk lamp");
    /// ```
    pub fn new_shared(name: String) -> SharedObject {
        Rc::new(RefCell::new(Self::new(name)))
    }

    /// Get the object name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the object name
    pub fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        let mut object = Object::new("Lamp".to_string());
        assert_eq!(object.name(), "Lamp");

        object.set_name("Bed".to_string());
        assert_eq!(object.name(), "Bed");
    }

    #[test]
    fn test_shared_handle_aliases_mutation() {
        let object = Object::new_shared("Lamp".to_string());
        let alias = Rc::clone(&object);

        object.borrow_mut().set_name("Floor lamp".to_string());

        assert_eq!(alias.borrow().name(), "Floor lamp");
    }

    #[test]
    fn test_handles_with_equal_names_are_distinct() {
        let a = Object::new_shared("Lamp".to_string());
        let b = Object::new_shared("Lamp".to_string());

        assert!(!Rc::ptr_eq(&a, &b));
    }
}
