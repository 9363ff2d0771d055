//! Property tests for the containment model

use house_model_core::{House, Room};
use proptest::prelude::*;
use std::rc::Rc;

proptest! {
    #[test]
    fn construction_yields_rooms_numbered_in_order(room_count in 0u32..64) {
        let house = House::new("1 Main St".to_string(), room_count);

        prop_assert_eq!(house.room_count(), room_count as usize);
        for (index, room) in house.rooms().iter().enumerate() {
            prop_assert_eq!(room.borrow().number(), index as u32 + 1);
        }
    }

    #[test]
    fn address_round_trips(address in ".*") {
        let mut house = House::new(String::new(), 0);

        house.set_address(address.clone());

        prop_assert_eq!(house.address(), address);
    }

    #[test]
    fn add_then_remove_is_a_cancelling_pair(
        room_count in 0u32..16,
        number in any::<u32>(),
    ) {
        let mut house = House::new("1 Main St".to_string(), room_count);
        let before: Vec<_> = house.rooms().iter().map(Rc::clone).collect();

        let room = Room::new_shared(number);
        house.add_room(Rc::clone(&room));
        prop_assert!(house.remove_room(&room));

        prop_assert_eq!(house.room_count(), before.len());
        for (kept, original) in house.rooms().iter().zip(before.iter()) {
            prop_assert!(Rc::ptr_eq(kept, original));
        }
    }
}
