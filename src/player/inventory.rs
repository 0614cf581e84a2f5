//! The player's inventory.

use bevy::prelude::*;

/// Number of item slots drawn on the inventory panel.
pub const INVENTORY_SLOTS: usize = 3;

/// Left edge of each slot on the inventory panel, in pixels.
pub const INVENTORY_SLOT_LEFT: [f32; INVENTORY_SLOTS] = [150.0, 200.0, 250.0];

/// Something the player can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Item {
    Key,
}

impl Item {
    pub fn name(&self) -> &'static str {
        match self {
            Item::Key => "KEY",
        }
    }
}

/// Items held by the player, in pickup order.
#[derive(Component, Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn with_items(items: impl IntoIterator<Item = Item>) -> Self {
        Self {
            items: items.into_iter().collect(),
        }
    }

    pub fn pick_up(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn contains(&self, item: Item) -> bool {
        self.items.contains(&item)
    }

    /// Use up the most recently picked up `item`. Returns false, leaving the
    /// inventory untouched, when no such item is held.
    pub fn consume(&mut self, item: Item) -> bool {
        match self.items.iter().rposition(|held| *held == item) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Held items with the panel slot each one is drawn in. Items beyond the
    /// last slot are still held but not drawn.
    pub fn slots(&self) -> impl Iterator<Item = (f32, Item)> + '_ {
        INVENTORY_SLOT_LEFT.iter().copied().zip(self.items.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pick_up_appends() {
        let mut inventory = Inventory::default();
        inventory.pick_up(Item::Key);
        inventory.pick_up(Item::Key);
        assert_eq!(inventory.len(), 2);
        assert!(inventory.contains(Item::Key));
    }

    #[test]
    fn consume_removes_one() {
        let mut inventory = Inventory::with_items([Item::Key, Item::Key]);
        assert!(inventory.consume(Item::Key));
        assert_eq!(inventory.len(), 1);
    }

    #[test]
    fn consume_on_empty_is_a_no_op() {
        let mut inventory = Inventory::default();
        assert!(!inventory.consume(Item::Key));
        assert!(inventory.is_empty());
    }

    #[test]
    fn slots_stop_at_panel_capacity() {
        let inventory = Inventory::with_items([Item::Key; 5]);
        let slots: Vec<_> = inventory.slots().collect();
        assert_eq!(slots.len(), INVENTORY_SLOTS);
        assert_eq!(slots[0], (150.0, Item::Key));
        assert_eq!(slots[2], (250.0, Item::Key));
        assert_eq!(inventory.len(), 5);
    }
}
