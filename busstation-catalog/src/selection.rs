use std::collections::BTreeSet;

use crate::layout::drawable;
use crate::seatmap::{render, SeatMap};

/// Seats the traveler has tentatively picked on one trip.
///
/// Kept disjoint from the reserved set: clicks on reserved seats are ignored, and
/// seats that become reserved after a refresh are dropped. There is no upper bound
/// on how many seats can be picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    capacity: u32,
    reserved: BTreeSet<u32>,
    selected: BTreeSet<u32>,
}

impl SelectionState {
    pub fn new(capacity: u32, reserved: impl IntoIterator<Item = u32>) -> Self {
        Self {
            capacity: drawable(capacity),
            reserved: reserved.into_iter().collect(),
            selected: BTreeSet::new(),
        }
    }

    /// Flip `seat` in the selection. Returns whether anything changed.
    pub fn toggle(&mut self, seat: u32) -> bool {
        if seat == 0 || seat > self.capacity || self.reserved.contains(&seat) {
            return false;
        }

        if !self.selected.remove(&seat) {
            self.selected.insert(seat);
        }
        true
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Replace the trip data after a re-fetch.
    pub fn refresh(&mut self, capacity: u32, reserved: impl IntoIterator<Item = u32>) {
        let capacity = drawable(capacity);
        self.capacity = capacity;
        self.reserved = reserved.into_iter().collect();

        let reserved = &self.reserved;
        self.selected
            .retain(|seat| *seat <= capacity && !reserved.contains(seat));
    }

    /// Selected seats, ascending.
    pub fn seats(&self) -> Vec<u32> {
        self.selected.iter().copied().collect()
    }

    pub fn contains(&self, seat: u32) -> bool {
        self.selected.contains(&seat)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn reserved(&self) -> &BTreeSet<u32> {
        &self.reserved
    }

    pub fn render(&self) -> SeatMap {
        render(self.capacity, &self.reserved, &self.selected)
    }
}
