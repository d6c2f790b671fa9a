//! Bus seat layouts, keyed by vehicle capacity.
//!
//! Each known bus is described as data: an ordered list of blocks that expand into
//! visual rows. Supporting a new bus size means adding an entry to [`LAYOUTS`].
//! Capacities without an entry fall back to a plain grid of four seats per row.

use busstation_shared::models::MAX_SEAT_CAPACITY;
use serde::Serialize;

/// Non-selectable cells drawn on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Marker {
    Driver,
    Attendant,
    Door,
    Restroom,
}

impl Marker {
    pub fn label(&self) -> &'static str {
        match self {
            Marker::Driver => "Driver",
            Marker::Attendant => "Attendant",
            Marker::Door => "Door",
            Marker::Restroom => "Restroom",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellSpec {
    Seat(u32),
    Marker(Marker),
}

#[derive(Debug, Clone, Copy)]
pub enum Block {
    /// A single row, cell by cell.
    Row(&'static [CellSpec]),
    /// Seats `first..=last`, `per_row` to a row (the last row may be shorter).
    Seats { first: u32, last: u32, per_row: u32 },
}

#[derive(Debug)]
pub struct BusLayout {
    pub capacity: u32,
    pub blocks: &'static [Block],
}

/// Seats in a row for capacities without a dedicated layout.
pub const GENERIC_ROW_WIDTH: u32 = 4;

const DRIVER: CellSpec = CellSpec::Marker(Marker::Driver);
const ATTENDANT: CellSpec = CellSpec::Marker(Marker::Attendant);
const DOOR: CellSpec = CellSpec::Marker(Marker::Door);
const RESTROOM: CellSpec = CellSpec::Marker(Marker::Restroom);

const CAB: Block = Block::Row(&[DRIVER, ATTENDANT, DOOR]);

pub static LAYOUTS: &[BusLayout] = &[
    BusLayout {
        capacity: 56,
        blocks: &[
            CAB,
            Block::Seats { first: 1, last: 24, per_row: 4 },
            Block::Row(&[CellSpec::Seat(25), CellSpec::Seat(26), DOOR, RESTROOM]),
            Block::Seats { first: 27, last: 50, per_row: 4 },
            Block::Seats { first: 51, last: 56, per_row: 6 },
        ],
    },
    BusLayout {
        capacity: 70,
        blocks: &[
            CAB,
            Block::Seats { first: 1, last: 32, per_row: 4 },
            Block::Row(&[DOOR, RESTROOM, CellSpec::Seat(33)]),
            Block::Seats { first: 34, last: 65, per_row: 4 },
            Block::Seats { first: 66, last: 70, per_row: 5 },
        ],
    },
    BusLayout {
        capacity: 75,
        blocks: &[
            CAB,
            Block::Seats { first: 1, last: 36, per_row: 4 },
            Block::Row(&[CellSpec::Seat(37), CellSpec::Seat(38), DOOR, RESTROOM]),
            Block::Seats { first: 39, last: 70, per_row: 4 },
            Block::Seats { first: 71, last: 75, per_row: 5 },
        ],
    },
    BusLayout {
        capacity: 80,
        blocks: &[
            CAB,
            Block::Seats { first: 1, last: 20, per_row: 4 },
            Block::Row(&[DOOR, CellSpec::Seat(21), CellSpec::Seat(22), RESTROOM]),
            Block::Seats { first: 23, last: 54, per_row: 4 },
            Block::Row(&[CellSpec::Seat(55), CellSpec::Seat(56), DOOR, RESTROOM]),
            Block::Seats { first: 57, last: 76, per_row: 4 },
            Block::Seats { first: 77, last: 80, per_row: 4 },
        ],
    },
];

pub fn layout_for(capacity: u32) -> Option<&'static BusLayout> {
    LAYOUTS.iter().find(|l| l.capacity == capacity)
}

impl BusLayout {
    pub fn rows(&self) -> Vec<Vec<CellSpec>> {
        let mut rows = Vec::new();
        for block in self.blocks {
            match *block {
                Block::Row(cells) => rows.push(cells.to_vec()),
                Block::Seats { first, last, per_row } => {
                    rows.extend(seat_rows(first, last, per_row));
                }
            }
        }
        rows
    }
}

/// Rows for `capacity`: the dedicated layout if one exists, the generic grid otherwise.
///
/// Capacities above [`MAX_SEAT_CAPACITY`] are drawn at that size.
pub fn rows_for(capacity: u32) -> Vec<Vec<CellSpec>> {
    let capacity = drawable(capacity);
    match layout_for(capacity) {
        Some(layout) => layout.rows(),
        None => {
            tracing::debug!("No dedicated layout for {} seats, using generic grid", capacity);
            seat_rows(1, capacity, GENERIC_ROW_WIDTH)
        }
    }
}

pub(crate) fn drawable(capacity: u32) -> u32 {
    if capacity > MAX_SEAT_CAPACITY {
        tracing::warn!("Capacity {} exceeds {}, clamping the seat map", capacity, MAX_SEAT_CAPACITY);
    }
    capacity.min(MAX_SEAT_CAPACITY)
}

fn seat_rows(first: u32, last: u32, per_row: u32) -> Vec<Vec<CellSpec>> {
    if first > last || per_row == 0 {
        return Vec::new();
    }

    let seats: Vec<CellSpec> = (first..=last).map(CellSpec::Seat).collect();
    seats
        .chunks(per_row as usize)
        .map(|chunk| chunk.to_vec())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seat_numbers(rows: &[Vec<CellSpec>]) -> Vec<u32> {
        rows.iter()
            .flatten()
            .filter_map(|c| match c {
                CellSpec::Seat(n) => Some(*n),
                CellSpec::Marker(_) => None,
            })
            .collect()
    }

    #[test]
    fn test_every_layout_numbers_each_seat_once() {
        for layout in LAYOUTS {
            let numbers = seat_numbers(&layout.rows());
            let expected: Vec<u32> = (1..=layout.capacity).collect();
            assert_eq!(numbers, expected, "layout for {} seats", layout.capacity);
        }
    }

    #[test]
    fn test_known_capacities() {
        for capacity in [56, 70, 75, 80] {
            assert!(layout_for(capacity).is_some());
        }
        assert!(layout_for(40).is_none());
    }

    #[test]
    fn test_huge_capacity_is_clamped() {
        let rows = rows_for(u32::MAX);
        let numbers = seat_numbers(&rows);
        assert_eq!(numbers.len(), MAX_SEAT_CAPACITY as usize);
        assert_eq!(numbers.last(), Some(&MAX_SEAT_CAPACITY));
    }

    #[test]
    fn test_layouts_start_with_cab() {
        for layout in LAYOUTS {
            let rows = layout.rows();
            assert_eq!(rows[0], vec![DRIVER, ATTENDANT, DOOR]);
            assert!(rows.iter().flatten().any(|c| *c == RESTROOM));
        }
    }

    #[test]
    fn test_generic_grid() {
        let rows = rows_for(10);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], vec![CellSpec::Seat(1), CellSpec::Seat(2), CellSpec::Seat(3), CellSpec::Seat(4)]);
        assert_eq!(rows[2], vec![CellSpec::Seat(9), CellSpec::Seat(10)]);
        assert!(rows_for(0).is_empty());
    }

    #[test]
    fn test_service_rows_differ_between_sizes() {
        let service_row = |capacity: u32| {
            layout_for(capacity)
                .unwrap()
                .rows()
                .into_iter()
                .find(|r| r.contains(&RESTROOM))
                .unwrap()
        };
        assert_ne!(service_row(56), service_row(75));
        assert_ne!(service_row(70), service_row(80));
    }
}
