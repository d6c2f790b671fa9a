use serde::Serialize;
use std::collections::BTreeSet;

use crate::layout::{drawable, rows_for, CellSpec, Marker};

/// State of a selectable seat. Exactly one applies to every seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeatState {
    Available,
    Selected,
    Reserved,
}

/// What the front end draws: seat states plus `Disabled` for markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayState {
    Available,
    Selected,
    Reserved,
    Disabled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CellKind {
    Seat { number: u32, state: SeatState },
    Marker { marker: Marker },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeatCell {
    pub row: usize,
    pub column: usize,
    pub kind: CellKind,
}

impl SeatCell {
    pub fn label(&self) -> String {
        match self.kind {
            CellKind::Seat { number, .. } => number.to_string(),
            CellKind::Marker { marker } => marker.label().to_string(),
        }
    }

    pub fn display_state(&self) -> DisplayState {
        match self.kind {
            CellKind::Seat { state: SeatState::Available, .. } => DisplayState::Available,
            CellKind::Seat { state: SeatState::Selected, .. } => DisplayState::Selected,
            CellKind::Seat { state: SeatState::Reserved, .. } => DisplayState::Reserved,
            CellKind::Marker { .. } => DisplayState::Disabled,
        }
    }

    pub fn is_selectable(&self) -> bool {
        matches!(
            self.display_state(),
            DisplayState::Available | DisplayState::Selected
        )
    }

    pub fn seat_number(&self) -> Option<u32> {
        match self.kind {
            CellKind::Seat { number, .. } => Some(number),
            CellKind::Marker { .. } => None,
        }
    }
}

/// Ordered cells of one bus, front to back, left to right.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeatMap {
    pub capacity: u32,
    pub cells: Vec<SeatCell>,
}

impl SeatMap {
    pub fn rows(&self) -> Vec<Vec<&SeatCell>> {
        let mut rows: Vec<Vec<&SeatCell>> = Vec::new();
        for cell in &self.cells {
            if rows.len() <= cell.row {
                rows.resize_with(cell.row + 1, Vec::new);
            }
            rows[cell.row].push(cell);
        }
        rows
    }

    pub fn count(&self, state: DisplayState) -> usize {
        self.cells
            .iter()
            .filter(|c| c.display_state() == state)
            .count()
    }

    pub fn seat(&self, number: u32) -> Option<&SeatCell> {
        self.cells.iter().find(|c| c.seat_number() == Some(number))
    }
}

/// Lay out `capacity` seats and tag each one from set membership.
///
/// A seat found in both `reserved` and `selected` is drawn as reserved.
pub fn render(capacity: u32, reserved: &BTreeSet<u32>, selected: &BTreeSet<u32>) -> SeatMap {
    let capacity = drawable(capacity);
    let mut cells = Vec::with_capacity(capacity as usize + 8);

    for (row, cells_in_row) in rows_for(capacity).into_iter().enumerate() {
        for (column, cell) in cells_in_row.into_iter().enumerate() {
            let kind = match cell {
                CellSpec::Seat(number) => {
                    let state = if reserved.contains(&number) {
                        SeatState::Reserved
                    } else if selected.contains(&number) {
                        SeatState::Selected
                    } else {
                        SeatState::Available
                    };
                    CellKind::Seat { number, state }
                }
                CellSpec::Marker(marker) => CellKind::Marker { marker },
            };
            cells.push(SeatCell { row, column, kind });
        }
    }

    SeatMap { capacity, cells }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[u32]) -> BTreeSet<u32> {
        items.iter().copied().collect()
    }

    #[test]
    fn test_render_is_deterministic() {
        let reserved = set(&[1, 2, 17]);
        let selected = set(&[3, 40]);

        for capacity in [56, 70, 75, 80, 40] {
            let first = render(capacity, &reserved, &selected);
            let second = render(capacity, &reserved, &selected);
            assert_eq!(first, second, "capacity {}", capacity);

            let states: Vec<DisplayState> = first.cells.iter().map(|c| c.display_state()).collect();
            let again: Vec<DisplayState> = second.cells.iter().map(|c| c.display_state()).collect();
            assert_eq!(states, again);
        }
    }

    #[test]
    fn test_reserved_wins_over_selected() {
        let map = render(56, &set(&[5]), &set(&[5, 6]));
        assert_eq!(map.seat(5).unwrap().display_state(), DisplayState::Reserved);
        assert_eq!(map.seat(6).unwrap().display_state(), DisplayState::Selected);
        assert!(!map.seat(5).unwrap().is_selectable());
    }

    #[test]
    fn test_markers_are_disabled() {
        let map = render(70, &BTreeSet::new(), &BTreeSet::new());
        let markers: Vec<&SeatCell> = map
            .cells
            .iter()
            .filter(|c| c.seat_number().is_none())
            .collect();

        assert!(!markers.is_empty());
        assert!(markers.iter().all(|c| c.display_state() == DisplayState::Disabled));
        assert_eq!(map.cells[0].label(), "Driver");
        assert_eq!(map.count(DisplayState::Available), 70);
    }

    #[test]
    fn test_generic_capacity_counts() {
        let map = render(40, &set(&[1, 2]), &set(&[3]));
        assert_eq!(map.rows().len(), 10);
        assert_eq!(map.count(DisplayState::Reserved), 2);
        assert_eq!(map.count(DisplayState::Selected), 1);
        assert_eq!(map.count(DisplayState::Available), 37);
        assert_eq!(map.count(DisplayState::Disabled), 0);
    }

    #[test]
    fn test_cell_serialization() {
        let map = render(56, &set(&[1]), &BTreeSet::new());
        let json = serde_json::to_value(&map.cells[..4]).unwrap();
        assert_eq!(json[0]["kind"]["type"], "marker");
        assert_eq!(json[0]["kind"]["marker"], "Driver");
        assert_eq!(json[3]["kind"]["state"], "reserved");
        assert_eq!(json[3]["row"], 1);
    }
}
