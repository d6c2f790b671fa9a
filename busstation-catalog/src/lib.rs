pub mod layout;
pub mod seatmap;
pub mod selection;

pub use layout::{BusLayout, CellSpec, Marker};
pub use seatmap::{render, CellKind, DisplayState, SeatCell, SeatMap, SeatState};
pub use selection::SelectionState;
