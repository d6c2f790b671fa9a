use busstation_shared::models::{Gender, PassengerPayload};
use busstation_shared::Masked;

use crate::error::BookingError;

/// One passenger being typed in, bound to a seat.
///
/// Age stays as text until submission.
#[derive(Debug, Clone, PartialEq)]
pub struct PassengerDraft {
    pub identity_number: Masked<String>,
    pub name: String,
    pub gender: Gender,
    pub age: String,
    pub baggage: u32,
    pub seat: u32,
}

impl PassengerDraft {
    fn new(seat: u32, baggage: u32) -> Self {
        Self {
            identity_number: Masked(String::new()),
            name: String::new(),
            gender: Gender::default(),
            age: String::new(),
            baggage,
            seat,
        }
    }

    /// Positive integer age, or `None` for blank, non-numeric or zero input.
    ///
    /// Whole years only: `"+5"` parses, `"12.5"` is rejected and must stay rejected.
    pub fn parsed_age(&self) -> Option<u32> {
        self.age.trim().parse::<u32>().ok().filter(|age| *age > 0)
    }

    pub fn is_complete(&self) -> bool {
        !self.identity_number.expose().trim().is_empty()
            && !self.name.trim().is_empty()
            && self.parsed_age().is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PassengerField {
    IdentityNumber(String),
    Name(String),
    Gender(Gender),
    Age(String),
    Baggage(u32),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PassengerForm {
    passengers: Vec<PassengerDraft>,
}

impl PassengerForm {
    /// One blank passenger per seat, each starting with the shared baggage count.
    pub fn initiate(seats: &[u32], default_baggage: u32) -> Self {
        Self {
            passengers: seats
                .iter()
                .map(|seat| PassengerDraft::new(*seat, default_baggage))
                .collect(),
        }
    }

    pub fn update_field(&mut self, index: usize, field: PassengerField) -> Result<(), BookingError> {
        let passenger = self
            .passengers
            .get_mut(index)
            .ok_or(BookingError::PassengerIndex(index))?;

        match field {
            PassengerField::IdentityNumber(value) => passenger.identity_number = Masked(value),
            PassengerField::Name(value) => passenger.name = value,
            PassengerField::Gender(value) => passenger.gender = value,
            PassengerField::Age(value) => passenger.age = value,
            PassengerField::Baggage(value) => passenger.baggage = value,
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        !self.passengers.is_empty() && self.passengers.iter().all(PassengerDraft::is_complete)
    }

    pub fn passengers(&self) -> &[PassengerDraft] {
        &self.passengers
    }

    pub fn len(&self) -> usize {
        self.passengers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passengers.is_empty()
    }

    pub fn seats(&self) -> Vec<u32> {
        self.passengers.iter().map(|p| p.seat).collect()
    }

    pub fn to_payload(&self) -> Result<Vec<PassengerPayload>, BookingError> {
        if !self.is_valid() {
            return Err(BookingError::InvalidForm);
        }

        self.passengers
            .iter()
            .map(|p| {
                let age = p.parsed_age().ok_or(BookingError::InvalidForm)?;
                Ok(PassengerPayload {
                    numero_piece_identific: Masked(p.identity_number.expose().trim().to_string()),
                    nom: p.name.trim().to_string(),
                    genre: p.gender,
                    age,
                    nbr_baggage: p.baggage,
                    place_choisis: p.seat,
                })
            })
            .collect()
    }
}
