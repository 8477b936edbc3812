use crate::domain::model::Venue;
use crate::utils::error::{DirectoryError, Result};
use std::collections::HashSet;

/// Session venue list, in selection order. Append-only.
#[derive(Debug, Default)]
pub struct VenueStore {
    venues: Vec<Venue>,
    ids: HashSet<String>,
}

impl VenueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, venue: Venue) -> Result<&Venue> {
        if !self.ids.insert(venue.id.clone()) {
            return Err(DirectoryError::DuplicateVenueError { id: venue.id });
        }
        self.venues.push(venue);
        Ok(&self.venues[self.venues.len() - 1])
    }

    pub fn venues(&self) -> &[Venue] {
        &self.venues
    }

    pub fn len(&self) -> usize {
        self.venues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.venues.is_empty()
    }

    /// Case-insensitive substring match on the venue name. Recomputed on
    /// every call; an empty query returns everything.
    pub fn search(&self, query: &str) -> Vec<&Venue> {
        let needle = query.to_lowercase();
        self.venues
            .iter()
            .filter(|venue| venue.name.to_lowercase().contains(&needle))
            .collect()
    }
}
