use crate::core::assembler::assemble_venue;
use crate::core::inference::InferenceClient;
use crate::core::presentation;
use crate::core::store::VenueStore;
use crate::domain::model::{GeoPoint, PlaceResult, Venue};
use crate::domain::ports::CompletionService;
use crate::utils::error::Result;
use chrono::{DateTime, Duration, Utc};

/// Session state: the inference client and the venues selected so far.
pub struct Directory<S: CompletionService> {
    inference: InferenceClient<S>,
    store: VenueStore,
    last_stamp: Option<DateTime<Utc>>,
}

impl<S: CompletionService> Directory<S> {
    pub fn new(inference: InferenceClient<S>) -> Self {
        Self {
            inference,
            store: VenueStore::new(),
            last_stamp: None,
        }
    }

    /// Runs inference for a selected place and appends the resulting venue.
    ///
    /// Inference problems never fail this call; only a duplicate venue id does.
    pub async fn select_place(&mut self, place: PlaceResult) -> Result<&Venue> {
        let name = place.name.as_deref().unwrap_or_default();
        let address = place.formatted_address.as_deref().unwrap_or_default();

        tracing::info!("Generating accessibility info for '{}'", name);
        let outcome = self.inference.generate_access_info(name, address).await;

        let venue = assemble_venue(&place, &outcome, self.next_stamp());
        tracing::info!(
            "Added venue '{}' ({}) with {} accessibility feature(s)",
            venue.name,
            venue.category,
            venue.features.len()
        );
        self.store.append(venue)
    }

    /// Current time, moved at least one millisecond past the previous
    /// selection so timestamp ids of id-less places never repeat.
    fn next_stamp(&mut self) -> DateTime<Utc> {
        let now = Utc::now();
        let stamp = match self.last_stamp {
            Some(last) if now.timestamp_millis() <= last.timestamp_millis() => {
                last + Duration::milliseconds(1)
            }
            _ => now,
        };
        self.last_stamp = Some(stamp);
        stamp
    }

    pub fn search(&self, query: &str) -> Vec<&Venue> {
        self.store.search(query)
    }

    pub fn venues(&self) -> &[Venue] {
        self.store.venues()
    }

    pub fn map_center(&self) -> GeoPoint {
        presentation::map_center(self.store.venues())
    }

}
