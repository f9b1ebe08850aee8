//! Venue data and map view state.

use egui::Vec2;
use seatmap::{DataError, MapConfig, MapView, MapViewError, SeatStore, VenueSnapshot};
use std::path::PathBuf;
use std::time::Instant;

/// Where the current venue came from.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum VenueSource {
    #[default]
    None,
    File(PathBuf),
    Demo { seed: u64 },
}

impl VenueSource {
    pub fn describe(&self) -> String {
        match self {
            VenueSource::None => "No venue loaded".to_string(),
            VenueSource::File(path) => path.display().to_string(),
            VenueSource::Demo { seed } => format!("Demo venue (seed {seed})"),
        }
    }
}

/// State related to the loaded venue.
///
/// Responsibilities:
/// - Owning the data store shared with the map view
/// - Creating the map view once the canvas size is known
/// - Refitting the map when a different venue replaces the data
pub struct VenueState {
    store: SeatStore,
    source: VenueSource,
    config: MapConfig,
    map_view: Option<MapView>,
}

impl VenueState {
    pub fn new(config: MapConfig) -> Self {
        Self {
            store: SeatStore::new(),
            source: VenueSource::None,
            config,
            map_view: None,
        }
    }

    // ===== Queries =====

    pub fn store(&self) -> &SeatStore {
        &self.store
    }

    pub fn source(&self) -> &VenueSource {
        &self.source
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    pub fn map_view(&self) -> Option<&MapView> {
        self.map_view.as_ref()
    }

    pub fn map_view_mut(&mut self) -> Option<&mut MapView> {
        self.map_view.as_mut()
    }

    pub fn has_venue(&self) -> bool {
        self.source != VenueSource::None
    }

    // ===== Mutations =====

    /// Replaces the venue data and refits the map to it.
    pub fn load_venue(&mut self, snapshot: VenueSnapshot, source: VenueSource) -> Result<(), DataError> {
        self.store.load_snapshot(snapshot)?;
        self.source = source;
        if let Some(view) = &mut self.map_view {
            view.refit();
        }
        Ok(())
    }

    /// Empties the store, e.g. while a new file is loading.
    pub fn clear(&mut self) {
        // An empty snapshot always validates.
        let _ = self.load_venue(VenueSnapshot::default(), VenueSource::None);
    }

    /// Returns the map view, creating it for `size` on first use.
    pub fn ensure_map_view(&mut self, size: Vec2, now: Instant) -> Result<&mut MapView, MapViewError> {
        let view = match self.map_view.take() {
            Some(view) => view,
            None => MapView::new(&self.store, self.config.clone(), size, now)?,
        };
        Ok(self.map_view.insert(view))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seatmap::Seat;

    fn venue() -> VenueSnapshot {
        VenueSnapshot {
            seats: vec![Seat::new(1, 0.0, 0.0)],
            bookings: vec![],
        }
    }

    #[test]
    fn test_load_and_clear() {
        let mut state = VenueState::new(MapConfig::default());
        assert!(!state.has_venue());

        state.load_venue(venue(), VenueSource::Demo { seed: 3 }).unwrap();
        assert!(state.has_venue());
        assert_eq!(state.store().seats().len(), 1);
        assert_eq!(state.source().describe(), "Demo venue (seed 3)");

        state.clear();
        assert!(!state.has_venue());
        assert!(state.store().seats().is_empty());
    }

    #[test]
    fn test_map_view_is_created_once() {
        let mut state = VenueState::new(MapConfig::default());
        let now = Instant::now();
        state.ensure_map_view(Vec2::new(300.0, 200.0), now).unwrap();
        state.ensure_map_view(Vec2::new(999.0, 999.0), now).unwrap();
        assert_eq!(state.store().subscriber_count(), 1);
    }

    #[test]
    fn test_invalid_size_is_reported() {
        let mut state = VenueState::new(MapConfig::default());
        let result = state.ensure_map_view(Vec2::new(f32::INFINITY, 1.0), Instant::now());
        assert!(result.is_err());
        assert!(state.map_view().is_none());
    }
}
