use std::time::{Duration, Instant};

use crate::debounce::Debounce;
use crate::directory::UnitRecord;
use crate::error::{Error, PositionError, Result};
use crate::geo::LatLon;

pub const DEBOUNCE_QUIET: Duration = Duration::from_millis(150);
pub const POSITION_TIMEOUT: Duration = Duration::from_secs(5);
// Entrance animations get this long before the list is scrolled.
pub const SCROLL_DELAY: Duration = Duration::from_millis(800);

/// Timing knobs for the finder.
#[derive(Builder, Clone, Copy, Debug)]
pub struct FinderConfig {
    #[builder(default = "DEBOUNCE_QUIET")]
    pub debounce: Duration,
    #[builder(default = "POSITION_TIMEOUT")]
    pub position_timeout: Duration,
    #[builder(default = "SCROLL_DELAY")]
    pub scroll_delay: Duration,
}

/// Ask the presentation layer to bring one card into view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollIntent {
    pub unit_id: u32,
}

fn nearest_index(units: &[UnitRecord], from: LatLon) -> Option<usize> {
    let mut nearest = None;
    let mut min_distance = std::f64::INFINITY;
    for (i, unit) in units.iter().enumerate() {
        let distance = from.distance_km(unit.latlon);
        // Strict less-than: the earlier record wins ties
        if distance < min_distance {
            min_distance = distance;
            nearest = Some(i);
        }
    }
    nearest
}

/// The record with minimum great-circle distance to `from`. Equidistant
/// records resolve to the one listed first.
pub fn nearest_unit(units: &[UnitRecord], from: LatLon) -> Option<&UnitRecord> {
    nearest_index(units, from).map(|i| &units[i])
}

/// Case-insensitive substring match over name and city, preserving
/// directory order. A blank term is the identity.
pub fn filter_units<'u>(units: &'u [UnitRecord], term: &str) -> Vec<&'u UnitRecord> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return units.iter().collect();
    }
    units
        .iter()
        .filter(|u| u.name.to_lowercase().contains(&term) || u.city.to_lowercase().contains(&term))
        .collect()
}

/// Single owner of the finder's mutable state: the selection, the raw
/// and committed search term, and the deferred scroll request. The
/// presentation layer reads from it and hands discrete events back in;
/// nothing else holds state.
#[derive(Debug)]
pub struct Finder<'a> {
    units: &'a [UnitRecord],
    config: FinderConfig,
    selected: usize,
    pinned: bool,
    search: Debounce<String>,
    committed: String,
    scroll_due: Option<(u32, Instant)>,
}

impl<'a> Finder<'a> {
    pub fn new(units: &'a [UnitRecord], config: FinderConfig) -> Result<Self> {
        if units.is_empty() {
            return Err(Error::EmptyDirectory);
        }
        Ok(Finder {
            units,
            config,
            // The directory's designated default: its first record
            selected: 0,
            pinned: false,
            search: Debounce::new(config.debounce),
            committed: String::new(),
            scroll_due: None,
        })
    }

    pub fn config(&self) -> &FinderConfig {
        &self.config
    }

    pub fn selected(&self) -> &'a UnitRecord {
        &self.units[self.selected]
    }

    /// Direct pick from a rendered card. Pins the selection so a slow
    /// position fix can no longer override it.
    pub fn click(&mut self, id: u32) {
        if let Some(i) = self.units.iter().position(|u| u.id == id) {
            self.selected = i;
            self.pinned = true;
        }
    }

    /// Outcome of the once-per-page-view position request. Any failure
    /// keeps the current selection and is not retried; a fix arriving
    /// after a manual click is stale and dropped.
    pub fn position_resolved(
        &mut self,
        outcome: std::result::Result<LatLon, PositionError>,
        now: Instant,
    ) {
        let from = match outcome {
            Ok(from) => from,
            Err(_) => return,
        };
        if self.pinned {
            return;
        }
        if let Some(i) = nearest_index(self.units, from) {
            self.selected = i;
            self.scroll_due = Some((self.units[i].id, now + self.config.scroll_delay));
        }
    }

    /// Raw keystroke; the filter only recomputes once input goes quiet.
    pub fn keystroke(&mut self, text: &str, now: Instant) {
        self.search.submit(text.to_owned(), now);
    }

    /// Advances the finder's timers: commits a quiesced search term and
    /// returns the deferred scroll request once its delay has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<ScrollIntent> {
        if let Some(term) = self.search.poll(now) {
            self.committed = term;
        }
        match self.scroll_due {
            Some((unit_id, due)) if due <= now => {
                self.scroll_due = None;
                Some(ScrollIntent { unit_id })
            }
            _ => None,
        }
    }

    pub fn search_term(&self) -> &str {
        &self.committed
    }

    /// The filtered view of the directory. Independent of the selection;
    /// the selected unit may well be filtered out.
    pub fn visible(&self) -> Vec<&'a UnitRecord> {
        filter_units(self.units, &self.committed)
    }
}
