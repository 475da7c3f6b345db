//! Where paths come from.
//!
//! The tile engine only needs one capability: every path intersecting a
//! bounding box, optionally narrowed by a filter. Database or archive
//! backed sources implement [`PathSource`] outside this crate;
//! [`MemorySource`] serves already decoded tracks.

use std::time::SystemTime;

use crate::clip_polyline::clip_polyline;
use crate::error::SourceError;
use crate::tile::BoundingBox;

/// Ordered `[lon, lat]` positions in degrees.
pub type GeoPath = Vec<[f64; 2]>;

/// A provider of geographic paths.
pub trait PathSource {
    /// Narrowing criteria understood by this source.
    type Filter;
    type Error: Into<SourceError>;

    /// All paths inside `bbox` that pass `filter`.
    ///
    /// Positions outside `bbox`, beyond the padding the engine already adds,
    /// make the tile render fail, so implementations clip to the box.
    fn paths_in_bounds(
        &self,
        bbox: &BoundingBox,
        filter: Option<&Self::Filter>,
    ) -> Result<Vec<GeoPath>, Self::Error>;
}

impl<S: PathSource + ?Sized> PathSource for &S {
    type Filter = S::Filter;
    type Error = S::Error;

    fn paths_in_bounds(
        &self,
        bbox: &BoundingBox,
        filter: Option<&Self::Filter>,
    ) -> Result<Vec<GeoPath>, Self::Error> {
        (**self).paths_in_bounds(bbox, filter)
    }
}

// ============================================================================
// Tracks
// ============================================================================

/// One recorded activity.
///
/// A recording paused and resumed, or a GPX file with several `<trkseg>`s,
/// has one segment per uninterrupted stretch. Segments are never joined.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub segments: Vec<GeoPath>,
    pub started_at: SystemTime,
    pub sport_type: String,
}

impl Track {
    /// Single-segment track.
    pub fn new(positions: GeoPath, started_at: SystemTime, sport_type: impl Into<String>) -> Self {
        Self::with_segments(vec![positions], started_at, sport_type)
    }

    pub fn with_segments(
        segments: Vec<GeoPath>,
        started_at: SystemTime,
        sport_type: impl Into<String>,
    ) -> Self {
        Self {
            segments,
            started_at,
            sport_type: sport_type.into(),
        }
    }

    /// Total number of positions over all segments.
    pub fn len(&self) -> usize {
        self.segments.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.iter().all(Vec::is_empty)
    }
}

/// Date range and activity type restriction. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackFilter {
    /// Earliest accepted start time, inclusive.
    pub start: Option<SystemTime>,
    /// Latest accepted start time, inclusive.
    pub end: Option<SystemTime>,
    /// Accepted sport types, compared exactly.
    pub sport_types: Option<Vec<String>>,
}

impl TrackFilter {
    pub fn with_start(mut self, start: SystemTime) -> Self {
        self.start = Some(start);
        self
    }

    pub fn with_end(mut self, end: SystemTime) -> Self {
        self.end = Some(end);
        self
    }

    pub fn with_sport_types<I, T>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.sport_types = Some(types.into_iter().map(Into::into).collect());
        self
    }

    pub fn matches(&self, track: &Track) -> bool {
        if self.start.map_or(false, |s| track.started_at < s) {
            return false;
        }
        if self.end.map_or(false, |e| track.started_at > e) {
            return false;
        }
        match &self.sport_types {
            Some(types) => types.iter().any(|t| *t == track.sport_type),
            None => true,
        }
    }
}

// ============================================================================
// MemorySource
// ============================================================================

/// In-memory collection of decoded tracks.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    tracks: Vec<Track>,
}

impl MemorySource {
    pub fn new(tracks: Vec<Track>) -> Self {
        Self { tracks }
    }

    pub fn push(&mut self, track: Track) {
        self.tracks.push(track);
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

impl FromIterator<Track> for MemorySource {
    fn from_iter<I: IntoIterator<Item = Track>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl PathSource for MemorySource {
    type Filter = TrackFilter;
    type Error = std::convert::Infallible;

    fn paths_in_bounds(
        &self,
        bbox: &BoundingBox,
        filter: Option<&TrackFilter>,
    ) -> Result<Vec<GeoPath>, Self::Error> {
        Ok(self
            .tracks
            .iter()
            .filter(|t| filter.map_or(true, |f| f.matches(t)))
            .flat_map(|t| &t.segments)
            .flat_map(|segment| clip_polyline(segment, bbox))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn day(n: u64) -> SystemTime {
        SystemTime::UNIX_EPOCH + Duration::from_secs(n * 86_400)
    }

    fn source() -> MemorySource {
        [
            Track::new(vec![[1.0, 1.0], [2.0, 2.0]], day(10), "Run"),
            Track::new(vec![[3.0, 3.0], [4.0, 3.0]], day(20), "Ride"),
            Track::new(vec![[5.0, 5.0], [6.0, 6.0]], day(30), "Hike"),
        ]
        .into_iter()
        .collect()
    }

    fn world() -> BoundingBox {
        BoundingBox::new(-180.0, -85.0, 180.0, 85.0)
    }

    #[test]
    fn test_no_filter_returns_all() {
        let paths = source().paths_in_bounds(&world(), None).unwrap();
        assert_eq!(paths.len(), 3);
    }

    #[test]
    fn test_date_range_inclusive() {
        let f = TrackFilter::default().with_start(day(20)).with_end(day(30));
        let paths = source().paths_in_bounds(&world(), Some(&f)).unwrap();
        assert_eq!(paths, vec![vec![[3.0, 3.0], [4.0, 3.0]], vec![[5.0, 5.0], [6.0, 6.0]]]);
    }

    #[test]
    fn test_sport_types() {
        let f = TrackFilter::default().with_sport_types(["Run", "Hike"]);
        let paths = source().paths_in_bounds(&world(), Some(&f)).unwrap();
        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0][0], [1.0, 1.0]);
        assert_eq!(paths[1][0], [5.0, 5.0]);

        let f = TrackFilter::default().with_sport_types(Vec::<String>::new());
        assert!(source().paths_in_bounds(&world(), Some(&f)).unwrap().is_empty());
    }

    #[test]
    fn test_clipped_to_bbox() {
        let src = MemorySource::new(vec![Track::new(
            vec![[0.0, 0.5], [2.0, 0.5], [2.0, 2.0], [0.5, 2.0]],
            day(1),
            "Run",
        )]);
        let bbox = BoundingBox::new(0.0, 0.0, 1.0, 1.0);
        let paths = src.paths_in_bounds(&bbox, None).unwrap();
        assert_eq!(paths, vec![vec![[0.0, 0.5], [1.0, 0.5]]]);

        let far = BoundingBox::new(50.0, 50.0, 51.0, 51.0);
        assert!(src.paths_in_bounds(&far, None).unwrap().is_empty());
    }

    #[test]
    fn test_segments_stay_separate() {
        let track = Track::with_segments(
            vec![vec![[1.0, 1.0], [2.0, 1.0]], Vec::new(), vec![[3.0, 2.0], [4.0, 2.0]]],
            day(12),
            "Run",
        );
        assert_eq!(track.len(), 4);
        assert!(!track.is_empty());

        let src = MemorySource::new(vec![track]);
        let paths = src.paths_in_bounds(&world(), None).unwrap();
        assert_eq!(paths, vec![vec![[1.0, 1.0], [2.0, 1.0]], vec![[3.0, 2.0], [4.0, 2.0]]]);

        let f = TrackFilter::default().with_sport_types(["Ride"]);
        assert!(src.paths_in_bounds(&world(), Some(&f)).unwrap().is_empty());
    }

    #[test]
    fn test_reference_is_a_source() {
        fn count<S: PathSource>(s: S) -> usize {
            match s.paths_in_bounds(&world(), None) {
                Ok(p) => p.len(),
                Err(_) => 0,
            }
        }
        let src = source();
        assert_eq!(count(&src), 3);
        assert_eq!(src.len(), 3);
    }
}
