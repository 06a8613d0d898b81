use crate::error::{Error, Result};
use crate::types::GeoPoint;
use log::debug;

/// Bounding box for geographic areas
///
/// Represents a rectangular geographic area defined by longitude and latitude bounds.
/// All coordinates are stored in degrees.
///
/// # Limitations
///
/// **Anti-meridian handling**: This implementation does not correctly handle areas
/// crossing the ±180° longitude line (anti-meridian). Simple min/max logic is used,
/// which will produce incorrect results for such regions. If the points straddle the
/// anti-meridian, the bounding box will incorrectly span nearly the entire globe
/// instead of the actual smaller region.
///
/// **NaN coordinates**: [`BoundingBox::extend`] uses `f64::min`/`f64::max`, which
/// ignore `NaN`, so a point with a `NaN` coordinate leaves that axis unchanged.
/// [`bounding_box`] skips such points entirely.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub left: f64,   // west longitude (degrees)
    pub top: f64,    // north latitude (degrees)
    pub right: f64,  // east longitude (degrees)
    pub bottom: f64, // south latitude (degrees)
}

impl BoundingBox {
    /// Create a bounding box from a slice of points
    ///
    /// Returns `None` if the slice is empty.
    pub fn from_points(points: &[GeoPoint]) -> Option<Self> {
        let (first, rest) = points.split_first()?;

        let mut bbox = Self::from(*first);
        for &point in rest {
            bbox.extend(point);
        }
        Some(bbox)
    }

    /// Extend bounding box to include a point
    ///
    /// Grows the bounding box if necessary to encompass the given point.
    /// If the point is already inside the bbox, no change is made. A `NaN`
    /// coordinate leaves the corresponding bounds unchanged.
    pub fn extend(&mut self, point: GeoPoint) {
        self.left = self.left.min(point.lon);
        self.right = self.right.max(point.lon);
        self.top = self.top.max(point.lat);
        self.bottom = self.bottom.min(point.lat);
    }

    /// Merge another bounding box into this one
    ///
    /// Grows the bounding box if necessary to encompass the other bounding box.
    /// If the other bbox is already contained, no change is made.
    pub fn merge(&mut self, other: BoundingBox) {
        self.left = self.left.min(other.left);
        self.right = self.right.max(other.right);
        self.top = self.top.max(other.top);
        self.bottom = self.bottom.min(other.bottom);
    }

    /// Bounds as `(min_lon, max_lon, min_lat, max_lat)`
    pub fn to_tuple(&self) -> (f64, f64, f64, f64) {
        (self.left, self.right, self.bottom, self.top)
    }
}

impl From<GeoPoint> for BoundingBox {
    fn from(point: GeoPoint) -> Self {
        Self {
            left: point.lon,
            top: point.lat,
            right: point.lon,
            bottom: point.lat,
        }
    }
}

/// Minimum bounding box around a collection of points
///
/// Accepts anything yielding `GeoPoint` or `Option<GeoPoint>`, so the output
/// of repeated [`intersect`](crate::intersect) calls can be passed directly.
/// `None` entries and points with a `NaN` coordinate are skipped.
///
/// # Returns
///
/// The bounds as `(min_lon, max_lon, min_lat, max_lat)` in degrees, or
/// [`Error::EmptyInput`] if no points remain after skipping.
/// See [`BoundingBox`] for the anti-meridian limitation.
pub fn bounding_box<I>(points: I) -> Result<(f64, f64, f64, f64)>
where
    I: IntoIterator,
    I::Item: Into<Option<GeoPoint>>,
{
    let mut bbox: Option<BoundingBox> = None;
    let mut skipped = 0usize;

    for point in points {
        let Some(point) = point.into() else {
            skipped += 1;
            continue;
        };
        if point.lat.is_nan() || point.lon.is_nan() {
            debug!("Skipping point with NaN coordinate {point} in bounding box");
            skipped += 1;
            continue;
        }

        match bbox.as_mut() {
            Some(bbox) => bbox.extend(point),
            None => bbox = Some(BoundingBox::from(point)),
        }
    }

    if skipped > 0 {
        debug!("Skipped {skipped} missing or NaN points while computing bounding box");
    }

    bbox.map(|bbox| bbox.to_tuple()).ok_or(Error::EmptyInput)
}
