//! Geometry type codes shared by the WKB and EWKB headers.

use crate::ewkb::EWKB_TYPE_MASK;

// ── Core geometry type codes (ISO WKB) ────────────────────────────────────────
pub const WKB_POINT: u32 = 1;
pub const WKB_LINESTRING: u32 = 2;
pub const WKB_POLYGON: u32 = 3;
pub const WKB_MULTIPOINT: u32 = 4;
pub const WKB_MULTILINESTRING: u32 = 5;
pub const WKB_MULTIPOLYGON: u32 = 6;
pub const WKB_GEOMETRYCOLLECTION: u32 = 7;

// ── ISO SQL/MM extension codes ────────────────────────────────────────────────
pub const WKB_CIRCULARSTRING: u32 = 8;
pub const WKB_COMPOUNDCURVE: u32 = 9;
pub const WKB_CURVEPOLYGON: u32 = 10;
pub const WKB_MULTICURVE: u32 = 11;
pub const WKB_MULTISURFACE: u32 = 12;
pub const WKB_CURVE: u32 = 13;
pub const WKB_SURFACE: u32 = 14;
pub const WKB_POLYHEDRALSURFACE: u32 = 15;
pub const WKB_TIN: u32 = 16;
pub const WKB_TRIANGLE: u32 = 17;

/// Whether `code` is a recognized base geometry type code.
pub fn known_geom_type(code: u32) -> bool {
    (WKB_POINT..=WKB_TRIANGLE).contains(&code)
}

/// Return a human-readable geometry type name (PostGIS convention).
///
/// Accepts a raw EWKB type word as well as a base code; flag bits are masked
/// off before the lookup.
///
/// # Example
///
/// ```
/// use geowire_core::geom_type::{geom_type_name, WKB_POINT, WKB_POLYGON};
///
/// assert_eq!(geom_type_name(WKB_POINT), "ST_Point");
/// assert_eq!(geom_type_name(WKB_POLYGON), "ST_Polygon");
/// assert_eq!(geom_type_name(999), "ST_Unknown");
/// ```
pub fn geom_type_name(raw_type: u32) -> &'static str {
    match raw_type & EWKB_TYPE_MASK {
        WKB_POINT => "ST_Point",
        WKB_LINESTRING => "ST_LineString",
        WKB_POLYGON => "ST_Polygon",
        WKB_MULTIPOINT => "ST_MultiPoint",
        WKB_MULTILINESTRING => "ST_MultiLineString",
        WKB_MULTIPOLYGON => "ST_MultiPolygon",
        WKB_GEOMETRYCOLLECTION => "ST_GeometryCollection",
        WKB_CIRCULARSTRING => "ST_CircularString",
        WKB_COMPOUNDCURVE => "ST_CompoundCurve",
        WKB_CURVEPOLYGON => "ST_CurvePolygon",
        WKB_MULTICURVE => "ST_MultiCurve",
        WKB_MULTISURFACE => "ST_MultiSurface",
        WKB_CURVE => "ST_Curve",
        WKB_SURFACE => "ST_Surface",
        WKB_POLYHEDRALSURFACE => "ST_PolyhedralSurface",
        WKB_TIN => "ST_Tin",
        WKB_TRIANGLE => "ST_Triangle",
        _ => "ST_Unknown",
    }
}
