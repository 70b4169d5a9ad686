//! EWKB (Extended Well-Known Binary) header codec.
//!
//! Wire format:
//!   [0x01|0x00]   - byte order marker (little-endian or big-endian)
//!   [u32]         - geometry type with flags (in the declared byte order)
//!                   Bit 31 (0x80000000): Z dimension
//!                   Bit 30 (0x40000000): M dimension
//!                   Bit 29 (0x20000000): SRID present
//!                   Bits 0-27: geometry type (1=Point, 2=LineString, ...)
//!   [u32]         - SRID (only when SRID flag set, in declared byte order)
//!   ...           - geometry payload, opaque to this codec

use crate::byte_order::ByteOrder;
use crate::error::{GeoWireError, Result};
use crate::geom_type::known_geom_type;

// ── EWKB flag constants ───────────────────────────────────────────────────────
pub const EWKB_Z_FLAG: u32 = 0x8000_0000;
pub const EWKB_M_FLAG: u32 = 0x4000_0000;
pub const EWKB_SRID_FLAG: u32 = 0x2000_0000;
pub const EWKB_TYPE_MASK: u32 = 0x0FFF_FFFF;

/// Decoded EWKB record: header fields plus the untouched payload.
///
/// Immutable value object, same lifecycle as [`crate::wkb::WkbRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EwkbRecord<'a> {
    /// Byte order governing every multi-byte field of this record.
    pub byte_order: ByteOrder,
    /// Base geometry type code (flag bits masked off).
    pub geom_type: u32,
    /// Whether the type word carried the Z flag.
    pub has_z: bool,
    /// Whether the type word carried the M flag.
    pub has_m: bool,
    /// SRID field, when the SRID flag was set. `Some(0)` and `None` are
    /// distinct states: the field may be present and zero on the wire.
    pub srid: Option<u32>,
    /// Geometry body following the header, never interpreted.
    pub payload: &'a [u8],
}

impl EwkbRecord<'_> {
    /// Byte offset where the payload starts (after header + optional SRID).
    pub fn data_offset(&self) -> usize {
        if self.srid.is_some() {
            9
        } else {
            5
        }
    }
}

/// Decode the EWKB header (5 or 9 bytes, per the SRID flag) and borrow the
/// remaining payload.
///
/// Validation order is fixed: buffer length, byte order marker, type word,
/// then the optional SRID field.
///
/// # Example
///
/// ```
/// use geowire_core::ewkb::{decode_ewkb, EWKB_SRID_FLAG};
/// use geowire_core::geom_type::WKB_POINT;
///
/// let mut buf = vec![0x01];
/// buf.extend_from_slice(&(WKB_POINT | EWKB_SRID_FLAG).to_le_bytes());
/// buf.extend_from_slice(&4326u32.to_le_bytes());
/// buf.extend_from_slice(&1.0f64.to_le_bytes());
/// buf.extend_from_slice(&2.0f64.to_le_bytes());
///
/// let record = decode_ewkb(&buf).unwrap();
/// assert_eq!(record.srid, Some(4326));
/// assert_eq!(record.data_offset(), 9);
/// ```
pub fn decode_ewkb(buf: &[u8]) -> Result<EwkbRecord<'_>> {
    if buf.len() < 5 {
        return Err(GeoWireError::TruncatedRecord {
            needed: 5,
            len: buf.len(),
        });
    }

    let byte_order = ByteOrder::from_marker(buf[0])?;
    let raw_type = byte_order.decode_u32([buf[1], buf[2], buf[3], buf[4]]);

    let has_z = raw_type & EWKB_Z_FLAG != 0;
    let has_m = raw_type & EWKB_M_FLAG != 0;
    let has_srid = raw_type & EWKB_SRID_FLAG != 0;
    let geom_type = raw_type & EWKB_TYPE_MASK;

    // Flags never affect the type check; the masked code must stand alone.
    if !known_geom_type(geom_type) {
        return Err(GeoWireError::UnknownGeometryType {
            code: geom_type,
            raw_type,
        });
    }

    let (srid, payload) = if has_srid {
        if buf.len() < 9 {
            return Err(GeoWireError::TruncatedRecord {
                needed: 9,
                len: buf.len(),
            });
        }
        let srid = byte_order.decode_u32([buf[5], buf[6], buf[7], buf[8]]);
        (Some(srid), &buf[9..])
    } else {
        (None, &buf[5..])
    };

    Ok(EwkbRecord {
        byte_order,
        geom_type,
        has_z,
        has_m,
        srid,
        payload,
    })
}

/// Encode a record back to EWKB bytes.
///
/// The SRID flag is set iff the record carries an SRID field; `Some(0)` still
/// writes the field. The payload is copied verbatim.
pub fn encode_ewkb(record: &EwkbRecord<'_>) -> Vec<u8> {
    let mut type_word = record.geom_type;
    if record.has_z {
        type_word |= EWKB_Z_FLAG;
    }
    if record.has_m {
        type_word |= EWKB_M_FLAG;
    }
    if record.srid.is_some() {
        type_word |= EWKB_SRID_FLAG;
    }

    let mut out = Vec::with_capacity(record.data_offset() + record.payload.len());
    out.push(record.byte_order.marker());
    out.extend_from_slice(&record.byte_order.encode_u32(type_word));
    if let Some(srid) = record.srid {
        out.extend_from_slice(&record.byte_order.encode_u32(srid));
    }
    out.extend_from_slice(record.payload);
    out
}

/// Extract only the SRID from an EWKB blob (cheap, header-only).
///
/// Returns `None` for malformed blobs as well as for records without an SRID
/// field.
///
/// # Example
///
/// ```
/// use geowire_core::ewkb::{encode_ewkb, extract_srid, EwkbRecord};
/// use geowire_core::byte_order::ByteOrder;
/// use geowire_core::geom_type::WKB_POINT;
///
/// let blob = encode_ewkb(&EwkbRecord {
///     byte_order: ByteOrder::LittleEndian,
///     geom_type: WKB_POINT,
///     has_z: false,
///     has_m: false,
///     srid: Some(4326),
///     payload: &[],
/// });
/// assert_eq!(extract_srid(&blob), Some(4326));
/// assert_eq!(extract_srid(&[]), None);
/// ```
pub fn extract_srid(blob: &[u8]) -> Option<u32> {
    decode_ewkb(blob).ok().and_then(|record| record.srid)
}

/// Rewrite the SRID field of an EWKB blob without touching the payload.
///
/// `Some(srid)` inserts or replaces the field, `None` strips it. The declared
/// byte order and every other header bit are preserved.
pub fn set_srid(blob: &[u8], srid: Option<u32>) -> Result<Vec<u8>> {
    let record = decode_ewkb(blob)?;
    Ok(encode_ewkb(&EwkbRecord { srid, ..record }))
}
