//! Integration tests against the geometry engine this codec sits next to.
//!
//! geozero produces the payload bytes (the geometry-object layer's job) and
//! re-reads this codec's output, so header rewrites are cross-checked against
//! an independent WKB/EWKB implementation.

use geo::{Geometry, Point};
use geozero::wkb::Ewkb;
use geozero::wkt::Wkt;
use geozero::{CoordDimensions, ToGeo, ToWkb};

use geowire_core::convert::{ewkb_bytes_to_wkb, wkb_bytes_to_ewkb};
use geowire_core::ewkb::{decode_ewkb, extract_srid, set_srid};
use geowire_core::geom_type::{
    WKB_GEOMETRYCOLLECTION, WKB_LINESTRING, WKB_MULTIPOLYGON, WKB_POINT, WKB_POLYGON,
};
use geowire_core::wkb::decode_wkb;
use geowire_core::ByteOrder;

fn geometry_from_wkt(wkt: &str) -> Geometry<f64> {
    Wkt(wkt.as_bytes()).to_geo().expect("valid WKT")
}

fn iso_wkb(geom: &Geometry<f64>) -> Vec<u8> {
    geom.to_wkb(CoordDimensions::xy()).expect("WKB encoding")
}

#[test]
fn decodes_geozero_produced_wkb() {
    let wkb = iso_wkb(&Geometry::Point(Point::new(1.0, 2.0)));

    let record = decode_wkb(&wkb).unwrap();
    assert_eq!(record.byte_order, ByteOrder::LittleEndian);
    assert_eq!(record.geom_type, WKB_POINT);
    assert!(!record.has_z);
    assert_eq!(record.payload.len(), 16);
}

#[test]
fn geom_type_codes_agree_with_geozero() {
    let cases = [
        ("POINT(1 2)", WKB_POINT),
        ("LINESTRING(0 0,1 1,2 2)", WKB_LINESTRING),
        ("POLYGON((0 0,4 0,4 4,0 4,0 0))", WKB_POLYGON),
        (
            "MULTIPOLYGON(((0 0,1 0,1 1,0 0)),((5 5,6 5,6 6,5 5)))",
            WKB_MULTIPOLYGON,
        ),
        (
            "GEOMETRYCOLLECTION(POINT(1 2),LINESTRING(0 0,1 1))",
            WKB_GEOMETRYCOLLECTION,
        ),
    ];

    for (wkt, expected) in cases {
        let wkb = iso_wkb(&geometry_from_wkt(wkt));
        let record = decode_wkb(&wkb).unwrap();
        assert_eq!(record.geom_type, expected, "type code for {wkt}");
    }
}

#[test]
fn converted_ewkb_reads_back_through_geozero() {
    for wkt in [
        "POINT(1 2)",
        "LINESTRING(0 0,1 1,2 2)",
        "POLYGON((0 0,4 0,4 4,0 4,0 0))",
        "MULTIPOLYGON(((0 0,1 0,1 1,0 0)))",
    ] {
        let geom = geometry_from_wkt(wkt);
        let ewkb = wkb_bytes_to_ewkb(&iso_wkb(&geom), 4326).unwrap();

        assert_eq!(extract_srid(&ewkb), Some(4326), "SRID for {wkt}");
        let reread = Ewkb(ewkb.as_slice()).to_geo().expect("geozero re-read");
        assert_eq!(reread, geom, "payload intact for {wkt}");
    }
}

#[test]
fn geozero_produced_ewkb_decodes_and_strips_back_to_wkb() {
    let geom = geometry_from_wkt("LINESTRING(0 0,1 1,2 2)");
    let ewkb = geom
        .to_ewkb(CoordDimensions::xy(), Some(3857))
        .expect("EWKB encoding");

    let record = decode_ewkb(&ewkb).unwrap();
    assert_eq!(record.geom_type, WKB_LINESTRING);
    assert_eq!(record.srid, Some(3857));
    assert!(!record.has_z);
    assert!(!record.has_m);

    // Stripping the SRID must reproduce geozero's own ISO WKB output.
    let wkb = ewkb_bytes_to_wkb(&ewkb).unwrap();
    assert_eq!(wkb, iso_wkb(&geom));
}

#[test]
fn set_srid_keeps_blob_readable_by_geozero() {
    let geom = geometry_from_wkt("POLYGON((0 0,4 0,4 4,0 4,0 0))");
    let ewkb = geom
        .to_ewkb(CoordDimensions::xy(), Some(4326))
        .expect("EWKB encoding");

    let updated = set_srid(&ewkb, Some(3857)).unwrap();
    assert_eq!(extract_srid(&updated), Some(3857));

    let reread = Ewkb(updated.as_slice()).to_geo().expect("geozero re-read");
    assert_eq!(reread, geom);
}

#[test]
fn srid_zero_sentinel_drops_field_but_keeps_payload() {
    let geom = geometry_from_wkt("POINT(7 8)");
    let ewkb = wkb_bytes_to_ewkb(&iso_wkb(&geom), 0).unwrap();

    assert_eq!(extract_srid(&ewkb), None);
    assert_eq!(ewkb, iso_wkb(&geom), "zero SRID leaves the record as ISO WKB");
}
