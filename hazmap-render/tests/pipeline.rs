//! End-to-end render pass tests.
//!
//! These exercise both geometry paths against small inline payloads, with
//! coordinates in EPSG:32632 around the Bolzano area so the reprojected
//! output can be checked against the domain's geographic envelope.

use hazmap_bindings::ResultSet;
use hazmap_render::{PipelineConfig, RenderPipeline, Rgba, NEUTRAL_FILL};
use hazmap_spatial::{GeometryTable, GeometryTableEntry};

const UTM_SQUARE: &str =
    "POLYGON((680000 5150000, 681000 5150000, 681000 5151000, 680000 5151000, 680000 5150000))";

fn pipeline() -> RenderPipeline {
    RenderPipeline::new(PipelineConfig::default()).unwrap()
}

fn direct_results(rows: &[(&str, Option<&str>, Option<&str>)]) -> ResultSet {
    // (name, pct, wkt) triples; None omits the binding like an unbound OPTIONAL.
    let bindings: Vec<serde_json::Value> = rows
        .iter()
        .enumerate()
        .map(|(i, (name, pct, wkt))| {
            let mut row = serde_json::json!({
                "municipality": { "type": "uri", "value": format!("http://hazard-ontology.org/Municipality/{i}") },
                "name_it": { "type": "literal", "xml:lang": "it", "value": name }
            });
            if let Some(pct) = pct {
                row["hazardPct"] = serde_json::json!({ "type": "literal", "value": pct });
            }
            if let Some(wkt) = wkt {
                row["wkt"] = serde_json::json!({ "type": "literal", "value": wkt });
            }
            row
        })
        .collect();

    let payload = serde_json::json!({
        "head": { "vars": ["municipality", "name_it", "hazardPct", "wkt"] },
        "results": { "bindings": bindings }
    });
    ResultSet::from_json(&payload.to_string()).unwrap()
}

fn joined_results(rows: &[(&str, Option<&str>)]) -> ResultSet {
    let bindings: Vec<serde_json::Value> = rows
        .iter()
        .enumerate()
        .map(|(i, (name, pct))| {
            let mut row = serde_json::json!({
                "municipality": { "type": "uri", "value": format!("http://hazard-ontology.org/Municipality/{i}") },
                "name_it": { "type": "literal", "xml:lang": "it", "value": name }
            });
            if let Some(pct) = pct {
                row["hazardPct"] = serde_json::json!({ "type": "literal", "value": pct });
            }
            row
        })
        .collect();

    let payload = serde_json::json!({
        "head": { "vars": ["municipality", "name_it", "hazardPct"] },
        "results": { "bindings": bindings }
    });
    ResultSet::from_json(&payload.to_string()).unwrap()
}

fn entry(name: &str, wkt: Option<&str>) -> GeometryTableEntry {
    GeometryTableEntry {
        name: name.to_string(),
        wkt: wkt.map(String::from),
    }
}

#[test]
fn direct_path_renders_a_full_feature() {
    let results = direct_results(&[("Bolzano", Some("42.5"), Some(UTM_SQUARE))]);
    let pass = pipeline().render_direct(&results).unwrap();

    assert_eq!(pass.features.len(), 1);
    assert_eq!(pass.stats.features_rendered, 1);

    let feature = &pass.features[0];
    assert_eq!(feature.name, "Bolzano");
    assert_eq!(feature.hazard_pct, Some(42.5));
    assert_eq!(feature.fill_color, Rgba(255, 148, 148, 120));

    // One exterior ring, all five points reprojected into the domain's
    // geographic envelope in (lon, lat) order.
    assert_eq!(feature.rings.len(), 1);
    assert_eq!(feature.rings[0].len(), 5);
    for &(lon, lat) in &feature.rings[0] {
        assert!((10.5..12.5).contains(&lon), "lon out of envelope: {lon}");
        assert!((46.0..47.2).contains(&lat), "lat out of envelope: {lat}");
    }
    // The ring stays closed after reprojection.
    assert_eq!(feature.rings[0][0], feature.rings[0][4]);
}

#[test]
fn absent_percentage_gets_the_neutral_fill() {
    let results = direct_results(&[("Merano", None, Some(UTM_SQUARE))]);
    let pass = pipeline().render_direct(&results).unwrap();

    assert_eq!(pass.features.len(), 1);
    assert_eq!(pass.features[0].fill_color, NEUTRAL_FILL);
    assert_eq!(pass.features[0].hazard_pct, None);
}

#[test]
fn non_numeric_percentage_gets_the_neutral_fill() {
    let results = direct_results(&[("Merano", Some("not-a-number"), Some(UTM_SQUARE))]);
    let pass = pipeline().render_direct(&results).unwrap();
    assert_eq!(pass.features[0].fill_color, NEUTRAL_FILL);
}

#[test]
fn unrenderable_rows_are_dropped_not_fatal() {
    let results = direct_results(&[
        ("Bolzano", Some("10"), Some(UTM_SQUARE)),
        ("Merano", Some("20"), Some("POLYGON((broken")),
        ("Bressanone", Some("30"), Some(UTM_SQUARE)),
    ]);
    let pass = pipeline().render_direct(&results).unwrap();

    // Exactly the malformed row is missing from the output.
    assert_eq!(pass.features.len(), 2);
    assert_eq!(pass.stats.rows_processed, 3);
    assert_eq!(pass.stats.skipped_invalid_geometry, 1);
    assert_eq!(
        pass.features.iter().map(|f| f.name.as_str()).collect::<Vec<_>>(),
        vec!["Bolzano", "Bressanone"]
    );
}

#[test]
fn point_geometry_is_dropped() {
    let results = direct_results(&[("Bolzano", Some("10"), Some("POINT(680000 5150000)"))]);
    let pass = pipeline().render_direct(&results).unwrap();
    assert!(pass.features.is_empty());
    assert_eq!(pass.stats.skipped_invalid_geometry, 1);
}

#[test]
fn joined_path_resolves_geometry_by_name() {
    let results = joined_results(&[("Bolzano", Some("42.5")), ("Merano", Some("7"))]);
    let table = GeometryTable::from_entries(vec![
        entry("Bolzano", Some(UTM_SQUARE)),
        entry("Merano", Some(UTM_SQUARE)),
    ]);
    let pass = pipeline().render_joined(&results, &table).unwrap();

    assert_eq!(pass.features.len(), 2);
    assert_eq!(pass.features[0].name, "Bolzano");
    assert_eq!(pass.features[0].fill_color, Rgba(255, 148, 148, 120));
}

#[test]
fn unmatched_join_rows_are_dropped_and_counted() {
    let results = joined_results(&[("Bolzano", Some("42.5")), ("Vipiteno", Some("7"))]);
    let table = GeometryTable::from_entries(vec![entry("Bolzano", Some(UTM_SQUARE))]);
    let pass = pipeline().render_joined(&results, &table).unwrap();

    assert_eq!(pass.features.len(), 1);
    assert_eq!(pass.stats.skipped_missing_geometry, 1);
}

#[test]
fn table_entry_without_wkt_counts_as_missing() {
    let results = joined_results(&[("Merano", Some("7"))]);
    let table = GeometryTable::from_entries(vec![entry("Merano", None)]);
    let pass = pipeline().render_joined(&results, &table).unwrap();

    assert!(pass.features.is_empty());
    assert_eq!(pass.stats.skipped_missing_geometry, 1);
}

#[test]
fn duplicate_table_names_use_the_first_occurrence() {
    // First occurrence is a 4-point triangle, second a 5-point square.
    let triangle = "POLYGON((680000 5150000, 681000 5150000, 681000 5151000, 680000 5150000))";
    let results = joined_results(&[("Laives", Some("10"))]);
    let table = GeometryTable::from_entries(vec![
        entry("Laives", Some(triangle)),
        entry("Laives", Some(UTM_SQUARE)),
    ]);
    let pass = pipeline().render_joined(&results, &table).unwrap();

    assert_eq!(pass.features.len(), 1);
    assert_eq!(pass.features[0].rings[0].len(), 4);
}

#[test]
fn multipolygon_renders_one_ring_per_member() {
    let multi = "MULTIPOLYGON(((680000 5150000, 681000 5150000, 681000 5151000, 680000 5150000)), \
                 ((685000 5150000, 686000 5150000, 686000 5151000, 685000 5150000)))";
    let results = direct_results(&[("Bolzano", Some("10"), Some(multi))]);
    let pass = pipeline().render_direct(&results).unwrap();

    assert_eq!(pass.features.len(), 1);
    assert_eq!(pass.features[0].rings.len(), 2);
}
