// Flow-map encoding: per-supplier TIV totals mapped to arc widths and
// colors for an arc-layer renderer (deck.gl style). The emitted document is
// consumed by the browser shell as-is.
use crate::types::TradeRecord;
use crate::util::format_number;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapStyle {
    Light,
    Dark,
}

impl MapStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            MapStyle::Light => "light",
            MapStyle::Dark => "dark",
        }
    }

    /// Parse a style name, defaulting to the light theme.
    pub fn from_name(s: &str) -> Self {
        match s.trim() {
            "dark" => MapStyle::Dark,
            _ => MapStyle::Light,
        }
    }
}

/// Tunable visual parameters of the flow map. Defaults reproduce the
/// published dashboard: arcs run from each supplier capital to Kyiv with
/// widths on a gamma-corrected log scale and colors fading from royal blue
/// to teal.
#[derive(Debug, Clone)]
pub struct FlowMapConfig {
    pub target_lat: f64,
    pub target_lon: f64,
    pub base_color: [u8; 3],
    pub high_color: [u8; 3],
    pub width_min: f64,
    pub width_max: f64,
    pub gamma: f64,
    pub style: MapStyle,
}

impl Default for FlowMapConfig {
    fn default() -> Self {
        Self {
            target_lat: 50.4501,
            target_lon: 30.5234,
            base_color: [65, 105, 225], // royal blue
            high_color: [0, 128, 128],  // teal
            width_min: 0.5,
            width_max: 10.0,
            gamma: 3.0,
            style: MapStyle::Light,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FlowArc {
    pub supplier: String,
    pub capital: String,
    pub tiv: f64,
    pub tiv_display: String,
    pub source_lon: f64,
    pub source_lat: f64,
    pub target_lon: f64,
    pub target_lat: f64,
    pub width: f64,
    pub color: [u8; 3],
    pub height: f64,
    pub tilt: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MapMarker {
    pub label: String,
    pub capital: String,
    pub lon: f64,
    pub lat: f64,
    pub radius: f64,
    pub fill_color: [u8; 4],
}

#[derive(Debug, Clone, Serialize)]
pub struct ViewState {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: f64,
    pub pitch: f64,
    pub bearing: f64,
}

/// Complete layer/marker description handed to the map renderer.
#[derive(Debug, Clone, Serialize)]
pub struct FlowMap {
    pub map_provider: String,
    pub map_style: String,
    pub view_state: ViewState,
    pub arcs: Vec<FlowArc>,
    pub capital_markers: Vec<MapMarker>,
    pub destination_marker: MapMarker,
}

// Arc curvature and marker styling are visual constants, not data-driven.
const ARC_HEIGHT: f64 = 0.65;
const ARC_TILT: f64 = 10.0;
const CAPITAL_RADIUS: f64 = 50_000.0;
const CAPITAL_FILL: [u8; 4] = [112, 128, 144, 192]; // translucent slate grey
const DESTINATION_RADIUS: f64 = 100_000.0;
const DESTINATION_FILL: [u8; 4] = [255, 69, 0, 192];

struct SupplierTotal {
    supplier: String,
    capital: String,
    lat: f64,
    lon: f64,
    tiv: f64,
}

/// Sum TIV per supplier, carrying capital and coordinates from the first
/// record seen for that supplier. Capitals are assumed constant within a
/// supplier; rows that disagree are an upstream data-quality issue and the
/// first value wins.
fn total_tiv_by_supplier(data: &[TradeRecord]) -> Vec<SupplierTotal> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut totals: Vec<SupplierTotal> = Vec::new();
    for r in data {
        match index.get(r.supplier.as_str()) {
            Some(&i) => totals[i].tiv += r.tiv,
            None => {
                index.insert(r.supplier.as_str(), totals.len());
                totals.push(SupplierTotal {
                    supplier: r.supplier.clone(),
                    capital: r.supplier_capital.clone(),
                    lat: r.capital_lat,
                    lon: r.capital_lon,
                    tiv: r.tiv,
                });
            }
        }
    }
    // Deterministic artifact order; the renderer itself is order-free.
    totals.sort_by(|a, b| a.supplier.cmp(&b.supplier));
    totals
}

/// Normalize `log_tiv` to [0, 1] against the finite min/max of the group.
/// A zero range (single supplier, all tied) or a non-finite log (zero TIV)
/// yields 0, never a NaN.
fn normalized_intensity(log_tiv: f64, min_log: f64, max_log: f64) -> f64 {
    let t = (log_tiv - min_log) / (max_log - min_log);
    if !t.is_finite() {
        return 0.0;
    }
    t.clamp(0.0, 1.0)
}

fn blend_channel(base: u8, high: u8, t: f64) -> u8 {
    (f64::from(base) + (f64::from(high) - f64::from(base)) * t).floor() as u8
}

fn blend_color(base: [u8; 3], high: [u8; 3], t: f64) -> [u8; 3] {
    [
        blend_channel(base[0], high[0], t),
        blend_channel(base[1], high[1], t),
        blend_channel(base[2], high[2], t),
    ]
}

/// Build the full arc + marker description for the supplied (already
/// filtered) record set. An empty set produces an empty arc collection; the
/// destination marker and view state are always present.
pub fn build_flow_map(data: &[TradeRecord], config: &FlowMapConfig) -> FlowMap {
    let totals = total_tiv_by_supplier(data);

    let logs: Vec<f64> = totals.iter().map(|s| s.tiv.log10()).collect();
    let mut min_log = f64::INFINITY;
    let mut max_log = f64::NEG_INFINITY;
    for &l in logs.iter().filter(|l| l.is_finite()) {
        min_log = min_log.min(l);
        max_log = max_log.max(l);
    }

    let mut arcs = Vec::with_capacity(totals.len());
    let mut capital_markers = Vec::with_capacity(totals.len());
    for (s, &log_tiv) in totals.iter().zip(logs.iter()) {
        let t = normalized_intensity(log_tiv, min_log, max_log);
        // Width gets the gamma correction; color interpolates on the raw
        // intensity.
        let width = config.width_min + (config.width_max - config.width_min) * t.powf(config.gamma);
        let color = blend_color(config.base_color, config.high_color, t);
        arcs.push(FlowArc {
            supplier: s.supplier.clone(),
            capital: s.capital.clone(),
            tiv: s.tiv,
            tiv_display: format_number(s.tiv, 2),
            source_lon: s.lon,
            source_lat: s.lat,
            target_lon: config.target_lon,
            target_lat: config.target_lat,
            width,
            color,
            height: ARC_HEIGHT,
            tilt: ARC_TILT,
        });
        capital_markers.push(MapMarker {
            label: s.supplier.clone(),
            capital: s.capital.clone(),
            lon: s.lon,
            lat: s.lat,
            radius: CAPITAL_RADIUS,
            fill_color: CAPITAL_FILL,
        });
    }

    FlowMap {
        map_provider: "carto".to_string(),
        map_style: config.style.as_str().to_string(),
        view_state: ViewState {
            latitude: 50.0,
            longitude: 15.0,
            zoom: 2.5,
            pitch: 35.0,
            bearing: 0.0,
        },
        arcs,
        capital_markers,
        destination_marker: MapMarker {
            label: "Ukraine".to_string(),
            capital: "Kyiv".to_string(),
            lon: config.target_lon,
            lat: config.target_lat,
            radius: DESTINATION_RADIUS,
            fill_color: DESTINATION_FILL,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(supplier: &str, tiv: f64) -> TradeRecord {
        TradeRecord {
            supplier: supplier.to_string(),
            delivery_year_start: 2022,
            delivery_year_end: 2022,
            weapon_designation: "NLAW".to_string(),
            weapon_category: "Missiles".to_string(),
            company: "Saab".to_string(),
            country_of_origin: "Sweden".to_string(),
            tiv,
            delivery_number: 1,
            supplier_capital: format!("{} City", supplier),
            capital_lat: 1.0,
            capital_lon: 2.0,
        }
    }

    #[test]
    fn single_supplier_gets_minimum_width_and_base_color() {
        let config = FlowMapConfig::default();
        let map = build_flow_map(&[record("Sweden", 123.0)], &config);
        assert_eq!(map.arcs.len(), 1);
        let arc = &map.arcs[0];
        assert!((arc.width - config.width_min).abs() < 1e-12);
        assert_eq!(arc.color, config.base_color);
    }

    #[test]
    fn width_is_monotonic_in_total_tiv() {
        let config = FlowMapConfig::default();
        let data = vec![
            record("A", 1.0),
            record("B", 50.0),
            record("C", 50.0),
            record("D", 4000.0),
        ];
        let map = build_flow_map(&data, &config);
        let width_of = |name: &str| {
            map.arcs
                .iter()
                .find(|a| a.supplier == name)
                .map(|a| a.width)
                .unwrap()
        };
        assert!(width_of("A") <= width_of("B"));
        assert!(width_of("B") <= width_of("D"));
        assert_eq!(width_of("B"), width_of("C"));
        assert!((width_of("A") - config.width_min).abs() < 1e-12);
        assert!((width_of("D") - config.width_max).abs() < 1e-12);
    }

    #[test]
    fn tiv_is_summed_across_a_suppliers_records() {
        let config = FlowMapConfig::default();
        let data = vec![record("A", 10.0), record("A", 30.0), record("B", 5.0)];
        let map = build_flow_map(&data, &config);
        let a = map.arcs.iter().find(|x| x.supplier == "A").unwrap();
        assert!((a.tiv - 40.0).abs() < f64::EPSILON);
        assert_eq!(a.tiv_display, "40.00");
    }

    #[test]
    fn zero_tiv_never_produces_non_finite_encodings() {
        let config = FlowMapConfig::default();
        let data = vec![record("A", 0.0), record("B", 100.0)];
        let map = build_flow_map(&data, &config);
        for arc in &map.arcs {
            assert!(arc.width.is_finite());
            assert!(arc.width >= config.width_min && arc.width <= config.width_max);
        }
        // The zero-TIV supplier sits at the bottom of the scale.
        let a = map.arcs.iter().find(|x| x.supplier == "A").unwrap();
        assert!((a.width - config.width_min).abs() < 1e-12);
        assert_eq!(a.color, config.base_color);
    }

    #[test]
    fn all_tied_suppliers_collapse_to_intensity_zero() {
        let config = FlowMapConfig::default();
        let data = vec![record("A", 7.0), record("B", 7.0)];
        let map = build_flow_map(&data, &config);
        for arc in &map.arcs {
            assert!((arc.width - config.width_min).abs() < 1e-12);
            assert_eq!(arc.color, config.base_color);
        }
    }

    #[test]
    fn color_channels_stay_within_the_configured_span() {
        let config = FlowMapConfig::default();
        let data = vec![record("A", 1.0), record("B", 20.0), record("C", 900.0)];
        let map = build_flow_map(&data, &config);
        for arc in &map.arcs {
            for i in 0..3 {
                let lo = config.base_color[i].min(config.high_color[i]);
                let hi = config.base_color[i].max(config.high_color[i]);
                assert!(arc.color[i] >= lo && arc.color[i] <= hi);
            }
        }
        let c = map.arcs.iter().find(|x| x.supplier == "C").unwrap();
        assert_eq!(c.color, config.high_color);
    }

    #[test]
    fn empty_input_still_emits_the_destination_marker() {
        let map = build_flow_map(&[], &FlowMapConfig::default());
        assert!(map.arcs.is_empty());
        assert!(map.capital_markers.is_empty());
        assert_eq!(map.destination_marker.capital, "Kyiv");
        assert!((map.destination_marker.lat - 50.4501).abs() < 1e-9);
    }

    #[test]
    fn capital_comes_from_the_first_record_of_a_supplier() {
        let config = FlowMapConfig::default();
        let mut first = record("A", 1.0);
        first.supplier_capital = "Old Capital".to_string();
        let mut second = record("A", 2.0);
        second.supplier_capital = "New Capital".to_string();
        let map = build_flow_map(&[first, second], &config);
        assert_eq!(map.arcs[0].capital, "Old Capital");
    }

    #[test]
    fn arcs_are_sorted_by_supplier() {
        let data = vec![record("C", 1.0), record("A", 2.0), record("B", 3.0)];
        let map = build_flow_map(&data, &FlowMapConfig::default());
        let names: Vec<&str> = map.arcs.iter().map(|a| a.supplier.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn style_names_round_trip_with_light_fallback() {
        assert_eq!(MapStyle::from_name("dark"), MapStyle::Dark);
        assert_eq!(MapStyle::from_name("light"), MapStyle::Light);
        assert_eq!(MapStyle::from_name("sepia"), MapStyle::Light);
        assert_eq!(MapStyle::Dark.as_str(), "dark");
    }
}
