use floem_colour_search::math::{hex_to_rgb, rgb_to_hex, rgb_to_hsl};
use floem_colour_search::search::search_exhaustive;
use floem_colour_search::{
    convert_to_hex, is_valid_color, parse_catalog, search, ClusterIndex, ColorEntry, ColourSearcher,
    Hsl, Rgb,
};
use pretty_assertions::assert_eq;

const CATALOG: &str = include_str!("../demos/colors.json");

fn catalog() -> Vec<ColorEntry> {
    parse_catalog(CATALOG).unwrap()
}

#[test]
fn test_documented_conversions() {
    assert_eq!(hex_to_rgb("f00"), hex_to_rgb("FF0000"));
    assert_eq!(hex_to_rgb("f00"), Rgb::new(255, 0, 0));
    assert_eq!(rgb_to_hsl(Rgb::new(255, 0, 0)), Hsl::new(0, 100, 50));
    assert_eq!(rgb_to_hsl(Rgb::new(0, 0, 0)), Hsl::new(0, 0, 0));
    assert_eq!(rgb_to_hsl(Rgb::new(255, 255, 255)), Hsl::new(0, 0, 100));
}

#[test]
fn test_hex_round_trip_is_case_normalized() {
    for hex in ["#abcdef", "#ABCDEF", "#00ff7f", "#000000", "#FFFFFF", "#1e90FF"] {
        let rgb = hex_to_rgb(hex);
        let back = rgb_to_hex((f64::from(rgb.r), f64::from(rgb.g), f64::from(rgb.b)));
        assert_eq!(back, hex[1..].to_uppercase());
    }
}

#[test]
fn test_rgb_round_trip_through_hex() {
    for r in (0..=255u8).step_by(5) {
        for g in (0..=255u8).step_by(17) {
            for b in [0u8, 1, 127, 128, 254, 255] {
                let rgb = Rgb::new(r, g, b);
                assert_eq!(hex_to_rgb(&rgb.to_hex()), rgb);
            }
        }
    }
}

#[test]
fn test_documented_validation() {
    assert!(is_valid_color("#AABBCC"));
    assert!(is_valid_color("rgb(10, 20, 30)"));
    assert!(!is_valid_color("rgb(10,20)"));
    assert!(!is_valid_color("blue"));
    assert!(convert_to_hex("rgb(256,0,0)").is_err());
    assert_eq!(convert_to_hex("rgb(255,0,0)").unwrap(), "#FF0000");
}

#[test]
fn test_primaries_land_in_their_clusters() {
    let index = ClusterIndex::build(&[
        ColorEntry::new("pure red", "#FF0000"),
        ColorEntry::new("pure blue", "#0000FF"),
    ]);
    let red = index.nearest_cluster(Rgb::new(255, 0, 0)).unwrap();
    assert_eq!(red.name, "red");
    assert_eq!(red.members[0].name, "pure red");
    let blue = index.nearest_cluster(Rgb::new(0, 0, 255)).unwrap();
    assert_eq!(blue.name, "blue");
    assert_eq!(blue.members[0].name, "pure blue");

    let results = search(&index, "#FE0100");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].entry.name, "pure red");
    assert!((results[0].distance - 2f64.sqrt()).abs() < 1e-12);
}

#[test]
fn test_every_entry_has_exactly_one_cluster() {
    let catalog = catalog();
    let index = ClusterIndex::build(&catalog);
    let total: usize = index.clusters().iter().map(|c| c.members.len()).sum();
    assert_eq!(total, catalog.len());

    for entry in &catalog {
        let homes = index
            .clusters()
            .iter()
            .filter(|c| c.members.contains(entry))
            .count();
        assert_eq!(homes, 1, "{} should be in one cluster", entry.name);
    }
}

#[test]
fn test_members_are_sorted_by_hex() {
    let index = ClusterIndex::build(&catalog());
    for cluster in index.clusters() {
        assert!(cluster.members.windows(2).all(|w| w[0].hex <= w[1].hex));
    }
}

#[test]
fn test_build_is_deterministic() {
    let catalog = catalog();
    assert_eq!(ClusterIndex::build(&catalog), ClusterIndex::build(&catalog));
}

#[test]
fn test_search_results_come_from_one_cluster() {
    let index = ClusterIndex::build(&catalog());
    let results = search(&index, "#FF6040");
    let cluster = index.nearest_cluster(hex_to_rgb("#FF6040")).unwrap();

    assert_eq!(results.len(), cluster.members.len());
    assert!(results.windows(2).all(|w| w[0].distance <= w[1].distance));
    assert!(results.iter().all(|r| cluster.members.contains(r.entry)));
    assert_eq!(results[0].entry.name, "tomato");
}

#[test]
fn test_exhaustive_search_ranks_whole_catalog() {
    let catalog = catalog();
    let index = ClusterIndex::build(&catalog);
    let results = search_exhaustive(&index, Rgb::new(250, 250, 250));
    assert_eq!(results.len(), catalog.len());
    assert_eq!(results[0].entry.name, "white");
}

#[test]
fn test_session_submit_flow() {
    let mut searcher = ColourSearcher::new(catalog());

    let shown = searcher.submit("hsl(240, 100, 50)").unwrap();
    assert_eq!(shown[0].name, "blue");
    assert_eq!(searcher.last_query(), Some("#0000FF"));

    assert!(searcher.submit("rgb(999,0,0)").is_err());
    assert!(searcher.is_invalid());
    assert_eq!(searcher.displayed()[0].name, "blue");
}
