// civic-client/tests/cascade.rs
// Cascading geographic selects against the in-memory transport

mod common;

use civic_client::{AdminApi, CascadingSelector};
use common::{MockHttpClient, json, status};
use serde_json::json;
use shared::hierarchy::{GeoLevel, GeoPath};

fn geography() -> MockHttpClient {
    MockHttpClient::new()
        .on(
            "GET",
            "countries/",
            json(json!([
                {"id": 1, "name": "India", "is_active": true},
                {"id": 2, "name": "Nowhere", "is_active": false}
            ])),
        )
        .on(
            "GET",
            "states/?country=1",
            json(json!([{"id": 10, "name": "Tamil Nadu", "is_active": true}])),
        )
        .on(
            "GET",
            "districts/?state=10",
            json(json!([{"id": 100, "name": "Chennai", "is_active": true}])),
        )
        .on(
            "GET",
            "cities/?district=100",
            json(json!({
                "count": 1,
                "next": null,
                "previous": null,
                "results": [{"id": 1000, "name": "Chennai City"}]
            })),
        )
        .on(
            "GET",
            "zones/?city=1000",
            json(json!([
                {"id": 5, "name": "North", "is_active": true, "is_deleted": false},
                {"id": 6, "name": "Retired", "is_active": true, "is_deleted": true}
            ])),
        )
        .on(
            "GET",
            "cities/?state=10",
            json(json!([{"id": 1000, "name": "Chennai City"}])),
        )
        .on(
            "GET",
            "wards/?zone=5",
            json(json!([{"id": 50, "name": "Ward 1"}])),
        )
}

async fn fully_selected(api: &AdminApi<MockHttpClient>) -> CascadingSelector {
    let mut selector = CascadingSelector::new(GeoLevel::Country, GeoLevel::Ward);
    selector.load_root(api).await;
    selector.select(api, GeoLevel::Country, Some(1)).await;
    selector.select(api, GeoLevel::State, Some(10)).await;
    selector.select(api, GeoLevel::District, Some(100)).await;
    selector.select(api, GeoLevel::City, Some(1000)).await;
    selector.select(api, GeoLevel::Zone, Some(5)).await;
    selector
}

#[tokio::test]
async fn test_root_options_exclude_inactive() {
    let api = AdminApi::new(geography());
    let mut selector = CascadingSelector::new(GeoLevel::Country, GeoLevel::City);
    selector.load_root(&api).await;

    let labels: Vec<&str> = selector
        .options(GeoLevel::Country)
        .iter()
        .map(|o| o.label.as_str())
        .collect();
    assert_eq!(labels, vec!["India"]);
    assert_eq!(api.http().paths("GET"), vec!["countries/"]);
}

#[tokio::test]
async fn test_select_issues_one_filtered_fetch() {
    let api = AdminApi::new(geography());
    let mut selector = CascadingSelector::new(GeoLevel::Country, GeoLevel::City);
    selector.load_root(&api).await;
    api.http().clear_calls();

    selector.select(&api, GeoLevel::Country, Some(1)).await;

    assert_eq!(api.http().paths("GET"), vec!["states/?country=1"]);
    assert_eq!(selector.selected(GeoLevel::Country), Some(1));
    assert_eq!(selector.options(GeoLevel::State).len(), 1);
}

#[tokio::test]
async fn test_changing_country_clears_descendants() {
    let api = AdminApi::new(geography());
    let mut selector = fully_selected(&api).await;
    assert_eq!(selector.selected(GeoLevel::Zone), Some(5));
    assert_eq!(selector.options(GeoLevel::Ward).len(), 1);

    api.http().clear_calls();
    selector.select(&api, GeoLevel::Country, Some(2)).await;

    for level in [
        GeoLevel::State,
        GeoLevel::District,
        GeoLevel::City,
        GeoLevel::Zone,
        GeoLevel::Ward,
    ] {
        assert_eq!(selector.selected(level), None, "{level} still selected");
    }
    // unknown country: fetch fails, state list stays empty
    assert!(selector.options(GeoLevel::State).is_empty());
    assert!(selector.options(GeoLevel::Ward).is_empty());
    assert_eq!(api.http().paths("GET"), vec!["states/?country=2"]);
}

#[tokio::test]
async fn test_clearing_a_selection_fetches_nothing() {
    let api = AdminApi::new(geography());
    let mut selector = fully_selected(&api).await;
    api.http().clear_calls();

    selector.select(&api, GeoLevel::City, None).await;

    assert!(api.http().calls().is_empty());
    assert_eq!(selector.selected(GeoLevel::District), Some(100));
    assert_eq!(selector.selected(GeoLevel::City), None);
    assert!(selector.options(GeoLevel::Zone).is_empty());
}

#[tokio::test]
async fn test_soft_deleted_zone_not_offered() {
    let api = AdminApi::new(geography());
    let selector = fully_selected(&api).await;
    let zones: Vec<i64> = selector
        .options(GeoLevel::Zone)
        .iter()
        .map(|o| o.value)
        .collect();
    assert_eq!(zones, vec![5]);
}

#[tokio::test]
async fn test_bottom_level_never_fetches_below() {
    let api = AdminApi::new(geography());
    let mut selector = CascadingSelector::new(GeoLevel::Country, GeoLevel::City);
    selector.load_root(&api).await;
    selector.select(&api, GeoLevel::Country, Some(1)).await;
    selector.select(&api, GeoLevel::State, Some(10)).await;
    selector.select(&api, GeoLevel::District, Some(100)).await;
    api.http().clear_calls();

    selector.select(&api, GeoLevel::City, Some(1000)).await;

    assert!(api.http().calls().is_empty());
    assert_eq!(selector.selected_label(GeoLevel::City), Some("Chennai City"));
}

#[tokio::test]
async fn test_failed_fetch_leaves_empty_list() {
    let http = geography();
    http.set("GET", "districts/?state=10", status(500, "boom"));
    let api = AdminApi::new(http);
    let mut selector = CascadingSelector::new(GeoLevel::Country, GeoLevel::City);
    selector.load_root(&api).await;
    selector.select(&api, GeoLevel::Country, Some(1)).await;
    selector.select(&api, GeoLevel::State, Some(10)).await;

    assert_eq!(selector.selected(GeoLevel::State), Some(10));
    assert!(selector.options(GeoLevel::District).is_empty());
}

#[tokio::test]
async fn test_preload_fills_every_level_with_member_values() {
    let api = AdminApi::new(geography());
    let stored = GeoPath {
        country: Some(1),
        state: Some(10),
        district: Some(100),
        city: Some(1000),
        zone: Some(5),
        ward: Some(50),
        ..GeoPath::default()
    };

    let mut selector = CascadingSelector::new(GeoLevel::Country, GeoLevel::Ward);
    selector.preload(&api, &stored).await;

    for level in selector.levels().collect::<Vec<_>>() {
        let id = selector.selected(level).expect("level selected");
        assert!(
            selector.options(level).iter().any(|o| o.value == id),
            "{level} value {id} not among its options"
        );
    }
    assert_eq!(selector.path(), stored);
    // sequential top-down chain
    assert_eq!(
        api.http().paths("GET"),
        vec![
            "countries/",
            "states/?country=1",
            "districts/?state=10",
            "cities/?district=100",
            "zones/?city=1000",
            "wards/?zone=5",
        ]
    );
}

#[tokio::test]
async fn test_preload_stops_at_stale_value() {
    let api = AdminApi::new(geography());
    let stored = GeoPath {
        country: Some(1),
        state: Some(10),
        district: Some(100),
        city: Some(1000),
        zone: Some(6),
        ..GeoPath::default()
    };

    let mut selector = CascadingSelector::new(GeoLevel::Country, GeoLevel::Zone);
    selector.preload(&api, &stored).await;

    assert_eq!(selector.selected(GeoLevel::City), Some(1000));
    // zone 6 is soft-deleted, so it is not applied
    assert_eq!(selector.selected(GeoLevel::Zone), None);
    assert_eq!(selector.options(GeoLevel::Zone).len(), 1);
}

#[tokio::test]
async fn test_preload_skips_empty_district() {
    let api = AdminApi::new(geography());
    // ward stored without a district
    let stored = GeoPath {
        country: Some(1),
        state: Some(10),
        city: Some(1000),
        zone: Some(5),
        ..GeoPath::default()
    };

    let mut selector = CascadingSelector::new(GeoLevel::Country, GeoLevel::Zone);
    selector.preload(&api, &stored).await;

    assert_eq!(selector.selected(GeoLevel::District), None);
    assert_eq!(selector.options(GeoLevel::District).len(), 1);
    assert_eq!(selector.selected_label(GeoLevel::City), Some("Chennai City"));
    assert_eq!(selector.selected(GeoLevel::Zone), Some(5));
    assert_eq!(selector.path(), stored);
    assert_eq!(
        api.http().paths("GET"),
        vec![
            "countries/",
            "states/?country=1",
            "districts/?state=10",
            "cities/?state=10",
            "zones/?city=1000",
        ]
    );
}

#[tokio::test]
async fn test_preload_stops_when_nothing_below_is_stored() {
    let api = AdminApi::new(geography());
    let stored = GeoPath {
        country: Some(1),
        ..GeoPath::default()
    };

    let mut selector = CascadingSelector::new(GeoLevel::Country, GeoLevel::Ward);
    selector.preload(&api, &stored).await;

    assert_eq!(selector.selected(GeoLevel::Country), Some(1));
    assert_eq!(selector.options(GeoLevel::State).len(), 1);
    assert_eq!(api.http().paths("GET"), vec!["countries/", "states/?country=1"]);
}
