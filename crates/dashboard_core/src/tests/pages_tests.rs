use super::*;
use crate::sample::DailySeries;

#[test]
fn every_page_renders() {
    let registry = ViewRegistry::default();
    for page in PageId::ALL {
        let element = registry.render(page).expect("render");
        assert!(!element.text_content().is_empty(), "{page} has no text");
    }
}

#[test]
fn charts_page_is_deterministic_for_a_seed() {
    let registry = ViewRegistry::new(7);
    let first = registry.render(PageId::Charts).expect("first");
    let second = registry.render(PageId::Charts).expect("second");
    assert_eq!(first, second);

    let other = ViewRegistry::new(8).render(PageId::Charts).expect("other");
    assert_ne!(first, other);
}

#[test]
fn charts_page_draws_line_bar_and_pie() {
    let element = ViewRegistry::default()
        .render(PageId::Charts)
        .expect("render");
    let graphs = element.graphs();
    assert_eq!(graphs.len(), 3);

    let line = graphs[0];
    assert_eq!(line["data"][0]["type"], "scatter");
    assert_eq!(line["data"][0]["mode"], "lines+markers");
    assert_eq!(line["data"][0]["y"].as_array().expect("y").len(), 30);
    assert_eq!(line["data"][0]["x"][0], "2024-01-01");
    assert_eq!(line["layout"]["hovermode"], "x unified");

    let bar = graphs[1];
    assert_eq!(bar["data"][0]["type"], "bar");
    assert_eq!(bar["data"][0]["x"].as_array().expect("x").len(), 10);
    assert_eq!(bar["data"][0]["x"][0], "2024-01-21");
    assert_eq!(bar["data"][0]["marker"]["colorscale"], "Viridis");
    assert_eq!(bar["data"][0]["marker"]["color"], bar["data"][0]["y"]);

    let pie = graphs[2];
    assert_eq!(pie["data"][0]["type"], "pie");
    assert_eq!(pie["data"][0]["hole"], 0.4);
    assert_eq!(
        pie["data"][0]["values"],
        serde_json::json!([35, 25, 20, 15, 5])
    );
}

#[test]
fn charts_line_matches_generated_series() {
    let series = DailySeries::generate(DEFAULT_SEED, series_start(), SERIES_DAYS);
    let element = ViewRegistry::default()
        .render(PageId::Charts)
        .expect("render");
    let expected: Vec<serde_json::Value> = series
        .rows()
        .iter()
        .map(|row| row.sales.into())
        .collect();
    assert_eq!(
        element.graphs()[0]["data"][0]["y"],
        serde_json::Value::Array(expected)
    );
}

#[test]
fn empty_series_fails_instead_of_drawing_blank_charts() {
    let empty = DailySeries::generate(DEFAULT_SEED, series_start(), 0);
    let err = charts_page(&empty).expect_err("should fail");
    assert!(matches!(
        err,
        DashboardError::RenderFailure { page: PageId::Charts, .. }
    ));
}

#[test]
fn data_page_reports_exact_totals() {
    let element = ViewRegistry::default().render(PageId::Data).expect("render");
    let summary = element.find_by_id("data-summary").expect("summary panel");
    let text = summary.text_content();
    assert!(text.contains("Total sales: 99,000 CNY"), "{text}");
    assert!(text.contains("Total inventory: 990 units"), "{text}");
    assert!(text.contains("Products: 5"), "{text}");
}

#[test]
fn data_page_table_has_alternating_row_fill() {
    let element = ViewRegistry::default().render(PageId::Data).expect("render");
    let table = element.graphs()[0];
    assert_eq!(table["data"][0]["type"], "table");
    assert_eq!(
        table["data"][0]["cells"]["fill"]["color"],
        serde_json::json!([["#ecf0f1", "white", "#ecf0f1", "white", "#ecf0f1"]])
    );
    assert_eq!(
        table["data"][0]["header"]["values"],
        serde_json::json!(["Product", "Sales", "Inventory", "Status"])
    );
    assert_eq!(table["layout"]["height"], 400);
}

#[test]
fn ragged_table_fails_data_page() {
    let mut table = ProductTable::sample();
    table.status.pop();
    assert!(data_page(&table).is_err());
}

#[test]
fn navbar_highlights_only_the_selected_item() {
    let bar = navbar(&HighlightVector::for_page(PageId::Charts));
    for affordance in Affordance::ALL {
        let item = bar.find_by_id(affordance.element_id()).expect("item");
        let active = item.style.get("backgroundColor") == Some("#34495e");
        assert_eq!(active, affordance.page() == PageId::Charts);
        assert_eq!(item.text_content(), affordance.label());
    }
    let html = bar.to_html();
    assert!(html.contains("action=\"/nav/nav-about\""));
}

#[test]
fn active_style_extends_inactive_style() {
    let inactive = nav_link_style();
    let active = nav_link_active_style();
    assert_eq!(active.len(), inactive.len() + 1);
    assert_eq!(active.get("color"), Some("white"));
    assert_eq!(active.get("backgroundColor"), Some("#34495e"));
    assert_eq!(inactive.get("backgroundColor"), None);
}
