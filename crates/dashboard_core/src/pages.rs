use chrono::NaiveDate;
use shared::{
    domain::{Affordance, HighlightVector, PageId},
    error::DashboardError,
};
use tracing::debug;

use crate::{
    figure::{
        Bar, Fill, Figure, Font, Layout, Line, Marker, Pie, PieMarker, ScaleMarker, Scatter,
        Table, TableCells, TableHeader, Trace,
    },
    sample::{
        format_thousands, series_start, DailySeries, ProductTable, CATEGORY_BREAKDOWN,
        DEFAULT_SEED, SERIES_DAYS,
    },
    view::{div, graph, h1, h2, h3, p, ul, Element, Style, Tag},
};

pub const PAGE_CONTENT_ID: &str = "page-content";
const CARD_SHADOW: &str = "0 2px 8px rgba(0,0,0,0.1)";
const HEADING_COLOR: &str = "#2c3e50";
const ACCENT_BLUE: &str = "#3498db";

/// Maps a page to its display tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewRegistry {
    seed: u64,
    series_start: NaiveDate,
}

impl Default for ViewRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl ViewRegistry {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            series_start: series_start(),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn render(&self, page: PageId) -> Result<Element, DashboardError> {
        debug!(%page, seed = self.seed, "rendering page");
        match page {
            PageId::Home => Ok(home_page()),
            PageId::Charts => charts_page(&DailySeries::generate(
                self.seed,
                self.series_start,
                SERIES_DAYS,
            )),
            PageId::Data => data_page(&ProductTable::sample()),
            PageId::About => Ok(about_page()),
        }
    }
}

pub fn navbar_style() -> Style {
    Style::from_pairs(&[
        ("backgroundColor", HEADING_COLOR),
        ("padding", "15px 30px"),
        ("display", "flex"),
        ("justifyContent", "space-between"),
        ("alignItems", "center"),
        ("boxShadow", "0 2px 4px rgba(0,0,0,0.1)"),
    ])
}

pub fn nav_link_style() -> Style {
    Style::from_pairs(&[
        ("color", "white"),
        ("textDecoration", "none"),
        ("padding", "10px 20px"),
        ("margin", "0 5px"),
        ("borderRadius", "5px"),
        ("transition", "background-color 0.3s"),
        ("cursor", "pointer"),
        ("display", "inline-block"),
        ("border", "none"),
        ("background", "none"),
        ("font", "inherit"),
    ])
}

pub fn nav_link_active_style() -> Style {
    nav_link_style().merged(&Style::from_pairs(&[("backgroundColor", "#34495e")]))
}

pub fn content_style() -> Style {
    Style::from_pairs(&[
        ("padding", "30px"),
        ("backgroundColor", "#ecf0f1"),
        ("minHeight", "calc(100vh - 80px)"),
    ])
}

/// One style table per navigation item, in positional order.
pub fn nav_styles(highlight: &HighlightVector) -> [Style; 4] {
    Affordance::ALL.map(|affordance| {
        if highlight.is_active(affordance) {
            nav_link_active_style()
        } else {
            nav_link_style()
        }
    })
}

/// The navigation bar. Each item is a button posting its click to
/// `/nav/{element_id}`.
pub fn navbar(highlight: &HighlightVector) -> Element {
    let styles = nav_styles(highlight);
    let items = Affordance::ALL
        .into_iter()
        .zip(styles)
        .map(|(affordance, style)| {
            Element::new(Tag::Form)
                .attr("method", "post")
                .attr("action", format!("/nav/{}", affordance.element_id()))
                .child(
                    Element::new(Tag::Button)
                        .id(affordance.element_id())
                        .class("nav-link")
                        .attr("type", "submit")
                        .style(style)
                        .child(affordance.label()),
                )
        });

    div()
        .style(navbar_style())
        .child(
            div()
                .style(Style::from_pairs(&[("display", "flex"), ("alignItems", "center")]))
                .child(h2("Plotly Dashboard").style(Style::from_pairs(&[
                    ("color", "white"),
                    ("margin", "0"),
                    ("fontSize", "24px"),
                ]))),
        )
        .child(
            div()
                .style(Style::from_pairs(&[("display", "flex")]))
                .children(items),
        )
}

/// The full page: navbar above the content pane.
pub fn layout(content: Element, highlight: &HighlightVector) -> Element {
    div().id("app").child(navbar(highlight)).child(
        div()
            .id(PAGE_CONTENT_ID)
            .style(content_style())
            .child(content),
    )
}

fn card_style() -> Style {
    Style::from_pairs(&[
        ("backgroundColor", "white"),
        ("padding", "30px"),
        ("borderRadius", "10px"),
        ("boxShadow", CARD_SHADOW),
    ])
}

fn page_title(text: &str) -> Element {
    h1(text).style(Style::from_pairs(&[
        ("color", HEADING_COLOR),
        ("marginBottom", "30px"),
    ]))
}

fn feature_card(title: &str, color: &str, body: &str) -> Element {
    div()
        .style(card_style().with("margin", "10px"))
        .child(h3(title).style(Style::from_pairs(&[("color", color)])))
        .child(p(body))
}

pub fn home_page() -> Element {
    div()
        .child(
            h1("Welcome to the Plotly Demo").style(Style::from_pairs(&[
                ("textAlign", "center"),
                ("color", HEADING_COLOR),
                ("marginBottom", "30px"),
            ])),
        )
        .child(
            div()
                .style(Style::from_pairs(&[
                    ("display", "grid"),
                    ("gridTemplateColumns", "repeat(auto-fit, minmax(300px, 1fr))"),
                    ("gap", "20px"),
                    ("marginTop", "30px"),
                ]))
                .child(feature_card(
                    "Data Visualization",
                    ACCENT_BLUE,
                    "Interactive Plotly charts with zoom, pan and hover details.",
                ))
                .child(feature_card(
                    "Clean Interface",
                    "#e74c3c",
                    "A modern, responsive layout that adapts to any screen.",
                ))
                .child(feature_card(
                    "Fast",
                    "#2ecc71",
                    "Charts are drawn client-side by plotly.js for smooth interaction.",
                )),
        )
}

pub fn charts_page(series: &DailySeries) -> Result<Element, DashboardError> {
    if series.is_empty() {
        return Err(DashboardError::render(PageId::Charts, "sample series is empty"));
    }

    let rows = series.rows();
    let line = Figure::new(
        Trace::Scatter(Scatter {
            x: DailySeries::dates(rows),
            y: rows.iter().map(|row| row.sales).collect(),
            mode: "lines+markers",
            name: "Sales".into(),
            line: Line {
                color: ACCENT_BLUE,
                width: 3,
            },
            marker: Marker { size: 8 },
        }),
        Layout {
            hovermode: Some("x unified"),
            ..Layout::titled(format!("{}-Day Sales Trend", rows.len()))
                .axes("Date", "Sales")
                .white_background()
        },
    );

    let recent = series.tail(10);
    let recent_visits: Vec<u32> = recent.iter().map(|row| row.visits).collect();
    let bar = Figure::new(
        Trace::Bar(Bar {
            x: DailySeries::dates(recent),
            y: recent_visits.clone(),
            name: "Visits".into(),
            marker: ScaleMarker {
                color: recent_visits,
                colorscale: "Viridis",
                showscale: true,
            },
        }),
        Layout::titled(format!("Visits, Last {} Days", recent.len()))
            .axes("Date", "Visits")
            .white_background(),
    );

    let pie = Figure::new(
        Trace::Pie(Pie {
            labels: CATEGORY_BREAKDOWN.iter().map(|c| c.label).collect(),
            values: CATEGORY_BREAKDOWN.iter().map(|c| c.share).collect(),
            hole: 0.4,
            marker: PieMarker {
                colors: CATEGORY_BREAKDOWN.iter().map(|c| c.color).collect(),
            },
        }),
        Layout::titled("Sales by Category").white_background(),
    );

    let [line, bar, pie] = [line, bar, pie].map(|figure| figure.to_value());
    let encode = |result: serde_json::Result<serde_json::Value>| {
        result.map_err(|err| DashboardError::render(PageId::Charts, err.to_string()))
    };

    Ok(div().child(page_title("Charts")).child(
        div()
            .child(
                div()
                    .style(
                        card_style()
                            .with("padding", "20px")
                            .with("marginBottom", "20px"),
                    )
                    .child(graph(encode(line)?)),
            )
            .child(
                div()
                    .style(
                        card_style()
                            .with("padding", "20px")
                            .with("display", "flex")
                            .with("gap", "20px"),
                    )
                    .child(
                        div()
                            .style(Style::from_pairs(&[("flex", "1"), ("marginRight", "10px")]))
                            .child(graph(encode(bar)?)),
                    )
                    .child(
                        div()
                            .style(Style::from_pairs(&[("flex", "1"), ("marginLeft", "10px")]))
                            .child(graph(encode(pie)?)),
                    ),
            ),
    ))
}

fn product_table_figure(table: &ProductTable, rows: usize) -> Figure {
    let row_fill: Vec<&'static str> = (0..rows)
        .map(|index| if index % 2 == 0 { "#ecf0f1" } else { "white" })
        .collect();
    let values: Vec<Vec<serde_json::Value>> = vec![
        table.names.iter().map(|name| name.as_str().into()).collect(),
        table.sales.iter().map(|value| (*value).into()).collect(),
        table.inventory.iter().map(|value| (*value).into()).collect(),
        table.status.iter().map(|status| status.label().into()).collect(),
    ];

    Figure::new(
        Trace::Table(Table {
            header: TableHeader {
                values: ProductTable::COLUMNS.to_vec(),
                fill: Fill { color: ACCENT_BLUE },
                font: Font {
                    color: Some("white"),
                    size: 14,
                },
                align: "center",
                height: 40,
            },
            cells: TableCells {
                values,
                fill: Fill {
                    color: vec![row_fill],
                },
                align: "center",
                height: 35,
                font: Font {
                    color: None,
                    size: 13,
                },
            },
        }),
        Layout {
            height: Some(400),
            ..Layout::titled("Product Overview")
        },
    )
}

pub fn data_page(table: &ProductTable) -> Result<Element, DashboardError> {
    let summary = table.summary()?;
    let figure = product_table_figure(table, summary.product_count)
        .to_value()
        .map_err(|err| DashboardError::render(PageId::Data, err.to_string()))?;

    Ok(div().child(page_title("Data Table")).child(
        div()
            .style(card_style())
            .child(graph(figure))
            .child(
                div()
                    .id("data-summary")
                    .style(Style::from_pairs(&[
                        ("marginTop", "20px"),
                        ("padding", "20px"),
                        ("backgroundColor", ACCENT_BLUE),
                        ("color", "white"),
                        ("borderRadius", "10px"),
                    ]))
                    .child(h3("Statistics").style(Style::from_pairs(&[("color", HEADING_COLOR)])))
                    .child(p(format!(
                        "Total sales: {} CNY",
                        format_thousands(summary.total_sales)
                    )))
                    .child(p(format!(
                        "Total inventory: {} units",
                        format_thousands(summary.total_inventory)
                    )))
                    .child(p(format!("Products: {}", summary.product_count))),
            ),
    ))
}

pub fn about_page() -> Element {
    let list_style = Style::from_pairs(&[("fontSize", "16px"), ("lineHeight", "2")]);
    div().child(page_title("About This Project")).child(
        div()
            .style(card_style())
            .child(h3("Tech Stack").style(Style::from_pairs(&[("color", ACCENT_BLUE)])))
            .child(
                ul([
                    "plotly.js - interactive charting",
                    "axum - HTTP server",
                    "serde - element tree and figure serialization",
                    "rand - seeded sample data",
                ])
                .style(list_style.clone()),
            )
            .child(h3("Features").style(Style::from_pairs(&[
                ("color", ACCENT_BLUE),
                ("marginTop", "30px"),
            ])))
            .child(
                ul([
                    "Responsive navigation bar",
                    "Multi-page switching",
                    "Interactive data visualization",
                    "Modern UI design",
                ])
                .style(list_style),
            )
            .child(
                div()
                    .style(Style::from_pairs(&[
                        ("marginTop", "30px"),
                        ("padding", "20px"),
                        ("backgroundColor", "#2ecc71"),
                        ("color", "white"),
                        ("borderRadius", "10px"),
                        ("fontSize", "16px"),
                    ]))
                    .child(p(
                        "A plotly.js demo showing how to build a modern web dashboard with a navigation bar.",
                    )),
            ),
    )
}

#[cfg(test)]
#[path = "tests/pages_tests.rs"]
mod tests;
