use dashboard_core::view::{div, escape_html, h3, p, Element, Style};
use shared::error::DashboardError;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

const PLOT_SCRIPT: &str = r#"document.querySelectorAll('.graph').forEach(function (el) {
  var fig = JSON.parse(el.dataset.figure);
  Plotly.newPlot(el, fig.data, fig.layout, { responsive: true });
});"#;

/// Wraps a rendered tree in a complete HTML document.
pub(crate) fn document(title: &str, body: &Element) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n\
         <script src=\"{PLOTLY_CDN}\"></script>\n\
         <style>body {{ margin: 0; font-family: sans-serif; }} form {{ margin: 0; }}</style>\n\
         </head>\n<body>\n{}\n<script>\n{PLOT_SCRIPT}\n</script>\n</body>\n</html>\n",
        escape_html(title),
        body.to_html()
    )
}

/// A visible error banner. Shown above `current` when the last known good
/// page is still available.
pub(crate) fn error_document(error: &DashboardError, current: Option<Element>) -> String {
    let banner = div()
        .id("error")
        .style(Style::from_pairs(&[
            ("backgroundColor", "#e74c3c"),
            ("color", "white"),
            ("padding", "20px"),
        ]))
        .child(h3("Navigation error"))
        .child(p(error.to_string()));
    let body = match current {
        Some(layout) => div().child(banner).child(layout),
        None => banner,
    };
    document("Dashboard error", &body)
}
