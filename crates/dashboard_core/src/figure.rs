//! Plotly figure specifications.
//!
//! Only the trace kinds and layout fields the dashboard draws are modelled.
//! Figures serialize to the JSON that `Plotly.newPlot` accepts.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    pub fn new(trace: Trace, layout: Layout) -> Self {
        Self {
            data: vec![trace],
            layout,
        }
    }

    pub fn to_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Scatter(Scatter),
    Bar(Bar),
    Pie(Pie),
    Table(Table),
}

#[derive(Debug, Clone, Serialize)]
pub struct Scatter {
    pub x: Vec<String>,
    pub y: Vec<u32>,
    pub mode: &'static str,
    pub name: String,
    pub line: Line,
    pub marker: Marker,
}

#[derive(Debug, Clone, Serialize)]
pub struct Line {
    pub color: &'static str,
    pub width: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Marker {
    pub size: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Bar {
    pub x: Vec<String>,
    pub y: Vec<u32>,
    pub name: String,
    pub marker: ScaleMarker,
}

/// Colours each bar by its own value along a continuous scale.
#[derive(Debug, Clone, Serialize)]
pub struct ScaleMarker {
    pub color: Vec<u32>,
    pub colorscale: &'static str,
    pub showscale: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Pie {
    pub labels: Vec<&'static str>,
    pub values: Vec<u32>,
    pub hole: f64,
    pub marker: PieMarker,
}

#[derive(Debug, Clone, Serialize)]
pub struct PieMarker {
    pub colors: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Table {
    pub header: TableHeader,
    pub cells: TableCells,
}

#[derive(Debug, Clone, Serialize)]
pub struct TableHeader {
    pub values: Vec<&'static str>,
    pub fill: Fill<&'static str>,
    pub font: Font,
    pub align: &'static str,
    pub height: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct TableCells {
    /// One inner vector per column.
    pub values: Vec<Vec<serde_json::Value>>,
    pub fill: Fill<Vec<Vec<&'static str>>>,
    pub align: &'static str,
    pub height: u32,
    pub font: Font,
}

#[derive(Debug, Clone, Serialize)]
pub struct Fill<T> {
    pub color: T,
}

#[derive(Debug, Clone, Serialize)]
pub struct Font {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<&'static str>,
    pub size: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Title {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Axis {
    pub title: Title,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovermode: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot_bgcolor: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paper_bgcolor: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl Layout {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(Title { text: title.into() }),
            ..Self::default()
        }
    }

    pub fn axes(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.xaxis = Some(Axis {
            title: Title { text: x.into() },
        });
        self.yaxis = Some(Axis {
            title: Title { text: y.into() },
        });
        self
    }

    pub fn white_background(mut self) -> Self {
        self.plot_bgcolor = Some("white");
        self.paper_bgcolor = Some("white");
        self
    }
}
