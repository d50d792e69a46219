use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageId {
    #[default]
    Home,
    Charts,
    Data,
    About,
}

impl PageId {
    /// Positional order shared by the navbar and the highlight vector.
    pub const ALL: [PageId; 4] = [PageId::Home, PageId::Charts, PageId::Data, PageId::About];

    pub fn as_str(self) -> &'static str {
        match self {
            PageId::Home => "home",
            PageId::Charts => "charts",
            PageId::Data => "data",
            PageId::About => "about",
        }
    }

    pub fn position(self) -> usize {
        match self {
            PageId::Home => 0,
            PageId::Charts => 1,
            PageId::Data => 2,
            PageId::About => 3,
        }
    }

    pub fn affordance(self) -> Affordance {
        Affordance(self)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageId {
    type Err = DashboardError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        PageId::ALL
            .into_iter()
            .find(|page| page.as_str() == raw)
            .ok_or_else(|| DashboardError::UnknownPage(raw.to_string()))
    }
}

/// A clickable navigation item bound to exactly one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Affordance(PageId);

impl Affordance {
    pub const ALL: [Affordance; 4] = [
        Affordance(PageId::Home),
        Affordance(PageId::Charts),
        Affordance(PageId::Data),
        Affordance(PageId::About),
    ];

    pub fn page(self) -> PageId {
        self.0
    }

    pub fn element_id(self) -> &'static str {
        match self.0 {
            PageId::Home => "nav-home",
            PageId::Charts => "nav-charts",
            PageId::Data => "nav-data",
            PageId::About => "nav-about",
        }
    }

    pub fn label(self) -> &'static str {
        match self.0 {
            PageId::Home => "Home",
            PageId::Charts => "Charts",
            PageId::Data => "Data Table",
            PageId::About => "About",
        }
    }

    pub fn position(self) -> usize {
        self.0.position()
    }

    /// Looks up the affordance for a trigger such as `nav-data` or
    /// `nav-data.n_clicks`. Only the component id before the first `.` counts.
    pub fn from_trigger(trigger: &str) -> Result<Self, DashboardError> {
        let element_id = trigger.split('.').next().unwrap_or_default();
        Affordance::ALL
            .into_iter()
            .find(|affordance| affordance.element_id() == element_id)
            .ok_or_else(|| DashboardError::InvalidTransitionEvent {
                trigger: trigger.to_string(),
            })
    }
}

/// A click on a navigation item, as delivered by a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEvent {
    pub trigger: String,
    #[serde(default)]
    pub n_clicks: u64,
}

impl NavEvent {
    pub fn new(trigger: impl Into<String>, n_clicks: u64) -> Self {
        Self {
            trigger: trigger.into(),
            n_clicks,
        }
    }

    pub fn clicked(affordance: Affordance) -> Self {
        Self::new(affordance.element_id(), 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightVector([bool; 4]);

impl HighlightVector {
    pub fn for_page(page: PageId) -> Self {
        let mut flags = [false; 4];
        flags[page.position()] = true;
        Self(flags)
    }

    pub fn as_array(&self) -> [bool; 4] {
        self.0
    }

    pub fn is_active(&self, affordance: Affordance) -> bool {
        self.0[affordance.position()]
    }

    pub fn is_exactly_one_active(&self) -> bool {
        self.0.iter().filter(|flag| **flag).count() == 1
    }

    /// The page whose entry is set, if exactly one is.
    pub fn active(&self) -> Option<PageId> {
        if !self.is_exactly_one_active() {
            return None;
        }
        PageId::ALL.into_iter().find(|page| self.0[page.position()])
    }
}
