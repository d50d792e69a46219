//! The navigation state machine.
//!
//! Four pages, each reachable from every other in one step. A step is
//! computed in full before anything is stored, so the stored page, the
//! rendered content and the highlighted navigation item always agree.

use shared::{
    domain::{Affordance, HighlightVector, NavEvent, PageId},
    error::DashboardError,
};
use tracing::{info, warn};

use crate::{
    pages::{self, ViewRegistry},
    view::{Element, Style},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationState {
    pub selected: PageId,
}

impl NavigationState {
    pub fn new(selected: PageId) -> Self {
        Self { selected }
    }

    pub fn highlight(&self) -> HighlightVector {
        HighlightVector::for_page(self.selected)
    }
}

/// Everything one navigation step produces.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: NavigationState,
    pub content: Element,
    pub highlight: HighlightVector,
}

impl Transition {
    pub fn page(&self) -> PageId {
        self.state.selected
    }

    pub fn nav_styles(&self) -> [Style; 4] {
        pages::nav_styles(&self.highlight)
    }

    /// Navbar and content pane as one tree.
    pub fn layout(&self) -> Element {
        pages::layout(self.content.clone(), &self.highlight)
    }
}

/// `None` is startup and selects Home. Any trigger outside the four
/// navigation items is rejected.
pub fn resolve_trigger(event: Option<&NavEvent>) -> Result<PageId, DashboardError> {
    match event {
        None => Ok(PageId::Home),
        Some(event) => Affordance::from_trigger(&event.trigger).map(Affordance::page),
    }
}

/// Applies `event` to `state`. The prior page does not influence the
/// target; it is only consumed so callers hand ownership through.
pub fn transition(
    state: NavigationState,
    event: Option<&NavEvent>,
    registry: &ViewRegistry,
) -> Result<Transition, DashboardError> {
    let target = resolve_trigger(event)?;
    let content = registry.render(target)?;
    let mut next = state;
    next.selected = target;
    Ok(Transition {
        state: next,
        content,
        highlight: next.highlight(),
    })
}

/// Owns the selected page for one dashboard session.
#[derive(Debug, Clone)]
pub struct NavigationController {
    state: NavigationState,
    registry: ViewRegistry,
}

impl NavigationController {
    pub fn new(registry: ViewRegistry) -> Self {
        Self {
            state: NavigationState::default(),
            registry,
        }
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn registry(&self) -> &ViewRegistry {
        &self.registry
    }

    /// The initial render, as if Home had been clicked.
    pub fn startup(&mut self) -> Result<Transition, DashboardError> {
        self.apply(None)
    }

    /// Renders the current page without changing state.
    pub fn current(&self) -> Result<Transition, DashboardError> {
        let content = self.registry.render(self.state.selected)?;
        Ok(Transition {
            state: self.state,
            content,
            highlight: self.state.highlight(),
        })
    }

    pub fn handle(&mut self, event: &NavEvent) -> Result<Transition, DashboardError> {
        self.apply(Some(event))
    }

    fn apply(&mut self, event: Option<&NavEvent>) -> Result<Transition, DashboardError> {
        let from = self.state.selected;
        match transition(self.state, event, &self.registry) {
            Ok(step) => {
                self.state = step.state;
                info!(
                    %from,
                    to = %step.state.selected,
                    trigger = event.map(|e| e.trigger.as_str()).unwrap_or("<startup>"),
                    n_clicks = event.map(|e| e.n_clicks).unwrap_or_default(),
                    "navigation"
                );
                Ok(step)
            }
            Err(error) => {
                warn!(%from, %error, "navigation rejected; state unchanged");
                Err(error)
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/navigation_tests.rs"]
mod tests;
