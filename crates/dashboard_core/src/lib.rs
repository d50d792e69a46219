//! Page rendering and navigation for the dashboard.
//!
//! [`pages::ViewRegistry`] turns a [`shared::domain::PageId`] into an element
//! tree; [`navigation::NavigationController`] owns the selected page and
//! applies click events to it.

pub mod figure;
pub mod navigation;
pub mod pages;
pub mod sample;
pub mod view;

pub use navigation::{transition, NavigationController, NavigationState, Transition};
pub use pages::ViewRegistry;
pub use view::{Element, Node, Style};
