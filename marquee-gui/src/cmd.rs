use std::sync::Arc;

use druid::{Selector, WidgetId};

use crate::data::Nav;

// Widget IDs

pub const WIDGET_MOVIE_INPUT: WidgetId = WidgetId::reserved(1);
pub const WIDGET_MOVIE_SKELETON: WidgetId = WidgetId::reserved(2);
pub const WIDGET_MOVIE_LOADED: WidgetId = WidgetId::reserved(3);

// Common

pub const SET_FOCUS: Selector = Selector::new("app.set-focus");
pub const OPEN_LINK: Selector<Arc<str>> = Selector::new("app.open-link");

// Navigation

pub const NAVIGATE: Selector<Nav> = Selector::new("app.navigates");
pub const NAVIGATE_BACK: Selector<usize> = Selector::new("app.navigate-back");
