//! Plain data for the chart and table renderers.
//!
//! Nothing here holds a reference to a rendered object: callers build fresh
//! values per calculation and hand them to whatever UI draws them.

pub mod chart;
pub mod table;
