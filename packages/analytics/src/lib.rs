#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Filter and aggregation pipeline over the immutable crime dataset.
//!
//! Every UI event resolves to one of two pure aggregations: totals per
//! municipality for the map and municipality bar chart, or totals per
//! month for the drill-down chart. Both take the shared record slice and a
//! transient [`FilterSelection`](campeche_stats_analytics_models::FilterSelection)
//! and allocate only their result.

pub mod pipeline;
