#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Filter and aggregation engines over the in-memory incident dataset.
//!
//! Every function here is a pure, synchronous computation over an
//! immutable [`Dataset`](terror_insights_dataset::Dataset). The map view
//! calls [`filter::filter`] to get the matching incidents; the chart view
//! calls [`chart::chart`], which filters by year window and scope and then
//! hands the matches to [`aggregate::aggregate`].

pub mod aggregate;
pub mod chart;
pub mod filter;

pub use aggregate::aggregate;
pub use chart::chart;
pub use filter::{FilterOutcome, IncidentFilter, filter};
