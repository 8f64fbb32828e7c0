//! kubetab - uniform tabular access to Kubernetes resource kinds
//!
//! Normalizes heterogeneous cluster object kinds behind one contract:
//! fetch, render as positional table rows, marshal to YAML, and optionally
//! trigger an imperative action. A list/table/detail frontend drives any
//! supported kind through [`resources::Tabular`] and [`resources::ResourceList`]
//! without per-kind branching.

pub mod client;
pub mod config;
pub mod error;
pub mod output;
pub mod resources;
