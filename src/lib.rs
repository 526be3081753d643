//!
//! A mutable, directed, edge-weighted graph data structure over generic
//! vertex labels. At most one arc exists per ordered vertex pair and every
//! arc carries a strictly positive integer weight.
//!
//! ```rust
//! use weightgraph::graph::*;
//! use weightgraph::editdigraph::EditDigraph;
//!
//! fn main() {
//!     let mut graph = EditDigraph::new();
//!     graph.add_vertices(vec!["A", "B", "C"].into_iter());
//!     graph.set_arc(&"A", &"B", 5).unwrap();
//!     graph.set_arc(&"C", &"B", 2).unwrap();
//!
//!     let sources = graph.sources(&"B");
//!     assert_eq!(sources.get(&"A"), Some(&5));
//!     assert_eq!(sources.get(&"C"), Some(&2));
//! }
//! ```
#![allow(non_snake_case)]

pub mod error;
pub mod graph;
pub mod editdigraph;
pub mod iterators;
pub mod operations;
pub mod compare;
