//!
//! Type aliases and the digraph trait layer. A graph is generic over its
//! label type `V`, which only needs equality, hashing and cloning.
//!
use fxhash::{FxHashMap, FxHashSet};

use std::hash::Hash;

use crate::error::Result;

/// Arc weights are strictly positive; `0` is reserved as the "no previous
/// arc" return value of [MutableDigraph::set_arc].
pub type Weight = u32;

pub type VertexSet<V> = FxHashSet<V>;
pub type VertexSetRef<'a, V> = FxHashSet<&'a V>;
pub type WeightMap<V> = FxHashMap<V, Weight>;
pub type Arc<V> = (V, V, Weight);

/// Read-only operations on an edge-weighted digraph.
pub trait Digraph<V> where V: Hash + Eq + Clone {
    fn num_vertices(&self) -> usize;
    fn num_edges(&self) -> usize;

    fn contains(&self, u:&V) -> bool;

    fn has_arc(&self, u:&V, v:&V) -> bool;

    /// Returns the weight of the arc `u` → `v`, or [Error::ArcNotFound](crate::error::Error)
    /// if no such arc exists.
    fn arc_weight(&self, u:&V, v:&V) -> Result<Weight>;

    fn vertices<'a>(&'a self) -> Box<dyn Iterator<Item=&V> + 'a>;
    fn out_neighbours<'a>(&'a self, u:&V) -> Box<dyn Iterator<Item=&V> + 'a>;
    fn in_neighbours<'a>(&'a self, u:&V) -> Box<dyn Iterator<Item=&V> + 'a>;

    /// Iterates all arcs as `(source, target, weight)` triples.
    fn arcs<'a>(&'a self) -> Box<dyn Iterator<Item=(&V, &V, Weight)> + 'a>;

    fn in_degree(&self, u:&V) -> usize {
        self.in_neighbours(u).count()
    }

    fn out_degree(&self, u:&V) -> usize {
        self.out_neighbours(u).count()
    }

    fn degree(&self, u:&V) -> usize {
        self.in_degree(u) + self.out_degree(u)
    }

    /// Returns a fresh copy of the vertex set. The returned set is owned by
    /// the caller; modifying it leaves the graph untouched.
    fn vertex_set(&self) -> VertexSet<V> {
        self.vertices().cloned().collect()
    }

    /// Returns a fresh map from every vertex `u` with an arc `u` → `v` to
    /// that arc's weight. Empty if `v` has no in-arcs or is not contained
    /// in the graph.
    fn sources(&self, v:&V) -> WeightMap<V>;

    /// Returns a fresh map from every vertex `w` with an arc `u` → `w` to
    /// that arc's weight. Empty if `u` has no out-arcs or is not contained
    /// in the graph.
    fn targets(&self, u:&V) -> WeightMap<V>;
}

/// Editing operations on an edge-weighted digraph.
pub trait MutableDigraph<V>: Digraph<V> where V: Hash + Eq + Clone {
    fn new() -> Self where Self: Sized;
    fn with_capacity(n_guess:usize) -> Self where Self: Sized;

    /// Inserts `u` into the vertex set. Returns true if the vertex was
    /// newly added and false if it was already present.
    fn add_vertex(&mut self, u:&V) -> bool;

    /// Removes `u` and every arc incident to it, in one step. Returns
    /// false, leaving the graph unchanged, if `u` is not contained.
    fn remove_vertex(&mut self, u:&V) -> bool;

    /// Creates or updates the arc `u` → `v`. Returns the previous weight,
    /// or `0` if the arc is new. Fails with
    /// [Error::ZeroWeight](crate::error::Error) for a weight of zero and
    /// [Error::MissingEndpoint](crate::error::Error) if either endpoint is
    /// not a vertex of the graph; on failure nothing is modified.
    fn set_arc(&mut self, u:&V, v:&V, weight:Weight) -> Result<Weight>;

    /// Removes the arc `u` → `v` if it exists and reports whether it did.
    /// Vertices are unaffected.
    fn remove_arc(&mut self, u:&V, v:&V) -> bool;

    fn add_vertices<I>(&mut self, it:I) where I: Iterator<Item=V> {
        for u in it {
            self.add_vertex(&u);
        }
    }
}
