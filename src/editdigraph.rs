//!
//! A mutable digraph with a positive integer weight on every arc. Adjacency
//! is stored in hash maps keyed by vertex label, therefore all editing
//! operations run in (amortized) constant time and arc lookups do not scan
//! the arc collection.
//!
//! Vertices can carry any label type that supports hashing, equality and
//! cloning:
//!
//! ```rust
//! use weightgraph::graph::*;
//! use weightgraph::editdigraph::EditDigraph;
//!
//! fn main() {
//!     let mut graph = EditDigraph::new();
//!     graph.add_vertex(&"A");
//!     graph.add_vertex(&"B");
//!
//!     graph.set_arc(&"A", &"B", 5).unwrap();
//!     assert_eq!(graph.arc_weight(&"A", &"B"), Ok(5));
//!
//!     // Setting an arc again replaces its weight and hands back the old one.
//!     assert_eq!(graph.set_arc(&"A", &"B", 10), Ok(5));
//!     assert_eq!(graph.arc_weight(&"A", &"B"), Ok(10));
//! }
//! ```
//!
//! Removing a vertex also removes every arc incident to it:
//!
//! ```rust
//! use weightgraph::graph::*;
//! use weightgraph::editdigraph::EditDigraph;
//!
//! fn main() {
//!     let mut graph = EditDigraph::new();
//!     graph.add_vertices(vec!["A", "B", "C"].into_iter());
//!     graph.set_arc(&"A", &"B", 5).unwrap();
//!     graph.set_arc(&"B", &"C", 3).unwrap();
//!
//!     graph.remove_vertex(&"A");
//!     assert!(!graph.has_arc(&"A", &"B"));
//!     assert!(graph.has_arc(&"B", &"C"));
//! }
//! ```

use std::fmt;
use std::hash::Hash;

use itertools::Itertools;
use fxhash::{FxHashMap, FxHashSet};

use crate::error::{Error, Result};
use crate::iterators::*;
use crate::graph::*;

/// An implementation of the [Digraph] and [MutableDigraph] traits with
/// additional convenient editing and generating functions.
#[derive(Debug)]
pub struct EditDigraph<V> where V: Hash + Eq + Clone {
    out_adj: FxHashMap<V, WeightMap<V>>,
    in_adj: FxHashMap<V, FxHashSet<V>>,
    m: usize
}

impl<V> PartialEq for EditDigraph<V> where V: Hash + Eq + Clone {
    fn eq(&self, other: &Self) -> bool {
        if self.num_vertices() != other.num_vertices() {
            return false
        }
        if self.num_edges() != other.num_edges() {
            return false
        }
        // in_adj is derived from out_adj, no need to compare it
        self.out_adj == other.out_adj
    }
}
impl<V> Eq for EditDigraph<V> where V: Hash + Eq + Clone {}

impl<V> Clone for EditDigraph<V> where V: Hash + Eq + Clone {
    fn clone(&self) -> EditDigraph<V> {
        let mut G = EditDigraph::with_capacity(self.num_vertices());
        G.add_vertices(self.vertices().cloned());
        for (u, v, w) in self.arcs() {
            G.insert_arc(u, v, w);
        }

        G
    }
}

impl<V> Default for EditDigraph<V> where V: Hash + Eq + Clone {
    fn default() -> Self {
        EditDigraph::new()
    }
}

impl<V> Digraph<V> for EditDigraph<V> where V: Hash + Eq + Clone {
    /*
        Basic properties and queries
    */
    fn num_vertices(&self) -> usize {
        self.out_adj.len()
    }

    fn num_edges(&self) -> usize {
        self.m
    }

    fn contains(&self, u:&V) -> bool {
        self.out_adj.contains_key(u)
    }

    fn has_arc(&self, u:&V, v:&V) -> bool {
        match self.out_adj.get(u) {
            Some(N) => N.contains_key(v),
            _ => false
        }
    }

    fn arc_weight(&self, u:&V, v:&V) -> Result<Weight> {
        self.out_adj.get(u)
            .and_then(|N| N.get(v))
            .copied()
            .ok_or(Error::ArcNotFound)
    }

    /*
        Iteration and access
    */
    fn vertices<'a>(&'a self) -> Box<dyn Iterator<Item=&V> + 'a> {
        Box::new(self.out_adj.keys())
    }

    fn out_neighbours<'a>(&'a self, u:&V) -> Box<dyn Iterator<Item=&V> + 'a> {
        match self.out_adj.get(u) {
            Some(N) => Box::new(N.keys()),
            None => panic!("Vertex not contained in EditDigraph")
        }
    }

    fn in_neighbours<'a>(&'a self, u:&V) -> Box<dyn Iterator<Item=&V> + 'a> {
        match self.in_adj.get(u) {
            Some(N) => Box::new(N.iter()),
            None => panic!("Vertex not contained in EditDigraph")
        }
    }

    fn arcs<'a>(&'a self) -> Box<dyn Iterator<Item=(&V, &V, Weight)> + 'a> {
        Box::new(ArcIterator::new(&self.out_adj))
    }

    fn out_degree(&self, u:&V) -> usize {
        self.out_adj.get(u).map_or(0, |N| N.len())
    }

    fn in_degree(&self, u:&V) -> usize {
        self.in_adj.get(u).map_or(0, |N| N.len())
    }

    fn sources(&self, v:&V) -> WeightMap<V> {
        match self.in_adj.get(v) {
            Some(N) => N.iter()
                        .map(|u| (u.clone(), self.out_adj[u][v]))
                        .collect(),
            None => WeightMap::default()
        }
    }

    fn targets(&self, u:&V) -> WeightMap<V> {
        match self.out_adj.get(u) {
            Some(N) => N.clone(),
            None => WeightMap::default()
        }
    }
}

impl<V> FromIterator<Arc<V>> for EditDigraph<V> where V: Hash + Eq + Clone {
    /// Collects `(source, target, weight)` triples into a digraph. Endpoints
    /// are added as vertices on first sight.
    ///
    /// Panics if a weight is zero.
    fn from_iter<T: IntoIterator<Item = Arc<V>>>(iter: T) -> Self {
        let mut res = EditDigraph::new();
        for (u, v, w) in iter {
            assert!(w > 0, "Arc weights must be strictly positive");
            res.add_vertex(&u);
            res.add_vertex(&v);
            res.insert_arc(&u, &v, w);
        }
        res
    }
}

impl<V> MutableDigraph<V> for EditDigraph<V> where V: Hash + Eq + Clone {
    fn new() -> EditDigraph<V> {
        EditDigraph{
              out_adj: FxHashMap::default(),
              in_adj: FxHashMap::default(),
              m: 0}
    }

    fn with_capacity(n_guess:usize) -> Self {
        EditDigraph {
            out_adj: FxHashMap::with_capacity_and_hasher(n_guess, Default::default()),
            in_adj: FxHashMap::with_capacity_and_hasher(n_guess, Default::default()),
            m: 0
        }
    }

    fn add_vertex(&mut self, u:&V) -> bool {
        if !self.out_adj.contains_key(u) {
            self.out_adj.insert(u.clone(), WeightMap::default());
            self.in_adj.insert(u.clone(), FxHashSet::default());
            true
        } else {
            false
        }
    }

    fn set_arc(&mut self, u:&V, v:&V, weight:Weight) -> Result<Weight> {
        if weight == 0 {
            return Err(Error::ZeroWeight);
        }
        if !self.contains(u) || !self.contains(v) {
            return Err(Error::MissingEndpoint);
        }

        Ok(self.insert_arc(u, v, weight))
    }

    fn remove_arc(&mut self, u:&V, v:&V) -> bool {
        if self.has_arc(u, v) {
            self.out_adj.get_mut(u).unwrap().remove(v);
            self.in_adj.get_mut(v).unwrap().remove(u);
            self.m -= 1;
            true
        } else {
            false
        }
    }

    fn remove_vertex(&mut self, u:&V) -> bool {
        if !self.contains(u) {
            false
        } else {
            let N:Vec<V> = self.out_adj[u].keys().cloned().collect();
            for v in &N {
                self.remove_arc(u, v);
            }
            let N:Vec<V> = self.in_adj[u].iter().cloned().collect();
            for v in &N {
                self.remove_arc(v, u);
            }

            self.out_adj.remove(u);
            self.in_adj.remove(u);

            true
        }
    }

}

impl<V> EditDigraph<V> where V: Hash + Eq + Clone {
    /// Writes the arc `u` → `v` assuming both endpoints are already
    /// vertices. Returns the previous weight, 0 if the arc is new.
    pub(crate) fn insert_arc(&mut self, u:&V, v:&V, weight:Weight) -> Weight {
        let prev = self.out_adj.get_mut(u).unwrap().insert(v.clone(), weight);
        if prev.is_none() {
            self.in_adj.get_mut(v).unwrap().insert(u.clone());
            self.m += 1;
        }
        prev.unwrap_or(0)
    }
}

impl<V> fmt::Display for EditDigraph<V> where V: Hash + Eq + Clone + fmt::Display {
    /// Renders the graph as a two-line summary, e.g.
    ///
    /// ```text
    /// Vertices: {A, B}
    /// Edges: [(A -> B, weight: 5)]
    /// ```
    ///
    /// Vertices and arcs appear in internal storage order, which is stable
    /// within one process run but not across runs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Vertices: {{{}}}", self.vertices().join(", "))?;
        let arcs = self.arcs()
                    .map(|(u, v, w)| format!("({} -> {}, weight: {})", u, v, w))
                    .join(", ");
        write!(f, "Edges: [{}]", arcs)
    }
}

impl EditDigraph<u32> {
    /// Generates a directed path on `n` vertices with unit arc weights.
    pub fn path(n:u32) -> EditDigraph<u32> {
        let mut res = EditDigraph::with_capacity(n as usize);
        if n == 0 {
            return res;
        }
        res.add_vertices(0..n);
        for u in 0..(n-1) {
            res.insert_arc(&u, &(u+1), 1);
        }

        res
    }

    /// Generates a directed cycle on `n` vertices with unit arc weights.
    pub fn cycle(n:u32) -> EditDigraph<u32> {
        let mut res = EditDigraph::with_capacity(n as usize);
        res.add_vertices(0..n);
        for u in 0..n {
            let v = (u+1) % n;
            res.insert_arc(&u, &v, 1);
        }

        res
    }

    /// Generates a directed matching on `2n` vertices with unit arc weights.
    pub fn matching(n:u32) -> EditDigraph<u32> {
        let mut res = EditDigraph::with_capacity(2*n as usize);
        res.add_vertices(0..2*n);
        for u in 0..n {
            let v = u+n;
            res.insert_arc(&u, &v, 1);
        }

        res
    }

    /// Generates a star with `n` leaves, so `n+1` vertices total.
    pub fn star(n:u32) -> EditDigraph<u32> {
        EditDigraph::biclique(1, n)
    }

    /// Generates a directed complete graph (clique) with unit arc weights.
    /// The arcs are directed according to a linear ordering.
    pub fn clique(n:u32) -> EditDigraph<u32> {
        let mut res = EditDigraph::with_capacity(n as usize);
        res.add_vertices(0..n);
        for u in 0..n {
            for v in (u+1)..n {
                res.insert_arc(&u, &v, 1);
            }
        }

        res
    }

    /// Generates an empty directed graph (independent set) on `n` vertices.
    pub fn independent(n:u32) -> EditDigraph<u32> {
        let mut res = EditDigraph::with_capacity(n as usize);
        res.add_vertices(0..n);

        res
    }

    /// Generates a complete bipartite graph (biclique) on `s`+`t` vertices
    /// with unit arc weights. Arcs go from the s-side to the t-side.
    pub fn biclique(s:u32, t:u32) -> EditDigraph<u32> {
        let mut res = EditDigraph::with_capacity((s+t) as usize);
        res.add_vertices(0..(s+t));
        for u in 0..s {
            for v in s..(s+t) {
                res.insert_arc(&u, &v, 1);
            }
        }

        res
    }
}


//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
