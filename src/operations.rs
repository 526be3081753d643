use std::hash::Hash;

use crate::editdigraph::EditDigraph;
use crate::graph::*;


pub trait DigraphOperations<V, G> where G: Digraph<V>, V: Hash + Eq + Clone {
    /// Returns a copy of the graph with every arc flipped, weights kept.
    fn reverse(&self) -> EditDigraph<V>;

    /// Returns the union of both graphs. Arcs present in both keep
    /// `other`'s weight, matching set-arc's last-write semantics.
    fn merge(&self, other:&G) -> EditDigraph<V>;

    /// Returns the graph of vertices and arcs present in both graphs. An
    /// arc survives regardless of its weights on either side and keeps the
    /// weight it has in `self`.
    fn intersect(&self, other:&G) -> EditDigraph<V>;
}

impl<V, G> DigraphOperations<V, G> for G where G: Digraph<V>, V: Hash + Eq + Clone {
    fn reverse(&self) -> EditDigraph<V> {
        let mut res = EditDigraph::with_capacity(self.num_vertices());
        res.add_vertices(self.vertices().cloned());
        for (u, v, w) in self.arcs() {
            res.insert_arc(v, u, w);
        }

        res
    }

    fn merge(&self, other:&G) -> EditDigraph<V> {
        let mut res = EditDigraph::with_capacity(std::cmp::max(self.num_vertices(), other.num_vertices()));
        res.add_vertices(self.vertices().cloned());
        res.add_vertices(other.vertices().cloned());
        for (u, v, w) in self.arcs() {
            res.insert_arc(u, v, w);
        }
        for (u, v, w) in other.arcs() {
            res.insert_arc(u, v, w);
        }
        res
    }

    fn intersect(&self, other:&G) -> EditDigraph<V> {
        let mut res = EditDigraph::new();
        res.add_vertices(self.vertices().filter(|u| other.contains(*u)).cloned());
        for (u, v, w) in self.arcs() {
            if other.has_arc(u, v) {
                res.insert_arc(u, v, w);
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

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn reverse() {
        let G = EditDigraph::from_iter([(0, 1, 5), (1, 2, 3)].into_iter());
        let R = G.reverse();

        assert_eq!(R.num_vertices(), 3);
        assert!(R.has_arc(&1, &0));
        assert!(R.has_arc(&2, &1));
        assert!(!R.has_arc(&0, &1));
        assert_eq!(R.arc_weight(&1, &0), Ok(5));

        assert_eq!(R.reverse(), G);
    }

    #[test]
    fn merge() {
        let G = EditDigraph::from_iter([(0, 1, 5), (2, 3, 1)].into_iter());
        let H = EditDigraph::from_iter([(1, 2, 2), (3, 0, 4)].into_iter());

        let M = G.merge(&H);
        assert_eq!(M.num_vertices(), 4);
        assert_eq!(M.num_edges(), 4);
        assert_eq!(M.arc_weight(&0, &1), Ok(5));
        assert_eq!(M.arc_weight(&3, &0), Ok(4));

        // On a shared arc the second graph's weight wins
        let H = EditDigraph::from_iter([(0, 1, 9)].into_iter());
        let M = G.merge(&H);
        assert_eq!(M.num_edges(), 2);
        assert_eq!(M.arc_weight(&0, &1), Ok(9));
    }

    #[test]
    fn intersect() {
        let G = EditDigraph::from_iter([(0, 1, 5), (1, 2, 3)].into_iter());
        let H = EditDigraph::from_iter([(0, 1, 7), (1, 3, 3)].into_iter());

        let I = G.intersect(&H);
        assert_eq!(I.num_edges(), 1);
        assert_eq!(I.arc_weight(&0, &1), Ok(5));
        assert!(I.contains(&1));
        assert!(!I.contains(&2));
        assert!(!I.contains(&3));
    }
}
