use std::hash::Hash;

use crate::graph::*;

/// The possible results of comparing two weighted digraphs under the
/// subgraph relation.
#[derive(Debug, PartialEq)]
pub enum SubgraphRel {
    Sub,
    Eq,
    Sup,
    Incomp
}

pub trait SubgraphComparable<V, G> where G: Digraph<V>, V: Hash + Eq + Clone {
    fn compare_subgraph(&self, other:&G) -> SubgraphRel;
}

impl<V, G> SubgraphComparable<V, G> for G where G: Digraph<V>, V: Hash + Eq + Clone {
    /// A graph is a subgraph of another if every vertex is contained in the
    /// other and every arc exists there with the same weight.
    fn compare_subgraph(&self, other:&G) -> SubgraphRel {
        let mut is_sub: bool = self.vertices().all(|x| other.contains(x));
        is_sub &= self.arcs().all(|(u, v, w)| other.arc_weight(u, v) == Ok(w));
        let mut is_super: bool = other.vertices().all(|x| self.contains(x));
        is_super &= other.arcs().all(|(u, v, w)| self.arc_weight(u, v) == Ok(w));

        match (is_sub, is_super) {
            (true, true) => SubgraphRel::Eq,
            (true, false) => SubgraphRel::Sub,
            (false, true) => SubgraphRel::Sup,
            (false, false) => SubgraphRel::Incomp,
        }
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
    use crate::editdigraph::EditDigraph;

    #[test]
    fn subgraph() {
        let P5 = EditDigraph::path(5);
        let P4 = EditDigraph::path(4);
        let C5 = EditDigraph::cycle(5);

        assert_eq!(P5.compare_subgraph(&EditDigraph::path(5)), SubgraphRel::Eq);
        assert_eq!(P5.compare_subgraph(&P4), SubgraphRel::Sup);
        assert_eq!(P4.compare_subgraph(&P5), SubgraphRel::Sub);
        assert_eq!(P5.compare_subgraph(&C5), SubgraphRel::Sub);

        assert_eq!(C5.compare_subgraph(&EditDigraph::cycle(4)), SubgraphRel::Incomp);
    }

    #[test]
    fn weights_matter() {
        let G = EditDigraph::from_iter([(0, 1, 5)].into_iter());
        let H = EditDigraph::from_iter([(0, 1, 7)].into_iter());

        // Same shape, different weights: neither contains the other
        assert_eq!(G.compare_subgraph(&H), SubgraphRel::Incomp);
    }
}
