use std::collections::hash_map;
use std::hash::Hash;

use fxhash::FxHashMap;

use crate::graph::{Weight, WeightMap};

pub type VertexIterator<'a, V> = hash_map::Keys<'a, V, WeightMap<V>>;

/*
    Arc iterator for weighted digraphs. Walks the out-adjacency structure
    vertex by vertex and yields every arc once as (source, target, weight).
*/
pub struct ArcIterator<'a, V> {
    adj_it: hash_map::Iter<'a, V, WeightMap<V>>,
    curr: Option<(&'a V, hash_map::Iter<'a, V, Weight>)>,
}

impl<'a, V> ArcIterator<'a, V> where V: Hash + Eq {
    pub fn new(out_adj: &'a FxHashMap<V, WeightMap<V>>) -> ArcIterator<'a, V> {
        let mut res = ArcIterator {
            adj_it: out_adj.iter(),
            curr: None,
        };
        res.advance();
        res
    }

    fn advance(&mut self) {
        self.curr = self.adj_it.next().map(|(u, N)| (u, N.iter()));
    }
}

impl<'a, V> Iterator for ArcIterator<'a, V> where V: Hash + Eq {
    type Item = (&'a V, &'a V, Weight);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.curr.as_mut() {
                Some((u, it)) => {
                    if let Some((v, w)) = it.next() {
                        return Some((*u, v, *w));
                    }
                }
                None => return None,
            }
            self.advance();
        }
    }
}
