//! Adjacency: the capability every traversal strategy consumes
//!
//! An adjacency maps a vertex to its child edges, each a trivial [`Walk`]
//! starting at that vertex. Child iterators are owned, so a traversal can
//! hold one open while it mutates the adjacency through [`Adjacency::remove`].

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

use crate::error::{AnansiError, Result};
use crate::walk::Walk;

/// Trait for providing the child edges of a vertex
pub trait Adjacency {
    type Vertex;
    type Edge;
    type Children: Iterator<Item = Walk<Self::Vertex, Self::Edge>>;

    /// The edges leaving `vertex`, in child order
    fn children(&self, vertex: &Self::Vertex) -> Self::Children;

    /// Delete exactly one edge equal to `edge`.
    ///
    /// Read-only adjacencies keep the default, which fails with
    /// [`AnansiError::Unsupported`].
    fn remove(&mut self, edge: &Walk<Self::Vertex, Self::Edge>) -> Result<()> {
        let _ = edge;
        Err(AnansiError::unsupported("remove"))
    }
}

/// A shared borrow traverses read-only; `remove` is unsupported through it.
impl<A: Adjacency + ?Sized> Adjacency for &A {
    type Vertex = A::Vertex;
    type Edge = A::Edge;
    type Children = A::Children;

    fn children(&self, vertex: &Self::Vertex) -> Self::Children {
        (**self).children(vertex)
    }
}

impl<A: Adjacency + ?Sized> Adjacency for &mut A {
    type Vertex = A::Vertex;
    type Edge = A::Edge;
    type Children = A::Children;

    fn children(&self, vertex: &Self::Vertex) -> Self::Children {
        (**self).children(vertex)
    }

    fn remove(&mut self, edge: &Walk<Self::Vertex, Self::Edge>) -> Result<()> {
        (**self).remove(edge)
    }
}

/// An adjacency in which no vertex has children
pub struct Empty<V, E> {
    _marker: PhantomData<fn(&V) -> E>,
}

impl<V, E> fmt::Debug for Empty<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Empty")
    }
}

/// An adjacency in which no vertex has children
pub fn empty<V, E>() -> Empty<V, E> {
    Empty {
        _marker: PhantomData,
    }
}

impl<V, E> Adjacency for Empty<V, E> {
    type Vertex = V;
    type Edge = E;
    type Children = std::iter::Empty<Walk<V, E>>;

    fn children(&self, _vertex: &V) -> Self::Children {
        std::iter::empty()
    }
}

/// A read-only adjacency backed by a closure
pub struct FromFn<V, F> {
    f: F,
    _vertex: PhantomData<fn(&V)>,
}

impl<V, F> fmt::Debug for FromFn<V, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FromFn")
    }
}

/// Build a read-only adjacency from a closure returning a vertex's edges.
///
/// The returned iterator may be lazy and even unbounded.
pub fn from_fn<V, F>(f: F) -> FromFn<V, F> {
    FromFn {
        f,
        _vertex: PhantomData,
    }
}

impl<V, E, I, F> Adjacency for FromFn<V, F>
where
    F: Fn(&V) -> I,
    I: IntoIterator<Item = Walk<V, E>>,
{
    type Vertex = V;
    type Edge = E;
    type Children = I::IntoIter;

    fn children(&self, vertex: &V) -> Self::Children {
        (self.f)(vertex).into_iter()
    }
}

/// A mutable, in-memory multimap from each vertex to its ordered children.
///
/// A vertex without an entry has no children. Duplicate children are kept:
/// each occurrence is a distinct edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
#[serde(bound(
    serialize = "V: Serialize + Ord",
    deserialize = "V: Deserialize<'de> + Ord"
))]
pub struct AdjacencyList<V> {
    edges: BTreeMap<V, Vec<V>>,
}

impl<V: Ord> Default for AdjacencyList<V> {
    fn default() -> Self {
        AdjacencyList {
            edges: BTreeMap::new(),
        }
    }
}

impl<V: Ord + Clone> AdjacencyList<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `to` to the children of `from`
    pub fn add_edge(&mut self, from: V, to: V) -> &mut Self {
        self.edges.entry(from).or_default().push(to);
        self
    }

    /// The children of `vertex`, in order
    pub fn children_of(&self, vertex: &V) -> &[V] {
        self.edges.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every vertex that has an entry, whether or not it still has children
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.edges.keys()
    }

    /// Whether `vertex` appears anywhere, as a parent or as a child
    pub fn contains(&self, vertex: &V) -> bool {
        self.edges.contains_key(vertex) || self.edges.values().any(|c| c.contains(vertex))
    }

    /// Total number of edges
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }

    /// Delete the first occurrence of the edge `from -> to`
    pub fn remove_edge(&mut self, from: &V, to: &V) -> Result<()> {
        let children = self.edges.get_mut(from);
        let position = children
            .as_ref()
            .and_then(|children| children.iter().position(|child| child == to));
        match (children, position) {
            (Some(children), Some(index)) => {
                children.remove(index);
                Ok(())
            }
            _ => Err(AnansiError::not_found("edge", "in adjacency list")),
        }
    }

    /// Whether any cycle is reachable from `root`
    pub fn reaches_cycle(&self, root: &V) -> bool {
        let mut on_path = BTreeSet::new();
        let mut finished = BTreeSet::new();
        let mut stack = vec![(root, 0usize)];
        on_path.insert(root);
        while let Some((vertex, index)) = stack.pop() {
            let Some(child) = self.children_of(vertex).get(index) else {
                on_path.remove(vertex);
                finished.insert(vertex);
                continue;
            };
            stack.push((vertex, index + 1));
            if on_path.contains(child) {
                return true;
            }
            if !finished.contains(child) {
                on_path.insert(child);
                stack.push((child, 0));
            }
        }
        false
    }
}

impl<V: Ord + Clone> FromIterator<(V, V)> for AdjacencyList<V> {
    fn from_iter<T: IntoIterator<Item = (V, V)>>(iter: T) -> Self {
        let mut list = AdjacencyList::new();
        for (from, to) in iter {
            list.add_edge(from, to);
        }
        list
    }
}

impl<V: Ord + Clone> Adjacency for AdjacencyList<V> {
    type Vertex = V;
    type Edge = ();
    type Children = std::vec::IntoIter<Walk<V, ()>>;

    fn children(&self, vertex: &V) -> Self::Children {
        self.children_of(vertex)
            .iter()
            .map(|child| Walk::new(vertex.clone(), child.clone()))
            .collect::<Vec<_>>()
            .into_iter()
    }

    fn remove(&mut self, edge: &Walk<V, ()>) -> Result<()> {
        self.remove_edge(edge.from_vertex(), edge.to_vertex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn targets<A: Adjacency>(adjacency: &A, vertex: &A::Vertex) -> Vec<A::Vertex> {
        adjacency
            .children(vertex)
            .map(Walk::into_to)
            .collect()
    }

    #[test]
    fn test_empty_has_no_children() {
        let adjacency = empty::<&str, ()>();
        assert!(targets(&adjacency, &"A").is_empty());
    }

    #[test]
    fn test_from_fn_is_read_only() {
        let mut adjacency = from_fn(|v: &u32| {
            if *v < 2 {
                vec![Walk::with_over(*v, v + 1, "succ")]
            } else {
                vec![]
            }
        });
        assert_eq!(targets(&adjacency, &0), vec![1]);
        assert_eq!(targets(&adjacency, &2), Vec::<u32>::new());

        let err = adjacency.remove(&Walk::with_over(0, 1, "succ")).unwrap_err();
        assert!(matches!(err, AnansiError::Unsupported { operation: "remove" }));
    }

    #[test]
    fn test_from_fn_unbounded_children() {
        let adjacency = from_fn(|v: &u64| {
            let v = *v;
            (0..).map(move |i| Walk::<u64, ()>::new(v, v + i))
        });
        let first: Vec<u64> = adjacency.children(&10).take(3).map(Walk::into_to).collect();
        assert_eq!(first, vec![10, 11, 12]);
    }

    #[test]
    fn test_adjacency_list_preserves_child_order() {
        let graph: AdjacencyList<&str> = [("A", "C"), ("A", "B"), ("A", "C")].into_iter().collect();
        assert_eq!(targets(&graph, &"A"), vec!["C", "B", "C"]);
        assert_eq!(graph.edge_count(), 3);
        assert!(graph.contains(&"B"));
        assert!(!graph.contains(&"Z"));
    }

    #[test]
    fn test_adjacency_list_remove_first_occurrence() {
        let mut graph: AdjacencyList<&str> =
            [("A", "C"), ("A", "B"), ("A", "C")].into_iter().collect();
        graph.remove(&Walk::new("A", "C")).unwrap();
        assert_eq!(graph.children_of(&"A"), &["B", "C"]);
    }

    #[test]
    fn test_adjacency_list_remove_missing_edge() {
        let mut graph: AdjacencyList<&str> = [("A", "B")].into_iter().collect();
        assert!(graph.remove(&Walk::new("B", "A")).is_err());
        assert!(graph.remove(&Walk::new("A", "Z")).is_err());
    }

    #[test]
    fn test_shared_borrow_cannot_remove() {
        let graph: AdjacencyList<&str> = [("A", "B")].into_iter().collect();
        let mut shared = &graph;
        assert!(matches!(
            Adjacency::remove(&mut shared, &Walk::new("A", "B")),
            Err(AnansiError::Unsupported { .. })
        ));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_mutable_borrow_forwards_remove() {
        let mut graph: AdjacencyList<&str> = [("A", "B")].into_iter().collect();
        {
            let mut borrowed = &mut graph;
            Adjacency::remove(&mut borrowed, &Walk::new("A", "B")).unwrap();
        }
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_reaches_cycle() {
        let dag: AdjacencyList<&str> = [("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")]
            .into_iter()
            .collect();
        assert!(!dag.reaches_cycle(&"A"));

        let mut looped = dag.clone();
        looped.add_edge("D", "B");
        assert!(looped.reaches_cycle(&"A"));
        assert!(looped.reaches_cycle(&"C"));
        assert!(!looped.reaches_cycle(&"Z"));

        let self_loop: AdjacencyList<&str> = [("A", "A")].into_iter().collect();
        assert!(self_loop.reaches_cycle(&"A"));
    }

    #[test]
    fn test_adjacency_list_deserializes_from_map() {
        let graph: AdjacencyList<String> =
            serde_json::from_str(r#"{"A": ["B", "C"], "B": ["D"]}"#).unwrap();
        assert_eq!(graph.children_of(&"A".to_string()), &["B", "C"]);
        assert_eq!(graph.edge_count(), 3);
    }
}
