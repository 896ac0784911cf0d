use crate::error::TreeError;
use crate::geom::{round_up_pow2, BBox, Point};
use crate::node::{Item, Node};
use crate::options::{Config, TreeOpt};
use crate::path::{Resolver, MAX_DEPTH};
use bits::Cell;

use log::{debug, trace};
use separator::Separatable;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;

/// A sparse spatial index over a cube centred on the origin.
#[derive(Clone, Debug)]
pub struct Tree<T> {
    root: Node<T>,
    bounds: BBox,
    resolver: Resolver,
    len: usize,
    config: Config,
}

impl<T> Tree<T> {
    /// Creates an empty tree covering `[-s, s)` on every axis, where `s` is `initial_size`
    /// rounded up to a power of two.
    pub fn new(initial_size: f64) -> Self {
        Self::with_config(initial_size, Config::default())
    }

    pub fn with_config(initial_size: f64, config: Config) -> Self {
        let bounds = BBox::new(Point::ORIGIN, round_up_pow2(initial_size));
        Tree {
            root: Node::new(),
            bounds,
            resolver: Resolver::new(&bounds),
            len: 0,
            config,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bounds(&self) -> &BBox {
        &self.bounds
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn root(&self) -> &Node<T> {
        &self.root
    }

    /// Changes the configuration. A new bin size only applies to leaves that fill up afterwards.
    pub fn set_option(&mut self, o: TreeOpt) {
        self.config.set_option(o);
    }

    /// Number of levels below the root.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    /// Stores `item` at `position`.
    ///
    /// The item goes into the first leaf on the path to `position`, creating the missing nodes
    /// along the way. A leaf that grows beyond the configured bin size is subdivided.
    pub fn insert(&mut self, item: T, position: Point) -> Result<(), TreeError> {
        if !self.bounds.contains(position) {
            return Err(TreeError::OutOfBounds(position));
        }

        let path = self.resolver.path(position);
        let bin_size = self.config.bin_size();
        let mut node = &mut self.root;
        let mut depth = 0;

        while !node.is_leaf() {
            node = node.child_or_insert(path[depth]);
            depth += 1;
        }

        node.items.push(Item {
            data: item,
            position,
        });
        if node.items.len() > bin_size && depth < MAX_DEPTH {
            node.subdivide(depth, &self.resolver, bin_size);
        }

        self.len += 1;
        trace!("inserted item at {} (depth {})", position, depth);
        Ok(())
    }

    /// Returns every stored item.
    pub fn values(&self) -> Vec<&T> {
        let mut results = Vec::with_capacity(self.len);
        collect_all(&self.root, &mut results);
        results
    }

    /// Returns the items whose position lies strictly inside `region`.
    pub fn lookup(&self, region: &BBox) -> Vec<&T> {
        let mut results = Vec::new();
        descend(&self.root, &self.bounds, region, &mut results);
        results
    }

    /// Returns up to `k` items ordered by increasing distance from `to`.
    ///
    /// Nodes and items share one priority queue. A node is keyed by the distance from `to` to its
    /// cube, which no item inside it can beat, so items come off the queue in distance order.
    pub fn k_nearest(&self, k: usize, to: Point) -> Vec<&T> {
        let mut results = Vec::with_capacity(k.min(self.len));
        if k == 0 {
            return results;
        }

        let mut queue = BinaryHeap::new();
        queue.push(Candidate {
            dist: self.bounds.squared_dist(to),
            entry: Entry::Node(&self.root, self.bounds),
        });

        while let Some(Candidate { entry, .. }) = queue.pop() {
            match entry {
                Entry::Item(data) => {
                    results.push(data);
                    if results.len() == k {
                        break;
                    }
                }
                Entry::Node(node, bbox) => {
                    for item in &node.items {
                        queue.push(Candidate {
                            dist: item.position.squared_dist(to),
                            entry: Entry::Item(&item.data),
                        });
                    }
                    for (cell, child) in node.cells_and_children() {
                        let b = bbox.child(cell);
                        queue.push(Candidate {
                            dist: b.squared_dist(to),
                            entry: Entry::Node(child, b),
                        });
                    }
                }
            }
        }
        results
    }
}

impl<T: PartialEq> Tree<T> {
    /// Removes and returns the first stored item equal to `item` from the leaf on the path to
    /// `position`. Leaves emptied by the removal are pruned, but the root is always kept.
    pub fn remove(&mut self, item: &T, position: Point) -> Result<T, TreeError> {
        let path = self.resolver.path(position);
        let removed = remove_from(&mut self.root, item, &path, 0).ok_or(TreeError::NotFound)?;
        self.len -= 1;
        Ok(removed)
    }

    /// Moves `item` from `from` to `to`. The tree is left untouched if either step would fail.
    pub fn relocate(&mut self, item: &T, from: Point, to: Point) -> Result<(), TreeError> {
        if !self.bounds.contains(to) {
            return Err(TreeError::OutOfBounds(to));
        }
        let data = self.remove(item, from)?;
        self.insert(data, to)
    }
}

impl<T> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Tree(items: {}, nodes: {}, depth: {}, halfsize: {:.3e})",
            self.len.separated_string(),
            self.node_count().separated_string(),
            self.depth(),
            self.bounds.halfsize
        )
    }
}

fn collect_all<'a, T>(node: &'a Node<T>, results: &mut Vec<&'a T>) {
    results.extend(node.items.iter().map(|i| &i.data));
    for child in &node.children {
        collect_all(child, results);
    }
}

fn descend<'a, T>(node: &'a Node<T>, with: &BBox, region: &BBox, results: &mut Vec<&'a T>) {
    if node.is_leaf() {
        results.extend(
            node.items
                .iter()
                .filter(|i| region.contains(i.position))
                .map(|i| &i.data),
        );
        return;
    }

    for (cell, child) in node.cells_and_children() {
        let q = with.child(cell);
        if q.intersects(region) {
            descend(child, &q, region, results);
        }
    }
}

fn remove_from<T: PartialEq>(
    node: &mut Node<T>,
    item: &T,
    path: &[Cell; MAX_DEPTH],
    depth: usize,
) -> Option<T> {
    if node.is_leaf() {
        let idx = node.items.iter().position(|i| i.data == *item)?;
        return Some(node.items.swap_remove(idx).data);
    }

    let cell = path[depth];
    let child = node.child_mut(cell)?;
    let removed = remove_from(child, item, path, depth + 1)?;

    if child.is_empty() {
        let slot = node.field.slot(cell);
        node.children.remove(slot);
        node.field.clear(cell);
        debug!("pruned empty node {} at depth {}", cell, depth + 1);
    }
    Some(removed)
}

enum Entry<'a, T> {
    Node(&'a Node<T>, BBox),
    Item(&'a T),
}

/// A queue entry ordered so that `BinaryHeap` pops the smallest distance first.
struct Candidate<'a, T> {
    dist: f64,
    entry: Entry<'a, T>,
}

impl<T> PartialEq for Candidate<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.dist.total_cmp(&other.dist) == Ordering::Equal
    }
}

impl<T> Eq for Candidate<'_, T> {}

impl<T> PartialOrd for Candidate<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Candidate<'_, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.dist.total_cmp(&self.dist)
    }
}
