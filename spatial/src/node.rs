use crate::geom::Point;
use crate::path::{Resolver, MAX_DEPTH};
use bits::{BitField, Cell};

use log::debug;

/// A stored value together with the position it was inserted at.
#[derive(Clone, Debug)]
pub struct Item<T> {
    pub data: T,
    pub position: Point,
}

/// A tree node. A node whose `field` is empty is a leaf; only leaves hold items.
#[derive(Clone, Debug)]
pub struct Node<T> {
    /// The occupied child cells.
    pub(crate) field: BitField,
    /// One child per bit of `field`, in ascending cell order.
    pub(crate) children: Vec<Node<T>>,
    pub(crate) items: Vec<Item<T>>,
}

impl<T> Node<T> {
    pub fn new() -> Self {
        Node {
            field: BitField::EMPTY,
            children: Vec::new(),
            items: Vec::new(),
        }
    }

    pub fn field(&self) -> BitField {
        self.field
    }

    pub fn items(&self) -> &[Item<T>] {
        &self.items
    }

    #[inline(always)]
    pub fn is_leaf(&self) -> bool {
        self.field.is_empty()
    }

    /// Returns true for a leaf holding nothing.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.field.is_empty() && self.items.is_empty()
    }

    #[inline]
    pub fn child(&self, cell: Cell) -> Option<&Node<T>> {
        if self.field.contains(cell) {
            Some(&self.children[self.field.slot(cell)])
        } else {
            None
        }
    }

    #[inline]
    pub fn child_mut(&mut self, cell: Cell) -> Option<&mut Node<T>> {
        if self.field.contains(cell) {
            let slot = self.field.slot(cell);
            Some(&mut self.children[slot])
        } else {
            None
        }
    }

    /// Returns the child for `cell`, creating an empty one at its slot if the cell is vacant.
    pub(crate) fn child_or_insert(&mut self, cell: Cell) -> &mut Node<T> {
        let slot = self.field.slot(cell);
        if !self.field.contains(cell) {
            self.field.set(cell);
            self.children.insert(slot, Node::new());
        }
        &mut self.children[slot]
    }

    /// Iterates the children along with the cell each one occupies.
    pub fn cells_and_children(&self) -> impl Iterator<Item = (Cell, &Node<T>)> {
        self.field.zip(self.children.iter())
    }

    /// Moves the items of this leaf into newly created children, one per distinct cell at
    /// `depth`. Children left with more than `bin_size` items are split in turn until the
    /// maximum depth is reached.
    pub(crate) fn subdivide(&mut self, depth: usize, resolver: &Resolver, bin_size: usize) {
        debug_assert!(self.is_leaf());
        debug_assert!(depth < MAX_DEPTH);

        let mut keyed: Vec<(Cell, Item<T>)> = self
            .items
            .drain(..)
            .map(|item| (resolver.cell_at(item.position, depth), item))
            .collect();
        keyed.sort_by_key(|(cell, _)| *cell);

        for (cell, item) in keyed {
            if !self.field.contains(cell) {
                self.field.set(cell);
                self.children.push(Node::new());
            }
            // Sorted input means the child for `cell` is always the last one pushed.
            if let Some(child) = self.children.last_mut() {
                child.items.push(item);
            }
        }

        debug!(
            "subdivided leaf at depth {} into {} children",
            depth,
            self.children.len()
        );

        if depth + 1 < MAX_DEPTH {
            for child in self.children.iter_mut() {
                if child.items.len() > bin_size {
                    child.subdivide(depth + 1, resolver, bin_size);
                }
            }
        }
    }

    /// Returns the number of items held in this subtree.
    pub fn count(&self) -> usize {
        self.items.len() + self.children.iter().map(Node::count).sum::<usize>()
    }

    /// Returns the number of nodes in this subtree, including this one.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Node::node_count).sum::<usize>()
    }

    /// Returns the number of levels below this node.
    pub fn depth(&self) -> usize {
        self.children
            .iter()
            .map(|c| c.depth() + 1)
            .max()
            .unwrap_or(0)
    }
}

impl<T> Default for Node<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::BBox;

    fn leaf_with(points: &[Point]) -> Node<usize> {
        let mut node = Node::new();
        for (i, p) in points.iter().enumerate() {
            node.items.push(Item {
                data: i,
                position: *p,
            });
        }
        node
    }

    #[test]
    fn subdivide_groups_items_by_cell() {
        let bounds = BBox::new(Point::ORIGIN, 8.0);
        let resolver = Resolver::new(&bounds);
        let points = [
            Point::new(7.0, 7.0, 7.0),
            Point::new(-7.0, -7.0, -7.0),
            Point::new(6.5, 6.5, 6.5),
            Point::new(-7.0, 7.0, -7.0),
        ];
        let mut node = leaf_with(&points);
        node.subdivide(0, &resolver, 4);

        assert!(node.items.is_empty());
        assert_eq!(node.field.decode(), vec![Cell(0), Cell(12), Cell(63)]);
        assert_eq!(node.children.len(), 3);
        assert_eq!(node.child(Cell(63)).map(|c| c.items.len()), Some(2));
        assert_eq!(node.child(Cell(12)).map(|c| c.items[0].data), Some(3));
        assert_eq!(node.count(), 4);
        assert_eq!(node.node_count(), 4);
        assert_eq!(node.depth(), 1);
    }

    #[test]
    fn crowded_children_split_again() {
        let bounds = BBox::new(Point::ORIGIN, 8.0);
        let resolver = Resolver::new(&bounds);
        let points = [
            Point::new(4.5, 4.5, 4.5),
            Point::new(5.5, 5.5, 5.5),
            Point::new(6.5, 6.5, 6.5),
        ];
        let mut node = leaf_with(&points);
        node.subdivide(0, &resolver, 1);

        assert_eq!(node.field.decode(), vec![Cell(63)]);
        let child = node.child(Cell(63)).unwrap();
        assert!(!child.is_leaf());
        assert_eq!(child.field.decode(), vec![Cell(0), Cell(21), Cell(42)]);
        assert_eq!(node.count(), 3);
        assert_eq!(node.depth(), 2);
    }

    #[test]
    fn identical_positions_stop_at_max_depth() {
        let bounds = BBox::new(Point::ORIGIN, 8.0);
        let resolver = Resolver::new(&bounds);
        let p = Point::new(1.0, 2.0, 3.0);
        let mut node = leaf_with(&[p, p, p]);
        node.subdivide(0, &resolver, 1);
        assert_eq!(node.depth(), MAX_DEPTH);
        assert_eq!(node.count(), 3);
    }

    #[test]
    fn child_or_insert_keeps_children_in_cell_order() {
        let mut node: Node<usize> = Node::new();
        node.child_or_insert(Cell(40)).items.push(Item {
            data: 40,
            position: Point::ORIGIN,
        });
        node.child_or_insert(Cell(3)).items.push(Item {
            data: 3,
            position: Point::ORIGIN,
        });
        node.child_or_insert(Cell(40));

        let order: Vec<_> = node
            .cells_and_children()
            .map(|(cell, child)| (cell, child.items[0].data))
            .collect();
        assert_eq!(order, vec![(Cell(3), 3), (Cell(40), 40)]);
        assert!(node.child_mut(Cell(5)).is_none());
    }
}
