//! A sparse 64-way spatial tree. Every node covers two octree levels at once: its cube is cut into
//! quarters along each axis and the occupied sub-cubes are tracked in a single 64-bit
//! [`bits::BitField`], with children stored densely in ascending cell order.

pub mod error;
pub mod geom;
pub mod node;
pub mod options;
pub mod path;
pub mod tree;

pub use error::TreeError;
pub use geom::{round_up_pow2, BBox, Point};
pub use node::{Item, Node};
pub use options::{Config, TreeOpt};
pub use path::{Resolver, MAX_DEPTH};
pub use tree::Tree;
