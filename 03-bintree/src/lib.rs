#![forbid(unsafe_code)]

mod node;
mod tree;

pub use tree::{BinTree, InOrderIter, PreOrderIter};
