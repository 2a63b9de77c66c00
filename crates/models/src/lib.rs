pub mod tree;

pub use tree::{Tree, TreeInput};
