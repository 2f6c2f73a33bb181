pub mod block;
pub mod contact;
pub mod tree;

pub use block::{Block, Branch, ChainSnapshot};
pub use contact::{ContactError, ContactForm, ContactSubmission};
pub use tree::{NodeAttributes, TreeNode, build_tree};
