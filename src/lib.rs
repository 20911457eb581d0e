//! In-memory binary search tree with insertion, traversal, search,
//! validation, rebalancing, and path queries, plus the interactive menu that
//! drives it.
//!
//! The engine (`Tree`, `Node`, the traversal iterators, and the search
//! routines) is purely in-memory and single-threaded; all its operations are
//! bounded by tree size and signal misses as absence instead of errors. The
//! `cli` module is thin I/O glue mapping menu choices to engine calls.

pub mod balance;
pub mod cli;
pub mod config;
pub mod display;
pub mod errors;
pub mod exitcode;
pub mod node;
pub mod search;
pub mod traverse;
pub mod tree;
pub mod util;

pub use node::Node;
pub use search::Strategy;
pub use traverse::Order;
pub use tree::Tree;
