//! Git operations for repokit
//!
//! This module provides the clone executor and the working copy handle.

mod clone;
mod repo;

pub use clone::{Cloner, GitCloner};
pub use repo::WorkingCopy;
