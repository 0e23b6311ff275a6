//! Reverse-topological ancestry iteration
//!
//! The depth engine requires children to be yielded before their parents
//! along every path; `rev_list` supplies that order via an in-degree
//! topological sort over the ancestry subgraph reachable from the start
//! commit.

pub mod rev_list;
