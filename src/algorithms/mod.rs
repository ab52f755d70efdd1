//! Animated algorithm engines
//!
//! Each submodule adds `impl Session` methods:
//! - [`sorting`]: bubble, selection and insertion sort
//! - [`searching`]: linear and binary search
//! - [`tree`]: animated BST/AVL insert, BST search and traversals
//! - [`circular`]: staged circular-queue commands
//!
//! # Step Sequences
//!
//! An engine is an ordinary loop or recursion. Between logical steps it
//! logs a line, updates the highlight marks and calls
//! [`Session::suspend`](crate::session::Session::suspend). The `?` after each
//! suspension is the only cancellation mechanism: a superseded run returns
//! at once, leaving later steps unexecuted.
//!
//! Circular-queue commands are not runs. They stage a highlight, wait one
//! cosmetic delay and then mutate, without checking for supersession.

pub mod circular;
pub mod searching;
pub mod sorting;
pub mod tree;
