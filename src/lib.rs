//! Recursive push-navigation core.
//!
//! A chain of [`node::NodeController`]s, one per mounted screen, shares a
//! single [`nav::NavState`] that counts mounted nodes per depth and holds
//! the recursion ceiling. A configurable [`nav::PushPolicy`] decides when
//! a node may push a child of itself.
//!
//! The crate is headless: the hosting UI owns rendering and transitions
//! and calls into the controllers' lifecycle and gesture entry points.

pub mod config;
pub mod mvi;
pub mod nav;
pub mod node;
