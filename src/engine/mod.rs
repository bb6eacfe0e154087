//! Request handling engine.
//!
//! This module contains the per-line dispatch logic and the
//! `order.place` handler.

pub mod dispatcher;
pub mod orders;
