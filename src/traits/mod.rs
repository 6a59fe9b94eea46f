//! Component trait system
//!
//! This module defines the contracts that display components implement.
//! The page (mounting root) only talks to components through these traits,
//! so it never needs to know what a component displays or how it counts.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                          Page                               │
//! │   (mounting root: routes actions, keeps rendered trees)     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!              ┌───────────────┼───────────────┐
//!              ▼               ▼               ▼
//!        ┌──────────┐   ┌──────────┐   ┌──────────┐
//!        │  Static  │   │ Dynamic  │   │  Click   │
//!        │ Display  │   │ Counter  │   │ Counter  │
//!        └──────────┘   └──────────┘   └──────────┘
//!              │               │               │
//!              └───────────────┴───────────────┘
//!                              │
//!                     Implements traits:
//!                   Component, Interactive
//! ```
//!
//! # Traits Overview
//!
//! - [`Component`] - Base trait: identity + render to a document tree
//! - [`Interactive`] - Components that react to click actions

mod component;
mod interactive;

pub use component::{Component, ComponentId};
pub use interactive::{Handled, Interactive};
