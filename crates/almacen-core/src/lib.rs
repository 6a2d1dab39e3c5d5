//! # Almacén Core
//!
//! The pure item catalog engine for Almacén.
//!
//! This crate owns the data model ([`Item`], [`ItemDraft`], [`ItemId`])
//! and the in-memory store ([`Inventory`] behind the [`ItemStore`] trait).
//! It is deliberately synchronous and I/O-free: HTTP, locking, and
//! configuration live in the app layer (`apps/almacen`).

pub mod item;
pub mod store;

pub use item::{Item, ItemDraft, ItemId};
pub use store::{Inventory, ItemStore, StoreError};
