//! Core, DOM-free primitives and helpers for the enhancement bundle.
pub mod flash;
pub mod logic;
pub mod markers;
pub mod prefs;
pub mod view;
