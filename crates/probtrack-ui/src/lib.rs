#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Client-side enhancement bundle for the problem-tracker pages.
//!
//! The host application renders every page on the server; this crate only
//! attaches behavior to the markup it finds: textarea auto-resize, timed
//! flash-message dismissal, an Enter-key guard on the tag input, a
//! confirmation gate on delete forms, and the persisted block/table toggle
//! for the problems listing. Each behavior is wired independently and turns
//! into a silent no-op when its elements are missing, so the same bundle is
//! safe on every page.
//!
//! DOM wiring lives behind `cfg(target_arch = "wasm32")`; the decision logic
//! in [`core`](crate::core) stays DOM-free so it runs under plain `cargo test`.

pub mod core;

#[cfg(target_arch = "wasm32")]
mod behaviors;

#[cfg(target_arch = "wasm32")]
pub use behaviors::run_enhancements;
