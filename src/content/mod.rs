//! Content domain: sections, defaults, merge rules, and accessors.

pub mod merge;
pub mod sections;
pub mod service;
pub mod views;

pub use sections::Section;
