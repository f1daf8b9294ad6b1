//! Reusable HTML components for page generation
//!
//! This module provides Maud component functions used by the page
//! generators: the document layout with its site chrome, and the versioned
//! jar download links.

pub mod download;
pub mod layout;
