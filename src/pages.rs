//! Page generation modules
//!
//! Each page module renders one page of the project website from explicit
//! inputs and the shared components.

pub mod download;
