//! Helper functions for building HTML fragments

mod html;

pub use html::*;
