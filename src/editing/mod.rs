//! Pointer-driven editing of overlay and crop geometry.

pub(crate) mod selection;
pub(crate) mod session;
