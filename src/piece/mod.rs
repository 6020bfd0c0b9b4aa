//! Piece definitions
//!
//! A piece bundles an optional auth property with named actions and
//! triggers. [`create_piece`] validates the bundle and pins it to the
//! latest context version; [`Piece::metadata`] produces the document the
//! platform API serves (and the locale overlay rewrites).

mod builder;
mod types;

pub use builder::{
    create_piece, create_piece_with_floor, MINIMUM_RELEASE_FLOOR,
    MINIMUM_SUPPORTED_RELEASE_AFTER_LATEST_CONTEXT_VERSION,
};
pub use types::{Piece, PieceMetadata, PieceParams, Translations};

#[cfg(test)]
pub(crate) mod testing;

#[cfg(test)]
mod tests;
