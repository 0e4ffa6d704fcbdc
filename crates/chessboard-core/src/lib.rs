//! Core types for an interactive chessboard.
//!
//! This crate provides the value types shared by the engine and its
//! collaborators:
//! - [`Square`] and the coordinate codec ([`to_notation`], [`to_coordinate`])
//! - [`Piece`], [`PieceKind`], and [`Color`]
//! - [`Occupant`], the contents of one square
//! - [`Move`] and its persisted form [`MoveRecord`]

mod color;
mod error;
mod mov;
mod occupant;
mod piece;
mod square;

pub use color::Color;
pub use error::CoordError;
pub use mov::{Move, MoveRecord};
pub use occupant::Occupant;
pub use piece::{Piece, PieceKind};
pub use square::{to_coordinate, to_notation, Square};
