mod container;
mod instance;
mod layout;
mod piece;
mod placed_piece;

#[doc(inline)]
pub use container::Container;
#[doc(inline)]
pub use instance::Instance;
#[doc(inline)]
pub use layout::Layout;
#[doc(inline)]
pub use piece::Orientation;
#[doc(inline)]
pub use piece::Piece;
#[doc(inline)]
pub use placed_piece::PlacedPiece;
