//! Abstract interfaces shared by the matrix codecs

pub mod element;

pub use element::MatrixElement;
