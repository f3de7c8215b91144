//! Screen state and the rules behind it, kept free of rendering so each piece
//! can be exercised on its own.

pub mod advisory;
pub mod header;
pub mod home;
pub mod market;
pub mod pest;
pub mod profile;
pub mod shell;
pub mod tab;
pub mod weather;

pub use tab::Tab;
