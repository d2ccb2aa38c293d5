//! Request handling: routing dispatch, static file resolution, and
//! directory listing generation.

pub mod listing;
pub mod router;
pub mod static_files;

pub use router::handle_request;
