//! Full-screen UI page modules.

pub mod dir_listing;
