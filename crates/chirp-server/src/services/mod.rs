//! Business logic services

pub mod accounts;
pub mod posts;

pub use accounts::AccountService;
pub use posts::PostService;
