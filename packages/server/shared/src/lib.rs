pub mod dto;
pub mod password;

pub use dto::Role;
