pub mod claims;
pub mod jwt;
pub mod principal;
