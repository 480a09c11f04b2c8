pub mod about;
pub mod photo;
pub mod review;
pub mod shared;
pub mod upload;
