pub mod about_me;
pub mod profile_photo;
pub mod review;
