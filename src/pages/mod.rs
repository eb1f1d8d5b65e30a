pub mod clusters;
pub mod home;
pub mod not_found;
