pub mod header;
pub mod home;
pub mod picker;
pub mod toast;
pub mod tracks;
