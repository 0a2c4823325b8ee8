pub mod albums;
pub mod artists;
pub mod tracks;
