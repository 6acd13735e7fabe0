pub mod dh;
pub mod fk;
