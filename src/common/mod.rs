pub mod buf;
pub mod int;
