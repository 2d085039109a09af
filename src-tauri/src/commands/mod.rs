pub mod dialog;
pub mod fs;
