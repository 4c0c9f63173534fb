pub mod paths;
pub mod text_field;
