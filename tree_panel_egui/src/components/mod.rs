pub mod form;
pub mod status_bar;
