pub mod separator;
pub mod status_bar;
pub mod styling;
pub mod tab_bar;
