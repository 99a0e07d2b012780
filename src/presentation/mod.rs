pub mod handlers;
pub mod register_view_model;
