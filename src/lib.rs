pub mod app_state;
pub mod io_struct;
pub mod model;
pub mod pages;
pub mod server;
