pub mod api;
pub mod db;
pub mod service;

pub fn hello() -> &'static str {
    concat!("taskboard ", env!("CARGO_PKG_VERSION"))
}
