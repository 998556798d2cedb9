pub mod config;
pub mod dom;
pub mod macros;
pub mod page;

pub const NAME: &str = "navbar-site";
pub const CSS: &str = include_str!("../styles.css");
