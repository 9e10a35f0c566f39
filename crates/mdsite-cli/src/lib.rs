pub mod site;

pub use site::{build_site, copy_static, generate_page, generate_pages_recursive};
