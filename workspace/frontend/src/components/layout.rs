mod footer;
mod nav_bar;

pub use footer::Footer;
pub use nav_bar::NavBar;
