pub mod check;
pub mod render;

pub use check::check;
pub use render::render;
