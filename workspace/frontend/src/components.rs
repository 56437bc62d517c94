pub mod icon;
pub mod layout;
pub mod sections;
pub mod showcase;
