mod about;
mod contact;
mod hero;

pub use about::About;
pub use contact::Contact;
pub use hero::Hero;
