pub mod counter;
pub mod greeting;
pub mod info;
pub mod messages;
