pub mod brand;
pub mod thread;
pub mod video;
