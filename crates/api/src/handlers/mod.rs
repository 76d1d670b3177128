pub mod brand;
pub mod mention;
pub mod thread;
pub mod video;
