pub mod brand_repo;
pub mod thread_repo;
pub mod video_repo;

pub use brand_repo::BrandRepo;
pub use thread_repo::ThreadRepo;
pub use video_repo::VideoRepo;
