mod static_post_repository;
mod traits;

pub use static_post_repository::StaticPostRepository;
pub use traits::PostRepository;
