pub mod landing;
pub mod roadmap;
