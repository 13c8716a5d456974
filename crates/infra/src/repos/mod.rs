pub mod authors;
pub mod games;
pub mod reviews;
