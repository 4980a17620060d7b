//! Repository layer: typed access to individual collections.

pub mod movie_repo;

pub use movie_repo::MovieRepo;
