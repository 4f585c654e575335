pub mod binary_searcher;
pub mod linear_searcher;
