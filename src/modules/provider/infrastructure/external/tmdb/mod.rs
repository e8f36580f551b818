mod mapper;
mod models;
mod provider;

pub use provider::TheMovieDatabase;
