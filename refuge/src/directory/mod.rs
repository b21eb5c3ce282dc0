mod error;
mod shelter_directory;

pub use error::DirectoryError;
pub use shelter_directory::{find, nearest, ShelterDirectory};
