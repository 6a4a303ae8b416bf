pub mod activation;
pub mod executive;
pub mod intrusion;
pub mod mood;
pub mod panic;
pub mod reality;
pub mod substance;
pub mod trauma;
pub mod worry;
