pub mod animals;
pub mod auth;
pub mod breeding;
pub mod feed_types;
pub mod inventory;
pub mod locations;
pub mod medications;
pub mod services;
pub mod vaccinations;
pub mod weights;
