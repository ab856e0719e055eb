mod persistence;

pub use persistence::{load_catalog_foods, load_profile, save_profile};
