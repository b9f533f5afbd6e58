mod firestore;
mod json_file;

pub use self::{
    firestore::{Firestore, DEFAULT_API_BASE_URL as DEFAULT_FIRESTORE_API_URL},
    json_file::JsonFileProfileStore,
};
