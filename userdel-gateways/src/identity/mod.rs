mod identity_toolkit;
mod json_file;

pub use self::{
    identity_toolkit::{IdentityToolkit, DEFAULT_API_BASE_URL as DEFAULT_IDENTITY_TOOLKIT_API_URL},
    json_file::JsonFileIdentityStore,
};
