#[macro_use]
extern crate log;

mod google_api;
mod json_file;

pub mod identity;
pub mod profiles;
