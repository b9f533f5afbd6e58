pub mod authorization;
pub mod gateways;
pub mod repositories;
pub mod usecases;

pub mod entities {
    pub use userdel_entities::{account::*, invocation::*};
}
