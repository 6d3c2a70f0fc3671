mod attribute;
mod catalog;
mod descriptor;
pub mod naming;
mod schema;
mod validator;

pub use attribute::*;
pub use catalog::*;
use cf_core::errors::*;
pub use descriptor::*;
pub use schema::*;
pub use validator::*;

err_impl! {SchemaError,
    #[error("invalid resource descriptor {0}")]
    InvalidDescriptor(String),

    #[error("resource type registered more than once: {0}")]
    DuplicateResourceType(String),
}

#[cfg(test)]
mod tests;
