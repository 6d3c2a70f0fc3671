mod gvk;
mod validation;

pub use gvk::*;
pub use validation::*;

use crate::errors::*;

err_impl! {KubernetesError,
    #[error("invalid apiVersion: {0}")]
    InvalidApiVersion(String),
}

#[cfg(test)]
mod tests;
