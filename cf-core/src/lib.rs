pub mod constants;
pub mod errors;
pub mod k8s;
pub mod logging;
pub mod macros;
pub mod time;

pub mod prelude {
    pub use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;
    pub use kube::core::TypeMeta;

    pub use crate::constants::*;
    pub use crate::errors::EmptyResult;
    pub use crate::k8s::GVK;
}
