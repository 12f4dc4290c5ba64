//! Canonical API model and change records.
//!
//! Every format adapter normalizes its input into an [`ApiSpec`]; the
//! comparator and analysis stages only ever see these structures.
//!
//! ```
//! use api_compat::model::{ApiKind, ApiSpec, DataType, Endpoint, Parameter};
//!
//! let spec = ApiSpec::new("users", "1.0.0", ApiKind::Rest).with_endpoint(
//!     Endpoint::http("GET", "/api/users")
//!         .with_parameter(Parameter::query("limit", DataType::Integer)),
//! );
//! assert_eq!(spec.endpoint_count(), 1);
//! ```

mod assessment;
mod change;
mod changelog;
mod path;
mod spec;

pub use assessment::*;
pub use change::*;
pub use changelog::*;
pub use path::*;
pub use spec::*;
