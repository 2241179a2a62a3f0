//! Operation dispatch, payload validation, and response building

pub mod component;
mod handlers;
pub mod operation;
pub mod request;
pub mod response;

pub use component::ChromaBinding;
pub use operation::OperationKind;
pub use request::{CollectionNameRequest, CreateCollectionRequest, InvokeRequest};
pub use response::{InvokeResponse, ResponseBuilder};
