/*
[INPUT]:  Signed credentials and request payloads
[OUTPUT]: Raw response bodies from the RongCloud REST API
[POS]:    HTTP layer - signing, dispatch and error types
[UPDATE]: When adding transport concerns or changing dispatch behavior
*/

pub mod dispatcher;
pub mod error;
pub(crate) mod params;
pub mod signature;

pub use dispatcher::{ClientConfig, Dispatcher, Payload};
pub use error::{Result, RongCloudError};
pub use signature::{
    APP_KEY_HEADER, NONCE_HEADER, SIGNATURE_HEADER, SignedContext, TIMESTAMP_HEADER,
};

pub(crate) use params::Params;
