/// Transport layer shared by all exchange integrations.
///
/// The kernel contains no exchange-specific logic: it moves bytes and
/// attaches authentication through a pluggable [`RequestSigner`]. Exchange
/// connectors stay generic over [`RestTransport`], which is what makes them
/// testable with canned responses instead of the wire.
pub mod rest;
pub mod signer;

pub use rest::{HttpTransport, HttpTransportBuilder, RestTransport, TransportConfig};
pub use signer::{RequestSigner, SignedRequest};
