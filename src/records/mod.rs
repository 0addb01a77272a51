//! DNS record providers.
//!
//! Supports a generic interface for listing a domain's records and creating the TXT records
//! that encode email forwarding rules.
//!
//! Two implementations are provided, [`vercel::VercelClient`] and [`memory::InMemoryProvider`].
//! The former talks to the [Vercel DNS API]. The latter keeps records in process memory and is
//! intended for tests and local experimentation.
//!
//! # Forwarding rules
//!
//! Each rule is one TXT record on the zone apex whose value has the form
//!
//! ```text
//! forward-email=<local address>:<forward target>
//! ```
//!
//! This is the format mail forwarding services read, and existing records use it, so it must
//! not change. See [`ForwardRule`].
//!
//! [Vercel DNS API]: https://vercel.com/docs/rest-api/endpoints/dns

use crate::error::Error;
use std::sync::Arc;

pub mod memory;
mod model;
pub mod vercel;

pub use memory::InMemoryProvider;
pub use model::{DnsRecord, ForwardRule, Record, RecordSet, RecordType, FORWARD_PREFIX};
pub use vercel::VercelClient;

/// `DynRecordProvider` is a type alias for a [`RecordProvider`] shared by every concurrently
/// handled command through an [`Arc`].
#[allow(clippy::module_name_repetitions)]
pub type DynRecordProvider = Arc<dyn RecordProvider + Send + Sync>;

/// An async trait describing the two DNS provider operations the command handler needs.
///
/// Implementations must be safe for concurrent use. Neither operation is retried, and there is
/// no atomicity between a [`list_records`][RecordProvider::list_records] and a later
/// [`create_txt_record`][RecordProvider::create_txt_record].
#[async_trait::async_trait]
pub trait RecordProvider {
    /// List the records of `domain`.
    async fn list_records(&self, domain: &str) -> Result<RecordSet, Error>;

    /// Create a TXT record with `value` on the apex of `domain`.
    async fn create_txt_record(&self, domain: &str, value: &str) -> Result<(), Error>;
}
