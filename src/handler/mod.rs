//! The `/maildequate` command workflow.
//!
//! # Workflow
//!
//! For each [`Invocation`] the [`CommandHandler`]:
//!
//! 1. picks the local address: the `address` option, else the invoker's guild member username,
//!    else their global username. With none of these it replies [`Reply::IdentityUnresolved`].
//! 2. checks `forward-to` is a valid email address ([`Reply::InvalidForwardTarget`]).
//! 3. checks `<address>@<domain>` is a valid email address ([`Reply::InvalidAddress`]).
//! 4. lists the domain's records ([`Reply::LookupFailed`] on any provider error) and looks for
//!    an existing forwarding rule for the address ([`Reply::NameTaken`]).
//! 5. creates the TXT record `forward-email=<address>:<forward-to>`
//!    ([`Reply::CreateFailed`] or [`Reply::Created`]).
//!
//! No network call is made before step 4. Provider errors are logged, never shown to the user.
//!
//! Steps 4 and 5 are not atomic: two concurrent invocations for the same address can both pass
//! the collision check and both create a record.

mod model;
mod workflow;

pub use model::{Invocation, Invoker, Reply};
pub use workflow::CommandHandler;
