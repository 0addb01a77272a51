//! Maildequate
//!
//! A Discord bot handing out email forwarding addresses on a shared domain.
//!
//! Users invoke `/maildequate forward-to:<email> [address:<name>]`. The bot checks that no
//! existing forwarding rule already uses `<name>` (defaulting to the user's Discord username),
//! then creates a [forward email] style TXT record on the domain through the [Vercel DNS API]:
//!
//! ```text
//! forward-email=<name>:<email>
//! ```
//!
//! [forward email]: https://forwardemail.net/en/faq#how-do-i-get-started-and-set-up-email-forwarding
//! [Vercel DNS API]: https://vercel.com/docs/rest-api/endpoints/dns
//!
#![warn(clippy::pedantic)]

pub mod config;
pub mod discord;
pub mod error;
pub mod handler;
pub mod mailbox;
pub mod records;
pub mod shutdown;

pub use config::{Config, Settings, Shared};
pub use discord::new as new_discord;
pub use handler::{CommandHandler, Invocation, Invoker, Reply};
pub use mailbox::Mailbox;
pub use records::{InMemoryProvider, VercelClient};
