//! Discord gateway adapter.
//!
//! # Commands
//!
//! ## `/maildequate forward-to:<email> [address:<local part>]`
//!
//!   Registered when the session becomes ready, in the configured
//!   [`Config::guild_id`][crate::config::Config::guild_id] guild if set, otherwise globally.
//!
//!   Each invocation is converted to an [`Invocation`][crate::handler::Invocation] and run
//!   through the [`CommandHandler`]. The user gets exactly one channel message reply with the
//!   resulting [`Reply`][crate::handler::Reply] text.
//!
//!   E.g. invoked by `alice` in a server for `example.com`:
//!
//!   ```text
//!   /maildequate forward-to:bob@example.org
//!   ```
//!
//!   creates the TXT record `forward-email=alice:bob@example.org` on `example.com`, so that mail
//!   to `alice@example.com` is forwarded to `bob@example.org`.

mod bot;
pub mod command;

use crate::config::Config;
use crate::error::Error;
use crate::handler::CommandHandler;
pub use bot::Bot;
use serenity::all::{GatewayIntents, GuildId};
use serenity::Client;

/// Build a Discord client that answers `/maildequate` with `handler`. The session is not opened
/// until [`Client::start`] is called.
///
/// # Errors
///
/// Returns [`Error::Discord`] if the client can't be built, e.g. for a malformed bot token.
pub async fn new(config: &Config, handler: CommandHandler) -> Result<Client, Error> {
    let guild_id = config.guild_id.map(|id| GuildId::new(id.get()));
    let bot = Bot::new(handler, guild_id);
    // Slash command interactions arrive without any gateway intents.
    let client = Client::builder(&config.bot_token, GatewayIntents::empty())
        .event_handler(bot)
        .await?;
    Ok(client)
}
