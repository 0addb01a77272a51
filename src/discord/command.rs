use crate::handler::{Invocation, Invoker};
use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption};

pub const NAME: &str = "maildequate";
pub const FORWARD_TO: &str = "forward-to";
pub const ADDRESS: &str = "address";

/// The `/maildequate` application command definition.
pub(crate) fn definition() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Get a cool email address")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                FORWARD_TO,
                "the email this should forward to",
            )
            .required(true),
        )
        .add_option(CreateCommandOption::new(
            CommandOptionType::String,
            ADDRESS,
            "the address you want (defaults to your username)",
        ))
}

/// Build an [`Invocation`] from `(name, string value)` option pairs, matched by name.
///
/// A missing `forward-to` becomes the empty string, which the handler rejects as invalid.
pub(crate) fn invocation<'a>(
    options: impl IntoIterator<Item = (&'a str, Option<&'a str>)>,
    invoker: Invoker,
) -> Invocation {
    let mut invocation = Invocation {
        invoker,
        ..Invocation::default()
    };
    for (name, value) in options {
        match (name, value) {
            (FORWARD_TO, Some(value)) => invocation.forward_to = value.to_string(),
            (ADDRESS, Some(value)) => invocation.address = Some(value.to_string()),
            _ => tracing::debug!("ignoring option \"{name}\""),
        }
    }
    invocation
}

/// An [`Invoker`] from the guild member's and the global username, treating empty names as
/// absent.
pub(crate) fn invoker(member_username: Option<&str>, username: &str) -> Invoker {
    let present = |name: &str| (!name.is_empty()).then(|| name.to_string());
    Invoker {
        member_username: member_username.and_then(present),
        username: present(username),
    }
}
