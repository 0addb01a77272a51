use std::fmt;

/// A single `/maildequate` invocation, decoupled from the chat platform's event types.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    /// The required `forward-to` option.
    pub forward_to: String,
    /// The optional `address` option.
    pub address: Option<String>,
    pub invoker: Invoker,
}

/// The identity of the user who issued an [`Invocation`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invoker {
    /// Username of the guild member, when invoked inside a guild.
    pub member_username: Option<String>,
    /// Global username, when known.
    pub username: Option<String>,
}

impl Invoker {
    /// The username to derive a local address from, preferring the guild-scoped identity.
    #[must_use]
    pub fn preferred_username(&self) -> Option<&str> {
        self.member_username
            .as_deref()
            .or(self.username.as_deref())
    }
}

/// The outcome of an invocation. Every invocation produces exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    /// No `address` was given and the invoker has no username to fall back on.
    IdentityUnresolved,
    /// `forward-to` is not a valid email address.
    InvalidForwardTarget,
    /// `<address>@<domain>` would not be a valid email address.
    InvalidAddress,
    /// Listing the existing records failed.
    LookupFailed,
    /// Another forwarding rule already uses the address.
    NameTaken,
    /// Creating the forwarding record failed.
    CreateFailed,
    /// The forwarding record was created.
    Created,
}

impl Reply {
    #[must_use]
    pub fn is_success(self) -> bool {
        self == Reply::Created
    }

    #[must_use]
    pub fn content(self) -> &'static str {
        match self {
            Reply::IdentityUnresolved => "Couldn't find your username for some reason, try again?",
            Reply::InvalidForwardTarget => "That forwarding address isn't a valid email address.",
            Reply::InvalidAddress => {
                "That address wouldn't make a valid email address, try picking one with `address`."
            }
            Reply::LookupFailed => "Something went wrong, try again later.",
            Reply::NameTaken => "Unfortunately this name is taken.",
            Reply::CreateFailed => "Failed to create an email forward.",
            Reply::Created => "Email forward has been created!",
        }
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.content())
    }
}
