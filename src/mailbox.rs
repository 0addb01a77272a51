//! Syntactic validation of email addresses.
//!
//! Only the [RFC-5322][RFC-5322] `addr-spec` form is accepted, with a `dot-atom` local part and a
//! dotted hostname domain. Display names (`Bob <bob@example.com>`), quoted local parts and domain
//! literals are rejected: a forwarding rule is stored as `forward-email=<local>:<target>`, so
//! neither side may smuggle in the `:` that quoting would allow.
//!
//! [RFC-5322]: https://www.rfc-editor.org/rfc/rfc5322#section-3.4.1

use std::fmt;
use std::str::FromStr;

const MAX_ADDRESS_LEN: usize = 254;
const MAX_LOCAL_PART_LEN: usize = 64;
const MAX_LABEL_LEN: usize = 63;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MailboxError {
    #[error("address is longer than 254 characters")]
    TooLong,
    #[error("address has no '@'")]
    MissingAt,
    #[error("local part is empty")]
    EmptyLocalPart,
    #[error("local part is longer than 64 characters")]
    LocalPartTooLong,
    #[error("local part contains {0:?}")]
    InvalidLocalChar(char),
    #[error("local part has a misplaced '.'")]
    MisplacedDot,
    #[error("domain is empty")]
    EmptyDomain,
    #[error("domain has no '.'")]
    UndottedDomain,
    #[error("domain label \"{0}\" is invalid")]
    InvalidLabel(String),
}

/// A syntactically valid email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Mailbox {
    local_part: String,
    domain: String,
}

impl Mailbox {
    /// Validate `<local_part>@<domain>` as a whole.
    ///
    /// # Errors
    ///
    /// Returns the first [`MailboxError`] the combined address violates.
    pub fn from_parts(local_part: &str, domain: &str) -> Result<Self, MailboxError> {
        format!("{local_part}@{domain}").parse()
    }

    #[must_use]
    pub fn local_part(&self) -> &str {
        &self.local_part
    }

    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }
}

impl FromStr for Mailbox {
    type Err = MailboxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() > MAX_ADDRESS_LEN {
            return Err(MailboxError::TooLong);
        }
        // The domain can't contain '@', so the last one splits the address.
        let (local_part, domain) = s.rsplit_once('@').ok_or(MailboxError::MissingAt)?;
        validate_local_part(local_part)?;
        validate_domain(domain)?;
        Ok(Mailbox {
            local_part: local_part.to_string(),
            domain: domain.to_string(),
        })
    }
}

impl fmt::Display for Mailbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.local_part, self.domain)
    }
}

/// Validate a domain name the way it must appear on the right hand side of an address.
///
/// # Errors
///
/// Returns [`MailboxError::EmptyDomain`], [`MailboxError::UndottedDomain`] or
/// [`MailboxError::InvalidLabel`].
pub fn validate_domain(domain: &str) -> Result<(), MailboxError> {
    if domain.is_empty() {
        return Err(MailboxError::EmptyDomain);
    }
    if !domain.contains('.') {
        return Err(MailboxError::UndottedDomain);
    }
    for label in domain.split('.') {
        if !valid_label(label) {
            return Err(MailboxError::InvalidLabel(label.to_string()));
        }
    }
    Ok(())
}

fn validate_local_part(local_part: &str) -> Result<(), MailboxError> {
    if local_part.is_empty() {
        return Err(MailboxError::EmptyLocalPart);
    }
    if local_part.len() > MAX_LOCAL_PART_LEN {
        return Err(MailboxError::LocalPartTooLong);
    }
    if let Some(c) = local_part.chars().find(|c| *c != '.' && !is_atext(*c)) {
        return Err(MailboxError::InvalidLocalChar(c));
    }
    if local_part.split('.').any(str::is_empty) {
        return Err(MailboxError::MisplacedDot);
    }
    Ok(())
}

// RFC-5322 section 3.2.3.
fn is_atext(c: char) -> bool {
    c.is_ascii_alphanumeric() || "!#$%&'*+-/=?^_`{|}~".contains(c)
}

fn valid_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= MAX_LABEL_LEN
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_addresses() {
        for addr in [
            "bob@example.com",
            "first.last@mail.example.co.uk",
            "a+tag@x.io",
            "o'hara@example.com",
            "under_score@sub-domain.example.org",
            "x@a.b",
        ] {
            assert!(addr.parse::<Mailbox>().is_ok(), "{addr} should be valid");
        }
    }

    #[test]
    fn rejects_missing_at_or_undotted_domain() {
        assert_eq!(
            "not-an-email".parse::<Mailbox>(),
            Err(MailboxError::MissingAt)
        );
        assert_eq!(
            "bob@localhost".parse::<Mailbox>(),
            Err(MailboxError::UndottedDomain)
        );
        assert_eq!("bob@".parse::<Mailbox>(), Err(MailboxError::EmptyDomain));
    }

    #[test]
    fn rejects_bad_local_parts() {
        assert_eq!(
            "@example.com".parse::<Mailbox>(),
            Err(MailboxError::EmptyLocalPart)
        );
        assert_eq!(
            ".bob@example.com".parse::<Mailbox>(),
            Err(MailboxError::MisplacedDot)
        );
        assert_eq!(
            "bo..b@example.com".parse::<Mailbox>(),
            Err(MailboxError::MisplacedDot)
        );
        assert_eq!(
            "bob smith@example.com".parse::<Mailbox>(),
            Err(MailboxError::InvalidLocalChar(' '))
        );
        assert_eq!(
            "bob\n@example.com".parse::<Mailbox>(),
            Err(MailboxError::InvalidLocalChar('\n'))
        );
        assert_eq!(
            "a:b@example.com".parse::<Mailbox>(),
            Err(MailboxError::InvalidLocalChar(':'))
        );
        assert_eq!(
            format!("{}@example.com", "a".repeat(65)).parse::<Mailbox>(),
            Err(MailboxError::LocalPartTooLong)
        );
    }

    #[test]
    fn rejects_bad_domains() {
        assert!(matches!(
            "bob@example..com".parse::<Mailbox>(),
            Err(MailboxError::InvalidLabel(_))
        ));
        assert!(matches!(
            "bob@-example.com".parse::<Mailbox>(),
            Err(MailboxError::InvalidLabel(_))
        ));
        assert!(matches!(
            "bob@exa_mple.com".parse::<Mailbox>(),
            Err(MailboxError::InvalidLabel(_))
        ));
        assert!(matches!(
            "bob@a@example.com".parse::<Mailbox>(),
            Err(MailboxError::InvalidLocalChar('@'))
        ));
    }

    #[test]
    fn from_parts_validates_combined_address() {
        let mailbox = Mailbox::from_parts("alice", "example.com").unwrap();
        assert_eq!(mailbox.local_part(), "alice");
        assert_eq!(mailbox.domain(), "example.com");
        assert_eq!(mailbox.to_string(), "alice@example.com");

        assert_eq!(
            Mailbox::from_parts("alice#0001 ", "example.com"),
            Err(MailboxError::InvalidLocalChar(' '))
        );
    }
}
