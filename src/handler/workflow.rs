use crate::handler::{Invocation, Reply};
use crate::mailbox::Mailbox;
use crate::records::{DynRecordProvider, ForwardRule};
use tracing::{debug, error, info, warn};

/// Provisions forwarding rules for one configured domain.
#[derive(Clone)]
pub struct CommandHandler {
    provider: DynRecordProvider,
    domain: String,
}

impl CommandHandler {
    #[must_use]
    pub fn new(provider: DynRecordProvider, domain: String) -> Self {
        CommandHandler { provider, domain }
    }

    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Run the workflow for `invocation` to completion and return the single reply to send.
    pub async fn handle(&self, invocation: &Invocation) -> Reply {
        let Some(address) = invocation
            .address
            .as_deref()
            .or_else(|| invocation.invoker.preferred_username())
        else {
            warn!("no address given and no username to derive one from");
            return Reply::IdentityUnresolved;
        };
        let forward_to = invocation.forward_to.as_str();
        info!("received request: forward={forward_to}, address={address}");

        let target = match forward_to.parse::<Mailbox>() {
            Ok(target) => target,
            Err(err) => {
                debug!("rejected forward target \"{forward_to}\": {err}");
                return Reply::InvalidForwardTarget;
            }
        };
        let mailbox = match Mailbox::from_parts(address, &self.domain) {
            Ok(mailbox) => mailbox,
            Err(err) => {
                debug!("rejected address \"{address}@{}\": {err}", self.domain);
                return Reply::InvalidAddress;
            }
        };

        let records = match self.provider.list_records(mailbox.domain()).await {
            Ok(records) => records,
            Err(err) => {
                error!("failed to list records for {}: {:?}", mailbox.domain(), err);
                return Reply::LookupFailed;
            }
        };
        if let Some(existing) = records.claimant(mailbox.local_part()) {
            info!(
                "address \"{mailbox}\" already claimed by record \"{}\"",
                existing.record.value
            );
            return Reply::NameTaken;
        }

        let rule = ForwardRule {
            address: mailbox.local_part().to_string(),
            target: target.to_string(),
        };
        match self
            .provider
            .create_txt_record(mailbox.domain(), &rule.to_string())
            .await
        {
            Ok(()) => {
                info!("created forward {mailbox} -> {target}");
                Reply::Created
            }
            Err(err) => {
                error!("failed to create record \"{rule}\": {:?}", err);
                Reply::CreateFailed
            }
        }
    }
}
