use crate::error::Error;
use crate::records::{DnsRecord, Record, RecordProvider, RecordSet};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

/// A process-local record provider. Records are lost when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryProvider {
    records: RwLock<HashMap<String, Vec<Record>>>,
    next_id: AtomicU64,
}

impl InMemoryProvider {
    /// Create a provider already holding TXT records with the given values for `domain`.
    #[must_use]
    pub fn with_txt_records<I, S>(domain: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut provider = Self::default();
        let records: Vec<Record> = values
            .into_iter()
            .map(|v| provider.new_record(DnsRecord::apex_txt(v.into())))
            .collect();
        provider.records.get_mut().insert(domain.to_string(), records);
        provider
    }

    fn new_record(&self, record: DnsRecord) -> Record {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        Record {
            record,
            id: format!("rec_{id}"),
            slug: String::new(),
            creator: String::new(),
            created: None,
            updated: None,
            created_at: None,
            updated_at: None,
        }
    }
}

#[async_trait::async_trait]
impl RecordProvider for InMemoryProvider {
    async fn list_records(&self, domain: &str) -> Result<RecordSet, Error> {
        let records = self
            .records
            .read()
            .await
            .get(domain)
            .map_or(Vec::default(), Clone::clone);
        Ok(RecordSet { records })
    }

    async fn create_txt_record(&self, domain: &str, value: &str) -> Result<(), Error> {
        let record = self.new_record(DnsRecord::apex_txt(value.to_string()));
        self.records
            .write()
            .await
            .entry(domain.to_string())
            .or_default()
            .push(record);
        Ok(())
    }
}
