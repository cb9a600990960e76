use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

use crate::model::OrderId;

/// Generates order ids of the form `<prefix>_<unix-millis>_<sequence>`.
///
/// The sequence alone keeps ids unique within the process; the timestamp keeps
/// them from repeating across restarts.
#[derive(Debug)]
pub struct OrderIdGenerator {
    prefix: String,
    sequence: AtomicU64,
}

impl OrderIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            sequence: AtomicU64::new(1),
        }
    }

    pub fn next_id(&self) -> OrderId {
        let sequence = self.sequence.fetch_add(1, Ordering::SeqCst);
        let millis = Utc::now().timestamp_millis();
        OrderId::from(format!("{}_{}_{}", self.prefix, millis, sequence))
    }
}

impl Default for OrderIdGenerator {
    fn default() -> Self {
        Self::new("order")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique_and_prefixed() {
        let ids = OrderIdGenerator::new("web");
        let generated: HashSet<String> = (0..100).map(|_| ids.next_id().to_string()).collect();

        assert_eq!(generated.len(), 100);
        assert!(generated.iter().all(|id| id.starts_with("web_")));
    }

    #[test]
    fn test_id_format() {
        let id = OrderIdGenerator::default().next_id().to_string();
        let parts: Vec<&str> = id.split('_').collect();

        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "order");
        assert!(parts[1].parse::<i64>().is_ok());
        assert_eq!(parts[2], "1");
    }
}
