//! Lead-form submission: validate locally first, only then touch the network.

use log::info;

use crate::api::LeadSender;
use crate::error::LeadError;
use crate::models::lead_model::Lead;

/// Validates the lead and posts it. A validation failure never issues a
/// network call, and the lead is only borrowed so the caller keeps the
/// entered values on failure.
pub async fn submit_lead<S: LeadSender>(sender: &S, lead: &Lead) -> Result<(), LeadError> {
    lead.validate()?;
    sender.send_lead(lead).await?;
    info!("Submitted lead from {}", lead.name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::error::ApiError;

    #[derive(Default)]
    struct CountingSender {
        calls: AtomicUsize,
    }

    impl LeadSender for CountingSender {
        async fn send_lead(&self, _lead: &Lead) -> Result<(), ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[tokio::test]
    async fn invalid_lead_issues_no_network_call() {
        let sender = CountingSender::default();
        let lead = Lead::new(String::new(), "+998901234567".to_string(), None, None);

        let result = submit_lead(&sender, &lead).await;
        assert!(matches!(result, Err(LeadError::MissingField("name"))));
        assert_eq!(sender.calls.load(Ordering::SeqCst), 0);
        // entered values survive the failure
        assert_eq!(lead.phone, "+998901234567");
    }

    #[tokio::test]
    async fn valid_lead_is_sent_once() {
        let sender = CountingSender::default();
        let lead = Lead::new(
            "Aziza Karimova".to_string(),
            "+998901234567".to_string(),
            Some("@aziza".to_string()),
            None,
        );

        submit_lead(&sender, &lead).await.unwrap();
        assert_eq!(sender.calls.load(Ordering::SeqCst), 1);
    }
}
