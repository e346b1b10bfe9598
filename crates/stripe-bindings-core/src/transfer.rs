//! Transfer objects and the parameters for the `/transfers` endpoints.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::currency::Currency;
use crate::expandable::Expandable;
use crate::form::{Form, FormParams};
use crate::ids::{RecipientId, TransferId};
use crate::list::Object;
use crate::params::{ListParams, Params, RangeQuery};

/// Lifecycle state of a transfer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransferStatus {
    /// Funds have arrived.
    Paid,
    /// Not yet submitted to the bank.
    Pending,
    /// Submitted, not yet arrived.
    InTransit,
    /// Canceled before submission.
    Canceled,
    /// The bank rejected the transfer.
    Failed,
    /// A status this library does not know.
    Other(String),
}

impl TransferStatus {
    /// The wire name of this status.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Paid => "paid",
            Self::Pending => "pending",
            Self::InTransit => "in_transit",
            Self::Canceled => "canceled",
            Self::Failed => "failed",
            Self::Other(status) => status,
        }
    }
}

impl From<String> for TransferStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "paid" => Self::Paid,
            "pending" => Self::Pending,
            "in_transit" => Self::InTransit,
            "canceled" => Self::Canceled,
            "failed" => Self::Failed,
            _ => Self::Other(value),
        }
    }
}

impl From<TransferStatus> for String {
    fn from(status: TransferStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for TransferStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a transfer sends money.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferType {
    /// A debit card.
    Card,
    /// A bank account.
    BankAccount,
    /// Another Stripe account.
    StripeAccount,
    /// A type this library does not know.
    #[serde(other)]
    Unknown,
}

/// A Stripe transfer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transfer {
    /// Transfer ID.
    pub id: TransferId,
    /// Object type (always "transfer").
    #[serde(default)]
    pub object: String,
    /// Whether the object exists in live mode.
    #[serde(default)]
    pub livemode: bool,
    /// Amount in the smallest currency unit.
    #[serde(default)]
    pub amount: i64,
    /// Amount reversed so far.
    #[serde(default)]
    pub amount_reversed: i64,
    /// Currency of the transfer.
    pub currency: Currency,
    /// Creation time.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub created: Option<DateTime<Utc>>,
    /// Expected arrival date.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub date: Option<DateTime<Utc>>,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Text shown on the recipient's statement.
    #[serde(default)]
    pub statement_description: Option<String>,
    /// Current status.
    #[serde(default)]
    pub status: Option<TransferStatus>,
    /// Destination type.
    #[serde(default, rename = "type")]
    pub transfer_type: Option<TransferType>,
    /// Recipient the transfer was sent to.
    #[serde(default)]
    pub recipient: Option<Expandable<serde_json::Value>>,
    /// Destination account or card ID.
    #[serde(default)]
    pub destination: Option<Expandable<serde_json::Value>>,
    /// Balance transaction describing the impact on the balance.
    #[serde(default)]
    pub balance_transaction: Option<Expandable<serde_json::Value>>,
    /// Machine-readable failure reason.
    #[serde(default)]
    pub failure_code: Option<String>,
    /// Human-readable failure reason.
    #[serde(default)]
    pub failure_message: Option<String>,
    /// Metadata attached to the transfer.
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}

impl Object for Transfer {
    fn object_id(&self) -> &str {
        self.id.as_str()
    }
}

/// Parameters for `POST /transfers`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferParams {
    /// Amount in the smallest currency unit.
    pub amount: i64,
    /// Currency of the transfer.
    pub currency: Currency,
    /// Recipient to pay, or `"self"` for the account's own bank account.
    pub recipient: String,
    /// Bank account to pay out to. Takes precedence over `card`.
    pub bank_account: Option<String>,
    /// Debit card to pay out to.
    pub card: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
    /// Text shown on the recipient's statement.
    pub statement_description: Option<String>,
    /// Common request parameters.
    pub params: Params,
}

impl TransferParams {
    /// Transfer `amount` of `currency` to `recipient`.
    #[must_use]
    pub fn new(amount: i64, currency: Currency, recipient: &RecipientId) -> Self {
        Self {
            amount,
            currency,
            recipient: recipient.to_string(),
            bank_account: None,
            card: None,
            description: None,
            statement_description: None,
            params: Params::default(),
        }
    }
}

impl FormParams for TransferParams {
    fn append_to(&self, form: &mut Form) {
        form.add("amount", self.amount.to_string());
        form.add("currency", self.currency.as_str());
        form.add("recipient", self.recipient.as_str());

        match (self.bank_account.as_deref(), self.card.as_deref()) {
            (Some(bank), _) if !bank.is_empty() => form.add("bank_account", bank),
            (_, Some(card)) if !card.is_empty() => form.add("card", card),
            _ => {}
        }

        form.add_non_empty("description", self.description.as_deref().unwrap_or_default());
        form.add_non_empty(
            "statement_description",
            self.statement_description.as_deref().unwrap_or_default(),
        );

        self.params.append_to(form);
    }
}

/// Parameters for `POST /transfers/:id`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferUpdateParams {
    /// New description. Not sent when empty.
    pub description: Option<String>,
    /// Common request parameters.
    pub params: Params,
}

impl FormParams for TransferUpdateParams {
    fn append_to(&self, form: &mut Form) {
        form.add_non_empty("description", self.description.as_deref().unwrap_or_default());
        self.params.append_to(form);
    }
}

/// Parameters for `GET /transfers`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferListParams {
    /// Filter on creation time.
    pub created: Option<RangeQuery>,
    /// Filter on expected arrival date.
    pub date: Option<RangeQuery>,
    /// Only return transfers to this recipient.
    pub recipient: Option<String>,
    /// Only return transfers in this status.
    pub status: Option<TransferStatus>,
    /// Pagination and common parameters.
    pub list: ListParams,
}

impl FormParams for TransferListParams {
    fn append_to(&self, form: &mut Form) {
        if let Some(created) = &self.created {
            created.append_to("created", form);
        }
        if let Some(date) = &self.date {
            date.append_to("date", form);
        }
        form.add_non_empty("recipient", self.recipient.as_deref().unwrap_or_default());
        form.add_opt("status", self.status.as_ref());
        self.list.append_to(form);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn base_params() -> TransferParams {
        let recipient = RecipientId::from_str("rp_123").unwrap();
        TransferParams::new(1000, Currency::Usd, &recipient)
    }

    #[test]
    fn create_sends_required_fields_first() {
        let form = base_params().to_form();
        assert_eq!(form.encode(), "amount=1000&currency=usd&recipient=rp_123");
    }

    #[test]
    fn bank_account_wins_over_card() {
        let params = TransferParams {
            bank_account: Some("ba_1".to_string()),
            card: Some("card_1".to_string()),
            ..base_params()
        };
        let form = params.to_form();

        assert_eq!(form.get("bank_account"), Some("ba_1"));
        assert_eq!(form.get("card"), None);
    }

    #[test]
    fn card_is_used_without_bank_account() {
        let params = TransferParams {
            bank_account: Some(String::new()),
            card: Some("card_1".to_string()),
            ..base_params()
        };
        let form = params.to_form();

        assert_eq!(form.get("bank_account"), None);
        assert_eq!(form.get("card"), Some("card_1"));
    }

    #[test]
    fn empty_descriptions_are_not_sent() {
        let params = TransferParams {
            description: Some(String::new()),
            statement_description: Some("PAYOUT".to_string()),
            ..base_params()
        };
        let form = params.to_form();

        assert_eq!(form.get("description"), None);
        assert_eq!(form.get("statement_description"), Some("PAYOUT"));
    }

    #[test]
    fn list_params_write_filters() {
        let params = TransferListParams {
            created: Some(RangeQuery::exact(1_400_000_000)),
            date: Some(RangeQuery::exact(0)),
            recipient: Some("rp_123".to_string()),
            status: Some(TransferStatus::Pending),
            list: ListParams::default(),
        };
        let form = params.to_form();

        assert_eq!(form.get("created"), Some("1400000000"));
        assert_eq!(form.get("date"), None);
        assert_eq!(form.get("recipient"), Some("rp_123"));
        assert_eq!(form.get("status"), Some("pending"));
    }

    #[test]
    fn decodes_transfer() {
        let transfer: Transfer = serde_json::from_value(serde_json::json!({
            "id": "tr_123",
            "object": "transfer",
            "amount": 1000,
            "currency": "usd",
            "created": 1_400_000_000,
            "date": 1_400_086_400,
            "status": "in_transit",
            "type": "bank_account",
            "recipient": "rp_123",
            "metadata": {}
        }))
        .unwrap();

        assert_eq!(transfer.status, Some(TransferStatus::InTransit));
        assert_eq!(transfer.transfer_type, Some(TransferType::BankAccount));
        assert_eq!(transfer.object_id(), "tr_123");
        assert_eq!(transfer.recipient.as_ref().map(Expandable::id), Some("rp_123"));
    }

    #[test]
    fn decodes_expanded_balance_transaction() {
        let transfer: Transfer = serde_json::from_value(serde_json::json!({
            "id": "tr_123",
            "currency": "usd",
            "destination": "acct_1",
            "balance_transaction": {
                "id": "txn_1",
                "object": "balance_transaction",
                "amount": -1000,
                "fee": 25
            }
        }))
        .unwrap();

        let txn = transfer.balance_transaction.unwrap();
        assert_eq!(txn.id(), "txn_1");
        assert_eq!(txn.as_object().and_then(|t| t["fee"].as_i64()), Some(25));
        assert_eq!(transfer.destination.as_ref().map(Expandable::id), Some("acct_1"));
    }

    #[test]
    fn unknown_status_is_preserved() {
        let status: TransferStatus = serde_json::from_str("\"reversed\"").unwrap();
        assert_eq!(status, TransferStatus::Other("reversed".to_string()));
    }
}
