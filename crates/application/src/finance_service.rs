use std::sync::Arc;

use coachdesk_core::{AccessToken, AppResult};
use coachdesk_domain::{
    FinanceSummary, ListFilter, Page, ThaiDateStyle, Transaction, format_baht, format_thai_date,
    paginate, parse_platform_date,
};
use serde::Serialize;

use crate::gateway_ports::FinanceGateway;
use crate::list_query::{ListQuery, unknown_sort_key};

const TRANSACTION_SORT_KEYS: [&str; 2] = ["amount", "createdAt"];

/// Transaction annotated with display strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionListing {
    /// Platform record.
    #[serde(flatten)]
    pub transaction: Transaction,
    /// Amount formatted in baht.
    pub amount_display: String,
    /// Creation date in the Thai short format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_display: Option<String>,
}

impl From<Transaction> for TransactionListing {
    fn from(transaction: Transaction) -> Self {
        let amount_display = format_baht(transaction.amount);
        let created_at_display = transaction
            .created_at
            .as_deref()
            .and_then(parse_platform_date)
            .map(|date| format_thai_date(date, ThaiDateStyle::Short));

        Self {
            transaction,
            amount_display,
            created_at_display,
        }
    }
}

/// Read-only finance views.
#[derive(Clone)]
pub struct FinanceService {
    finance: Arc<dyn FinanceGateway>,
}

impl FinanceService {
    /// Creates a finance service.
    #[must_use]
    pub fn new(finance: Arc<dyn FinanceGateway>) -> Self {
        Self { finance }
    }

    /// Lists one page of transactions.
    pub async fn list_transactions(
        &self,
        token: &AccessToken,
        query: &ListQuery,
    ) -> AppResult<Page<TransactionListing>> {
        let filter = transaction_filter(query)?;
        let listings = self
            .finance
            .list_transactions(token, &query.remote_filter())
            .await?
            .into_iter()
            .map(TransactionListing::from)
            .collect();

        paginate(filter.apply(listings), query.page, query.limit)
    }

    /// Returns finance totals.
    pub async fn summary(&self, token: &AccessToken) -> AppResult<FinanceSummary> {
        self.finance.finance_summary(token).await
    }
}

fn transaction_filter(query: &ListQuery) -> AppResult<ListFilter<'static, TransactionListing>> {
    let filter = ListFilter::new()
        .search(query.search_term())
        .search_in(|listing: &TransactionListing| listing.transaction.description.as_deref())
        .search_in(|listing: &TransactionListing| listing.transaction.user_name.as_deref())
        .search_in(|listing: &TransactionListing| listing.transaction.trainer_name.as_deref())
        .matching_if(
            query.status_filter(),
            |listing: &TransactionListing, status: &String| {
                listing.transaction.status.eq_ignore_ascii_case(status)
            },
        );

    let direction = query.direction;
    let filter = match query.sort.as_deref() {
        None => filter,
        Some("amount") => filter.sort_with(
            |left: &TransactionListing, right: &TransactionListing| {
                left.transaction.amount.total_cmp(&right.transaction.amount)
            },
            direction,
        ),
        Some("createdAt") => filter.sort_by_key(
            |listing: &TransactionListing| listing.transaction.created_at.clone(),
            direction,
        ),
        Some(other) => return Err(unknown_sort_key(other, &TRANSACTION_SORT_KEYS)),
    };

    Ok(filter)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;

    use coachdesk_core::{AccessToken, AppResult};
    use coachdesk_domain::{FinanceSummary, SortDirection, Transaction};

    use crate::gateway_ports::{FinanceGateway, RemoteFilter};
    use crate::list_query::ListQuery;

    use super::FinanceService;

    struct FakeFinanceGateway {
        transactions: Vec<Transaction>,
    }

    #[async_trait]
    impl FinanceGateway for FakeFinanceGateway {
        async fn list_transactions(
            &self,
            _token: &AccessToken,
            _filter: &RemoteFilter,
        ) -> AppResult<Vec<Transaction>> {
            Ok(self.transactions.clone())
        }

        async fn finance_summary(&self, _token: &AccessToken) -> AppResult<FinanceSummary> {
            Ok(FinanceSummary::default())
        }
    }

    fn transaction(amount: f64, user: &str, created_at: &str) -> Transaction {
        Transaction {
            kind: "booking".to_owned(),
            amount,
            status: "completed".to_owned(),
            user_name: Some(user.to_owned()),
            created_at: Some(created_at.to_owned()),
            ..Transaction::default()
        }
    }

    #[tokio::test]
    async fn transactions_are_sorted_and_formatted() {
        let service = FinanceService::new(Arc::new(FakeFinanceGateway {
            transactions: vec![
                transaction(1500.0, "Somchai", "2026-10-01T10:00:00Z"),
                transaction(-250.5, "Malee", "2026-10-02T10:00:00Z"),
                transaction(12_345.5, "Somsak", "2026-10-18T10:00:00Z"),
            ],
        }));
        let token = AccessToken::new("test-token").unwrap_or_else(|_| unreachable!());

        let page = service
            .list_transactions(
                &token,
                &ListQuery {
                    search: Some("som".to_owned()),
                    sort: Some("amount".to_owned()),
                    direction: SortDirection::Desc,
                    ..ListQuery::default()
                },
            )
            .await
            .unwrap_or_else(|_| unreachable!());

        let amounts: Vec<&str> = page
            .items
            .iter()
            .map(|listing| listing.amount_display.as_str())
            .collect();
        assert_eq!(amounts, vec!["฿12,345.50", "฿1,500.00"]);
        assert_eq!(
            page.items[0].created_at_display.as_deref(),
            Some("18 ต.ค. 69")
        );
    }
}
