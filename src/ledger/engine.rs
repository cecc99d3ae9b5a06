//! The ledger engine
//!
//! Holds income, the configured categories and the transaction history, and
//! applies the two recording operations. Totals are never cached: every
//! query recomputes from the stored state, so a mutation is visible to the
//! very next read.

use std::collections::VecDeque;

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, warn};

use super::events::LedgerEvent;
use super::summary::{CategoryStatus, Summary};
use crate::config::dashboard::{DashboardConfig, SeedKind, SeedTransaction};
use crate::error::{LedgerError, LedgerResult};
use crate::models::input::{validate_amount, validate_description};
use crate::models::{Category, CategoryMeta, ExpenseInput, IncomeInput, Money, Transaction};

/// In-memory budget ledger
///
/// Construct one per session and pass it around explicitly; reads take
/// `&self`, the two recording operations take `&mut self`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerEngine {
    income: Money,
    /// Configuration order is display order
    categories: Vec<Category>,
    /// Newest first
    transactions: VecDeque<Transaction>,
    revision: u64,
    pending_events: Vec<LedgerEvent>,
}

impl LedgerEngine {
    /// Create a ledger from opening income and a fixed category set
    pub fn new(income: Money, categories: Vec<Category>) -> LedgerResult<Self> {
        if income.is_negative() {
            return Err(LedgerError::Config("Opening income cannot be negative".into()));
        }

        let mut total = Money::zero();
        for (i, category) in categories.iter().enumerate() {
            category
                .validate()
                .map_err(|e| LedgerError::Config(e.to_string()))?;

            if categories[..i].iter().any(|c| c.key() == category.key()) {
                return Err(LedgerError::Config(format!(
                    "Duplicate category key: {}",
                    category.key()
                )));
            }

            total = total.checked_add(category.spent()).ok_or_else(|| {
                LedgerError::Config("Total opening expenses are out of range".into())
            })?;
        }

        Ok(Self {
            income,
            categories,
            transactions: VecDeque::new(),
            revision: 0,
            pending_events: Vec::new(),
        })
    }

    /// Build a ledger from a dashboard configuration, dating seeded history
    /// relative to now
    pub fn from_config(config: &DashboardConfig) -> LedgerResult<Self> {
        Self::from_config_at(config, Utc::now())
    }

    /// Build a ledger from a dashboard configuration, dating seeded history
    /// relative to `now`
    pub fn from_config_at(config: &DashboardConfig, now: DateTime<Utc>) -> LedgerResult<Self> {
        let income = config_amount(config.income, "income")?;

        let categories = config
            .categories
            .iter()
            .map(|c| {
                let budgeted = config_amount(c.budgeted, &format!("budget of '{}'", c.key))?;
                let spent = config_amount(c.spent, &format!("spent amount of '{}'", c.key))?;
                Ok(Category::new(c.key.clone(), budgeted)
                    .with_spent(spent)
                    .with_meta(CategoryMeta::new(c.icon.clone(), c.color.clone())))
            })
            .collect::<LedgerResult<Vec<_>>>()?;

        let mut ledger = Self::new(income, categories)?;

        let mut seeds = config
            .history
            .iter()
            .enumerate()
            .map(|(i, seed)| ledger.seed_transaction(seed, now, i + 1))
            .collect::<LedgerResult<Vec<_>>>()?;
        // Stable sort: equal timestamps keep configuration order
        seeds.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));
        ledger.transactions = seeds.into();

        debug!(
            categories = ledger.categories.len(),
            history = ledger.transactions.len(),
            "ledger constructed from configuration"
        );
        Ok(ledger)
    }

    fn seed_transaction(
        &self,
        seed: &SeedTransaction,
        now: DateTime<Utc>,
        entry: usize,
    ) -> LedgerResult<Transaction> {
        let invalid = |e: LedgerError| LedgerError::Config(format!("History entry {}: {}", entry, e));

        let amount = validate_amount(seed.amount).map_err(invalid)?;
        let description = validate_description(&seed.description).map_err(invalid)?;
        let timestamp = now
            .checked_sub_signed(Duration::days(i64::from(seed.days_ago)))
            .ok_or_else(|| {
                LedgerError::Config(format!("History entry {}: days_ago is out of range", entry))
            })?;

        match (seed.kind, seed.category.as_deref()) {
            (SeedKind::Expense, Some(key)) => {
                let index = self.category_index(key).map_err(invalid)?;
                Ok(Transaction::expense(
                    self.categories[index].key(),
                    amount,
                    description,
                    timestamp,
                ))
            }
            (SeedKind::Expense, None) => Err(LedgerError::Config(format!(
                "History entry {}: expense has no category",
                entry
            ))),
            (SeedKind::Income, None) => Ok(Transaction::income(amount, description, timestamp)),
            (SeedKind::Income, Some(_)) => Err(LedgerError::Config(format!(
                "History entry {}: income cannot have a category",
                entry
            ))),
        }
    }

    /// Record an expense against a category
    ///
    /// Checks the amount, then the description, then the category key. On
    /// any failure the ledger is left untouched.
    pub fn record_expense(&mut self, input: ExpenseInput) -> LedgerResult<Transaction> {
        let validated = self.validate_expense(&input);
        let (index, amount, description) = validated.map_err(|e| {
            warn!(category = %input.category, amount = input.amount, error = %e, "expense rejected");
            e
        })?;

        let transaction = Transaction::expense(
            self.categories[index].key(),
            amount,
            description,
            Utc::now(),
        );
        self.categories[index].add_spent(amount);
        self.transactions.push_front(transaction.clone());
        self.revision += 1;

        debug!(
            id = %transaction.id(),
            category = %self.categories[index].key(),
            amount = %amount,
            revision = self.revision,
            "expense recorded"
        );
        self.pending_events.push(LedgerEvent::ExpenseRecorded {
            revision: self.revision,
            transaction: transaction.clone(),
        });

        Ok(transaction)
    }

    fn validate_expense(&self, input: &ExpenseInput) -> LedgerResult<(usize, Money, String)> {
        let amount = validate_amount(input.amount)?;
        let description = validate_description(&input.description)?;
        let index = self.category_index(&input.category)?;

        if self.total_expenses().checked_add(amount).is_none() {
            return Err(LedgerError::invalid_amount(format!(
                "{} would overflow total expenses",
                input.amount
            )));
        }

        Ok((index, amount, description))
    }

    /// Record income from a source
    pub fn record_income(&mut self, input: IncomeInput) -> LedgerResult<Transaction> {
        let validated = self.validate_income(&input);
        let (amount, source) = validated.map_err(|e| {
            warn!(amount = input.amount, error = %e, "income rejected");
            e
        })?;

        let transaction = Transaction::income(amount, source, Utc::now());
        self.income += amount;
        self.transactions.push_front(transaction.clone());
        self.revision += 1;

        debug!(
            id = %transaction.id(),
            amount = %amount,
            revision = self.revision,
            "income recorded"
        );
        self.pending_events.push(LedgerEvent::IncomeRecorded {
            revision: self.revision,
            transaction: transaction.clone(),
        });

        Ok(transaction)
    }

    fn validate_income(&self, input: &IncomeInput) -> LedgerResult<(Money, String)> {
        let amount = validate_amount(input.amount)?;
        let source = validate_description(&input.source)?;

        if self.income.checked_add(amount).is_none() {
            return Err(LedgerError::invalid_amount(format!(
                "{} would overflow total income",
                input.amount
            )));
        }

        Ok((amount, source))
    }

    /// Income, total expenses, remaining and savings rate
    pub fn summary(&self) -> Summary {
        Summary::compute(self.income, self.total_expenses())
    }

    /// Budget position of one category
    pub fn category_status(&self, key: &str) -> LedgerResult<CategoryStatus> {
        self.category(key)
            .map(CategoryStatus::of)
            .ok_or_else(|| LedgerError::unknown_category(key))
    }

    /// Status of every category, in configuration order
    pub fn category_statuses(&self) -> Vec<CategoryStatus> {
        self.categories.iter().map(CategoryStatus::of).collect()
    }

    /// The `limit` most recent transactions, newest first
    ///
    /// A non-positive limit yields nothing; a limit past the end yields the
    /// whole history.
    pub fn recent_transactions(&self, limit: i64) -> Vec<&Transaction> {
        let limit = usize::try_from(limit).unwrap_or(0);
        self.transactions.iter().take(limit).collect()
    }

    /// Sum of every category's spent amount
    pub fn total_expenses(&self) -> Money {
        self.categories.iter().map(Category::spent).sum()
    }

    pub fn income(&self) -> Money {
        self.income
    }

    pub fn category(&self, key: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.key() == key)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Full history, newest first
    pub fn transactions(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter()
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    /// Number of successful mutations since construction
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Drain the events queued by mutations since the last call
    pub fn take_events(&mut self) -> Vec<LedgerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    fn category_index(&self, key: &str) -> LedgerResult<usize> {
        self.categories
            .iter()
            .position(|c| c.key() == key)
            .ok_or_else(|| LedgerError::unknown_category(key))
    }
}

/// Convert a configured amount, which may be zero but not negative
fn config_amount(amount: f64, what: &str) -> LedgerResult<Money> {
    match Money::from_amount(amount) {
        Some(money) if !money.is_negative() => Ok(money),
        _ => Err(LedgerError::Config(format!(
            "Invalid {}: {} (must be a non-negative number)",
            what, amount
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::dashboard::CategoryConfig;

    fn dollars(d: i64) -> Money {
        Money::from_dollars_cents(d, 0)
    }

    /// Income 5250, expenses 3847, food 800/642, housing 2000/1800
    fn dashboard() -> LedgerEngine {
        LedgerEngine::new(
            dollars(5250),
            vec![
                Category::new("housing", dollars(2000)).with_spent(dollars(1800)),
                Category::new("food", dollars(800)).with_spent(dollars(642)),
                Category::new("transportation", dollars(500)).with_spent(dollars(380)),
                Category::new("entertainment", dollars(400)).with_spent(dollars(285)),
                Category::new("healthcare", dollars(300)).with_spent(dollars(180)),
                Category::new("utilities", dollars(600)).with_spent(dollars(560)),
            ],
        )
        .unwrap()
    }

    fn empty_ledger() -> LedgerEngine {
        LedgerEngine::new(
            Money::zero(),
            vec![
                Category::new("housing", dollars(2000)),
                Category::new("food", dollars(800)),
                Category::new("fun", Money::zero()),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_scenario_pizza_palace() {
        let mut ledger = dashboard();
        assert_eq!(ledger.summary().total_expenses, dollars(3847));

        ledger
            .record_expense(ExpenseInput::new("food", 24.50, "Pizza Palace"))
            .unwrap();

        assert_eq!(ledger.category("food").unwrap().spent().cents(), 66650);
        let summary = ledger.summary();
        assert_eq!(summary.total_expenses.cents(), 387150);
        assert_eq!(summary.remaining.cents(), 137850);
        assert_eq!(summary.savings_rate, Some(26));
        assert_eq!(
            ledger.recent_transactions(1)[0].description(),
            "Pizza Palace"
        );
    }

    #[test]
    fn test_scenario_unknown_category() {
        let mut ledger = dashboard();
        let before = ledger.clone();

        let err = ledger
            .record_expense(ExpenseInput::new("unknown-category", 10.0, "x"))
            .unwrap_err();

        assert!(err.is_unknown_category());
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_scenario_housing_status() {
        let ledger = dashboard();
        let status = ledger.category_status("housing").unwrap();

        assert_eq!(status.percent_used, Some(90));
        assert_eq!(status.remaining, dollars(200));
        assert_eq!(status.budgeted, dollars(2000));
        assert_eq!(status.spent, dollars(1800));
    }

    #[test]
    fn test_category_status_unknown_key() {
        let ledger = dashboard();
        assert!(ledger.category_status("pets").unwrap_err().is_unknown_category());
    }

    #[test]
    fn test_conservation() {
        let mut ledger = empty_ledger();
        let amounts = [12.34, 800.0, 0.01, 99.99, 1500.5];
        let keys = ["food", "housing", "fun", "food", "housing"];

        for (key, amount) in keys.iter().zip(amounts) {
            ledger
                .record_expense(ExpenseInput::new(*key, amount, "purchase"))
                .unwrap();
        }

        let expected: Money = amounts.iter().map(|a| Money::from_amount(*a).unwrap()).sum();
        assert_eq!(ledger.summary().total_expenses, expected);
        assert_eq!(ledger.total_expenses(), expected);
    }

    #[test]
    fn test_additivity() {
        let mut ledger = dashboard();
        let before: Vec<Money> = ledger.categories().iter().map(Category::spent).collect();

        ledger
            .record_expense(ExpenseInput::new("transportation", 52.30, "Gas Station"))
            .unwrap();

        for (category, old) in ledger.categories().iter().zip(before) {
            if category.key() == "transportation" {
                assert_eq!(category.spent() - old, Money::from_cents(5230));
            } else {
                assert_eq!(category.spent(), old);
            }
        }
    }

    #[test]
    fn test_ordering_newest_first() {
        let mut ledger = empty_ledger();
        let mut recorded = Vec::new();

        recorded.push(ledger.record_expense(ExpenseInput::new("food", 1.0, "T1")).unwrap());
        recorded.push(ledger.record_income(IncomeInput::new("T2", 2.0)).unwrap());
        recorded.push(ledger.record_expense(ExpenseInput::new("housing", 3.0, "T3")).unwrap());

        let recent: Vec<Transaction> = ledger.recent_transactions(3).into_iter().cloned().collect();
        recorded.reverse();
        assert_eq!(recent, recorded);
    }

    #[test]
    fn test_recent_transactions_limits() {
        let mut ledger = empty_ledger();
        for i in 0..3 {
            ledger
                .record_expense(ExpenseInput::new("food", 1.0, format!("T{}", i)))
                .unwrap();
        }

        assert_eq!(ledger.recent_transactions(10).len(), 3);
        assert_eq!(ledger.recent_transactions(2).len(), 2);
        assert!(ledger.recent_transactions(0).is_empty());
        assert!(ledger.recent_transactions(-4).is_empty());
        assert_eq!(ledger.recent_transactions(1)[0].description(), "T2");
    }

    #[test]
    fn test_invalid_amounts_leave_state_unchanged() {
        let mut ledger = dashboard();
        let before = ledger.clone();

        for bad in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let err = ledger
                .record_expense(ExpenseInput::new("food", bad, "Pizza"))
                .unwrap_err();
            assert!(matches!(err, LedgerError::InvalidAmount(_)), "{}", bad);

            let err = ledger.record_income(IncomeInput::new("Salary", bad)).unwrap_err();
            assert!(matches!(err, LedgerError::InvalidAmount(_)), "{}", bad);
        }

        assert_eq!(ledger, before);
        assert!(ledger.take_events().is_empty());
    }

    #[test]
    fn test_empty_description_rejected() {
        let mut ledger = dashboard();
        let before = ledger.clone();

        assert!(matches!(
            ledger.record_expense(ExpenseInput::new("food", 5.0, "   ")),
            Err(LedgerError::EmptyDescription)
        ));
        assert!(matches!(
            ledger.record_income(IncomeInput::new("", 5.0)),
            Err(LedgerError::EmptyDescription)
        ));
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_amount_checked_before_category() {
        let mut ledger = dashboard();
        let err = ledger
            .record_expense(ExpenseInput::new("nope", -1.0, ""))
            .unwrap_err();
        assert!(matches!(err, LedgerError::InvalidAmount(_)));
    }

    #[test]
    fn test_description_is_trimmed() {
        let mut ledger = dashboard();
        let txn = ledger
            .record_expense(ExpenseInput::new("food", 3.0, "  Coffee  "))
            .unwrap();
        assert_eq!(txn.description(), "Coffee");
    }

    #[test]
    fn test_record_income() {
        let mut ledger = empty_ledger();
        assert_eq!(ledger.summary().savings_rate, None);

        let txn = ledger.record_income(IncomeInput::new("Freelance", 1000.0)).unwrap();
        assert!(txn.is_income());
        assert_eq!(txn.category(), None);
        assert_eq!(ledger.income(), dollars(1000));
        assert_eq!(ledger.summary().savings_rate, Some(100));

        ledger
            .record_expense(ExpenseInput::new("food", 250.0, "Groceries"))
            .unwrap();
        assert_eq!(ledger.summary().savings_rate, Some(75));
    }

    #[test]
    fn test_degenerate_savings_rate() {
        let ledger = empty_ledger();
        let summary = ledger.summary();
        assert_eq!(summary.income, Money::zero());
        assert_eq!(summary.savings_rate, None);
    }

    #[test]
    fn test_negative_savings_rate_when_overspent() {
        let mut ledger = empty_ledger();
        ledger.record_income(IncomeInput::new("Job", 100.0)).unwrap();
        ledger
            .record_expense(ExpenseInput::new("housing", 150.0, "Rent"))
            .unwrap();
        assert_eq!(ledger.summary().savings_rate, Some(-50));
    }

    #[test]
    fn test_zero_budget_category() {
        let mut ledger = empty_ledger();
        ledger
            .record_expense(ExpenseInput::new("fun", 20.0, "Cinema"))
            .unwrap();

        let status = ledger.category_status("fun").unwrap();
        assert_eq!(status.percent_used, None);
        assert_eq!(status.remaining, -dollars(20));
        assert!(status.is_overspent());
    }

    #[test]
    fn test_events_and_revision() {
        let mut ledger = empty_ledger();
        assert_eq!(ledger.revision(), 0);

        ledger.record_expense(ExpenseInput::new("food", 5.0, "Lunch")).unwrap();
        let _ = ledger.record_expense(ExpenseInput::new("pets", 5.0, "Food"));
        ledger.record_income(IncomeInput::new("Gift", 20.0)).unwrap();
        assert_eq!(ledger.revision(), 2);

        let events = ledger.take_events();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], LedgerEvent::ExpenseRecorded { revision: 1, .. }));
        assert!(events[0].invalidation().affects_category("food"));
        assert!(matches!(events[1], LedgerEvent::IncomeRecorded { revision: 2, .. }));
        assert_eq!(events[1].invalidation().category, None);

        assert!(ledger.take_events().is_empty());
    }

    #[test]
    fn test_text_and_numeric_amounts_record_the_same() {
        for (text, number) in [("24.999", 24.999), ("0.009", 0.009), ("$1,800.50", 1800.5)] {
            let mut from_text = empty_ledger();
            let mut from_number = empty_ledger();

            let a = from_text
                .record_expense(ExpenseInput::from_form("food", text, "Lunch").unwrap())
                .unwrap();
            let b = from_number
                .record_expense(ExpenseInput::new("food", number, "Lunch"))
                .unwrap();

            assert_eq!(a.amount(), b.amount(), "{}", text);
            assert_eq!(from_text.total_expenses(), from_number.total_expenses());
        }
    }

    #[test]
    fn test_overflow_rejected() {
        let mut ledger = empty_ledger();
        ledger
            .record_expense(ExpenseInput::new("food", 9.0e16, "Big"))
            .unwrap();
        let before = ledger.clone();

        let err = ledger
            .record_expense(ExpenseInput::new("housing", 9.0e16, "Bigger"))
            .unwrap_err();
        assert!(matches!(err, LedgerError::InvalidAmount(_)));
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_new_rejects_bad_categories() {
        let dup = LedgerEngine::new(
            Money::zero(),
            vec![
                Category::new("food", dollars(1)),
                Category::new("food", dollars(2)),
            ],
        );
        assert!(matches!(dup, Err(LedgerError::Config(_))));

        let negative = LedgerEngine::new(Money::zero(), vec![Category::new("food", dollars(-1))]);
        assert!(matches!(negative, Err(LedgerError::Config(_))));

        assert!(LedgerEngine::new(dollars(-1), Vec::new()).is_err());
    }

    #[test]
    fn test_from_default_config() {
        let now = Utc::now();
        let ledger = LedgerEngine::from_config_at(&DashboardConfig::default(), now).unwrap();

        let summary = ledger.summary();
        assert_eq!(summary.income, dollars(5250));
        assert_eq!(summary.total_expenses, dollars(3847));
        assert_eq!(summary.remaining, dollars(1403));
        assert_eq!(summary.savings_rate, Some(27));

        let history: Vec<&str> = ledger.transactions().map(Transaction::description).collect();
        assert_eq!(
            history,
            ["Pizza Palace", "Rent Payment", "Salary Deposit", "Gas Station"]
        );
        assert_eq!(ledger.transactions().next().unwrap().timestamp(), now);
        assert_eq!(ledger.category("food").unwrap().meta().icon, "🍕");
        assert_eq!(ledger.revision(), 0);
    }

    #[test]
    fn test_seeded_history_sorted_newest_first() {
        let mut config = DashboardConfig::with_categories(vec![CategoryConfig::new("food", 100.0, 0.0)]);
        config.history = vec![
            SeedTransaction::expense("food", 1.0, "old", 5),
            SeedTransaction::income(2.0, "new", 0),
            SeedTransaction::expense("food", 3.0, "middle", 2),
        ];

        let ledger = LedgerEngine::from_config(&config).unwrap();
        let history: Vec<&str> = ledger.transactions().map(Transaction::description).collect();
        assert_eq!(history, ["new", "middle", "old"]);
    }

    #[test]
    fn test_seeds_do_not_change_totals() {
        let mut config = DashboardConfig::with_categories(vec![CategoryConfig::new("food", 100.0, 10.0)]);
        config.history = vec![SeedTransaction::expense("food", 10.0, "Groceries", 1)];

        let ledger = LedgerEngine::from_config(&config).unwrap();
        assert_eq!(ledger.total_expenses(), dollars(10));
        assert_eq!(ledger.transaction_count(), 1);
    }

    #[test]
    fn test_config_rejects_invalid_history() {
        let base = DashboardConfig::with_categories(vec![CategoryConfig::new("food", 100.0, 0.0)]);

        let cases = vec![
            SeedTransaction::expense("pets", 1.0, "Kibble", 0),
            SeedTransaction::expense("food", 0.0, "Nothing", 0),
            SeedTransaction::expense("food", 1.0, " ", 0),
            SeedTransaction {
                category: None,
                ..SeedTransaction::expense("food", 1.0, "Orphan", 0)
            },
            SeedTransaction {
                category: Some("food".into()),
                ..SeedTransaction::income(1.0, "Odd", 0)
            },
        ];

        for seed in cases {
            let mut config = base.clone();
            config.history = vec![seed.clone()];
            assert!(
                matches!(LedgerEngine::from_config(&config), Err(LedgerError::Config(_))),
                "{:?}",
                seed
            );
        }
    }

    #[test]
    fn test_config_rejects_negative_amounts() {
        let config = DashboardConfig::with_categories(vec![CategoryConfig::new("food", -1.0, 0.0)]);
        assert!(LedgerEngine::from_config(&config).is_err());

        let mut config = DashboardConfig::with_categories(Vec::new());
        config.income = f64::NAN;
        assert!(LedgerEngine::from_config(&config).is_err());
    }
}
