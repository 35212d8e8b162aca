use anyhow::Result;
use chrono::{Local, NaiveDate};

use crate::ledger::Ledger;
use crate::models::{parse_amount, parse_date, Kind, LedgerError, Transaction, DEFAULT_CATEGORIES};
use crate::summary::{self, Summary};
use crate::ui::util::ListCursor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Dashboard,
    Transactions,
    Add,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[Self::Dashboard, Self::Transactions, Self::Add]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dashboard => write!(f, "Dashboard"),
            Self::Transactions => write!(f, "Transactions"),
            Self::Add => write!(f, "Add"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Filter,
    Editing,
    Confirm,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Filter => write!(f, "FILTER"),
            Self::Editing => write!(f, "EDIT"),
            Self::Confirm => write!(f, "CONFIRM"),
        }
    }
}

/// Pending action that requires user confirmation.
#[derive(Debug, Clone)]
pub(crate) enum PendingAction {
    DeleteTransaction { id: i64, label: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AddField {
    Amount,
    Category,
    Kind,
    Date,
}

impl AddField {
    pub(crate) fn all() -> &'static [AddField] {
        &[Self::Amount, Self::Category, Self::Kind, Self::Date]
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            Self::Amount => "Amount",
            Self::Category => "Category",
            Self::Kind => "Type",
            Self::Date => "Date",
        }
    }
}

/// Raw text of the add form. Nothing here is validated until submit.
#[derive(Debug, Clone)]
pub(crate) struct AddForm {
    pub(crate) amount: String,
    pub(crate) category: String,
    pub(crate) kind: Kind,
    pub(crate) date: String,
    pub(crate) field: usize,
    suggestion: Option<usize>,
}

impl AddForm {
    pub(crate) fn new(today: NaiveDate) -> Self {
        Self {
            amount: String::new(),
            category: String::new(),
            kind: Kind::Expense,
            date: today.format(crate::models::DAY_FORMAT).to_string(),
            field: 0,
            suggestion: None,
        }
    }

    pub(crate) fn current_field(&self) -> AddField {
        AddField::all()
            .get(self.field)
            .copied()
            .unwrap_or(AddField::Amount)
    }

    pub(crate) fn next_field(&mut self) {
        self.field = (self.field + 1) % AddField::all().len();
    }

    pub(crate) fn prev_field(&mut self) {
        let len = AddField::all().len();
        self.field = (self.field + len - 1) % len;
    }

    /// Text buffer behind the focused field, if it is a text field.
    pub(crate) fn focused_text(&mut self) -> Option<&mut String> {
        match self.current_field() {
            AddField::Amount => Some(&mut self.amount),
            AddField::Category => Some(&mut self.category),
            AddField::Date => Some(&mut self.date),
            AddField::Kind => None,
        }
    }

    pub(crate) fn push_char(&mut self, c: char) {
        if self.current_field() == AddField::Kind {
            match c {
                'e' | 'E' => self.kind = Kind::Expense,
                'i' | 'I' => self.kind = Kind::Income,
                ' ' => self.kind = self.kind.toggle(),
                _ => {}
            }
            return;
        }
        if let Some(buf) = self.focused_text() {
            buf.push(c);
        }
    }

    pub(crate) fn pop_char(&mut self) {
        if let Some(buf) = self.focused_text() {
            buf.pop();
        }
    }

    /// Left/Right on the category field walks the suggestion list; on the
    /// type field it flips the kind.
    pub(crate) fn cycle(&mut self, delta: i32) {
        match self.current_field() {
            AddField::Kind => self.kind = self.kind.toggle(),
            AddField::Category => {
                let len = DEFAULT_CATEGORIES.len();
                let next = match self.suggestion {
                    None if delta >= 0 => 0,
                    None => len - 1,
                    Some(i) if delta >= 0 => (i + 1) % len,
                    Some(i) => (i + len - 1) % len,
                };
                self.suggestion = Some(next);
                self.category = DEFAULT_CATEGORIES[next].to_string();
            }
            _ => {}
        }
    }

    /// Clear amount and category after a successful submit. Type and date
    /// stay, so a run of similar entries is quick to type.
    pub(crate) fn reset_after_submit(&mut self) {
        self.amount.clear();
        self.category.clear();
        self.suggestion = None;
        self.field = 0;
    }
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) filter_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,
    pub(crate) today: NaiveDate,

    // Dashboard
    pub(crate) summary: Summary,

    // Transactions
    pub(crate) transactions: Vec<Transaction>,
    pub(crate) cursor: ListCursor,
    pub(crate) transaction_count: usize,

    // Add form
    pub(crate) form: AddForm,

    // Confirmation
    pub(crate) pending_action: Option<PendingAction>,
    pub(crate) confirm_message: String,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new() -> Self {
        let today = Local::now().date_naive();

        Self {
            running: true,
            screen: Screen::Dashboard,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            filter_input: String::new(),
            status_message: String::new(),
            show_help: false,
            today,

            summary: Summary::default(),

            transactions: Vec::new(),
            cursor: ListCursor::default(),
            transaction_count: 0,

            form: AddForm::new(today),

            pending_action: None,
            confirm_message: String::new(),

            visible_rows: 20,
        }
    }

    /// Take a fresh snapshot of the ledger: totals plus the (filtered)
    /// transaction list.
    pub(crate) fn refresh(&mut self, ledger: &Ledger) {
        self.summary = ledger.summary(self.today);
        self.transaction_count = ledger.len();
        self.transactions = if self.filter_input.is_empty() {
            ledger.transactions().to_vec()
        } else {
            summary::filter_by_category(ledger.transactions(), &self.filter_input)
                .into_iter()
                .cloned()
                .collect()
        };
        self.cursor.clamp(self.transactions.len());
    }

    pub(crate) fn selected_transaction(&self) -> Option<&Transaction> {
        self.transactions.get(self.cursor.index)
    }

    /// Validate the add form and record it.
    ///
    /// Validation problems become a status message and the form keeps its
    /// text for correction. Storage errors propagate.
    pub(crate) fn submit_form(&mut self, ledger: &mut Ledger) -> Result<()> {
        if self.form.category.trim().is_empty() {
            self.set_status("Please enter a category");
            return Ok(());
        }

        let parsed = parse_amount(&self.form.amount).and_then(|amount| {
            let date = parse_date(&self.form.date)?;
            Ok((amount, date))
        });
        let (amount, date) = match parsed {
            Ok(v) => v,
            Err(e) => {
                self.set_status(format!("Error: {e}"));
                return Ok(());
            }
        };

        let category = self.form.category.trim().to_string();
        match ledger.add(amount, &category, self.form.kind.as_str(), Some(date)) {
            Ok(id) => {
                let added = ledger.get(id).map(|t| t.to_string()).unwrap_or_default();
                self.form.reset_after_submit();
                self.refresh(ledger);
                self.set_status(format!("Added #{id}: {added}"));
                Ok(())
            }
            Err(e) => match e.downcast_ref::<LedgerError>() {
                Some(invalid) => {
                    self.set_status(format!("Error: {invalid}"));
                    Ok(())
                }
                None => Err(e),
            },
        }
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}
