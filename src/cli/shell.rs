//! Interactive menu shell
//!
//! Reads menu choices and field values line by line, calls into the
//! [`Ledger`], and prints the results. Validation errors are reported and
//! the menu is shown again; only I/O failures end the loop early.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::display::{self, DisplayOptions};
use crate::error::{LedgerError, LedgerResult};
use crate::ledger::Ledger;
use crate::models::{EntryDate, Money, MoneyParseError, RecordKind};
use crate::services::PeriodService;

/// An entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    SetBudget,
    AddIncome,
    AddExpense,
    ViewIncomes,
    ViewExpenses,
    MonthlySummary,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 7] = [
        Self::SetBudget,
        Self::AddIncome,
        Self::AddExpense,
        Self::ViewIncomes,
        Self::ViewExpenses,
        Self::MonthlySummary,
        Self::Exit,
    ];

    /// Parse the number typed at the menu prompt
    pub fn parse(input: &str) -> Option<Self> {
        let index: usize = input.trim().parse().ok()?;
        index.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::SetBudget => "Set Monthly Budget",
            Self::AddIncome => "Add Income",
            Self::AddExpense => "Add Expense",
            Self::ViewIncomes => "View All Incomes",
            Self::ViewExpenses => "View All Expenses",
            Self::MonthlySummary => "Monthly Summary",
            Self::Exit => "Exit",
        }
    }
}

/// Whether the menu loop keeps going after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// The interactive shell, generic over its input and output streams
pub struct Shell<'a, R, W> {
    ledger: &'a mut Ledger,
    options: DisplayOptions,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(ledger: &'a mut Ledger, options: DisplayOptions, input: R, output: W) -> Self {
        Self {
            ledger,
            options,
            input,
            output,
        }
    }

    /// Run the menu loop until the user exits or input ends
    pub fn run(&mut self) -> LedgerResult<()> {
        loop {
            self.print_menu()?;

            let Some(choice) = self.prompt("Choose an option (1-7): ")? else {
                break;
            };

            let Some(choice) = MenuChoice::parse(&choice) else {
                writeln!(self.output, "Invalid choice. Please select 1-7.")?;
                continue;
            };

            debug!(?choice, "menu choice");
            match self.dispatch(choice) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(e) if e.is_validation() => writeln!(self.output, "Error: {}", e)?,
                Err(e) => return Err(e),
            }
        }

        writeln!(self.output, "Exiting the tracker. Goodbye!")?;
        self.output.flush()?;
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> LedgerResult<Flow> {
        match choice {
            MenuChoice::SetBudget => self.set_budget(),
            MenuChoice::AddIncome => self.add_record(RecordKind::Income),
            MenuChoice::AddExpense => self.add_record(RecordKind::Expense),
            MenuChoice::ViewIncomes => self.view_records(RecordKind::Income),
            MenuChoice::ViewExpenses => self.view_records(RecordKind::Expense),
            MenuChoice::MonthlySummary => self.monthly_summary(),
            MenuChoice::Exit => Ok(Flow::Exit),
        }
    }

    fn print_menu(&mut self) -> LedgerResult<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Personal Finance Tracker Menu:")?;
        for (i, choice) in MenuChoice::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, choice.label())?;
        }
        Ok(())
    }

    fn set_budget(&mut self) -> LedgerResult<Flow> {
        let Some(input) = self.prompt("Enter monthly budget: ")? else {
            return Ok(Flow::Exit);
        };
        let amount = match Money::parse(&input) {
            Ok(amount) => amount,
            Err(e) => {
                writeln!(self.output, "{}", invalid_amount(&e, "Please enter a number."))?;
                return Ok(Flow::Continue);
            }
        };

        self.ledger.set_budget(amount)?;
        writeln!(
            self.output,
            "Monthly budget set to {}",
            self.options.money(amount)
        )?;
        Ok(Flow::Continue)
    }

    fn add_record(&mut self, kind: RecordKind) -> LedgerResult<Flow> {
        let noun = kind.label().to_lowercase();

        let Some(input) = self.prompt(&format!("Enter {} amount: ", noun))? else {
            return Ok(Flow::Exit);
        };
        let amount = match Money::parse(&input) {
            Ok(amount) => amount,
            Err(e) => {
                writeln!(self.output, "{}", invalid_amount(&e, "Please enter a valid amount."))?;
                return Ok(Flow::Continue);
            }
        };

        let Some(description) = self.prompt(&format!("Enter {} description: ", noun))? else {
            return Ok(Flow::Exit);
        };
        let Some(date) = self.prompt("Enter date (YYYY-MM-DD) or press Enter for today: ")? else {
            return Ok(Flow::Exit);
        };
        let date = EntryDate::from_input(Some(&date))?;

        let record = self.ledger.add(kind, amount, &description, date)?;
        let message = display::format_record_added(kind, record, &self.options);
        writeln!(self.output, "{}", message)?;
        Ok(Flow::Continue)
    }

    fn view_records(&mut self, kind: RecordKind) -> LedgerResult<Flow> {
        let listing = display::format_record_list(kind, self.ledger.records(kind), &self.options);
        write!(self.output, "{}", listing)?;
        Ok(Flow::Continue)
    }

    fn monthly_summary(&mut self) -> LedgerResult<Flow> {
        let Some(year) =
            self.prompt("Enter year (e.g., 2023) or press Enter for current year: ")?
        else {
            return Ok(Flow::Exit);
        };
        let Some(month) =
            self.prompt("Enter month (1-12) or press Enter for current month: ")?
        else {
            return Ok(Flow::Exit);
        };

        let period = PeriodService::new(self.ledger.clock()).parse_year_month(&year, &month)?;
        let summary = self.ledger.summary_for(period)?;
        write!(
            self.output,
            "{}",
            display::format_monthly_summary(&summary, &self.options)
        )?;
        Ok(Flow::Continue)
    }

    /// Print a prompt and read one trimmed line; `None` at end of input
    fn prompt(&mut self, text: &str) -> LedgerResult<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| LedgerError::Io(format!("Failed to read input: {}", e)))?;
        if read == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }
}

/// Message for an amount that could not be parsed
fn invalid_amount(err: &MoneyParseError, hint: &str) -> String {
    match err {
        MoneyParseError::InvalidFormat(_) => format!("Invalid input. {}", hint),
        MoneyParseError::TooPrecise(_) | MoneyParseError::TooLarge(_) => {
            format!("Invalid input. {}", err)
        }
    }
}
