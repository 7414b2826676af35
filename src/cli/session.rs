use std::io::{BufRead, Write};
use std::ops::ControlFlow;

use anyhow::Result;
use tracing::debug;

use crate::application::Ledger;
use crate::domain::{parse_cents, BankService, TransactionKind};
use crate::io::Console;

use super::{InputError, MenuChoice};

const TITLE: &str = "Bank Management System";

/// Whether the loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// The interactive read-eval-print loop over a ledger.
///
/// Every user mistake is reported as a single line and the menu is shown
/// again. Only console I/O failures end the loop with an error.
pub struct Session<R, W> {
    ledger: Ledger,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(ledger: Ledger, input: R, output: W) -> Self {
        Self {
            ledger,
            console: Console::new(input, output),
        }
    }

    /// Hand back the ledger and the output sink.
    pub fn into_parts(self) -> (Ledger, W) {
        let (_, output) = self.console.into_parts();
        (self.ledger, output)
    }

    /// Run until the user picks Exit or the input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.show_menu()?;

            let Some(reply) = self.console.prompt("Enter choice (1-7): ")? else {
                debug!("input closed");
                return self.farewell();
            };

            let flow = match MenuChoice::parse(&reply) {
                Ok(choice) => self.dispatch(choice)?,
                Err(err) => {
                    self.console.say(err)?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                return self.farewell();
            }
        }
    }

    fn show_menu(&mut self) -> Result<()> {
        self.console.say("")?;
        self.console.say(TITLE)?;
        for choice in MenuChoice::ALL {
            self.console
                .say(format!("{}. {}", choice.number(), choice.label()))?;
        }
        Ok(())
    }

    fn farewell(&mut self) -> Result<()> {
        self.console.say(format!("Exiting {}. Goodbye!", TITLE))
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        debug!(?choice, "menu choice");
        match choice {
            MenuChoice::CreateAccount => self.create_account(),
            MenuChoice::Deposit => self.transact(TransactionKind::Deposit),
            MenuChoice::Withdraw => self.transact(TransactionKind::Withdrawal),
            MenuChoice::ApplyForAtm => self.apply_for(BankService::Atm),
            MenuChoice::ApplyForCheckbook => self.apply_for(BankService::Checkbook),
            MenuChoice::ViewHistory => self.view_history(),
            MenuChoice::Exit => Ok(Flow::Exit),
        }
    }

    fn create_account(&mut self) -> Result<Flow> {
        let Some(name) = self.console.prompt("Enter customer name: ")? else {
            return Ok(Flow::Exit);
        };

        let id = match self.ledger.create_account(name) {
            Ok(customer) => customer.id.clone(),
            Err(err) => {
                self.console.say(err)?;
                return Ok(Flow::Continue);
            }
        };
        self.console.say("Account created successfully.")?;
        self.console.say(format!("Customer ID: {}", id))?;
        Ok(Flow::Continue)
    }

    /// Ask for a customer ID and check it exists.
    /// `Break` carries how the loop should go on when no customer was found.
    fn read_customer_id(&mut self) -> Result<ControlFlow<Flow, String>> {
        let Some(reply) = self.console.prompt("Enter customer ID: ")? else {
            return Ok(ControlFlow::Break(Flow::Exit));
        };

        let id = reply.trim().to_string();
        if let Err(err) = self.ledger.customer(&id) {
            self.console.say(err)?;
            return Ok(ControlFlow::Break(Flow::Continue));
        }
        Ok(ControlFlow::Continue(id))
    }

    fn transact(&mut self, kind: TransactionKind) -> Result<Flow> {
        let id = match self.read_customer_id()? {
            ControlFlow::Continue(id) => id,
            ControlFlow::Break(flow) => return Ok(flow),
        };

        let Some(reply) = self.console.prompt("Enter amount: ")? else {
            return Ok(Flow::Exit);
        };
        let amount_cents = match parse_cents(&reply) {
            Ok(cents) => cents,
            Err(err) => {
                self.console.say(InputError::from(err))?;
                return Ok(Flow::Continue);
            }
        };

        let result = match kind {
            TransactionKind::Deposit => self.ledger.deposit(&id, amount_cents),
            TransactionKind::Withdrawal => self.ledger.withdraw(&id, amount_cents),
        };

        match result {
            Ok(tx) => {
                let currency = &self.ledger.config().currency;
                let done = format!("{}: {}", past_tense(kind), currency.format(tx.amount_cents));
                let balance = format!("Current Balance: {}", currency.format(tx.balance_after));
                self.console.say(done)?;
                self.console.say(balance)?;
            }
            Err(err) => self.console.say(err)?,
        }
        Ok(Flow::Continue)
    }

    fn apply_for(&mut self, service: BankService) -> Result<Flow> {
        let id = match self.read_customer_id()? {
            ControlFlow::Continue(id) => id,
            ControlFlow::Break(flow) => return Ok(flow),
        };

        match self.ledger.apply_for(&id, service) {
            Ok(_) => self.console.say(format!(
                "{} application submitted. It will be processed shortly.",
                service.title()
            ))?,
            Err(err) => self.console.say(err)?,
        }
        Ok(Flow::Continue)
    }

    fn view_history(&mut self) -> Result<Flow> {
        let id = match self.read_customer_id()? {
            ControlFlow::Continue(id) => id,
            ControlFlow::Break(flow) => return Ok(flow),
        };

        let currency = &self.ledger.config().currency;
        let lines: Vec<String> = match self.ledger.history(&id) {
            Ok(history) => history
                .iter()
                .map(|tx| {
                    format!(
                        "[{}] {}: {}",
                        tx.timestamp(),
                        tx.description(),
                        currency.format(tx.amount_cents)
                    )
                })
                .collect(),
            Err(err) => {
                self.console.say(err)?;
                return Ok(Flow::Continue);
            }
        };

        self.console.say("------ Transaction History ------")?;
        if lines.is_empty() {
            self.console.say("No transactions recorded.")?;
        }
        for line in lines {
            self.console.say(line)?;
        }
        Ok(Flow::Continue)
    }
}

fn past_tense(kind: TransactionKind) -> &'static str {
    match kind {
        TransactionKind::Deposit => "Deposited",
        TransactionKind::Withdrawal => "Withdrawn",
    }
}
