use thiserror::Error;

use crate::domain::ParseCentsError;

/// Entries of the main menu, numbered 1-7 in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CreateAccount,
    Deposit,
    Withdraw,
    ApplyForAtm,
    ApplyForCheckbook,
    ViewHistory,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::CreateAccount,
        MenuChoice::Deposit,
        MenuChoice::Withdraw,
        MenuChoice::ApplyForAtm,
        MenuChoice::ApplyForCheckbook,
        MenuChoice::ViewHistory,
        MenuChoice::Exit,
    ];

    pub fn number(&self) -> usize {
        Self::ALL
            .iter()
            .position(|choice| choice == self)
            .map_or(0, |index| index + 1)
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::CreateAccount => "Create New Account",
            MenuChoice::Deposit => "Deposit",
            MenuChoice::Withdraw => "Withdraw",
            MenuChoice::ApplyForAtm => "Apply for ATM",
            MenuChoice::ApplyForCheckbook => "Apply for Checkbook",
            MenuChoice::ViewHistory => "View Transaction History",
            MenuChoice::Exit => "Exit",
        }
    }

    /// Parse the user's reply to the menu prompt.
    pub fn parse(input: &str) -> Result<Self, InputError> {
        let number: i64 = input.trim().parse().map_err(|_| InputError::NotANumber)?;
        usize::try_from(number)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|index| Self::ALL.get(index).copied())
            .ok_or(InputError::OutOfRange(number))
    }
}

/// Malformed replies to a prompt. The loop reports them and carries on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid input. Please enter a number.")]
    NotANumber,

    #[error("Invalid choice. Please enter a number between 1 and 7.")]
    OutOfRange(i64),

    #[error("Invalid input. Please enter a numeric value for the amount.")]
    AmountNotNumeric,

    #[error("Invalid input. The amount is too large.")]
    AmountTooLarge,

    #[error("Invalid input. Amounts are limited to cents (two decimal places).")]
    AmountTooPrecise,
}

impl From<ParseCentsError> for InputError {
    fn from(err: ParseCentsError) -> Self {
        match err {
            ParseCentsError::InvalidFormat => InputError::AmountNotNumeric,
            ParseCentsError::OutOfRange => InputError::AmountTooLarge,
            ParseCentsError::TooPrecise => InputError::AmountTooPrecise,
        }
    }
}
