//! `regioncart balance ...`

use std::io::Write;

use regioncart_core::{CoreError, ValidationError};
use regioncart_store::BalanceStore;

use super::signed_amount;
use crate::cli::BalanceCommand;
use crate::error::{AppError, AppResult};

pub fn run(balance: &mut BalanceStore, command: BalanceCommand, out: &mut impl Write) -> AppResult<()> {
    match command {
        BalanceCommand::Show => {}
        BalanceCommand::Set { value } => {
            if !balance.set_balance(value) {
                return Err(AppError::invalid_input(format!(
                    "balance must be a non-negative number, got {value}"
                )));
            }
        }
        BalanceCommand::Adjust { delta } => {
            if !delta.is_finite() {
                let err = ValidationError::NotFinite {
                    field: "adjustment".to_string(),
                };
                return Err(CoreError::from(err).into());
            }
            balance.adjust_balance(delta);
        }
    }

    writeln!(out, "Balance: {}", signed_amount(balance.get()))?;
    Ok(())
}
