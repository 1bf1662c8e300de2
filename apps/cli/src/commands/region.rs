//! `regioncart region ...`

use std::io::Write;

use regioncart_store::{RegionStore, REGION_OPTIONS};

use crate::cli::RegionCommand;
use crate::error::{AppError, AppResult};

pub fn run(region: &mut RegionStore, command: RegionCommand, out: &mut impl Write) -> AppResult<()> {
    match command {
        RegionCommand::Show => writeln!(out, "{}", region.get())?,
        RegionCommand::Set { code } => {
            if !region.set_region(&code) {
                let allowed: Vec<&str> = REGION_OPTIONS.iter().map(|r| r.code()).collect();
                return Err(AppError::invalid_input(format!(
                    "unknown region '{}', expected one of {}",
                    code,
                    allowed.join(", ")
                )));
            }
            writeln!(out, "Region set to {}", region.get())?;
        }
        RegionCommand::List => {
            let selected = region.get();
            for option in REGION_OPTIONS {
                let marker = if option == selected { '*' } else { ' ' };
                writeln!(out, "{marker} {option}")?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use regioncart_core::Region;
    use regioncart_store::MemoryStorage;
    use std::sync::Arc;

    #[test]
    fn test_set_and_list() {
        let mut region = RegionStore::load(Arc::new(MemoryStorage::new()));
        let mut out = Vec::new();

        run(&mut region, RegionCommand::Set { code: "ca".to_string() }, &mut out).unwrap();
        run(&mut region, RegionCommand::List, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Region set to CA\n  US\n  EU\n  IN\n* CA\n  AU\n  XX\n"
        );
        assert_eq!(region.get(), Region::Ca);
    }

    #[test]
    fn test_unknown_region() {
        let mut region = RegionStore::load(Arc::new(MemoryStorage::new()));
        let mut out = Vec::new();

        let err = run(&mut region, RegionCommand::Set { code: "MARS".to_string() }, &mut out)
            .unwrap_err();
        assert!(err.to_string().contains("US, EU, IN, CA, AU, XX"));
        assert_eq!(region.get(), Region::Us);
    }
}
