//! `regioncart cart ...`

use std::io::Write;

use regioncart_core::ItemId;
use regioncart_store::CartStore;
use tracing::debug;

use super::write_json;
use crate::cli::CartCommand;
use crate::error::AppResult;

/// Applies a cart subcommand and prints the outcome.
pub fn run(cart: &mut CartStore, command: CartCommand, out: &mut impl Write) -> AppResult<()> {
    debug!(?command, "cart command");

    match command {
        CartCommand::Show { json: true } => write_json(out, cart.state()),
        CartCommand::Show { json: false } => show(cart, out),
        CartCommand::Set { item_id, count } => {
            cart.set_item_count(item_id, count);
            report(cart, item_id, out)
        }
        CartCommand::Add { item_id, by } => {
            cart.increment_item_count(item_id, by);
            report(cart, item_id, out)
        }
        CartCommand::Remove { item_id } => {
            cart.remove_item(item_id);
            report(cart, item_id, out)
        }
        CartCommand::Clear => {
            cart.clear();
            writeln!(out, "Cart cleared.")?;
            Ok(())
        }
    }
}

fn show(cart: &CartStore, out: &mut impl Write) -> AppResult<()> {
    let state = cart.state();
    if state.is_empty() {
        writeln!(out, "Cart is empty.")?;
        return Ok(());
    }

    for (item_id, count) in state.iter() {
        writeln!(out, "{item_id:>8}  x{count}")?;
    }
    writeln!(
        out,
        "{} item(s), {} unit(s)",
        state.len(),
        state.total_quantity()
    )?;
    Ok(())
}

fn report(cart: &CartStore, item_id: ItemId, out: &mut impl Write) -> AppResult<()> {
    match cart.count(item_id) {
        0 => writeln!(out, "Item {item_id} is not in the cart.")?,
        count => writeln!(out, "Item {item_id}: x{count}")?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use regioncart_store::{MemoryStorage, Storage};
    use std::sync::Arc;

    fn run_to_string(cart: &mut CartStore, command: CartCommand) -> String {
        let mut out = Vec::new();
        run(cart, command, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_add_set_remove() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        let mut cart = CartStore::load(Arc::clone(&storage));

        let out = run_to_string(&mut cart, CartCommand::Add { item_id: 4, by: 1.0 });
        assert_eq!(out, "Item 4: x1\n");

        let out = run_to_string(&mut cart, CartCommand::Add { item_id: 4, by: 2.9 });
        assert_eq!(out, "Item 4: x3\n");

        let out = run_to_string(&mut cart, CartCommand::Set { item_id: 9, count: 2.0 });
        assert_eq!(out, "Item 9: x2\n");

        let out = run_to_string(&mut cart, CartCommand::Remove { item_id: 4 });
        assert_eq!(out, "Item 4 is not in the cart.\n");

        assert_eq!(storage.get("cart").unwrap().as_deref(), Some(r#"{"9":2}"#));
    }

    #[test]
    fn test_show() {
        let mut cart = CartStore::load(Arc::new(MemoryStorage::new()));
        assert_eq!(
            run_to_string(&mut cart, CartCommand::Show { json: false }),
            "Cart is empty.\n"
        );

        cart.set_item_count(12, 2.0);
        cart.set_item_count(3, 1.0);
        let out = run_to_string(&mut cart, CartCommand::Show { json: false });
        assert_eq!(out, "       3  x1\n      12  x2\n2 item(s), 3 unit(s)\n");

        let out = run_to_string(&mut cart, CartCommand::Show { json: true });
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value, serde_json::json!({ "3": 1, "12": 2 }));
    }

    #[test]
    fn test_clear() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        let mut cart = CartStore::load(Arc::clone(&storage));
        cart.add_one(1);

        assert_eq!(run_to_string(&mut cart, CartCommand::Clear), "Cart cleared.\n");
        assert!(cart.state().is_empty());
        assert_eq!(storage.get("cart").unwrap(), None);
    }
}
