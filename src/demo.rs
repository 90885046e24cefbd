//! Console drivers for the `demo` and `adapters` subcommands

use crate::cart::{helpers::format_item_summary, same_instance, CartHandle, Item, ShoppingCart};
use crate::factory::{exercise_adapter, make_adapter, Framework};
use std::io::{self, Write};

/// Runs the shared cart scenario against the process-wide cart.
pub fn run<W: Write>(out: &mut W) -> io::Result<bool> {
    run_with(ShoppingCart::instance, out)
}

/// Runs the shared cart scenario, obtaining both handles from `access`.
///
/// Items 1 and 2 go in through the first handle and item 3 through the
/// second; id 2 is then removed through the second handle. The contents are
/// printed from both handles after each step. Returns whether both handles
/// refer to the same cart.
pub fn run_with<F, W>(access: F, out: &mut W) -> io::Result<bool>
where
    F: Fn() -> CartHandle,
    W: Write,
{
    let cart = access();
    let cart2 = access();

    let first = Item::new(1, "A", 3000.0);
    let second = Item::new(2, "B", 2900.0);
    let third = Item::new(3, "C", 2400.0);

    cart.add_item(first);
    cart.add_item(second);
    cart2.add_item(third);

    print_both(&cart, &cart2, out)?;

    let removed = cart2.remove_item_by_id(2);
    writeln!(out, "Removed {} item(s) with id 2", removed)?;

    print_both(&cart, &cart2, out)?;

    let same = same_instance(&cart, &cart2);
    writeln!(out, "Are both carts the same? {}", same)?;
    Ok(same)
}

fn print_both<W: Write>(cart: &CartHandle, cart2: &CartHandle, out: &mut W) -> io::Result<()> {
    writeln!(out, "Items of cart 1: {}", format_item_summary(&cart.items()))?;
    writeln!(out, "Items of cart 2: {}", format_item_summary(&cart2.items()))
}

/// Builds an adapter for each framework and runs every method against it.
pub fn run_adapters<W: Write>(frameworks: &[Framework], out: &mut W) -> io::Result<()> {
    for &framework in frameworks {
        writeln!(out, "--- {} ---", framework)?;
        let adapter = make_adapter(framework);
        for line in exercise_adapter(adapter.as_ref()) {
            writeln!(out, "{}", line)?;
        }
    }
    Ok(())
}
