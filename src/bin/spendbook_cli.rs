use colored::Colorize;

use spendbook::chart::render_spend_chart;
use spendbook::domain::{Category, Displayable};
use spendbook::errors::ChartError;
use spendbook::init;

fn main() {
    init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

/// Seeds a small household budget, prints each category statement, and
/// closes with the spend chart.
fn run() -> Result<(), ChartError> {
    let mut food = Category::new("Food");
    let mut clothing = Category::new("Clothing");
    let mut auto = Category::new("Auto");

    food.deposit(900.0, "deposit");
    clothing.deposit(900.0, "deposit");
    auto.deposit(900.0, "deposit");

    food.withdraw(105.55, "groceries");
    clothing.withdraw(33.40, "t-shirts");
    auto.withdraw(20.00, "oil change");

    food.transfer_to(50.0, &mut clothing);

    for category in [&food, &clothing, &auto] {
        tracing::debug!("seeded {}", category.display_label());
        println!("{}", format!("=== {} ===", category.name()).bold());
        println!("{category}");
        println!();
    }

    let chart = render_spend_chart(&[food, clothing, auto])?;
    println!("{chart}");
    Ok(())
}
