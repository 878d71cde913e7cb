use criterion::{black_box, criterion_group, criterion_main, Criterion};

use spendbook::chart::render_spend_chart;
use spendbook::domain::Category;

fn build_sample_categories(txn_count: usize) -> Vec<Category> {
    let mut categories = vec![
        Category::new("Food"),
        Category::new("Clothing"),
        Category::new("Auto"),
        Category::new("Entertainment"),
    ];

    for category in categories.iter_mut() {
        category.deposit(1_000_000.0, "opening deposit");
        for idx in 0..txn_count {
            assert!(category.withdraw(0.25 + (idx % 40) as f64, format!("purchase {idx}")));
        }
    }

    categories
}

fn bench_balances(c: &mut Criterion) {
    let categories = build_sample_categories(black_box(10_000));

    c.bench_function("balance_10k", |b| {
        b.iter(|| {
            let total: f64 = categories.iter().map(Category::balance).sum();
            black_box(total);
        })
    });
}

fn bench_spend_chart(c: &mut Criterion) {
    let categories = build_sample_categories(black_box(10_000));

    c.bench_function("spend_chart_10k", |b| {
        b.iter(|| {
            let chart = render_spend_chart(&categories).expect("chart renders");
            black_box(chart);
        })
    });
}

criterion_group!(benches, bench_balances, bench_spend_chart);
criterion_main!(benches);
