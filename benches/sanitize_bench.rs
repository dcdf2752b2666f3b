use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sql_sanitizer::sanitize;

fn bench_sanitize_simple(c: &mut Criterion) {
    let test_cases = vec![
        "SELECT name FROM Customers",
        "SELECT * FROM Orders o, OrderDetails od WHERE quantity > 25",
        "INSERT INTO Logs (message) VALUES ('test')",
        "UPDATE Products SET price = 100 WHERE id = 1",
        "DELETE FROM Cache WHERE expires < NOW()",
        "CREATE TABLE foo (id INT)",
        "SELECT 0xFF, 1.5e-3, -.25 /* c */ -- tail\nFROM t",
    ];

    c.bench_function("sanitize_mixed_statements", |b| {
        b.iter(|| {
            for case in &test_cases {
                black_box(sanitize(black_box(case)));
            }
        })
    });
}

fn bench_sanitize_individual(c: &mut Criterion) {
    let mut group = c.benchmark_group("sanitize_individual");

    let test_cases = vec![
        ("select_from", "SELECT name FROM Customers"),
        (
            "select_comma_from_list",
            "SELECT * FROM Orders o, OrderDetails od WHERE quantity > 25",
        ),
        ("insert_into", "INSERT INTO Logs (message) VALUES ('test')"),
        ("update", "UPDATE Products SET price = 100 WHERE id = 1"),
        ("delete_from", "DELETE FROM Cache WHERE expires < NOW()"),
        ("create_table", "CREATE TABLE foo (id INT)"),
        (
            "literals_and_comments",
            "SELECT 0xFF, 1.5e-3, -.25 /* c */ -- tail\nFROM t",
        ),
    ];

    for (name, input) in test_cases {
        group.bench_function(name, |b| b.iter(|| black_box(sanitize(black_box(input)))));
    }

    group.finish();
}

fn bench_sanitize_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("sanitize_input_sizes");

    let base = "SELECT * FROM t WHERE a = 1 AND b = 'x'";
    let sizes = vec![10, 50, 100, 500, 1000, 5000];

    for size in sizes {
        let mut input = base.to_string();
        while input.len() < size {
            input.push_str(" AND c = 'y'");
        }
        input.truncate(size);

        group.bench_function(format!("size_{size}"), |b| {
            b.iter(|| black_box(sanitize(black_box(&input))))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_sanitize_simple,
    bench_sanitize_individual,
    bench_sanitize_sizes
);
criterion_main!(benches);
