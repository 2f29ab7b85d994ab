use criterion::{black_box, criterion_group, criterion_main, Criterion};
use html::{tag, text, Element, TagNode};

/// A table with `rows` rows of three cells each
fn build_table(rows: usize) -> TagNode {
    (0..rows).fold(tag("table").class("data"), |table, i| {
        let row = (0..3).fold(tag("tr").id(format!("row-{i}")), |row, j| {
            row.child(html::tag!("td", text(format!("<{i}:{j}> & more"))))
        });
        table.child(row)
    })
}

fn bench_serialize(c: &mut Criterion) {
    let page: Element = build_table(1000).into();

    c.bench_function("to_html 1000 rows", |b| b.iter(|| black_box(&page).to_html()));
    c.bench_function("deep_copy 1000 rows", |b| {
        b.iter(|| black_box(&page).deep_copy())
    });
}

criterion_group!(benches, bench_serialize);
criterion_main!(benches);
