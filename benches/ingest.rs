// benches/ingest.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use minalytics::{
    ingest::{self, parse_production_csv},
    store::Store,
    updates::extract_paragraphs,
};

fn sample_csv(rows: usize) -> String {
    let mut s = String::from("date,ore_extracted,ore_processed,ore_transported\n");
    for i in 0..rows {
        s.push_str(&format!("2024-{:02}-{:02},{}.5,{},{}\n", i % 12 + 1, i % 28 + 1, 100 + i, 90 + i, 80 + i));
    }
    s
}

fn sample_html(paragraphs: usize) -> String {
    let mut s = String::from("<html><head><title>Latest News</title></head><body>");
    for i in 0..paragraphs {
        s.push_str(&format!(
            "<div class=\"post\"><h2>Notice {i}</h2><p class=\"excerpt\">Ministry of Mines &amp; Mining Development notice <a href=\"/n/{i}\">{i}</a>.</p></div>"
        ));
    }
    s.push_str("</body></html>");
    s
}

fn bench_ingest(c: &mut Criterion) {
    let csv = sample_csv(5_000);
    let html = sample_html(500);

    c.bench_function("parse_production_csv_5k", |b| {
        b.iter(|| {
            let upload = parse_production_csv(black_box(&csv)).unwrap();
            black_box(upload.len())
        })
    });

    c.bench_function("ingest_in_memory_5k", |b| {
        let upload = parse_production_csv(&csv).unwrap();
        b.iter(|| {
            let store = Store::open_in_memory().unwrap();
            black_box(ingest::ingest(&store, black_box(&upload)).unwrap())
        })
    });

    c.bench_function("extract_paragraphs_500", |b| {
        b.iter(|| {
            let ps = extract_paragraphs(black_box(&html));
            black_box(ps.len())
        })
    });
}

criterion_group!(benches, bench_ingest);
criterion_main!(benches);
