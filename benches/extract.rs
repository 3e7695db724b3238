// benches/extract.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use chip_scrape::specs::faq;
use chip_scrape::titles::Title;

/// Synthetic bn1-style guide: one line per chip, the hot path for the
/// single-line entry patterns.
fn bn1_guide(entries: usize) -> String {
    let mut doc = String::new();
    for i in 1..=entries {
        doc.push_str(&format!(
            "{:03}  Chip{}    None   {}     {}   ABCDE\n",
            i,
            i,
            10 + i,
            1 + (i % 5)
        ));
    }
    doc
}

/// Synthetic bn6-style guide: multi-line entries with slash-separated
/// fields, the hot path for the block patterns.
fn bn6_guide(entries: usize) -> String {
    let mut doc = String::new();
    for i in 1..=entries {
        doc.push_str(&format!(
            "{:03}. Chip{}\nCode: A B C / Rarity: * / Element: None\nDamage: {} / MB: {}\n\n",
            i,
            i,
            10 + i,
            6 + (i % 40)
        ));
    }
    doc
}

fn bench_extract(c: &mut Criterion) {
    let bn1 = bn1_guide(200);
    let bn6 = bn6_guide(200);

    c.bench_function("extract_bn1_lines", |b| {
        b.iter(|| {
            let chips = faq::extract(Title::Bn1, black_box(&bn1)).unwrap();
            black_box(chips.len())
        })
    });

    c.bench_function("extract_bn6_blocks", |b| {
        b.iter(|| {
            let chips = faq::extract(Title::Bn6, black_box(&bn6)).unwrap();
            black_box(chips.len())
        })
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
