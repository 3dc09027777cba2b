//! Performance benchmarks for fragment rendering
//!
//! Tests render time for the detail page and admin tables at different
//! record counts.
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use medref::models::{ContactMessage, Doctor, Illness, Medicine, Severity};
use medref::render::{admin_tables, esc_html, illness_page};

/// Generate illnesses with a few symptoms, care tips and medicines each
fn generate_illnesses(count: usize) -> Vec<Illness> {
    (0..count)
        .map(|i| Illness {
            id: i as i64,
            name: format!("Condition {} & <variant>", i),
            description: "Inflammation of the joint lining causing pain.".repeat(3),
            severity: Severity::ALL[i % 3],
            symptoms_list: vec!["pain".into(), "swelling".into(), "stiffness".into()],
            care_list: vec!["rest".into(), "ice".into()],
            medicines: (0..3)
                .map(|m| Medicine {
                    name: format!("Medicine {}", m),
                    description: "Reduces pain and inflammation.".into(),
                    dosage: Some("200mg every 6 hours".into()),
                    is_otc: m % 2 == 0,
                    ..Medicine::default()
                })
                .collect(),
            ..Illness::default()
        })
        .collect()
}

fn generate_messages(count: usize) -> Vec<ContactMessage> {
    (0..count)
        .map(|i| ContactMessage {
            id: i as i64,
            name: format!("Visitor {}", i),
            email: format!("visitor{}@example.com", i),
            message: "I would like to know more about \"knee pain\" <please>.".into(),
            created_at: "2024-03-09 10:00:00".into(),
            is_read: i % 2 == 0,
        })
        .collect()
}

/// Benchmark the body-part detail page
fn bench_illness_content(c: &mut Criterion) {
    let mut group = c.benchmark_group("illness_content");
    let doctors = vec![
        Doctor {
            name: "Dr. Mensah".into(),
            specialization: "Orthopedics".into(),
            phone: Some("555-0100".into()),
            experience_years: Some(12),
            ..Doctor::default()
        };
        4
    ];

    for size in [1, 5, 25].iter() {
        let illnesses = generate_illnesses(*size);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_illnesses", size)),
            &illnesses,
            |b, illnesses| {
                b.iter(|| black_box(illness_page::illness_content(black_box(illnesses), &doctors)));
            },
        );
    }

    group.finish();
}

/// Benchmark the messages table, which also parses dates
fn bench_messages_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("messages_table");

    for size in [10, 100, 1000].iter() {
        let messages = generate_messages(*size);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_rows", size)),
            &messages,
            |b, messages| {
                b.iter(|| black_box(admin_tables::messages_table(black_box(messages))));
            },
        );
    }

    group.finish();
}

/// Benchmark escaping on clean and hostile text
fn bench_escape(c: &mut Criterion) {
    let clean = "Rest, ice, compression and elevation. ".repeat(50);
    let hostile = r#"<script>alert("x")</script> & 'quoted' "#.repeat(50);

    c.bench_function("esc_html_clean", |b| b.iter(|| esc_html(black_box(&clean))));
    c.bench_function("esc_html_hostile", |b| b.iter(|| esc_html(black_box(&hostile))));
}

criterion_group!(benches, bench_illness_content, bench_messages_table, bench_escape);
criterion_main!(benches);
