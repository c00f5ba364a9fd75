use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fieldcount::{Bytes, Parser, Sniffer};

fn sample(rows: usize) -> String {
    let mut data = String::from("id,name,note\n");
    for i in 0..rows {
        data.push_str(&format!("{},\"Name_{}\",\"multi\nline, quoted\"\n", i, i));
    }
    data
}

fn benchmark_count_fields(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_fields");

    for size in [10, 1000, 100000].iter() {
        let data = sample(*size);

        group.bench_with_input(BenchmarkId::new("parser", size), &data, |b, data| {
            b.iter(|| {
                let parser = Parser::new(b',', b'#', Bytes::from(data.as_str()));
                black_box(parser.sum::<usize>())
            });
        });

        group.bench_with_input(BenchmarkId::new("csv_reader", size), &data, |b, data| {
            b.iter(|| {
                let mut reader = csv::ReaderBuilder::new()
                    .has_headers(false)
                    .flexible(true)
                    .from_reader(data.as_bytes());
                let mut record = csv::ByteRecord::new();
                let mut total = 0;
                while reader.read_byte_record(&mut record).unwrap() {
                    total += record.len();
                }
                black_box(total)
            });
        });
    }

    group.finish();
}

fn benchmark_sniff(c: &mut Criterion) {
    let data = sample(1000);
    let sniffer = Sniffer::csv();

    c.bench_function("sniff_default_limit", |b| {
        b.iter(|| black_box(sniffer.sniff(black_box(data.as_bytes()))));
    });
}

criterion_group!(benches, benchmark_count_fields, benchmark_sniff);
criterion_main!(benches);
