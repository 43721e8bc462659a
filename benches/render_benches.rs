use criterion::Criterion;
use sqcfg::Config;

criterion::criterion_group!(benches, render_header, parse_header);
criterion::criterion_main!(benches);

fn render_header(bencher: &mut Criterion) {
    let config = Config::sandboxed();

    bencher.bench_function("render_header", |b| {
        b.iter(|| {
            let header = config.to_header();
            assert!(!header.is_empty());
        });
    });
}

fn parse_header(bencher: &mut Criterion) {
    let text = Config::sandboxed().to_header();

    bencher.bench_function("parse_header", |b| {
        b.iter(|| {
            let config = Config::parse_header(&text).unwrap();
            assert!(!config.is_empty());
        });
    });
}
