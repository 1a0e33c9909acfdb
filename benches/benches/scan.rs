use benches::synthetic_source;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use engine::SourceFile;

fn bench_matcher(c: &mut Criterion) {
    let rules = rules::compile().expect("compile rules");
    let source = synthetic_source(200);
    c.bench_function("find_matches", |b| {
        b.iter(|| engine::find_matches(black_box(&source), black_box(&rules)))
    });
}

fn bench_scan_source(c: &mut Criterion) {
    let rules = rules::compile().expect("compile rules");
    let indicators = rules::indicators().expect("compile indicators");
    let file = SourceFile::new("bench.js", synthetic_source(200));
    c.bench_function("scan_source", |b| {
        b.iter(|| {
            engine::scan_source(black_box(&file), black_box(&rules), black_box(&indicators))
        })
    });
}

fn bench_scan_files(c: &mut Criterion) {
    let rules = rules::compile().expect("compile rules");
    let indicators = rules::indicators().expect("compile indicators");
    let files: Vec<SourceFile> = (0..16)
        .map(|i| SourceFile::new(format!("bench{i}.js"), synthetic_source(50)))
        .collect();
    c.bench_function("scan_files_parallel", |b| {
        b.iter(|| {
            engine::scan_files(black_box(&files), black_box(&rules), black_box(&indicators))
        })
    });
}

criterion_group!(scan, bench_matcher, bench_scan_source, bench_scan_files);
criterion_main!(scan);
