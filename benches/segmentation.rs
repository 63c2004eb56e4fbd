use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use tamil_sandhi::{Analyzer, ReferenceData, WordList};

const WORDS: &[&str] = &[
    "அவன்", "வீடு", "போ", "மரம்", "கடல்", "மலை", "செய்", "படி", "நட", "கேள்", "அந்த", "கடை",
];

const LINES: &[&str] = &[
    "அவன் வீட்டுக்குப் போனான்",
    "மரத்தில் மரக்கடல் மலையில்",
    "அந்தக் கடையில் கேட்டான் படித்தான் நடந்தான்",
];

fn bench_segment_word(c: &mut Criterion) {
    let analyzer = Analyzer::new(ReferenceData::new(WordList::new(WORDS.iter().copied())));
    let mut group = c.benchmark_group("segment_word");

    for word in ["மரம்", "வீட்டுக்கு", "மரக்கடல்", "படித்தான்", "கஷ்டங்களிலிருந்து"] {
        group.bench_function(word, |b| b.iter(|| analyzer.segment_word(black_box(word))));
    }

    group.finish();
}

fn bench_analyze_line(c: &mut Criterion) {
    let analyzer = Analyzer::new(ReferenceData::new(WordList::new(WORDS.iter().copied())));
    let text = LINES.join(" ");
    let mut group = c.benchmark_group("analyze_line");
    group.throughput(Throughput::Bytes(text.len() as u64));

    group.bench_function("mixed", |b| b.iter(|| analyzer.analyze_line(black_box(&text))));

    group.finish();
}

criterion_group!(benches, bench_segment_word, bench_analyze_line);
criterion_main!(benches);
