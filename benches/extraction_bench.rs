use amenity_mentions::{
    matcher::partial_ratio, ExtractionConfig, FuzzyMatcher, MentionExtractor, SlidingWindowMatcher,
    DEFAULT_AMENITIES,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const SHORT_REVIEW: &str = "There is a cafe, there is a kid, the playground is broken";
const LONG_REVIEW: &str = "We arrived early in the morning after a long drive through the hills and \
    found that the parking was free and close to the entrance which made unloading the car with two \
    tired children and a very excited dog much easier than expected. The toilets were clean, the \
    gift shop sold local honey and the cafe had a shaded terrace overlooking the playgrounds.";

fn bench_extract(c: &mut Criterion) {
    let extractor = MentionExtractor::new(DEFAULT_AMENITIES, ExtractionConfig::default())
        .expect("Default extractor should build");

    let mut group = c.benchmark_group("extract");
    for (name, review) in [("short", SHORT_REVIEW), ("long", LONG_REVIEW)] {
        group.throughput(Throughput::Bytes(review.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), review, |b, review| {
            b.iter(|| extractor.extract(black_box(review)))
        });
    }
    group.finish();
}

// WHY: the sliding window dominates cost for terms that never match exactly
fn bench_fuzzy_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("fuzzy_scan");
    for term in ["parking", "playground", "convenience store"] {
        group.bench_with_input(BenchmarkId::from_parameter(term), term, |b, term| {
            b.iter(|| SlidingWindowMatcher.best_match(black_box(term), black_box(LONG_REVIEW), 85))
        });
    }
    group.finish();
}

fn bench_partial_ratio(c: &mut Criterion) {
    c.bench_function("partial_ratio_window", |b| {
        b.iter(|| partial_ratio(black_box("playground"), black_box("play groun")))
    });
}

criterion_group!(benches, bench_extract, bench_fuzzy_scan, bench_partial_ratio);
criterion_main!(benches);
