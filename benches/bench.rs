// Criterion benchmarks for Match Client

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use match_client::models::{MatchPayload, MatchResult, ProfileId};
use match_client::MatchClient;

fn bench_result_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("result_parsing");

    for input in ["success", "denial", "maybe"] {
        group.bench_with_input(BenchmarkId::from_parameter(input), input, |b, input| {
            b.iter(|| black_box(input).parse::<MatchResult>().is_ok());
        });
    }

    group.finish();
}

fn bench_payload_serialization(c: &mut Criterion) {
    let text = MatchPayload::new("dajkdanwhjkdnijd2i3j1jkn", MatchResult::Success);
    let numeric = MatchPayload::new(ProfileId::from(123_456_789_i64), MatchResult::Denial);

    c.bench_function("payload_to_vec_text_id", |b| {
        b.iter(|| serde_json::to_vec(black_box(&text)))
    });

    c.bench_function("payload_to_vec_numeric_id", |b| {
        b.iter(|| serde_json::to_vec(black_box(&numeric)))
    });
}

fn bench_endpoint_resolution(c: &mut Criterion) {
    let client = MatchClient::with_base_url("/api/v2/match");

    c.bench_function("endpoint_resolution", |b| {
        b.iter(|| black_box(&client).endpoint())
    });
}

criterion_group!(
    benches,
    bench_result_parsing,
    bench_payload_serialization,
    bench_endpoint_resolution
);

criterion_main!(benches);
