use criterion::{criterion_group, criterion_main};

mod http;

criterion_group!(
    benches,
    http::codec::bench_parse_url,
    http::codec::bench_build_request,
    http::codec::bench_parse_response,
    http::codec::bench_is_complete
);
criterion_main!(benches);
