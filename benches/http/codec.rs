use criterion::{Criterion, Throughput};
use libhttp::http::response::is_complete;
use libhttp::{Method, build_request, parse_response, parse_url};
use std::hint::black_box;

const URL: &str = "https://api.foo.com/v1/items/42?fields=name price&sort=desc#top";

fn sample_response(body_len: usize) -> Vec<u8> {
    let mut response = format!(
        "HTTP/1.1 200 OK\r\n\
         Content-Type: application/json\r\n\
         Cache-Control: no-cache\r\n\
         Server: bench\r\n\
         Content-Length: {body_len}\r\n\r\n"
    )
    .into_bytes();
    response.resize(response.len() + body_len, b'x');
    response
}

pub fn bench_parse_url(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_url");
    group.throughput(Throughput::Bytes(URL.len() as u64));
    group.bench_function("with_query_and_fragment", |b| {
        b.iter(|| parse_url(black_box(URL)))
    });
    group.finish();
}

pub fn bench_build_request(c: &mut Criterion) {
    let url = parse_url(URL).unwrap();
    let headers = [
        ("Content-Type", "application/json"),
        ("Accept", "application/json"),
        ("Content-Length", "64"),
    ];
    let body = [b'{'; 64];

    let mut group = c.benchmark_group("build_request");
    group.bench_function("post_three_headers", |b| {
        b.iter(|| build_request(Method::Post, black_box(&url), black_box(&headers), black_box(&body)))
    });
    group.finish();
}

pub fn bench_parse_response(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_response");
    for body_len in [0usize, 1024, 64 * 1024] {
        let response = sample_response(body_len);
        group.throughput(Throughput::Bytes(response.len() as u64));
        group.bench_function(format!("body_{body_len}"), |b| {
            b.iter(|| parse_response(black_box(&response)))
        });
    }
    group.finish();
}

pub fn bench_is_complete(c: &mut Criterion) {
    let response = sample_response(4096);
    let partial = &response[..response.len() - 1];

    let mut group = c.benchmark_group("is_complete");
    group.bench_function("complete", |b| b.iter(|| is_complete(black_box(&response))));
    group.bench_function("partial", |b| b.iter(|| is_complete(black_box(partial))));
    group.finish();
}
