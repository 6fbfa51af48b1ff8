use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use vantage_auth::{RouteRequirement, decode_token, page_access_guard};

fn forge_token() -> String {
    let payload = serde_json::json!({
        "role": "Logistics Manager",
        "pages": ["competition monitoring manager"],
        "iat": 1_700_000_000,
        "exp": 1_700_003_600,
    });
    format!(
        "{}.{}.{}",
        URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#),
        URL_SAFE_NO_PAD.encode(serde_json::to_vec(&payload).unwrap()),
        URL_SAFE_NO_PAD.encode(b"signature"),
    )
}

fn bench_decode(c: &mut Criterion) {
    let token = forge_token();
    c.bench_function("decode_token", |b| {
        b.iter(|| decode_token(black_box(&token)))
    });
}

fn bench_guard(c: &mut Criterion) {
    let token = forge_token();
    let claims = decode_token(&token).unwrap();
    let requirement = RouteRequirement::role("logistics manager");
    c.bench_function("page_access_guard", |b| {
        b.iter(|| page_access_guard(black_box(Some(&claims)), black_box(&requirement)))
    });
}

criterion_group!(benches, bench_decode, bench_guard);
criterion_main!(benches);
