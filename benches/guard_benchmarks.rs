use axum::body::Body;
use axum::http::{header, Request};
use criterion::{criterion_group, criterion_main, Criterion};
use nratakit::auth::{ExclusionMatcher, RouteGuard};
use nratakit::config::RouteConfig;
use std::hint::black_box;

fn bench_decide(c: &mut Criterion) {
    let guard = RouteGuard::default();

    c.bench_function("decide_auth_page_with_session", |b| {
        b.iter(|| guard.decide(black_box("/login"), black_box(true)))
    });

    c.bench_function("decide_protected_without_session", |b| {
        b.iter(|| guard.decide(black_box("/dashboard/settings"), black_box(false)))
    });

    c.bench_function("decide_other", |b| {
        b.iter(|| guard.decide(black_box("/about"), black_box(false)))
    });
}

fn bench_check_request(c: &mut Criterion) {
    let guard = RouteGuard::default();
    let req = Request::builder()
        .uri("/dashboard/settings")
        .header(
            header::COOKIE,
            "theme=dark; locale=en; better-auth.session_token=abc.def",
        )
        .body(Body::empty())
        .unwrap();

    c.bench_function("check_request_with_cookies", |b| {
        b.iter(|| guard.check(black_box(&req)))
    });
}

fn bench_exclusions(c: &mut Criterion) {
    let matcher = ExclusionMatcher::new(&RouteConfig::default().excluded).unwrap();

    c.bench_function("exclusion_hit", |b| {
        b.iter(|| matcher.is_excluded(black_box("/_next/static/chunks/app.js")))
    });

    c.bench_function("exclusion_miss", |b| {
        b.iter(|| matcher.is_excluded(black_box("/dashboard/settings")))
    });
}

criterion_group!(benches, bench_decide, bench_check_request, bench_exclusions);
criterion_main!(benches);
