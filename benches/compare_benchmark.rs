//! Benchmarks for the comparison engine and changelog assembly.

use api_compat::model::{
    ApiKind, ApiSpec, DataType, Endpoint, Parameter, RequestBody, Response,
};
use api_compat::{build_changelog, DiffEngine, EngineConfig};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

fn synthetic_spec(endpoints: usize, revision: usize) -> ApiSpec {
    let mut spec = ApiSpec::new("bench", format!("{revision}.0.0"), ApiKind::Rest);
    for i in 0..endpoints {
        // Every 7th endpoint differs between revisions, every 50th disappears.
        if revision > 1 && i % 50 == 0 {
            continue;
        }
        let changed = revision > 1 && i % 7 == 0;
        let mut endpoint = Endpoint::http("GET", &format!("/resources{i}/{{id}}"))
            .with_parameter(Parameter::path("id", DataType::String).required(true))
            .with_parameter(
                Parameter::query("limit", if changed { DataType::String } else { DataType::Integer })
                    .required(changed),
            )
            .with_response(Response::json("200", format!("Resource{i}")))
            .with_response(Response::json("404", "Error"));
        if i % 3 == 0 {
            endpoint = endpoint.with_request_body(RequestBody::json("Payload").required(changed));
        }
        spec.endpoints.push(endpoint.deprecated(changed && i % 2 == 0));
    }
    spec
}

fn bench_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare");
    for size in [50usize, 500] {
        let old = synthetic_spec(size, 1);
        let new = synthetic_spec(size, 2);

        let sequential = DiffEngine::new().with_config(EngineConfig::sequential());
        group.bench_with_input(BenchmarkId::new("sequential", size), &size, |b, _| {
            b.iter(|| sequential.compare(black_box(&old), black_box(&new)));
        });

        let parallel = DiffEngine::new().with_config(EngineConfig::eager());
        group.bench_with_input(BenchmarkId::new("parallel", size), &size, |b, _| {
            b.iter(|| parallel.compare(black_box(&old), black_box(&new)));
        });
    }
    group.finish();
}

fn bench_identical(c: &mut Criterion) {
    let spec = synthetic_spec(500, 1);
    let copy = spec.clone();
    c.bench_function("compare_identical_500", |b| {
        b.iter(|| DiffEngine::new().compare(black_box(&spec), black_box(&copy)));
    });
}

fn bench_changelog(c: &mut Criterion) {
    let old = synthetic_spec(500, 1);
    let new = synthetic_spec(500, 2);
    c.bench_function("build_changelog_500", |b| {
        b.iter(|| build_changelog("bench", "1.0.0", "2.0.0", black_box(&old), black_box(&new)));
    });
}

criterion_group!(benches, bench_compare, bench_identical, bench_changelog);
criterion_main!(benches);
