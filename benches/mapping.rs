//! Benchmarks for record ↔ graph mapping.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use hs_rdf::io::{self, Syntax};
use hs_rdf::mapping::{parse, serialize};
use hs_rdf::model::{Creator, ExtendedMetadata, ResourceMetadata};
use hs_rdf::Mapper;

fn sample() -> ResourceMetadata {
    let mut resource = ResourceMetadata::new("Logan River water temperature");
    resource.subjects = (0..20).map(|i| format!("keyword {i}")).collect();
    resource.creators = (1..=10).map(|i| Creator::new(format!("Creator {i}"), i)).collect();
    resource.extended_metadata = (0..20)
        .map(|i| ExtendedMetadata::new(format!("key{i}"), format!("value{i}")))
        .collect();
    resource.set_abstract(Some("Hourly water temperature readings.".into()));
    resource
}

fn bench_serialize(c: &mut Criterion) {
    let resource = sample();
    c.bench_function("serialize_resource", |bench| {
        bench.iter(|| black_box(serialize(&resource).unwrap()))
    });
}

fn bench_parse(c: &mut Criterion) {
    let graph = serialize(&sample()).unwrap();
    c.bench_function("parse_resource", |bench| {
        bench.iter(|| black_box(parse::<ResourceMetadata>(&graph, None).unwrap()))
    });
}

fn bench_load_turtle(c: &mut Criterion) {
    let graph = serialize(&sample()).unwrap();
    let text = io::write_graph(&graph, Syntax::Turtle).unwrap();
    let mapper = Mapper::default();
    c.bench_function("load_turtle_resource", |bench| {
        bench.iter(|| black_box(mapper.load_str(&text, Some(Syntax::Turtle)).unwrap()))
    });
}

criterion_group!(benches, bench_serialize, bench_parse, bench_load_turtle);
criterion_main!(benches);
