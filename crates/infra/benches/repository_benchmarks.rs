use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use catalog_core::{SystemClock, UuidGenerator};
use catalog_infra::InMemoryProductRepository;
use catalog_products::{CreateProduct, ProductRepository, ProductService};
use std::sync::Arc;

fn populated_service(count: usize) -> (ProductService<Arc<InMemoryProductRepository>>, Vec<String>) {
    let service = ProductService::with_system_defaults(Arc::new(InMemoryProductRepository::new()));
    let ids = (0..count)
        .map(|i| {
            service
                .create_product(CreateProduct {
                    name: format!("Product {i}"),
                    price: 1.0 + i as f64,
                    description: "bench".to_string(),
                })
                .unwrap()
                .id()
                .to_string()
        })
        .collect();
    (service, ids)
}

fn bench_create_product(c: &mut Criterion) {
    let mut group = c.benchmark_group("create_product");
    group.throughput(Throughput::Elements(1));

    group.bench_function("create_into_growing_store", |b| {
        let service = ProductService::new(
            Arc::new(InMemoryProductRepository::new()),
            Arc::new(SystemClock),
            Arc::new(UuidGenerator),
        );
        b.iter(|| {
            let product = service
                .create_product(CreateProduct {
                    name: "Widget".to_string(),
                    price: 9.99,
                    description: "x".to_string(),
                })
                .unwrap();
            black_box(product);
        });
    });

    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_product_by_id");

    for size in [10, 1_000, 100_000].iter() {
        let (service, ids) = populated_service(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            let mut i = 0usize;
            b.iter(|| {
                let id = &ids[i % ids.len()];
                i += 1;
                black_box(service.get_product_by_id(id).unwrap());
            });
        });
    }

    group.finish();
}

fn bench_find_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_all_sorted");

    for size in [10, 1_000, 10_000].iter() {
        let (service, _) = populated_service(*size);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(service.repository().find_all().unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_create_product, bench_lookup, bench_find_all);
criterion_main!(benches);
