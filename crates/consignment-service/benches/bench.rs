use core::hint::black_box;
use consignment_core::proto::{
    Consignment, GetRequest, shipping_service_client::ShippingServiceClient,
};
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use futures::stream::{FuturesUnordered, StreamExt};
use std::{
    net::TcpStream,
    process::{Command, Stdio},
    thread,
    time::{Duration, Instant},
};
use tokio::runtime::Builder;
use tonic::transport::{Channel, Uri};

const CREATES_PER_ITER: usize = 256;

#[derive(Clone, Copy, Debug)]
struct GrpcBenchParams {
    store: &'static str,
    concurrency: usize,
}

fn grpc_bench(c: &mut Criterion) {
    for store in ["memory", "queued"] {
        bench_store(c, store);
    }
}

fn bench_store(c: &mut Criterion, store: &'static str) {
    let uri = Uri::try_from("http://127.0.0.1:50061").expect("Invalid URI");
    // Start the server. This may require a full compilation so set the timeout
    // high.
    let mut server = Command::new("cargo")
        .args([
            "run",
            "--bin",
            "consignment-service",
            "--release",
            "--",
            "--server-addr",
            "127.0.0.1:50061",
            "--store",
            store,
        ])
        .env("RUST_LOG", "warn")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("Failed to start consignment-service");
    wait_for_port(uri.authority().expect("missing authority").as_str(), 300);

    let rt = Builder::new_multi_thread().enable_all().build().unwrap();
    let channel = rt.block_on(async {
        Channel::builder(uri.clone())
            .connect()
            .await
            .expect("failed to connect")
    });

    let mut group = c.benchmark_group(format!("grpc/{store}"));
    for concurrency in [1, 16, 64] {
        let params = GrpcBenchParams { store, concurrency };
        group.throughput(Throughput::Elements(CREATES_PER_ITER as u64));
        group.bench_function(format!("create/concurrency/{concurrency}"), |b| {
            b.to_async(&rt)
                .iter_custom(|iters| run_creates(channel.clone(), params, iters));
        });
    }

    group.bench_function("list", |b| {
        b.to_async(&rt).iter(|| {
            let mut client = ShippingServiceClient::new(channel.clone());
            async move {
                let response = client.get_consignments(GetRequest {}).await.unwrap();
                black_box(response.into_inner().consignments.len());
            }
        });
    });
    group.finish();

    let _ = server.kill();
    let _ = server.wait();
}

async fn run_creates(channel: Channel, params: GrpcBenchParams, iters: u64) -> Duration {
    let start = Instant::now();
    for _ in 0..iters {
        let mut pending = FuturesUnordered::new();
        for worker in 0..params.concurrency {
            let mut client = ShippingServiceClient::new(channel.clone());
            let per_worker = CREATES_PER_ITER / params.concurrency;
            pending.push(async move {
                for i in 0..per_worker {
                    let consignment = Consignment {
                        id: format!("{}-{worker}-{i}", params.store),
                        weight: i as i32,
                        ..Default::default()
                    };
                    let response = client.create_consignment(consignment).await.unwrap();
                    black_box(response.into_inner().created);
                }
            });
        }
        while pending.next().await.is_some() {}
    }
    start.elapsed()
}

fn wait_for_port(addr: &str, timeout_secs: u64) {
    let deadline = Instant::now() + Duration::from_secs(timeout_secs);
    while Instant::now() < deadline {
        if TcpStream::connect(addr).is_ok() {
            return;
        }
        thread::sleep(Duration::from_millis(200));
    }
    panic!("server did not start listening on {addr} within {timeout_secs}s");
}

criterion_group!(benches, grpc_bench);
criterion_main!(benches);
