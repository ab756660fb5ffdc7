use bookingapi_shipment::model::{BookShipmentRequest, Parcel};
use bookingapi_shipment::{build_signed_message, sign, string_to_sign, Credential};
use criterion::criterion_group;
use criterion::criterion_main;
use criterion::Criterion;
use http::Method;

criterion_group!(benches, bench);
criterion_main!(benches);

pub fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("shipment");
    let time = bookingapi_core::time::now();

    group.bench_function("string_to_sign_and_sign", |b| {
        let body = br#"{"Barcode":"703451258001"}"#;

        b.iter(|| {
            let s = string_to_sign(
                &Method::POST,
                body,
                "application/json",
                "/api/shipment/",
                time,
            )
            .expect("must success");
            sign(b"signing_key", &s).expect("must success")
        })
    });

    group.bench_function("build_signed_message", |b| {
        let cred = Credential::new("access_id", "signing_key");
        let req = BookShipmentRequest::builder()
            .with_barcode("703451258001")
            .with_parcel(Parcel {
                weight: 0.78,
                ..Default::default()
            })
            .build()
            .expect("must success");

        b.iter(|| {
            build_signed_message("http://127.0.0.1:9000", &req, &cred, time).expect("must success")
        })
    });

    group.finish()
}
