//! Book a shipment on the staging API.
//!
//! ```shell
//! cargo run --example book_shipment -- <access-id> <signing-key>
//! ```

use std::time::Duration;

use anyhow::Result;
use bookingapi_core::Context;
use bookingapi_http_send_reqwest::ReqwestHttpSend;
use bookingapi_shipment::model::{Address, LabelFormat, LabelSize, Parcel};
use bookingapi_shipment::{Client, Outcome};

#[tokio::main]
async fn main() -> Result<()> {
    let _ = env_logger::try_init();

    let mut args = std::env::args().skip(1);
    let (Some(access_id), Some(signing_key)) = (args.next(), args.next()) else {
        eprintln!("usage: book_shipment <access-id> <signing-key>");
        return Ok(());
    };

    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()?;
    let ctx = Context::new().with_http_send(ReqwestHttpSend::new(http));

    let mut client = Client::new(ctx).authenticate(access_id, signing_key);
    client.use_staging_api();

    let outcome = client
        .book_shipment(|b| {
            b.with_reference("example-order-1")
                .with_label_format(LabelFormat::Pdf)
                .with_label_size(LabelSize::A4)
                .with_receiver(Address {
                    name: Some("Ola Nordmann".to_string()),
                    address_line1: Some("Karl Johans gate 1".to_string()),
                    city: Some("Oslo".to_string()),
                    postal_code: Some("0154".to_string()),
                    country_code: Some("NO".to_string()),
                    ..Default::default()
                })
                .with_parcel(Parcel {
                    weight: 0.78,
                    description: Some("Books".to_string()),
                    ..Default::default()
                })
        })
        .await?;

    match outcome {
        Outcome::Success(resp) => {
            println!("booked {} ({})", resp.norsk_barcode, resp.barcode);
            println!("label: {} bytes, {} items", resp.label.len(), resp.items.len());
        }
        Outcome::Failure(err) => {
            println!("rejected with {}: {:?}", err.status, err.error);
        }
    }

    Ok(())
}
