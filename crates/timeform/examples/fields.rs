// Copyright (c) Microsoft Corporation.

//! This example demonstrates decoding a JSON document whose timestamp
//! fields arrive in several shapes, and re-encoding it with the two
//! serialization policies.

use timeform::{CompactTime, FullTime};

/// An order record as a partner system sends it: dates, full timestamps
/// with offsets, and not-yet-set fields all flow through the same types.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
struct Order {
    id: u32,

    // Encoded compactly: a plain date when the time of day is midnight.
    placed: CompactTime,

    // Always encoded in the full form for downstream systems.
    confirmed: FullTime,

    // Absent until the order ships; encodes as "".
    shipped: CompactTime,
}

fn main() -> anyhow::Result<()> {
    let json = r#"{
        "id": 7,
        "placed": "2023-01-01",
        "confirmed": "2023-01-02T08:30:00+01:00",
        "shipped": null
    }"#;

    let order: Order = serde_json::from_str(json)?;

    // Offsets are gone after decoding; everything is UTC.
    println!("placed:    {}", order.placed);
    println!("confirmed: {}", order.confirmed);
    println!("shipped:   {:?}", order.shipped.get());

    let json = serde_json::to_string_pretty(&order)?;
    println!("JSON:");
    println!("{json}");

    Ok(())
}
