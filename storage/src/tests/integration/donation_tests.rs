use crate::{
    database::client::DatabaseClient,
    models::donation::*,
    page_token::PageTokenable,
    stores::donation::DonationStore,
    tests::integration::containers::PgContainer,
};
use chrono::{Duration, TimeZone, Utc};

fn new_row(owner_id: &str, seconds: i64) -> NewDonationRow {
    let time = Utc.timestamp_opt(seconds, 0).unwrap();
    NewDonationRow {
        create_time: time,
        update_time: time,
        owner_id: owner_id.to_string(),
        category: "food".to_string(),
        amount: Some(100.0),
        donation_kind: DonationKind::Monetary,
        description: "Monetary donation: $100 - Contact: 555-1234".to_string(),
        qr_payload: "".to_string(),
        status: DonationStatus::Pending,
    }
}

#[tokio::test]
async fn add_donation_returns_generated_id() -> Result<(), anyhow::Error> {
    let container = PgContainer::start().await?;
    let store = container.pool.on_demand();

    let new_row = new_row("owner-1", 500);
    let row = store.add_donation(new_row.clone()).await?;

    assert_eq!(row.owner_id, new_row.owner_id);
    assert_eq!(row.create_time, new_row.create_time);
    assert_eq!(row.amount, Some(100.0));
    assert_eq!(row.donation_kind, DonationKind::Monetary);
    assert_eq!(row.status, DonationStatus::Pending);
    assert_eq!(row.qr_payload, "");

    let found = store.find_donation_by_id(row.donation_id).await?;
    assert_eq!(found, Some(row));
    Ok(())
}

#[tokio::test]
async fn update_donation_payload_replaces_payload() -> Result<(), anyhow::Error> {
    let container = PgContainer::start().await?;
    let store = container.pool.on_demand();

    let row = store.add_donation(new_row("owner-1", 500)).await?;
    let updated = store
        .update_donation_payload(row.donation_id, "upi://pay?pa=1@paytm".to_string())
        .await?;

    assert_eq!(updated.donation_id, row.donation_id);
    assert_eq!(updated.qr_payload, "upi://pay?pa=1@paytm");
    assert!(updated.update_time > row.update_time);
    Ok(())
}

#[tokio::test]
async fn list_donations_pages_newest_first() -> Result<(), anyhow::Error> {
    let container = PgContainer::start().await?;
    let store = container.pool.on_demand();

    let base = Utc.timestamp_opt(1_000, 0).unwrap();
    for i in 0..3 {
        let seconds = (base + Duration::seconds(i)).timestamp();
        store.add_donation(new_row("owner-1", seconds)).await?;
    }
    store.add_donation(new_row("owner-2", 5_000)).await?;

    let (first_page, total_count) = store
        .list_and_count_donations_for_owner(2, None, "owner-1".to_string())
        .await?;
    assert_eq!(total_count, 3);
    assert_eq!(first_page.len(), 2);
    assert!(first_page[0].create_time > first_page[1].create_time);

    let second_page = store
        .list_donations_for_owner(
            2,
            Some(first_page[1].page_token()),
            "owner-1".to_string(),
        )
        .await?;
    assert_eq!(second_page.len(), 2);
    assert_eq!(second_page[0], first_page[1]);
    assert!(second_page.iter().all(|row| row.owner_id == "owner-1"));
    Ok(())
}
