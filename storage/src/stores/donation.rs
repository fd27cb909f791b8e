use crate::{models::donation::*, sqlx::store::PgOnDemandStore, Error};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{PgExecutor, Row};
use uuid::Uuid;

#[async_trait]
pub trait DonationStore: Send + Sync {
    async fn add_donation(&self, new_row: NewDonationRow) -> Result<DonationRow, Error>;

    /// Replaces the stored QR payload of a donation.
    async fn update_donation_payload(
        &self,
        donation_id: Uuid,
        qr_payload: String,
    ) -> Result<DonationRow, Error>;

    async fn find_donation_by_id(&self, donation_id: Uuid) -> Result<Option<DonationRow>, Error>;

    /// Lists donations of an owner, newest first.
    async fn list_donations_for_owner(
        &self,
        page_size: i64,
        page_token: Option<DonationPageToken>,
        owner_id: String,
    ) -> Result<Vec<DonationRow>, Error>;

    async fn count_donations_for_owner(&self, owner_id: String) -> Result<i64, Error>;

    async fn list_and_count_donations_for_owner(
        &self,
        page_size: i64,
        page_token: Option<DonationPageToken>,
        owner_id: String,
    ) -> Result<(Vec<DonationRow>, i64), Error> {
        let list_fut = self.list_donations_for_owner(page_size, page_token, owner_id.clone());
        let count_fut = self.count_donations_for_owner(owner_id);
        futures::try_join!(list_fut, count_fut)
    }
}

#[async_trait]
impl DonationStore for PgOnDemandStore {
    async fn add_donation(&self, new_row: NewDonationRow) -> Result<DonationRow, Error> {
        add_donation(&*self.pool, new_row).await
    }

    async fn update_donation_payload(
        &self,
        donation_id: Uuid,
        qr_payload: String,
    ) -> Result<DonationRow, Error> {
        update_donation_payload(&*self.pool, donation_id, qr_payload).await
    }

    async fn find_donation_by_id(&self, donation_id: Uuid) -> Result<Option<DonationRow>, Error> {
        find_donation_by_id(&*self.pool, donation_id).await
    }

    async fn list_donations_for_owner(
        &self,
        page_size: i64,
        page_token: Option<DonationPageToken>,
        owner_id: String,
    ) -> Result<Vec<DonationRow>, Error> {
        list_donations_for_owner(&*self.pool, page_size, page_token, owner_id).await
    }

    async fn count_donations_for_owner(&self, owner_id: String) -> Result<i64, Error> {
        count_donations_for_owner(&*self.pool, owner_id).await
    }
}

async fn add_donation<'a, E>(executor: E, new_row: NewDonationRow) -> Result<DonationRow, Error>
where
    E: PgExecutor<'a>,
{
    Ok(sqlx::query_as(
        r#"
        INSERT INTO donations (
            create_time,
            update_time,
            owner_id,
            category,
            amount,
            donation_kind,
            description,
            qr_payload,
            status
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING *"#,
    )
    .bind(new_row.create_time)
    .bind(new_row.update_time)
    .bind(new_row.owner_id)
    .bind(new_row.category)
    .bind(new_row.amount)
    .bind(new_row.donation_kind)
    .bind(new_row.description)
    .bind(new_row.qr_payload)
    .bind(new_row.status)
    .fetch_one(executor)
    .await?)
}

async fn update_donation_payload<'a, E>(
    executor: E,
    donation_id: Uuid,
    qr_payload: String,
) -> Result<DonationRow, Error>
where
    E: PgExecutor<'a>,
{
    Ok(sqlx::query_as(
        "UPDATE donations \
        SET qr_payload = $1, update_time = $2 \
        WHERE donation_id = $3 \
        RETURNING *",
    )
    .bind(qr_payload)
    .bind(Utc::now())
    .bind(donation_id)
    .fetch_one(executor)
    .await?)
}

async fn find_donation_by_id<'a, E>(
    executor: E,
    donation_id: Uuid,
) -> Result<Option<DonationRow>, Error>
where
    E: PgExecutor<'a>,
{
    Ok(sqlx::query_as(
        "SELECT * \
        FROM donations \
        WHERE donation_id = $1",
    )
    .bind(donation_id)
    .fetch_optional(executor)
    .await?)
}

async fn list_donations_for_owner<'a, E>(
    executor: E,
    page_size: i64,
    page_token: Option<DonationPageToken>,
    owner_id: String,
) -> Result<Vec<DonationRow>, Error>
where
    E: PgExecutor<'a>,
{
    let rows: Vec<DonationRow> = match page_token {
        Some(page_token) => {
            // Query by page token:
            sqlx::query_as(
                "SELECT * \
                FROM donations \
                WHERE owner_id = $1 \
                AND (create_time, donation_id) <= ($2, $3) \
                ORDER BY create_time DESC, donation_id DESC \
                LIMIT $4",
            )
            .bind(owner_id)
            .bind(page_token.create_time)
            .bind(page_token.donation_id)
            .bind(page_size)
            .fetch_all(executor)
            .await?
        }
        None => {
            // Query first page:
            sqlx::query_as(
                "SELECT * \
                FROM donations \
                WHERE owner_id = $1 \
                ORDER BY create_time DESC, donation_id DESC \
                LIMIT $2",
            )
            .bind(owner_id)
            .bind(page_size)
            .fetch_all(executor)
            .await?
        }
    };
    Ok(rows)
}

async fn count_donations_for_owner<'a, E>(executor: E, owner_id: String) -> Result<i64, Error>
where
    E: PgExecutor<'a>,
{
    Ok(sqlx::query(
        "SELECT COUNT(*) \
        FROM donations \
        WHERE owner_id = $1",
    )
    .bind(owner_id)
    .fetch_one(executor)
    .await?
    .try_get(0)?)
}
