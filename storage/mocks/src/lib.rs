use charity_storage::{
    database::{client::DatabaseClient, store::OnDemandStore},
    models::donation::*,
    stores::donation::*,
    Error,
};
use async_trait::async_trait;
use mockall::mock;
use uuid::Uuid;

mock! {
  pub DatabaseClient {}

  impl DatabaseClient<MockStore> for DatabaseClient {
      fn on_demand(&self) -> MockStore;
  }
}

mock! {
  pub Store {}

  #[async_trait]
  impl DonationStore for Store {
      async fn add_donation(&self, new_row: NewDonationRow) -> Result<DonationRow, Error>;

      async fn update_donation_payload(
          &self,
          donation_id: Uuid,
          qr_payload: String,
      ) -> Result<DonationRow, Error>;

      async fn find_donation_by_id(&self, donation_id: Uuid) -> Result<Option<DonationRow>, Error>;

      async fn list_donations_for_owner(
          &self,
          page_size: i64,
          page_token: Option<DonationPageToken>,
          owner_id: String,
      ) -> Result<Vec<DonationRow>, Error>;

      async fn count_donations_for_owner(&self, owner_id: String) -> Result<i64, Error>;
  }

  impl OnDemandStore for Store {}
}
