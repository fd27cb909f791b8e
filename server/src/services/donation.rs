use crate::{
    donation::{orchestrator::SubmissionOrchestrator, request::DonationRequest},
    interceptors::authn::Peer,
    protobuf::{from::FromProto, into::IntoProto, into::ProtoInto},
};
use charity_api::charity::{
    donation_service_server::DonationService, CreateDonationRequest, CreateDonationResponse,
    Donation, GetDonationRequest, ListDonationsRequest, ListDonationsResponse,
};
use charity_status::{internal, invalid_argument, not_found, unauthenticated};
use charity_storage::{
    database::{client::DatabaseClient, store::OnDemandStore},
    models::donation::DonationPageToken,
    page_token::{PageToken, PageTokenable},
    stores::donation::DonationStore,
};
use async_trait::async_trait;
use log::debug;
use std::{
    cmp::{max, min},
    marker::PhantomData,
    sync::Arc,
};
use tonic::{Request, Response, Status};
use uuid::Uuid;


pub struct DonationServiceImpl<Db, Store> {
    database: Arc<Db>,
    orchestrator: SubmissionOrchestrator,
    _marker: PhantomData<fn() -> Store>,
}

impl<Db, Store> DonationServiceImpl<Db, Store> {
    pub fn new(database: Arc<Db>, orchestrator: SubmissionOrchestrator) -> Self {
        Self {
            database,
            orchestrator,
            _marker: PhantomData,
        }
    }
}

#[async_trait]
impl<Db, Store> DonationService for DonationServiceImpl<Db, Store>
where
    Db: DatabaseClient<Store> + 'static,
    Store: DonationStore + OnDemandStore + 'static,
{
    async fn create_donation(
        &self,
        request: Request<CreateDonationRequest>,
    ) -> Result<Response<CreateDonationResponse>, Status> {
        let peer = Peer::of(&request);
        let donation_request: DonationRequest = request.into_inner().proto_into()?;
        donation_request.validate()?;

        let store = self.database.on_demand();
        let submission = self
            .orchestrator
            .submit(&store, peer.owner_id(), &donation_request)
            .await
            .map_err(|e| internal!("failed to generate QR code: {}", e))?;
        debug!(
            "Donation {} submitted with save outcome {:?}",
            submission.donation_id, submission.save
        );

        Ok(Response::new(submission.into_proto()?))
    }

    async fn get_donation(
        &self,
        request: Request<GetDonationRequest>,
    ) -> Result<Response<Donation>, Status> {
        let peer = Peer::of(&request);
        let owner_id = peer
            .owner_id()
            .ok_or_else(|| unauthenticated!("sign in to view donations"))?;
        let message = request.into_inner();

        let donation_id = Uuid::from_proto_field(message.donation_id, "donation_id")?;

        let row = self
            .database
            .on_demand()
            .find_donation_by_id(donation_id)
            .await?
            .filter(|row| row.owner_id == owner_id)
            .ok_or_else(|| not_found!("donation not found"))?;

        Ok(Response::new(row.into_proto()?))
    }

    async fn list_donations(
        &self,
        request: Request<ListDonationsRequest>,
    ) -> Result<Response<ListDonationsResponse>, Status> {
        let peer = Peer::of(&request);
        let message = request.into_inner();

        // Signed-out donors have no history.
        let owner_id = match peer.owner_id() {
            Some(owner_id) => owner_id.to_string(),
            None => {
                return Ok(Response::new(ListDonationsResponse {
                    donations: Vec::new(),
                    next_page_token: "".to_string(),
                    total_count: 0,
                }))
            }
        };

        let page_size = min(max(message.page_size, 1), 100);
        let page_token = DonationPageToken::deserialize_page_token(&message.page_token)
            .map_err(|e| invalid_argument!("'page_token' is invalid: {:?}", e))?;

        let (rows_plus_one, total_count) = self
            .database
            .on_demand()
            .list_and_count_donations_for_owner((page_size + 1).into(), page_token, owner_id)
            .await?;

        let (page_rows, next_page_rows) =
            rows_plus_one.split_at(min(rows_plus_one.len(), page_size as usize));

        let mut donations: Vec<Donation> = Vec::new();
        for row in page_rows {
            donations.push(row.clone().into_proto()?);
        }

        // Next page token or empty string.
        let next_page_token = next_page_rows
            .first()
            .map(|next_row| next_row.page_token().serialize_page_token())
            .unwrap_or(Ok("".to_string()))?;

        Ok(Response::new(ListDonationsResponse {
            donations,
            next_page_token,
            total_count,
        }))
    }
}
