use crate::database::store::OnDemandStore;
use sqlx::{Pool, Postgres};
use std::sync::Arc;

#[derive(Debug)]
pub struct PgOnDemandStore {
    pub(crate) pool: Arc<Pool<Postgres>>,
}

impl PgOnDemandStore {
    pub(crate) fn new(pool: Arc<Pool<Postgres>>) -> Self {
        Self { pool }
    }
}

impl OnDemandStore for PgOnDemandStore {}
