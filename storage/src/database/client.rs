use crate::database::store::OnDemandStore;

/// Provides access to a database.
pub trait DatabaseClient<S>
where
    Self: Send + Sync,
    S: OnDemandStore,
{
    /// Returns an on-demand store. This will dynamically grab connections from the
    /// pool to perform sql queries/updates.
    fn on_demand(&self) -> S;
}
