/// Store which selects connections from the pool per query.
pub trait OnDemandStore: Send + Sync {}
