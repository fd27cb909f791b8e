use crate::auth::JwtAuth;
use charity_status::unauthenticated;
use log::debug;
use std::sync::Arc;
use tonic::{metadata::MetadataMap, service::Interceptor, Request, Status};

#[derive(Clone, Debug, PartialEq)]
pub enum Peer {
    User { owner_id: String },
    Anonymous,
}

impl Peer {
    /// Owner of whatever the peer creates, if it is signed in.
    pub fn owner_id(&self) -> Option<&str> {
        match self {
            Peer::User { owner_id } => Some(owner_id),
            Peer::Anonymous => None,
        }
    }

    /// Peer attached to a request by `AuthnInterceptor`, anonymous if none.
    pub fn of<T>(request: &Request<T>) -> Peer {
        request
            .extensions()
            .get::<Peer>()
            .cloned()
            .unwrap_or(Peer::Anonymous)
    }
}

#[derive(Clone)]
pub struct AuthnInterceptor {
    jwt_auth: Arc<JwtAuth>,
}

impl AuthnInterceptor {
    pub fn new(jwt_auth: Arc<JwtAuth>) -> Self {
        Self { jwt_auth }
    }

    fn authenticate(&self, metadata: &MetadataMap) -> Result<Peer, Status> {
        let header = match metadata.get("authorization") {
            Some(header) => header
                .to_str()
                .map_err(|_| unauthenticated!("'authorization' header could not be decoded"))?,
            None => return Ok(Peer::Anonymous),
        };
        let access_token = header
            .strip_prefix("Bearer ")
            .ok_or_else(|| unauthenticated!("'authorization' header must be a bearer token"))?;
        let decoded = self
            .jwt_auth
            .verify_access_token(access_token)
            .map_err(|e| unauthenticated!("failed to verify access token: {}", e))?;

        Ok(Peer::User {
            owner_id: decoded.uid,
        })
    }
}

impl Interceptor for AuthnInterceptor {
    fn call(&mut self, mut request: Request<()>) -> Result<Request<()>, Status> {
        let peer = self.authenticate(request.metadata())?;
        debug!("Request from {:?}", peer);
        request.extensions_mut().insert(peer);
        Ok(request)
    }
}
