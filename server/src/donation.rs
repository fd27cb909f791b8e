//! The donation submission pipeline: provisional ids, payload encoding, QR
//! rendering and the orchestration that ties them to the donation store.

pub mod id;
pub mod money;
pub mod orchestrator;
pub mod payload;
pub mod qr;
pub mod request;
