use super::protocol::{
    ArrangementId, BaseRequest, BaseResult, ExtensionRequest, ExtensionResult, UploadAck,
    parse_base_response, parse_extension_response, parse_upload_ack,
};
use crate::error::RunError;
use bevy::prelude::*;
use bevy::tasks::{IoTaskPool, Task};
use serde_json::Value;
use std::sync::Arc;

/// Blocking request/response contract with the remote optimizer. Returns
/// raw JSON bodies; interpretation lives in `protocol`.
///
/// HTTP error statuses whose body carries an `error` field should be
/// returned as `Ok(body)` so they surface as protocol errors.
pub trait OptimizerTransport: Send + Sync + 'static {
    fn request_base(&self, request: &BaseRequest) -> Result<Value, RunError>;

    fn request_extension(&self, request: &ExtensionRequest) -> Result<Value, RunError>;

    fn upload_point_cloud(&self, arrangement_id: &ArrangementId, ply: &str)
    -> Result<Value, RunError>;
}

/// Shared handle to the optimizer transport that runs calls on the IO pool.
#[derive(Resource, Clone)]
pub struct Optimizer {
    transport: Arc<dyn OptimizerTransport>,
}

impl Optimizer {
    pub fn new(transport: impl OptimizerTransport) -> Self {
        Self {
            transport: Arc::new(transport),
        }
    }

    pub fn spawn_base(&self, request: BaseRequest) -> Task<Result<BaseResult, RunError>> {
        let transport = Arc::clone(&self.transport);
        IoTaskPool::get()
            .spawn(async move { parse_base_response(transport.request_base(&request)?) })
    }

    pub fn spawn_extension(
        &self,
        request: ExtensionRequest,
    ) -> Task<Result<ExtensionResult, RunError>> {
        let transport = Arc::clone(&self.transport);
        IoTaskPool::get()
            .spawn(async move { parse_extension_response(transport.request_extension(&request)?) })
    }

    pub fn spawn_upload(
        &self,
        arrangement_id: ArrangementId,
        ply: String,
    ) -> Task<Result<UploadAck, RunError>> {
        let transport = Arc::clone(&self.transport);
        IoTaskPool::get().spawn(async move {
            parse_upload_ack(transport.upload_point_cloud(&arrangement_id, &ply)?)
        })
    }
}
