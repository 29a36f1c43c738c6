use super::Service;
use crate::error::Result;
use crate::model::{Server, ServerConfiguration, ServerDetails, ServerState};
use crate::request::{
    CreateServer, DeleteServer, DeleteServerAndStorages, GetServerConfigurations,
    GetServerDetails, GetServers, ModifyServer, RestartServer, StartServer, StopServer,
    TagServer, UntagServer,
};
use crate::wait::WaitSpec;

impl Service {
    pub async fn get_server_configurations(&self) -> Result<Vec<ServerConfiguration>> {
        self.fetch_all(&GetServerConfigurations).await
    }

    pub async fn get_servers(&self) -> Result<Vec<Server>> {
        self.fetch_all(&GetServers).await
    }

    pub async fn get_server_details(&self, request: &GetServerDetails) -> Result<ServerDetails> {
        self.fetch(request).await
    }

    pub async fn create_server(&self, request: &CreateServer) -> Result<ServerDetails> {
        let details: ServerDetails = self.fetch(request).await?;
        tracing::info!("Created server {} ({})", details.uuid, details.hostname);
        Ok(details)
    }

    pub async fn modify_server(&self, request: &ModifyServer) -> Result<ServerDetails> {
        self.fetch(request).await
    }

    pub async fn start_server(&self, request: &StartServer) -> Result<ServerDetails> {
        self.fetch(request).await
    }

    pub async fn stop_server(&self, request: &StopServer) -> Result<ServerDetails> {
        self.fetch(request).await
    }

    pub async fn restart_server(&self, request: &RestartServer) -> Result<ServerDetails> {
        self.fetch(request).await
    }

    pub async fn delete_server(&self, request: &DeleteServer) -> Result<()> {
        self.send(request).await
    }

    /// Delete a server and every storage attached to it
    pub async fn delete_server_and_storages(
        &self,
        request: &DeleteServerAndStorages,
    ) -> Result<()> {
        self.send(request).await
    }

    pub async fn tag_server(&self, request: &TagServer) -> Result<ServerDetails> {
        self.fetch(request).await
    }

    pub async fn untag_server(&self, request: &UntagServer) -> Result<ServerDetails> {
        self.fetch(request).await
    }

    /// Poll server details until the state condition holds
    pub async fn wait_for_server_state(
        &self,
        spec: &WaitSpec<ServerState>,
    ) -> Result<ServerDetails> {
        let request = GetServerDetails {
            uuid: spec.uuid.clone(),
        };
        self.poller
            .wait(spec, || self.get_server_details(&request))
            .await
    }
}
