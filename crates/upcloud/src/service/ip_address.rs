use super::Service;
use crate::error::Result;
use crate::model::IpAddress;
use crate::request::{
    AssignIpAddress, GetIpAddressDetails, GetIpAddresses, ModifyIpAddress, ReleaseIpAddress,
};

impl Service {
    pub async fn get_ip_addresses(&self) -> Result<Vec<IpAddress>> {
        self.fetch_all(&GetIpAddresses).await
    }

    pub async fn get_ip_address_details(&self, request: &GetIpAddressDetails) -> Result<IpAddress> {
        self.fetch(request).await
    }

    pub async fn assign_ip_address(&self, request: &AssignIpAddress) -> Result<IpAddress> {
        self.fetch(request).await
    }

    pub async fn modify_ip_address(&self, request: &ModifyIpAddress) -> Result<IpAddress> {
        self.fetch(request).await
    }

    pub async fn release_ip_address(&self, request: &ReleaseIpAddress) -> Result<()> {
        self.send(request).await
    }
}
