//! Firewall rule requests
//!
//! Rules are addressed by server UUID plus position. The API offers no way to
//! change a rule in place; delete and recreate it instead.

use super::{Request, envelope};
use crate::error::Result;
use crate::model::FirewallRule;
use crate::transport::Method;

#[derive(Debug, Clone, Default)]
pub struct GetFirewallRules {
    pub server_uuid: String,
}

impl Request for GetFirewallRules {
    fn method(&self) -> Method {
        Method::Get
    }

    fn path(&self) -> String {
        format!("/server/{}/firewall_rule", self.server_uuid)
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetFirewallRuleDetails {
    pub server_uuid: String,

    /// 1-based position in the server's rule list
    pub position: u32,
}

impl Request for GetFirewallRuleDetails {
    fn method(&self) -> Method {
        Method::Get
    }

    fn path(&self) -> String {
        format!(
            "/server/{}/firewall_rule/{}",
            self.server_uuid, self.position
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct CreateFirewallRule {
    pub server_uuid: String,

    pub rule: FirewallRule,
}

impl Request for CreateFirewallRule {
    fn method(&self) -> Method {
        Method::Post
    }

    fn path(&self) -> String {
        format!("/server/{}/firewall_rule", self.server_uuid)
    }

    fn body(&self) -> Result<Option<Vec<u8>>> {
        envelope("firewall_rule", &self.rule)
    }
}

#[derive(Debug, Clone, Default)]
pub struct DeleteFirewallRule {
    pub server_uuid: String,
    pub position: u32,
}

impl Request for DeleteFirewallRule {
    fn method(&self) -> Method {
        Method::Delete
    }

    fn path(&self) -> String {
        format!(
            "/server/{}/firewall_rule/{}",
            self.server_uuid, self.position
        )
    }
}
