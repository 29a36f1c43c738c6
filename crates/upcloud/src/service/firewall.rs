use super::Service;
use crate::error::Result;
use crate::model::FirewallRule;
use crate::request::{
    CreateFirewallRule, DeleteFirewallRule, GetFirewallRuleDetails, GetFirewallRules,
};

impl Service {
    pub async fn get_firewall_rules(
        &self,
        request: &GetFirewallRules,
    ) -> Result<Vec<FirewallRule>> {
        self.fetch_all(request).await
    }

    pub async fn get_firewall_rule_details(
        &self,
        request: &GetFirewallRuleDetails,
    ) -> Result<FirewallRule> {
        self.fetch(request).await
    }

    pub async fn create_firewall_rule(&self, request: &CreateFirewallRule) -> Result<FirewallRule> {
        self.fetch(request).await
    }

    pub async fn delete_firewall_rule(&self, request: &DeleteFirewallRule) -> Result<()> {
        self.send(request).await
    }
}
