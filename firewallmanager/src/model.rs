/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use sdk_types::{map_entries, model, wire_enum, Instant};
use std::collections::BTreeMap;

wire_enum! {
    /// Status of the IAM role Firewall Manager uses in the administrator account.
    pub enum AccountRoleStatus {
        Ready => "READY",
        Creating => "CREATING",
        PendingDeletion => "PENDING_DELETION",
        Deleting => "DELETING",
        Deleted => "DELETED",
    }
}

wire_enum! {
    pub enum SecurityServiceType {
        Waf => "WAF",
        Wafv2 => "WAFV2",
        ShieldAdvanced => "SHIELD_ADVANCED",
        SecurityGroupsCommon => "SECURITY_GROUPS_COMMON",
        SecurityGroupsContentAudit => "SECURITY_GROUPS_CONTENT_AUDIT",
        SecurityGroupsUsageAudit => "SECURITY_GROUPS_USAGE_AUDIT",
    }
}

wire_enum! {
    pub enum ViolationReason {
        WebAclMissingRuleGroup => "WEB_ACL_MISSING_RULE_GROUP",
        ResourceMissingWebAcl => "RESOURCE_MISSING_WEB_ACL",
        ResourceIncorrectWebAcl => "RESOURCE_INCORRECT_WEB_ACL",
        ResourceMissingShieldProtection => "RESOURCE_MISSING_SHIELD_PROTECTION",
        ResourceMissingWebAclOrShieldProtection => "RESOURCE_MISSING_WEB_ACL_OR_SHIELD_PROTECTION",
        ResourceMissingSecurityGroup => "RESOURCE_MISSING_SECURITY_GROUP",
        ResourceViolatesAuditSecurityGroup => "RESOURCE_VIOLATES_AUDIT_SECURITY_GROUP",
        SecurityGroupUnused => "SECURITY_GROUP_UNUSED",
        SecurityGroupRedundant => "SECURITY_GROUP_REDUNDANT",
    }
}

wire_enum! {
    pub enum PolicyComplianceStatusType {
        Compliant => "COMPLIANT",
        NonCompliant => "NON_COMPLIANT",
    }
}

wire_enum! {
    /// A service a policy depends on, used as the key of `issue_info_map`.
    pub enum DependentServiceName {
        AwsConfig => "AWSCONFIG",
        AwsWaf => "AWSWAF",
        AwsShieldAdvanced => "AWSSHIELD_ADVANCED",
        AwsVpc => "AWSVPC",
    }
}

wire_enum! {
    /// Key of a policy's `include_map` and `exclude_map`.
    pub enum CustomerPolicyScopeIdType {
        Account => "ACCOUNT",
        OrgUnit => "ORG_UNIT",
    }
}

/// Accounts or organizational units, keyed by the kind of identifier.
pub type ScopeMap = BTreeMap<CustomerPolicyScopeIdType, Vec<String>>;

model! {
    /// A key/value pair applied to a Firewall Manager resource.
    #[derive(Eq, Hash)]
    pub struct Tag => TagBuilder {
        key (set_key): String,
        value (set_value): String,
    }
}

model! {
    /// Selects the resources a policy applies to (or, with `exclude_resource_tags`, skips).
    #[derive(Eq, Hash)]
    pub struct ResourceTag => ResourceTagBuilder {
        key (set_key): String,
        value (set_value): String,
    }
}

model! {
    /// Details of the security service a policy manages.
    ///
    /// `managed_service_data` is the JSON configuration for `r#type`; its shape depends on the
    /// service type and it is carried through without being parsed.
    #[derive(Eq, Hash)]
    pub struct SecurityServicePolicyData => SecurityServicePolicyDataBuilder {
        r#type (set_type): SecurityServiceType,
        managed_service_data (set_managed_service_data): String,
    }
}

model! {
    /// A Firewall Manager policy.
    #[derive(Eq, Hash)]
    pub struct Policy => PolicyBuilder {
        policy_id (set_policy_id): String,
        policy_name (set_policy_name): String,
        policy_update_token (set_policy_update_token): String,
        security_service_policy_data (set_security_service_policy_data): SecurityServicePolicyData,
        resource_type (set_resource_type): String,
        resource_type_list (set_resource_type_list): Vec<String>,
        resource_tags (set_resource_tags): Vec<ResourceTag>,
        exclude_resource_tags (set_exclude_resource_tags): bool,
        remediation_enabled (set_remediation_enabled): bool,
        include_map (set_include_map): ScopeMap,
        exclude_map (set_exclude_map): ScopeMap,
    }
}

map_entries! {
    PolicyBuilder {
        include_map: add_include_map_entry, clear_include_map_entries (CustomerPolicyScopeIdType => Vec<String>);
        exclude_map: add_exclude_map_entry, clear_exclude_map_entries (CustomerPolicyScopeIdType => Vec<String>);
    }
}

/// The accounts and organizational units a policy is applied to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PolicyScope<'a> {
    /// Only the listed members. Any exclude map is ignored by the service.
    Include(&'a ScopeMap),
    /// Every member of the organization except the listed ones.
    Exclude(&'a ScopeMap),
    /// Every member of the organization.
    All,
}

impl Policy {
    /// The effective scope of the policy.
    ///
    /// Both maps may be set; when they are, the include map takes precedence. Empty maps are
    /// treated as unset.
    pub fn scope(&self) -> PolicyScope<'_> {
        fn non_empty(map: &Option<ScopeMap>) -> Option<&ScopeMap> {
            map.as_ref().filter(|m| m.values().any(|ids| !ids.is_empty()))
        }
        match (non_empty(&self.include_map), non_empty(&self.exclude_map)) {
            (Some(include), _) => PolicyScope::Include(include),
            (None, Some(exclude)) => PolicyScope::Exclude(exclude),
            (None, None) => PolicyScope::All,
        }
    }

    pub fn policy_id(&self) -> Option<&str> {
        self.policy_id.as_deref()
    }

    pub fn policy_name(&self) -> Option<&str> {
        self.policy_name.as_deref()
    }

    pub fn security_service_type(&self) -> Option<&SecurityServiceType> {
        self.security_service_policy_data
            .as_ref()
            .and_then(|data| data.r#type.as_ref())
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct PolicySummary => PolicySummaryBuilder {
        policy_arn (set_policy_arn): String,
        policy_id (set_policy_id): String,
        policy_name (set_policy_name): String,
        resource_type (set_resource_type): String,
        security_service_type (set_security_service_type): SecurityServiceType,
        remediation_enabled (set_remediation_enabled): bool,
    }
}

model! {
    /// A resource that does not comply with a policy, and why.
    #[derive(Eq, Hash)]
    pub struct ComplianceViolator => ComplianceViolatorBuilder {
        resource_id (set_resource_id): String,
        violation_reason (set_violation_reason): ViolationReason,
        resource_type (set_resource_type): String,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct EvaluationResult => EvaluationResultBuilder {
        compliance_status (set_compliance_status): PolicyComplianceStatusType,
        violator_count (set_violator_count): i64,
        evaluation_limit_exceeded (set_evaluation_limit_exceeded): bool,
    }
}

model! {
    /// Noncompliant resources in one member account for one policy.
    #[derive(Eq, Hash)]
    pub struct PolicyComplianceDetail => PolicyComplianceDetailBuilder {
        policy_owner (set_policy_owner): String,
        policy_id (set_policy_id): String,
        member_account (set_member_account): String,
        violators (set_violators): Vec<ComplianceViolator>,
        evaluation_limit_exceeded (set_evaluation_limit_exceeded): bool,
        #[serde(with = "sdk_types::instant::epoch_seconds")]
        expired_at (set_expired_at): Instant,
        issue_info_map (set_issue_info_map): BTreeMap<DependentServiceName, String>,
    }
}

map_entries! {
    PolicyComplianceDetailBuilder {
        issue_info_map: add_issue_info_map_entry, clear_issue_info_map_entries (DependentServiceName => String);
    }
}

model! {
    /// Summary of a member account's compliance with a policy.
    #[derive(Eq, Hash)]
    pub struct PolicyComplianceStatus => PolicyComplianceStatusBuilder {
        policy_owner (set_policy_owner): String,
        policy_id (set_policy_id): String,
        policy_name (set_policy_name): String,
        member_account (set_member_account): String,
        evaluation_results (set_evaluation_results): Vec<EvaluationResult>,
        #[serde(with = "sdk_types::instant::epoch_seconds")]
        last_updated (set_last_updated): Instant,
        issue_info_map (set_issue_info_map): BTreeMap<DependentServiceName, String>,
    }
}

map_entries! {
    PolicyComplianceStatusBuilder {
        issue_info_map: add_issue_info_map_entry, clear_issue_info_map_entries (DependentServiceName => String);
    }
}
