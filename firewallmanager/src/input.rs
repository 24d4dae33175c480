/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::model::{Policy, SecurityServicePolicyData, Tag};
use lazy_static::lazy_static;
use regex::Regex;
use sdk_types::constraints::{length, list_length, name_pattern, pattern, required};
use sdk_types::pagination::{validate_page_size, validate_token};
use sdk_types::{input, BuildError, Instant, ValidateInput};

lazy_static! {
    static ref POLICY_ID: Regex = Regex::new("^[a-z0-9A-Z-]{36}$").expect("pattern is a valid regex");
}

const MAX_TAGS: usize = 200;

fn policy_id(field: &'static str, value: Option<&str>) -> Result<(), BuildError> {
    length(field, value, 36, 36)?;
    pattern(field, value, &POLICY_ID)
}

fn account_id(field: &'static str, value: Option<&str>) -> Result<(), BuildError> {
    length(field, value, 1, 1024)
}

fn resource_arn(value: Option<&str>) -> Result<(), BuildError> {
    required("resource_arn", &value)?;
    length("resource_arn", value, 1, 1024)
}

fn resource_name(field: &'static str, value: Option<&str>) -> Result<(), BuildError> {
    length(field, value, 1, 128)?;
    name_pattern(field, value)
}

input! {
    #[derive(Eq, Hash)]
    pub struct AssociateAdminAccountInput => AssociateAdminAccountInputBuilder {
        admin_account (set_admin_account): String,
    }
}

impl ValidateInput for AssociateAdminAccountInput {
    fn validate(&self) -> Result<(), BuildError> {
        required("admin_account", &self.admin_account)?;
        account_id("admin_account", self.admin_account.as_deref())
    }
}

input! {
    #[derive(Eq, Hash)]
    pub struct DeleteNotificationChannelInput => DeleteNotificationChannelInputBuilder {}
}

impl ValidateInput for DeleteNotificationChannelInput {
    fn validate(&self) -> Result<(), BuildError> {
        Ok(())
    }
}

input! {
    #[derive(Eq, Hash)]
    pub struct DeletePolicyInput => DeletePolicyInputBuilder {
        policy_id (set_policy_id): String,
        delete_all_policy_resources (set_delete_all_policy_resources): bool,
    }
}

impl ValidateInput for DeletePolicyInput {
    fn validate(&self) -> Result<(), BuildError> {
        required("policy_id", &self.policy_id)?;
        policy_id("policy_id", self.policy_id.as_deref())
    }
}

input! {
    #[derive(Eq, Hash)]
    pub struct DisassociateAdminAccountInput => DisassociateAdminAccountInputBuilder {}
}

impl ValidateInput for DisassociateAdminAccountInput {
    fn validate(&self) -> Result<(), BuildError> {
        Ok(())
    }
}

input! {
    #[derive(Eq, Hash)]
    pub struct GetAdminAccountInput => GetAdminAccountInputBuilder {}
}

impl ValidateInput for GetAdminAccountInput {
    fn validate(&self) -> Result<(), BuildError> {
        Ok(())
    }
}

input! {
    #[derive(Eq, Hash)]
    pub struct GetComplianceDetailInput => GetComplianceDetailInputBuilder {
        policy_id (set_policy_id): String,
        member_account (set_member_account): String,
    }
}

impl ValidateInput for GetComplianceDetailInput {
    fn validate(&self) -> Result<(), BuildError> {
        required("policy_id", &self.policy_id)?;
        policy_id("policy_id", self.policy_id.as_deref())?;
        required("member_account", &self.member_account)?;
        account_id("member_account", self.member_account.as_deref())
    }
}

input! {
    #[derive(Eq, Hash)]
    pub struct GetNotificationChannelInput => GetNotificationChannelInputBuilder {}
}

impl ValidateInput for GetNotificationChannelInput {
    fn validate(&self) -> Result<(), BuildError> {
        Ok(())
    }
}

input! {
    #[derive(Eq, Hash)]
    pub struct GetPolicyInput => GetPolicyInputBuilder {
        policy_id (set_policy_id): String,
    }
}

impl ValidateInput for GetPolicyInput {
    fn validate(&self) -> Result<(), BuildError> {
        required("policy_id", &self.policy_id)?;
        policy_id("policy_id", self.policy_id.as_deref())
    }
}

input! {
    /// Attacks against Shield Advanced protected resources during a time window.
    #[derive(Eq, Hash)]
    pub struct GetProtectionStatusInput => GetProtectionStatusInputBuilder {
        policy_id (set_policy_id): String,
        member_account_id (set_member_account_id): String,
        #[serde(with = "sdk_types::instant::epoch_seconds")]
        start_time (set_start_time): Instant,
        #[serde(with = "sdk_types::instant::epoch_seconds")]
        end_time (set_end_time): Instant,
        next_token (set_next_token): String,
        max_results (set_max_results): i32,
    }
}

impl ValidateInput for GetProtectionStatusInput {
    fn validate(&self) -> Result<(), BuildError> {
        required("policy_id", &self.policy_id)?;
        policy_id("policy_id", self.policy_id.as_deref())?;
        account_id("member_account_id", self.member_account_id.as_deref())?;
        if let (Some(start), Some(end)) = (&self.start_time, &self.end_time) {
            if start > end {
                return Err(BuildError::invalid_field(
                    "start_time",
                    "the start of the time window is after its end",
                ));
            }
        }
        validate_token(self.next_token.as_deref())?;
        validate_page_size(self.max_results)
    }
}

input! {
    #[derive(Eq, Hash)]
    pub struct ListComplianceStatusInput => ListComplianceStatusInputBuilder {
        policy_id (set_policy_id): String,
        next_token (set_next_token): String,
        max_results (set_max_results): i32,
    }
}

impl ValidateInput for ListComplianceStatusInput {
    fn validate(&self) -> Result<(), BuildError> {
        required("policy_id", &self.policy_id)?;
        policy_id("policy_id", self.policy_id.as_deref())?;
        validate_token(self.next_token.as_deref())?;
        validate_page_size(self.max_results)
    }
}

input! {
    #[derive(Eq, Hash)]
    pub struct ListMemberAccountsInput => ListMemberAccountsInputBuilder {
        next_token (set_next_token): String,
        max_results (set_max_results): i32,
    }
}

impl ValidateInput for ListMemberAccountsInput {
    fn validate(&self) -> Result<(), BuildError> {
        validate_token(self.next_token.as_deref())?;
        validate_page_size(self.max_results)
    }
}

input! {
    #[derive(Eq, Hash)]
    pub struct ListPoliciesInput => ListPoliciesInputBuilder {
        next_token (set_next_token): String,
        max_results (set_max_results): i32,
    }
}

impl ValidateInput for ListPoliciesInput {
    fn validate(&self) -> Result<(), BuildError> {
        validate_token(self.next_token.as_deref())?;
        validate_page_size(self.max_results)
    }
}

input! {
    #[derive(Eq, Hash)]
    pub struct ListTagsForResourceInput => ListTagsForResourceInputBuilder {
        resource_arn (set_resource_arn): String,
    }
}

impl ValidateInput for ListTagsForResourceInput {
    fn validate(&self) -> Result<(), BuildError> {
        resource_arn(self.resource_arn.as_deref())
    }
}

input! {
    #[derive(Eq, Hash)]
    pub struct PutNotificationChannelInput => PutNotificationChannelInputBuilder {
        sns_topic_arn (set_sns_topic_arn): String,
        sns_role_name (set_sns_role_name): String,
    }
}

impl ValidateInput for PutNotificationChannelInput {
    fn validate(&self) -> Result<(), BuildError> {
        required("sns_topic_arn", &self.sns_topic_arn)?;
        length("sns_topic_arn", self.sns_topic_arn.as_deref(), 1, 1024)?;
        required("sns_role_name", &self.sns_role_name)?;
        length("sns_role_name", self.sns_role_name.as_deref(), 1, 1024)
    }
}

input! {
    #[derive(Eq, Hash)]
    pub struct PutPolicyInput => PutPolicyInputBuilder {
        policy (set_policy): Policy,
        tag_list (set_tag_list): Vec<Tag>,
    }
}

fn validate_policy(policy: &Policy) -> Result<(), BuildError> {
    policy_id("policy.policy_id", policy.policy_id.as_deref())?;
    required("policy.policy_name", &policy.policy_name)?;
    resource_name("policy.policy_name", policy.policy_name.as_deref())?;
    length(
        "policy.policy_update_token",
        policy.policy_update_token.as_deref(),
        1,
        1024,
    )?;
    required("policy.resource_type", &policy.resource_type)?;
    resource_name("policy.resource_type", policy.resource_type.as_deref())?;
    required(
        "policy.security_service_policy_data",
        &policy.security_service_policy_data,
    )?;
    if let Some(SecurityServicePolicyData { r#type, .. }) = &policy.security_service_policy_data {
        required("policy.security_service_policy_data.type", r#type)?;
    }
    required("policy.exclude_resource_tags", &policy.exclude_resource_tags)?;
    required("policy.remediation_enabled", &policy.remediation_enabled)?;
    list_length(
        "policy.resource_tags",
        policy.resource_tags.as_deref(),
        0,
        8,
    )
}

fn validate_tags(field: &'static str, tags: Option<&[Tag]>) -> Result<(), BuildError> {
    list_length(field, tags, 0, MAX_TAGS)?;
    for tag in tags.unwrap_or_default() {
        required("tag.key", &tag.key)?;
        length("tag.key", tag.key.as_deref(), 1, 128)?;
        required("tag.value", &tag.value)?;
        length("tag.value", tag.value.as_deref(), 0, 256)?;
    }
    Ok(())
}

impl ValidateInput for PutPolicyInput {
    fn validate(&self) -> Result<(), BuildError> {
        required("policy", &self.policy)?;
        if let Some(policy) = &self.policy {
            validate_policy(policy)?;
        }
        validate_tags("tag_list", self.tag_list.as_deref())
    }
}

input! {
    #[derive(Eq, Hash)]
    pub struct TagResourceInput => TagResourceInputBuilder {
        resource_arn (set_resource_arn): String,
        tag_list (set_tag_list): Vec<Tag>,
    }
}

impl ValidateInput for TagResourceInput {
    fn validate(&self) -> Result<(), BuildError> {
        resource_arn(self.resource_arn.as_deref())?;
        required("tag_list", &self.tag_list)?;
        validate_tags("tag_list", self.tag_list.as_deref())
    }
}

input! {
    #[derive(Eq, Hash)]
    pub struct UntagResourceInput => UntagResourceInputBuilder {
        resource_arn (set_resource_arn): String,
        tag_keys (set_tag_keys): Vec<String>,
    }
}

impl ValidateInput for UntagResourceInput {
    fn validate(&self) -> Result<(), BuildError> {
        resource_arn(self.resource_arn.as_deref())?;
        required("tag_keys", &self.tag_keys)?;
        list_length("tag_keys", self.tag_keys.as_deref(), 0, MAX_TAGS)
    }
}
