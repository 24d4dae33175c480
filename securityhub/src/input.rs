/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::model::{
    AccountDetails, AwsSecurityFinding, AwsSecurityFindingFilters, AwsSecurityFindingIdentifier,
    ControlStatus, NoteUpdate, RecordState, RelatedFinding, SeverityUpdate, SortCriterion,
    StandardsSubscriptionRequest, VerificationState, WorkflowUpdate,
};
use sdk_types::constraints::{length, list_length, range, required};
use sdk_types::pagination::validate_page_size;
use sdk_types::{input, map_entries, BuildError, ValidateInput};
use std::collections::BTreeMap;

/// Findings per `BatchImportFindings` or `BatchUpdateFindings` request.
pub const MAX_BATCH_SIZE: usize = 100;

const MAX_TAGS: usize = 50;

/// Standards per `BatchEnableStandards` or `BatchDisableStandards` request.
pub const MAX_STANDARDS_BATCH_SIZE: usize = 25;

/// Path labels and identifiers: set and not empty.
fn non_empty(field: &'static str, value: Option<&str>) -> Result<(), BuildError> {
    match value {
        Some(v) if !v.is_empty() => Ok(()),
        _ => Err(BuildError::missing_field(field, "cannot be empty or unset")),
    }
}

/// Account id lists of the member and invitation operations: set, not empty, no blank ids.
fn account_ids(field: &'static str, value: &Option<Vec<String>>) -> Result<(), BuildError> {
    required(field, value)?;
    let ids = value.as_deref().unwrap_or_default();
    if ids.is_empty() {
        return Err(BuildError::invalid_field(field, "must contain at least one account id"));
    }
    for id in ids {
        non_empty(field, Some(id.as_str()))?;
    }
    Ok(())
}

fn tags(field: &'static str, value: Option<&BTreeMap<String, String>>) -> Result<(), BuildError> {
    if let Some(tags) = value {
        if tags.is_empty() || tags.len() > MAX_TAGS {
            return Err(BuildError::invalid_field(
                field,
                format!("must contain between 1 and {} tags, got {}", MAX_TAGS, tags.len()),
            ));
        }
        for (key, value) in tags {
            length(field, Some(key.as_str()), 1, 128)?;
            length(field, Some(value.as_str()), 0, 256)?;
        }
    }
    Ok(())
}

input! {
    pub struct GetFindingsInput => GetFindingsInputBuilder {
        filters (set_filters): AwsSecurityFindingFilters,
        sort_criteria (set_sort_criteria): Vec<SortCriterion>,
        next_token (set_next_token): String,
        max_results (set_max_results): i32,
    }
}

impl ValidateInput for GetFindingsInput {
    fn validate(&self) -> Result<(), BuildError> {
        validate_page_size(self.max_results)
    }
}

input! {
    pub struct BatchImportFindingsInput => BatchImportFindingsInputBuilder {
        findings (set_findings): Vec<AwsSecurityFinding>,
    }
}

impl ValidateInput for BatchImportFindingsInput {
    fn validate(&self) -> Result<(), BuildError> {
        required("findings", &self.findings)?;
        list_length("findings", self.findings.as_deref(), 1, MAX_BATCH_SIZE)
    }
}

input! {
    /// Updates the customer-controlled fields of up to 100 findings.
    pub struct BatchUpdateFindingsInput => BatchUpdateFindingsInputBuilder {
        finding_identifiers (set_finding_identifiers): Vec<AwsSecurityFindingIdentifier>,
        note (set_note): NoteUpdate,
        severity (set_severity): SeverityUpdate,
        verification_state (set_verification_state): VerificationState,
        confidence (set_confidence): i32,
        criticality (set_criticality): i32,
        types (set_types): Vec<String>,
        user_defined_fields (set_user_defined_fields): BTreeMap<String, String>,
        workflow (set_workflow): WorkflowUpdate,
        related_findings (set_related_findings): Vec<RelatedFinding>,
    }
}

map_entries! {
    BatchUpdateFindingsInputBuilder {
        user_defined_fields: add_user_defined_fields_entry, clear_user_defined_fields_entries (String => String);
    }
}

impl ValidateInput for BatchUpdateFindingsInput {
    fn validate(&self) -> Result<(), BuildError> {
        required("finding_identifiers", &self.finding_identifiers)?;
        list_length(
            "finding_identifiers",
            self.finding_identifiers.as_deref(),
            1,
            MAX_BATCH_SIZE,
        )?;
        for identifier in self.finding_identifiers.iter().flatten() {
            non_empty("finding_identifiers.id", identifier.id.as_deref())?;
            non_empty("finding_identifiers.product_arn", identifier.product_arn.as_deref())?;
        }
        if let Some(note) = &self.note {
            non_empty("note.text", note.text.as_deref())?;
            non_empty("note.updated_by", note.updated_by.as_deref())?;
        }
        if let Some(normalized) = self.severity.as_ref().and_then(|s| s.normalized) {
            range("severity.normalized", Some(normalized), 0, 100)?;
        }
        range("confidence", self.confidence, 0, 100)?;
        range("criticality", self.criticality, 0, 100)
    }
}

input! {
    /// Replaces the note and record state of every finding matching `filters`.
    pub struct UpdateFindingsInput => UpdateFindingsInputBuilder {
        filters (set_filters): AwsSecurityFindingFilters,
        note (set_note): NoteUpdate,
        record_state (set_record_state): RecordState,
    }
}

impl ValidateInput for UpdateFindingsInput {
    fn validate(&self) -> Result<(), BuildError> {
        required("filters", &self.filters)?;
        if let Some(note) = &self.note {
            non_empty("note.text", note.text.as_deref())?;
            non_empty("note.updated_by", note.updated_by.as_deref())?;
        }
        Ok(())
    }
}

input! {
    /// Leave `insight_arns` unset to list every insight.
    #[derive(Eq, Hash)]
    pub struct GetInsightsInput => GetInsightsInputBuilder {
        insight_arns (set_insight_arns): Vec<String>,
        next_token (set_next_token): String,
        max_results (set_max_results): i32,
    }
}

impl ValidateInput for GetInsightsInput {
    fn validate(&self) -> Result<(), BuildError> {
        validate_page_size(self.max_results)
    }
}

input! {
    #[derive(Eq, Hash)]
    pub struct GetEnabledStandardsInput => GetEnabledStandardsInputBuilder {
        standards_subscription_arns (set_standards_subscription_arns): Vec<String>,
        next_token (set_next_token): String,
        max_results (set_max_results): i32,
    }
}

impl ValidateInput for GetEnabledStandardsInput {
    fn validate(&self) -> Result<(), BuildError> {
        list_length(
            "standards_subscription_arns",
            self.standards_subscription_arns.as_deref(),
            1,
            25,
        )?;
        validate_page_size(self.max_results)
    }
}

input! {
    #[derive(Eq, Hash)]
    pub struct DescribeStandardsInput => DescribeStandardsInputBuilder {
        next_token (set_next_token): String,
        max_results (set_max_results): i32,
    }
}

impl ValidateInput for DescribeStandardsInput {
    fn validate(&self) -> Result<(), BuildError> {
        validate_page_size(self.max_results)
    }
}

input! {
    #[derive(Eq, Hash)]
    pub struct DescribeStandardsControlsInput => DescribeStandardsControlsInputBuilder {
        standards_subscription_arn (set_standards_subscription_arn): String,
        next_token (set_next_token): String,
        max_results (set_max_results): i32,
    }
}

impl ValidateInput for DescribeStandardsControlsInput {
    fn validate(&self) -> Result<(), BuildError> {
        non_empty(
            "standards_subscription_arn",
            self.standards_subscription_arn.as_deref(),
        )?;
        validate_page_size(self.max_results)
    }
}

input! {
    #[derive(Eq, Hash)]
    pub struct UpdateStandardsControlInput => UpdateStandardsControlInputBuilder {
        standards_control_arn (set_standards_control_arn): String,
        control_status (set_control_status): ControlStatus,
        disabled_reason (set_disabled_reason): String,
    }
}

impl ValidateInput for UpdateStandardsControlInput {
    fn validate(&self) -> Result<(), BuildError> {
        non_empty("standards_control_arn", self.standards_control_arn.as_deref())?;
        match self.disabled_reason.as_deref() {
            Some("") => Err(BuildError::invalid_field("disabled_reason", "cannot be empty")),
            _ => Ok(()),
        }
    }
}

input! {
    #[derive(Eq, Hash)]
    pub struct DescribeProductsInput => DescribeProductsInputBuilder {
        next_token (set_next_token): String,
        max_results (set_max_results): i32,
    }
}

impl ValidateInput for DescribeProductsInput {
    fn validate(&self) -> Result<(), BuildError> {
        validate_page_size(self.max_results)
    }
}

input! {
    #[derive(Eq, Hash)]
    pub struct DescribeActionTargetsInput => DescribeActionTargetsInputBuilder {
        action_target_arns (set_action_target_arns): Vec<String>,
        next_token (set_next_token): String,
        max_results (set_max_results): i32,
    }
}

impl ValidateInput for DescribeActionTargetsInput {
    fn validate(&self) -> Result<(), BuildError> {
        validate_page_size(self.max_results)
    }
}

input! {
    #[derive(Eq, Hash)]
    pub struct ListEnabledProductsForImportInput => ListEnabledProductsForImportInputBuilder {
        next_token (set_next_token): String,
        max_results (set_max_results): i32,
    }
}

impl ValidateInput for ListEnabledProductsForImportInput {
    fn validate(&self) -> Result<(), BuildError> {
        validate_page_size(self.max_results)
    }
}

input! {
    #[derive(Eq, Hash)]
    pub struct ListInvitationsInput => ListInvitationsInputBuilder {
        max_results (set_max_results): i32,
        next_token (set_next_token): String,
    }
}

impl ValidateInput for ListInvitationsInput {
    fn validate(&self) -> Result<(), BuildError> {
        validate_page_size(self.max_results)
    }
}

input! {
    /// `only_associated` defaults to `true` on the service side.
    #[derive(Eq, Hash)]
    pub struct ListMembersInput => ListMembersInputBuilder {
        only_associated (set_only_associated): bool,
        max_results (set_max_results): i32,
        next_token (set_next_token): String,
    }
}

impl ValidateInput for ListMembersInput {
    fn validate(&self) -> Result<(), BuildError> {
        validate_page_size(self.max_results)
    }
}

input! {
    #[derive(Eq, Hash)]
    pub struct DescribeHubInput => DescribeHubInputBuilder {
        hub_arn (set_hub_arn): String,
    }
}

impl ValidateInput for DescribeHubInput {
    fn validate(&self) -> Result<(), BuildError> {
        Ok(())
    }
}

input! {
    #[derive(Eq, Hash)]
    pub struct EnableSecurityHubInput => EnableSecurityHubInputBuilder {
        tags (set_tags): BTreeMap<String, String>,
        enable_default_standards (set_enable_default_standards): bool,
    }
}

map_entries! {
    EnableSecurityHubInputBuilder {
        tags: add_tags_entry, clear_tags_entries (String => String);
    }
}

impl ValidateInput for EnableSecurityHubInput {
    fn validate(&self) -> Result<(), BuildError> {
        tags("tags", self.tags.as_ref())
    }
}

input! {
    #[derive(Eq, Hash)]
    pub struct DisableSecurityHubInput => DisableSecurityHubInputBuilder {}
}

impl ValidateInput for DisableSecurityHubInput {
    fn validate(&self) -> Result<(), BuildError> {
        Ok(())
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
        non_empty("resource_arn", self.resource_arn.as_deref())
    }
}

input! {
    #[derive(Eq, Hash)]
    pub struct TagResourceInput => TagResourceInputBuilder {
        resource_arn (set_resource_arn): String,
        tags (set_tags): BTreeMap<String, String>,
    }
}

map_entries! {
    TagResourceInputBuilder {
        tags: add_tags_entry, clear_tags_entries (String => String);
    }
}

impl ValidateInput for TagResourceInput {
    fn validate(&self) -> Result<(), BuildError> {
        non_empty("resource_arn", self.resource_arn.as_deref())?;
        required("tags", &self.tags)?;
        tags("tags", self.tags.as_ref())
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
        non_empty("resource_arn", self.resource_arn.as_deref())?;
        required("tag_keys", &self.tag_keys)?;
        list_length("tag_keys", self.tag_keys.as_deref(), 1, MAX_TAGS)
    }
}

input! {
    /// Accepts the invitation `invitation_id` sent by the master account `master_id`.
    #[derive(Eq, Hash)]
    pub struct AcceptInvitationInput => AcceptInvitationInputBuilder {
        master_id (set_master_id): String,
        invitation_id (set_invitation_id): String,
    }
}

impl ValidateInput for AcceptInvitationInput {
    fn validate(&self) -> Result<(), BuildError> {
        non_empty("master_id", self.master_id.as_deref())?;
        non_empty("invitation_id", self.invitation_id.as_deref())
    }
}

input! {
    #[derive(Eq, Hash)]
    pub struct BatchDisableStandardsInput => BatchDisableStandardsInputBuilder {
        standards_subscription_arns (set_standards_subscription_arns): Vec<String>,
    }
}

impl ValidateInput for BatchDisableStandardsInput {
    fn validate(&self) -> Result<(), BuildError> {
        required("standards_subscription_arns", &self.standards_subscription_arns)?;
        list_length(
            "standards_subscription_arns",
            self.standards_subscription_arns.as_deref(),
            1,
            MAX_STANDARDS_BATCH_SIZE,
        )
    }
}

input! {
    #[derive(Eq, Hash)]
    pub struct BatchEnableStandardsInput => BatchEnableStandardsInputBuilder {
        standards_subscription_requests (set_standards_subscription_requests): Vec<StandardsSubscriptionRequest>,
    }
}

impl ValidateInput for BatchEnableStandardsInput {
    fn validate(&self) -> Result<(), BuildError> {
        required(
            "standards_subscription_requests",
            &self.standards_subscription_requests,
        )?;
        list_length(
            "standards_subscription_requests",
            self.standards_subscription_requests.as_deref(),
            1,
            MAX_STANDARDS_BATCH_SIZE,
        )?;
        for request in self.standards_subscription_requests.iter().flatten() {
            non_empty(
                "standards_subscription_requests.standards_arn",
                request.standards_arn.as_deref(),
            )?;
        }
        Ok(())
    }
}

input! {
    /// `id` becomes the last part of the action target ARN.
    #[derive(Eq, Hash)]
    pub struct CreateActionTargetInput => CreateActionTargetInputBuilder {
        name (set_name): String,
        description (set_description): String,
        id (set_id): String,
    }
}

impl ValidateInput for CreateActionTargetInput {
    fn validate(&self) -> Result<(), BuildError> {
        non_empty("name", self.name.as_deref())?;
        non_empty("description", self.description.as_deref())?;
        non_empty("id", self.id.as_deref())
    }
}

input! {
    #[derive(Eq, Hash)]
    pub struct UpdateActionTargetInput => UpdateActionTargetInputBuilder {
        action_target_arn (set_action_target_arn): String,
        name (set_name): String,
        description (set_description): String,
    }
}

impl ValidateInput for UpdateActionTargetInput {
    fn validate(&self) -> Result<(), BuildError> {
        non_empty("action_target_arn", self.action_target_arn.as_deref())
    }
}

input! {
    #[derive(Eq, Hash)]
    pub struct DeleteActionTargetInput => DeleteActionTargetInputBuilder {
        action_target_arn (set_action_target_arn): String,
    }
}

impl ValidateInput for DeleteActionTargetInput {
    fn validate(&self) -> Result<(), BuildError> {
        non_empty("action_target_arn", self.action_target_arn.as_deref())
    }
}

input! {
    /// Findings matching `filters` are grouped by the finding attribute `group_by_attribute`.
    pub struct CreateInsightInput => CreateInsightInputBuilder {
        name (set_name): String,
        filters (set_filters): AwsSecurityFindingFilters,
        group_by_attribute (set_group_by_attribute): String,
    }
}

impl ValidateInput for CreateInsightInput {
    fn validate(&self) -> Result<(), BuildError> {
        non_empty("name", self.name.as_deref())?;
        required("filters", &self.filters)?;
        non_empty("group_by_attribute", self.group_by_attribute.as_deref())
    }
}

input! {
    pub struct UpdateInsightInput => UpdateInsightInputBuilder {
        insight_arn (set_insight_arn): String,
        name (set_name): String,
        filters (set_filters): AwsSecurityFindingFilters,
        group_by_attribute (set_group_by_attribute): String,
    }
}

impl ValidateInput for UpdateInsightInput {
    fn validate(&self) -> Result<(), BuildError> {
        non_empty("insight_arn", self.insight_arn.as_deref())
    }
}

input! {
    #[derive(Eq, Hash)]
    pub struct DeleteInsightInput => DeleteInsightInputBuilder {
        insight_arn (set_insight_arn): String,
    }
}

impl ValidateInput for DeleteInsightInput {
    fn validate(&self) -> Result<(), BuildError> {
        non_empty("insight_arn", self.insight_arn.as_deref())
    }
}

input! {
    #[derive(Eq, Hash)]
    pub struct GetInsightResultsInput => GetInsightResultsInputBuilder {
        insight_arn (set_insight_arn): String,
    }
}

impl ValidateInput for GetInsightResultsInput {
    fn validate(&self) -> Result<(), BuildError> {
        non_empty("insight_arn", self.insight_arn.as_deref())
    }
}

input! {
    #[derive(Eq, Hash)]
    pub struct CreateMembersInput => CreateMembersInputBuilder {
        account_details (set_account_details): Vec<AccountDetails>,
    }
}

impl ValidateInput for CreateMembersInput {
    fn validate(&self) -> Result<(), BuildError> {
        required("account_details", &self.account_details)?;
        let details = self.account_details.as_deref().unwrap_or_default();
        if details.is_empty() {
            return Err(BuildError::invalid_field(
                "account_details",
                "must contain at least one account",
            ));
        }
        for account in details {
            non_empty("account_details.account_id", account.account_id.as_deref())?;
        }
        Ok(())
    }
}

macro_rules! account_ids_input {
    ($($(#[$meta:meta])* $name:ident => $builder:ident;)+) => {
        $(
            input! {
                $(#[$meta])*
                #[derive(Eq, Hash)]
                pub struct $name => $builder {
                    account_ids (set_account_ids): Vec<String>,
                }
            }

            impl ValidateInput for $name {
                fn validate(&self) -> Result<(), BuildError> {
                    account_ids("account_ids", &self.account_ids)
                }
            }
        )+
    };
}

account_ids_input! {
    /// Invites accounts already added with `CreateMembers`.
    InviteMembersInput => InviteMembersInputBuilder;
    GetMembersInput => GetMembersInputBuilder;
    DeleteMembersInput => DeleteMembersInputBuilder;
    DisassociateMembersInput => DisassociateMembersInputBuilder;
    /// Ids of the master accounts whose invitations are declined.
    DeclineInvitationsInput => DeclineInvitationsInputBuilder;
    DeleteInvitationsInput => DeleteInvitationsInputBuilder;
}

input! {
    #[derive(Eq, Hash)]
    pub struct DisassociateFromMasterAccountInput => DisassociateFromMasterAccountInputBuilder {}
}

impl ValidateInput for DisassociateFromMasterAccountInput {
    fn validate(&self) -> Result<(), BuildError> {
        Ok(())
    }
}

input! {
    #[derive(Eq, Hash)]
    pub struct GetMasterAccountInput => GetMasterAccountInputBuilder {}
}

impl ValidateInput for GetMasterAccountInput {
    fn validate(&self) -> Result<(), BuildError> {
        Ok(())
    }
}

input! {
    #[derive(Eq, Hash)]
    pub struct GetInvitationsCountInput => GetInvitationsCountInputBuilder {}
}

impl ValidateInput for GetInvitationsCountInput {
    fn validate(&self) -> Result<(), BuildError> {
        Ok(())
    }
}

input! {
    #[derive(Eq, Hash)]
    pub struct EnableImportFindingsForProductInput => EnableImportFindingsForProductInputBuilder {
        product_arn (set_product_arn): String,
    }
}

impl ValidateInput for EnableImportFindingsForProductInput {
    fn validate(&self) -> Result<(), BuildError> {
        non_empty("product_arn", self.product_arn.as_deref())
    }
}

input! {
    #[derive(Eq, Hash)]
    pub struct DisableImportFindingsForProductInput => DisableImportFindingsForProductInputBuilder {
        product_subscription_arn (set_product_subscription_arn): String,
    }
}

impl ValidateInput for DisableImportFindingsForProductInput {
    fn validate(&self) -> Result<(), BuildError> {
        non_empty(
            "product_subscription_arn",
            self.product_subscription_arn.as_deref(),
        )
    }
}
