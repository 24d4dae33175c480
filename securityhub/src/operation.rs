/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! One type per Security Hub operation.
//!
//! Security Hub speaks restJson1: each operation binds its input members to the HTTP method,
//! URI path labels, the query string and a JSON body. `make_operation` produces the unsigned
//! request together with the parser for the response:
//!
//! ```ignore
//! let config = Config::builder().region(Region::new("us-east-1")).build();
//! let op = DescribeStandardsControls::builder()
//!     .standards_subscription_arn(arn)
//!     .build()?
//!     .make_operation(&config)?;
//! let output = op.parse_response(&response)?;
//! ```

use crate::config::{Config, ENDPOINT_PREFIX};
use crate::error::Error;
use crate::input::*;
use crate::model::{AwsSecurityFindingFilters, ControlStatus};
use crate::output::*;
use http::Method;
use sdk_http::rest_json::RestRequest;
use sdk_http::{BuildError, Metadata, Operation, ParseJsonResponse};
use sdk_types::ValidateInput;
use serde::Serialize;
use std::collections::BTreeMap;

/// Where an input's members go in the HTTP request.
trait HttpBinding {
    fn bind(&self) -> Result<RestRequest, BuildError>;
}

fn build_operation<I, O>(
    config: &Config,
    name: &'static str,
    input: &I,
) -> Result<Operation<ParseJsonResponse<O, Error>>, BuildError>
where
    I: HttpBinding + ValidateInput,
{
    input.validate()?;
    let endpoint = config.endpoint()?;
    tracing::debug!(operation = name, endpoint = %endpoint.uri(), "building request");
    let request = input.bind()?.build(&endpoint)?;
    Ok(Operation::new(
        request,
        ParseJsonResponse::new(),
        Metadata::new(name, ENDPOINT_PREFIX),
    ))
}

impl HttpBinding for GetFindingsInput {
    fn bind(&self) -> Result<RestRequest, BuildError> {
        RestRequest::new(Method::POST).path("/findings").json_body(self)
    }
}

impl HttpBinding for BatchImportFindingsInput {
    fn bind(&self) -> Result<RestRequest, BuildError> {
        RestRequest::new(Method::POST)
            .path("/findings/import")
            .json_body(self)
    }
}

impl HttpBinding for BatchUpdateFindingsInput {
    fn bind(&self) -> Result<RestRequest, BuildError> {
        RestRequest::new(Method::PATCH)
            .path("/findings/batchupdate")
            .json_body(self)
    }
}

impl HttpBinding for UpdateFindingsInput {
    fn bind(&self) -> Result<RestRequest, BuildError> {
        RestRequest::new(Method::PATCH).path("/findings").json_body(self)
    }
}

impl HttpBinding for GetInsightsInput {
    fn bind(&self) -> Result<RestRequest, BuildError> {
        RestRequest::new(Method::POST).path("/insights/get").json_body(self)
    }
}

impl HttpBinding for GetEnabledStandardsInput {
    fn bind(&self) -> Result<RestRequest, BuildError> {
        RestRequest::new(Method::POST).path("/standards/get").json_body(self)
    }
}

impl HttpBinding for DescribeStandardsInput {
    fn bind(&self) -> Result<RestRequest, BuildError> {
        Ok(RestRequest::new(Method::GET)
            .path("/standards")
            .query("NextToken", self.next_token.as_deref())
            .query("MaxResults", self.max_results))
    }
}

impl HttpBinding for DescribeStandardsControlsInput {
    fn bind(&self) -> Result<RestRequest, BuildError> {
        Ok(RestRequest::new(Method::GET)
            .path("/standards/controls")
            .label(
                "standards_subscription_arn",
                self.standards_subscription_arn.as_deref(),
                true,
            )?
            .query("NextToken", self.next_token.as_deref())
            .query("MaxResults", self.max_results))
    }
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct UpdateStandardsControlBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    control_status: Option<&'a ControlStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    disabled_reason: Option<&'a str>,
}

impl HttpBinding for UpdateStandardsControlInput {
    fn bind(&self) -> Result<RestRequest, BuildError> {
        RestRequest::new(Method::PATCH)
            .path("/standards/control")
            .label(
                "standards_control_arn",
                self.standards_control_arn.as_deref(),
                true,
            )?
            .json_body(&UpdateStandardsControlBody {
                control_status: self.control_status.as_ref(),
                disabled_reason: self.disabled_reason.as_deref(),
            })
    }
}

impl HttpBinding for DescribeProductsInput {
    fn bind(&self) -> Result<RestRequest, BuildError> {
        Ok(RestRequest::new(Method::GET)
            .path("/products")
            .query("NextToken", self.next_token.as_deref())
            .query("MaxResults", self.max_results))
    }
}

impl HttpBinding for DescribeActionTargetsInput {
    fn bind(&self) -> Result<RestRequest, BuildError> {
        RestRequest::new(Method::POST)
            .path("/actionTargets/get")
            .json_body(self)
    }
}

impl HttpBinding for ListEnabledProductsForImportInput {
    fn bind(&self) -> Result<RestRequest, BuildError> {
        Ok(RestRequest::new(Method::GET)
            .path("/productSubscriptions")
            .query("NextToken", self.next_token.as_deref())
            .query("MaxResults", self.max_results))
    }
}

impl HttpBinding for ListInvitationsInput {
    fn bind(&self) -> Result<RestRequest, BuildError> {
        Ok(RestRequest::new(Method::GET)
            .path("/invitations")
            .query("MaxResults", self.max_results)
            .query("NextToken", self.next_token.as_deref()))
    }
}

impl HttpBinding for ListMembersInput {
    fn bind(&self) -> Result<RestRequest, BuildError> {
        Ok(RestRequest::new(Method::GET)
            .path("/members")
            .query("OnlyAssociated", self.only_associated)
            .query("MaxResults", self.max_results)
            .query("NextToken", self.next_token.as_deref()))
    }
}

impl HttpBinding for DescribeHubInput {
    fn bind(&self) -> Result<RestRequest, BuildError> {
        Ok(RestRequest::new(Method::GET)
            .path("/accounts")
            .query("HubArn", self.hub_arn.as_deref()))
    }
}

impl HttpBinding for EnableSecurityHubInput {
    fn bind(&self) -> Result<RestRequest, BuildError> {
        RestRequest::new(Method::POST).path("/accounts").json_body(self)
    }
}

impl HttpBinding for DisableSecurityHubInput {
    fn bind(&self) -> Result<RestRequest, BuildError> {
        Ok(RestRequest::new(Method::DELETE).path("/accounts"))
    }
}

impl HttpBinding for ListTagsForResourceInput {
    fn bind(&self) -> Result<RestRequest, BuildError> {
        RestRequest::new(Method::GET)
            .path("/tags")
            .label("resource_arn", self.resource_arn.as_deref(), false)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct TagResourceBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<&'a BTreeMap<String, String>>,
}

impl HttpBinding for TagResourceInput {
    fn bind(&self) -> Result<RestRequest, BuildError> {
        RestRequest::new(Method::POST)
            .path("/tags")
            .label("resource_arn", self.resource_arn.as_deref(), false)?
            .json_body(&TagResourceBody {
                tags: self.tags.as_ref(),
            })
    }
}

impl HttpBinding for UntagResourceInput {
    fn bind(&self) -> Result<RestRequest, BuildError> {
        Ok(RestRequest::new(Method::DELETE)
            .path("/tags")
            .label("resource_arn", self.resource_arn.as_deref(), false)?
            .query_list("tagKeys", self.tag_keys.as_deref()))
    }
}

impl HttpBinding for AcceptInvitationInput {
    fn bind(&self) -> Result<RestRequest, BuildError> {
        RestRequest::new(Method::POST).path("/master").json_body(self)
    }
}

impl HttpBinding for BatchDisableStandardsInput {
    fn bind(&self) -> Result<RestRequest, BuildError> {
        RestRequest::new(Method::POST)
            .path("/standards/deregister")
            .json_body(self)
    }
}

impl HttpBinding for BatchEnableStandardsInput {
    fn bind(&self) -> Result<RestRequest, BuildError> {
        RestRequest::new(Method::POST)
            .path("/standards/register")
            .json_body(self)
    }
}

impl HttpBinding for CreateActionTargetInput {
    fn bind(&self) -> Result<RestRequest, BuildError> {
        RestRequest::new(Method::POST).path("/actionTargets").json_body(self)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct UpdateActionTargetBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
}

impl HttpBinding for UpdateActionTargetInput {
    fn bind(&self) -> Result<RestRequest, BuildError> {
        RestRequest::new(Method::PATCH)
            .path("/actionTargets")
            .label("action_target_arn", self.action_target_arn.as_deref(), true)?
            .json_body(&UpdateActionTargetBody {
                name: self.name.as_deref(),
                description: self.description.as_deref(),
            })
    }
}

impl HttpBinding for DeleteActionTargetInput {
    fn bind(&self) -> Result<RestRequest, BuildError> {
        RestRequest::new(Method::DELETE)
            .path("/actionTargets")
            .label("action_target_arn", self.action_target_arn.as_deref(), true)
    }
}

impl HttpBinding for CreateInsightInput {
    fn bind(&self) -> Result<RestRequest, BuildError> {
        RestRequest::new(Method::POST).path("/insights").json_body(self)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct UpdateInsightBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    filters: Option<&'a AwsSecurityFindingFilters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    group_by_attribute: Option<&'a str>,
}

impl HttpBinding for UpdateInsightInput {
    fn bind(&self) -> Result<RestRequest, BuildError> {
        RestRequest::new(Method::PATCH)
            .path("/insights")
            .label("insight_arn", self.insight_arn.as_deref(), true)?
            .json_body(&UpdateInsightBody {
                name: self.name.as_deref(),
                filters: self.filters.as_ref(),
                group_by_attribute: self.group_by_attribute.as_deref(),
            })
    }
}

impl HttpBinding for DeleteInsightInput {
    fn bind(&self) -> Result<RestRequest, BuildError> {
        RestRequest::new(Method::DELETE)
            .path("/insights")
            .label("insight_arn", self.insight_arn.as_deref(), true)
    }
}

impl HttpBinding for GetInsightResultsInput {
    fn bind(&self) -> Result<RestRequest, BuildError> {
        RestRequest::new(Method::GET)
            .path("/insights/results")
            .label("insight_arn", self.insight_arn.as_deref(), true)
    }
}

impl HttpBinding for CreateMembersInput {
    fn bind(&self) -> Result<RestRequest, BuildError> {
        RestRequest::new(Method::POST).path("/members").json_body(self)
    }
}

impl HttpBinding for InviteMembersInput {
    fn bind(&self) -> Result<RestRequest, BuildError> {
        RestRequest::new(Method::POST)
            .path("/members/invite")
            .json_body(self)
    }
}

impl HttpBinding for GetMembersInput {
    fn bind(&self) -> Result<RestRequest, BuildError> {
        RestRequest::new(Method::POST).path("/members/get").json_body(self)
    }
}

impl HttpBinding for DeleteMembersInput {
    fn bind(&self) -> Result<RestRequest, BuildError> {
        RestRequest::new(Method::POST)
            .path("/members/delete")
            .json_body(self)
    }
}

impl HttpBinding for DisassociateMembersInput {
    fn bind(&self) -> Result<RestRequest, BuildError> {
        RestRequest::new(Method::POST)
            .path("/members/disassociate")
            .json_body(self)
    }
}

impl HttpBinding for DeclineInvitationsInput {
    fn bind(&self) -> Result<RestRequest, BuildError> {
        RestRequest::new(Method::POST)
            .path("/invitations/decline")
            .json_body(self)
    }
}

impl HttpBinding for DeleteInvitationsInput {
    fn bind(&self) -> Result<RestRequest, BuildError> {
        RestRequest::new(Method::POST)
            .path("/invitations/delete")
            .json_body(self)
    }
}

impl HttpBinding for DisassociateFromMasterAccountInput {
    fn bind(&self) -> Result<RestRequest, BuildError> {
        Ok(RestRequest::new(Method::POST).path("/master/disassociate"))
    }
}

impl HttpBinding for GetMasterAccountInput {
    fn bind(&self) -> Result<RestRequest, BuildError> {
        Ok(RestRequest::new(Method::GET).path("/master"))
    }
}

impl HttpBinding for GetInvitationsCountInput {
    fn bind(&self) -> Result<RestRequest, BuildError> {
        Ok(RestRequest::new(Method::GET).path("/invitations/count"))
    }
}

impl HttpBinding for EnableImportFindingsForProductInput {
    fn bind(&self) -> Result<RestRequest, BuildError> {
        RestRequest::new(Method::POST)
            .path("/productSubscriptions")
            .json_body(self)
    }
}

impl HttpBinding for DisableImportFindingsForProductInput {
    fn bind(&self) -> Result<RestRequest, BuildError> {
        RestRequest::new(Method::DELETE)
            .path("/productSubscriptions")
            .label(
                "product_subscription_arn",
                self.product_subscription_arn.as_deref(),
                true,
            )
    }
}

macro_rules! operations {
    ($($(#[$meta:meta])* $op:ident($input:ident, $builder:ident) -> $output:ident;)+) => {
        $(
            $(#[$meta])*
            #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
            pub struct $op;

            impl $op {
                pub const NAME: &'static str = stringify!($op);

                #[doc = concat!("Creates a builder for the input of [`", stringify!($op), "`].")]
                pub fn builder() -> $builder {
                    $input::builder()
                }
            }

            impl $input {
                /// Marshals this input into an unsigned request for the configured endpoint.
                pub fn make_operation(
                    &self,
                    config: &Config,
                ) -> Result<Operation<ParseJsonResponse<$output, Error>>, BuildError> {
                    build_operation(config, $op::NAME, self)
                }
            }
        )+
    };
}

operations! {
    /// Returns findings matching the filters, sorted by the sort criteria.
    GetFindings(GetFindingsInput, GetFindingsInputBuilder) -> GetFindingsOutput;
    /// Imports findings in the AWS Security Finding Format.
    BatchImportFindings(BatchImportFindingsInput, BatchImportFindingsInputBuilder) -> BatchImportFindingsOutput;
    /// Updates workflow status, severity, notes and other customer fields of findings.
    BatchUpdateFindings(BatchUpdateFindingsInput, BatchUpdateFindingsInputBuilder) -> BatchUpdateFindingsOutput;
    /// Superseded by `BatchUpdateFindings`.
    UpdateFindings(UpdateFindingsInput, UpdateFindingsInputBuilder) -> UpdateFindingsOutput;
    GetInsights(GetInsightsInput, GetInsightsInputBuilder) -> GetInsightsOutput;
    GetEnabledStandards(GetEnabledStandardsInput, GetEnabledStandardsInputBuilder) -> GetEnabledStandardsOutput;
    /// Lists the available standards.
    DescribeStandards(DescribeStandardsInput, DescribeStandardsInputBuilder) -> DescribeStandardsOutput;
    /// Lists the controls of an enabled standard.
    DescribeStandardsControls(DescribeStandardsControlsInput, DescribeStandardsControlsInputBuilder) -> DescribeStandardsControlsOutput;
    /// Enables or disables one control of a standard.
    UpdateStandardsControl(UpdateStandardsControlInput, UpdateStandardsControlInputBuilder) -> UpdateStandardsControlOutput;
    DescribeProducts(DescribeProductsInput, DescribeProductsInputBuilder) -> DescribeProductsOutput;
    DescribeActionTargets(DescribeActionTargetsInput, DescribeActionTargetsInputBuilder) -> DescribeActionTargetsOutput;
    ListEnabledProductsForImport(ListEnabledProductsForImportInput, ListEnabledProductsForImportInputBuilder) -> ListEnabledProductsForImportOutput;
    ListInvitations(ListInvitationsInput, ListInvitationsInputBuilder) -> ListInvitationsOutput;
    ListMembers(ListMembersInput, ListMembersInputBuilder) -> ListMembersOutput;
    /// Returns the hub resource of the account.
    DescribeHub(DescribeHubInput, DescribeHubInputBuilder) -> DescribeHubOutput;
    EnableSecurityHub(EnableSecurityHubInput, EnableSecurityHubInputBuilder) -> EnableSecurityHubOutput;
    /// Disables Security Hub. Findings and insights are deleted after 90 days.
    DisableSecurityHub(DisableSecurityHubInput, DisableSecurityHubInputBuilder) -> DisableSecurityHubOutput;
    ListTagsForResource(ListTagsForResourceInput, ListTagsForResourceInputBuilder) -> ListTagsForResourceOutput;
    TagResource(TagResourceInput, TagResourceInputBuilder) -> TagResourceOutput;
    UntagResource(UntagResourceInput, UntagResourceInputBuilder) -> UntagResourceOutput;
    /// Accepts a master account's invitation, letting it view this account's findings.
    AcceptInvitation(AcceptInvitationInput, AcceptInvitationInputBuilder) -> AcceptInvitationOutput;
    BatchDisableStandards(BatchDisableStandardsInput, BatchDisableStandardsInputBuilder) -> BatchDisableStandardsOutput;
    /// Enables standards by ARN. `DescribeStandards` lists the available ones.
    BatchEnableStandards(BatchEnableStandardsInput, BatchEnableStandardsInputBuilder) -> BatchEnableStandardsOutput;
    /// Creates a custom action that sends selected findings or insights to CloudWatch Events.
    CreateActionTarget(CreateActionTargetInput, CreateActionTargetInputBuilder) -> CreateActionTargetOutput;
    UpdateActionTarget(UpdateActionTargetInput, UpdateActionTargetInputBuilder) -> UpdateActionTargetOutput;
    DeleteActionTarget(DeleteActionTargetInput, DeleteActionTargetInputBuilder) -> DeleteActionTargetOutput;
    CreateInsight(CreateInsightInput, CreateInsightInputBuilder) -> CreateInsightOutput;
    UpdateInsight(UpdateInsightInput, UpdateInsightInputBuilder) -> UpdateInsightOutput;
    DeleteInsight(DeleteInsightInput, DeleteInsightInputBuilder) -> DeleteInsightOutput;
    /// Returns the finding counts of an insight, grouped by its group-by attribute.
    GetInsightResults(GetInsightResultsInput, GetInsightResultsInputBuilder) -> GetInsightResultsOutput;
    /// Adds member accounts to this master account. They still need to be invited.
    CreateMembers(CreateMembersInput, CreateMembersInputBuilder) -> CreateMembersOutput;
    InviteMembers(InviteMembersInput, InviteMembersInputBuilder) -> InviteMembersOutput;
    GetMembers(GetMembersInput, GetMembersInputBuilder) -> GetMembersOutput;
    DeleteMembers(DeleteMembersInput, DeleteMembersInputBuilder) -> DeleteMembersOutput;
    DisassociateMembers(DisassociateMembersInput, DisassociateMembersInputBuilder) -> DisassociateMembersOutput;
    DeclineInvitations(DeclineInvitationsInput, DeclineInvitationsInputBuilder) -> DeclineInvitationsOutput;
    DeleteInvitations(DeleteInvitationsInput, DeleteInvitationsInputBuilder) -> DeleteInvitationsOutput;
    /// Removes this member account from its master account.
    DisassociateFromMasterAccount(DisassociateFromMasterAccountInput, DisassociateFromMasterAccountInputBuilder) -> DisassociateFromMasterAccountOutput;
    GetMasterAccount(GetMasterAccountInput, GetMasterAccountInputBuilder) -> GetMasterAccountOutput;
    GetInvitationsCount(GetInvitationsCountInput, GetInvitationsCountInputBuilder) -> GetInvitationsCountOutput;
    /// Subscribes to findings from an integrated product.
    EnableImportFindingsForProduct(EnableImportFindingsForProductInput, EnableImportFindingsForProductInputBuilder) -> EnableImportFindingsForProductOutput;
    DisableImportFindingsForProduct(DisableImportFindingsForProductInput, DisableImportFindingsForProductInputBuilder) -> DisableImportFindingsForProductOutput;
}

#[cfg(test)]
mod test {
    use super::{
        DescribeStandardsControls, DisableSecurityHub, DisassociateFromMasterAccount, GetFindings,
        UpdateInsight, UpdateStandardsControl,
    };
    use crate::config::Config;
    use crate::model::{AwsSecurityFindingFilters, ControlStatus};
    use sdk_http::{BuildError, Region};

    fn config() -> Config {
        Config::builder().region(Region::new("us-west-2")).build()
    }

    #[test]
    fn names_and_metadata() {
        assert_eq!(GetFindings::NAME, "GetFindings");
        let op = GetFindings::builder()
            .max_results(5)
            .build()
            .unwrap()
            .make_operation(&config())
            .unwrap();
        assert_eq!(op.metadata().name(), "GetFindings");
        assert_eq!(op.metadata().service(), "securityhub");
        assert_eq!(
            op.request().uri().to_string(),
            "https://securityhub.us-west-2.amazonaws.com/findings"
        );
        assert_eq!(op.request().body().as_ref(), br#"{"MaxResults":5}"#);
    }

    #[test]
    fn greedy_label_keeps_slashes() {
        let op = DescribeStandardsControls::builder()
            .standards_subscription_arn(
                "arn:aws:securityhub:us-west-2:123456789012:subscription/pci-dss/v/3.2.1",
            )
            .max_results(50)
            .build()
            .unwrap()
            .make_operation(&config())
            .unwrap();
        assert_eq!(
            op.request().uri().path_and_query().unwrap().as_str(),
            "/standards/controls/arn%3Aaws%3Asecurityhub%3Aus-west-2%3A123456789012%3Asubscription/pci-dss/v/3.2.1?MaxResults=50"
        );
        assert!(op.request().body().is_empty());
    }

    #[test]
    fn body_excludes_label_members() {
        let op = UpdateStandardsControl::builder()
            .standards_control_arn("arn:aws:securityhub:us-west-2:123456789012:control/pci-dss/v/3.2.1/PCI.AutoScaling.1")
            .control_status(ControlStatus::Disabled)
            .disabled_reason("Not applicable")
            .build()
            .unwrap()
            .make_operation(&config())
            .unwrap();
        assert_eq!(op.request().method(), http::Method::PATCH);
        assert_eq!(
            op.request().body().as_ref(),
            br#"{"ControlStatus":"DISABLED","DisabledReason":"Not applicable"}"#
        );
    }

    #[test]
    fn update_insight_keeps_the_arn_out_of_the_body() {
        let op = UpdateInsight::builder()
            .insight_arn("arn:aws:securityhub:us-west-2:123456789012:insight/123456789012/custom/a1b2")
            .name("Public buckets")
            .build()
            .unwrap()
            .make_operation(&config())
            .unwrap();
        assert_eq!(op.request().method(), http::Method::PATCH);
        assert_eq!(
            op.request().uri().path(),
            "/insights/arn%3Aaws%3Asecurityhub%3Aus-west-2%3A123456789012%3Ainsight/123456789012/custom/a1b2"
        );
        assert_eq!(op.request().body().as_ref(), br#"{"Name":"Public buckets"}"#);
    }

    #[test]
    fn bodiless_post() {
        let op = DisassociateFromMasterAccount::builder()
            .build()
            .unwrap()
            .make_operation(&config())
            .unwrap();
        assert_eq!(op.request().method(), http::Method::POST);
        assert_eq!(op.request().uri().path(), "/master/disassociate");
        assert!(op.request().body().is_empty());
        assert_eq!(op.metadata().name(), "DisassociateFromMasterAccount");
    }

    #[test]
    fn no_body() {
        let op = DisableSecurityHub::builder()
            .build()
            .unwrap()
            .make_operation(&config())
            .unwrap();
        assert_eq!(op.request().method(), http::Method::DELETE);
        assert_eq!(op.request().uri().path(), "/accounts");
        assert!(op.request().headers().get("content-length").is_none());
    }

    #[test]
    fn inputs_are_revalidated() {
        let mut input = DescribeStandardsControls::builder()
            .standards_subscription_arn("arn")
            .build()
            .unwrap();
        input.standards_subscription_arn = None;
        let err = input.make_operation(&config()).unwrap_err();
        assert!(matches!(
            err,
            BuildError::MissingField { field: "standards_subscription_arn", .. }
        ));
    }
}
