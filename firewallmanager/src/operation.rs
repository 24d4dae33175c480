/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! One type per Firewall Manager operation.
//!
//! Each input's `make_operation` turns it into an unsigned awsJson1.1 request paired with the
//! parser for the operation's response:
//!
//! ```ignore
//! let config = Config::builder().region(Region::new("us-east-1")).build();
//! let op = ListPolicies::builder().max_results(10).build()?.make_operation(&config)?;
//! // sign and send `op.request()`, then:
//! let output = op.parse_response(&response)?;
//! ```

use crate::config::{Config, ENDPOINT_PREFIX};
use crate::error::Error;
use crate::input::*;
use crate::output::*;
use sdk_http::{aws_json, BuildError, Metadata, Operation, ParseJsonResponse};
use sdk_types::ValidateInput;
use serde::Serialize;

const TARGET_PREFIX: &str = "AWSFMS_20180101";

fn build_operation<I, O>(
    config: &Config,
    name: &'static str,
    input: &I,
) -> Result<Operation<ParseJsonResponse<O, Error>>, BuildError>
where
    I: Serialize + ValidateInput,
{
    input.validate()?;
    let endpoint = config.endpoint()?;
    let target = format!("{}.{}", TARGET_PREFIX, name);
    tracing::debug!(operation = name, endpoint = %endpoint.uri(), "building request");
    let request = aws_json::build_request(&endpoint, &target, input)?;
    Ok(Operation::new(
        request,
        ParseJsonResponse::new(),
        Metadata::new(name, ENDPOINT_PREFIX),
    ))
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
    /// Sets the Firewall Manager administrator account.
    AssociateAdminAccount(AssociateAdminAccountInput, AssociateAdminAccountInputBuilder) -> AssociateAdminAccountOutput;
    /// Stops Firewall Manager from recording SNS notifications.
    DeleteNotificationChannel(DeleteNotificationChannelInput, DeleteNotificationChannelInputBuilder) -> DeleteNotificationChannelOutput;
    /// Permanently deletes a policy.
    DeletePolicy(DeletePolicyInput, DeletePolicyInputBuilder) -> DeletePolicyOutput;
    /// Removes the administrator account designation.
    DisassociateAdminAccount(DisassociateAdminAccountInput, DisassociateAdminAccountInputBuilder) -> DisassociateAdminAccountOutput;
    /// Returns the administrator account and the status of its role.
    GetAdminAccount(GetAdminAccountInput, GetAdminAccountInputBuilder) -> GetAdminAccountOutput;
    /// Returns the noncompliant resources of a member account for a policy.
    GetComplianceDetail(GetComplianceDetailInput, GetComplianceDetailInputBuilder) -> GetComplianceDetailOutput;
    GetNotificationChannel(GetNotificationChannelInput, GetNotificationChannelInputBuilder) -> GetNotificationChannelOutput;
    GetPolicy(GetPolicyInput, GetPolicyInputBuilder) -> GetPolicyOutput;
    /// Lists attacks against protected resources. Shield Advanced policies only.
    GetProtectionStatus(GetProtectionStatusInput, GetProtectionStatusInputBuilder) -> GetProtectionStatusOutput;
    ListComplianceStatus(ListComplianceStatusInput, ListComplianceStatusInputBuilder) -> ListComplianceStatusOutput;
    /// Lists the member accounts in the administrator's organization.
    ListMemberAccounts(ListMemberAccountsInput, ListMemberAccountsInputBuilder) -> ListMemberAccountsOutput;
    ListPolicies(ListPoliciesInput, ListPoliciesInputBuilder) -> ListPoliciesOutput;
    ListTagsForResource(ListTagsForResourceInput, ListTagsForResourceInputBuilder) -> ListTagsForResourceOutput;
    /// Designates the SNS topic and role used to record notifications.
    PutNotificationChannel(PutNotificationChannelInput, PutNotificationChannelInputBuilder) -> PutNotificationChannelOutput;
    /// Creates or updates a policy.
    PutPolicy(PutPolicyInput, PutPolicyInputBuilder) -> PutPolicyOutput;
    TagResource(TagResourceInput, TagResourceInputBuilder) -> TagResourceOutput;
    UntagResource(UntagResourceInput, UntagResourceInputBuilder) -> UntagResourceOutput;
}
