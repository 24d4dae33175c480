/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::input::{
    DescribeActionTargetsInput, DescribeProductsInput, DescribeStandardsControlsInput,
    DescribeStandardsInput, GetEnabledStandardsInput, GetFindingsInput, GetInsightsInput,
    ListEnabledProductsForImportInput, ListInvitationsInput, ListMembersInput,
};
use crate::model::{
    ActionTarget, AwsSecurityFinding, AwsSecurityFindingIdentifier,
    BatchUpdateFindingsUnprocessedFinding, ImportFindingsError, Insight, InsightResults,
    Invitation, Member, Product, Standard, StandardsControl, StandardsSubscription,
    UnprocessedAccount,
};
use sdk_types::{model, paginated, Instant};
use std::collections::BTreeMap;

model! {
    pub struct GetFindingsOutput => GetFindingsOutputBuilder {
        findings (set_findings): Vec<AwsSecurityFinding>,
        next_token (set_next_token): String,
    }
}

impl GetFindingsOutput {
    pub fn findings(&self) -> &[AwsSecurityFinding] {
        self.findings.as_deref().unwrap_or_default()
    }
}

model! {
    /// Findings are imported individually; `failed_findings` lists the ones that were rejected.
    #[derive(Eq, Hash)]
    pub struct BatchImportFindingsOutput => BatchImportFindingsOutputBuilder {
        failed_count (set_failed_count): i32,
        success_count (set_success_count): i32,
        failed_findings (set_failed_findings): Vec<ImportFindingsError>,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct BatchUpdateFindingsOutput => BatchUpdateFindingsOutputBuilder {
        processed_findings (set_processed_findings): Vec<AwsSecurityFindingIdentifier>,
        unprocessed_findings (set_unprocessed_findings): Vec<BatchUpdateFindingsUnprocessedFinding>,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct UpdateFindingsOutput => UpdateFindingsOutputBuilder {}
}

model! {
    pub struct GetInsightsOutput => GetInsightsOutputBuilder {
        insights (set_insights): Vec<Insight>,
        next_token (set_next_token): String,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct GetEnabledStandardsOutput => GetEnabledStandardsOutputBuilder {
        standards_subscriptions (set_standards_subscriptions): Vec<StandardsSubscription>,
        next_token (set_next_token): String,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct DescribeStandardsOutput => DescribeStandardsOutputBuilder {
        standards (set_standards): Vec<Standard>,
        next_token (set_next_token): String,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct DescribeStandardsControlsOutput => DescribeStandardsControlsOutputBuilder {
        controls (set_controls): Vec<StandardsControl>,
        next_token (set_next_token): String,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct UpdateStandardsControlOutput => UpdateStandardsControlOutputBuilder {}
}

model! {
    #[derive(Eq, Hash)]
    pub struct DescribeProductsOutput => DescribeProductsOutputBuilder {
        products (set_products): Vec<Product>,
        next_token (set_next_token): String,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct DescribeActionTargetsOutput => DescribeActionTargetsOutputBuilder {
        action_targets (set_action_targets): Vec<ActionTarget>,
        next_token (set_next_token): String,
    }
}

model! {
    /// ARNs of the product subscriptions that may send findings to this account.
    #[derive(Eq, Hash)]
    pub struct ListEnabledProductsForImportOutput => ListEnabledProductsForImportOutputBuilder {
        product_subscriptions (set_product_subscriptions): Vec<String>,
        next_token (set_next_token): String,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct ListInvitationsOutput => ListInvitationsOutputBuilder {
        invitations (set_invitations): Vec<Invitation>,
        next_token (set_next_token): String,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct ListMembersOutput => ListMembersOutputBuilder {
        members (set_members): Vec<Member>,
        next_token (set_next_token): String,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct DescribeHubOutput => DescribeHubOutputBuilder {
        hub_arn (set_hub_arn): String,
        #[serde(with = "sdk_types::instant::date_time")]
        subscribed_at (set_subscribed_at): Instant,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct EnableSecurityHubOutput => EnableSecurityHubOutputBuilder {}
}

model! {
    #[derive(Eq, Hash)]
    pub struct DisableSecurityHubOutput => DisableSecurityHubOutputBuilder {}
}

model! {
    #[derive(Eq, Hash)]
    pub struct ListTagsForResourceOutput => ListTagsForResourceOutputBuilder {
        tags (set_tags): BTreeMap<String, String>,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct TagResourceOutput => TagResourceOutputBuilder {}
}

model! {
    #[derive(Eq, Hash)]
    pub struct UntagResourceOutput => UntagResourceOutputBuilder {}
}

model! {
    #[derive(Eq, Hash)]
    pub struct AcceptInvitationOutput => AcceptInvitationOutputBuilder {}
}

model! {
    #[derive(Eq, Hash)]
    pub struct BatchDisableStandardsOutput => BatchDisableStandardsOutputBuilder {
        standards_subscriptions (set_standards_subscriptions): Vec<StandardsSubscription>,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct BatchEnableStandardsOutput => BatchEnableStandardsOutputBuilder {
        standards_subscriptions (set_standards_subscriptions): Vec<StandardsSubscription>,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct CreateActionTargetOutput => CreateActionTargetOutputBuilder {
        action_target_arn (set_action_target_arn): String,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct UpdateActionTargetOutput => UpdateActionTargetOutputBuilder {}
}

model! {
    #[derive(Eq, Hash)]
    pub struct DeleteActionTargetOutput => DeleteActionTargetOutputBuilder {
        action_target_arn (set_action_target_arn): String,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct CreateInsightOutput => CreateInsightOutputBuilder {
        insight_arn (set_insight_arn): String,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct UpdateInsightOutput => UpdateInsightOutputBuilder {}
}

model! {
    #[derive(Eq, Hash)]
    pub struct DeleteInsightOutput => DeleteInsightOutputBuilder {
        insight_arn (set_insight_arn): String,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct GetInsightResultsOutput => GetInsightResultsOutputBuilder {
        insight_results (set_insight_results): InsightResults,
    }
}

macro_rules! unprocessed_accounts_output {
    ($($name:ident => $builder:ident;)+) => {
        $(
            model! {
                /// Accounts missing from `unprocessed_accounts` were processed.
                #[derive(Eq, Hash)]
                pub struct $name => $builder {
                    unprocessed_accounts (set_unprocessed_accounts): Vec<UnprocessedAccount>,
                }
            }
        )+
    };
}

unprocessed_accounts_output! {
    CreateMembersOutput => CreateMembersOutputBuilder;
    InviteMembersOutput => InviteMembersOutputBuilder;
    DeleteMembersOutput => DeleteMembersOutputBuilder;
    DeclineInvitationsOutput => DeclineInvitationsOutputBuilder;
    DeleteInvitationsOutput => DeleteInvitationsOutputBuilder;
}

model! {
    #[derive(Eq, Hash)]
    pub struct GetMembersOutput => GetMembersOutputBuilder {
        members (set_members): Vec<Member>,
        unprocessed_accounts (set_unprocessed_accounts): Vec<UnprocessedAccount>,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct DisassociateMembersOutput => DisassociateMembersOutputBuilder {}
}

model! {
    #[derive(Eq, Hash)]
    pub struct DisassociateFromMasterAccountOutput => DisassociateFromMasterAccountOutputBuilder {}
}

model! {
    /// `master` is unset when the account has no master account.
    #[derive(Eq, Hash)]
    pub struct GetMasterAccountOutput => GetMasterAccountOutputBuilder {
        master (set_master): Invitation,
    }
}

model! {
    /// Invitations sent to this account that were not accepted, excluding the current master's.
    #[derive(Eq, Hash)]
    pub struct GetInvitationsCountOutput => GetInvitationsCountOutputBuilder {
        invitations_count (set_invitations_count): i32,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct EnableImportFindingsForProductOutput => EnableImportFindingsForProductOutputBuilder {
        product_subscription_arn (set_product_subscription_arn): String,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct DisableImportFindingsForProductOutput => DisableImportFindingsForProductOutputBuilder {}
}

paginated!(GetFindingsInput => GetFindingsOutput);
paginated!(GetInsightsInput => GetInsightsOutput);
paginated!(GetEnabledStandardsInput => GetEnabledStandardsOutput);
paginated!(DescribeStandardsInput => DescribeStandardsOutput);
paginated!(DescribeStandardsControlsInput => DescribeStandardsControlsOutput);
paginated!(DescribeProductsInput => DescribeProductsOutput);
paginated!(DescribeActionTargetsInput => DescribeActionTargetsOutput);
paginated!(ListEnabledProductsForImportInput => ListEnabledProductsForImportOutput);
paginated!(ListInvitationsInput => ListInvitationsOutput);
paginated!(ListMembersInput => ListMembersOutput);
