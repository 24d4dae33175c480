/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::input::{
    GetProtectionStatusInput, ListComplianceStatusInput, ListMemberAccountsInput,
    ListPoliciesInput,
};
use crate::model::{
    AccountRoleStatus, Policy, PolicyComplianceDetail, PolicyComplianceStatus, PolicySummary,
    SecurityServiceType, Tag,
};
use sdk_types::{model, paginated};

model! {
    #[derive(Eq, Hash)]
    pub struct AssociateAdminAccountOutput => AssociateAdminAccountOutputBuilder {}
}

model! {
    #[derive(Eq, Hash)]
    pub struct DeleteNotificationChannelOutput => DeleteNotificationChannelOutputBuilder {}
}

model! {
    #[derive(Eq, Hash)]
    pub struct DeletePolicyOutput => DeletePolicyOutputBuilder {}
}

model! {
    #[derive(Eq, Hash)]
    pub struct DisassociateAdminAccountOutput => DisassociateAdminAccountOutputBuilder {}
}

model! {
    #[derive(Eq, Hash)]
    pub struct GetAdminAccountOutput => GetAdminAccountOutputBuilder {
        admin_account (set_admin_account): String,
        role_status (set_role_status): AccountRoleStatus,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct GetComplianceDetailOutput => GetComplianceDetailOutputBuilder {
        policy_compliance_detail (set_policy_compliance_detail): PolicyComplianceDetail,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct GetNotificationChannelOutput => GetNotificationChannelOutputBuilder {
        sns_topic_arn (set_sns_topic_arn): String,
        sns_role_name (set_sns_role_name): String,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct GetPolicyOutput => GetPolicyOutputBuilder {
        policy (set_policy): Policy,
        policy_arn (set_policy_arn): String,
    }
}

model! {
    /// `data` is a JSON document describing the attacks; it is returned unparsed.
    #[derive(Eq, Hash)]
    pub struct GetProtectionStatusOutput => GetProtectionStatusOutputBuilder {
        admin_account_id (set_admin_account_id): String,
        service_type (set_service_type): SecurityServiceType,
        data (set_data): String,
        next_token (set_next_token): String,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct ListComplianceStatusOutput => ListComplianceStatusOutputBuilder {
        policy_compliance_status_list (set_policy_compliance_status_list): Vec<PolicyComplianceStatus>,
        next_token (set_next_token): String,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct ListMemberAccountsOutput => ListMemberAccountsOutputBuilder {
        member_accounts (set_member_accounts): Vec<String>,
        next_token (set_next_token): String,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct ListPoliciesOutput => ListPoliciesOutputBuilder {
        policy_list (set_policy_list): Vec<PolicySummary>,
        next_token (set_next_token): String,
    }
}

impl ListPoliciesOutput {
    pub fn policy_list(&self) -> &[PolicySummary] {
        self.policy_list.as_deref().unwrap_or_default()
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct ListTagsForResourceOutput => ListTagsForResourceOutputBuilder {
        tag_list (set_tag_list): Vec<Tag>,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct PutNotificationChannelOutput => PutNotificationChannelOutputBuilder {}
}

model! {
    #[derive(Eq, Hash)]
    pub struct PutPolicyOutput => PutPolicyOutputBuilder {
        policy (set_policy): Policy,
        policy_arn (set_policy_arn): String,
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

paginated!(GetProtectionStatusInput => GetProtectionStatusOutput);
paginated!(ListComplianceStatusInput => ListComplianceStatusOutput);
paginated!(ListMemberAccountsInput => ListMemberAccountsOutput);
paginated!(ListPoliciesInput => ListPoliciesOutput);
