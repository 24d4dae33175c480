/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use securityhub::error::Error;
use securityhub::model::{
    AccountDetails, AwsSecurityFinding, ComplianceStatus, ControlStatus, IntegrationType,
    SeverityRating, StandardsStatus, VerificationState,
};
use securityhub::operation::{
    BatchImportFindings, CreateMembers, DeleteActionTarget, DescribeProducts,
    DescribeStandardsControls, DisableSecurityHub, GetEnabledStandards, GetFindings,
    GetMasterAccount, ListTagsForResource,
};
use securityhub::{Config, Instant, PaginatedInput, PaginatedOutput, Region, SdkError};

fn config() -> Config {
    Config::builder().region(Region::new("us-east-1")).build()
}

fn response(status: u16, headers: &[(&str, &str)], body: &'static str) -> http::Response<Bytes> {
    let mut builder = http::Response::builder().status(status);
    for (key, value) in headers {
        builder = builder.header(*key, *value);
    }
    builder.body(Bytes::from_static(body.as_bytes())).unwrap()
}

#[test]
fn get_findings() {
    let op = GetFindings::builder()
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    let output = op
        .parse_response(&response(
            200,
            &[],
            r#"{
                "Findings": [{
                    "SchemaVersion": "2018-10-08",
                    "Id": "arn:aws:securityhub:us-east-1:123456789012:subscription/cis/1.2.0/2.9/finding/1",
                    "ProductArn": "arn:aws:securityhub:us-east-1::product/aws/securityhub",
                    "GeneratorId": "arn:aws:securityhub:::ruleset/cis-aws-foundations-benchmark/v/1.2.0/rule/2.9",
                    "AwsAccountId": "123456789012",
                    "Types": ["Software and Configuration Checks/Industry and Regulatory Standards"],
                    "FirstObservedAt": "2020-03-10T17:05:54.832Z",
                    "CreatedAt": "2020-03-10T17:05:54.832Z",
                    "UpdatedAt": "2020-03-22T13:22:13.933Z",
                    "Severity": {"Product": 0, "Label": "INFORMATIONAL", "Normalized": 0, "Original": "INFORMATIONAL"},
                    "Title": "2.9 Ensure VPC flow logging is enabled in all VPCs",
                    "Compliance": {"Status": "PASSED"},
                    "Resources": [{
                        "Type": "AwsRdsDbInstance",
                        "Id": "arn:aws:rds:us-east-1:123456789012:db:orders",
                        "Partition": "aws",
                        "Region": "us-east-1",
                        "Details": {"AwsRdsDbInstance": {"DBInstanceIdentifier": "orders", "DbInstancePort": 5432}}
                    }],
                    "VerificationState": "UNKNOWN",
                    "Workflow": {"Status": "NEW"},
                    "RecordState": "ACTIVE",
                    "FindingProviderFields": {"Severity": {"Label": "INFORMATIONAL"}}
                }],
                "NextToken": "eyJ0b2tlbiI6MX0="
            }"#,
        ))
        .unwrap();
    assert_eq!(output.next_token.as_deref(), Some("eyJ0b2tlbiI6MX0="));
    let finding: &AwsSecurityFinding = &output.findings()[0];
    assert_eq!(
        finding.first_observed_at,
        Some(Instant::from_secs_and_nanos(1583859954, 832_000_000))
    );
    assert_eq!(
        finding.compliance.as_ref().and_then(|c| c.status.as_ref()),
        Some(&ComplianceStatus::Passed)
    );
    assert_eq!(finding.verification_state, Some(VerificationState::UnknownValue));
    let rds = finding.resources.as_ref().unwrap()[0]
        .details
        .as_ref()
        .and_then(|d| d.aws_rds_db_instance.as_ref())
        .unwrap();
    assert_eq!(rds.db_instance_identifier.as_deref(), Some("orders"));
    assert_eq!(rds.db_instance_port, Some(5432));
}

#[test]
fn batch_import_partial_failure() {
    let op = BatchImportFindings::builder()
        .findings(vec![AwsSecurityFinding::builder().id("f-1").build()])
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    let output = op
        .parse_response(&response(
            200,
            &[],
            r#"{"FailedCount": 1, "SuccessCount": 0,
                "FailedFindings": [{"Id": "f-1", "ErrorCode": "InvalidInput", "ErrorMessage": "Finding does not adhere to ASFF"}]}"#,
        ))
        .unwrap();
    assert_eq!(output.failed_count, Some(1));
    let failed = &output.failed_findings.as_ref().unwrap()[0];
    assert_eq!(failed.id.as_deref(), Some("f-1"));
    assert_eq!(failed.error_code.as_deref(), Some("InvalidInput"));
}

#[test]
fn standards_and_controls() {
    let op = GetEnabledStandards::builder()
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    let output = op
        .parse_response(&response(
            200,
            &[],
            r#"{"StandardsSubscriptions": [{
                "StandardsSubscriptionArn": "arn:aws:securityhub:us-east-1:123456789012:subscription/pci-dss/v/3.2.1",
                "StandardsArn": "arn:aws:securityhub:us-east-1::standards/pci-dss/v/3.2.1",
                "StandardsInput": {},
                "StandardsStatus": "READY"
            }]}"#,
        ))
        .unwrap();
    assert!(output.is_last_page());
    let subscription = &output.standards_subscriptions.as_ref().unwrap()[0];
    assert_eq!(subscription.standards_status, Some(StandardsStatus::Ready));

    let op = DescribeStandardsControls::builder()
        .standards_subscription_arn(subscription.standards_subscription_arn.clone().unwrap())
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    let output = op
        .parse_response(&response(
            200,
            &[],
            r#"{"Controls": [{
                "StandardsControlArn": "arn:aws:securityhub:us-east-1:123456789012:control/pci-dss/v/3.2.1/PCI.AutoScaling.1",
                "ControlStatus": "DISABLED",
                "DisabledReason": "Not applicable",
                "ControlStatusUpdatedAt": "2020-05-15T18:49:04.473000+00:00",
                "ControlId": "PCI.AutoScaling.1",
                "SeverityRating": "LOW",
                "RelatedRequirements": ["PCI DSS 2.2"]
            }]}"#,
        ))
        .unwrap();
    let control = &output.controls.as_ref().unwrap()[0];
    assert_eq!(control.control_status, Some(ControlStatus::Disabled));
    assert_eq!(control.severity_rating, Some(SeverityRating::Low));
    assert_eq!(
        control.control_status_updated_at,
        Some(Instant::from_secs_and_nanos(1589568544, 473_000_000))
    );
}

#[test]
fn unknown_enum_values_are_kept() {
    let op = DescribeProducts::builder()
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    let output = op
        .parse_response(&response(
            200,
            &[],
            r#"{"Products": [{"ProductArn": "arn:aws:securityhub:us-east-1::product/aws/guardduty",
                "IntegrationTypes": ["SEND_FINDINGS_TO_SECURITY_HUB", "UPDATE_FINDINGS_IN_SECURITY_HUB"]}]}"#,
        ))
        .unwrap();
    let types = output.products.unwrap()[0].integration_types.clone().unwrap();
    assert_eq!(
        types,
        vec![
            IntegrationType::SendFindingsToSecurityHub,
            IntegrationType::Unknown("UPDATE_FINDINGS_IN_SECURITY_HUB".to_owned()),
        ]
    );
}

#[test]
fn list_tags() {
    let op = ListTagsForResource::builder()
        .resource_arn("arn:aws:securityhub:us-east-1:123456789012:hub/default")
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    let output = op
        .parse_response(&response(200, &[], r#"{"Tags": {"env": "prod"}}"#))
        .unwrap();
    assert_eq!(output.tags.unwrap()["env"], "prod");
}

#[test]
fn empty_success_body() {
    let op = DisableSecurityHub::builder()
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    op.parse_response(&response(200, &[], "")).unwrap();
}

#[test]
fn invalid_access() {
    let op = DisableSecurityHub::builder()
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    let err = op
        .parse_response(&response(
            401,
            &[
                ("x-amzn-errortype", "InvalidAccessException:http://internal.amazon.com/coral/com.amazonaws.securityhub/"),
                ("x-amzn-requestid", "9d3f1c1e"),
            ],
            r#"{"Code": "InvalidAccessException", "Message": "Account 123456789012 is not subscribed to AWS Security Hub"}"#,
        ))
        .unwrap_err();
    match err.into_service_error() {
        Some(Error::InvalidAccessException(inner)) => {
            assert_eq!(inner.code(), Some("InvalidAccessException"));
            assert_eq!(inner.request_id(), Some("9d3f1c1e"));
            assert_eq!(
                inner.message(),
                Some("Account 123456789012 is not subscribed to AWS Security Hub")
            );
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn error_code_from_body() {
    let op = GetFindings::builder()
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    let err = op
        .parse_response(&response(
            429,
            &[],
            r#"{"Code": "LimitExceededException", "Message": "Rate exceeded"}"#,
        ))
        .unwrap_err();
    let service_err = err.service_error().expect("service error");
    assert!(service_err.is_limit_exceeded_exception());
    assert_eq!(service_err.request_id(), None);
    assert_eq!(service_err.to_string(), "LimitExceededException: Rate exceeded");
}

#[test]
fn malformed_response() {
    let op = GetFindings::builder()
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    let err = op
        .parse_response(&response(200, &[], r#"{"Findings": [{"CreatedAt": "not a date"}]}"#))
        .unwrap_err();
    assert!(matches!(err, SdkError::ResponseError { .. }));
}

#[test]
fn follow_up_page() {
    let input = GetFindings::builder().max_results(1).build().unwrap();
    let page = input
        .make_operation(&config())
        .unwrap()
        .parse_response(&response(200, &[], r#"{"Findings": [], "NextToken": "n/2"}"#))
        .unwrap();
    let next = input.next_page(&page).unwrap();
    let op = next.make_operation(&config()).unwrap();
    assert_eq!(
        op.request().body().as_ref(),
        br#"{"NextToken":"n/2","MaxResults":1}"#
    );
}

#[test]
fn create_members_unprocessed_accounts() {
    let op = CreateMembers::builder()
        .account_details(vec![
            AccountDetails::builder().account_id("111122223333").build(),
            AccountDetails::builder().account_id("444455556666").build(),
        ])
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    let output = op
        .parse_response(&response(
            200,
            &[],
            r#"{"UnprocessedAccounts": [{"AccountId": "444455556666", "ProcessingResult": "Account is already a member"}]}"#,
        ))
        .unwrap();
    let unprocessed = output.unprocessed_accounts.unwrap();
    assert_eq!(unprocessed.len(), 1);
    assert_eq!(unprocessed[0].account_id.as_deref(), Some("444455556666"));
}

#[test]
fn master_account() {
    let op = GetMasterAccount::builder()
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    let output = op
        .parse_response(&response(
            200,
            &[],
            r#"{"Master": {"AccountId": "999988887777", "InvitationId": "7ab938c5d52d7904ad09f9e7c20cc4eb",
                "InvitedAt": "2020-06-01T20:21:18.042Z", "MemberStatus": "ASSOCIATED"}}"#,
        ))
        .unwrap();
    let master = output.master.unwrap();
    assert_eq!(master.account_id.as_deref(), Some("999988887777"));
    assert_eq!(
        master.invited_at,
        Some(Instant::from_secs_and_nanos(1591042878, 42_000_000))
    );
}

#[test]
fn resource_not_found_keeps_request_id() {
    let op = DeleteActionTarget::builder()
        .action_target_arn("arn:aws:securityhub:us-east-1:123456789012:action/custom/gone")
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    let err = op
        .parse_response(&response(
            404,
            &[("x-amzn-requestid", "req-42")],
            r#"{"Code": "ResourceNotFoundException", "Message": "Action target not found"}"#,
        ))
        .unwrap_err();
    let service_err = err.service_error().expect("service error");
    assert!(service_err.is_resource_not_found_exception());
    assert_eq!(service_err.request_id(), Some("req-42"));
    assert!(format!("{:?}", service_err).contains("req-42"));
}
