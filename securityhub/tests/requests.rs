/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use protocol_test_helpers::{
    assert_ok, forbid_headers, forbid_query_params, require_query_params, validate_empty_body,
    validate_headers, validate_json_body, validate_query_string, validate_request_line,
};
use securityhub::model::{
    AccountDetails, AwsSecurityFindingFilters, AwsSecurityFindingIdentifier, DateFilter,
    NoteUpdate, SeverityLabel, SeverityUpdate, SortCriterion, SortOrder,
    StandardsSubscriptionRequest, StringFilter, StringFilterComparison, WorkflowStatus,
    WorkflowUpdate,
};
use securityhub::operation::{
    BatchEnableStandards, BatchUpdateFindings, CreateInsight, CreateMembers, DeclineInvitations,
    DeleteActionTarget, DescribeHub, DisableImportFindingsForProduct, EnableSecurityHub,
    GetFindings, GetInsightResults, GetInvitationsCount, ListMembers, TagResource, UntagResource,
};
use securityhub::{Config, Instant, Region};

const HUB_ARN: &str = "arn:aws:securityhub:us-east-1:123456789012:hub/default";

fn config() -> Config {
    Config::builder().region(Region::new("us-east-1")).build()
}

#[test]
fn get_findings() {
    let op = GetFindings::builder()
        .filters(
            AwsSecurityFindingFilters::builder()
                .severity_label(vec![StringFilter::equals("CRITICAL")])
                .title(vec![StringFilter::builder()
                    .value("S3")
                    .comparison(StringFilterComparison::Prefix)
                    .build()])
                .updated_at(vec![DateFilter::builder()
                    .start(Instant::from_epoch_seconds(1576540098))
                    .end(Instant::from_secs_and_nanos(1576540158, 520_000_000))
                    .build()])
                .build(),
        )
        .sort_criteria(vec![SortCriterion::builder()
            .field("UpdatedAt")
            .sort_order(SortOrder::Descending)
            .build()])
        .max_results(20)
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    let request = op.request();
    assert_eq!(request.uri(), "https://securityhub.us-east-1.amazonaws.com/findings");
    assert_ok(validate_request_line(request, "POST", "/findings"));
    assert_ok(validate_headers(request, &[("content-type", "application/json")]));
    assert_ok(validate_json_body(
        request,
        r#"{
            "Filters": {
                "SeverityLabel": [{"Value": "CRITICAL", "Comparison": "EQUALS"}],
                "Title": [{"Value": "S3", "Comparison": "PREFIX"}],
                "UpdatedAt": [{"Start": "2019-12-16T23:48:18Z", "End": "2019-12-16T23:49:18.52Z"}]
            },
            "SortCriteria": [{"Field": "UpdatedAt", "SortOrder": "desc"}],
            "MaxResults": 20
        }"#,
    ));
}

#[test]
fn batch_update_findings() {
    let op = BatchUpdateFindings::builder()
        .finding_identifiers(vec![AwsSecurityFindingIdentifier::builder()
            .id("arn:aws:securityhub:us-east-1:123456789012:subscription/finding/1")
            .product_arn("arn:aws:securityhub:us-east-1::product/aws/securityhub")
            .build()])
        .note(NoteUpdate::builder().text("false alarm").updated_by("triage-bot").build())
        .severity(SeverityUpdate::builder().label(SeverityLabel::Low).build())
        .workflow(WorkflowUpdate::builder().status(WorkflowStatus::Suppressed).build())
        .add_user_defined_fields_entry("ticket", "SEC-42")
        .unwrap()
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    assert_ok(validate_request_line(op.request(), "PATCH", "/findings/batchupdate"));
    assert_ok(validate_json_body(
        op.request(),
        r#"{
            "FindingIdentifiers": [{
                "Id": "arn:aws:securityhub:us-east-1:123456789012:subscription/finding/1",
                "ProductArn": "arn:aws:securityhub:us-east-1::product/aws/securityhub"
            }],
            "Note": {"Text": "false alarm", "UpdatedBy": "triage-bot"},
            "Severity": {"Label": "LOW"},
            "UserDefinedFields": {"ticket": "SEC-42"},
            "Workflow": {"Status": "SUPPRESSED"}
        }"#,
    ));
}

#[test]
fn list_members_query() {
    let op = ListMembers::builder()
        .only_associated(false)
        .max_results(25)
        .next_token("abc/def+")
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    let request = op.request();
    assert_ok(validate_request_line(request, "GET", "/members"));
    assert_ok(validate_query_string(
        request,
        &["OnlyAssociated=false", "MaxResults=25", "NextToken=abc%2Fdef%2B"],
    ));
    assert_ok(validate_empty_body(request));
    assert_ok(forbid_headers(request, &["content-type", "content-length"]));
}

#[test]
fn unset_query_members_are_omitted() {
    let op = DescribeHub::builder()
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    assert_eq!(op.request().uri().path_and_query().unwrap().as_str(), "/accounts");
    assert_ok(forbid_query_params(op.request(), &["HubArn"]));

    let op = DescribeHub::builder()
        .hub_arn(HUB_ARN)
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    assert_ok(require_query_params(op.request(), &["HubArn"]));
}

#[test]
fn enable_security_hub() {
    let op = EnableSecurityHub::builder()
        .enable_default_standards(false)
        .add_tags_entry("team", "security")
        .unwrap()
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    assert_ok(validate_request_line(op.request(), "POST", "/accounts"));
    assert_ok(validate_json_body(
        op.request(),
        r#"{"Tags": {"team": "security"}, "EnableDefaultStandards": false}"#,
    ));
}

#[test]
fn tag_resource() {
    let op = TagResource::builder()
        .resource_arn(HUB_ARN)
        .add_tags_entry("env", "prod")
        .unwrap()
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    let request = op.request();
    assert_ok(validate_request_line(
        request,
        "POST",
        "/tags/arn%3Aaws%3Asecurityhub%3Aus-east-1%3A123456789012%3Ahub%2Fdefault",
    ));
    assert_ok(validate_json_body(request, r#"{"Tags": {"env": "prod"}}"#));
}

#[test]
fn untag_resource() {
    let op = UntagResource::builder()
        .resource_arn(HUB_ARN)
        .tag_keys(vec!["env".to_owned(), "cost center".to_owned()])
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    let request = op.request();
    assert_eq!(request.method(), http::Method::DELETE);
    assert_ok(validate_query_string(
        request,
        &["tagKeys=env", "tagKeys=cost%20center"],
    ));
    assert_ok(validate_empty_body(request));
}

#[test]
fn create_members() {
    let op = CreateMembers::builder()
        .account_details(vec![AccountDetails::builder()
            .account_id("111122223333")
            .email("security@example.com")
            .build()])
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    assert_ok(validate_request_line(op.request(), "POST", "/members"));
    assert_ok(validate_json_body(
        op.request(),
        r#"{"AccountDetails": [{"AccountId": "111122223333", "Email": "security@example.com"}]}"#,
    ));
}

#[test]
fn decline_invitations() {
    let op = DeclineInvitations::builder()
        .account_ids(vec!["444455556666".to_owned()])
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    assert_ok(validate_request_line(op.request(), "POST", "/invitations/decline"));
    assert_ok(validate_json_body(op.request(), r#"{"AccountIds": ["444455556666"]}"#));
}

#[test]
fn batch_enable_standards() {
    let op = BatchEnableStandards::builder()
        .standards_subscription_requests(vec![StandardsSubscriptionRequest::builder()
            .standards_arn("arn:aws:securityhub:us-east-1::standards/pci-dss/v/3.2.1")
            .build()])
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    assert_ok(validate_request_line(op.request(), "POST", "/standards/register"));
    assert_ok(validate_json_body(
        op.request(),
        r#"{"StandardsSubscriptionRequests": [{"StandardsArn": "arn:aws:securityhub:us-east-1::standards/pci-dss/v/3.2.1"}]}"#,
    ));
}

#[test]
fn create_insight() {
    let op = CreateInsight::builder()
        .name("Critical findings by resource")
        .filters(
            AwsSecurityFindingFilters::builder()
                .severity_label(vec![StringFilter::equals("CRITICAL")])
                .build(),
        )
        .group_by_attribute("ResourceId")
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    assert_ok(validate_request_line(op.request(), "POST", "/insights"));
    assert_ok(validate_json_body(
        op.request(),
        r#"{
            "Name": "Critical findings by resource",
            "Filters": {"SeverityLabel": [{"Value": "CRITICAL", "Comparison": "EQUALS"}]},
            "GroupByAttribute": "ResourceId"
        }"#,
    ));
}

#[test]
fn greedy_arn_labels() {
    let op = GetInsightResults::builder()
        .insight_arn("arn:aws:securityhub:::insight/securityhub/default/1")
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    assert_ok(validate_request_line(
        op.request(),
        "GET",
        "/insights/results/arn%3Aaws%3Asecurityhub%3A%3A%3Ainsight/securityhub/default/1",
    ));
    assert_ok(validate_empty_body(op.request()));

    let op = DeleteActionTarget::builder()
        .action_target_arn("arn:aws:securityhub:us-east-1:123456789012:action/custom/ticket")
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    assert_ok(validate_request_line(
        op.request(),
        "DELETE",
        "/actionTargets/arn%3Aaws%3Asecurityhub%3Aus-east-1%3A123456789012%3Aaction/custom/ticket",
    ));

    let op = DisableImportFindingsForProduct::builder()
        .product_subscription_arn(
            "arn:aws:securityhub:us-east-1:123456789012:product-subscription/crowdstrike/crowdstrike-falcon",
        )
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    assert_ok(validate_request_line(
        op.request(),
        "DELETE",
        "/productSubscriptions/arn%3Aaws%3Asecurityhub%3Aus-east-1%3A123456789012%3Aproduct-subscription/crowdstrike/crowdstrike-falcon",
    ));
}

#[test]
fn get_invitations_count() {
    let op = GetInvitationsCount::builder()
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    assert_ok(validate_request_line(op.request(), "GET", "/invitations/count"));
    assert_ok(validate_empty_body(op.request()));
}
