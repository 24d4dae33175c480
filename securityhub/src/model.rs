/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use sdk_types::{map_entries, model, wire_enum, Instant};
use std::collections::BTreeMap;

wire_enum! {
    pub enum ComplianceStatus {
        Passed => "PASSED",
        Warning => "WARNING",
        Failed => "FAILED",
        NotAvailable => "NOT_AVAILABLE",
    }
}

wire_enum! {
    /// How far a finding has been triaged.
    ///
    /// The declared `UNKNOWN` value is `UnknownValue`; `Unknown(_)` holds undeclared values.
    pub enum VerificationState {
        UnknownValue => "UNKNOWN",
        TruePositive => "TRUE_POSITIVE",
        FalsePositive => "FALSE_POSITIVE",
        BenignPositive => "BENIGN_POSITIVE",
    }
}

wire_enum! {
    pub enum RecordState {
        Active => "ACTIVE",
        Archived => "ARCHIVED",
    }
}

wire_enum! {
    /// Superseded by [`WorkflowStatus`]; still returned for older findings.
    pub enum WorkflowState {
        New => "NEW",
        Assigned => "ASSIGNED",
        InProgress => "IN_PROGRESS",
        Deferred => "DEFERRED",
        Resolved => "RESOLVED",
    }
}

wire_enum! {
    pub enum WorkflowStatus {
        New => "NEW",
        Notified => "NOTIFIED",
        Resolved => "RESOLVED",
        Suppressed => "SUPPRESSED",
    }
}

wire_enum! {
    pub enum SeverityLabel {
        Informational => "INFORMATIONAL",
        Low => "LOW",
        Medium => "MEDIUM",
        High => "HIGH",
        Critical => "CRITICAL",
    }
}

wire_enum! {
    pub enum SeverityRating {
        Low => "LOW",
        Medium => "MEDIUM",
        High => "HIGH",
        Critical => "CRITICAL",
    }
}

wire_enum! {
    pub enum ControlStatus {
        Enabled => "ENABLED",
        Disabled => "DISABLED",
    }
}

wire_enum! {
    pub enum StandardsStatus {
        Pending => "PENDING",
        Ready => "READY",
        Failed => "FAILED",
        Deleting => "DELETING",
        Incomplete => "INCOMPLETE",
    }
}

wire_enum! {
    pub enum IntegrationType {
        SendFindingsToSecurityHub => "SEND_FINDINGS_TO_SECURITY_HUB",
        ReceiveFindingsFromSecurityHub => "RECEIVE_FINDINGS_FROM_SECURITY_HUB",
    }
}

wire_enum! {
    pub enum StringFilterComparison {
        Equals => "EQUALS",
        Prefix => "PREFIX",
        NotEquals => "NOT_EQUALS",
        PrefixNotEquals => "PREFIX_NOT_EQUALS",
    }
}

wire_enum! {
    pub enum MapFilterComparison {
        Equals => "EQUALS",
        NotEquals => "NOT_EQUALS",
    }
}

wire_enum! {
    pub enum DateRangeUnit {
        Days => "DAYS",
    }
}

wire_enum! {
    pub enum SortOrder {
        Ascending => "asc",
        Descending => "desc",
    }
}

wire_enum! {
    pub enum Partition {
        Aws => "aws",
        AwsCn => "aws-cn",
        AwsUsGov => "aws-us-gov",
    }
}

model! {
    /// The severity of a finding. `label` is the preferred representation.
    pub struct Severity => SeverityBuilder {
        product (set_product): f64,
        label (set_label): SeverityLabel,
        normalized (set_normalized): i32,
        original (set_original): String,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct StatusReason => StatusReasonBuilder {
        reason_code (set_reason_code): String,
        description (set_description): String,
    }
}

model! {
    /// Result of a compliance check, for findings generated by a standards control.
    #[derive(Eq, Hash)]
    pub struct Compliance => ComplianceBuilder {
        status (set_status): ComplianceStatus,
        related_requirements (set_related_requirements): Vec<String>,
        status_reasons (set_status_reasons): Vec<StatusReason>,
    }
}

model! {
    /// A user-defined note added to a finding.
    #[derive(Eq, Hash)]
    pub struct Note => NoteBuilder {
        text (set_text): String,
        updated_by (set_updated_by): String,
        #[serde(with = "sdk_types::instant::date_time")]
        updated_at (set_updated_at): Instant,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct Workflow => WorkflowBuilder {
        status (set_status): WorkflowStatus,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct AwsRdsDbInstanceAssociatedRole => AwsRdsDbInstanceAssociatedRoleBuilder {
        role_arn (set_role_arn): String,
        feature_name (set_feature_name): String,
        status (set_status): String,
    }
}

model! {
    /// The connection endpoint of a DB instance.
    #[derive(Eq, Hash)]
    pub struct AwsRdsDbInstanceEndpoint => AwsRdsDbInstanceEndpointBuilder {
        address (set_address): String,
        port (set_port): i32,
        hosted_zone_id (set_hosted_zone_id): String,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct AwsRdsDbInstanceVpcSecurityGroup => AwsRdsDbInstanceVpcSecurityGroupBuilder {
        vpc_security_group_id (set_vpc_security_group_id): String,
        status (set_status): String,
    }
}

model! {
    /// Details about an Amazon RDS database instance.
    ///
    /// Several members keep the capitalization RDS uses on the wire (`DBName`,
    /// `DbiResourceId`), which PascalCase renaming alone would not produce.
    #[derive(Eq, Hash)]
    pub struct AwsRdsDbInstanceDetails => AwsRdsDbInstanceDetailsBuilder {
        associated_roles (set_associated_roles): Vec<AwsRdsDbInstanceAssociatedRole>,
        #[serde(rename = "CACertificateIdentifier")]
        ca_certificate_identifier (set_ca_certificate_identifier): String,
        #[serde(rename = "DBClusterIdentifier")]
        db_cluster_identifier (set_db_cluster_identifier): String,
        #[serde(rename = "DBInstanceIdentifier")]
        db_instance_identifier (set_db_instance_identifier): String,
        #[serde(rename = "DBInstanceClass")]
        db_instance_class (set_db_instance_class): String,
        db_instance_port (set_db_instance_port): i32,
        dbi_resource_id (set_dbi_resource_id): String,
        #[serde(rename = "DBName")]
        db_name (set_db_name): String,
        deletion_protection (set_deletion_protection): bool,
        endpoint (set_endpoint): AwsRdsDbInstanceEndpoint,
        engine (set_engine): String,
        engine_version (set_engine_version): String,
        #[serde(rename = "IAMDatabaseAuthenticationEnabled")]
        iam_database_authentication_enabled (set_iam_database_authentication_enabled): bool,
        instance_create_time (set_instance_create_time): String,
        kms_key_id (set_kms_key_id): String,
        publicly_accessible (set_publicly_accessible): bool,
        storage_encrypted (set_storage_encrypted): bool,
        tde_credential_arn (set_tde_credential_arn): String,
        vpc_security_groups (set_vpc_security_groups): Vec<AwsRdsDbInstanceVpcSecurityGroup>,
    }
}

model! {
    /// Type-specific details of a resource. `other` holds details of types without a model.
    #[derive(Eq, Hash)]
    pub struct ResourceDetails => ResourceDetailsBuilder {
        aws_rds_db_instance (set_aws_rds_db_instance): AwsRdsDbInstanceDetails,
        other (set_other): BTreeMap<String, String>,
    }
}

map_entries! {
    ResourceDetailsBuilder {
        other: add_other_entry, clear_other_entries (String => String);
    }
}

model! {
    /// A resource a finding applies to.
    #[derive(Eq, Hash)]
    pub struct Resource => ResourceBuilder {
        r#type (set_type): String,
        id (set_id): String,
        partition (set_partition): Partition,
        region (set_region): String,
        tags (set_tags): BTreeMap<String, String>,
        details (set_details): ResourceDetails,
    }
}

map_entries! {
    ResourceBuilder {
        tags: add_tags_entry, clear_tags_entries (String => String);
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct Recommendation => RecommendationBuilder {
        text (set_text): String,
        url (set_url): String,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct Remediation => RemediationBuilder {
        recommendation (set_recommendation): Recommendation,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct RelatedFinding => RelatedFindingBuilder {
        product_arn (set_product_arn): String,
        id (set_id): String,
    }
}

model! {
    /// A finding in the AWS Security Finding Format.
    pub struct AwsSecurityFinding => AwsSecurityFindingBuilder {
        schema_version (set_schema_version): String,
        id (set_id): String,
        product_arn (set_product_arn): String,
        generator_id (set_generator_id): String,
        aws_account_id (set_aws_account_id): String,
        types (set_types): Vec<String>,
        #[serde(with = "sdk_types::instant::date_time")]
        first_observed_at (set_first_observed_at): Instant,
        #[serde(with = "sdk_types::instant::date_time")]
        last_observed_at (set_last_observed_at): Instant,
        #[serde(with = "sdk_types::instant::date_time")]
        created_at (set_created_at): Instant,
        #[serde(with = "sdk_types::instant::date_time")]
        updated_at (set_updated_at): Instant,
        severity (set_severity): Severity,
        confidence (set_confidence): i32,
        criticality (set_criticality): i32,
        title (set_title): String,
        description (set_description): String,
        remediation (set_remediation): Remediation,
        source_url (set_source_url): String,
        product_fields (set_product_fields): BTreeMap<String, String>,
        user_defined_fields (set_user_defined_fields): BTreeMap<String, String>,
        resources (set_resources): Vec<Resource>,
        compliance (set_compliance): Compliance,
        verification_state (set_verification_state): VerificationState,
        workflow_state (set_workflow_state): WorkflowState,
        workflow (set_workflow): Workflow,
        record_state (set_record_state): RecordState,
        related_findings (set_related_findings): Vec<RelatedFinding>,
        note (set_note): Note,
    }
}

map_entries! {
    AwsSecurityFindingBuilder {
        product_fields: add_product_fields_entry, clear_product_fields_entries (String => String);
        user_defined_fields: add_user_defined_fields_entry, clear_user_defined_fields_entries (String => String);
    }
}

impl AwsSecurityFinding {
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// The identifier `BatchUpdateFindings` uses to address this finding.
    pub fn identifier(&self) -> AwsSecurityFindingIdentifier {
        AwsSecurityFindingIdentifier {
            id: self.id.clone(),
            product_arn: self.product_arn.clone(),
        }
    }

    pub fn severity_label(&self) -> Option<&SeverityLabel> {
        self.severity.as_ref().and_then(|s| s.label.as_ref())
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct StringFilter => StringFilterBuilder {
        value (set_value): String,
        comparison (set_comparison): StringFilterComparison,
    }
}

model! {
    /// Bounds on a numeric attribute. `eq` matches one value exactly.
    pub struct NumberFilter => NumberFilterBuilder {
        gte (set_gte): f64,
        lte (set_lte): f64,
        eq (set_eq): f64,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct DateRange => DateRangeBuilder {
        value (set_value): i32,
        unit (set_unit): DateRangeUnit,
    }
}

model! {
    /// Either a `start`/`end` window or a `date_range` relative to now.
    #[derive(Eq, Hash)]
    pub struct DateFilter => DateFilterBuilder {
        #[serde(with = "sdk_types::instant::date_time")]
        start (set_start): Instant,
        #[serde(with = "sdk_types::instant::date_time")]
        end (set_end): Instant,
        date_range (set_date_range): DateRange,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct MapFilter => MapFilterBuilder {
        key (set_key): String,
        value (set_value): String,
        comparison (set_comparison): MapFilterComparison,
    }
}

model! {
    /// Attribute filters for finding queries. Filters on different attributes are ANDed,
    /// filters within one list are ORed.
    pub struct AwsSecurityFindingFilters => AwsSecurityFindingFiltersBuilder {
        product_arn (set_product_arn): Vec<StringFilter>,
        aws_account_id (set_aws_account_id): Vec<StringFilter>,
        id (set_id): Vec<StringFilter>,
        generator_id (set_generator_id): Vec<StringFilter>,
        r#type (set_type): Vec<StringFilter>,
        first_observed_at (set_first_observed_at): Vec<DateFilter>,
        last_observed_at (set_last_observed_at): Vec<DateFilter>,
        created_at (set_created_at): Vec<DateFilter>,
        updated_at (set_updated_at): Vec<DateFilter>,
        severity_label (set_severity_label): Vec<StringFilter>,
        confidence (set_confidence): Vec<NumberFilter>,
        criticality (set_criticality): Vec<NumberFilter>,
        title (set_title): Vec<StringFilter>,
        description (set_description): Vec<StringFilter>,
        product_fields (set_product_fields): Vec<MapFilter>,
        user_defined_fields (set_user_defined_fields): Vec<MapFilter>,
        resource_type (set_resource_type): Vec<StringFilter>,
        resource_id (set_resource_id): Vec<StringFilter>,
        resource_tags (set_resource_tags): Vec<MapFilter>,
        compliance_status (set_compliance_status): Vec<StringFilter>,
        verification_state (set_verification_state): Vec<StringFilter>,
        workflow_state (set_workflow_state): Vec<StringFilter>,
        workflow_status (set_workflow_status): Vec<StringFilter>,
        record_state (set_record_state): Vec<StringFilter>,
        related_findings_id (set_related_findings_id): Vec<StringFilter>,
        note_text (set_note_text): Vec<StringFilter>,
    }
}

impl StringFilter {
    /// An `EQUALS` filter on `value`.
    pub fn equals(value: impl Into<String>) -> Self {
        StringFilter {
            value: Some(value.into()),
            comparison: Some(StringFilterComparison::Equals),
        }
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct SortCriterion => SortCriterionBuilder {
        field (set_field): String,
        sort_order (set_sort_order): SortOrder,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct AwsSecurityFindingIdentifier => AwsSecurityFindingIdentifierBuilder {
        id (set_id): String,
        product_arn (set_product_arn): String,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct NoteUpdate => NoteUpdateBuilder {
        text (set_text): String,
        updated_by (set_updated_by): String,
    }
}

model! {
    pub struct SeverityUpdate => SeverityUpdateBuilder {
        normalized (set_normalized): i32,
        product (set_product): f64,
        label (set_label): SeverityLabel,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct WorkflowUpdate => WorkflowUpdateBuilder {
        status (set_status): WorkflowStatus,
    }
}

model! {
    /// A finding `BatchUpdateFindings` could not update, and why.
    #[derive(Eq, Hash)]
    pub struct BatchUpdateFindingsUnprocessedFinding => BatchUpdateFindingsUnprocessedFindingBuilder {
        finding_identifier (set_finding_identifier): AwsSecurityFindingIdentifier,
        error_code (set_error_code): String,
        error_message (set_error_message): String,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct ImportFindingsError => ImportFindingsErrorBuilder {
        id (set_id): String,
        error_code (set_error_code): String,
        error_message (set_error_message): String,
    }
}

model! {
    /// A saved finding query whose results are grouped by `group_by_attribute`.
    pub struct Insight => InsightBuilder {
        insight_arn (set_insight_arn): String,
        name (set_name): String,
        filters (set_filters): AwsSecurityFindingFilters,
        group_by_attribute (set_group_by_attribute): String,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct Standard => StandardBuilder {
        standards_arn (set_standards_arn): String,
        name (set_name): String,
        description (set_description): String,
        enabled_by_default (set_enabled_by_default): bool,
    }
}

model! {
    /// A standard enabled in the account.
    #[derive(Eq, Hash)]
    pub struct StandardsSubscription => StandardsSubscriptionBuilder {
        standards_subscription_arn (set_standards_subscription_arn): String,
        standards_arn (set_standards_arn): String,
        standards_input (set_standards_input): BTreeMap<String, String>,
        standards_status (set_standards_status): StandardsStatus,
    }
}

map_entries! {
    StandardsSubscriptionBuilder {
        standards_input: add_standards_input_entry, clear_standards_input_entries (String => String);
    }
}

model! {
    /// One security control of an enabled standard.
    #[derive(Eq, Hash)]
    pub struct StandardsControl => StandardsControlBuilder {
        standards_control_arn (set_standards_control_arn): String,
        control_status (set_control_status): ControlStatus,
        disabled_reason (set_disabled_reason): String,
        #[serde(with = "sdk_types::instant::date_time")]
        control_status_updated_at (set_control_status_updated_at): Instant,
        control_id (set_control_id): String,
        title (set_title): String,
        description (set_description): String,
        remediation_url (set_remediation_url): String,
        severity_rating (set_severity_rating): SeverityRating,
        related_requirements (set_related_requirements): Vec<String>,
    }
}

model! {
    /// A product integrated with Security Hub.
    #[derive(Eq, Hash)]
    pub struct Product => ProductBuilder {
        product_arn (set_product_arn): String,
        product_name (set_product_name): String,
        company_name (set_company_name): String,
        description (set_description): String,
        categories (set_categories): Vec<String>,
        integration_types (set_integration_types): Vec<IntegrationType>,
        marketplace_url (set_marketplace_url): String,
        activation_url (set_activation_url): String,
        product_subscription_resource_policy (set_product_subscription_resource_policy): String,
    }
}

model! {
    /// A custom action that sends findings to CloudWatch Events.
    #[derive(Eq, Hash)]
    pub struct ActionTarget => ActionTargetBuilder {
        action_target_arn (set_action_target_arn): String,
        name (set_name): String,
        description (set_description): String,
    }
}

model! {
    /// An invitation to become a member account, sent by a master account.
    #[derive(Eq, Hash)]
    pub struct Invitation => InvitationBuilder {
        account_id (set_account_id): String,
        invitation_id (set_invitation_id): String,
        #[serde(with = "sdk_types::instant::date_time")]
        invited_at (set_invited_at): Instant,
        member_status (set_member_status): String,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct Member => MemberBuilder {
        account_id (set_account_id): String,
        email (set_email): String,
        master_id (set_master_id): String,
        member_status (set_member_status): String,
        #[serde(with = "sdk_types::instant::date_time")]
        invited_at (set_invited_at): Instant,
        #[serde(with = "sdk_types::instant::date_time")]
        updated_at (set_updated_at): Instant,
    }
}

model! {
    /// An account to add as a member.
    #[derive(Eq, Hash)]
    pub struct AccountDetails => AccountDetailsBuilder {
        account_id (set_account_id): String,
        email (set_email): String,
    }
}

model! {
    /// An account a member or invitation operation could not process, and why.
    #[derive(Eq, Hash)]
    pub struct UnprocessedAccount => UnprocessedAccountBuilder {
        account_id (set_account_id): String,
        processing_result (set_processing_result): String,
    }
}

model! {
    /// A standard to enable, with its optional parameters.
    #[derive(Eq, Hash)]
    pub struct StandardsSubscriptionRequest => StandardsSubscriptionRequestBuilder {
        standards_arn (set_standards_arn): String,
        standards_input (set_standards_input): BTreeMap<String, String>,
    }
}

map_entries! {
    StandardsSubscriptionRequestBuilder {
        standards_input: add_standards_input_entry, clear_standards_input_entries (String => String);
    }
}

model! {
    /// Number of findings for one value of an insight's group-by attribute.
    #[derive(Eq, Hash)]
    pub struct InsightResultValue => InsightResultValueBuilder {
        group_by_attribute_value (set_group_by_attribute_value): String,
        count (set_count): i32,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct InsightResults => InsightResultsBuilder {
        insight_arn (set_insight_arn): String,
        group_by_attribute (set_group_by_attribute): String,
        result_values (set_result_values): Vec<InsightResultValue>,
    }
}
