//! The Prowler cloud service type descriptor.

use prowler_plugin_core::{Severity, Status};
use serde::Serialize;
use serde_json::{Value, json};

/// Registration-time descriptor of a cloud service type.
///
/// Serializes to the exact shape the host platform's inventory service
/// consumes.
#[derive(Debug, Clone, Serialize)]
pub struct CloudServiceType {
    pub group: String,
    pub is_primary: bool,
    pub is_major: bool,
    pub metadata: Value,
    pub labels: Vec<String>,
    pub tags: Value,
}

/// Build the static descriptor for Prowler scan results.
pub fn cloud_service_type() -> CloudServiceType {
    CloudServiceType {
        group: "Prowler".to_string(),
        is_primary: true,
        is_major: true,
        metadata: metadata(),
        labels: vec!["Security".to_string(), "Compliance".to_string()],
        tags: json!({
            "spaceone:icon": "https://spaceone-custom-assets.s3.ap-northeast-2.amazonaws.com/console-assets/icons/prowler.svg"
        }),
    }
}

fn metadata() -> Value {
    json!({
        "query_sets": [query_set()],
        "view": {
            "search": search_fields(),
            "table": main_table(),
            "widget": widgets(),
            "sub_data": {
                "layouts": [checks_layout(), findings_layout()]
            }
        }
    })
}

fn query_set() -> Value {
    json!({
        "name": "AWS Prowler",
        "unit": {
            "pass_score": "%",
            "fail_score": "%"
        },
        "query_options": {
            "group_by": ["data.status", "data.severity", "data.service"],
            "fields": {
                "compliance_count": {"operator": "count"},
                "fail_check_count": {"key": "data.stats.checks.fail", "operator": "sum"},
                "pass_check_count": {"key": "data.stats.checks.pass", "operator": "sum"},
                "info_check_count": {"key": "data.stats.checks.info", "operator": "sum"},
                "fail_finding_count": {"key": "data.stats.findings.fail", "operator": "sum"},
                "pass_finding_count": {"key": "data.stats.findings.pass", "operator": "sum"},
                "info_finding_count": {"key": "data.stats.findings.info", "operator": "sum"},
                "fail_score": {"key": "data.stats.score.fail", "operator": "sum"},
                "pass_score": {"key": "data.stats.score.pass", "operator": "sum"}
            }
        }
    })
}

fn search_fields() -> Value {
    json!([
        {"key": "data.requirement_id", "name": "Requirement ID"},
        {"key": "data.status", "name": "Status", "enums": Status::names()},
        {"key": "data.stats.score.percent", "name": "Compliance Score", "data_type": "float"},
        {"key": "data.severity", "name": "Severity", "enums": Severity::names()},
        {"key": "data.service", "name": "Service"}
    ])
}

/// Badge color per status, shared by the main table and both drill-downs.
fn status_badges(key: &str) -> Value {
    json!({
        "type": "enum",
        "name": "Status",
        "key": key,
        "options": {
            (Status::Fail.as_str()): {
                "type": "badge",
                "options": {"background_color": "coral.500"}
            },
            (Status::Pass.as_str()): {
                "type": "badge",
                "options": {"background_color": "indigo.500"}
            },
            (Status::Info.as_str()): {
                "type": "badge",
                "options": {"background_color": "peacock.500"}
            }
        }
    })
}

fn main_table() -> Value {
    json!({
        "layout": {
            "name": "",
            "type": "query-search-table",
            "options": {
                "default_sort": {"key": "data.requirement_id", "desc": false},
                "fields": [
                    {"type": "text", "key": "data.requirement_id", "name": "Requirement ID"},
                    {
                        "type": "text",
                        "key": "data.description",
                        "name": "Description",
                        "options": {"is_optional": true}
                    },
                    status_badges("data.status"),
                    {
                        "type": "text",
                        "key": "data.display.findings",
                        "name": "Findings",
                        "options": {"sortable": false}
                    },
                    {
                        "type": "text",
                        "key": "data.display.checks",
                        "name": "Checks",
                        "options": {"sortable": false, "is_optional": true}
                    },
                    {
                        "type": "text",
                        "key": "data.stats.score.percent",
                        "name": "Compliance Score",
                        "options": {"is_optional": true}
                    },
                    {"type": "text", "key": "data.severity", "name": "Severity"},
                    {"type": "text", "key": "data.service", "name": "Service"}
                ]
            }
        }
    })
}

fn widgets() -> Value {
    json!([
        {
            "name": "Total Count",
            "type": "summary",
            "options": {
                "value_options": {"key": "value", "options": {"default": 0}}
            },
            "query": {
                "aggregate": [{"count": {"name": "value"}}],
                "filter": []
            }
        },
        {
            "name": "Failed Count",
            "type": "summary",
            "options": {
                "value_options": {"key": "value", "options": {"default": 0}}
            },
            "query": {
                "aggregate": [{"count": {"name": "value"}}],
                "filter": [
                    {"key": "data.status", "value": Status::Fail.as_str(), "operator": "eq"}
                ]
            }
        }
    ])
}

/// Drill-down over the nested `checks` array.
fn checks_layout() -> Value {
    json!({
        "type": "query-search-table",
        "name": "Checks",
        "options": {
            "unwind": {"path": "data.checks"},
            "default_sort": {"key": "data.checks.status", "desc": false},
            "search": [
                {"key": "data.requirement_id", "name": "Requirement ID"},
                {"key": "data.checks.check_title", "name": "Check Title"},
                {"key": "data.checks.status", "name": "Status", "enums": Status::names()},
                {"key": "data.checks.severity", "name": "Severity", "enums": Severity::names()},
                {"key": "data.checks.service", "name": "Service"}
            ],
            "fields": [
                {"type": "text", "key": "data.requirement_id", "name": "Requirement ID"},
                {"type": "text", "key": "data.checks.check_title", "name": "Check Title"},
                status_badges("data.checks.status"),
                {
                    "type": "text",
                    "key": "data.checks.display.findings",
                    "name": "Findings",
                    "options": {"sortable": false}
                },
                {"type": "text", "key": "data.checks.severity", "name": "Severity"},
                {"type": "text", "key": "data.checks.service", "name": "Service"},
                {"type": "text", "key": "data.checks.risk", "name": "Risk"},
                {"type": "text", "key": "data.checks.remediation.description", "name": "Remediation"}
            ]
        }
    })
}

/// Drill-down over the nested `findings` array.
fn findings_layout() -> Value {
    json!({
        "type": "query-search-table",
        "name": "Findings",
        "options": {
            "unwind": {"path": "data.findings"},
            "default_sort": {"key": "data.findings.status", "desc": false},
            "search": [
                {"key": "data.requirement_id", "name": "Requirement ID"},
                {"key": "data.findings.check_title", "name": "Check Title"},
                {"key": "data.findings.status", "name": "Status", "enums": Status::names()},
                {"key": "data.findings.resource_type", "name": "Resource Type"},
                {"key": "data.findings.resource", "name": "Resource"},
                {"key": "data.findings.region_code", "name": "Region"}
            ],
            "fields": [
                {"type": "text", "key": "data.requirement_id", "name": "Requirement ID"},
                {"type": "text", "key": "data.findings.check_title", "name": "Check Title"},
                status_badges("data.findings.status"),
                {"type": "text", "key": "data.findings.resource_type", "name": "Resource Type"},
                {
                    "type": "text",
                    "key": "data.findings.resource",
                    "name": "Resource",
                    "reference": {
                        "resource_type": "inventory.CloudService",
                        "reference_key": "reference.resource_id"
                    }
                },
                {
                    "type": "text",
                    "key": "data.findings.region_code",
                    "name": "Region",
                    "reference": {
                        "resource_type": "inventory.Region",
                        "reference_key": "region_code"
                    }
                },
                {"type": "text", "key": "data.findings.status_extended", "name": "Status Extended"}
            ]
        }
    })
}
