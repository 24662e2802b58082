//! Static compliance framework table.

/// The only cloud provider this plugin targets.
pub const AWS_PROVIDER: &str = "aws";

/// Display identifier (as the host platform presents it) mapped to the
/// framework selector Prowler expects on its `--compliance` flag.
const AWS_FRAMEWORKS: &[(&str, &str)] = &[
    ("CIS-1.4", "cis_1.4_aws"),
    ("CIS-1.5", "cis_1.5_aws"),
    (
        "AWS-Audit-Manager-Control-Tower-Guardrails",
        "aws_audit_manager_control_tower_guardrails_aws",
    ),
    (
        "AWS-Foundational-Security-Best-Practices",
        "aws_foundational_security_best_practices_aws",
    ),
    ("CISA", "cisa_aws"),
    ("ENS-RD2022", "ens_rd2022_aws"),
    ("FedRamp-Low-Revision-4", "fedramp_low_revision_4_aws"),
    ("FedRAMP-Moderate-Revision-4", "fedramp_moderate_revision_4_aws"),
    ("FFIEC", "ffiec_aws"),
    ("GDPR", "gdpr_aws"),
    ("GxP-21-CFR-Part-11", "gxp_21_cfr_part_11_aws"),
    ("GxP-EU-Annex-11", "gxp_eu_annex_11_aws"),
    ("HIPAA", "hipaa_aws"),
    ("ISO27001-2013", "iso27001_2013_aws"),
    ("NIST-800-171-Revision-2", "nist_800_171_revision_2_aws"),
    ("NIST-800-53-Revision-4", "nist_800_53_revision_4_aws"),
    ("NIST-800-53-Revision-5", "nist_800_53_revision_5_aws"),
    ("NIST-CSF-1.1", "nist_csf_1.1_aws"),
    ("PCI-3.2.1", "pci_3.2.1_aws"),
    (
        "RBI-Cyber-Security-Framework",
        "rbi_cyber_security_framework_aws",
    ),
    ("SOC2", "soc2_aws"),
];

/// All known frameworks for a provider, or `None` for an unknown provider.
pub fn compliance_frameworks(provider: &str) -> Option<&'static [(&'static str, &'static str)]> {
    match provider {
        AWS_PROVIDER => Some(AWS_FRAMEWORKS),
        _ => None,
    }
}

/// Resolve a display identifier to the scanner's framework selector.
pub fn resolve_framework(provider: &str, framework: &str) -> Option<&'static str> {
    compliance_frameworks(provider)?
        .iter()
        .find(|(name, _)| *name == framework)
        .map(|(_, selector)| *selector)
}
