//! Gateway authorization decision and policy document assembly.
//!
//! # Purpose
//! Builds the exact JSON shape the gateway's enforcement layer consumes: a
//! principal identifier plus a one-statement IAM-style policy document.
//!
//! # Key invariants
//! - An Allow decision always carries a non-empty principal; a Deny always
//!   carries an empty one. [`Decision::allow`] downgrades an empty subject to
//!   Deny rather than exposing the invalid combination.
//! - The policy document is produced exactly once per invocation and never
//!   persisted; the enforcement layer trusts it verbatim.
use serde::{Deserialize, Serialize};

/// Fixed policy language version expected by the gateway.
pub const POLICY_VERSION: &str = "2012-10-17";

/// The single action a gateway authorizer rules on.
pub const INVOKE_ACTION: &str = "execute-api:Invoke";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum Effect {
    Allow,
    Deny,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PolicyStatement {
    #[serde(rename = "Effect")]
    pub effect: Effect,
    #[serde(rename = "Action")]
    pub action: String,
    #[serde(rename = "Resource")]
    pub resource: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PolicyDocument {
    #[serde(rename = "Version")]
    pub version: String,
    #[serde(rename = "Statement")]
    pub statement: Vec<PolicyStatement>,
}

/// The verdict handed back to the gateway's enforcement layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Decision {
    #[serde(rename = "principalId")]
    pub principal_id: String,
    #[serde(rename = "policyDocument")]
    pub policy_document: PolicyDocument,
}

impl Decision {
    /// Allow `subject` to invoke `resource`.
    ///
    /// An empty subject cannot be allowed; the decision fails closed to Deny
    /// so the Allow/non-empty-principal invariant holds by construction.
    pub fn allow(subject: &str, resource: &str) -> Self {
        if subject.is_empty() {
            return Self::deny(resource);
        }
        Self::with_effect(subject, Effect::Allow, resource)
    }

    /// Deny invocation of `resource` with an empty principal.
    pub fn deny(resource: &str) -> Self {
        Self::with_effect("", Effect::Deny, resource)
    }

    fn with_effect(subject: &str, effect: Effect, resource: &str) -> Self {
        Self {
            principal_id: subject.to_string(),
            policy_document: PolicyDocument {
                version: POLICY_VERSION.to_string(),
                statement: vec![PolicyStatement {
                    effect,
                    action: INVOKE_ACTION.to_string(),
                    resource: resource.to_string(),
                }],
            },
        }
    }

    pub fn effect(&self) -> Effect {
        self.policy_document
            .statement
            .first()
            .map(|statement| statement.effect)
            .unwrap_or(Effect::Deny)
    }

    pub fn is_allow(&self) -> bool {
        self.effect() == Effect::Allow
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARN: &str = "arn:aws:execute-api:us-east-1:123456789012:api-id/prod/GET/paintings";

    #[test]
    fn allow_carries_subject_and_effect() {
        let decision = Decision::allow("user-1", ARN);
        assert!(decision.is_allow());
        assert_eq!(decision.principal_id, "user-1");
        assert_eq!(decision.policy_document.statement[0].resource, ARN);
    }

    #[test]
    fn deny_carries_empty_principal() {
        let decision = Decision::deny(ARN);
        assert_eq!(decision.effect(), Effect::Deny);
        assert!(decision.principal_id.is_empty());
    }

    #[test]
    fn allow_with_empty_subject_fails_closed() {
        let decision = Decision::allow("", ARN);
        assert_eq!(decision.effect(), Effect::Deny);
        assert!(decision.principal_id.is_empty());
    }

    #[test]
    fn effect_and_principal_stay_paired() {
        // The asymmetry must hold for every decision the constructors can
        // produce: Allow <=> non-empty principal.
        for decision in [
            Decision::allow("user-1", ARN),
            Decision::allow("", ARN),
            Decision::deny(ARN),
        ] {
            assert_eq!(decision.is_allow(), !decision.principal_id.is_empty());
        }
    }

    #[test]
    fn wire_shape_matches_gateway_contract() {
        let decision = Decision::deny(ARN);
        let value = serde_json::to_value(&decision).expect("serialize");
        assert_eq!(value["principalId"], "");
        assert_eq!(value["policyDocument"]["Version"], "2012-10-17");
        let statement = &value["policyDocument"]["Statement"][0];
        assert_eq!(statement["Effect"], "Deny");
        assert_eq!(statement["Action"], "execute-api:Invoke");
        assert_eq!(statement["Resource"], ARN);
    }

    #[test]
    fn decision_roundtrips_through_json() {
        let decision = Decision::allow("user-1", ARN);
        let text = serde_json::to_string(&decision).expect("serialize");
        let decoded: Decision = serde_json::from_str(&text).expect("deserialize");
        assert_eq!(decoded, decision);
    }
}
