use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::typewriter::{RoleList, TypewriterConfig, TypewriterError};

pub const PLACEHOLDER_SERVICE_ID: &str = "YOUR_SERVICE_ID";
pub const PLACEHOLDER_TEMPLATE_ID: &str = "YOUR_TEMPLATE_ID";
pub const PLACEHOLDER_PUBLIC_KEY: &str = "YOUR_PUBLIC_KEY";

const DEFAULT_OWNER: &str = "Danny Janapon";
const DEFAULT_CONTACT_EMAIL: &str = "dannyjanapon@sjp2cd.edu.ph";
const DEFAULT_ROLES: [&str; 4] = [
    "BSIT Student",
    "Web Developer",
    "Frontend Developer",
    "UI/UX Enthusiast",
];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("couldn't parse site config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid typing config: {0}")]
    Typing(#[from] TypewriterError),
}

/// Credentials for the transactional email service backing the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailJsConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl Default for EmailJsConfig {
    fn default() -> Self {
        Self {
            service_id: PLACEHOLDER_SERVICE_ID.to_string(),
            template_id: PLACEHOLDER_TEMPLATE_ID.to_string(),
            public_key: PLACEHOLDER_PUBLIC_KEY.to_string(),
        }
    }
}

impl EmailJsConfig {
    /// Replaces each credential that is given, keeping the rest.
    pub fn overlay(
        &mut self,
        service_id: Option<&str>,
        template_id: Option<&str>,
        public_key: Option<&str>,
    ) {
        if let Some(v) = service_id {
            self.service_id = v.to_string();
        }
        if let Some(v) = template_id {
            self.template_id = v.to_string();
        }
        if let Some(v) = public_key {
            self.public_key = v.to_string();
        }
    }

    pub fn is_configured(&self) -> bool {
        let set = |value: &str, placeholder: &str| !value.trim().is_empty() && value != placeholder;
        set(&self.service_id, PLACEHOLDER_SERVICE_ID)
            && set(&self.template_id, PLACEHOLDER_TEMPLATE_ID)
            && set(&self.public_key, PLACEHOLDER_PUBLIC_KEY)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypingConfig {
    pub roles: Vec<String>,
    #[serde(flatten)]
    pub timing: TypewriterConfig,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            roles: DEFAULT_ROLES.iter().map(|s| s.to_string()).collect(),
            timing: TypewriterConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub owner: String,
    pub contact_email: String,
    pub email_js: EmailJsConfig,
    pub typing: TypingConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner: DEFAULT_OWNER.to_string(),
            contact_email: DEFAULT_CONTACT_EMAIL.to_string(),
            email_js: EmailJsConfig::default(),
            typing: TypingConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Defaults, then `PORTFOLIO_SITE_CONFIG` (JSON) if it was set at build
    /// time, then the individual `PORTFOLIO_CONTACT_EMAIL` and `EMAILJS_*`
    /// variables.
    pub fn from_build_env() -> Self {
        let mut config = Self::from_json_or_default(option_env!("PORTFOLIO_SITE_CONFIG"));
        if let Some(email) = option_env!("PORTFOLIO_CONTACT_EMAIL") {
            config.contact_email = email.to_string();
        }
        config.email_js.overlay(
            option_env!("EMAILJS_SERVICE_ID"),
            option_env!("EMAILJS_TEMPLATE_ID"),
            option_env!("EMAILJS_PUBLIC_KEY"),
        );
        config
    }

    fn from_json_or_default(json: Option<&str>) -> Self {
        let Some(json) = json else {
            return Self::default();
        };
        match Self::from_json(json) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{e}, falling back to the default site config");
                Self::default()
            }
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.role_list()?;
        Ok(config)
    }

    pub fn role_list(&self) -> Result<RoleList, TypewriterError> {
        RoleList::new(self.typing.roles.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholders_are_not_configured() {
        assert!(!EmailJsConfig::default().is_configured());

        let partial = EmailJsConfig {
            service_id: "service_abc1234".to_string(),
            ..Default::default()
        };
        assert!(!partial.is_configured());

        let blank = EmailJsConfig {
            service_id: "service_abc1234".to_string(),
            template_id: "  ".to_string(),
            public_key: "abcDEF123".to_string(),
        };
        assert!(!blank.is_configured());
    }

    #[test]
    fn test_full_credentials_are_configured() {
        let config = EmailJsConfig {
            service_id: "service_abc1234".to_string(),
            template_id: "template_xyz5678".to_string(),
            public_key: "abcDEF123xyz456".to_string(),
        };
        assert!(config.is_configured());
    }

    #[test]
    fn test_default_roles() {
        let config = SiteConfig::default();
        let roles = config.role_list().unwrap();
        assert_eq!(roles.len(), 4);
        assert_eq!(roles.get(0), "BSIT Student");
        assert_eq!(config.typing.timing, TypewriterConfig::default());
    }

    #[test]
    fn test_from_json_flattens_timing() {
        let config = SiteConfig::from_json(
            r#"{
                "owner": "Someone",
                "typing": { "roles": ["Rustacean"], "type_speed_ms": 20, "pause_at_full_ms": 900 }
            }"#,
        )
        .unwrap();
        assert_eq!(config.owner, "Someone");
        assert_eq!(config.contact_email, DEFAULT_CONTACT_EMAIL);
        assert_eq!(config.typing.roles, vec!["Rustacean".to_string()]);
        assert_eq!(config.typing.timing.type_speed_ms, 20);
        assert_eq!(config.typing.timing.pause_at_full_ms, 900);
        assert_eq!(config.typing.timing.delete_speed_ms, 50);
    }

    #[test]
    fn test_from_json_rejects_empty_roles() {
        let err = SiteConfig::from_json(r#"{"typing": {"roles": []}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Typing(TypewriterError::EmptyRoleList)));
    }

    #[test]
    fn test_typing_without_roles_keeps_default_roles() {
        let config = SiteConfig::from_json(r#"{"typing": {"type_speed_ms": 20}}"#).unwrap();
        assert_eq!(config.typing.roles, TypingConfig::default().roles);
        assert_eq!(config.typing.timing.type_speed_ms, 20);
        assert_eq!(config.typing.timing.delete_speed_ms, 50);
    }

    #[test]
    fn test_bad_build_config_falls_back_to_defaults() {
        assert_eq!(SiteConfig::from_json_or_default(None), SiteConfig::default());
        assert_eq!(
            SiteConfig::from_json_or_default(Some(r#"{"typing": {"roles": []}}"#)),
            SiteConfig::default()
        );

        let config = SiteConfig::from_json_or_default(Some(r#"{"owner": "Someone"}"#));
        assert_eq!(config.owner, "Someone");
    }

    #[test]
    fn test_overlay_keeps_unset_credentials() {
        let mut config = EmailJsConfig::default();
        config.overlay(Some("service_abc1234"), None, Some("abcDEF123"));
        assert_eq!(config.service_id, "service_abc1234");
        assert_eq!(config.template_id, PLACEHOLDER_TEMPLATE_ID);
        assert_eq!(config.public_key, "abcDEF123");
        assert!(!config.is_configured());
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = SiteConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
