//! Human-readable run summary and its localized messages.

use serde::Serialize;

use crate::domain::{configuration::Configuration, options::UiLanguage};

/// Localized strings printed around a generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Messages {
    pub generating: &'static str,
    pub complete: &'static str,
    pub next_steps: &'static str,
}

impl Messages {
    pub const fn for_language(language: UiLanguage) -> Self {
        match language {
            UiLanguage::Zh => Self {
                generating: "正在生成Django项目",
                complete: "项目生成成功! 功能",
                next_steps: "下一步:",
            },
            UiLanguage::En => Self {
                generating: "Generating Django project",
                complete: "Project generated successfully! Features",
                next_steps: "Next steps:",
            },
        }
    }
}

/// The active feature set of a [`Configuration`], in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub project: String,
    pub features: Vec<String>,
    pub next_step: String,
}

impl Summary {
    /// Comma-separated feature tags, e.g. `POSTGRESQL, API(JWT), DOCKER`.
    pub fn feature_line(&self) -> String {
        self.features.join(", ")
    }
}

impl From<&Configuration> for Summary {
    fn from(cfg: &Configuration) -> Self {
        let mut features = vec![cfg.database().as_str().to_uppercase()];
        if cfg.api_enabled() {
            features.push(format!(
                "API({})",
                cfg.auth_method().as_str().to_uppercase()
            ));
        }
        if cfg.admin_style().is_themed() {
            features.push(cfg.admin_style().as_str().to_uppercase());
        }
        if cfg.custom_user_model() {
            features.push("CUSTOM_USER".into());
        }
        if cfg.containerized() {
            features.push("DOCKER".into());
        }

        Self {
            project: cfg.name().to_string(),
            features,
            next_step: format!("cd {} && python manage.py runserver", cfg.name()),
        }
    }
}
