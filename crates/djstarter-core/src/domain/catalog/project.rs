//! Project-level files: entry script, manifest, README and the settings
//! package named after the project.

use super::{Artifact, fill};
use crate::domain::{
    configuration::Configuration,
    options::{AuthMethod, Database, UiLanguage},
};

const MANAGE_PY: &str = r#"#!/usr/bin/env python
"""Django's command-line utility for administrative tasks."""
import os
import sys
if __name__ == '__main__':
    """Run administrative tasks."""
    os.environ.setdefault('DJANGO_SETTINGS_MODULE', '{{PROJECT_NAME}}.settings')
    try:
        from django.core.management import execute_from_command_line
    except ImportError as exc:
        raise ImportError(
            "Couldn't import Django. Are you sure it's installed and "
            "available on your PYTHONPATH environment variable? Did you "
            "forget to activate a virtual environment?"
        ) from exc
    execute_from_command_line(sys.argv)
"#;

pub(super) fn manage(cfg: &Configuration) -> Artifact {
    Artifact::new(
        "manage.py",
        fill(MANAGE_PY, &[("PROJECT_NAME", cfg.name())]),
    )
    .executable()
}

/// Requirement lines for `cfg`, in manifest order.
pub(crate) fn dependencies(cfg: &Configuration) -> Vec<&'static str> {
    let mut deps = vec!["Django>=4.2,<5.0", "whitenoise>=6.0"];
    match cfg.database() {
        Database::Postgresql => deps.push("psycopg2-binary>=2.9"),
        Database::Mysql => deps.push("mysqlclient>=2.1"),
        Database::Sqlite => {}
    }
    if cfg.api_enabled() {
        deps.extend(["djangorestframework>=3.14", "django-cors-headers>=3.14"]);
    }
    if cfg.auth_method().uses_djoser() {
        if cfg.auth_method() == AuthMethod::Jwt {
            deps.push("djangorestframework-simplejwt>=5.2");
        }
        deps.push("djoser>=2.2");
    }
    if cfg.admin_style().is_themed() {
        deps.push("django-jazzmin>=2.6");
    }
    deps
}

pub(super) fn requirements(cfg: &Configuration) -> Artifact {
    let mut content = dependencies(cfg).join("\n");
    content.push('\n');
    Artifact::new("requirements.txt", content)
}

const README_ZH: &str = r#"# {{PROJECT_NAME}}
Django项目，包含用户认证系统。
## 功能特性
- 用户注册/登录/登出
- 用户资料管理
- 响应式设计
- 管理后台
## 快速开始
1. 安装依赖：
```bash
pip install -r requirements.txt
```
2. 数据库迁移：
```bash
python manage.py migrate
```
3. 创建超级用户：
```bash
python manage.py createsuperuser
```
4. 运行开发服务器：
```bash
python manage.py runserver
```
访问 http://127.0.0.1:8000 查看网站。
"#;

const README_EN: &str = r#"# {{PROJECT_NAME}}
Django project with a user authentication system.
## Features
- User registration / login / logout
- User profile management
- Responsive design
- Admin site
## Quick start
1. Install dependencies:
```bash
pip install -r requirements.txt
```
2. Apply database migrations:
```bash
python manage.py migrate
```
3. Create a superuser:
```bash
python manage.py createsuperuser
```
4. Run the development server:
```bash
python manage.py runserver
```
Visit http://127.0.0.1:8000 to see the site.
"#;

pub(super) fn readme(cfg: &Configuration) -> Artifact {
    let template = match cfg.language() {
        UiLanguage::Zh => README_ZH,
        UiLanguage::En => README_EN,
    };
    Artifact::new(
        "README.md",
        fill(template, &[("PROJECT_NAME", cfg.name())]),
    )
}

const SETTINGS_PY: &str = r#"from pathlib import Path
BASE_DIR = Path(__file__).resolve().parent.parent
SECRET_KEY = 'django-insecure-change-this-in-production'
DEBUG = True
ALLOWED_HOSTS = []
INSTALLED_APPS = [
    {{INSTALLED_APPS}}
]
MIDDLEWARE = {{MIDDLEWARE}}
ROOT_URLCONF = '{{PROJECT_NAME}}.urls'
TEMPLATES = [
    {
        'BACKEND': 'django.template.backends.django.DjangoTemplates',
        'DIRS': [BASE_DIR / 'templates'],
        'APP_DIRS': True,
        'OPTIONS': {
            'context_processors': [
                'django.template.context_processors.debug',
                'django.template.context_processors.request',
                'django.contrib.auth.context_processors.auth',
                'django.contrib.messages.context_processors.messages',
            ],
        },
    },
]
WSGI_APPLICATION = '{{PROJECT_NAME}}.wsgi.application'
DATABASES = {
    'default': {{DATABASE}}
}
AUTH_PASSWORD_VALIDATORS = [
    {'NAME': 'django.contrib.auth.password_validation.UserAttributeSimilarityValidator'},
    {'NAME': 'django.contrib.auth.password_validation.MinimumLengthValidator'},
    {'NAME': 'django.contrib.auth.password_validation.CommonPasswordValidator'},
    {'NAME': 'django.contrib.auth.password_validation.NumericPasswordValidator'},
]
LANGUAGE_CODE = 'zh-hans'
TIME_ZONE = 'Asia/Shanghai'
USE_I18N = True
USE_TZ = True
STATIC_URL = '/static/'
STATICFILES_DIRS = [BASE_DIR / 'static']
DEFAULT_AUTO_FIELD = 'django.db.models.BigAutoField'
LOGIN_URL = '/login/'
LOGIN_REDIRECT_URL = '/'
LOGOUT_REDIRECT_URL = '/'"#;

const REST_FRAMEWORK_HEAD: &str = "
REST_FRAMEWORK = {
    'DEFAULT_AUTHENTICATION_CLASSES': [";

const REST_FRAMEWORK_TAIL: &str = r#"
    ],
    'DEFAULT_PERMISSION_CLASSES': [
        'rest_framework.permissions.IsAuthenticated',
    ],
}
CORS_ALLOWED_ORIGINS = [
    "http://localhost:3000",
    "http://127.0.0.1:3000",
]"#;

const MIDDLEWARE: [&str; 8] = [
    "django.middleware.security.SecurityMiddleware",
    "whitenoise.middleware.WhiteNoiseMiddleware",
    "django.contrib.sessions.middleware.SessionMiddleware",
    "django.middleware.common.CommonMiddleware",
    "django.middleware.csrf.CsrfViewMiddleware",
    "django.contrib.auth.middleware.AuthenticationMiddleware",
    "django.contrib.messages.middleware.MessageMiddleware",
    "django.middleware.clickjacking.XFrameOptionsMiddleware",
];

const CORS_MIDDLEWARE: &str = "corsheaders.middleware.CorsMiddleware";

fn installed_apps(cfg: &Configuration) -> Vec<&'static str> {
    let mut apps = vec![
        "django.contrib.admin",
        "django.contrib.auth",
        "django.contrib.contenttypes",
        "django.contrib.sessions",
        "django.contrib.messages",
        "django.contrib.staticfiles",
        "main",
    ];
    if cfg.api_enabled() {
        apps.extend(["rest_framework", "corsheaders"]);
        if cfg.auth_method().uses_djoser() {
            apps.push("djoser");
            if cfg.auth_method() == AuthMethod::Jwt {
                apps.push("rest_framework_simplejwt");
            }
        }
    }
    if cfg.admin_style().is_themed() {
        apps.insert(0, "jazzmin");
    }
    apps
}

fn middleware(cfg: &Configuration) -> Vec<&'static str> {
    let mut chain = MIDDLEWARE.to_vec();
    if cfg.api_enabled() {
        // CORS must run before CommonMiddleware.
        chain.insert(2, CORS_MIDDLEWARE);
    }
    chain
}

/// Render a list of strings as a Python list literal: `['a', 'b']`.
fn python_list(items: &[&str]) -> String {
    let quoted: Vec<String> = items.iter().map(|i| format!("'{i}'")).collect();
    format!("[{}]", quoted.join(", "))
}

fn database_block(database: Database) -> &'static str {
    match database {
        Database::Sqlite => {
            "{'ENGINE': 'django.db.backends.sqlite3', 'NAME': BASE_DIR / 'db.sqlite3'}"
        }
        Database::Postgresql => {
            "{'ENGINE': 'django.db.backends.postgresql', 'NAME': 'postgres', 'USER': 'postgres', 'PASSWORD': 'postgres', 'HOST': 'localhost', 'PORT': '5432'}"
        }
        Database::Mysql => {
            "{'ENGINE': 'django.db.backends.mysql', 'NAME': 'mysql', 'USER': 'root', 'PASSWORD': 'root', 'HOST': 'localhost', 'PORT': '3306'}"
        }
    }
}

fn authentication_class(auth: AuthMethod) -> &'static str {
    match auth {
        AuthMethod::Session => "'rest_framework.authentication.SessionAuthentication',",
        AuthMethod::Token => "'rest_framework.authentication.TokenAuthentication',",
        AuthMethod::Jwt => "'rest_framework_simplejwt.authentication.JWTAuthentication',",
    }
}

pub(super) fn settings(cfg: &Configuration) -> Artifact {
    let apps = installed_apps(cfg)
        .into_iter()
        .map(|a| format!("'{a}'"))
        .collect::<Vec<_>>()
        .join(", ");
    let chain = python_list(&middleware(cfg));
    let mut content = fill(
        SETTINGS_PY,
        &[
            ("INSTALLED_APPS", apps.as_str()),
            ("MIDDLEWARE", chain.as_str()),
            ("DATABASE", database_block(cfg.database())),
            ("PROJECT_NAME", cfg.name()),
        ],
    );

    if cfg.custom_user_model() {
        content.push_str("\nAUTH_USER_MODEL = 'main.CustomUser'");
    }
    if cfg.api_enabled() {
        content.push_str(REST_FRAMEWORK_HEAD);
        content.push_str(authentication_class(cfg.auth_method()));
        content.push_str(REST_FRAMEWORK_TAIL);
    }

    Artifact::new(format!("{}/settings.py", cfg.name()), content)
}

const URLS_PY: &str = r#"from django.contrib import admin
from django.urls import path, include
urlpatterns = [
    path('admin/', admin.site.urls),
    path('', include('main.urls')),
]"#;

pub(super) fn urls(cfg: &Configuration) -> Artifact {
    Artifact::new(format!("{}/urls.py", cfg.name()), URLS_PY)
}

const WSGI_PY: &str = r#"import os
from django.core.wsgi import get_wsgi_application
os.environ.setdefault('DJANGO_SETTINGS_MODULE', '{{PROJECT_NAME}}.settings')
application = get_wsgi_application()
"#;

pub(super) fn wsgi(cfg: &Configuration) -> Artifact {
    Artifact::new(
        format!("{}/wsgi.py", cfg.name()),
        fill(WSGI_PY, &[("PROJECT_NAME", cfg.name())]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        configuration::{RawOptions, resolve},
        options::AdminStyle,
    };

    fn cfg(options: RawOptions) -> Configuration {
        resolve(options)
    }

    #[test]
    fn manage_points_at_project_settings() {
        let a = manage(&cfg(RawOptions::new("blog")));
        assert!(a.content.starts_with("#!/usr/bin/env python\n"));
        assert!(a.content.contains("'blog.settings'"));
        assert!(a.permissions.executable_flag());
    }

    #[test]
    fn baseline_requirements() {
        let a = requirements(&cfg(RawOptions::new("p")));
        assert_eq!(a.content, "Django>=4.2,<5.0\nwhitenoise>=6.0\n");
    }

    #[test]
    fn database_drivers() {
        let pg = requirements(&cfg(RawOptions::new("p").with_database(Database::Postgresql)));
        assert!(pg.content.contains("psycopg2-binary>=2.9"));
        assert!(!pg.content.contains("mysqlclient"));

        let my = requirements(&cfg(RawOptions::new("p").with_database(Database::Mysql)));
        assert!(my.content.contains("mysqlclient>=2.1"));
    }

    #[test]
    fn jwt_requirements_order() {
        let c = cfg(RawOptions::new("p").with_api(true).with_auth(AuthMethod::Jwt));
        assert_eq!(
            dependencies(&c),
            vec![
                "Django>=4.2,<5.0",
                "whitenoise>=6.0",
                "djangorestframework>=3.14",
                "django-cors-headers>=3.14",
                "djangorestframework-simplejwt>=5.2",
                "djoser>=2.2",
            ]
        );
    }

    #[test]
    fn token_auth_adds_djoser_without_simplejwt() {
        let c = cfg(RawOptions::new("p").with_api(true));
        let deps = dependencies(&c);
        assert!(deps.contains(&"djoser>=2.2"));
        assert!(!deps.iter().any(|d| d.contains("simplejwt")));
    }

    #[test]
    fn auth_without_api_still_pulls_auth_packages() {
        // The manifest keys off the auth method alone.
        let c = cfg(RawOptions::new("p").with_auth(AuthMethod::Token));
        assert!(dependencies(&c).contains(&"djoser>=2.2"));
    }

    #[test]
    fn jazzmin_requirement() {
        let c = cfg(RawOptions::new("p").with_admin(AdminStyle::Jazzmin));
        assert!(dependencies(&c).contains(&"django-jazzmin>=2.6"));
    }

    #[test]
    fn readme_language_and_name() {
        let zh = readme(&cfg(RawOptions::new("zhproject")));
        assert!(zh.content.starts_with("# zhproject\n"));
        assert!(zh.content.contains("Django项目"));

        let en = readme(&cfg(
            RawOptions::new("enproject").with_language(UiLanguage::En),
        ));
        assert!(en.content.starts_with("# enproject\n"));
        assert!(en.content.contains("Django project"));
    }

    #[test]
    fn default_settings() {
        let a = settings(&cfg(RawOptions::new("demo")));
        assert_eq!(a.path, "demo/settings.py");
        assert!(a.content.contains("django.db.backends.sqlite3"));
        assert!(a.content.contains("ROOT_URLCONF = 'demo.urls'"));
        assert!(a.content.contains("WSGI_APPLICATION = 'demo.wsgi.application'"));
        assert!(a.content.ends_with("LOGOUT_REDIRECT_URL = '/'"));
        assert!(!a.content.contains("AUTH_USER_MODEL"));
        assert!(!a.content.contains("REST_FRAMEWORK"));
        assert!(!a.content.contains("{{"));
    }

    #[test]
    fn installed_apps_line_is_rendered_flat() {
        let a = settings(&cfg(RawOptions::new("demo")));
        assert!(a.content.contains(
            "INSTALLED_APPS = [\n    'django.contrib.admin', 'django.contrib.auth', \
             'django.contrib.contenttypes', 'django.contrib.sessions', \
             'django.contrib.messages', 'django.contrib.staticfiles', 'main'\n]"
        ));
    }

    #[test]
    fn middleware_is_a_python_list() {
        let a = settings(&cfg(RawOptions::new("demo")));
        assert!(a.content.contains(
            "MIDDLEWARE = ['django.middleware.security.SecurityMiddleware', \
             'whitenoise.middleware.WhiteNoiseMiddleware', \
             'django.contrib.sessions.middleware.SessionMiddleware'"
        ));
    }

    #[test]
    fn api_inserts_cors_middleware_third() {
        let c = cfg(RawOptions::new("p").with_api(true));
        assert_eq!(middleware(&c)[2], CORS_MIDDLEWARE);
        assert_eq!(middleware(&c).len(), 9);
    }

    #[test]
    fn themed_admin_app_comes_first() {
        let c = cfg(RawOptions::new("p").with_admin(AdminStyle::Jazzmin));
        assert_eq!(installed_apps(&c)[0], "jazzmin");
    }

    #[test]
    fn jwt_settings_block() {
        let c = cfg(RawOptions::new("p").with_api(true).with_auth(AuthMethod::Jwt));
        let a = settings(&c);
        assert!(a.content.contains("'rest_framework_simplejwt'"));
        assert!(a.content.contains("'djoser'"));
        assert!(a.content.contains(
            "'DEFAULT_AUTHENTICATION_CLASSES': ['rest_framework_simplejwt.authentication.JWTAuthentication',\n    ],"
        ));
        assert!(a.content.contains("\nAUTH_USER_MODEL = 'main.CustomUser'\nREST_FRAMEWORK = {"));
        assert!(a.content.ends_with("    \"http://127.0.0.1:3000\",\n]"));
    }

    #[test]
    fn database_engines() {
        let pg = settings(&cfg(RawOptions::new("p").with_database(Database::Postgresql)));
        assert!(pg.content.contains("'ENGINE': 'django.db.backends.postgresql'"));
        assert!(pg.content.contains("'PORT': '5432'"));

        let my = settings(&cfg(RawOptions::new("p").with_database(Database::Mysql)));
        assert!(my.content.contains("'ENGINE': 'django.db.backends.mysql'"));
        assert!(my.content.contains("'PORT': '3306'"));
    }

    #[test]
    fn wsgi_and_urls_live_in_project_package() {
        let c = cfg(RawOptions::new("site"));
        assert_eq!(urls(&c).path, "site/urls.py");
        let w = wsgi(&c);
        assert_eq!(w.path, "site/wsgi.py");
        assert!(w.content.contains("'site.settings'"));
    }
}
