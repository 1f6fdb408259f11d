//! Container build and orchestration files.

use super::Artifact;
use crate::domain::{configuration::Configuration, options::Database};

const DOCKERFILE: &str = r#"FROM python:3.11-slim
WORKDIR /app
COPY requirements.txt .
RUN pip install --no-cache-dir -r requirements.txt
COPY . .
RUN python manage.py collectstatic --noinput
EXPOSE 8000
CMD ["python", "manage.py", "runserver", "0.0.0.0:8000"]
"#;

const COMPOSE_HEAD: &str = r#"version: '3.8'
services:
  web:
    build: .
    ports:
      - "8000:8000"
    volumes:
      - .:/app
    environment:
      - DEBUG=1"#;

const POSTGRES_SERVICE: &str = r#"
  db:
    image: postgres:15
    environment:
      POSTGRES_DB: postgres
      POSTGRES_USER: postgres
      POSTGRES_PASSWORD: postgres
    volumes:
      - postgres_data:/var/lib/postgresql/data
    ports:
      - "5432:5432"
"#;

const MYSQL_SERVICE: &str = r#"
  db:
    image: mysql:8.0
    environment:
      MYSQL_DATABASE: mysql
      MYSQL_USER: root
      MYSQL_PASSWORD: root
      MYSQL_ROOT_PASSWORD: root
    volumes:
      - mysql_data:/var/lib/mysql
    ports:
      - "3306:3306"
"#;

const DOCKERIGNORE: &str = ".git
.gitignore
README.md
.env
.venv
venv/
__pycache__
*.pyc
.pytest_cache
htmlcov/
.coverage
";

/// Service block and named-volume section for the selected database.
fn database_service(database: Database) -> (&'static str, &'static str) {
    match database {
        Database::Sqlite => ("", ""),
        Database::Postgresql => (POSTGRES_SERVICE, "\nvolumes:\n  postgres_data:"),
        Database::Mysql => (MYSQL_SERVICE, "\nvolumes:\n  mysql_data:"),
    }
}

pub(super) fn dockerfile(_cfg: &Configuration) -> Artifact {
    Artifact::new("Dockerfile", DOCKERFILE)
}

pub(super) fn compose(cfg: &Configuration) -> Artifact {
    let (service, volumes) = database_service(cfg.database());
    Artifact::new(
        "docker-compose.yml",
        format!("{COMPOSE_HEAD}{service}\n{volumes}"),
    )
}

pub(super) fn dockerignore(_cfg: &Configuration) -> Artifact {
    Artifact::new(".dockerignore", DOCKERIGNORE)
}
