//! HTML document templates under `templates/main/`. Written unconditionally.

use super::Artifact;
use crate::domain::configuration::Configuration;

const BASE_HTML: &str = r#"<!DOCTYPE html>
<html lang="zh-CN">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{% block title %}Django用户系统{% endblock %}</title>
    <link href="https://cdn.jsdelivr.net/npm/bootstrap@5.1.3/dist/css/bootstrap.min.css" rel="stylesheet">
</head>
<body>
    <nav class="navbar navbar-expand-lg navbar-dark bg-dark">
        <div class="container">
            <a class="navbar-brand" href="{% url 'home' %}">Django用户系统</a>
            <div class="navbar-nav ms-auto">
                {% if user.is_authenticated %}
                    <a class="nav-link" href="{% url 'profile' %}">个人资料</a>
                    <a class="nav-link" href="{% url 'logout' %}">退出</a>
                {% else %}
                    <a class="nav-link" href="{% url 'login' %}">登录</a>
                    <a class="nav-link" href="{% url 'register' %}">注册</a>
                {% endif %}
            </div>
        </div>
    </nav>
    <div class="container mt-4">
        {% if messages %}
            {% for message in messages %}
                <div class="alert alert-{{ message.tags }} alert-dismissible fade show" role="alert">
                    {{ message }}
                    <button type="button" class="btn-close" data-bs-dismiss="alert"></button>
                </div>
            {% endfor %}
        {% endif %}
        {% block content %}
        {% endblock %}
    </div>
    <script src="https://cdn.jsdelivr.net/npm/bootstrap@5.1.3/dist/js/bootstrap.bundle.min.js"></script>
</body>
</html>"#;

const HOME_HTML: &str = r#"{% extends 'main/base.html' %}
{% block content %}
<div class="row">
    <div class="col-md-8 mx-auto">
        <div class="jumbotron">
            <h1 class="display-4">欢迎来到Django用户系统!</h1>
            <p class="lead">这是一个完整的用户认证系统示例。</p>
            {% if user.is_authenticated %}
                <p>你好, {{ user.username }}!</p>
                <a class="btn btn-primary btn-lg" href="{% url 'profile' %}">查看个人资料</a>
            {% else %}
                <p>请登录或注册账户。</p>
                <a class="btn btn-primary btn-lg" href="{% url 'register' %}">立即注册</a>
                <a class="btn btn-outline-primary btn-lg" href="{% url 'login' %}">登录</a>
            {% endif %}
        </div>
    </div>
</div>
{% endblock %}"#;

const LOGIN_HTML: &str = r#"{% extends 'main/base.html' %}
{% block title %}登录{% endblock %}
{% block content %}
<div class="row">
    <div class="col-md-6 mx-auto">
        <div class="card">
            <div class="card-header">
                <h3>登录</h3>
            </div>
            <div class="card-body">
                <form method="post">
                    {% csrf_token %}
                    <div class="mb-3">
                        <label for="{{ form.username.id_for_label }}" class="form-label">用户名</label>
                        {{ form.username }}
                    </div>
                    <div class="mb-3">
                        <label for="{{ form.password.id_for_label }}" class="form-label">密码</label>
                        {{ form.password }}
                    </div>
                    <button type="submit" class="btn btn-primary">登录</button>
                    <a href="{% url 'register' %}" class="btn btn-link">还没有账户？注册</a>
                </form>
            </div>
        </div>
    </div>
</div>
{% endblock %}"#;

const REGISTER_HTML: &str = r#"{% extends 'main/base.html' %}
{% block title %}注册{% endblock %}
{% block content %}
<div class="row">
    <div class="col-md-6 mx-auto">
        <div class="card">
            <div class="card-header">
                <h3>注册</h3>
            </div>
            <div class="card-body">
                <form method="post">
                    {% csrf_token %}
                    <div class="mb-3">
                        <label for="{{ form.username.id_for_label }}" class="form-label">用户名</label>
                        {{ form.username }}
                        {% if form.username.help_text %}
                            <div class="form-text">{{ form.username.help_text }}</div>
                        {% endif %}
                    </div>
                    <div class="mb-3">
                        <label for="{{ form.password1.id_for_label }}" class="form-label">密码</label>
                        {{ form.password1 }}
                        {% if form.password1.help_text %}
                            <div class="form-text">{{ form.password1.help_text }}</div>
                        {% endif %}
                    </div>
                    <div class="mb-3">
                        <label for="{{ form.password2.id_for_label }}" class="form-label">确认密码</label>
                        {{ form.password2 }}
                    </div>
                    <button type="submit" class="btn btn-primary">注册</button>
                    <a href="{% url 'login' %}" class="btn btn-link">已有账户？登录</a>
                </form>
            </div>
        </div>
    </div>
</div>
{% endblock %}"#;

const PROFILE_HTML: &str = r#"{% extends 'main/base.html' %}
{% block title %}个人资料{% endblock %}
{% block content %}
<div class="row">
    <div class="col-md-8 mx-auto">
        <div class="card">
            <div class="card-header">
                <h3>个人资料</h3>
            </div>
            <div class="card-body">
                <table class="table">
                    <tr>
                        <th>用户名:</th>
                        <td>{{ user.username }}</td>
                    </tr>
                    <tr>
                        <th>邮箱:</th>
                        <td>{{ user.email|default:"未设置" }}</td>
                    </tr>
                    <tr>
                        <th>姓名:</th>
                        <td>{{ user.get_full_name|default:"未设置" }}</td>
                    </tr>
                    <tr>
                        <th>注册时间:</th>
                        <td>{{ user.date_joined }}</td>
                    </tr>
                    <tr>
                        <th>最后登录:</th>
                        <td>{{ user.last_login }}</td>
                    </tr>
                </table>
            </div>
        </div>
    </div>
</div>
{% endblock %}"#;

pub(super) fn base(_cfg: &Configuration) -> Artifact {
    Artifact::new("templates/main/base.html", BASE_HTML)
}

pub(super) fn home(_cfg: &Configuration) -> Artifact {
    Artifact::new("templates/main/home.html", HOME_HTML)
}

pub(super) fn login(_cfg: &Configuration) -> Artifact {
    Artifact::new("templates/main/login.html", LOGIN_HTML)
}

pub(super) fn register(_cfg: &Configuration) -> Artifact {
    Artifact::new("templates/main/register.html", REGISTER_HTML)
}

pub(super) fn profile(_cfg: &Configuration) -> Artifact {
    Artifact::new("templates/main/profile.html", PROFILE_HTML)
}
