//! The `main` application package: models, admin, views, routes and the
//! custom-user migration.

use super::Artifact;
use crate::domain::configuration::Configuration;

const CUSTOM_USER_MODELS: &str = r#"from django.contrib.auth.models import AbstractUser
from django.db import models
class CustomUser(AbstractUser):
    bio = models.TextField(max_length=500, blank=True)
    birth_date = models.DateField(null=True, blank=True)
    phone = models.CharField(max_length=20, blank=True)
    address = models.TextField(max_length=300, blank=True)
    role = models.CharField(max_length=20, default='user')
"#;

const PLACEHOLDER_MODELS: &str = "from django.db import models\n\n# Create your models here.\n";

pub(super) fn models(cfg: &Configuration) -> Artifact {
    let content = if cfg.custom_user_model() {
        CUSTOM_USER_MODELS
    } else {
        PLACEHOLDER_MODELS
    };
    Artifact::new("main/models.py", content)
}

const CUSTOM_USER_ADMIN: &str = r#"from django.contrib import admin
from django.contrib.auth.admin import UserAdmin
from .models import CustomUser
@admin.register(CustomUser)
class CustomUserAdmin(UserAdmin):
    fieldsets = UserAdmin.fieldsets + (
        ('Additional Info', {'fields': ('bio', 'birth_date', 'phone', 'address', 'role')}),
    )
    add_fieldsets = UserAdmin.add_fieldsets + (
        ('Additional Info', {'fields': ('bio', 'birth_date', 'phone', 'address', 'role')}),
    )
"#;

const PLACEHOLDER_ADMIN: &str = "from django.contrib import admin\n\n# Register your models here.\n";

pub(super) fn admin(cfg: &Configuration) -> Artifact {
    let content = if cfg.custom_user_model() {
        CUSTOM_USER_ADMIN
    } else {
        PLACEHOLDER_ADMIN
    };
    Artifact::new("main/admin.py", content)
}

// Identical for every auth method.
const VIEWS_PY: &str = r#"from django.shortcuts import render, redirect
from django.contrib.auth import login, authenticate
from django.contrib.auth.decorators import login_required
from django.contrib.auth.forms import UserCreationForm
from django.contrib import messages
def home(request):
    return render(request, 'main/home.html')
def register_view(request):
    if request.method == 'POST':
        form = UserCreationForm(request.POST)
        if form.is_valid():
            user = form.save()
            username = form.cleaned_data.get('username')
            messages.success(request, f'账户创建成功，欢迎 {username}!')
            return redirect('login')
    else:
        form = UserCreationForm()
    return render(request, 'main/register.html', {'form': form})
@login_required
def profile_view(request):
    return render(request, 'main/profile.html')
"#;

pub(super) fn views(_cfg: &Configuration) -> Artifact {
    Artifact::new("main/views.py", VIEWS_PY)
}

const URLS_PY: &str = r#"from django.urls import path
from django.contrib.auth import views as auth_views
from . import views
urlpatterns = [
    path('', views.home, name='home'),
    path('login/', auth_views.LoginView.as_view(template_name='main/login.html'), name='login'),
    path('logout/', auth_views.LogoutView.as_view(), name='logout'),
    path('register/', views.register_view, name='register'),
    path('profile/', views.profile_view, name='profile'),
]"#;

pub(super) fn urls(_cfg: &Configuration) -> Artifact {
    Artifact::new("main/urls.py", URLS_PY)
}

pub(super) fn package_marker(_cfg: &Configuration) -> Artifact {
    Artifact::new("main/__init__.py", "")
}

pub(super) fn migrations_marker(_cfg: &Configuration) -> Artifact {
    Artifact::new("main/migrations/__init__.py", "")
}

const INITIAL_MIGRATION: &str = r#"# Generated migration for custom user model
from django.db import migrations, models
import django.contrib.auth.models
class Migration(migrations.Migration):
    initial = True
    dependencies = [
        ('auth', '0012_alter_user_first_name_max_length'),
    ]
    operations = [
        migrations.CreateModel(
            name='CustomUser',
            fields=[
                ('id', models.BigAutoField(auto_created=True, primary_key=True, serialize=False, verbose_name='ID')),
                ('password', models.CharField(max_length=128, verbose_name='password')),
                ('last_login', models.DateTimeField(blank=True, null=True, verbose_name='last login')),
                ('is_superuser', models.BooleanField(default=False)),
                ('username', models.CharField(max_length=150, unique=True)),
                ('first_name', models.CharField(blank=True, max_length=150)),
                ('last_name', models.CharField(blank=True, max_length=150)),
                ('email', models.EmailField(blank=True, max_length=254)),
                ('is_staff', models.BooleanField(default=False)),
                ('is_active', models.BooleanField(default=True)),
                ('date_joined', models.DateTimeField(auto_now_add=True)),
                ('bio', models.TextField(blank=True, max_length=500)),
                ('birth_date', models.DateField(blank=True, null=True)),
                ('phone', models.CharField(blank=True, max_length=20)),
                ('address', models.TextField(blank=True, max_length=300)),
                ('role', models.CharField(default='user', max_length=20)),
            ],
            options={
                'verbose_name': 'user',
                'verbose_name_plural': 'users',
            },
            managers=[
                ('objects', django.contrib.auth.models.UserManager()),
            ],
        ),
    ]
"#;

pub(super) fn initial_migration(_cfg: &Configuration) -> Artifact {
    Artifact::new("main/migrations/0001_initial.py", INITIAL_MIGRATION)
}
