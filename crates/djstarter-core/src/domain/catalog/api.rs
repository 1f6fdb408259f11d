//! REST API subpackage under `main/api/`.

use super::Artifact;
use crate::domain::configuration::Configuration;

const URLS_PY: &str = r#"from django.urls import path, include
from rest_framework.routers import DefaultRouter
from . import views
router = DefaultRouter()
router.register(r'users', views.UserViewSet)
urlpatterns = [
    path('api/', include(router.urls)),
    path('api/auth/', include('djoser.urls')),
]"#;

const EXTENDED_SERIALIZER: &str = r#"from rest_framework import serializers
from django.contrib.auth import get_user_model
User = get_user_model()
class UserSerializer(serializers.ModelSerializer):
    class Meta:
        model = User
        fields = ['id', 'username', 'email', 'bio', 'birth_date', 'phone', 'address', 'role']
        read_only_fields = ['id']
"#;

const MINIMAL_SERIALIZER: &str = r#"from rest_framework import serializers
from django.contrib.auth.models import User
class UserSerializer(serializers.ModelSerializer):
    class Meta:
        model = User
        fields = ['id', 'username', 'email', 'first_name', 'last_name']
        read_only_fields = ['id']
"#;

const VIEWS_PY: &str = r#"from rest_framework import viewsets, permissions
from django.contrib.auth import get_user_model
from .serializers import UserSerializer
User = get_user_model()
class UserViewSet(viewsets.ModelViewSet):
    queryset = User.objects.all()
    serializer_class = UserSerializer
    permission_classes = [permissions.IsAuthenticated]
    def get_queryset(self):
        if self.request.user.is_staff:
            return User.objects.all()
        return User.objects.filter(id=self.request.user.id)
"#;

pub(super) fn urls(_cfg: &Configuration) -> Artifact {
    Artifact::new("main/api/urls.py", URLS_PY)
}

pub(super) fn package_marker(_cfg: &Configuration) -> Artifact {
    Artifact::new("main/api/__init__.py", "")
}

pub(super) fn serializers(cfg: &Configuration) -> Artifact {
    let content = if cfg.custom_user_model() {
        EXTENDED_SERIALIZER
    } else {
        MINIMAL_SERIALIZER
    };
    Artifact::new("main/api/serializers.py", content)
}

pub(super) fn views(_cfg: &Configuration) -> Artifact {
    Artifact::new("main/api/views.py", VIEWS_PY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::configuration::{RawOptions, resolve};

    #[test]
    fn serializer_uses_extended_fields_with_custom_user() {
        let cfg = resolve(RawOptions::new("p").with_api(true));
        let s = serializers(&cfg);
        assert!(s.content.contains("'bio', 'birth_date', 'phone', 'address', 'role'"));
        assert!(s.content.contains("get_user_model()"));
    }

    #[test]
    fn minimal_serializer_lists_builtin_fields() {
        assert!(MINIMAL_SERIALIZER.contains("'first_name', 'last_name'"));
        assert!(!MINIMAL_SERIALIZER.contains("bio"));
    }

    #[test]
    fn routes_mount_users_and_auth() {
        let u = urls(&resolve(RawOptions::new("p").with_api(true)));
        assert!(u.content.contains("router.register(r'users', views.UserViewSet)"));
        assert!(u.content.contains("include('djoser.urls')"));
    }

    #[test]
    fn view_restricts_non_staff_to_self() {
        assert!(VIEWS_PY.contains("if self.request.user.is_staff:"));
        assert!(VIEWS_PY.contains("filter(id=self.request.user.id)"));
    }
}
