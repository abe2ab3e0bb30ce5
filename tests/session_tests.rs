mod common;

#[cfg(test)]
pub mod session_tests {
    use std::sync::Arc;

    use super::common::*;

    use nbuyit_client::common::*;
    use nbuyit_client::frontend::components::NavCluster;
    use nbuyit_client::services::*;

    #[test]
    fn test_auth_context_starts_signed_out() {
        let _owner = reactive_owner();
        let auth = AuthContext::new(Arc::new(MemoryStore::new()));

        assert!(!auth.is_authenticated());
        assert_eq!(auth.token(), None);
    }

    #[test]
    fn test_auth_context_restores_persisted_token() {
        let _owner = reactive_owner();
        let store = MemoryStore::new();
        store.set(AUTH_TOKEN_KEY, "persisted").unwrap();

        let auth = AuthContext::new(Arc::new(store));

        assert!(auth.is_authenticated());
        assert_eq!(auth.token().as_deref(), Some("persisted"));
    }

    #[test]
    fn test_auth_context_ignores_empty_persisted_token() {
        let _owner = reactive_owner();
        let store = MemoryStore::new();
        store.set(AUTH_TOKEN_KEY, "").unwrap();

        let auth = AuthContext::new(Arc::new(store));

        assert!(!auth.is_authenticated());
    }

    #[test]
    fn test_auth_context_survives_unavailable_storage() {
        let _owner = reactive_owner();
        let auth = AuthContext::new(Arc::new(LocalStore));

        assert!(!auth.is_authenticated());
    }

    #[tokio::test]
    async fn test_auth_context_login_success() {
        let _owner = reactive_owner();
        let auth = AuthContext::new(Arc::new(MemoryStore::new()));

        auth.login(TOKEN).await.expect("token accepted");

        assert!(auth.is_authenticated());
        assert_eq!(auth.token().as_deref(), Some(TOKEN));
    }

    #[tokio::test]
    async fn test_auth_context_login_fails_on_empty_token() {
        let _owner = reactive_owner();
        let auth = AuthContext::new(Arc::new(MemoryStore::new()));

        assert_eq!(auth.login("").await, Err(SessionError::EmptyToken));
        assert!(!auth.is_authenticated());
    }

    #[tokio::test]
    async fn test_auth_context_logout_clears_storage() {
        let _owner = reactive_owner();
        let store = MemoryStore::new();
        store.set(AUTH_TOKEN_KEY, TOKEN).unwrap();
        store.set(USER_KEY, "{}").unwrap();
        let auth = AuthContext::new(Arc::new(store.clone()));
        assert!(auth.is_authenticated());

        auth.logout().expect("storage writable");

        assert!(!auth.is_authenticated());
        assert!(store.is_empty());
    }

    #[test]
    fn test_local_store_unavailable_outside_browser() {
        assert_eq!(LocalStore.get(AUTH_TOKEN_KEY), Err(StorageError::Unavailable));
        assert_eq!(LocalStore.set(AUTH_TOKEN_KEY, TOKEN), Err(StorageError::Unavailable));
    }

    #[test]
    fn test_memory_store_shared_between_clones() {
        let store = MemoryStore::new();
        let clone = store.clone();

        clone.set(USER_KEY, "{\"id\":1}").unwrap();
        assert_eq!(store.get(USER_KEY).unwrap().as_deref(), Some("{\"id\":1}"));

        store.remove(USER_KEY).unwrap();
        assert!(clone.is_empty());
    }

    #[test]
    fn test_nav_cluster_follows_authentication() {
        assert_eq!(NavCluster::for_session(true), NavCluster::Account);
        assert_eq!(NavCluster::for_session(false), NavCluster::SignIn);
    }

    #[tokio::test]
    async fn test_nav_cluster_tracks_login() {
        let _owner = reactive_owner();
        let auth = AuthContext::new(Arc::new(MemoryStore::new()));
        assert_eq!(NavCluster::for_session(auth.is_authenticated()), NavCluster::SignIn);

        auth.login(TOKEN).await.unwrap();
        assert_eq!(NavCluster::for_session(auth.is_authenticated()), NavCluster::Account);

        auth.logout().unwrap();
        assert_eq!(NavCluster::for_session(auth.is_authenticated()), NavCluster::SignIn);
    }
}
