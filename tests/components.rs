// ABOUTME: Integration tests for listing, installing and checking components.
// ABOUTME: Runs the component manager against an in-memory runtime.

mod support;

use srcd_engine::components::{
    ComponentError, ComponentErrorKind, ComponentManager, Filter, ListOptions, Registry, filter,
};
use support::fake_runtime::{Call, FakeRuntime};

fn manager(runtime: FakeRuntime) -> ComponentManager<FakeRuntime> {
    support::init_tracing();
    ComponentManager::new(runtime, Registry::default())
}

mod listing {
    use super::*;

    #[tokio::test]
    async fn keeps_owned_images_in_runtime_order() {
        let m = manager(FakeRuntime::new().with_images(&[
            &["srcd/gitbase:latest"],
            &["other/thing:1.0"],
            &["bblfsh/bblfshd:v2"],
        ]));

        let listed = m.list(&[]).await.unwrap();
        assert_eq!(listed, ["srcd/gitbase:latest", "bblfsh/bblfshd:v2"]);
    }

    #[tokio::test]
    async fn untagged_images_are_skipped() {
        let m = manager(
            FakeRuntime::new().with_images(&[&[], &["pilosa/pilosa:v0.9.0"], &[]]),
        );

        let listed = m.list(&[]).await.unwrap();
        assert_eq!(listed, ["pilosa/pilosa:v0.9.0"]);
    }

    #[tokio::test]
    async fn only_first_tag_is_considered() {
        let m = manager(FakeRuntime::new().with_images(&[
            &["library/nginx:latest", "srcd/gitbase:latest"],
            &["srcd/gitbase-web:v0.1", "other/web:v0.1"],
        ]));

        let listed = m.list(&[]).await.unwrap();
        assert_eq!(listed, ["srcd/gitbase-web:v0.1"]);
    }

    #[tokio::test]
    async fn filters_narrow_the_owned_set() {
        let m = manager(FakeRuntime::new().with_images(&[
            &["srcd/gitbase:latest"],
            &["srcd/cli-daemon:v0.1"],
            &["bblfsh/bblfshd:v2"],
        ]));

        let filters: Vec<Filter> = vec![
            filter::in_namespace("srcd"),
            filter::known_component(Registry::default()),
        ];
        let listed = m.list(&filters).await.unwrap();
        assert_eq!(listed, ["srcd/gitbase:latest"]);
    }

    #[tokio::test]
    async fn version_option_keeps_matching_tags() {
        let m = manager(FakeRuntime::new().with_images(&[
            &["srcd/gitbase:latest"],
            &["pilosa/pilosa:v0.9.0"],
            &["srcd/gitbase-web:v0.9.0"],
            &["other/thing:v0.9.0"],
        ]));

        let options = ListOptions {
            version: Some("v0.9.0".to_string()),
            ..Default::default()
        };
        let listed = m.list(&options.into_filters(Registry::default())).await.unwrap();
        assert_eq!(listed, ["pilosa/pilosa:v0.9.0", "srcd/gitbase-web:v0.9.0"]);
    }

    #[tokio::test]
    async fn runtime_failure_is_a_query_error() {
        let m = manager(FakeRuntime::new().fail_on(Call::ListImages));

        let err = m.list(&[]).await.unwrap_err();
        assert_eq!(err.kind(), ComponentErrorKind::RuntimeQuery);
        assert!(err.to_string().starts_with("could not list components"));
        assert!(std::error::Error::source(&err).is_some());
    }
}

mod install {
    use super::*;

    #[tokio::test]
    async fn pulls_with_explicit_version() {
        let m = manager(FakeRuntime::new());

        m.install("srcd/gitbase:v0.17.0").await.unwrap();

        assert_eq!(m.runtime().calls(), [Call::pull("srcd/gitbase", "v0.17.0")]);
        assert_eq!(m.runtime().image_tags(), ["srcd/gitbase:v0.17.0"]);
    }

    #[tokio::test]
    async fn version_defaults_to_latest() {
        let m = manager(FakeRuntime::new());

        m.install("bblfsh/bblfshd").await.unwrap();

        assert_eq!(m.runtime().calls(), [Call::pull("bblfsh/bblfshd", "latest")]);
    }

    #[tokio::test]
    async fn foreign_image_is_rejected_without_runtime_call() {
        let m = manager(FakeRuntime::new());

        let err = m.install("notowned/x").await.unwrap_err();
        assert!(matches!(err, ComponentError::NotOwned(ref id) if id == "notowned/x"));
        assert_eq!(err.kind(), ComponentErrorKind::NotOwned);
        assert!(m.runtime().calls().is_empty());
    }

    #[tokio::test]
    async fn pull_failure_is_propagated_unwrapped() {
        let m = manager(FakeRuntime::new().fail_on(Call::pull("srcd/gitbase", "latest")));

        let err = m.install("srcd/gitbase").await.unwrap_err();
        assert_eq!(err.kind(), ComponentErrorKind::RuntimeMutation);
        assert_eq!(err.to_string(), "pull failed: srcd/gitbase:latest");
        // No retry.
        assert_eq!(m.runtime().calls().len(), 1);
    }
}

mod status {
    use super::*;

    #[tokio::test]
    async fn reports_present_image() {
        let m = manager(FakeRuntime::new().with_images(&[&["pilosa/pilosa:v0.9.0"]]));

        assert!(m.is_installed("pilosa/pilosa:v0.9.0").await.unwrap());
        assert!(!m.is_installed("pilosa/pilosa").await.unwrap());
        assert_eq!(
            m.runtime().calls(),
            [
                Call::exists("pilosa/pilosa", "v0.9.0"),
                Call::exists("pilosa/pilosa", "latest"),
            ]
        );
    }

    #[tokio::test]
    async fn foreign_image_is_rejected_without_runtime_call() {
        let m = manager(FakeRuntime::new());

        let err = m.is_installed("notowned/x").await.unwrap_err();
        assert_eq!(err.kind(), ComponentErrorKind::NotOwned);
        assert!(m.runtime().calls().is_empty());
    }

    #[tokio::test]
    async fn installed_after_install() {
        let m = manager(FakeRuntime::new());
        let reference = m.registry().resolve("srcd-cli-pilosa").into_owned();

        assert!(!m.is_installed(&reference).await.unwrap());
        m.install(&reference).await.unwrap();
        assert!(m.is_installed(&reference).await.unwrap());
    }

    #[test]
    fn working_dir_dependants_come_from_registry() {
        let m = manager(FakeRuntime::new());
        assert!(m.is_working_dir_dependant("srcd-cli-gitbase"));
        assert!(!m.is_working_dir_dependant("srcd-cli-gitbase-web"));
        assert!(!m.is_working_dir_dependant("nginx"));
    }
}

mod custom_registry {
    use super::*;
    use srcd_engine::components::{Component, Ownership};

    const WEB: Component = Component::new("acme-web", "acme/web");
    const ACME: Registry = Registry::new(Ownership::new(&["acme"], "acme-"), &[WEB], &[]);

    #[tokio::test]
    async fn ownership_follows_injected_registry() {
        let m = ComponentManager::new(
            FakeRuntime::new().with_images(&[&["acme/web:1"], &["srcd/gitbase:latest"]]),
            ACME,
        );

        assert_eq!(m.list(&[]).await.unwrap(), ["acme/web:1"]);
        assert!(m.install("srcd/gitbase").await.is_err());
        assert!(!m.is_working_dir_dependant("acme-web"));
    }
}
